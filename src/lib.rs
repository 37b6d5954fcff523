pub mod games;
pub mod utils;
