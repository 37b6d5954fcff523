pub mod announces;
pub mod cards;
pub mod config;
pub mod error;
pub mod game;

// Re-export the main types
pub use announces::{check_announces, Announce, AnnounceType, Announcement, Bid, BID_LADDER};
pub use cards::{create_deck, organize_hand, Card, Rank, Suit};
pub use config::GameOptions;
pub use error::BeloteError;
pub use game::{
    determine_winning_card, AnnounceOutcome, BeloteGame, GameState, PlayOutcome, Player, Scores,
    Team, TrickPlay,
};
