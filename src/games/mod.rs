pub mod belote;
