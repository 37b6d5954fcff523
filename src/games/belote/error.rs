use thiserror::Error;

/// Errors raised by the Belote engine
///
/// Per-move errors (`InvalidMove`, `InvalidAnnounce`, `InvalidSuit`) leave the
/// game untouched so the caller can ask for another input. The rest signal a
/// broken invariant and abort the call that raised them.
#[derive(Debug, Error)]
pub enum BeloteError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("duplicate card detected in deck: {0}")]
    DuplicateCard(i32),
    #[error("duplicate cards in hand for player {0}")]
    DuplicateHand(String),
    #[error("not enough cards in deck to deal: {available} available, {needed} needed")]
    InsufficientCards { available: usize, needed: usize },
    #[error("invalid trump suit: {0}")]
    InvalidSuit(String),
    #[error("invalid move: {0}")]
    InvalidMove(String),
    #[error("invalid announce: {0}")]
    InvalidAnnounce(String),
    #[error("no card can win the current trick")]
    InvalidTrickState,
    #[error("round {0} still has cards to play")]
    RoundInProgress(u32),
    #[error("trick points were already added for round {0}")]
    ScoresAlreadyTallied(u32),
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
