use std::{cmp::Ordering, fmt, str::FromStr};

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

use super::error::BeloteError;

pub const DECK_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Sequence, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Position of the suit when a hand is organized for display
    pub fn sort_order(&self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = BeloteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<Suit>()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BeloteError::InvalidSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Sequence, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Rank {
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// Base (non-trump) point value
    pub fn value(&self) -> i32 {
        match self {
            Rank::Seven => 0,
            Rank::Eight => 0,
            Rank::Nine => 14,
            Rank::Ten => 10,
            Rank::Jack => 20,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i32,
    pub suit: Suit,
    pub rank: Rank,
    pub value: i32,
}

impl Card {
    pub fn new(id: i32, suit: Suit, rank: Rank) -> Self {
        Card {
            id,
            suit,
            rank,
            value: rank.value(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit)
    }
}

/// Fresh, unshuffled 32 card deck
/// Suits in declaration order, ranks 7 through A, ids 0..32.
pub fn create_deck() -> Vec<Card> {
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    let mut id = 0;
    for suit in all::<Suit>() {
        for rank in all::<Rank>() {
            deck.push(Card::new(id, suit, rank));
            id += 1;
        }
    }
    deck
}

/// Clubs, diamonds, hearts, spades; then 7 through A
pub fn hand_card_sorter(a: &Card, b: &Card) -> Ordering {
    match a.suit.sort_order().cmp(&b.suit.sort_order()) {
        Ordering::Equal => a.rank.cmp(&b.rank),
        ordering => ordering,
    }
}

pub fn organize_hand(hand: &mut [Card]) {
    hand.sort_by(hand_card_sorter);
}
