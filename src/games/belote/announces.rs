use enum_iterator::all;
use serde::{Deserialize, Serialize};

use super::cards::{hand_card_sorter, Card, Rank, Suit};

/// Point values a player may announce, lowest to highest
pub const BID_LADDER: [i32; 10] = [90, 100, 110, 120, 130, 140, 150, 160, 250, 270];

/// A bid as sent by the presentation layer: either the string "Pass" or a
/// number from the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BidRepr", into = "BidRepr")]
pub enum Bid {
    Pass,
    Points(i32),
}

impl Bid {
    /// Builds a bid from a slider value; 0 is a pass
    pub fn new(value: i32) -> Bid {
        match value {
            0 => Bid::Pass,
            points => Bid::Points(points),
        }
    }

    /// Pass counts as a zero bid
    pub fn value(&self) -> i32 {
        match self {
            Bid::Pass => 0,
            Bid::Points(points) => *points,
        }
    }

    pub fn is_on_ladder(&self) -> bool {
        match self {
            Bid::Pass | Bid::Points(0) => true,
            Bid::Points(points) => BID_LADDER.contains(points),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BidRepr {
    Points(i32),
    Word(PassWord),
}

#[derive(Serialize, Deserialize)]
enum PassWord {
    Pass,
}

impl From<BidRepr> for Bid {
    fn from(repr: BidRepr) -> Self {
        match repr {
            BidRepr::Points(points) => Bid::new(points),
            BidRepr::Word(PassWord::Pass) => Bid::Pass,
        }
    }
}

impl From<Bid> for BidRepr {
    fn from(bid: Bid) -> Self {
        match bid {
            Bid::Pass => BidRepr::Word(PassWord::Pass),
            Bid::Points(points) => BidRepr::Points(points),
        }
    }
}

/// A recorded bid; a value of 0 is a pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announce {
    pub player_index: usize,
    pub value: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AnnounceType {
    // King and Queen of trump
    Belote,
    Tierce,
    Quarte,
    Quinte,
    Carre,
}

/// A combination found in a hand, for display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(rename = "type")]
    pub announce_type: AnnounceType,
    pub value: i32,
    pub cards: Vec<Card>,
}

fn carre_value(rank: Rank) -> Option<i32> {
    match rank {
        Rank::Jack => Some(200),
        Rank::Nine => Some(150),
        Rank::Ace | Rank::Ten | Rank::King | Rank::Queen => Some(100),
        Rank::Seven | Rank::Eight => None,
    }
}

fn sequence_announce(length: usize) -> Option<(AnnounceType, i32)> {
    match length {
        0..=2 => None,
        3 => Some((AnnounceType::Tierce, 20)),
        4 => Some((AnnounceType::Quarte, 50)),
        _ => Some((AnnounceType::Quinte, 100)),
    }
}

/// Lists the combinations a hand holds
///
/// Belote needs a trump suit; sequences are runs of consecutive ranks in one
/// suit (7 through A); a carre is all four cards of a rank other than 7 or 8.
/// Nothing here changes the score.
pub fn check_announces(hand: &[Card], trump: Option<Suit>) -> Vec<Announcement> {
    let mut announcements: Vec<Announcement> = vec![];

    if let Some(trump) = trump {
        let pair: Vec<Card> = hand
            .iter()
            .filter(|c| c.suit == trump && (c.rank == Rank::King || c.rank == Rank::Queen))
            .copied()
            .collect();
        if pair.len() == 2 {
            announcements.push(Announcement {
                announce_type: AnnounceType::Belote,
                value: 20,
                cards: pair,
            });
        }
    }

    let mut suits: Vec<Suit> = all::<Suit>().collect();
    suits.sort_by_key(|s| s.sort_order());
    for suit in suits {
        let mut cards: Vec<Card> = hand.iter().filter(|c| c.suit == suit).copied().collect();
        cards.sort_by(hand_card_sorter);
        let mut run: Vec<Card> = vec![];
        for card in cards {
            let extends_run = run
                .last()
                .is_some_and(|last| card.rank as usize == last.rank as usize + 1);
            if !extends_run {
                push_sequence(&mut announcements, &run);
                run.clear();
            }
            run.push(card);
        }
        push_sequence(&mut announcements, &run);
    }

    for rank in all::<Rank>() {
        let Some(value) = carre_value(rank) else {
            continue;
        };
        let mut four: Vec<Card> = hand.iter().filter(|c| c.rank == rank).copied().collect();
        if four.len() == 4 {
            four.sort_by(hand_card_sorter);
            announcements.push(Announcement {
                announce_type: AnnounceType::Carre,
                value,
                cards: four,
            });
        }
    }

    announcements
}

fn push_sequence(announcements: &mut Vec<Announcement>, run: &[Card]) {
    if let Some((announce_type, value)) = sequence_announce(run.len()) {
        announcements.push(Announcement {
            announce_type,
            value,
            cards: run.to_vec(),
        });
    }
}
