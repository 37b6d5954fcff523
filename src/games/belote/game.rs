/*
Game: Belote
Four players in two fixed partnerships (seats 0 & 2 against 1 & 3), 32 card
deck, trick play with an optional trump suit and a round of point announces.
*/

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::announces::{check_announces, Announce, Announcement, Bid, BID_LADDER};
use super::cards::{create_deck, organize_hand, Card, Suit};
use super::config::GameOptions;
use super::error::BeloteError;
use crate::utils::{derive_round_seed, first_duplicate, fisher_yates_shuffle};

pub const PLAYER_COUNT: usize = 4;
pub const HAND_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    #[default]
    // Fresh deal, waiting for announces
    Bidding,
    // At least one card of the round has been played
    Play,
    // Every hand is empty and trick points have been added
    RoundComplete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Team {
    Team1,
    Team2,
}

impl Team {
    /// Partners sit opposite each other
    pub fn for_seat(seat: usize) -> Team {
        if seat % 2 == 0 {
            Team::Team1
        } else {
            Team::Team2
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub team1: i32,
    pub team2: i32,
}

impl Scores {
    pub fn get(&self, team: Team) -> i32 {
        match team {
            Team::Team1 => self.team1,
            Team::Team2 => self.team2,
        }
    }

    pub fn add(&mut self, team: Team, points: i32) {
        match team {
            Team::Team1 => self.team1 += points,
            Team::Team2 => self.team2 += points,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub team: Team,
    pub hand: Vec<Card>,
    pub tricks_won: Vec<Card>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrickPlay {
    pub card: Card,
    pub player_index: usize,
}

/// What a successful `play_card` call changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayOutcome {
    pub trick_completed: bool,
    pub trick_winner: Option<usize>,
    pub round_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceOutcome {
    // Fewer than four announces recorded
    Pending,
    // All four announced; holds the winning bid (None when everyone passed)
    // and a new round has been dealt
    Resolved(Option<Announce>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BeloteGame {
    // Seats 0 - 3; even seats are team1
    pub players: Vec<Player>,
    // Undealt cards for the current round
    pub deck: Vec<Card>,
    // Suit that outranks every other suit, if one was selected
    pub trump_suit: Option<Suit>,
    // Seat expected to act next
    pub current_player: usize,
    // Bids recorded during the current bidding phase
    pub announces: Vec<Announce>,
    pub scores: Scores,
    // Cards on the table for the trick in progress
    pub current_trick: Vec<TrickPlay>,
    // Every card played this round in play order
    pub played_cards: Vec<TrickPlay>,
    pub state: GameState,
    // Rounds dealt so far, 0 before the first deal
    pub round: u32,
    // Base seed; each round shuffles with a seed derived from it
    pub seed: u64,
    // Set once the round's trick points are in the score
    pub trick_points_tallied: bool,
    pub options: GameOptions,
}

impl BeloteGame {
    pub fn new<S: AsRef<str>>(player_names: &[S]) -> Result<Self, BeloteError> {
        Self::with_options(player_names, GameOptions::default())
    }

    pub fn with_options<S: AsRef<str>>(
        player_names: &[S],
        options: GameOptions,
    ) -> Result<Self, BeloteError> {
        if player_names.len() != PLAYER_COUNT {
            return Err(BeloteError::Configuration(format!(
                "Belote requires exactly {} players, got {}",
                PLAYER_COUNT,
                player_names.len()
            )));
        }
        let players = player_names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player {
                name: name.as_ref().to_string(),
                team: Team::for_seat(seat),
                hand: vec![],
                tricks_won: vec![],
            })
            .collect();
        let seed = options.seed.unwrap_or_else(rand::random);
        Ok(BeloteGame {
            players,
            deck: create_deck(),
            trump_suit: None,
            current_player: 0,
            announces: vec![],
            scores: Scores::default(),
            current_trick: vec![],
            played_cards: vec![],
            state: GameState::Bidding,
            round: 0,
            seed,
            trick_points_tallied: false,
            options,
        })
    }

    pub fn start_game(&mut self) -> Result<(), BeloteError> {
        info!(seed = self.seed, "starting game");
        self.start_new_round()
    }

    // Called at the start of a game and whenever the announces resolve.
    // The next deal is built in full before any field changes, so a failed
    // deal leaves the previous round in place.
    pub fn start_new_round(&mut self) -> Result<(), BeloteError> {
        let round = self.round + 1;
        let mut deck = create_deck();
        check_unique_ids(&deck)?;
        shuffle_for_round(&mut deck, self.seed, round);
        let hands = deal_hands(&mut deck, &self.players)?;

        self.round = round;
        self.deck = deck;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
            player.tricks_won.clear();
        }
        self.announces.clear();
        self.current_trick.clear();
        self.played_cards.clear();
        self.current_player = 0;
        self.trick_points_tallied = false;
        self.state = GameState::Bidding;
        info!(round = self.round, "dealt new round");
        Ok(())
    }

    pub fn validate_deck_unique(&self) -> Result<(), BeloteError> {
        check_unique_ids(&self.deck)
    }

    pub fn shuffle_deck(&mut self) {
        shuffle_for_round(&mut self.deck, self.seed, self.round);
    }

    /// Moves 8 cards from the front of the deck into each hand, seat order
    ///
    /// Deck and hands are untouched when the deal fails.
    pub fn deal_cards(&mut self) -> Result<(), BeloteError> {
        let hands = deal_hands(&mut self.deck, &self.players)?;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        Ok(())
    }

    pub fn select_trump_suit(&mut self, suit: &str) -> Result<Suit, BeloteError> {
        let trump = suit.parse::<Suit>().inspect_err(|_| {
            warn!(suit, "rejected trump selection");
        })?;
        self.trump_suit = Some(trump);
        info!(trump = trump.name(), "trump selected");
        Ok(trump)
    }

    pub fn team_of(&self, player_index: usize) -> Team {
        Team::for_seat(player_index)
    }

    /// Plays `card` (matched by id) from the given seat's hand
    ///
    /// A card that is not in the hand, a seat that already played to this
    /// trick, or (with `enforce_turn_order`) a seat other than
    /// `current_player` is rejected with `InvalidMove` and the game is left
    /// as it was.
    pub fn play_card(
        &mut self,
        player_index: usize,
        card: &Card,
    ) -> Result<PlayOutcome, BeloteError> {
        let Some(player) = self.players.get(player_index) else {
            warn!(player_index, "play from unknown seat");
            return Err(BeloteError::InvalidMove(format!(
                "no player at seat {player_index}"
            )));
        };
        if self.options.enforce_turn_order && player_index != self.current_player {
            warn!(player_index, current_player = self.current_player, "play out of turn");
            return Err(BeloteError::InvalidMove(format!(
                "it is seat {}'s turn, not seat {player_index}'s",
                self.current_player
            )));
        }
        if self
            .current_trick
            .iter()
            .any(|play| play.player_index == player_index)
        {
            warn!(player_index, "seat already played to this trick");
            return Err(BeloteError::InvalidMove(format!(
                "seat {player_index} already played to this trick"
            )));
        }
        let Some(position) = player.hand.iter().position(|c| c.id == card.id) else {
            warn!(player_index, card = %card, "card not in hand");
            return Err(BeloteError::InvalidMove(format!(
                "{card} is not in {}'s hand",
                player.name
            )));
        };

        let card = self.players[player_index].hand.remove(position);
        let play = TrickPlay { card, player_index };
        self.current_trick.push(play);
        self.played_cards.push(play);
        self.state = GameState::Play;
        debug!(player_index, card = %card, "card played");

        if self.current_trick.len() == PLAYER_COUNT {
            return self.resolve_trick();
        }
        self.current_player = (player_index + 1) % PLAYER_COUNT;
        Ok(PlayOutcome::default())
    }

    /// Cards the seat may follow with: the lead suit when it holds any,
    /// otherwise the whole hand. Advisory; `play_card` does not check it.
    pub fn playable_cards(&self, player_index: usize) -> Vec<Card> {
        let Some(player) = self.players.get(player_index) else {
            return vec![];
        };
        if let Some(lead) = self.current_trick.first() {
            let follows: Vec<Card> = player
                .hand
                .iter()
                .filter(|c| c.suit == lead.card.suit)
                .copied()
                .collect();
            if !follows.is_empty() {
                return follows;
            }
        }
        player.hand.clone()
    }

    pub fn determine_winning_card(&self) -> Result<TrickPlay, BeloteError> {
        determine_winning_card(&self.current_trick, self.trump_suit)
    }

    fn resolve_trick(&mut self) -> Result<PlayOutcome, BeloteError> {
        let winner = self.determine_winning_card()?;
        let cards = self.current_trick.drain(..).map(|play| play.card);
        self.players[winner.player_index].tricks_won.extend(cards);
        // winner of the trick leads
        self.current_player = winner.player_index;
        debug!(
            winner = winner.player_index,
            card = %winner.card,
            "trick won"
        );

        let round_complete = self.players.iter().all(|p| p.hand.is_empty());
        if round_complete {
            self.state = GameState::RoundComplete;
            self.calculate_scores()?;
        }
        Ok(PlayOutcome {
            trick_completed: true,
            trick_winner: Some(winner.player_index),
            round_complete,
        })
    }

    /// Adds the value of every captured card to its taker's team
    ///
    /// Runs by itself when the last trick of a round resolves; it can only
    /// add a round's points once, and only after every card has been played.
    pub fn calculate_scores(&mut self) -> Result<Scores, BeloteError> {
        if self.trick_points_tallied {
            return Err(BeloteError::ScoresAlreadyTallied(self.round));
        }
        if !self.current_trick.is_empty() || self.players.iter().any(|p| !p.hand.is_empty()) {
            return Err(BeloteError::RoundInProgress(self.round));
        }
        let mut round_points = Scores::default();
        for player in &self.players {
            let points: i32 = player.tricks_won.iter().map(|c| c.value).sum();
            round_points.add(player.team, points);
        }
        self.scores.add(Team::Team1, round_points.team1);
        self.scores.add(Team::Team2, round_points.team2);
        self.trick_points_tallied = true;
        info!(
            round = self.round,
            team1 = round_points.team1,
            team2 = round_points.team2,
            "round scored"
        );
        Ok(round_points)
    }

    /// Records a bid; the fourth one resolves the bidding
    pub fn handle_announce(
        &mut self,
        player_index: usize,
        bid: Bid,
    ) -> Result<AnnounceOutcome, BeloteError> {
        if player_index >= self.players.len() {
            warn!(player_index, "announce from unknown seat");
            return Err(BeloteError::InvalidAnnounce(format!(
                "no player at seat {player_index}"
            )));
        }
        if !bid.is_on_ladder() {
            warn!(player_index, value = bid.value(), "announce off the ladder");
            return Err(BeloteError::InvalidAnnounce(format!(
                "{} is not a valid announce",
                bid.value()
            )));
        }
        if self
            .announces
            .iter()
            .any(|announce| announce.player_index == player_index)
        {
            warn!(player_index, "seat already announced");
            return Err(BeloteError::InvalidAnnounce(format!(
                "seat {player_index} already announced"
            )));
        }

        self.announces.push(Announce {
            player_index,
            value: bid.value(),
        });
        debug!(player_index, value = bid.value(), "announce recorded");

        if self.announces.len() == PLAYER_COUNT {
            return match self.resolve_announces() {
                Ok(highest) => Ok(AnnounceOutcome::Resolved(highest)),
                Err(err) => {
                    // the bid that triggered a failed redeal is not kept
                    self.announces.pop();
                    Err(err)
                }
            };
        }
        Ok(AnnounceOutcome::Pending)
    }

    /// Deals the next round, then credits the highest bid to its team
    pub fn resolve_announces(&mut self) -> Result<Option<Announce>, BeloteError> {
        let highest = highest_announce(&self.announces);
        self.start_new_round()?;
        match highest {
            Some(announce) => {
                let team = self.team_of(announce.player_index);
                self.scores.add(team, announce.value);
                info!(
                    player_index = announce.player_index,
                    value = announce.value,
                    ?team,
                    "announce won"
                );
            }
            None => info!("every player passed"),
        }
        Ok(highest)
    }

    pub fn bidding_options(&self) -> Vec<Bid> {
        let mut bids: Vec<Bid> = BID_LADDER.iter().map(|&v| Bid::Points(v)).collect();
        bids.push(Bid::Pass);
        bids
    }

    pub fn announcements_for(&self, player_index: usize) -> Vec<Announcement> {
        match self.players.get(player_index) {
            Some(player) => check_announces(&player.hand, self.trump_suit),
            None => vec![],
        }
    }

    pub fn to_json(&self) -> Result<String, BeloteError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, BeloteError> {
        let game: BeloteGame = serde_json::from_str(json)?;
        game.check_seating()?;
        Ok(game)
    }

    // Seat numbers in a restored game must point at real seats and teams
    // must follow seat parity, or play and scoring disagree about who is who
    fn check_seating(&self) -> Result<(), BeloteError> {
        if self.players.len() != PLAYER_COUNT {
            return Err(BeloteError::Configuration(format!(
                "snapshot has {} players",
                self.players.len()
            )));
        }
        if self.current_player >= PLAYER_COUNT {
            return Err(BeloteError::Configuration(format!(
                "snapshot current player {} is not a seat",
                self.current_player
            )));
        }
        for (seat, player) in self.players.iter().enumerate() {
            if player.team != Team::for_seat(seat) {
                return Err(BeloteError::Configuration(format!(
                    "{} at seat {seat} is on {:?}",
                    player.name, player.team
                )));
            }
        }
        let seats = self
            .current_trick
            .iter()
            .map(|play| play.player_index)
            .chain(self.announces.iter().map(|announce| announce.player_index));
        for seat in seats {
            if seat >= PLAYER_COUNT {
                return Err(BeloteError::Configuration(format!(
                    "snapshot refers to seat {seat}"
                )));
            }
        }
        Ok(())
    }
}

/// Winner of a trick
///
/// Trump cards compete when any were played, otherwise cards of the lead
/// suit. Highest value wins; on equal values the earlier play wins.
pub fn determine_winning_card(
    trick: &[TrickPlay],
    trump: Option<Suit>,
) -> Result<TrickPlay, BeloteError> {
    let lead_suit = trick
        .first()
        .ok_or(BeloteError::InvalidTrickState)?
        .card
        .suit;
    let winning_suit = match trump {
        Some(trump) if trick.iter().any(|play| play.card.suit == trump) => trump,
        _ => lead_suit,
    };
    let mut winner: Option<TrickPlay> = None;
    for play in trick.iter().filter(|play| play.card.suit == winning_suit) {
        match winner {
            Some(best) if play.card.value <= best.card.value => {}
            _ => winner = Some(*play),
        }
    }
    winner.ok_or(BeloteError::InvalidTrickState)
}

fn check_unique_ids(deck: &[Card]) -> Result<(), BeloteError> {
    match first_duplicate(deck, |card| card.id) {
        Some(id) => Err(BeloteError::DuplicateCard(id)),
        None => Ok(()),
    }
}

fn shuffle_for_round(deck: &mut [Card], seed: u64, round: u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(derive_round_seed(seed, round));
    fisher_yates_shuffle(deck, &mut rng);
}

// Sorted hands from the front of the deck, one per player. The deck only
// loses its cards once every hand checks out.
fn deal_hands(
    deck: &mut Vec<Card>,
    players: &[Player],
) -> Result<Vec<Vec<Card>>, BeloteError> {
    let needed = players.len() * HAND_SIZE;
    if deck.len() < needed {
        return Err(BeloteError::InsufficientCards {
            available: deck.len(),
            needed,
        });
    }
    let mut hands = Vec::with_capacity(players.len());
    for (player, chunk) in players.iter().zip(deck[..needed].chunks(HAND_SIZE)) {
        let mut hand = chunk.to_vec();
        organize_hand(&mut hand);
        if first_duplicate(&hand, |card| card.id).is_some() {
            return Err(BeloteError::DuplicateHand(player.name.clone()));
        }
        hands.push(hand);
    }
    deck.drain(..needed);
    Ok(hands)
}

/// Highest non-pass bid; the earliest announcer wins ties
pub fn highest_announce(announces: &[Announce]) -> Option<Announce> {
    let mut highest: Option<Announce> = None;
    for announce in announces.iter().filter(|a| a.value > 0) {
        match highest {
            Some(best) if announce.value <= best.value => {}
            _ => highest = Some(*announce),
        }
    }
    highest
}
