use std::env;

use belote_rs::games::belote::{
    AnnounceOutcome, BeloteError, BeloteGame, Card, GameOptions, GameState, Suit,
};
use colored::Colorize;
use enum_iterator::all;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const PLAYER_NAMES: [&str; 4] = ["North", "East", "South", "West"];

fn main() {
    init_tracing();
    let options = options_from_env();
    let rounds: usize = env::var("BELOTE_ROUNDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3);
    if let Err(err) = random_play(options, rounds) {
        error!(%err, "game aborted");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn options_from_env() -> GameOptions {
    let seed = env::var("BELOTE_SEED").ok().and_then(|s| s.parse().ok());
    let strict = env::var("BELOTE_STRICT_TURNS")
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    GameOptions {
        seed,
        enforce_turn_order: strict,
    }
}

fn print_card(card: &Card) -> String {
    let string = card.to_string();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => string.red().to_string(),
        Suit::Clubs | Suit::Spades => string.normal().to_string(),
    }
}

fn display_game(game: &BeloteGame) {
    for (seat, player) in game.players.iter().enumerate() {
        let hand: Vec<String> = player.hand.iter().map(print_card).collect();
        println!(
            "{} ({:?}) seat {}: {}",
            player.name.bold(),
            player.team,
            seat,
            hand.join(" ")
        );
        for announcement in game.announcements_for(seat) {
            println!(
                "    could announce {:?} for {}",
                announcement.announce_type, announcement.value
            );
        }
    }
}

/// Plays rounds with random legal moves and random announces
fn random_play(options: GameOptions, rounds: usize) -> Result<(), BeloteError> {
    let mut game = BeloteGame::with_options(&PLAYER_NAMES, options)?;
    let mut rng = StdRng::seed_from_u64(game.seed);
    game.start_game()?;
    info!(seed = game.seed, rounds, "random play");

    for _ in 0..rounds {
        let suits: Vec<Suit> = all::<Suit>().collect();
        if let Some(trump) = suits.choose(&mut rng) {
            game.select_trump_suit(trump.name())?;
        }
        println!("\n{} {}", "Round".bold(), game.round);
        display_game(&game);

        while game.state != GameState::RoundComplete {
            let seat = game.current_player;
            let moves = game.playable_cards(seat);
            let Some(card) = moves.choose(&mut rng) else {
                break;
            };
            let outcome = game.play_card(seat, card)?;
            if let Some(winner) = outcome.trick_winner {
                println!("trick to {}", game.players[winner].name);
            }
        }
        println!(
            "after tricks: team1 {} team2 {}",
            game.scores.team1, game.scores.team2
        );

        for seat in 0..PLAYER_NAMES.len() {
            let options = game.bidding_options();
            let Some(bid) = options.choose(&mut rng) else {
                break;
            };
            if let AnnounceOutcome::Resolved(winner) = game.handle_announce(seat, *bid)? {
                match winner {
                    Some(announce) => println!(
                        "{} wins the announce with {}",
                        game.players[announce.player_index].name, announce.value
                    ),
                    None => println!("everyone passed"),
                }
            }
        }
        println!(
            "{} team1 {} team2 {}",
            "score:".bold(),
            game.scores.team1,
            game.scores.team2
        );
    }
    Ok(())
}
