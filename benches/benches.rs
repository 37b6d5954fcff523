use belote_rs::{
    games::belote::{create_deck, BeloteGame, GameOptions, GameState},
    utils::fisher_yates_shuffle,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn belote_playthrough(seed: u64) {
    let mut game =
        BeloteGame::with_options(&["a", "b", "c", "d"], GameOptions::seeded(seed)).unwrap();
    game.start_game().unwrap();
    while game.state != GameState::RoundComplete {
        let seat = game.current_player;
        let card = *game.playable_cards(seat).first().unwrap();
        game.play_card(seat, &card).unwrap();
    }
}

fn bench_random_playthrough(c: &mut Criterion) {
    c.bench_function("belote_playthrough", |b| {
        b.iter(|| belote_playthrough(black_box(42)))
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("shuffle_deck", |b| {
        b.iter(|| {
            let mut deck = create_deck();
            fisher_yates_shuffle(&mut deck, &mut rng);
            black_box(deck)
        })
    });
}

criterion_group!(benches, bench_random_playthrough, bench_shuffle);
criterion_main!(benches);
