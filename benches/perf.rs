use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use champgen_terminal::cards::build_player_cards;
use champgen_terminal::filter::{classify_value, filter_players};
use champgen_terminal::roster::seed_players;
use champgen_terminal::state::{FilterCriteria, PlayerRecord, Position};

fn large_roster() -> Vec<PlayerRecord> {
    let base = seed_players();
    let mut players = Vec::with_capacity(base.len() * 100);
    for copy in 0..100u32 {
        for player in &base {
            let mut clone = player.clone();
            clone.id = format!("{}-{copy}", player.id);
            clone.age = 16 + ((player.age as u32 + copy) % 20) as u8;
            clone.current_value = player.current_value + copy as u64 * 1_000_000;
            players.push(clone);
        }
    }
    players
}

fn bench_filter_players(c: &mut Criterion) {
    let players = large_roster();
    let criteria = FilterCriteria {
        position: Some(Position::Midfielder),
        age: 22,
        league: Some("La Liga".to_string()),
        budget_m: 150,
    };

    c.bench_function("filter_players", |b| {
        b.iter(|| {
            let result = filter_players(black_box(&players), black_box(&criteria));
            black_box(result.len());
        })
    });
}

fn bench_classify_value(c: &mut Criterion) {
    let players = large_roster();

    c.bench_function("classify_value", |b| {
        b.iter(|| {
            for player in &players {
                black_box(classify_value(
                    black_box(player.current_value),
                    black_box(player.predicted_value),
                ));
            }
        })
    });
}

fn bench_build_cards(c: &mut Criterion) {
    let players = large_roster();
    let criteria = FilterCriteria {
        position: None,
        age: 25,
        league: None,
        budget_m: 250,
    };
    let filtered = filter_players(&players, &criteria);

    c.bench_function("build_player_cards", |b| {
        b.iter(|| {
            let cards = build_player_cards(black_box(&filtered));
            black_box(cards.len());
        })
    });
}

criterion_group!(perf, bench_filter_players, bench_classify_value, bench_build_cards);
criterion_main!(perf);
