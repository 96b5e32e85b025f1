// benches/odds.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nba_props::{
    config::options::Category,
    merge::merge,
    odds::best_odds,
    records::{BetSide, L10Record, OddsQuote},
};

/// 400 players × 6 books × both sides, deterministic prices.
fn synthetic_quotes() -> Vec<OddsQuote> {
    let mut out = Vec::new();
    for p in 0..400u32 {
        let player = format!("Player {p:03}");
        let line = 5.5 + (p % 25) as f64;
        for book in 0..6u32 {
            let swing = ((p * 7 + book * 13) % 40) as f64;
            out.push(OddsQuote { side: BetSide::Over, player: player.clone(), price: -130.0 + swing, line: Some(line) });
            out.push(OddsQuote { side: BetSide::Under, player: player.clone(), price: 100.0 - swing, line: Some(line) });
        }
    }
    out
}

fn bench_odds(c: &mut Criterion) {
    let quotes = synthetic_quotes();

    c.bench_function("best_odds_2400_quotes", |b| {
        b.iter(|| {
            let best = best_odds(black_box(&quotes));
            black_box(best.len())
        })
    });

    let best = best_odds(&quotes);
    let l10: Vec<L10Record> = (0..400u32)
        .step_by(2)
        .map(|p| L10Record::from_values(&format!("Player {p:03}"), &[10.0, 12.0, 14.0]))
        .collect();

    c.bench_function("merge_400_players", |b| {
        b.iter(|| {
            let rows = merge(black_box(&best), black_box(&l10), Category::Points);
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_odds);
criterion_main!(benches);
