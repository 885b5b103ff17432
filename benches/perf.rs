use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use h2h_terminal::source::{GameRecord, TIME_STATUS_ENDED, TeamRef, parse_ended_events_json};
use h2h_terminal::stats::{covering_spreads, recent_form, summarize};

fn sample_games(count: usize) -> Vec<GameRecord> {
    (0..count)
        .map(|i| {
            let margin = (i as i64 * 7) % 31 - 15;
            let (home, away, ss) = if i % 2 == 0 {
                (1u64, 2u64, format!("{}-{}", 108 + margin, 108))
            } else {
                (2, 1, format!("{}-{}", 108, 108 + margin))
            };
            GameRecord {
                id: format!("g{i}"),
                time_status: TIME_STATUS_ENDED.to_string(),
                home: Some(TeamRef {
                    id: home,
                    name: String::new(),
                }),
                away: Some(TeamRef {
                    id: away,
                    name: String::new(),
                }),
                ss: Some(ss),
                time: None,
            }
        })
        .collect()
}

fn bench_ended_events_parse(c: &mut Criterion) {
    c.bench_function("ended_events_parse", |b| {
        b.iter(|| {
            let records = parse_ended_events_json(black_box(ENDED_EVENTS_JSON)).unwrap();
            black_box(records.len());
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let games = sample_games(500);
    c.bench_function("summarize_500", |b| {
        b.iter(|| {
            let record = summarize(black_box(&games), black_box(1));
            black_box(record.wins);
        })
    });
}

fn bench_covering_spreads(c: &mut Criterion) {
    let games = sample_games(500);
    c.bench_function("covering_spreads_500", |b| {
        b.iter(|| {
            let lines = covering_spreads(black_box(&games), black_box(1));
            black_box(lines.len());
        })
    });
}

fn bench_recent_form(c: &mut Criterion) {
    let games = sample_games(500);
    c.bench_function("recent_form_500", |b| {
        b.iter(|| {
            let form = recent_form(black_box(&games), black_box(1), black_box(10));
            black_box(form.wins);
        })
    });
}

criterion_group!(
    perf,
    bench_ended_events_parse,
    bench_summarize,
    bench_covering_spreads,
    bench_recent_form
);
criterion_main!(perf);

static ENDED_EVENTS_JSON: &str = include_str!("../tests/fixtures/ended_events.json");
