use std::fs;
use std::path::PathBuf;

use h2h_terminal::h2h::qualifies;
use h2h_terminal::source::{TIME_STATUS_ENDED, parse_ended_events_json};
use h2h_terminal::stats;

const LAKERS: u64 = 172186;
const CELTICS: u64 = 172150;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_ended_events_fixture() {
    let raw = read_fixture("ended_events.json");
    let records = parse_ended_events_json(&raw).expect("fixture should parse");
    assert_eq!(records.len(), 4);

    let first = &records[0];
    assert_eq!(first.id, "5001");
    assert_eq!(first.time_status, TIME_STATUS_ENDED);
    assert_eq!(first.home.as_ref().unwrap().id, LAKERS);
    assert_eq!(first.home.as_ref().unwrap().name, "Los Angeles Lakers");
    assert_eq!(first.away.as_ref().unwrap().id, CELTICS);
    assert_eq!(first.ss.as_deref(), Some("112-104"));
    assert_eq!(first.time.as_deref(), Some("1738368000"));

    // Null score stays absent rather than becoming a string.
    assert!(records[3].ss.is_none());
}

#[test]
fn filter_admits_the_pair_in_both_orientations() {
    let raw = read_fixture("ended_events.json");
    let records = parse_ended_events_json(&raw).expect("fixture should parse");
    let admitted: Vec<_> = records
        .iter()
        .filter(|r| qualifies(r, LAKERS, CELTICS))
        .collect();

    // 5003 is against the Suns and still in progress; everything else counts,
    // including the score-less 5004.
    assert_eq!(admitted.len(), 3);
    assert!(admitted.iter().all(|r| r.id != "5003"));
}

#[test]
fn fixture_pipeline_end_to_end() {
    let raw = read_fixture("ended_events.json");
    let records = parse_ended_events_json(&raw).expect("fixture should parse");
    let games: Vec<_> = records
        .into_iter()
        .filter(|r| qualifies(r, LAKERS, CELTICS))
        .collect();

    let record = stats::summarize(&games, LAKERS);
    assert_eq!(record.wins, 2);
    assert_eq!(record.opponent_wins, 0);
    assert_eq!(record.skipped_scores, 1);
    assert!((record.avg_margin - 5.0).abs() < f64::EPSILON);
    assert!((record.opponent_avg_margin + 5.0).abs() < f64::EPSILON);

    // Margins +8 and +2: only threshold 1.5 covers both games; every higher
    // threshold loses the +2 win and drops to 50%.
    let lines = stats::covering_spreads(&games, LAKERS);
    assert_eq!(lines.len(), 1);
    assert!((lines[0].line + 1.5).abs() < 1e-9);
    assert_eq!(lines[0].hits, 2);
    assert_eq!(lines[0].total, 2);
    assert!((lines[0].hit_rate - 1.0).abs() < f64::EPSILON);

    let form = stats::recent_form(&games, LAKERS, 10);
    assert_eq!(form.considered, 3);
    assert_eq!(form.wins, 2);
}

#[test]
fn empty_results_parse_to_nothing() {
    let records = parse_ended_events_json(r#"{"success":1,"results":[]}"#).unwrap();
    assert!(records.is_empty());
}
