use crossterm::style::Stylize;

use crate::h2h::{HeadToHead, StopReason};
use crate::source::GameRecord;
use crate::stats;

const FORM_WINDOWS: [usize; 2] = [5, 10];

pub fn render_report(outcome: &HeadToHead, team_a: (u64, &str), team_b: (u64, &str)) {
    render_stop_note(outcome);
    if outcome.games.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        format!(
            "Head-to-head: {} vs {} ({} games)",
            team_a.1,
            team_b.1,
            outcome.games.len()
        )
        .bold()
    );
    for game in &outcome.games {
        println!("  {}", game_line(game, team_a, team_b));
    }

    render_record(&outcome.games, team_a, team_b);
    render_spreads(&outcome.games, team_a);
    render_spreads(&outcome.games, team_b);
    render_form(&outcome.games, team_a, team_b);
    println!();
}

fn render_stop_note(outcome: &HeadToHead) {
    match (&outcome.stop, outcome.games.is_empty()) {
        (StopReason::SourceFailed(msg), true) => {
            println!("{} feed failed before any games were found: {msg}", warn_tag());
        }
        (StopReason::SourceFailed(msg), false) => {
            println!(
                "{} feed failed mid-fetch, reporting partial results: {msg}",
                warn_tag()
            );
        }
        (StopReason::Exhausted, true) => {
            println!(
                "{} these teams have no completed head-to-head games on the feed",
                info_tag()
            );
        }
        (StopReason::Exhausted, false) => {
            println!("{} feed exhausted before the requested count", info_tag());
        }
        (StopReason::PageLimit, _) => {
            println!("{} page ceiling reached before the requested count", info_tag());
        }
        (StopReason::TargetReached, _) => {}
    }
}

fn render_record(games: &[GameRecord], team_a: (u64, &str), team_b: (u64, &str)) {
    let record = stats::summarize(games, team_a.0);
    println!();
    println!("{}", "Record".bold());
    println!(
        "  {} {} - {} {}",
        team_a.1,
        record.wins.to_string().green(),
        record.opponent_wins.to_string().red(),
        team_b.1
    );
    println!(
        "  Avg margin: {} {:+.1} / {} {:+.1}",
        team_a.1, record.avg_margin, team_b.1, record.opponent_avg_margin
    );
    if record.skipped_scores > 0 {
        println!(
            "  {}",
            format!("({} games skipped: unreadable score)", record.skipped_scores).dark_grey()
        );
    }
}

fn render_spreads(games: &[GameRecord], team: (u64, &str)) {
    let lines = stats::covering_spreads(games, team.0);
    println!();
    println!("{}", format!("Covering spreads - {}", team.1).bold());
    if lines.is_empty() {
        println!("  {}", "none at 80%+".dark_grey());
        return;
    }
    for line in lines {
        println!(
            "  {:+6.1}  covered {}/{} ({:.0}%)",
            line.line,
            line.hits,
            line.total,
            line.hit_rate * 100.0
        );
    }
}

fn render_form(games: &[GameRecord], team_a: (u64, &str), team_b: (u64, &str)) {
    println!();
    println!("{}", "Recent form".bold());
    for team in [team_a, team_b] {
        let mut parts = Vec::new();
        for window in FORM_WINDOWS {
            let form = stats::recent_form(games, team.0, window);
            parts.push(format!("last {}: {} wins of {}", window, form.wins, form.considered));
        }
        println!("  {:<14} {}", team.1, parts.join(", "));
    }
}

fn game_line(game: &GameRecord, team_a: (u64, &str), team_b: (u64, &str)) -> String {
    let home = side_label(game.home.as_ref().map(|t| t.id), team_a, team_b);
    let away = side_label(game.away.as_ref().map(|t| t.id), team_a, team_b);
    let score = game.ss.as_deref().unwrap_or("no score");
    format!("{}  {home} {score} {away}", format_game_date(game.time.as_deref()))
}

fn side_label(side_id: Option<u64>, team_a: (u64, &str), team_b: (u64, &str)) -> String {
    match side_id {
        Some(id) if id == team_a.0 => team_a.1.to_string(),
        Some(id) if id == team_b.0 => team_b.1.to_string(),
        Some(id) => format!("team {id}"),
        None => "?".to_string(),
    }
}

fn format_game_date(raw: Option<&str>) -> String {
    let Some(secs) = raw.and_then(|s| s.trim().parse::<i64>().ok()) else {
        return "????-??-??".to_string();
    };
    match chrono::DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "????-??-??".to_string(),
    }
}

fn warn_tag() -> crossterm::style::StyledContent<&'static str> {
    "[WARN]".yellow().bold()
}

fn info_tag() -> crossterm::style::StyledContent<&'static str> {
    "[INFO]".cyan()
}
