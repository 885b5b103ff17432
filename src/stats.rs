use std::cmp::Ordering;

use crate::source::GameRecord;

/// Minimum historical hit rate for a spread line to be worth reporting.
const COVER_RATE_FLOOR: f64 = 0.80;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadRecord {
    pub wins: usize,
    pub opponent_wins: usize,
    pub avg_margin: f64,
    pub opponent_avg_margin: f64,
    /// Admitted games whose score could not be parsed. They count toward
    /// neither column nor the averages.
    pub skipped_scores: usize,
}

/// Win/loss record and average margin from `team`'s perspective.
///
/// A zero margin counts as an opponent win; there is no draw bucket.
pub fn summarize(games: &[GameRecord], team: u64) -> HeadToHeadRecord {
    let mut wins = 0usize;
    let mut opponent_wins = 0usize;
    let mut margins: Vec<i64> = Vec::new();
    let mut skipped = 0usize;

    for game in games {
        let Some(margin) = signed_margin(game, team) else {
            skipped += 1;
            continue;
        };
        if margin > 0 {
            wins += 1;
        } else {
            opponent_wins += 1;
        }
        margins.push(margin);
    }

    let avg_margin = if margins.is_empty() {
        0.0
    } else {
        margins.iter().sum::<i64>() as f64 / margins.len() as f64
    };

    HeadToHeadRecord {
        wins,
        opponent_wins,
        avg_margin,
        // The opponent's average is the exact negation, not recomputed.
        opponent_avg_margin: -avg_margin,
        skipped_scores: skipped,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadLine {
    /// Reported as the negated half-integer threshold: "lose by no more
    /// than X" framing.
    pub line: f64,
    pub hits: usize,
    pub total: usize,
    pub hit_rate: f64,
}

/// Every half-integer spread line between the worst and best observed margin
/// that `team` covered in at least 80% of its games, best hit rate first.
pub fn covering_spreads(games: &[GameRecord], team: u64) -> Vec<SpreadLine> {
    let margins: Vec<i64> = games
        .iter()
        .filter_map(|game| signed_margin(game, team))
        .collect();
    if margins.is_empty() {
        return Vec::new();
    }

    let lo = margins.iter().copied().min().unwrap_or(0);
    let hi = margins.iter().copied().max().unwrap_or(0);
    let total = margins.len();

    let mut lines = Vec::new();
    for threshold in (lo - 1)..=hi {
        let half_line = threshold as f64 + 0.5;
        let hits = margins.iter().filter(|&&m| (m as f64) > half_line).count();
        let hit_rate = hits as f64 / total as f64;
        if hit_rate >= COVER_RATE_FLOOR {
            lines.push(SpreadLine {
                line: -half_line,
                hits,
                total,
                hit_rate,
            });
        }
    }

    // Stable sort: equal hit rates stay in ascending-threshold order.
    lines.sort_by(|a, b| {
        b.hit_rate
            .partial_cmp(&a.hit_rate)
            .unwrap_or(Ordering::Equal)
    });
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormWindow {
    pub wins: usize,
    pub considered: usize,
}

/// Wins over the first `last_n` games of the supplied order (most recent
/// first, as the feed delivers them). The denominator is fixed by position:
/// a tie or unparseable score inside the window stays counted in
/// `considered`.
pub fn recent_form(games: &[GameRecord], team: u64, last_n: usize) -> FormWindow {
    let considered = last_n.min(games.len());
    let mut wins = 0usize;
    for game in &games[..considered] {
        if signed_margin(game, team).is_some_and(|margin| margin > 0) {
            wins += 1;
        }
    }
    FormWindow { wins, considered }
}

/// Point differential from `team`'s perspective, or `None` when the score is
/// missing/malformed or `team` is on neither side.
pub fn signed_margin(game: &GameRecord, team: u64) -> Option<i64> {
    let home = game.home.as_ref()?;
    let away = game.away.as_ref()?;
    let (home_score, away_score) = parse_score(game.ss.as_deref()?)?;
    if home.id == team {
        Some(home_score - away_score)
    } else if away.id == team {
        Some(away_score - home_score)
    } else {
        None
    }
}

pub fn parse_score(raw: &str) -> Option<(i64, i64)> {
    let (home, away) = raw.trim().split_once('-')?;
    let home = home.trim().parse::<i64>().ok()?;
    let away = away.trim().parse::<i64>().ok()?;
    Some((home, away))
}
