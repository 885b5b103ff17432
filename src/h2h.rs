use crate::source::{GameRecord, GameSource, TIME_STATUS_ENDED};

pub const DEFAULT_TARGET_GAMES: usize = 10;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub target_games: usize,
    /// Ceiling on pages visited. `None` keeps paging until the feed runs dry,
    /// which never terminates against a feed that keeps returning
    /// non-matching pages.
    pub max_pages: Option<u32>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_games: DEFAULT_TARGET_GAMES,
            max_pages: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    TargetReached,
    /// The feed returned an empty page: these two teams have no more games.
    Exhausted,
    PageLimit,
    /// A page request failed; whatever was collected before it is kept.
    SourceFailed(String),
}

#[derive(Debug)]
pub struct HeadToHead {
    /// Qualifying games in feed order (most recent first).
    pub games: Vec<GameRecord>,
    pub stop: StopReason,
}

/// Walk the feed page by page, anchored on `team_a`, and keep completed games
/// between exactly `team_a` and `team_b` until `target_games` is reached.
pub fn collect_head_to_head(
    source: &dyn GameSource,
    team_a: u64,
    team_b: u64,
    cfg: &FetchConfig,
) -> HeadToHead {
    let mut games: Vec<GameRecord> = Vec::new();
    let mut page: u32 = 1;

    loop {
        if games.len() >= cfg.target_games {
            return HeadToHead {
                games,
                stop: StopReason::TargetReached,
            };
        }
        if let Some(max) = cfg.max_pages {
            if page > max {
                return HeadToHead {
                    games,
                    stop: StopReason::PageLimit,
                };
            }
        }

        let records = match source.ended_games_page(team_a, page) {
            Ok(records) => records,
            Err(err) => {
                return HeadToHead {
                    games,
                    stop: StopReason::SourceFailed(err.to_string()),
                };
            }
        };
        if records.is_empty() {
            return HeadToHead {
                games,
                stop: StopReason::Exhausted,
            };
        }

        for record in records {
            if games.len() >= cfg.target_games {
                break;
            }
            if qualifies(&record, team_a, team_b) {
                games.push(record);
            }
        }
        page += 1;
    }
}

/// A record qualifies when both sides are present, the game has ended, and
/// the sides are exactly the requested pair (in either orientation).
pub fn qualifies(record: &GameRecord, team_a: u64, team_b: u64) -> bool {
    let (Some(home), Some(away)) = (record.home.as_ref(), record.away.as_ref()) else {
        return false;
    };
    if record.time_status != TIME_STATUS_ENDED {
        return false;
    }
    (home.id == team_a && away.id == team_b) || (home.id == team_b && away.id == team_a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TeamRef;

    fn game(home_id: u64, away_id: u64, status: &str) -> GameRecord {
        GameRecord {
            id: format!("{home_id}v{away_id}"),
            time_status: status.to_string(),
            home: Some(TeamRef {
                id: home_id,
                name: String::new(),
            }),
            away: Some(TeamRef {
                id: away_id,
                name: String::new(),
            }),
            ss: Some("100-90".to_string()),
            time: None,
        }
    }

    #[test]
    fn qualifies_accepts_both_orientations() {
        assert!(qualifies(&game(1, 2, TIME_STATUS_ENDED), 1, 2));
        assert!(qualifies(&game(2, 1, TIME_STATUS_ENDED), 1, 2));
    }

    #[test]
    fn qualifies_rejects_wrong_pair_and_unfinished() {
        assert!(!qualifies(&game(1, 3, TIME_STATUS_ENDED), 1, 2));
        assert!(!qualifies(&game(3, 4, TIME_STATUS_ENDED), 1, 2));
        assert!(!qualifies(&game(1, 2, "1"), 1, 2));
    }

    #[test]
    fn qualifies_rejects_missing_side() {
        let mut rec = game(1, 2, TIME_STATUS_ENDED);
        rec.away = None;
        assert!(!qualifies(&rec, 1, 2));
    }
}
