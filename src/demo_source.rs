use anyhow::Result;
use chrono::Utc;
use rand::Rng;

use crate::source::{GameRecord, GameSource, TeamRef, TIME_STATUS_ENDED};

const DEMO_PAGES: u32 = 4;
const RECORDS_PER_PAGE: usize = 10;
const DAY_SECS: i64 = 86_400;

/// Offline stand-in for the live feed, for running without an API token.
///
/// Fabricates ended games anchored on the queried team, deliberately mixed
/// with records the head-to-head filter must reject: other opponents, games
/// still in progress, and missing scores. Pages run dry after a fixed count
/// so pagination always terminates.
pub struct DemoSource {
    rival: u64,
}

impl DemoSource {
    pub fn new(rival: u64) -> Self {
        Self { rival }
    }
}

impl GameSource for DemoSource {
    fn ended_games_page(&self, team_id: u64, page: u32) -> Result<Vec<GameRecord>> {
        if page == 0 || page > DEMO_PAGES {
            return Ok(Vec::new());
        }
        let mut rng = rand::thread_rng();
        let newest = Utc::now().timestamp();
        let mut out = Vec::with_capacity(RECORDS_PER_PAGE);

        for slot in 0..RECORDS_PER_PAGE {
            let idx = (page - 1) as usize * RECORDS_PER_PAGE + slot;
            // Roughly every third record is against the requested rival; the
            // rest are noise the filter should drop.
            let opponent = if idx % 3 == 0 {
                self.rival
            } else {
                900_000 + (idx as u64 % 7)
            };
            let (home_id, away_id) = if rng.gen_bool(0.5) {
                (team_id, opponent)
            } else {
                (opponent, team_id)
            };

            let time_status = if idx % 17 == 5 {
                "1".to_string()
            } else {
                TIME_STATUS_ENDED.to_string()
            };
            let ss = if idx % 13 == 7 {
                None
            } else {
                Some(format!(
                    "{}-{}",
                    rng.gen_range(85..135),
                    rng.gen_range(85..135)
                ))
            };

            out.push(GameRecord {
                id: format!("demo-{idx}"),
                time_status,
                home: Some(TeamRef {
                    id: home_id,
                    name: format!("Team {home_id}"),
                }),
                away: Some(TeamRef {
                    id: away_id,
                    name: format!("Team {away_id}"),
                }),
                ss,
                time: Some((newest - idx as i64 * DAY_SECS).to_string()),
            });
        }
        Ok(out)
    }
}
