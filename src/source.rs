use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

const BETSAPI_BASE: &str = "https://api.b365api.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Ended-game marker used by the upstream feed (`time_status` field).
pub const TIME_STATUS_ENDED: &str = "3";

/// One page of ended games for a single anchor team.
///
/// `Err` is the terminal failure signal for a page request; an empty `Vec`
/// means the feed has no more pages for this team.
pub trait GameSource {
    fn ended_games_page(&self, team_id: u64, page: u32) -> Result<Vec<GameRecord>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: u64,
    pub name: String,
}

/// Raw game record as delivered by the feed. Sides and score stay optional
/// here; the head-to-head filter decides what qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: String,
    pub time_status: String,
    pub home: Option<TeamRef>,
    pub away: Option<TeamRef>,
    pub ss: Option<String>,
    pub time: Option<String>,
}

pub struct BetsapiSource {
    client: Client,
    token: String,
    sport_id: u32,
}

impl BetsapiSource {
    pub fn new(token: String, sport_id: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            token,
            sport_id,
        })
    }
}

impl GameSource for BetsapiSource {
    fn ended_games_page(&self, team_id: u64, page: u32) -> Result<Vec<GameRecord>> {
        let url = format!(
            "{BETSAPI_BASE}/v1/events/ended?sport_id={}&token={}&team_id={team_id}&page={page}",
            self.sport_id, self.token
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .context("ended events request failed")?;
        let status = resp.status();
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            return Err(anyhow::anyhow!("http {status}: {body}"));
        }
        parse_ended_events_json(&body)
    }
}

#[derive(Debug, Deserialize)]
struct EndedEventsResponse {
    #[serde(default)]
    success: Option<i64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Vec<Value>,
}

pub fn parse_ended_events_json(raw: &str) -> Result<Vec<GameRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: EndedEventsResponse =
        serde_json::from_str(trimmed).context("invalid ended events json")?;
    if let Some(success) = resp.success {
        if success != 1 {
            let reason = resp.error.as_deref().unwrap_or("unspecified");
            return Err(anyhow::anyhow!("feed rejected request: {reason}"));
        }
    }

    let mut out = Vec::new();
    for item in &resp.results {
        if let Some(record) = parse_game_record(item) {
            out.push(record);
        }
    }
    Ok(out)
}

fn parse_game_record(v: &Value) -> Option<GameRecord> {
    let id = field_string(v, "id")?;
    let time_status = field_string(v, "time_status").unwrap_or_default();
    let home = v.get("home").and_then(parse_team_ref);
    let away = v.get("away").and_then(parse_team_ref);
    let ss = field_string(v, "ss");
    let time = field_string(v, "time");

    Some(GameRecord {
        id,
        time_status,
        home,
        away,
        ss,
        time,
    })
}

fn parse_team_ref(v: &Value) -> Option<TeamRef> {
    let id = match v.get("id")? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    let name = v
        .get("name")
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();
    Some(TeamRef { id, name })
}

// The feed mixes numeric and string encodings for the same fields.
fn field_string(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
