use std::env;
use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use h2h_terminal::demo_source::DemoSource;
use h2h_terminal::h2h::{self, FetchConfig};
use h2h_terminal::report;
use h2h_terminal::source::{BetsapiSource, GameSource};
use h2h_terminal::teams;

const DEFAULT_SPORT_ID: u32 = 18;
const MAX_TARGET_GAMES: usize = 100;

enum SourceMode {
    Betsapi,
    Demo,
}

struct AppConfig {
    mode: SourceMode,
    token: Option<String>,
    sport_id: u32,
    max_pages: Option<u32>,
    default_target: usize,
}

impl AppConfig {
    fn from_env() -> Self {
        let token = env::var("H2H_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        let requested = env::var("H2H_SOURCE")
            .unwrap_or_else(|_| "auto".to_string())
            .to_lowercase();
        let mode = match requested.as_str() {
            "betsapi" => SourceMode::Betsapi,
            "demo" => SourceMode::Demo,
            _ => {
                if token.is_some() {
                    SourceMode::Betsapi
                } else {
                    SourceMode::Demo
                }
            }
        };
        let sport_id = env::var("H2H_SPORT_ID")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(DEFAULT_SPORT_ID);
        // 0 (the default) keeps the original unbounded paging.
        let max_pages = env::var("H2H_MAX_PAGES")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|&pages| pages > 0);
        let default_target = env::var("H2H_TARGET_GAMES")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(h2h::DEFAULT_TARGET_GAMES)
            .clamp(1, MAX_TARGET_GAMES);
        Self {
            mode,
            token,
            sport_id,
            max_pages,
            default_target,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = AppConfig::from_env();

    let betsapi = match cfg.mode {
        SourceMode::Betsapi => {
            let Some(token) = cfg.token.clone() else {
                anyhow::bail!("H2H_SOURCE=betsapi requires H2H_API_TOKEN");
            };
            Some(BetsapiSource::new(token, cfg.sport_id)?)
        }
        SourceMode::Demo => {
            println!(
                "{} no API token configured, using the offline demo feed",
                "[INFO]".cyan()
            );
            None
        }
    };

    println!(
        "{}",
        "h2h terminal - head-to-head records, covering spreads and recent form".bold()
    );
    println!("Enter two team names (q to quit).");

    loop {
        let Some(name_a) = prompt("Team 1")? else {
            break;
        };
        if name_a.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(id_a) = teams::team_id(&name_a) else {
            print_unknown(&name_a);
            continue;
        };

        let Some(name_b) = prompt("Team 2")? else {
            break;
        };
        if name_b.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(id_b) = teams::team_id(&name_b) else {
            print_unknown(&name_b);
            continue;
        };
        if id_a == id_b {
            println!("{} pick two different teams", "[WARN]".yellow().bold());
            continue;
        }

        let target = match prompt(&format!("Games to analyze [{}]", cfg.default_target))? {
            None => break,
            Some(raw) if raw.is_empty() => cfg.default_target,
            Some(raw) => match raw.parse::<usize>() {
                Ok(count) if count >= 1 => count.min(MAX_TARGET_GAMES),
                _ => {
                    println!("{} not a usable count: {raw}", "[WARN]".yellow().bold());
                    continue;
                }
            },
        };

        let fetch_cfg = FetchConfig {
            target_games: target,
            max_pages: cfg.max_pages,
        };
        let demo;
        let source: &dyn GameSource = match betsapi.as_ref() {
            Some(live) => live,
            None => {
                demo = DemoSource::new(id_b);
                &demo
            }
        };
        let outcome = h2h::collect_head_to_head(source, id_a, id_b, &fetch_cfg);
        report::render_report(&outcome, (id_a, &name_a), (id_b, &name_b));
    }

    Ok(())
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        // EOF: treat like quit.
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_unknown(name: &str) {
    println!("{} unknown team: {name}", "[WARN]".yellow().bold());
    println!("  known teams: {}", teams::known_teams().join(", "));
}
