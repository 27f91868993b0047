use contest_score::config::ScoringConfig;
use contest_score::counter::ScoreCounter;
use contest_score::cty::CtyResolver;
use contest_score::score::BandScore;
use contest_score::types::{Band, Contact};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Deserialize)]
struct LogEntry {
    call: String,
    #[serde(default)]
    band: Option<String>,
    #[serde(default)]
    freq_khz: Option<u32>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn parse_args() -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if !arg.starts_with("--") {
            return Err(format!("unexpected argument {arg}"));
        }
        let key = arg.trim_start_matches("--").to_string();
        let val = args
            .next()
            .ok_or_else(|| format!("missing value for --{key}"))?;
        map.insert(key, val);
    }
    Ok(map)
}

fn required<'a>(args: &'a HashMap<String, String>, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .map(String::as_str)
        .ok_or_else(|| format!("--{key} is required"))
}

fn entry_band(entry: &LogEntry) -> Option<Band> {
    entry
        .band
        .as_deref()
        .and_then(Band::from_label)
        .or_else(|| entry.freq_khz.and_then(Band::from_khz))
}

fn print_line(label: &str, score: &BandScore) {
    println!(
        "{label:>8} qsos={:<5} points={:<6} cq={:<3} itu={:<3} dxcc={:<4} mults={}",
        score.qsos(),
        score.points,
        score.cq_zones,
        score.itu_zones,
        score.prefixes,
        score.multis
    );
}

fn main() -> Result<(), String> {
    init_tracing();
    let args = parse_args()?;
    let config = ScoringConfig::from_path(required(&args, "config")?).map_err(|e| e.to_string())?;
    let resolver = CtyResolver::from_file(required(&args, "cty")?).map_err(|e| e.to_string())?;
    let my_call = required(&args, "my-call")?;
    let own = resolver
        .resolve(my_call)
        .ok_or_else(|| format!("my call not resolvable from cty: {my_call}"))?;

    let log_raw =
        fs::read_to_string(required(&args, "log")?).map_err(|e| format!("failed reading log: {e}"))?;
    let entries: Vec<LogEntry> =
        serde_json::from_str(&log_raw).map_err(|e| format!("log parse error: {e}"))?;

    let mut counter = ScoreCounter::new(config);
    counter.set_own_entity(own);

    let mut skipped = 0usize;
    for entry in &entries {
        let Some(band) = entry_band(entry) else {
            tracing::warn!(call = entry.call.as_str(), "no usable band or frequency, skipping");
            skipped += 1;
            continue;
        };
        let entity = resolver.resolve_or_default(&entry.call);
        counter.add(&Contact::new(&entry.call, band, entity));
    }

    println!("Scoring complete");
    println!("Records: {}", entries.len());
    println!("Skipped: {skipped}");
    for (band, score) in counter.bands() {
        print_line(band.label(), &score);
    }
    print_line("total", &counter.total());
    print_line("overall", &counter.overall());

    Ok(())
}
