use clap::Parser;
use std::path::PathBuf;

/// Video trimmer demo over a synthetic asset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Trimmer config (JSON). Defaults to the per-user trimmer.json when present
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Length of the synthetic asset
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 120.0,
        value_parser = parse_seconds
    )]
    pub duration: f64,
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err("duration must be a non-negative number of seconds".into());
    }
    Ok(seconds)
}
