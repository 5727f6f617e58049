use anyhow::Result;
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trackplan::convert::convert_dir;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure paths ──────────────────────────────────────────
    let mut args = env::args().skip(1);
    let input_dir = PathBuf::from(args.next().unwrap_or_else(|| "tables".to_string()));
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "events.json".to_string()));

    // ─── 3) convert ──────────────────────────────────────────────────
    let groups = convert_dir(&input_dir, &output_path)?;
    info!(groups, output = %output_path.display(), "all done");
    Ok(())
}
