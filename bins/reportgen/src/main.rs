//! Tanklog report generator.
//!
//! Reads a JSON fixture of depot records, runs the report engine, and writes
//! the renderer-facing report artifact as JSON.
//!
//! Usage: cargo run --bin reportgen -- <fixture.json>

mod fixture;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tanklog_core::report::{NoChartRenderer, ReportService};
use tanklog_shared::{AppConfig, AppError, AppResult};

use fixture::{FixtureStore, ReportFixture};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reportgen=info,tanklog_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let fixture = match read_fixture() {
        Ok(fixture) => fixture,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            std::process::exit(err.exit_code());
        }
    };
    info!(
        location = %fixture.location.name,
        fuel_in = fixture.fuel_in.len(),
        fuel_out = fixture.fuel_out.len(),
        "Fixture loaded"
    );

    let location_id = fixture.location.id;
    let start = fixture.start;
    let end = fixture.end;
    let excluded: HashSet<String> = fixture.excluded_units.iter().cloned().collect();
    let store = FixtureStore::new(fixture);

    let report =
        ReportService::generate(&store, &NoChartRenderer, location_id, start, end, &excluded)?;

    let pages: usize = report.statements.iter().map(|s| s.pages.len()).sum();
    info!(
        statements = report.statements.len(),
        pages,
        closing = %report.recap.totals.closing,
        "Report generated"
    );

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    fs::create_dir_all(&config.output.directory)?;
    let out_path = PathBuf::from(&config.output.directory).join(format!("report_{start}_{end}.json"));
    fs::write(&out_path, json)?;
    info!(path = %out_path.display(), "Report written");

    Ok(())
}

/// Resolves the fixture path from the command line and loads it.
fn read_fixture() -> AppResult<ReportFixture> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| AppError::Validation("usage: reportgen <fixture.json>".to_string()))?;
    fixture::load(&path)
}
