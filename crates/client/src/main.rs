//! Crowd arena binary.
//!
//! Composition root: reads configuration, installs logging, builds a
//! [`Session`] from a scenario, then wires stdin votes in and events out.
//!
//! ```bash
//! # Pipe a chat relay in and watch the text feed
//! chat-relay | cargo run -p crowd-arena
//!
//! # Custom arena, JSON events for an overlay
//! ARENA_SCENARIO=crates/client/scenarios/gauntlet.ron ARENA_EVENT_FORMAT=json \
//!     cargo run -p crowd-arena
//! ```
mod config;
mod feed;
mod logging;
mod presenter;

use anyhow::{Context, Result};
use runtime::{Scenario, Session};

use config::ArenaConfig;
use presenter::Presenter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ArenaConfig::from_env();

    // 2. Setup logging
    logging::setup_logging()?;

    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::default(),
    };
    tracing::info!(
        scenario = ?config.scenario,
        countdown_ms = config.runtime.timing.countdown.as_millis() as u64,
        format = ?config.event_format,
        "starting crowd arena"
    );

    // 3. Build the session and attach input and output
    let session = Session::builder()
        .config(config.runtime.clone())
        .scenario(scenario)
        .build()
        .context("arena failed to start")?;
    let handle = session.handle();

    let presenter = Presenter::new(&handle, config.event_format, std::io::stdout());
    let presenter = tokio::spawn(presenter.run());
    let feed = tokio::spawn(feed::run(handle));

    // 4. Run to victory or defeat
    let outcome = session.wait().await?;
    feed.abort();
    presenter.await??;

    tracing::info!(%outcome, "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn bundled(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("scenarios")
            .join(name)
    }

    #[test]
    fn lane_file_matches_the_built_in_arena() {
        let scenario = Scenario::load(&bundled("lane.ron")).unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn bundled_scenarios_build() {
        let state = Scenario::load(&bundled("gauntlet.ron"))
            .unwrap()
            .build_state()
            .unwrap();
        assert_eq!(state.roster().len(), 3);
        state.check_invariants().unwrap();
    }
}
