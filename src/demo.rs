//! Headless walkthrough of a full session.

use std::io::Write;

use anyhow::{Context, Result};
use cargo_bay_store::{Action, GameItem, GameStore};
use tracing::{info, instrument};

use crate::view;

/// Plays both missions without a terminal UI and writes a transcript.
///
/// The action log is printed as JSON, one action per line, so it can be
/// fed back to [`GameStore::replay`].
#[instrument(skip(out))]
pub fn run_demo<W: Write>(
    out: &mut W,
    containers: i64,
    seed: u64,
    target: GameItem,
) -> Result<GameStore> {
    let mut store = GameStore::with_seed(seed);

    store.dispatch(Action::StartGame)?;
    writeln!(out, "Phase: {}", store.state().phase())?;

    store
        .dispatch(Action::InitializeContainers { count: containers })
        .with_context(|| format!("Cannot declare a bay of {} containers", containers))?;
    writeln!(out, "\nDeclared {} containers:", containers)?;
    writeln!(out, "{}", view::array_block(store.state().containers()))?;

    store.dispatch(Action::RandomlyPlaceItems)?;
    writeln!(out, "\nAfter random placement:")?;
    writeln!(out, "{}", view::array_block(store.state().containers()))?;

    store.dispatch(Action::CompleteMission { mission: 1 })?;
    writeln!(
        out,
        "\nMission 1 complete. Phase: {}, score: {}",
        store.state().phase(),
        store.state().score()
    )?;

    let trace = store.search_trace(target);
    writeln!(out, "\n{}", view::trace_line(&trace))?;
    if trace.found.is_some() {
        store.dispatch(Action::CompleteMission { mission: 2 })?;
    }
    writeln!(
        out,
        "\nFinal phase: {}, score: {}, missions: {:?}",
        store.state().phase(),
        store.state().score(),
        store.state().completed_missions()
    )?;

    writeln!(out, "\nAction log:")?;
    for action in store.applied() {
        writeln!(out, "{}", serde_json::to_string(action)?)?;
    }

    info!(score = store.state().score(), "Demo finished");
    Ok(store)
}
