//! Twenty48 Demo
//!
//! Headless autoplay session driving the turn state machine one tick at a
//! time, then replaying the recorded moves to verify determinism.
//!
//! Usage: `twenty48-demo [config.json]`

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use twenty48::{
    TICK_RATE, VERSION,
    core::rng::derive_session_seed,
    game::{
        events::TurnEvent,
        grid::Grid,
        input::Direction,
        resolve::resolve,
        turn::{replay, TurnConfig, TurnState, TurnStateMachine},
    },
};

/// Demo configuration, read from an optional JSON file.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    /// Fixed seed; derived from the session id when absent
    seed: Option<u64>,
    /// Hard stop for the session
    max_ticks: u32,
    /// Progress log interval in ticks
    report_every: u32,
    /// Turn state machine settings
    turn: TurnConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 200_000,
            report_every: 600, // 10 seconds at 60 Hz
            turn: TurnConfig::default(),
        }
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {path}"))
}

/// Corner strategy: first direction in preference order that changes the grid.
fn pick_direction(grid: &Grid) -> Option<Direction> {
    const PREFERENCE: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    PREFERENCE
        .into_iter()
        .find(|&dir| resolve(grid, dir).grid != *grid)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Twenty48 Engine v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    demo_session(&config)
}

fn demo_session(config: &DemoConfig) -> anyhow::Result<()> {
    info!("=== Starting Demo Session ===");

    let session_id = Uuid::new_v4();
    let seed = config
        .seed
        .unwrap_or_else(|| derive_session_seed(session_id.as_bytes(), 0));

    info!("Session ID: {}", session_id);
    info!("RNG Seed: {}", seed);

    let mut machine = TurnStateMachine::new(seed, config.turn.clone());
    info!("Starting grid:\n{}", machine.current_grid());

    let mut spawns = 0u32;
    let mut last_report_tick = 0;

    while machine.tick() < config.max_ticks {
        if machine.current_state() == TurnState::Idle {
            if let Some(direction) = pick_direction(&machine.current_grid()) {
                machine.submit_direction(direction);
            }
        }

        for event in machine.advance() {
            match event {
                TurnEvent::TileSpawned { .. } => spawns += 1,
                TurnEvent::GameOver { tick, score, max_tile } => {
                    info!("Game over at tick {}: score {}, max tile {}", tick, score, max_tile);
                }
                _ => {}
            }
        }

        if machine.tick() - last_report_tick >= config.report_every {
            info!(
                "Tick {}: score {}, max tile {}, {} moves",
                machine.tick(),
                machine.score(),
                machine.current_grid().max_tile(),
                machine.input_log().len()
            );
            last_report_tick = machine.tick();
        }

        if machine.current_state() == TurnState::GameOver
            && machine.fade_level() >= machine.config().fade_max
        {
            break;
        }
    }

    if machine.current_state() != TurnState::GameOver {
        warn!("Tick limit {} reached before game over", config.max_ticks);
    }

    info!("=== Session Results ===");
    info!("Final grid:\n{}", machine.current_grid());
    info!("Score: {}", machine.score());
    info!("Moves: {}, spawns: {}", machine.input_log().len(), spawns);

    let snapshot = machine.snapshot();
    info!("Snapshot size: {} bytes", snapshot.to_bytes()?.len());

    let hash = machine.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replayed = replay(seed, config.turn.clone(), machine.input_log(), machine.tick());
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: replay hash differs");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    Ok(())
}
