//! Headless companion simulation.
//!
//! Plays a short scripted session: the companion wakes up, follows the player,
//! fetches a health pack and later deploys as a turret while an enemy is in
//! sight. Order changes and events are logged; set `RUST_LOG=companion=debug`
//! (or `trace` for per-frame tree status) for more detail.

use anyhow::Result;
use companion::{CompanionBehavior, CompanionConfig, CompanionEvent, WorldView};
use glam::Vec3;

/// Times of the scripted commands, in seconds.
const WAKE_UP_AT: f32 = 1.0;
const FETCH_AT: f32 = 5.0;
const ENEMY_APPEARS_AT: f32 = 25.0;
const TURRET_AT: f32 = 27.0;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CompanionConfig::from_env()?;
    tracing::info!(frames = config.frames, delta = config.frame_delta, "starting simulation");

    let delta = config.frame_delta;
    let frames = config.frames;
    let mut companion = CompanionBehavior::new(config, Vec3::ZERO);

    for frame in 0..frames {
        let time = frame as f32 * delta;

        if crossed(time, delta, WAKE_UP_AT) {
            tracing::info!(time, "waking companion");
            companion.wake_up();
        }
        if crossed(time, delta, FETCH_AT) {
            let accepted = companion.request_fetch();
            tracing::info!(time, accepted, "fetch requested");
        }
        if crossed(time, delta, TURRET_AT) {
            let accepted = companion.request_turret();
            tracing::info!(time, accepted, "turret requested");
        }

        companion.observe(world_at(time));
        companion.update(delta);

        for event in companion.drain_events() {
            log_event(time, &event);
        }
    }

    tracing::info!(
        order = ?companion.order(),
        position = ?companion.position(),
        "simulation finished"
    );
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// True on the single frame during which `time` passes `mark`.
fn crossed(time: f32, delta: f32, mark: f32) -> bool {
    time <= mark && mark < time + delta
}

/// The player walks along +X; an enemy shows up ahead of them later on.
fn world_at(time: f32) -> WorldView {
    let player_position = Vec3::new(50.0 * time, 0.0, 0.0);
    let visible_enemy =
        (time >= ENEMY_APPEARS_AT).then(|| player_position + Vec3::new(0.0, 0.0, 800.0));

    WorldView {
        player_position,
        healing_station: Vec3::new(-1500.0, 0.0, 400.0),
        visible_enemy,
    }
}

fn log_event(time: f32, event: &CompanionEvent) {
    match event {
        CompanionEvent::OrderChanged { from, to } => {
            tracing::info!(time, ?from, ?to, "order changed");
        }
        CompanionEvent::PlaySound(sound) => {
            tracing::debug!(time, ?sound, "sound");
        }
        other => tracing::info!(time, event = ?other, "event"),
    }
}
