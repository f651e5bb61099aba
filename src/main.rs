use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snake_sim::game::{
    CameraConfig, DirectionIntent, Environment, GameSession, RelativeDirection, SessionConfig,
    SessionEvent,
};
use std::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_TICKS: u64 = 600;
const TICK_DT: f32 = 1.0 / 60.0;
const STEER_EVERY: u64 = 45;
const WORLD_HALF_EXTENT: f32 = 10.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed: u64 = env::var("SNAKE_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let ticks: u64 = env::var("SNAKE_TICKS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let camera_height: f32 = env::var("SNAKE_CAMERA_HEIGHT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| CameraConfig::default().height);

    let config = SessionConfig {
        seed,
        camera: CameraConfig {
            height: camera_height,
            ..CameraConfig::default()
        },
        ..SessionConfig::default()
    };

    tracing::info!(seed, ticks, "starting headless snake session");
    let mut session = GameSession::new(
        config.clone(),
        Environment::flat(Vec2::splat(WORLD_HALF_EXTENT)),
    )?;
    let mut steer_rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut reloads: u32 = 0;

    for tick in 0..ticks {
        // Stand-in for a player: nudge the snake every few ticks so it
        // wanders the playfield instead of driving straight off the edge.
        if tick % STEER_EVERY == 0 {
            let intent = match steer_rng.gen_range(0..3) {
                0 => RelativeDirection::Left,
                1 => RelativeDirection::Right,
                _ => RelativeDirection::Forward,
            };
            session.submit_intent(DirectionIntent::Relative(intent));
        }

        for event in session.tick(TICK_DT) {
            match event {
                SessionEvent::FoodEaten => {
                    tracing::info!(
                        tick,
                        segments = session.snake().segments().len(),
                        "food eaten"
                    );
                }
                SessionEvent::ReloadRequested => {
                    reloads += 1;
                    tracing::info!(tick, reloads, "snake died, reloading session");
                    session = GameSession::new(
                        config.clone(),
                        Environment::flat(Vec2::splat(WORLD_HALF_EXTENT)),
                    )?;
                }
            }
        }
    }

    let snapshot = session.snapshot();
    tracing::info!(
        reloads,
        segments = snapshot.snake.segments.len(),
        "session finished"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
