use super::arena::EntityHandle;
use glam::{Quat, Vec3};
use serde::Serialize;

/// Pose of the lead entity. Owned by the snake body and mutated every tick.
/// The facing rotation is presentational only; movement and collision use
/// the raw position plus the controller's cardinal direction.
#[derive(Debug, Clone, Copy)]
pub struct HeadState {
    pub position: Vec3,
    pub rotation: Quat,
}

/// One trailing segment. Index order in the owning list is 0 = nearest head.
#[derive(Debug, Clone, Copy)]
pub struct BodySegment {
    pub position: Vec3,
    pub rotation: Quat,
    pub entity: EntityHandle,
}

/// The single active food item, replaced atomically on consumption.
#[derive(Debug, Clone, Copy)]
pub struct FoodItem {
    pub position: Vec3,
    pub entity: EntityHandle,
}

/// A camera position/orientation pair. The desired pose is recomputed each
/// frame; the actual pose lags behind it through smoothing.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// What killed the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    SelfCollision,
    GroundLost,
}

/// Events surfaced by a session tick for the embedding runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    FoodEaten,
    /// Emitted exactly once, on the Alive -> Dead transition.
    ReloadRequested,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnakeSnapshot {
    pub alive: bool,
    pub head: Vec3,
    pub direction: Vec3,
    pub segments: Vec<Vec3>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub snake: SnakeSnapshot,
    pub food: Option<Vec3>,
    pub camera: Option<Vec3>,
}
