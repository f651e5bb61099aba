use super::math::{flatten_xz, snap_to_cardinal};
use glam::{Quat, Vec3};

/// A discrete steering event. Relative intents are resolved through the
/// head's current heading before snapping; absolute intents snap directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectionIntent {
    Relative(RelativeDirection),
    Absolute(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDirection {
    Forward,
    Back,
    Left,
    Right,
}

/// Turns raw steering intents into the authoritative, cardinal-snapped
/// movement direction. At most one intent is pending per tick: later
/// submissions within the same tick overwrite earlier ones.
#[derive(Debug, Clone)]
pub struct DirectionController {
    current: Vec3,
    pending: Option<DirectionIntent>,
}

impl DirectionController {
    pub fn new(initial: Vec3) -> Self {
        let flat = flatten_xz(initial);
        let current = if flat == Vec3::ZERO {
            Vec3::Z
        } else {
            snap_to_cardinal(flat)
        };
        Self {
            current,
            pending: None,
        }
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    /// Stores an intent for the next resolve. Last writer wins.
    pub fn submit(&mut self, intent: DirectionIntent) {
        self.pending = Some(intent);
    }

    /// Consumes the pending intent, if any, and returns the direction the
    /// head should move this tick. An intent that would reverse straight
    /// into the body is rejected; reversal is allowed while no segments
    /// exist yet.
    pub fn resolve(&mut self, head_rotation: Quat, segment_count: usize) -> Vec3 {
        let Some(intent) = self.pending.take() else {
            return self.current;
        };

        let desired = match intent {
            DirectionIntent::Relative(relative) => {
                let mut forward = flatten_xz(head_rotation * Vec3::Z);
                if forward == Vec3::ZERO {
                    // Head is looking straight up or down; steer relative to
                    // the last accepted direction instead.
                    forward = self.current;
                }
                let right = Vec3::Y.cross(forward);
                match relative {
                    RelativeDirection::Forward => forward,
                    RelativeDirection::Back => -forward,
                    RelativeDirection::Left => -right,
                    RelativeDirection::Right => right,
                }
            }
            DirectionIntent::Absolute(raw) => flatten_xz(raw),
        };

        if desired == Vec3::ZERO {
            return self.current;
        }

        let snapped = snap_to_cardinal(desired);
        if snapped == -self.current && segment_count > 0 {
            tracing::trace!(?snapped, "reverse intent rejected");
            return self.current;
        }

        self.current = snapped;
        self.current
    }
}
