use super::constants::{
    CAMERA_HEIGHT, FIRST_PERSON_OFFSET, FIRST_PERSON_THRESHOLD, POSITION_SMOOTH_SPEED,
    ROTATION_SMOOTH_SPEED,
};
use super::math::{look_rotation, smoothing_factor};
use super::types::{CameraPose, HeadState};
use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Height above the head. At or below `first_person_threshold` the
    /// camera switches to the near/first-person framing.
    pub height: f32,
    pub first_person_offset: Vec3,
    pub first_person_threshold: f32,
    pub position_smooth_speed: f32,
    pub rotation_smooth_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: CAMERA_HEIGHT,
            first_person_offset: Vec3::from_array(FIRST_PERSON_OFFSET),
            first_person_threshold: FIRST_PERSON_THRESHOLD,
            position_smooth_speed: POSITION_SMOOTH_SPEED,
            rotation_smooth_speed: ROTATION_SMOOTH_SPEED,
        }
    }
}

impl CameraConfig {
    fn is_valid(&self) -> bool {
        self.height.is_finite()
            && self.first_person_offset.is_finite()
            && self.first_person_threshold.is_finite()
            && self.position_smooth_speed.is_finite()
            && self.position_smooth_speed > 0.0
            && self.rotation_smooth_speed.is_finite()
            && self.rotation_smooth_speed > 0.0
    }
}

/// Chase camera for the snake head. Above the height threshold it frames the
/// head top-down with the view "up" aligned to the travel direction, so the
/// frame turns with the snake instead of staying world-locked; at or below
/// the threshold it rides just behind the head looking along the travel
/// direction.
#[derive(Debug)]
pub struct FollowCamera {
    config: CameraConfig,
    pose: CameraPose,
    enabled: bool,
    initialized: bool,
}

impl FollowCamera {
    /// A camera with a broken configuration reports the problem once and
    /// disables itself instead of faulting the session.
    pub fn new(config: CameraConfig) -> Self {
        let enabled = config.is_valid();
        if !enabled {
            tracing::error!(?config, "invalid camera configuration, camera disabled");
        }
        Self {
            config,
            pose: CameraPose {
                position: Vec3::ZERO,
                rotation: glam::Quat::IDENTITY,
            },
            enabled,
            initialized: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pose(&self) -> Option<&CameraPose> {
        self.enabled.then_some(&self.pose)
    }

    /// Recomputes the desired pose from the head and moves toward it. The
    /// first update snaps directly; later ones smooth position and rotation
    /// at their configured rates.
    pub fn update(&mut self, head: &HeadState, snake_direction: Vec3, dt: f32) {
        if !self.enabled {
            return;
        }

        let mut forward = snake_direction.normalize_or_zero();
        if forward == Vec3::ZERO {
            forward = (head.rotation * Vec3::Z).normalize_or_zero();
        }
        if forward == Vec3::ZERO {
            forward = Vec3::Z;
        }

        let (desired_position, desired_rotation) =
            if self.config.height <= self.config.first_person_threshold {
                let position = head.position + head.rotation * self.config.first_person_offset;
                let rotation = look_rotation(forward, head.rotation * Vec3::Y);
                (position, rotation)
            } else {
                let position = head.position + Vec3::Y * self.config.height;
                let mut down = (head.position - position).normalize_or_zero();
                if down == Vec3::ZERO {
                    down = -Vec3::Y;
                }
                (position, look_rotation(down, forward))
            };

        if !self.initialized {
            self.pose = CameraPose {
                position: desired_position,
                rotation: desired_rotation,
            };
            self.initialized = true;
            return;
        }

        let position_factor = smoothing_factor(self.config.position_smooth_speed, dt);
        let rotation_factor = smoothing_factor(self.config.rotation_smooth_speed, dt);
        self.pose.position = self.pose.position.lerp(desired_position, position_factor);
        self.pose.rotation = self.pose.rotation.slerp(desired_rotation, rotation_factor);
    }
}
