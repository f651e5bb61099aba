use glam::{Mat3, Quat, Vec3};

/// Quantizes an arbitrary horizontal direction to the dominant world cardinal
/// axis. Ties go to the Z axis.
pub fn snap_to_cardinal(direction: Vec3) -> Vec3 {
    if direction.x.abs() > direction.z.abs() {
        Vec3::new(direction.x.signum(), 0.0, 0.0)
    } else {
        Vec3::new(0.0, 0.0, direction.z.signum())
    }
}

/// Projects a vector onto the XZ plane and normalizes it. Returns zero when
/// the projection degenerates (e.g. a vector pointing straight up).
pub fn flatten_xz(v: Vec3) -> Vec3 {
    let flat = Vec3::new(v.x, 0.0, v.z);
    flat.normalize_or_zero()
}

/// Rotation that points local +Z along `forward` with `up` as the vertical
/// hint. Falls back to an alternate hint when `forward` is parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = up.cross(forward);
    if right.length_squared() < 1e-8 {
        let alt_up = if forward.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
        right = alt_up.cross(forward);
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Per-frame factor for lerp/slerp-toward-target smoothing: an exponential
/// decay step of `rate` per second, clamped so large timesteps land exactly
/// on the target instead of overshooting.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_picks_dominant_axis() {
        assert_eq!(snap_to_cardinal(Vec3::new(0.9, 0.0, 0.3)), Vec3::X);
        assert_eq!(snap_to_cardinal(Vec3::new(-0.9, 0.0, 0.3)), -Vec3::X);
        assert_eq!(snap_to_cardinal(Vec3::new(0.2, 0.0, -0.7)), -Vec3::Z);
    }

    #[test]
    fn snap_ties_go_to_z() {
        assert_eq!(snap_to_cardinal(Vec3::new(0.5, 0.0, 0.5)), Vec3::Z);
    }

    #[test]
    fn flatten_drops_vertical_component() {
        let flat = flatten_xz(Vec3::new(0.0, 3.0, 4.0));
        assert!((flat - Vec3::Z).length() < 1e-6);
        assert_eq!(flatten_xz(Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn look_rotation_points_z_along_forward() {
        let rotation = look_rotation(Vec3::X, Vec3::Y);
        let forward = rotation * Vec3::Z;
        assert!((forward - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn look_rotation_handles_straight_down() {
        let rotation = look_rotation(-Vec3::Y, Vec3::Z);
        let forward = rotation * Vec3::Z;
        assert!((forward + Vec3::Y).length() < 1e-5);
        let up = rotation * Vec3::Y;
        assert!((up - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn smoothing_factor_clamps_to_one() {
        assert_eq!(smoothing_factor(10.0, 1.0), 1.0);
        let partial = smoothing_factor(8.0, 0.016);
        assert!(partial > 0.0 && partial < 1.0);
    }
}
