use glam::DVec3;
use scene_merge::math::{rotate_x, rotate_y, rotate_z, RigidTransform};

#[cfg(test)]
mod rigid_transform_tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_leaves_coordinates_unchanged() {
        let transform = RigidTransform::new(DVec3::ZERO, DVec3::ZERO);
        let v = DVec3::new(73.1, 0.2, -5.0);
        assert_eq!(transform.apply(v), v);
    }

    #[test]
    fn test_x_rotation_sends_y_to_z() {
        let transform = RigidTransform::from_rotation(DVec3::new(90.0, 0.0, 0.0));
        assert_close(transform.apply(DVec3::Y), DVec3::Z);
    }

    #[test]
    fn test_y_rotation_sends_z_to_x() {
        let transform = RigidTransform::from_rotation(DVec3::new(0.0, 90.0, 0.0));
        assert_close(transform.apply(DVec3::Z), DVec3::X);
    }

    #[test]
    fn test_z_rotation_sends_x_to_y() {
        let transform = RigidTransform::from_rotation(DVec3::new(0.0, 0.0, 90.0));
        assert_close(transform.apply(DVec3::X), DVec3::Y);
    }

    #[test]
    fn test_axes_compose_x_then_y_then_z() {
        // (0,1,0) --X90--> (0,0,1) --Y90--> (1,0,0); applying Y before X
        // would leave the vertex on the Y axis instead.
        let transform = RigidTransform::from_rotation(DVec3::new(90.0, 90.0, 0.0));
        assert_close(transform.apply(DVec3::Y), DVec3::X);
    }

    #[test]
    fn test_translation_happens_before_rotation() {
        let transform = RigidTransform::new(DVec3::X, DVec3::new(0.0, 0.0, 90.0));
        assert_close(transform.apply(DVec3::ZERO), DVec3::Y);
    }

    #[test]
    fn test_translation_only() {
        let transform = RigidTransform::from_translation(DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(
            transform.apply(DVec3::new(0.5, 0.5, 0.5)),
            DVec3::new(1.5, -1.5, 3.5)
        );
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let transform = RigidTransform::from_translation(DVec3::X);
        let vertices = vec![DVec3::ZERO, DVec3::Y, DVec3::Z];
        let moved = transform.apply_all(&vertices);
        assert_eq!(moved[0], DVec3::X);
        assert_eq!(moved[1], DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(moved[2], DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_elementary_rotations_are_right_handed() {
        assert!((rotate_x(DVec3::Y, 90f64.to_radians()) - DVec3::Z).length() < EPS);
        assert!((rotate_y(DVec3::Z, 90f64.to_radians()) - DVec3::X).length() < EPS);
        assert!((rotate_z(DVec3::X, 90f64.to_radians()) - DVec3::Y).length() < EPS);
    }

    #[test]
    fn test_full_turn_returns_home() {
        let transform = RigidTransform::from_rotation(DVec3::new(360.0, 0.0, 0.0));
        let v = DVec3::new(0.0, 2.0, 3.0);
        assert_close(transform.apply(v), v);
    }
}
