#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use nalgebra::{Point3, Vector3};
    use crate::arm_model::ArmModel;
    use crate::body_sphere::BodySphere;
    use crate::jacobian::{numerical_jacobian, numerical_sphere_jacobian};
    use crate::kinematic_traits::{Kinematics, Pose};
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::Arm;
    use crate::tests::test_utils::{
        assert_jacobians_approx_equal, assert_points_approx_equal, random_joints, rng,
        DELTA, JACOBIAN_TOLERANCE,
    };

    /// Two link planar arm with a non-zero base pose, and spheres along both links.
    fn two_link_planar() -> ArmModel {
        let base_pose = Pose::translation(2.0, 1.0, -1.0);
        let arm = Arm::new(2, &[1.0, 1.0], &[0.0, 0.0], &[0.0, 0.0], base_pose)
            .expect("Valid DH parameters");

        let body_spheres = vec![
            BodySphere::new(0, 0.5, Point3::new(-1.0, 0.0, 0.0)),
            BodySphere::new(0, 0.1, Point3::new(-0.5, 0.0, 0.0)),
            BodySphere::new(0, 0.1, Point3::new(0.0, 0.0, 0.0)),
            BodySphere::new(1, 0.1, Point3::new(-0.5, 0.0, 0.0)),
            BodySphere::new(1, 0.1, Point3::new(0.0, 0.0, 0.0)),
        ];
        ArmModel::new(arm, body_spheres).expect("All spheres on existing links")
    }

    /// Checks centers against expectations and every analytic Jacobian, from the batch
    /// and from the single query, against central differences of the same query.
    fn check_model(model: &ArmModel, qs: &[f64], expected: &[Point3<f64>], center_tolerance: f64) {
        let (centers, jacobians) = model.sphere_centers_with_jacobians(qs).unwrap();
        assert_eq!(centers.len(), expected.len());
        assert_eq!(jacobians.len(), expected.len());

        for i in 0..model.sphere_count() {
            assert_points_approx_equal(&centers[i], &expected[i], center_tolerance);

            let batch = |q: &[f64]| model.sphere_centers(q).unwrap()[i];
            let numerical = numerical_jacobian(batch, qs, DELTA);
            assert_jacobians_approx_equal(&jacobians[i], &numerical, JACOBIAN_TOLERANCE);

            let (center, jacobian) = model.sphere_center_with_jacobian(i, qs).unwrap();
            assert_points_approx_equal(&center, &expected[i], center_tolerance);
            let numerical = numerical_sphere_jacobian(model, i, qs, DELTA).unwrap();
            assert_jacobians_approx_equal(&jacobian, &numerical, JACOBIAN_TOLERANCE);
        }
    }

    #[test]
    fn test_two_link_planar_at_origin() {
        let model = two_link_planar();
        let expected = [
            Point3::new(2.0, 1.0, -1.0),
            Point3::new(2.5, 1.0, -1.0),
            Point3::new(3.0, 1.0, -1.0),
            Point3::new(3.5, 1.0, -1.0),
            Point3::new(4.0, 1.0, -1.0),
        ];
        check_model(&model, &[0.0, 0.0], &expected, 1e-12);
    }

    #[test]
    fn test_two_link_planar_non_origin() {
        let model = two_link_planar();
        let expected = [
            Point3::new(2.0, 1.0, -1.0),
            Point3::new(2.353553390593274, 1.353553390593274, -1.0),
            Point3::new(2.707106781186548, 1.707106781186548, -1.0),
            Point3::new(2.707106781186548, 2.207106781186548, -1.0),
            Point3::new(2.707106781186548, 2.707106781186548, -1.0),
        ];
        check_model(&model, &[PI / 4.0, PI / 4.0], &expected, 1e-12);

        // Values as commonly quoted, rounded to 4 decimals
        let centers = model.sphere_centers(&[PI / 4.0, PI / 4.0]).unwrap();
        assert_points_approx_equal(&centers[1], &Point3::new(2.3536, 1.3536, -1.0), 1e-4);
        assert_points_approx_equal(&centers[3], &Point3::new(2.7071, 2.2071, -1.0), 1e-4);
    }

    #[test]
    fn test_two_link_planar_random_configurations() {
        let model = two_link_planar();
        let mut rng = rng();
        for _ in 0..50 {
            let qs = random_joints(&mut rng, 2);
            let (_, jacobians) = model.sphere_centers_with_jacobians(&qs).unwrap();
            for (i, jacobian) in jacobians.iter().enumerate() {
                let numerical = numerical_sphere_jacobian(&model, i, &qs, DELTA).unwrap();
                assert_jacobians_approx_equal(jacobian, &numerical, JACOBIAN_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_jacobian_columns_are_axis_cross_lever() {
        // Planar arm: every axis is world z, so the column for joint j is z x (c - o_j).
        let model = two_link_planar();
        let (centers, jacobians) = model.sphere_centers_with_jacobians(&[0.0, 0.0]).unwrap();

        // Tip sphere at (4, 1, -1): lever from the base (2, 1, -1) is 2, from the elbow 1.
        assert_eq!(centers[4], Point3::new(4.0, 1.0, -1.0));
        assert_eq!(jacobians[4].column(0).into_owned(), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(jacobians[4].column(1).into_owned(), Vector3::new(0.0, 1.0, 0.0));

        // The sphere at the base does not move at all.
        assert_eq!(jacobians[0].norm(), 0.0);
    }

    #[test]
    fn test_batch_and_single_are_identical() {
        let model = two_link_planar();
        let mut rng = rng();
        for _ in 0..20 {
            let qs = random_joints(&mut rng, 2);
            let (centers, jacobians) = model.sphere_centers_with_jacobians(&qs).unwrap();
            let plain_centers = model.sphere_centers(&qs).unwrap();
            assert_eq!(centers, plain_centers);
            for i in 0..model.sphere_count() {
                assert_eq!(model.sphere_center(i, &qs).unwrap(), centers[i]);
                let (center, jacobian) = model.sphere_center_with_jacobian(i, &qs).unwrap();
                assert_eq!(center, centers[i]);
                assert_eq!(jacobian, jacobians[i]);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let model = two_link_planar();
        let qs = [0.3, -2.1];
        let first = model.sphere_centers_with_jacobians(&qs).unwrap();
        for _ in 0..5 {
            let again = model.sphere_centers_with_jacobians(&qs).unwrap();
            assert_eq!(first.0, again.0);
            assert_eq!(first.1, again.1);
        }
    }

    #[test]
    fn test_boundaries() {
        let model = two_link_planar();
        let count = model.sphere_count();
        let out_of_range = KinematicsError::IndexOutOfRange { what: "sphere", index: count, len: count };

        assert_eq!(model.sphere_center(count, &[0.0, 0.0]).err(), Some(out_of_range.clone()));
        assert_eq!(model.sphere_center_with_jacobian(count, &[0.0, 0.0]).err(), Some(out_of_range.clone()));
        assert_eq!(numerical_sphere_jacobian(&model, count, &[0.0, 0.0], DELTA).err(), Some(out_of_range));

        let too_short = KinematicsError::DimensionMismatch { expected: 2, found: 1 };
        let too_long = KinematicsError::DimensionMismatch { expected: 2, found: 3 };
        assert_eq!(model.sphere_centers(&[0.0]).err(), Some(too_short.clone()));
        assert_eq!(model.sphere_centers_with_jacobians(&[0.0, 0.0, 0.0]).err(), Some(too_long));
        assert_eq!(model.sphere_center(0, &[0.0]).err(), Some(too_short.clone()));
        assert_eq!(model.sphere_center_with_jacobian(0, &[]).err(),
                   Some(KinematicsError::DimensionMismatch { expected: 2, found: 0 }));
        assert_eq!(numerical_sphere_jacobian(&model, 0, &[0.0], DELTA).err(), Some(too_short));
    }

    #[test]
    fn test_singular_configuration_is_not_an_error() {
        // Folded arm: the tip is back at the base joint and only the second joint moves it.
        let model = two_link_planar();
        let (centers, jacobians) = model.sphere_centers_with_jacobians(&[0.0, PI]).unwrap();
        assert_points_approx_equal(&centers[4], &Point3::new(2.0, 1.0, -1.0), 1e-12);
        assert!(jacobians[4].column(0).norm() < 1e-12);
        assert!((jacobians[4].column(1).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArmModel>();

        let model = two_link_planar();
        let mut rng = rng();
        let configurations: Vec<Vec<f64>> = (0..16).map(|_| random_joints(&mut rng, 2)).collect();
        let expected: Vec<_> = configurations.iter()
            .map(|qs| model.sphere_centers_with_jacobians(qs).unwrap())
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (qs, (centers, jacobians)) in configurations.iter().zip(expected.iter()) {
                        let (c, j) = model.sphere_centers_with_jacobians(qs).unwrap();
                        assert_eq!(&c, centers);
                        assert_eq!(&j, jacobians);
                    }
                });
            }
        });

        let all = model.sphere_centers_for_configurations(&configurations).unwrap();
        for (centers, (expected_centers, _)) in all.iter().zip(expected.iter()) {
            assert_eq!(centers, expected_centers);
        }
    }

    #[test]
    fn test_link_velocities_match_motion() {
        // Velocity of each link origin equals the time derivative of its position
        // along the straight joint path q + t * qdot.
        let arm = two_link_planar().arm().clone();
        let qs = [0.4, -0.9];
        let qdot = [0.7, -1.3];
        let velocities = arm.link_velocities(&qs, &qdot).unwrap();

        let h = 1e-6;
        let ahead: Vec<f64> = qs.iter().zip(qdot.iter()).map(|(q, v)| q + h * v).collect();
        let behind: Vec<f64> = qs.iter().zip(qdot.iter()).map(|(q, v)| q - h * v).collect();
        let poses_ahead = arm.forward_with_link_poses(&ahead).unwrap();
        let poses_behind = arm.forward_with_link_poses(&behind).unwrap();

        for link in 0..2 {
            let expected = (poses_ahead[link].translation.vector - poses_behind[link].translation.vector) / (2.0 * h);
            assert!((velocities[link] - expected).norm() < 1e-8,
                    "link {}: {} vs {}", link, velocities[link], expected);
        }
    }
}
