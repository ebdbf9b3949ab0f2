//! Hardcoded DH parameters and body spheres for a few arms

pub mod dh_kinematics {
    use crate::arm_model::ArmModel;
    use crate::body_sphere::BodySphere;
    use crate::kinematic_traits::Pose;
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::Arm;
    use crate::parameters::dh_kinematics::Parameters;
    use nalgebra::Point3;
    use std::f64::consts::PI;

    #[allow(dead_code)]
    impl Parameters {
        /// Planar arm with two links of 1 m each, rotating in the xy plane.
        pub fn planar_two_links() -> Self {
            Parameters::new(vec![1.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0])
        }

        /// Planar arm with three links of 0.5 m each.
        pub fn planar_three_links() -> Self {
            Parameters::new(vec![0.5, 0.5, 0.5], vec![0.0; 3], vec![0.0; 3])
        }

        /// Barrett WAM, 7 DOF.
        pub fn wam() -> Self {
            Parameters::new(
                vec![0.0, 0.0, 0.045, -0.045, 0.0, 0.0, 0.0],
                vec![-PI / 2.0, PI / 2.0, -PI / 2.0, PI / 2.0, -PI / 2.0, PI / 2.0, 0.0],
                vec![0.0, 0.0, 0.55, 0.0, 0.3, 0.0, 0.06],
            )
        }
    }

    /// Spheres covering the planar two link arm: three on the first link, two on the second.
    pub fn planar_two_links_spheres() -> Vec<BodySphere> {
        vec![
            BodySphere::new(0, 0.5, Point3::new(-1.0, 0.0, 0.0)),
            BodySphere::new(0, 0.1, Point3::new(-0.5, 0.0, 0.0)),
            BodySphere::new(0, 0.1, Point3::new(0.0, 0.0, 0.0)),
            BodySphere::new(1, 0.1, Point3::new(-0.5, 0.0, 0.0)),
            BodySphere::new(1, 0.1, Point3::new(0.0, 0.0, 0.0)),
        ]
    }

    /// Spheres covering the WAM links and the hand.
    pub fn wam_spheres() -> Vec<BodySphere> {
        let sphere = |link, x, y, z, radius| BodySphere::new(link, radius, Point3::new(x, y, z));
        vec![
            sphere(0, 0.0, 0.0, 0.0, 0.15),
            sphere(1, 0.0, 0.0, 0.2, 0.06),
            sphere(1, 0.0, 0.0, 0.3, 0.06),
            sphere(1, 0.0, 0.0, 0.4, 0.06),
            sphere(1, 0.0, 0.0, 0.5, 0.06),
            sphere(2, 0.0, 0.0, 0.0, 0.06),
            sphere(3, 0.0, 0.0, 0.1, 0.06),
            sphere(3, 0.0, 0.0, 0.2, 0.06),
            sphere(3, 0.0, 0.0, 0.3, 0.06),
            sphere(5, 0.0, 0.0, 0.1, 0.06),
            // Fingers
            sphere(6, 0.1, -0.025, 0.08, 0.04),
            sphere(6, 0.1, 0.025, 0.08, 0.04),
            sphere(6, -0.1, 0.0, 0.08, 0.04),
            sphere(6, 0.15, -0.025, 0.13, 0.04),
            sphere(6, 0.15, 0.025, 0.13, 0.04),
            sphere(6, -0.15, 0.0, 0.13, 0.04),
        ]
    }

    impl ArmModel {
        /// Planar two link arm with its spheres, standing on the given base.
        pub fn planar_two_links(base_pose: Pose) -> Result<Self, KinematicsError> {
            let arm = Arm::from_parameters(Parameters::planar_two_links(), base_pose)?;
            ArmModel::new(arm, planar_two_links_spheres())
        }

        /// WAM arm with its spheres, standing on the given base.
        pub fn wam(base_pose: Pose) -> Result<Self, KinematicsError> {
            let arm = Arm::from_parameters(Parameters::wam(), base_pose)?;
            ArmModel::new(arm, wam_spheres())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::kinematic_traits::Kinematics;

        #[test]
        fn test_presets_are_consistent() {
            for parameters in [Parameters::planar_two_links(), Parameters::planar_three_links(), Parameters::wam()] {
                let dof = parameters.dof();
                assert!(Arm::from_parameters(parameters, Pose::identity()).is_ok(), "dof {}", dof);
            }
            let model = ArmModel::wam(Pose::identity()).unwrap();
            assert_eq!(model.dof(), 7);
            assert_eq!(model.sphere_count(), 16);

            let model = ArmModel::planar_two_links(Pose::translation(2.0, 1.0, -1.0)).unwrap();
            assert_eq!(model.arm().dof(), 2);
            assert_eq!(model.sphere_count(), 5);
        }

        #[test]
        fn test_wam_stretched_up() {
            // At zero the WAM points straight up, with the elbow offsets cancelling out.
            let arm = Arm::from_parameters(Parameters::wam(), Pose::identity()).unwrap();
            let tip = arm.forward(&[0.0; 7]).unwrap();
            let expected = nalgebra::Vector3::new(0.0, 0.0, 0.55 + 0.3 + 0.06);
            assert!((tip.translation.vector - expected).norm() < 1e-12);
        }
    }
}
