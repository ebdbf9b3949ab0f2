//! Defines the DH parameter data structure

pub mod dh_kinematics {
    use crate::kinematics_error::KinematicsError;
    use crate::utils::deg;

    /// Standard Denavit–Hartenberg parameters of a serial arm with revolute joints.
    /// See [parameters_robots.rs](parameters_robots.rs) for examples of concrete arms.
    /// All vectors hold one value per joint, ordered from the base outwards.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Parameters {
        /// Link length: distance along the x axis of the joint frame.
        pub a: Vec<f64>,

        /// Link twist: rotation about the x axis of the joint frame.
        pub alpha: Vec<f64>,

        /// Link offset: distance along the z axis of the preceding frame.
        pub d: Vec<f64>,

        /// Added to each joint angle before the DH transform, moving the zero position.
        pub theta_bias: Vec<f64>,
    }

    impl Parameters {
        /// Parameters with no joint bias. Lengths are not checked here, this happens
        /// when the arm is built.
        pub fn new(a: Vec<f64>, alpha: Vec<f64>, d: Vec<f64>) -> Self {
            let theta_bias = vec![0.0; a.len()];
            Parameters { a, alpha, d, theta_bias }
        }

        /// Degrees of freedom, as implied by the link length array.
        pub fn dof(&self) -> usize {
            self.a.len()
        }

        /// Checks that all arrays have exactly `dof` entries and that `dof` is positive.
        pub fn validate(&self, dof: usize) -> Result<(), KinematicsError> {
            if dof == 0 {
                return Err(KinematicsError::ConstructionMismatch {
                    parameter: "dof", expected: 1, found: 0,
                });
            }
            for (parameter, values) in [
                ("a", &self.a), ("alpha", &self.alpha),
                ("d", &self.d), ("theta_bias", &self.theta_bias),
            ] {
                if values.len() != dof {
                    return Err(KinematicsError::ConstructionMismatch {
                        parameter, expected: dof, found: values.len(),
                    });
                }
            }
            Ok(())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            fn join(values: &[f64], format: fn(&f64) -> String) -> String {
                values.iter().map(format).collect::<Vec<_>>().join(", ")
            }
            let length = |x: &f64| x.to_string();
            format!(
                "dh_parameters:\n  \
              a: [{}]\n  \
              alpha: [{}]\n  \
              d: [{}]\n  \
              theta_bias: [{}]\n",
                join(&self.a, length),
                join(&self.alpha, deg),
                join(&self.d, length),
                join(&self.theta_bias, deg),
            )
        }
    }

}
