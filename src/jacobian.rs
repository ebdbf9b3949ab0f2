//! Numerical Jacobians by central differences. Used to cross-check the analytic
//! Jacobians of the arm model.

extern crate nalgebra as na;
use na::{Point3, Vector3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::arm_model::ArmModel;
use crate::kinematic_traits::PositionJacobian;
use crate::kinematics_error::{check_joints, KinematicsError};

/// Function to compute the Jacobian of a point-valued function by central differences
///
/// # Arguments
///
/// * `f` - The function mapping joint angles to a point
/// * `qs` - The joint configuration where the Jacobian is evaluated
/// * `delta` - Perturbation applied to each joint, in both directions
///
/// # Returns
///
/// A 3 x n matrix, column `i` being (f(q + delta e_i) - f(q - delta e_i)) / (2 delta).
pub fn numerical_jacobian<F>(f: F, qs: &[f64], delta: f64) -> PositionJacobian
where
    F: Fn(&[f64]) -> Point3<f64> + Sync,
{
    let column = |i: usize| -> Vector3<f64> {
        let mut plus = qs.to_vec();
        let mut minus = qs.to_vec();
        plus[i] += delta;
        minus[i] -= delta;
        (f(plus.as_slice()) - f(minus.as_slice())) / (2.0 * delta)
    };

    #[cfg(feature = "parallel")]
    let columns: Vec<Vector3<f64>> = (0..qs.len()).into_par_iter().map(column).collect();
    #[cfg(not(feature = "parallel"))]
    let columns: Vec<Vector3<f64>> = (0..qs.len()).map(column).collect();

    let mut jacobian = PositionJacobian::zeros(qs.len());
    for (i, c) in columns.iter().enumerate() {
        jacobian.set_column(i, c);
    }
    jacobian
}

/// Numerical Jacobian of the center of one body sphere. Index and joint count are
/// validated before any differencing takes place.
pub fn numerical_sphere_jacobian(model: &ArmModel, index: usize, qs: &[f64], delta: f64)
                                 -> Result<PositionJacobian, KinematicsError> {
    model.sphere_link(index)?;
    check_joints(qs, model.dof())?;

    Ok(numerical_jacobian(
        |q| model.sphere_center(index, q).unwrap_or_else(|_| Point3::new(f64::NAN, f64::NAN, f64::NAN)),
        qs,
        delta,
    ))
}
