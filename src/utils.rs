//! Helper functions

use crate::kinematic_traits::{Pose, PositionJacobian};
use nalgebra::{Isometry3, Point3};

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &[f64]) {
    let mut row_str = String::new();
    for joint in joints {
        row_str.push_str(&format!("{:5.2} ", joint.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(pose: &Pose) {
    let translation = pose.translation.vector;
    let (roll, pitch, yaw) = pose.rotation.euler_angles();

    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  rpy: {:.2},{:.2},{:.2}",
        translation.x, translation.y, translation.z,
        roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()
    );
}

/// Print sphere centers, one per line, prefixed with the sphere index.
pub fn dump_sphere_centers(centers: &[Point3<f64>]) {
    if centers.is_empty() {
        println!("No spheres");
    }
    for (i, c) in centers.iter().enumerate() {
        println!("{:3}: x: {:.5}, y: {:.5}, z: {:.5}", i, c.x, c.y, c.z);
    }
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: &[i32]) -> Vec<f64> {
    degrees.iter().map(|&d| (d as f64).to_radians()).collect()
}

/// Converts quaternion based isometry into the rotation matrix based pose used by the arm.
pub fn pose_from_isometry(isometry: &Isometry3<f64>) -> Pose {
    Pose::from_parts(isometry.translation, isometry.rotation.to_rotation_matrix())
}

/// Largest absolute difference between entries of two Jacobians of the same shape,
/// infinity if shapes differ. NaN in any entry makes the result NaN.
pub fn max_abs_difference(a: &PositionJacobian, b: &PositionJacobian) -> f64 {
    if a.shape() != b.shape() {
        return f64::INFINITY;
    }
    let mut max = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let difference = (x - y).abs();
        if difference.is_nan() {
            return f64::NAN;
        }
        max = f64::max(max, difference);
    }
    max
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}
