//! Rust implementation of forward kinematics and analytic positional Jacobians for serial arms
//! described by Denavit–Hartenberg parameters, together with the body spheres that approximate
//! the arm for collision costs in trajectory optimizers.
//!
//! The arm is a chain of revolute joints standing on a fixed base pose. For a vector of joint
//! angles, the library computes the world pose of every link frame and maps the body spheres,
//! attached to links, into world coordinates. For every sphere center it also provides the
//! Jacobian with respect to the joint angles, computed in closed form from the joint axes
//! and origins of the same forward pass.
//!
//! # Features
//!
//! - Standard DH convention with optional per-joint angle bias and arbitrary base pose.
//! - Batch query for all sphere centers runs forward kinematics once; single-sphere query
//!   returns the very same numbers.
//! - Analytic Jacobians agree with central differences (see the `jacobian` module, which
//!   can be used to cross-check).
//! - Link origin Jacobians and linear velocities.
//! - The model is immutable and can be shared between threads. With the `parallel` feature,
//!   many configurations can be evaluated in parallel.
//! - Presets for planar arms and the Barrett WAM, and reading the model from YAML
//!   (`allow_filesystem` feature).
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use rs_dh_arm_model::arm_model::ArmModel;
//! use rs_dh_arm_model::body_sphere::BodySphere;
//! use rs_dh_arm_model::kinematic_traits::Pose;
//! use rs_dh_arm_model::kinematics_impl::Arm;
//!
//! let base = Pose::translation(2.0, 1.0, -1.0);
//! let arm = Arm::new(2, &[1.0, 1.0], &[0.0, 0.0], &[0.0, 0.0], base).unwrap();
//! let model = ArmModel::new(arm, vec![
//!     BodySphere::new(0, 0.1, Point3::new(-0.5, 0.0, 0.0)),
//!     BodySphere::new(1, 0.1, Point3::new(0.0, 0.0, 0.0)),
//! ]).unwrap();
//!
//! let (centers, jacobians) = model.sphere_centers_with_jacobians(&[0.0, 0.0]).unwrap();
//! assert_eq!(centers[1], Point3::new(4.0, 1.0, -1.0));
//! assert_eq!(jacobians[1].ncols(), 2);
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod body_sphere;
pub mod arm_model;

pub mod jacobian;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(test)]
mod tests;
