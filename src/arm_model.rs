//! Arm together with the spheres approximating its body for collision checking.

use nalgebra::Point3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;
use crate::body_sphere::BodySphere;
use crate::kinematic_traits::{Kinematics, LinkFrames, PositionJacobian};
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::Arm;

/// Struct that combines the kinematic chain of the arm with the body spheres attached to
/// its links. It maps the spheres into the world frame for the given joint angles and
/// provides derivatives of the sphere centers with respect to these angles, the building
/// blocks of collision costs in planners.
///
/// The model is immutable and can be queried concurrently from multiple threads.
#[derive(Debug, Clone)]
pub struct ArmModel {
    /// The kinematic chain.
    arm: Arm,

    /// Body spheres in the order they are reported.
    spheres: Vec<BodySphere>,
}

impl ArmModel {
    /// Constructs a new `ArmModel`, taking ownership of the arm and spheres.
    ///
    /// # Parameters
    ///
    /// * `arm` - The kinematic chain.
    /// * `spheres` - Body spheres, any number per link, in any order. The order is preserved
    ///   in all query results.
    ///
    /// # Returns
    ///
    /// The model, or `IndexOutOfRange` if any sphere references a link the arm does not have.
    pub fn new(arm: Arm, spheres: Vec<BodySphere>) -> Result<Self, KinematicsError> {
        let dof = arm.dof();
        if let Some(sphere) = spheres.iter().find(|sphere| sphere.link >= dof) {
            let err = KinematicsError::IndexOutOfRange { what: "link", index: sphere.link, len: dof };
            debug!("Rejected body spheres: {}", err);
            return Err(err);
        }
        debug!("Arm model with {} joints and {} body spheres", dof, spheres.len());
        Ok(ArmModel { arm, spheres })
    }

    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    pub fn dof(&self) -> usize {
        self.arm.dof()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn spheres(&self) -> &[BodySphere] {
        &self.spheres
    }

    pub fn sphere_radius(&self, index: usize) -> Result<f64, KinematicsError> {
        Ok(self.sphere(index)?.radius)
    }

    pub fn sphere_link(&self, index: usize) -> Result<usize, KinematicsError> {
        Ok(self.sphere(index)?.link)
    }

    /// World-frame centers of all body spheres.
    pub fn sphere_centers(&self, qs: &[f64]) -> Result<Vec<Point3<f64>>, KinematicsError> {
        let frames = self.arm.link_frames(qs)?;
        Ok(self.spheres.iter().map(|sphere| center(&frames, sphere)).collect())
    }

    /// World-frame centers of all body spheres, with the Jacobian of every center
    /// with respect to the joint angles. Forward kinematics runs once for all spheres.
    pub fn sphere_centers_with_jacobians(&self, qs: &[f64])
                                         -> Result<(Vec<Point3<f64>>, Vec<PositionJacobian>), KinematicsError> {
        let frames = self.arm.link_frames(qs)?;
        Ok(self.spheres.iter().map(|sphere| center_and_jacobian(&frames, sphere)).unzip())
    }

    /// Same as [`sphere_centers_with_jacobians`](Self::sphere_centers_with_jacobians) but writes
    /// into caller provided vectors so they can be reused between calls. Both vectors are
    /// cleared first and hold exactly one entry per sphere on success. On error they are
    /// left untouched.
    pub fn sphere_centers_into(
        &self,
        qs: &[f64],
        centers: &mut Vec<Point3<f64>>,
        jacobians: Option<&mut Vec<PositionJacobian>>,
    ) -> Result<(), KinematicsError> {
        let frames = self.arm.link_frames(qs)?;
        centers.clear();
        match jacobians {
            Some(jacobians) => {
                jacobians.clear();
                for sphere in &self.spheres {
                    let (c, j) = center_and_jacobian(&frames, sphere);
                    centers.push(c);
                    jacobians.push(j);
                }
            }
            None => centers.extend(self.spheres.iter().map(|sphere| center(&frames, sphere))),
        }
        Ok(())
    }

    /// World-frame center of a single body sphere.
    pub fn sphere_center(&self, index: usize, qs: &[f64]) -> Result<Point3<f64>, KinematicsError> {
        let sphere = self.sphere(index)?;
        let frames = self.arm.link_frames(qs)?;
        Ok(center(&frames, sphere))
    }

    /// World-frame center of a single body sphere with its Jacobian. The result is identical
    /// to the entry with the same index returned by the batch query.
    pub fn sphere_center_with_jacobian(&self, index: usize, qs: &[f64])
                                       -> Result<(Point3<f64>, PositionJacobian), KinematicsError> {
        let sphere = self.sphere(index)?;
        let frames = self.arm.link_frames(qs)?;
        Ok(center_and_jacobian(&frames, sphere))
    }

    /// Sphere centers for many joint configurations. Configurations are processed in
    /// parallel if the `parallel` feature is enabled. Fails on the first configuration
    /// of the wrong length.
    pub fn sphere_centers_for_configurations<Q>(&self, configurations: &[Q])
                                                -> Result<Vec<Vec<Point3<f64>>>, KinematicsError>
    where
        Q: AsRef<[f64]> + Sync,
    {
        #[cfg(feature = "parallel")]
        let configurations = configurations.par_iter();
        #[cfg(not(feature = "parallel"))]
        let configurations = configurations.iter();

        configurations.map(|qs| self.sphere_centers(qs.as_ref())).collect()
    }

    fn sphere(&self, index: usize) -> Result<&BodySphere, KinematicsError> {
        self.spheres.get(index).ok_or(KinematicsError::IndexOutOfRange {
            what: "sphere",
            index,
            len: self.spheres.len(),
        })
    }
}

// Shared by batch and single queries so that both produce the same bits.
fn center(frames: &LinkFrames, sphere: &BodySphere) -> Point3<f64> {
    frames.poses[sphere.link].transform_point(&sphere.center)
}

fn center_and_jacobian(frames: &LinkFrames, sphere: &BodySphere) -> (Point3<f64>, PositionJacobian) {
    let c = center(frames, sphere);
    let jacobian = frames.point_jacobian(&c, sphere.link);
    (c, jacobian)
}
