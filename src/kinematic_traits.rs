extern crate nalgebra as na;

use na::{IsometryMatrix3, Matrix3xX, Point3, Vector3};
use crate::kinematics_error::KinematicsError;

/// Pose is a rigid transform (rotation matrix and translation). It is used both for
/// the base of the arm and for every link frame the forward kinematics produces.
/// ```
/// extern crate nalgebra as na;
/// use na::{IsometryMatrix3, Rotation3, Translation3};
///
/// type Pose = IsometryMatrix3<f64>;
///
/// let translation = Translation3::new(2.0, 1.0, -1.0);
/// let rotation = Rotation3::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// let base = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = IsometryMatrix3<f64>;

/// Derivatives of a world-frame point with respect to each joint angle.
/// Always 3 rows, one column per joint.
pub type PositionJacobian = Matrix3xX<f64>;

/// Everything the forward pass yields for a single joint vector.
#[derive(Debug, Clone)]
pub struct LinkFrames {
    /// World pose of every link frame, T_1 .. T_n.
    pub poses: Vec<Pose>,

    /// World rotation axis of every joint: local z of the preceding frame.
    pub axes: Vec<Vector3<f64>>,

    /// World origin of every joint: origin of the preceding frame.
    pub origins: Vec<Point3<f64>>,
}

impl LinkFrames {
    /// Positional Jacobian of a world point rigidly attached to the given link.
    /// Joints after the link do not move the point and get zero columns.
    pub fn point_jacobian(&self, point: &Point3<f64>, link: usize) -> PositionJacobian {
        let mut jacobian = PositionJacobian::zeros(self.axes.len());
        for j in 0..=link {
            let column = self.axes[j].cross(&(*point - self.origins[j]));
            jacobian.set_column(j, &column);
        }
        jacobian
    }
}

pub trait Kinematics {
    /// Number of joints of the chain.
    fn dof(&self) -> usize;

    /// Pose of the last link frame.
    fn forward(&self, qs: &[f64]) -> Result<Pose, KinematicsError>;

    /// World poses of all link frames, from the first to the last.
    fn forward_with_link_poses(&self, qs: &[f64]) -> Result<Vec<Pose>, KinematicsError>;

    /// Link poses together with the world axis and origin of every joint.
    fn link_frames(&self, qs: &[f64]) -> Result<LinkFrames, KinematicsError>;
}
