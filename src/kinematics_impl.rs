use crate::kinematic_traits::{Kinematics, LinkFrames, Pose, PositionJacobian};
use crate::kinematics_error::{check_joints, KinematicsError};
use crate::parameters::dh_kinematics::Parameters;
use nalgebra::{Matrix3, Point3, Rotation3, Translation3, Vector3};
use tracing::debug;

/// Serial chain of revolute joints described by standard DH parameters, standing on
/// a fixed base. The arm is immutable after construction; every query recomputes
/// the chain from the joint angles it receives.
#[derive(Debug, Clone)]
pub struct Arm {
    parameters: Parameters,
    base_pose: Pose,
}

impl Arm {
    /// Creates the arm from explicit DH arrays. Each array must hold exactly `dof`
    /// values, otherwise `ConstructionMismatch` is returned.
    pub fn new(dof: usize, a: &[f64], alpha: &[f64], d: &[f64], base_pose: Pose)
               -> Result<Self, KinematicsError> {
        let mut parameters = Parameters::new(a.to_vec(), alpha.to_vec(), d.to_vec());
        parameters.theta_bias = vec![0.0; dof];
        Self::with_dof(dof, parameters, base_pose)
    }

    /// Creates the arm from parameters, with DOF taken from the link length array.
    pub fn from_parameters(parameters: Parameters, base_pose: Pose) -> Result<Self, KinematicsError> {
        let dof = parameters.dof();
        Self::with_dof(dof, parameters, base_pose)
    }

    fn with_dof(dof: usize, parameters: Parameters, base_pose: Pose) -> Result<Self, KinematicsError> {
        if let Err(err) = parameters.validate(dof) {
            debug!("Rejected arm parameters: {}", err);
            return Err(err);
        }
        debug!("Arm with {} joints, base at {:?}", dof, base_pose.translation.vector);
        Ok(Arm { parameters, base_pose })
    }

    /// The same arm placed on another base.
    pub fn with_base_pose(&self, base_pose: Pose) -> Self {
        Arm { parameters: self.parameters.clone(), base_pose }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn a(&self) -> &[f64] {
        &self.parameters.a
    }

    pub fn alpha(&self) -> &[f64] {
        &self.parameters.alpha
    }

    pub fn d(&self) -> &[f64] {
        &self.parameters.d
    }

    pub fn theta_bias(&self) -> &[f64] {
        &self.parameters.theta_bias
    }

    pub fn base_pose(&self) -> &Pose {
        &self.base_pose
    }

    /// Homogeneous transform of a single joint relative to the preceding frame,
    /// Rz(theta) * Tz(d) * Tx(a) * Rx(alpha).
    fn dh_transform(&self, joint: usize, q: f64) -> Pose {
        let p = &self.parameters;
        let theta = q + p.theta_bias[joint];
        let (st, ct) = theta.sin_cos();
        let (sa, ca) = p.alpha[joint].sin_cos();

        let rotation = Matrix3::new(
            ct, -st * ca, st * sa,
            st, ct * ca, -ct * sa,
            0.0, sa, ca,
        );
        let translation = Translation3::new(p.a[joint] * ct, p.a[joint] * st, p.d[joint]);
        Pose::from_parts(translation, Rotation3::from_matrix_unchecked(rotation))
    }

    /// Composes the chain. Caller has checked the joint count.
    fn compose(&self, qs: &[f64]) -> Vec<Pose> {
        let mut poses = Vec::with_capacity(qs.len());
        let mut current = self.base_pose;
        for (joint, &q) in qs.iter().enumerate() {
            current *= self.dh_transform(joint, q);
            poses.push(current);
        }
        poses
    }

    /// Positional Jacobian of the origin of every link frame.
    pub fn link_position_jacobians(&self, qs: &[f64]) -> Result<Vec<PositionJacobian>, KinematicsError> {
        let frames = self.link_frames(qs)?;
        Ok(frames.poses.iter().enumerate()
            .map(|(link, pose)| frames.point_jacobian(&Point3::from(pose.translation.vector), link))
            .collect())
    }

    /// World linear velocity of the origin of every link frame, given joint angles
    /// and joint velocities.
    pub fn link_velocities(&self, qs: &[f64], velocities: &[f64]) -> Result<Vec<Vector3<f64>>, KinematicsError> {
        check_joints(velocities, self.dof())?;
        let qdot = nalgebra::DVector::from_column_slice(velocities);
        Ok(self.link_position_jacobians(qs)?
            .iter()
            .map(|jacobian| jacobian * &qdot)
            .collect())
    }
}

impl Kinematics for Arm {
    fn dof(&self) -> usize {
        self.parameters.dof()
    }

    fn forward(&self, qs: &[f64]) -> Result<Pose, KinematicsError> {
        check_joints(qs, self.dof())?;
        let mut pose = self.base_pose;
        for (joint, &q) in qs.iter().enumerate() {
            pose *= self.dh_transform(joint, q);
        }
        Ok(pose)
    }

    fn forward_with_link_poses(&self, qs: &[f64]) -> Result<Vec<Pose>, KinematicsError> {
        check_joints(qs, self.dof())?;
        Ok(self.compose(qs))
    }

    fn link_frames(&self, qs: &[f64]) -> Result<LinkFrames, KinematicsError> {
        check_joints(qs, self.dof())?;
        let poses = self.compose(qs);

        // Joint i turns about the z axis of frame i - 1, the base for the first joint.
        let preceding = std::iter::once(&self.base_pose).chain(poses.iter()).take(qs.len());
        let (axes, origins): (Vec<_>, Vec<_>) = preceding
            .map(|pose| (pose.rotation * Vector3::z(), Point3::from(pose.translation.vector)))
            .unzip();

        Ok(LinkFrames { poses, axes, origins })
    }
}
