use nalgebra::Point3;

/// Collision proxy: a sphere rigidly attached to one link of the arm.
/// The center is given in the frame of that link, so it moves together with the link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySphere {
    /// Index of the link this sphere is attached to, counting from 0.
    pub link: usize,

    /// Sphere radius, non-negative.
    pub radius: f64,

    /// Center of the sphere in the frame of its link.
    pub center: Point3<f64>,
}

impl BodySphere {
    /// Constructor to describe a sphere attached to a link.
    ///
    /// # Arguments
    /// * `link` - The link index, must be below the DOF count of the arm the sphere is used with.
    ///   This is checked when the [`ArmModel`](crate::arm_model::ArmModel) is constructed.
    /// * `radius` - The sphere radius.
    /// * `center` - Offset of the sphere center in the link frame.
    ///
    /// # Returns
    /// A new instance of `BodySphere`.
    pub fn new(link: usize, radius: f64, center: Point3<f64>) -> Self {
        BodySphere { link, radius, center }
    }
}
