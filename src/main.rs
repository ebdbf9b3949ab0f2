use std::f64::consts::PI;
use rs_dh_arm_model::arm_model::ArmModel;
use rs_dh_arm_model::jacobian::numerical_sphere_jacobian;
use rs_dh_arm_model::kinematic_traits::{Kinematics, Pose};
use rs_dh_arm_model::utils::{dump_joints, dump_pose, dump_sphere_centers, max_abs_difference};

/// Usage example.
fn main() -> anyhow::Result<()> {
    let model = ArmModel::planar_two_links(Pose::translation(2.0, 1.0, -1.0))?;
    let joints = [PI / 4.0, PI / 4.0];
    println!("Joints:");
    dump_joints(&joints);

    println!("Tip of the arm:");
    dump_pose(&model.arm().forward(&joints)?);

    let (centers, jacobians) = model.sphere_centers_with_jacobians(&joints)?;
    println!("Sphere centers:");
    dump_sphere_centers(&centers);

    println!("Analytic against numerical Jacobians:");
    for (i, jacobian) in jacobians.iter().enumerate() {
        let numerical = numerical_sphere_jacobian(&model, i, &joints, 1e-6)?;
        println!("{:3}: max difference {:.3e}", i, max_abs_difference(jacobian, &numerical));
    }

    println!("WAM arm, tip pose at zero and its sphere centers:");
    let wam = ArmModel::wam(Pose::identity())?;
    let zero = [0.0; 7];
    dump_pose(&wam.arm().forward(&zero)?);
    dump_sphere_centers(&wam.sphere_centers(&zero)?);

    println!("Parameters:\n{}", model.arm().parameters().to_yaml());
    Ok(())
}
