use rs_spikm_kinematics::parameters::DesignParameters;
use rs_spikm_kinematics::platform::PlatformKinematics;
use rs_spikm_kinematics::pose::{Pose, POSE_AT_HOME};
use rs_spikm_kinematics::utils::{dump_motor_angles, dump_platform_move};

#[cfg(feature = "allow_filesystem")]
use clap::Parser;

/// Solve rotary Stewart platform poses for a design.
#[cfg(feature = "allow_filesystem")]
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// YAML file with the design; the built-in reference rig when omitted.
    #[arg(long)]
    design: Option<std::path::PathBuf>,

    /// Pose to solve, as x,y,z,a,b,g (translations, then degrees). Runs a
    /// short demo sequence when omitted.
    #[arg(long, value_delimiter = ',', num_args = 6, allow_negative_numbers = true)]
    pose: Option<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "allow_filesystem")]
    let args = Args::parse();

    #[cfg(feature = "allow_filesystem")]
    let design = match &args.design {
        Some(path) => DesignParameters::from_yaml_file(path)?,
        None => DesignParameters::reference_rig(),
    };
    #[cfg(not(feature = "allow_filesystem"))]
    let design = DesignParameters::reference_rig();

    println!("Design:\n{}", design.to_yaml());
    let mut platform = PlatformKinematics::new(&design)?;

    println!("Home pose:");
    dump_platform_move(&platform.initialize());

    #[cfg(feature = "allow_filesystem")]
    if let Some(values) = &args.pose {
        let pose = Pose::new(values[0], values[1], values[2], values[3], values[4], values[5]);
        let result = platform.update(&pose);
        dump_platform_move(&result);
        return Ok(());
    }

    println!("\nSmall lift:");
    dump_platform_move(&platform.update(&Pose::new(0.0, 0.0, 0.5, 0.0, 0.0, 0.0)));

    println!("\nYawed beyond the reach of half the actuators (mirror pairs split):");
    dump_platform_move(&platform.update(&Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, -5.0)));

    println!("\nOut of reach for everyone:");
    dump_platform_move(&platform.update(&Pose::new(0.0, 0.0, 100.0, 0.0, 0.0, 0.0)));

    println!("\nBack home, the cranks recover:");
    dump_motor_angles(&platform.update(&POSE_AT_HOME).motor_angles);

    Ok(())
}
