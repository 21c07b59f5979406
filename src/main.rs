use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_turret_kinematics::field_view::{FieldView, PixelRect};
use rs_turret_kinematics::kinematic_traits::Pose;
use rs_turret_kinematics::overlay::{Overlay, DEFAULT_RESOLUTION};
use rs_turret_kinematics::parameters::outtake::Parameters;
use rs_turret_kinematics::path::LinePath;
use rs_turret_kinematics::utils::{dump_pose, is_valid, pose_deg};

/// Resolves turret and arm poses for a robot pose and prints where they land on the canvas.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Robot x, inches
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Robot y, inches
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Robot heading, degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    heading: f64,

    /// Robot geometry YAML; the built-in outtake geometry if omitted
    #[arg(long)]
    geometry: Option<String>,

    /// Side of the square canvas, pixels
    #[arg(long, default_value_t = 720.0)]
    canvas: f64,

    /// Destination x of a straight path to sample, inches
    #[arg(long, requires = "to_y", allow_negative_numbers = true)]
    to_x: Option<f64>,

    /// Destination y of a straight path to sample, inches
    #[arg(long, requires = "to_x", allow_negative_numbers = true)]
    to_y: Option<f64>,

    /// Destination heading, degrees (the start heading if omitted)
    #[arg(long, allow_negative_numbers = true)]
    to_heading: Option<f64>,

    /// Print the geometry in use as YAML
    #[arg(long)]
    dump_geometry: bool,
}

fn print_rect(label: &str, rect: &PixelRect) {
    println!(
        "{:>7}: x {:8.2} y {:8.2} w {:7.2} h {:7.2} rotate {:8.2}°",
        label, rect.x, rect.y, rect.width, rect.height, rect.rotate_degrees
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let parameters = match &args.geometry {
        Some(file) => Parameters::from_yaml_file(file)
            .with_context(|| format!("Failed to read robot geometry from {}", file))?,
        None => Parameters::outtake(),
    };
    if args.dump_geometry {
        print!("{}", parameters.to_yaml());
    }

    anyhow::ensure!(args.canvas > 0.0, "Canvas size must be positive, got {}", args.canvas);
    let robot = pose_deg(args.x, args.y, args.heading);
    anyhow::ensure!(is_valid(&robot), "Robot pose must be finite, got {:?}", robot);

    let overlay = Overlay::new(parameters, FieldView::for_canvas(args.canvas));
    let frame = overlay.frame(&robot);
    info!("resolved chain for robot at ({}, {})", robot.x(), robot.y());

    dump_pose("robot", &frame.chain.robot);
    dump_pose("turret", &frame.chain.turret);
    dump_pose("arm", &frame.chain.arm);
    println!("    aim: {:.2}°", frame.chain.aim.to_degrees());

    print_rect("robot", &frame.robot);
    print_rect("turret", &frame.pivot);
    print_rect("arm", &frame.arm);
    let (from, to) = frame.heading_vector;
    println!("heading: ({:.2}, {:.2}) -> ({:.2}, {:.2})", from.x, from.y, to.x, to.y);

    if let (Some(to_x), Some(to_y)) = (args.to_x, args.to_y) {
        let end = Pose::new(
            to_x,
            to_y,
            args.to_heading.map(f64::to_radians).unwrap_or(robot.heading),
        );
        anyhow::ensure!(is_valid(&end), "Path destination must be finite, got {:?}", end);
        let path = LinePath::new(robot, end);
        let samples = overlay.sampled_path(&path, DEFAULT_RESOLUTION);
        let trail = overlay.robot_trail(&path, DEFAULT_RESOLUTION);
        println!("path: {} samples, trail: {} robot squares", samples.len(), trail.len());

        if let Some(last) = overlay.frames_along(&path, DEFAULT_RESOLUTION).last() {
            dump_pose("end arm", &last.chain.arm);
        }
    }
    Ok(())
}
