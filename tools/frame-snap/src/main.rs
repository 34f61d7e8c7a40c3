// Snapshot CLI for the transform demo.
//
// Usage:
//   frame-snap render -p 300,200 -p 500,260 --angle 45 -o out.bmp
//   frame-snap compare a.bmp b.bmp [-d diff.bmp]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use cg_algorithms::{DemoConfig, PointI, ReflectPivot, TransformParams};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use frame_snap::{
    compare_buffers, generate_diff_image, load_image, parse_point, render_session, save_image,
    Session,
};

#[derive(Parser)]
#[command(name = "frame-snap")]
#[command(about = "Render transform-demo sessions to images and compare frames", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay clicks and control values, then save the frame
    Render {
        /// Clicked point as x,y (repeatable, in click order)
        #[arg(short, long = "point", value_parser = point_arg, allow_hyphen_values = true)]
        points: Vec<PointI>,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        tx: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        ty: i32,

        /// Rotation in degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f64,

        #[arg(long, default_value_t = 1.0)]
        sx: f64,

        #[arg(long, default_value_t = 1.0)]
        sy: f64,

        #[arg(long)]
        reflect_x: bool,

        #[arg(long)]
        reflect_y: bool,

        /// Reflection pivot
        #[arg(long, default_value = "origin")]
        pivot: Pivot,

        #[arg(long, default_value_t = 1280)]
        width: u32,

        #[arg(long, default_value_t = 720)]
        height: u32,

        /// Output file (.bmp, .raw or .rgba)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Compare two frames; exits with status 1 if they differ
    Compare {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        a: PathBuf,

        #[arg(value_hint = clap::ValueHint::FilePath)]
        b: PathBuf,

        /// Write a diff image here
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        diff: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Pivot {
    Origin,
    Centroid,
}

impl From<Pivot> for ReflectPivot {
    fn from(p: Pivot) -> Self {
        match p {
            Pivot::Origin => ReflectPivot::Origin,
            Pivot::Centroid => ReflectPivot::Centroid,
        }
    }
}

fn point_arg(s: &str) -> Result<PointI, String> {
    parse_point(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::default().filter_or("LOG_LEVEL", "warn");
    env_logger::init_from_env(env);

    match cli.command {
        Commands::Render {
            points,
            tx,
            ty,
            angle,
            sx,
            sy,
            reflect_x,
            reflect_y,
            pivot,
            width,
            height,
            output,
        } => {
            let config = DemoConfig::new()
                .size(width, height)
                .reflect_pivot(pivot.into());
            let session = Session {
                clicks: points,
                params: TransformParams {
                    tx,
                    ty,
                    angle,
                    sx,
                    sy,
                    reflect_x,
                    reflect_y,
                },
            };
            let buf = render_session(config, &session)?;
            save_image(&output, &buf)
                .with_context(|| format!("saving {}", output.display()))?;
            println!("Saved: {}", output.display());
        }

        Commands::Compare { a, b, diff } => {
            let fa = load_image(&a)?;
            let fb = load_image(&b)?;
            let result = compare_buffers(&fa, &fb)?;
            println!("{}", result);

            if let Some(path) = diff {
                save_image(&path, &generate_diff_image(&fa, &fb)?)?;
                println!("Diff saved: {}", path.display());
            }
            if !result.identical {
                process::exit(1);
            }
        }
    }
    Ok(())
}
