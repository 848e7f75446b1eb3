//! Zenit CLI - render SDF scenes to PNG, headless.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec3;
use tracing::info;

use zenit_core::field::Field;
use zenit_core::scenes::{BlendScene, OrbitScene};
use zenit_render::{Animation, Camera, FrameConfig, FrameParams, render};

#[derive(Parser)]
#[command(name = "zenit")]
#[command(about = "CPU raymarching renderer for SDF scenes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single frame
    Render {
        /// Scene to render
        #[arg(long, value_enum, default_value = "blend")]
        scene: ScenePick,

        /// Image width
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Image height
        #[arg(long, default_value = "720")]
        height: u32,

        /// Elapsed animation time in seconds
        #[arg(long, default_value = "0.0")]
        time: f32,

        /// Optional JSON frame configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output image file (.png)
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },

    /// Render an animation as numbered frames
    Sequence {
        /// Scene to render
        #[arg(long, value_enum, default_value = "orbit")]
        scene: ScenePick,

        /// Image width
        #[arg(long, default_value = "640")]
        width: u32,

        /// Image height
        #[arg(long, default_value = "360")]
        height: u32,

        /// Number of frames
        #[arg(long, default_value = "60")]
        frames: u32,

        /// Frames per second of animation time
        #[arg(long, default_value = "30.0")]
        fps: f32,

        /// Optional JSON frame configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenePick {
    /// Rounded box and spheres blended by smooth booleans
    Blend,
    /// Palette-colored sphere ring with reflections
    Orbit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            width,
            height,
            time,
            config,
            output,
        } => {
            run_render(scene, width, height, time, config.as_deref(), &output)?;
        }
        Commands::Sequence {
            scene,
            width,
            height,
            frames,
            fps,
            config,
            output,
        } => {
            run_sequence(scene, width, height, frames, fps, config.as_deref(), &output)?;
        }
    }

    Ok(())
}

fn run_render(
    scene: ScenePick,
    width: u32,
    height: u32,
    time: f32,
    config: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let frame = load_frame(scene, config)?;
    let camera = camera_for(scene, width, height);
    let phase = Animation::default().phase_at(time);
    let field = build_scene(scene, phase, &frame);

    info!(width, height, time, "rendering frame");
    let buffer = render(field.as_ref(), &frame, &camera, width, height);
    buffer.save(output)?;
    info!("saved {}", output.display());

    Ok(())
}

fn run_sequence(
    scene: ScenePick,
    width: u32,
    height: u32,
    frames: u32,
    fps: f32,
    config: Option<&Path>,
    output: &Path,
) -> Result<()> {
    if fps <= 0.0 {
        anyhow::bail!("fps must be positive");
    }
    std::fs::create_dir_all(output)?;

    let frame = load_frame(scene, config)?;
    let camera = camera_for(scene, width, height);
    let animation = Animation::default();

    info!(frames, fps, "rendering sequence");
    for index in 0..frames {
        // Phase is snapshotted per frame; the scene is rebuilt around it.
        let phase = animation.phase_at(index as f32 / fps);
        let field = build_scene(scene, phase, &frame);

        let buffer = render(field.as_ref(), &frame, &camera, width, height);
        let path = output.join(format!("frame_{index:04}.png"));
        buffer.save(&path)?;
        info!("frame {}/{} -> {}", index + 1, frames, path.display());
    }

    Ok(())
}

fn load_frame(scene: ScenePick, config: Option<&Path>) -> Result<FrameParams> {
    let mut frame = match config {
        Some(path) => FrameParams::from_config(&FrameConfig::load(path)?),
        None => FrameParams::default(),
    };

    // The orbit scene is the reflective variant; give it a bounce budget
    // unless the config already asked for one.
    if matches!(scene, ScenePick::Orbit) && frame.shading.reflection_bounces == 0 {
        frame.shading.reflection_bounces = 2;
    }

    Ok(frame)
}

fn camera_for(scene: ScenePick, width: u32, height: u32) -> Camera {
    let mut camera = match scene {
        ScenePick::Blend => Camera::look_at(Vec3::new(0.0, 1.5, -4.5), Vec3::ZERO),
        ScenePick::Orbit => Camera::look_at(Vec3::new(0.0, 3.0, -6.5), Vec3::new(0.0, 0.5, 0.0)),
    };
    camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    camera
}

fn build_scene(scene: ScenePick, phase: f32, frame: &FrameParams) -> Box<dyn Field> {
    match scene {
        ScenePick::Blend => Box::new(BlendScene::default().with_phase(phase)),
        ScenePick::Orbit => {
            let mut orbit = OrbitScene::default();
            orbit.palette = frame.environment.sphere_palette();
            Box::new(orbit.with_phase(phase))
        }
    }
}
