//! Display shell for the Phong ray tracer.
//!
//! Renders the default scene once and presents the frame by writing it
//! to an image file.

mod settings;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbImage;
use phong_renderer::{render, Camera, Frame, Scene};

use settings::{Cli, ViewerSettings};

fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    let image = RgbImage::from_raw(frame.width, frame.height, frame.to_rgb8())
        .context("Frame buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let settings = ViewerSettings::from_cli(&cli)?;
    let config = settings.render_config();
    config.validate()?;

    log::info!("Starting Phong Ray Tracer ({}x{})", config.width, config.height);

    let start = Instant::now();
    let scene = Scene::default_scene()?;
    let camera = Camera::default();
    log::info!("Scene built with {} surfaces in {:?}", scene.len(), start.elapsed());

    let frame = render(&scene, &camera, &config);
    drop(scene);

    save_frame(&frame, &settings.output)?;
    log::info!("Saved to {}", settings.output.display());

    Ok(())
}
