// Render the reference scene to an image file.
// Run with: cargo run --release --bin phos -- [config.json] [output.png]

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use phos_renderer::{render, Camera, ImageBuffer, RenderConfig};

mod scene;

const DEFAULT_OUTPUT: &str = "out.png";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => load_config(Path::new(path))?,
        None => {
            log::info!("No config given, using defaults");
            RenderConfig::default()
        }
    };
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    config.validate().context("invalid render configuration")?;

    let world = scene::build_scene().context("failed to build scene")?;
    let lights = world.lights();
    let camera = Camera::from_config(&config);

    let image = render(&camera, &world, &lights, &config);

    save_image(&image, Path::new(output))?;
    log::info!("Saved to {}", output);
    Ok(())
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let file = File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("pixel buffer does not match image dimensions")?;
    rgb.save(path)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    Ok(())
}
