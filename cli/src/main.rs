use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Render an image as a low-poly Processing sketch")]
struct Options {
    /// Image to triangulate.
    #[arg(long, short)]
    input: PathBuf,

    /// Where to write the generated Processing sketch.
    #[arg(long, short)]
    output: PathBuf,

    /// Number of points to scatter across the image.
    #[arg(long, short, default_value_t = 900)]
    num_points: usize,

    /// Seed for the point sampler, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();
    let img = image::open(&opt.input)?;

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Triangulating with {} points", opt.num_points);
    let sketch = lowpoly::render(&img, opt.num_points, &mut rng)?;

    fs::write(&opt.output, sketch)?;

    Ok(())
}
