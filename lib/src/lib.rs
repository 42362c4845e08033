pub mod color;
pub mod delaunay;
pub mod point;
pub mod sketch;

use image::{DynamicImage, GenericImageView};
use rand::Rng;

pub use color::Rgb;
pub use delaunay::Triangulation;
pub use point::Point;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A triangulation needs at least three points.
    #[error("at least 3 points are required, got {0}")]
    TooFewPoints(usize),

    #[error("image has no pixels to sample from")]
    EmptyImage,

    /// Every sampled point lies on a single line, so no triangle exists.
    /// Retrying with the same seed fails the same way; resample with a
    /// different seed or more points.
    #[error("sampled points are collinear, cannot triangulate")]
    DegenerateInput,

    #[error(transparent)]
    Template(#[from] askama::Error),
}

/// Run the whole pipeline: scatter points over the image, triangulate
/// them, pick one color per triangle and serialize everything into a
/// Processing sketch.
///
/// The output depends only on the image, the point count and the rng
/// state, so a seeded rng reproduces the sketch byte for byte.
pub fn render(img: &DynamicImage, num_points: usize, rng: &mut impl Rng) -> Result<String, Error> {
    let (width, height) = img.dimensions();

    let points = point::sample_points(width, height, num_points, rng)?;
    let triangulation = Triangulation::build(points)?;
    let colors = color::sample_colors(&triangulation, img);

    sketch::emit(&triangulation, &colors, width, height)
}
