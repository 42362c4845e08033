use crate::Error;
use rand::Rng;
use std::fmt;
use voronator::delaunator;

/// A pixel coordinate inside the source image.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl From<Point> for delaunator::Point {
    fn from(p: Point) -> Self {
        delaunator::Point {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

/// Scatter `count` points uniformly across a `width` × `height` pixel grid.
///
/// Each coordinate is drawn independently with replacement, so duplicate
/// points are possible and left in place. Randomness comes in as an explicit
/// parameter; a seeded rng reproduces the same set.
pub fn sample_points(
    width: u32,
    height: u32,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Point>, Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    if count < 3 {
        return Err(Error::TooFewPoints(count));
    }

    Ok((0..count)
        .map(|_| Point::new(rng.gen_range(0..width), rng.gen_range(0..height)))
        .collect())
}
