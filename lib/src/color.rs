use crate::delaunay::Triangulation;
use crate::point::Point;
use image::{DynamicImage, GenericImageView};
use log::debug;
use rayon::prelude::*;

/// An 8-bit RGB fill color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Compute one representative color per triangle, in triangle order.
///
/// Every triangle reads only the shared image and its own corners, so the
/// triangles are mapped in parallel; collecting the indexed iterator keeps
/// the result aligned with `triangulation.triangles()`.
pub fn sample_colors(triangulation: &Triangulation, img: &DynamicImage) -> Vec<Rgb> {
    (0..triangulation.len())
        .into_par_iter()
        .map(|index| triangle_color(triangulation.corners(index), img))
        .collect()
}

/// Reduce the pixels covered by one triangle to their per-channel median.
///
/// A pixel is covered when its center lies within the closed triangle,
/// boundary included, for either winding. A degenerate or sub-pixel
/// triangle can cover no pixel center at all; such a triangle falls back
/// to the single pixel nearest its centroid.
pub fn triangle_color(corners: [Point; 3], img: &DynamicImage) -> Rgb {
    let covered = covered_pixels(corners, img);

    if covered.is_empty() {
        debug!("{:?} covers no pixel center, sampling its centroid", corners);
        return centroid_sample(corners, img);
    }

    let median = |channel: fn(&Rgb) -> u8| -> u8 {
        let mut values = covered.iter().map(channel).collect::<Vec<_>>();
        values.sort_unstable();

        let mid = values.len() / 2;

        if values.len() % 2 == 0 {
            ((u16::from(values[mid - 1]) + u16::from(values[mid])) / 2) as u8
        } else {
            values[mid]
        }
    };

    Rgb::new(median(|c| c.r), median(|c| c.g), median(|c| c.b))
}

/// Colors of all pixels whose center falls within the triangle, scanned
/// over the triangle's bounding box clamped to the image.
fn covered_pixels(corners: [Point; 3], img: &DynamicImage) -> Vec<Rgb> {
    let (width, height) = img.dimensions();
    let [a, b, c] = corners;

    // Pixel centers sit at half coordinates, so the rightmost candidate
    // column is one left of the maximum vertex.
    let x_lo = i64::from(a.x.min(b.x).min(c.x)).max(0);
    let x_hi = (i64::from(a.x.max(b.x).max(c.x)) - 1).min(i64::from(width) - 1);
    let y_lo = i64::from(a.y.min(b.y).min(c.y)).max(0);
    let y_hi = (i64::from(a.y.max(b.y).max(c.y)) - 1).min(i64::from(height) - 1);

    let mut pixels = Vec::new();

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if covers(corners, x, y) {
                let channels = img.get_pixel(x as u32, y as u32);
                pixels.push(Rgb::new(channels[0], channels[1], channels[2]));
            }
        }
    }

    pixels
}

/// Whether the center of pixel `(px, py)` lies within the closed triangle.
///
/// Works on doubled coordinates so the half-pixel center offset stays in
/// exact integer arithmetic.
fn covers(corners: [Point; 3], px: i64, py: i64) -> bool {
    let orient = |a: (i64, i64), b: (i64, i64), p: (i64, i64)| -> i64 {
        (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
    };

    let v = corners.map(|p| (2 * i64::from(p.x), 2 * i64::from(p.y)));
    let center = (2 * px + 1, 2 * py + 1);

    let d0 = orient(v[0], v[1], center);
    let d1 = orient(v[1], v[2], center);
    let d2 = orient(v[2], v[0], center);

    let has_neg = d0 < 0 || d1 < 0 || d2 < 0;
    let has_pos = d0 > 0 || d1 > 0 || d2 > 0;

    !(has_neg && has_pos)
}

/// Fallback for triangles that cover nothing: the pixel whose center is
/// nearest the triangle centroid, clamped to image bounds.
fn centroid_sample(corners: [Point; 3], img: &DynamicImage) -> Rgb {
    let (width, height) = img.dimensions();
    let [a, b, c] = corners;

    let cx = (u64::from(a.x) + u64::from(b.x) + u64::from(c.x)) as f64 / 3.0;
    let cy = (u64::from(a.y) + u64::from(b.y) + u64::from(c.y)) as f64 / 3.0;

    let x = ((cx - 0.5).round() as i64).clamp(0, i64::from(width) - 1) as u32;
    let y = ((cy - 0.5).round() as i64).clamp(0, i64::from(height) - 1) as u32;

    let channels = img.get_pixel(x, y);

    Rgb::new(channels[0], channels[1], channels[2])
}
