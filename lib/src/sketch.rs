use crate::color::Rgb;
use crate::delaunay::Triangulation;
use crate::point::Point;
use crate::Error;
use askama::Template;

/// Canvas background of the generated sketch.
const BACKGROUND: &str = "e5d5ba";

/// File the sketch saves when Processing runs it.
const FRAME_NAME: &str = "lowpoly.jpg";

#[derive(Template)]
#[template(path = "sketch.pde", escape = "none")]
struct Sketch<'a> {
    width: u32,
    height: u32,
    background: &'a str,
    frame: &'a str,
    shapes: Vec<Shape>,
}

struct Shape {
    color: Rgb,
    a: Point,
    b: Point,
    c: Point,
}

/// Serialize the triangulation and its fill colors into a Processing
/// sketch: a `setup()` preamble, one `fill`/`triangle` statement per
/// triangle in triangulation order, and a `saveFrame`/`noLoop` epilogue.
///
/// All coordinates and channels are emitted as plain integers. The
/// function is pure; writing the text anywhere is the caller's concern.
pub fn emit(
    triangulation: &Triangulation,
    colors: &[Rgb],
    width: u32,
    height: u32,
) -> Result<String, Error> {
    debug_assert_eq!(triangulation.len(), colors.len());

    let shapes = (0..triangulation.len())
        .map(|index| {
            let [a, b, c] = triangulation.corners(index);
            Shape {
                color: colors[index],
                a,
                b,
                c,
            }
        })
        .collect();

    let sketch = Sketch {
        width,
        height,
        background: BACKGROUND,
        frame: FRAME_NAME,
        shapes,
    };

    Ok(sketch.render()?)
}
