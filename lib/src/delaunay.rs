use crate::point::Point;
use crate::Error;
use voronator::delaunator;

/// A Delaunay triangulation over a fixed point set.
///
/// Triangle order is decided once at construction and never changes
/// afterwards, so per-triangle data computed later can stay index-aligned
/// with `triangles()`.
pub struct Triangulation {
    points: Vec<Point>,
    triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    /// Triangulate `points` so that the triangles tile their convex hull.
    ///
    /// Duplicate points are tolerated, but a set whose distinct points all
    /// lie on one line has no triangulation and fails with
    /// [`Error::DegenerateInput`].
    pub fn build(points: Vec<Point>) -> Result<Self, Error> {
        let sites = points
            .iter()
            .copied()
            .map(delaunator::Point::from)
            .collect::<Vec<_>>();

        let result = delaunator::triangulate(&sites).ok_or(Error::DegenerateInput)?;

        let triangles = result
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect::<Vec<_>>();

        if triangles.is_empty() {
            return Err(Error::DegenerateInput);
        }

        Ok(Triangulation { points, triangles })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertex index triples, one per triangle, in stable order.
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The three corner coordinates of triangle `index`.
    pub fn corners(&self, index: usize) -> [Point; 3] {
        let [a, b, c] = self.triangles[index];
        [self.points[a], self.points[b], self.points[c]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_corners_give_one_triangle() {
        let points = vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)];
        let triangulation = Triangulation::build(points).unwrap();

        assert_eq!(triangulation.len(), 1);
    }

    #[test]
    fn square_splits_into_two_triangles() {
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        let triangulation = Triangulation::build(points).unwrap();

        assert_eq!(triangulation.len(), 2);
    }

    #[test]
    fn indices_are_distinct_and_in_bounds() {
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
            Point::new(5, 5),
            Point::new(3, 7),
        ];
        let triangulation = Triangulation::build(points).unwrap();
        let len = triangulation.points().len();

        for &[a, b, c] in triangulation.triangles() {
            assert!(a < len && b < len && c < len);
            assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn duplicate_points_do_not_break_the_triangulation() {
        let points = vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(8, 0),
            Point::new(8, 0),
            Point::new(0, 8),
        ];
        let triangulation = Triangulation::build(points).unwrap();

        assert!(!triangulation.is_empty());
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let points = vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)];

        assert!(matches!(
            Triangulation::build(points),
            Err(Error::DegenerateInput)
        ));
    }

    #[test]
    fn identical_points_are_degenerate() {
        let points = vec![Point::new(4, 4); 10];

        assert!(matches!(
            Triangulation::build(points),
            Err(Error::DegenerateInput)
        ));
    }
}
