//! Spatial value generators.

use super::numeric::random_coordinate;
use adm_core::{Value, ValueError};
use rand::Rng;

/// Fewest vertices a generated polygon gets.
pub const MIN_GENERATED_POLYGON_POINTS: usize = 4;

pub fn generate_point<R: Rng>(rng: &mut R) -> Value {
    Value::point(random_coordinate(rng), random_coordinate(rng))
}

pub fn generate_line<R: Rng>(rng: &mut R) -> Value {
    Value::line(
        random_coordinate(rng),
        random_coordinate(rng),
        random_coordinate(rng),
        random_coordinate(rng),
    )
}

pub fn generate_rectangle<R: Rng>(rng: &mut R) -> Value {
    Value::rectangle(
        random_coordinate(rng),
        random_coordinate(rng),
        random_coordinate(rng),
        random_coordinate(rng),
    )
}

pub fn generate_circle<R: Rng>(rng: &mut R) -> Value {
    Value::circle(
        random_coordinate(rng),
        random_coordinate(rng),
        random_coordinate(rng),
    )
}

/// Generate a polygon with `points` vertices, never fewer than four.
pub fn generate_polygon<R: Rng>(rng: &mut R, points: usize) -> Result<Value, ValueError> {
    let points = points.max(MIN_GENERATED_POLYGON_POINTS);
    let mut xs = Vec::with_capacity(points);
    let mut ys = Vec::with_capacity(points);
    for _ in 0..points {
        xs.push(random_coordinate(rng));
        ys.push(random_coordinate(rng));
    }
    Value::polygon(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_polygon_minimum_points() {
        let mut rng = StdRng::seed_from_u64(42);

        if let Value::Polygon(polygon) = generate_polygon(&mut rng, 2).unwrap() {
            assert_eq!(polygon.len(), MIN_GENERATED_POLYGON_POINTS);
        } else {
            panic!("Expected Polygon value");
        }

        if let Value::Polygon(polygon) = generate_polygon(&mut rng, 6).unwrap() {
            assert_eq!(polygon.len(), 6);
        } else {
            panic!("Expected Polygon value");
        }
    }

    #[test]
    fn test_rectangle_is_rectangle() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(generate_rectangle(&mut rng), Value::Rectangle(_)));
        assert!(matches!(generate_line(&mut rng), Value::Line(_)));
    }
}
