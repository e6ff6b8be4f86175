use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Plain 2D point in either true or observed space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// Role of an anchor in the three-anchor solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorLabel {
    A,
    B,
    C,
}

impl AnchorLabel {
    pub const ALL: [AnchorLabel; 3] = [AnchorLabel::A, AnchorLabel::B, AnchorLabel::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            AnchorLabel::A => 0,
            AnchorLabel::B => 1,
            AnchorLabel::C => 2,
        }
    }
}

impl std::fmt::Display for AnchorLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AnchorLabel::A => "A",
            AnchorLabel::B => "B",
            AnchorLabel::C => "C",
        };
        f.write_str(s)
    }
}

/// Exactly three labelled anchors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchors(pub [Point2D; 3]);

impl Anchors {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn get(&self, label: AnchorLabel) -> Point2D {
        self.0[label.index()]
    }

    pub fn points(&self) -> &[Point2D; 3] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnchorLabel, Point2D)> + '_ {
        AnchorLabel::ALL.into_iter().map(move |l| (l, self.get(l)))
    }

    /// Euclidean distances from `point` to each anchor, in label order.
    pub fn distances_to(&self, point: &Point2D) -> [f64; 3] {
        self.0.map(|a| a.distance(point))
    }
}

impl From<[Point2D; 3]> for Anchors {
    fn from(points: [Point2D; 3]) -> Self {
        Self(points)
    }
}

impl Default for Anchors {
    /// Right-angle triangle used by the demos.
    fn default() -> Self {
        Self([
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(0.0, 100.0),
        ])
    }
}

/// "The unknown point is `distance` away from `anchor`."
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub anchor: Point2D,
    pub distance: f64,
}

impl Observation {
    pub fn new(anchor: Point2D, distance: f64) -> Self {
        Self { anchor, distance }
    }
}

/// Pairs each anchor with its distance, in label order.
pub fn observations_from(anchors: &Anchors, distances: &[f64; 3]) -> [Observation; 3] {
    [0usize, 1, 2].map(|i| Observation::new(anchors.0[i], distances[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn anchors_are_indexed_by_label() {
        let anchors = Anchors::default();
        assert_eq!(anchors.get(AnchorLabel::B), Point2D::new(100.0, 0.0));
        let labels: Vec<String> = anchors.iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn observations_follow_label_order() {
        let anchors = Anchors::default();
        let obs = observations_from(&anchors, &[1.0, 2.0, 3.0]);
        assert_eq!(obs[2].anchor, Point2D::new(0.0, 100.0));
        assert_eq!(obs[2].distance, 3.0);
    }
}
