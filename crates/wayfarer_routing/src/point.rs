use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// A labelled position in a 2-D euclidean plane.
///
/// Points are ordered by their distance to the origin `(0, 0)`. Points at
/// the same distance fall back to the label and then the coordinates so
/// that the ordering stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    label: String,
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(label: impl Into<String>, x: i32, y: i32) -> Self {
        Point {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn distance(&self, other: &Point) -> f64 {
        euclidean_distance(self.x, self.y, other.x, other.y)
    }

    pub fn origin_distance(&self) -> f64 {
        euclidean_distance(self.x, self.y, 0, 0)
    }
}

#[inline(always)]
pub(crate) fn euclidean_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
    let dx = f64::from(x1) - f64::from(x2);
    let dy = f64::from(y1) - f64::from(y2);
    (dx * dx + dy * dy).sqrt()
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.origin_distance()
            .total_cmp(&other.origin_distance())
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.x.cmp(&other.x))
            .then_with(|| self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {},{}", self.label, self.x, self.y)
    }
}
