//! Build-order strategies: the sequence in which a robot lays the bricks of a [`Wall`].

use crate::error::{LayoutError, LayoutResult};
use crate::model::{Brick, BrickId, Wall};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How bricks are ordered for construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStrategy {
    /// Stride by stride, bottom row first, serpentine inside each stride.
    #[default]
    Optimized,
    /// Whole courses from the bottom up, left to right, ignoring strides.
    CourseByCourse,
}

impl BuildStrategy {
    pub const ALL: [BuildStrategy; 2] = [Self::Optimized, Self::CourseByCourse];

    pub fn from_name(name: &str) -> LayoutResult<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| LayoutError::UnknownStrategy(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Optimized => "optimized",
            Self::CourseByCourse => "course-by-course",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Optimized => {
                "Bottom stride row first, left-to-right across strides, then move platform up; \
                 serpentine traversal inside each stride."
            }
            Self::CourseByCourse => {
                "Complete each course across the whole wall before starting the next."
            }
        }
    }

    /// Returns every brick id of `wall` exactly once, in build order.
    pub fn order_bricks(self, wall: &Wall) -> Vec<BrickId> {
        match self {
            Self::Optimized => optimized_order(wall),
            Self::CourseByCourse => wall.bricks.iter().map(|b| b.id).collect(),
        }
    }

    /// Counts platform moves implied by `order`.
    pub fn summarize(self, wall: &Wall, order: &[BrickId]) -> BuildSummary {
        BuildSummary::of(wall, order)
    }
}

impl FromStr for BuildStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Every build strategy keyed by name, in presentation order.
pub fn strategy_catalog() -> Vec<(&'static str, BuildStrategy)> {
    BuildStrategy::ALL
        .into_iter()
        .map(|strategy| (strategy.name(), strategy))
        .collect()
}

fn optimized_order(wall: &Wall) -> Vec<BrickId> {
    let mut strides: Vec<_> = wall.strides.iter().collect();
    strides.sort_by_key(|s| (s.row, s.col));

    let mut ordered = Vec::with_capacity(wall.bricks.len());
    for stride in strides {
        let mut bricks: Vec<&Brick> = stride
            .bricks
            .iter()
            .filter_map(|&id| wall.brick_by_id(id))
            .collect();
        bricks.sort_by(|a, b| {
            a.course_index
                .cmp(&b.course_index)
                .then(a.x_mm.total_cmp(&b.x_mm))
        });

        for course in bricks.chunk_by_mut(|a, b| a.course_index == b.course_index) {
            // Odd courses run right to left so the robot does not jump back.
            if course[0].course_index % 2 == 1 {
                course.reverse();
            }
            ordered.extend(course.iter().map(|b| b.id));
        }
    }
    ordered
}

/// Diagnostic counts for a build order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Number of times consecutive bricks belong to different strides.
    pub stride_switches: usize,
    pub distinct_strides: usize,
    pub total_bricks: usize,
}

impl BuildSummary {
    pub fn of(wall: &Wall, order: &[BrickId]) -> Self {
        let strides: Vec<_> = order
            .iter()
            .map(|&id| wall.brick_by_id(id).and_then(|b| b.stride_id))
            .collect();
        let stride_switches = strides.windows(2).filter(|w| w[0] != w[1]).count();
        let distinct_strides = strides.iter().collect::<BTreeSet<_>>().len();

        Self {
            stride_switches,
            distinct_strides,
            total_bricks: order.len(),
        }
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stride switches={}, distinct strides={}, total bricks={}",
            self.stride_switches, self.distinct_strides, self.total_bricks
        )
    }
}
