use crate::config::WallConfig;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a placed brick.
/// Assigned in course-major, left-to-right order starting at zero.
pub type BrickId = usize;

/// A unique identifier for a stride (robot work cell), in row-major order.
pub type StrideId = usize;

/// Tolerance used for geometric containment checks.
pub const GEOMETRY_TOLERANCE: f64 = 1e-6;

/// The cut or orientation of a brick as seen in the wall face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickKind {
    /// Stretcher laid lengthwise.
    Full,
    /// Half bat.
    Half,
    /// Brick laid end-on, exposing its width.
    Header,
    ThreeQuarter,
    Quarter,
}

impl BrickKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Header => "header",
            Self::ThreeQuarter => "three_quarter",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for BrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra structural meaning a pattern attaches to a brick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickRole {
    /// The single centred header of an English cross stretcher course.
    CrossHeader,
}

/// A pattern-level brick template produced by a bond for one course.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrickSpec {
    pub kind: BrickKind,
    pub length_mm: f64,
    pub role: Option<BrickRole>,
}

impl BrickSpec {
    pub fn new(kind: BrickKind, length_mm: f64) -> Self {
        Self {
            kind,
            length_mm,
            role: None,
        }
    }

    pub fn with_role(mut self, role: BrickRole) -> Self {
        self.role = Some(role);
        self
    }
}

/// Total length of a course: every brick plus the head joints between them.
pub fn course_width(specs: &[BrickSpec], head_joint_mm: f64) -> f64 {
    let bricks: f64 = specs.iter().map(|s| s.length_mm).sum();
    let joints = specs.len().saturating_sub(1) as f64 * head_joint_mm;
    bricks + joints
}

/// A brick placed in the wall.
///
/// Coordinates are absolute, with the origin at the bottom-left corner of the
/// wall and `y` growing upwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    /// Course index, 0 being the bottom course.
    pub course_index: usize,
    /// Position within the course, counted from the left edge.
    pub index_in_course: usize,
    pub kind: BrickKind,
    pub role: Option<BrickRole>,
    pub x_mm: f64,
    pub y_mm: f64,
    pub length_mm: f64,
    pub height_mm: f64,
    /// Work cell this brick belongs to. Filled in by the builder after placement.
    pub stride_id: Option<StrideId>,
}

impl Brick {
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.x_mm + self.length_mm / 2.0,
            self.y_mm + self.height_mm / 2.0,
        )
    }

    /// Right edge of the brick, excluding any trailing joint.
    pub fn end_x_mm(&self) -> f64 {
        self.x_mm + self.length_mm
    }
}

/// A rectangular robot work cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stride {
    pub id: StrideId,
    /// Grid row, 0 being the bottom row.
    pub row: usize,
    pub col: usize,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Bricks whose center lies inside this stride, in brick id order.
    pub bricks: Vec<BrickId>,
}

impl Stride {
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x_mm, self.y_mm)
    }

    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width_mm, self.height_mm)
    }

    /// Returns `true` if `point` lies within the stride bounds (inclusive, with tolerance).
    pub fn contains(&self, point: DVec2) -> bool {
        let min = self.origin() - DVec2::splat(GEOMETRY_TOLERANCE);
        let max = self.origin() + self.extent() + DVec2::splat(GEOMETRY_TOLERANCE);
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

/// The finished layout: configuration, every placed brick and the stride grid.
///
/// Built once by [`WallBuilder`](crate::WallBuilder) and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub config: WallConfig,
    /// All bricks, indexed by their id.
    pub bricks: Vec<Brick>,
    /// All strides, indexed by their id.
    pub strides: Vec<Stride>,
}

impl Wall {
    pub fn brick_by_id(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id)
    }

    pub fn stride_by_id(&self, id: StrideId) -> Option<&Stride> {
        self.strides.get(id)
    }

    /// Bricks of one course, left to right.
    pub fn bricks_in_course(&self, course_index: usize) -> impl Iterator<Item = &Brick> {
        self.bricks
            .iter()
            .filter(move |b| b.course_index == course_index)
    }

    /// The stride a brick was assigned to.
    pub fn stride_of(&self, brick: &Brick) -> Option<&Stride> {
        brick.stride_id.and_then(|id| self.stride_by_id(id))
    }

    pub fn course_count(&self) -> usize {
        self.bricks
            .last()
            .map(|b| b.course_index + 1)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}
