//! Dimensional parameters of a wall and the module arithmetic derived from them.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that a dimension divides into whole modules.
const MODULE_TOLERANCE: f64 = 1e-6;

/// Nominal dimensions of a full brick, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrickSize {
    /// Stretcher face length (along the wall).
    pub length: f64,
    /// Header face length (through the wall).
    pub width: f64,
    pub height: f64,
}

/// Configuration for wall generation.
///
/// All lengths are in millimetres. The default is the reference wall:
/// 2300 x 2000mm built from 210 x 100 x 50mm bricks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    pub wall_width_mm: f64,
    pub wall_height_mm: f64,
    pub brick_full: BrickSize,
    pub brick_half_length_mm: f64,
    /// Vertical mortar gap between neighbouring bricks in a course.
    pub head_joint_mm: f64,
    /// Horizontal mortar gap between courses.
    pub bed_joint_mm: f64,
    /// Vertical pitch of one course (brick height + bed joint).
    pub course_height_mm: f64,
    /// Width of one robot work cell.
    pub stride_width_mm: f64,
    /// Height of one robot work cell.
    pub stride_height_mm: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            wall_width_mm: 2300.0,
            wall_height_mm: 2000.0,
            brick_full: BrickSize {
                length: 210.0,
                width: 100.0,
                height: 50.0,
            },
            brick_half_length_mm: 100.0,
            head_joint_mm: 10.0,
            bed_joint_mm: 12.5,
            course_height_mm: 62.5,
            stride_width_mm: 800.0,
            stride_height_mm: 1300.0,
        }
    }
}

impl WallConfig {
    /// Checks every dimension and the half-module alignment of the wall width.
    pub fn validate(&self) -> LayoutResult<()> {
        let positive = [
            ("wall_width_mm", self.wall_width_mm),
            ("wall_height_mm", self.wall_height_mm),
            ("brick_full.length", self.brick_full.length),
            ("brick_full.width", self.brick_full.width),
            ("brick_full.height", self.brick_full.height),
            ("brick_half_length_mm", self.brick_half_length_mm),
            ("course_height_mm", self.course_height_mm),
            ("stride_width_mm", self.stride_width_mm),
            ("stride_height_mm", self.stride_height_mm),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension { field, value });
            }
        }
        // Joints may be zero (dry-stacked) but never negative.
        for (field, value) in [
            ("head_joint_mm", self.head_joint_mm),
            ("bed_joint_mm", self.bed_joint_mm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidDimension { field, value });
            }
        }
        self.total_half_modules().map(|_| ())
    }

    /// Half-brick length plus one head joint.
    pub fn half_module_mm(&self) -> f64 {
        self.brick_half_length_mm + self.head_joint_mm
    }

    /// Full-brick length plus one head joint.
    pub fn full_module_mm(&self) -> f64 {
        self.brick_full.length + self.head_joint_mm
    }

    /// Length of a header brick's exposed face.
    pub fn header_length_mm(&self) -> f64 {
        self.brick_full.width
    }

    pub fn course_count(&self) -> usize {
        (self.wall_height_mm / self.course_height_mm).round() as usize
    }

    /// Number of half-modules spanning the wall width.
    ///
    /// One head joint is added to the width because a course has no trailing
    /// joint after its last brick.
    pub fn total_half_modules(&self) -> LayoutResult<usize> {
        let modules = (self.wall_width_mm + self.head_joint_mm) / self.half_module_mm();
        if !modules.is_finite() || (modules.round() - modules).abs() > MODULE_TOLERANCE {
            return Err(LayoutError::MisalignedWidth {
                width_mm: self.wall_width_mm,
                half_module_mm: self.half_module_mm(),
                modules,
            });
        }
        Ok(modules.round() as usize)
    }

    /// Number of stride columns; the last one may be narrower than a full stride.
    pub fn stride_columns(&self) -> usize {
        ((self.wall_width_mm / self.stride_width_mm).ceil() as usize).max(1)
    }

    /// Number of stride rows; the last one may be shorter than a full stride.
    pub fn stride_rows(&self) -> usize {
        ((self.wall_height_mm / self.stride_height_mm).ceil() as usize).max(1)
    }

    /// Wall width for `modules` half-modules, with everything else unchanged.
    pub fn with_half_modules(mut self, modules: usize) -> Self {
        self.wall_width_mm = modules as f64 * self.half_module_mm() - self.head_joint_mm;
        self
    }
}
