//! Flemish bond: headers and stretchers alternate within every course.

use super::WIDTH_TOLERANCE;
use crate::config::WallConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::model::{BrickKind, BrickSpec};

#[derive(Clone, Copy, Debug, Default)]
pub struct FlemishBond;

impl FlemishBond {
    pub const NAME: &'static str = "flemish";

    /// Lays alternating bricks left to right until the wall width is reached.
    ///
    /// Even courses open with a header, odd courses with a stretcher.
    pub fn generate_course(
        &self,
        course_index: usize,
        config: &WallConfig,
    ) -> LayoutResult<Vec<BrickSpec>> {
        // Brick lengths must be positive for the greedy walk to terminate.
        config.validate()?;
        let header = BrickSpec::new(BrickKind::Header, config.header_length_mm());
        let stretcher = BrickSpec::new(BrickKind::Full, config.brick_full.length);
        let target = config.wall_width_mm;

        let mut expect_header = course_index % 2 == 0;
        let mut sequence = Vec::new();
        let mut width = 0.0;
        loop {
            let next = if expect_header { header } else { stretcher };
            let joint = if sequence.is_empty() {
                0.0
            } else {
                config.head_joint_mm
            };
            let candidate = width + joint + next.length_mm;
            if candidate > target + WIDTH_TOLERANCE {
                return Err(LayoutError::infeasible(
                    Self::NAME,
                    course_index,
                    format!(
                        "{} would overshoot the {target}mm wall at {candidate}mm",
                        next.kind
                    ),
                ));
            }
            sequence.push(next);
            width = candidate;
            if (width - target).abs() <= WIDTH_TOLERANCE {
                return Ok(sequence);
            }
            expect_header = !expect_header;
        }
    }
}
