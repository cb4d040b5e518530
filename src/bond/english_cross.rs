//! English cross bond: header courses alternating with stretcher courses that
//! carry a single centred cross header.

use super::repeat;
use crate::config::WallConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::model::{BrickKind, BrickRole, BrickSpec};

#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishCrossBond;

impl EnglishCrossBond {
    pub const NAME: &'static str = "english-cross";

    pub fn generate_course(
        &self,
        course_index: usize,
        config: &WallConfig,
    ) -> LayoutResult<Vec<BrickSpec>> {
        let total = config.total_half_modules()?;
        let header = BrickSpec::new(BrickKind::Header, config.header_length_mm());

        if course_index % 2 == 0 {
            return Ok(repeat(header, total).collect());
        }

        // Two edge half bricks plus the cross header take three half-modules.
        if total < 3 {
            return Err(LayoutError::infeasible(
                Self::NAME,
                course_index,
                format!("stretcher course needs at least 3 half-modules, wall has {total}"),
            ));
        }
        let remaining = total - 3;
        if remaining % 2 != 0 {
            return Err(LayoutError::infeasible(
                Self::NAME,
                course_index,
                format!("{remaining} half-modules beside the cross header leave a half brick"),
            ));
        }

        let fulls = remaining / 2;
        let left = fulls.div_ceil(2);
        let right = fulls - left;
        let half = BrickSpec::new(BrickKind::Half, config.brick_half_length_mm);
        let full = BrickSpec::new(BrickKind::Full, config.brick_full.length);
        let cross = header.with_role(BrickRole::CrossHeader);

        Ok(repeat(half, 1)
            .chain(repeat(full, left))
            .chain(repeat(cross, 1))
            .chain(repeat(full, right))
            .chain(repeat(half, 1))
            .collect())
    }
}
