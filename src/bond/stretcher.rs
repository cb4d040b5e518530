//! Running (stretcher) bond: full bricks offset by half a brick every course.

use super::repeat;
use crate::config::WallConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::model::{BrickKind, BrickSpec};

/// Classic stretcher bond.
///
/// Even courses run full bricks edge to edge with one half brick in the
/// middle; odd courses start and end with half bricks so the head joints
/// land over the middle of the bricks below.
#[derive(Clone, Copy, Debug, Default)]
pub struct StretcherBond;

impl StretcherBond {
    pub const NAME: &'static str = "stretcher";

    pub fn generate_course(
        &self,
        course_index: usize,
        config: &WallConfig,
    ) -> LayoutResult<Vec<BrickSpec>> {
        let total = config.total_half_modules()?;
        let full = BrickSpec::new(BrickKind::Full, config.brick_full.length);
        let half = BrickSpec::new(BrickKind::Half, config.brick_half_length_mm);

        if course_index % 2 == 0 {
            even_course(course_index, total, full, half)
        } else {
            odd_course(course_index, total, full, half)
        }
    }
}

/// Smallest half-brick count from `start`, stepping by `step`, that leaves an
/// even number of modules for full bricks.
fn half_count(total: usize, start: usize, step: usize) -> Option<usize> {
    (start..=total)
        .step_by(step)
        .find(|half| (total - half) % 2 == 0)
}

fn even_course(
    course: usize,
    total: usize,
    full: BrickSpec,
    half: BrickSpec,
) -> LayoutResult<Vec<BrickSpec>> {
    let halves = half_count(total, 1, 2).ok_or_else(|| {
        LayoutError::infeasible(
            StretcherBond::NAME,
            course,
            format!("{total} half-modules leave no room for an odd half-brick count"),
        )
    })?;
    let fulls = (total - halves) / 2;
    if fulls < 2 {
        return Err(LayoutError::infeasible(
            StretcherBond::NAME,
            course,
            "even course needs at least two full bricks",
        ));
    }

    let left = fulls / 2;
    let right = fulls - left;
    Ok(repeat(full, left)
        .chain(repeat(half, 1))
        .chain(repeat(full, right))
        .collect())
}

fn odd_course(
    course: usize,
    total: usize,
    full: BrickSpec,
    half: BrickSpec,
) -> LayoutResult<Vec<BrickSpec>> {
    let halves = half_count(total, 2, 1).ok_or_else(|| {
        LayoutError::infeasible(
            StretcherBond::NAME,
            course,
            format!("{total} half-modules cannot hold two edge half bricks"),
        )
    })?;
    let fulls = (total - halves) / 2;
    if fulls < 1 {
        return Err(LayoutError::infeasible(
            StretcherBond::NAME,
            course,
            "odd course needs at least one full brick",
        ));
    }

    let left = fulls / 2;
    let mut right = fulls - left;
    let mut sequence = Vec::with_capacity(fulls + halves);
    sequence.push(half);
    sequence.extend(repeat(full, left));
    for _ in 0..halves - 2 {
        sequence.push(half);
        if right > 0 {
            sequence.push(full);
            right -= 1;
        }
    }
    sequence.extend(repeat(full, right));
    sequence.push(half);
    Ok(sequence)
}
