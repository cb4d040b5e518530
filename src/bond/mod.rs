//! Bond patterns: per-course brick sequencing rules.
//!
//! A [`Bond`] is obtained by name from [`Bond::from_name`] or [`bond_catalog`];
//! each call yields a fresh instance, so independent builds never share
//! search state. [`Bond::reset`] must run once before the first course of a
//! build, which [`WallBuilder::build`](crate::WallBuilder::build) does.

mod english_cross;
mod flemish;
mod stretcher;
pub mod wild;

pub use english_cross::EnglishCrossBond;
pub use flemish::FlemishBond;
pub use stretcher::StretcherBond;
pub use wild::WildBond;

use crate::config::WallConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::model::{BrickSpec, course_width};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Course width must match the wall width within this tolerance (mm).
pub const WIDTH_TOLERANCE: f64 = 1e-6;

/// Name of the bond used when none is specified.
pub const DEFAULT_BOND_NAME: &str = StretcherBond::NAME;

/// A masonry bond pattern.
#[derive(Clone, Debug)]
pub enum Bond {
    Stretcher(StretcherBond),
    Flemish(FlemishBond),
    EnglishCross(EnglishCrossBond),
    Wild(WildBond),
}

impl Default for Bond {
    fn default() -> Self {
        Self::Stretcher(StretcherBond)
    }
}

impl Bond {
    /// Names accepted by [`Bond::from_name`].
    pub const NAMES: [&'static str; 4] = [
        StretcherBond::NAME,
        FlemishBond::NAME,
        EnglishCrossBond::NAME,
        WildBond::NAME,
    ];

    /// Creates a fresh bond instance for `name`.
    pub fn from_name(name: &str) -> LayoutResult<Self> {
        match name {
            StretcherBond::NAME => Ok(Self::Stretcher(StretcherBond)),
            FlemishBond::NAME => Ok(Self::Flemish(FlemishBond)),
            EnglishCrossBond::NAME => Ok(Self::EnglishCross(EnglishCrossBond)),
            WildBond::NAME => Ok(Self::Wild(WildBond::new())),
            other => Err(LayoutError::UnknownBond(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stretcher(_) => StretcherBond::NAME,
            Self::Flemish(_) => FlemishBond::NAME,
            Self::EnglishCross(_) => EnglishCrossBond::NAME,
            Self::Wild(_) => WildBond::NAME,
        }
    }

    /// Clears any cross-course state. Call once before generating a new wall.
    pub fn reset(&mut self, config: &WallConfig) {
        if let Self::Wild(bond) = self {
            bond.reset(config);
        }
    }

    /// Generates the brick sequence for `course_index`, left to right.
    ///
    /// The returned course always spans exactly the wall width; a strategy
    /// whose arithmetic disagrees is reported as [`LayoutError::WidthMismatch`].
    pub fn generate_course(
        &mut self,
        course_index: usize,
        config: &WallConfig,
    ) -> LayoutResult<Vec<BrickSpec>> {
        let specs = match self {
            Self::Stretcher(bond) => bond.generate_course(course_index, config)?,
            Self::Flemish(bond) => bond.generate_course(course_index, config)?,
            Self::EnglishCross(bond) => bond.generate_course(course_index, config)?,
            Self::Wild(bond) => bond.generate_course(course_index, config)?,
        };

        let width = course_width(&specs, config.head_joint_mm);
        if (width - config.wall_width_mm).abs() > WIDTH_TOLERANCE {
            return Err(LayoutError::WidthMismatch {
                course: course_index,
                expected_mm: config.wall_width_mm,
                actual_mm: width,
            });
        }
        Ok(specs)
    }
}

impl FromStr for Bond {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Every known bond, freshly constructed, keyed by name.
pub fn bond_catalog() -> BTreeMap<&'static str, Bond> {
    [
        Bond::Stretcher(StretcherBond),
        Bond::Flemish(FlemishBond),
        Bond::EnglishCross(EnglishCrossBond),
        Bond::Wild(WildBond::new()),
    ]
    .into_iter()
    .map(|bond| (bond.name(), bond))
    .collect()
}

/// Repeats one brick template `count` times.
pub(crate) fn repeat(spec: BrickSpec, count: usize) -> impl Iterator<Item = BrickSpec> {
    std::iter::repeat_n(spec, count)
}
