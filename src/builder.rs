//! Builder that lays out a [`Wall`] course by course and partitions it into strides.
//!
//! The entry point is [`WallBuilder`]. Give it a validated [`WallConfig`] and a
//! [`Bond`], then call [`WallBuilder::build`].

use crate::bond::Bond;
use crate::config::WallConfig;
use crate::error::LayoutResult;
use crate::model::{Brick, Stride, StrideId, Wall};
use tracing::{debug, info};

/// Turns a configuration and a bond into a positioned, stride-assigned wall.
#[derive(Clone, Debug)]
pub struct WallBuilder {
    config: WallConfig,
    bond: Bond,
}

impl WallBuilder {
    /// Creates a builder, rejecting an invalid configuration up front.
    pub fn new(config: WallConfig, bond: Bond) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config, bond })
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    pub fn bond(&self) -> &Bond {
        &self.bond
    }

    /// Generates every course, computes the stride grid and assigns bricks to strides.
    ///
    /// The bond is reset first, so repeated builds never see each other's
    /// state. Any failure aborts the build; no partial wall is returned.
    ///
    /// # Placement
    ///
    /// Course `n` sits at `y = n × course_height`. Within a course, bricks are
    /// laid from `x = 0` with one head joint between neighbours and none after
    /// the last brick. Brick ids increase course by course, left to right.
    pub fn build(&mut self) -> LayoutResult<Wall> {
        self.bond.reset(&self.config);

        let mut bricks = self.place_bricks()?;
        let mut strides = self.stride_grid();
        self.assign_strides(&mut bricks, &mut strides);

        info!(
            bond = self.bond.name(),
            bricks = bricks.len(),
            strides = strides.len(),
            courses = self.config.course_count(),
            "wall built"
        );
        Ok(Wall {
            config: self.config,
            bricks,
            strides,
        })
    }

    fn place_bricks(&mut self) -> LayoutResult<Vec<Brick>> {
        let config = self.config;
        let mut bricks = Vec::new();

        for course_index in 0..config.course_count() {
            let specs = self.bond.generate_course(course_index, &config)?;
            let y_mm = course_index as f64 * config.course_height_mm;
            let mut x_mm = 0.0;
            debug!(course_index, bricks = specs.len(), "course generated");

            for (index_in_course, spec) in specs.iter().enumerate() {
                if index_in_course > 0 {
                    x_mm += config.head_joint_mm;
                }
                bricks.push(Brick {
                    id: bricks.len(),
                    course_index,
                    index_in_course,
                    kind: spec.kind,
                    role: spec.role,
                    x_mm,
                    y_mm,
                    length_mm: spec.length_mm,
                    height_mm: config.brick_full.height,
                    stride_id: None,
                });
                x_mm += spec.length_mm;
            }
        }
        Ok(bricks)
    }

    /// Row-major grid of strides, clipped to the wall at the far edges.
    fn stride_grid(&self) -> Vec<Stride> {
        let config = &self.config;
        let (rows, cols) = (config.stride_rows(), config.stride_columns());
        let mut strides = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            let y_mm = row as f64 * config.stride_height_mm;
            let height_mm = config.stride_height_mm.min(config.wall_height_mm - y_mm);
            for col in 0..cols {
                let x_mm = col as f64 * config.stride_width_mm;
                strides.push(Stride {
                    id: strides.len(),
                    row,
                    col,
                    x_mm,
                    y_mm,
                    width_mm: config.stride_width_mm.min(config.wall_width_mm - x_mm),
                    height_mm,
                    bricks: Vec::new(),
                });
            }
        }
        strides
    }

    /// Puts each brick in the stride containing its center.
    ///
    /// Indices are clamped to the last row and column so that a center that
    /// rounds onto the far wall edge still lands in the grid.
    fn assign_strides(&self, bricks: &mut [Brick], strides: &mut [Stride]) {
        let config = &self.config;
        let (rows, cols) = (config.stride_rows(), config.stride_columns());

        for brick in bricks.iter_mut() {
            let center = brick.center();
            let col = grid_index(center.x, config.stride_width_mm, cols);
            let row = grid_index(center.y, config.stride_height_mm, rows);
            let stride_id: StrideId = row * cols + col;
            brick.stride_id = Some(stride_id);
            strides[stride_id].bricks.push(brick.id);
        }
    }
}

/// Cell index of `coord` along one axis, clamped to `0..count`.
fn grid_index(coord: f64, cell_size: f64, count: usize) -> usize {
    ((coord / cell_size).floor().max(0.0) as usize).min(count - 1)
}

impl Default for WallBuilder {
    fn default() -> Self {
        Self {
            config: WallConfig::default(),
            bond: Bond::default(),
        }
    }
}
