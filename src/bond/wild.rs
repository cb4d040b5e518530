//! Wild bond: randomised courses of half and full bricks under structural constraints.
//!
//! Each course is a sequence of half-module increments (`1` = half brick,
//! `2` = full brick) summing to the wall's half-module count. A randomised
//! depth-first search picks the sequence, pruning on:
//!
//! * adjacency: two half bricks may only touch at a wall edge;
//! * overlap: internal joints lining up with more than [`overlap_limit`]
//!   joints of either of the last two courses.
//!
//! A found course must also contain both brick sizes, and must not extend a
//! run of same-direction [`Drift`] beyond the configured maximum. Failed
//! attempts are retried up to the attempt budget.

use crate::config::WallConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::model::{BrickKind, BrickSpec, GEOMETRY_TOLERANCE};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

pub const DEFAULT_MAX_OVERLAP_RATIO: f64 = 0.35;
pub const DEFAULT_MAX_ATTEMPTS: usize = 500;
pub const DEFAULT_MAX_DRIFT_RUN: usize = 6;

/// Number of previous courses whose joints constrain the next one.
const HISTORY_DEPTH: usize = 2;

const HALF: u8 = 1;
const FULL: u8 = 2;

/// Net horizontal direction in which a course's joints moved relative to the course below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
    Left,
    Right,
}

/// Randomised bond with cross-course joint constraints.
#[derive(Clone, Debug)]
pub struct WildBond {
    seed: Option<u64>,
    max_overlap_ratio: f64,
    max_attempts: usize,
    max_drift_run: usize,
    state: SearchState,
}

/// Per-build state carried from one course to the next.
#[derive(Clone, Debug)]
struct SearchState {
    rng: StdRng,
    /// Internal joint positions of the most recent courses, oldest first.
    history: Vec<Vec<f64>>,
    drift: Option<Drift>,
    run_length: usize,
}

impl SearchState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            history: Vec::with_capacity(HISTORY_DEPTH),
            drift: None,
            run_length: 0,
        }
    }
}

impl Default for WildBond {
    fn default() -> Self {
        Self::new()
    }
}

impl WildBond {
    pub const NAME: &'static str = "wild";

    /// Creates an unseeded wild bond; every build draws fresh entropy.
    pub fn new() -> Self {
        Self {
            seed: None,
            max_overlap_ratio: DEFAULT_MAX_OVERLAP_RATIO,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_drift_run: DEFAULT_MAX_DRIFT_RUN,
            state: SearchState::new(None),
        }
    }

    /// Fixes the random seed so that every build produces the same wall.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.state = SearchState::new(self.seed);
        self
    }

    /// Fraction of a course's joints that may line up with a previous course.
    pub fn with_max_overlap_ratio(mut self, ratio: f64) -> Self {
        self.max_overlap_ratio = ratio;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Longest allowed run of courses drifting in the same direction.
    pub fn with_max_drift_run(mut self, run: usize) -> Self {
        self.max_drift_run = run;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn max_overlap_ratio(&self) -> f64 {
        self.max_overlap_ratio
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn max_drift_run(&self) -> usize {
        self.max_drift_run
    }

    /// Joints a course may share with each tracked course on a wall built from `config`.
    pub fn overlap_limit(&self, config: &WallConfig) -> LayoutResult<usize> {
        Ok(overlap_limit(config.total_half_modules()?, self.max_overlap_ratio))
    }

    /// Forgets previous courses and re-seeds the generator.
    pub fn reset(&mut self, config: &WallConfig) {
        self.state = SearchState::new(self.seed);
        debug!(
            seed = ?self.seed,
            overlap_limit = ?self.overlap_limit(config).ok(),
            "wild bond reset"
        );
    }

    pub fn generate_course(
        &mut self,
        course_index: usize,
        config: &WallConfig,
    ) -> LayoutResult<Vec<BrickSpec>> {
        let total = config.total_half_modules()?;
        let tolerance = joint_tolerance(config);
        let limit = self.overlap_limit(config)?;

        for attempt in 1..=self.max_attempts {
            let SearchState { rng, history, .. } = &mut self.state;
            let search = CourseSearch {
                total,
                limit,
                tolerance,
                half_module_mm: config.half_module_mm(),
                head_joint_mm: config.head_joint_mm,
                previous: history,
            };

            let Some(increments) = search.run(rng) else {
                // The search is exhaustive, so another shuffle cannot succeed either.
                debug!(course_index, attempt, "no wild course satisfies the constraints");
                return Err(LayoutError::SearchExhausted {
                    course: course_index,
                    attempts: attempt,
                });
            };

            let joints =
                internal_joints(&increments, config.half_module_mm(), config.head_joint_mm);
            let drift = self
                .state
                .history
                .last()
                .and_then(|previous| drift_direction(previous, &joints, tolerance));
            let run = next_run_length(self.state.drift, self.state.run_length, drift);
            if run > self.max_drift_run {
                trace!(course_index, attempt, ?drift, run, "drift run too long, retrying");
                continue;
            }

            trace!(course_index, attempt, ?increments, "wild course found");
            self.commit(joints, drift, run);
            return Ok(increments
                .iter()
                .map(|&step| match step {
                    HALF => BrickSpec::new(BrickKind::Half, config.brick_half_length_mm),
                    _ => BrickSpec::new(BrickKind::Full, config.brick_full.length),
                })
                .collect());
        }

        Err(LayoutError::SearchExhausted {
            course: course_index,
            attempts: self.max_attempts,
        })
    }

    fn commit(&mut self, joints: Vec<f64>, drift: Option<Drift>, run: usize) {
        let state = &mut self.state;
        state.history.push(joints);
        if state.history.len() > HISTORY_DEPTH {
            state.history.remove(0);
        }
        state.drift = drift;
        state.run_length = run;
    }
}

/// One randomised depth-first search for a single course.
struct CourseSearch<'a> {
    total: usize,
    limit: usize,
    tolerance: f64,
    half_module_mm: f64,
    head_joint_mm: f64,
    previous: &'a [Vec<f64>],
}

impl CourseSearch<'_> {
    fn run(&self, rng: &mut StdRng) -> Option<Vec<u8>> {
        let mut placed = Vec::with_capacity(self.total);
        let mut overlaps = [0usize; HISTORY_DEPTH];
        self.extend(rng, &mut placed, 0, &mut overlaps)
            .then_some(placed)
    }

    fn extend(
        &self,
        rng: &mut StdRng,
        placed: &mut Vec<u8>,
        modules: usize,
        overlaps: &mut [usize; HISTORY_DEPTH],
    ) -> bool {
        if modules == self.total {
            return has_both_sizes(placed);
        }

        let mut choices = [HALF, FULL];
        choices.shuffle(rng);
        for step in choices {
            let next = modules + step as usize;
            if next > self.total {
                continue;
            }
            let completes = next == self.total;
            if violates_adjacency(placed, step, completes) {
                continue;
            }

            let saved = *overlaps;
            if !completes {
                let joint = joint_position(next, self.half_module_mm, self.head_joint_mm);
                if !self.record_joint(joint, overlaps) {
                    *overlaps = saved;
                    continue;
                }
            }

            placed.push(step);
            if self.extend(rng, placed, next, overlaps) {
                return true;
            }
            placed.pop();
            *overlaps = saved;
        }
        false
    }

    /// Counts `joint` against every tracked course; `false` if any budget is exceeded.
    fn record_joint(&self, joint: f64, overlaps: &mut [usize; HISTORY_DEPTH]) -> bool {
        for (count, previous) in overlaps.iter_mut().zip(self.previous) {
            if joint_matches(joint, previous, self.tolerance) {
                *count += 1;
                if *count > self.limit {
                    return false;
                }
            }
        }
        true
    }
}

/// Maximum number of internal joints a course may share with one previous course.
pub fn overlap_limit(total_half_modules: usize, max_overlap_ratio: f64) -> usize {
    let internal = total_half_modules.saturating_sub(1) as f64;
    ((internal * max_overlap_ratio).floor() as usize).max(1)
}

/// Distance within which two joints count as coincident.
pub fn joint_tolerance(config: &WallConfig) -> f64 {
    (config.head_joint_mm / 2.0).max(GEOMETRY_TOLERANCE)
}

/// Returns `true` if placing `next` after `placed` would put two half bricks
/// side by side away from the wall edges.
pub fn violates_adjacency(placed: &[u8], next: u8, completes_course: bool) -> bool {
    next == HALF && placed.len() >= 2 && placed.last() == Some(&HALF) && !completes_course
}

fn has_both_sizes(increments: &[u8]) -> bool {
    increments.contains(&HALF) && increments.contains(&FULL)
}

/// Center of the head joint that follows `modules` half-modules.
fn joint_position(modules: usize, half_module_mm: f64, head_joint_mm: f64) -> f64 {
    modules as f64 * half_module_mm - head_joint_mm / 2.0
}

/// Internal joint centers of a course, excluding both wall edges.
pub fn internal_joints(increments: &[u8], half_module_mm: f64, head_joint_mm: f64) -> Vec<f64> {
    let mut modules = 0usize;
    let mut joints = Vec::with_capacity(increments.len().saturating_sub(1));
    for &step in increments.iter().take(increments.len().saturating_sub(1)) {
        modules += step as usize;
        joints.push(joint_position(modules, half_module_mm, head_joint_mm));
    }
    joints
}

pub fn joint_matches(joint: f64, previous: &[f64], tolerance: f64) -> bool {
    previous.iter().any(|p| (p - joint).abs() <= tolerance)
}

/// Number of joints in `current` that line up with a joint in `previous`.
pub fn count_matching_joints(current: &[f64], previous: &[f64], tolerance: f64) -> usize {
    current
        .iter()
        .filter(|&&joint| joint_matches(joint, previous, tolerance))
        .count()
}

/// Direction the joints moved from `previous` to `current`.
///
/// Joints are compared index by index. Only a unanimous sign among the
/// deltas larger than `tolerance` counts as drift.
pub fn drift_direction(previous: &[f64], current: &[f64], tolerance: f64) -> Option<Drift> {
    let mut direction = None;
    for (before, after) in previous.iter().zip(current) {
        let delta = after - before;
        if delta.abs() <= tolerance {
            continue;
        }
        let step = if delta > 0.0 { Drift::Right } else { Drift::Left };
        match direction {
            None => direction = Some(step),
            Some(d) if d != step => return None,
            Some(_) => {}
        }
    }
    direction
}

/// Length of the same-direction drift run after a course drifting `drift`.
pub fn next_run_length(previous: Option<Drift>, run_length: usize, drift: Option<Drift>) -> usize {
    match drift {
        None => 0,
        Some(d) if previous == Some(d) => run_length + 1,
        Some(_) => 1,
    }
}
