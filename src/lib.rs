//! # brickwork
//!
//! An engine-agnostic layout crate that turns a declarative wall description
//! into a robot construction plan.
//!
//! A [`WallConfig`] and a [`Bond`] go into a [`WallBuilder`], which produces a
//! [`Wall`]: every brick positioned in absolute millimetres and assigned to a
//! [`Stride`], the fixed-size work cell a robot can reach without moving its
//! platform. A [`BuildStrategy`] then orders the bricks to keep platform moves
//! to a minimum. Rendering and interaction are left to the consumer.

pub mod bond;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod order;

pub use bond::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use model::*;
pub use order::*;
