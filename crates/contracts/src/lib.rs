//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data Model
//! - A line is raw bytes without its terminator; content outside UTF-8 must
//!   survive the pipeline unchanged.
//! - `TeePlan` is built once by the configuration layer and is read-only afterwards.

mod error;
mod plan;
mod sink;
mod store;

pub use error::*;
pub use plan::*;
pub use sink::*;
pub use store::*;
