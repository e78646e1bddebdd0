//! # Lane Common
//!
//! Common types and shared abstractions for the battle lane.
//!
//! This crate provides the foundational types used by the simulation core
//! and its host:
//! - Lane coordinates (position along the scrolling lane)
//! - ID types (EnemyId)
//! - The workspace error type
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
