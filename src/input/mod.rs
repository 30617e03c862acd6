//! Touch input interpretation
//!
//! This module provides:
//! - Drag tracking for the single active touch
//! - Classification of drag vectors into taps and compass swipes
//! - The tunable thresholds the rest of the keyboard reads

mod classifier;
mod tracker;

pub use classifier::*;
pub use tracker::*;
