//! Product comparison list.
//!
//! [`CompareManager`] keeps up to three product snapshots for side-by-side
//! comparison and mirrors them into the `compareList` storage slot.

pub mod manager;

pub use manager::{AddOutcome, CompareManager, MAX_COMPARE_ITEMS};
