//! Platform helpers shared by the browser and native hosts
//!
//! Handles the glue the simulation deliberately knows nothing about:
//! - Frame timestamps to simulation deltas
//! - Pointer positions to paddle fractions

pub mod input;
pub mod time;

pub use input::pointer_fraction;
pub use time::FrameClock;
