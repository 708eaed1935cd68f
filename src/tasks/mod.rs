//! Background Tasks Module
//!
//! Periodic maintenance running alongside normal fetch traffic.
//!
//! # Tasks
//! - TTL sweep: removes expired cache entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
