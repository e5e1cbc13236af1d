//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Sweep: Removes expired cache entries at a fixed interval until told to stop

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
