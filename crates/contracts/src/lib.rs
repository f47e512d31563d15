//! Shared records and report DTOs for the workshop reporting engine.
//!
//! Everything here is plain data: no I/O, no global state.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
