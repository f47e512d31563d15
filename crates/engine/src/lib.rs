//! Workshop reporting engine.
//!
//! `dashboards` and `projections` are pure functions over record slices. Records reach
//! them through `shared::dataset`, which loads and validates every collection from a
//! `shared::store::RecordStore`.

pub mod dashboards;
pub mod projections;
pub mod shared;
pub mod system;
