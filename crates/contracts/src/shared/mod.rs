pub mod constants;
pub mod soft_ref;
