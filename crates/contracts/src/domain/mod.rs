pub mod a001_worker;
pub mod a002_task_rate;
pub mod a003_advance;
pub mod a004_material;
pub mod a005_project_tp;
pub mod a006_order;
pub mod a007_expense;
pub mod common;
