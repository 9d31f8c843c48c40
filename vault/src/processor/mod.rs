pub mod process_create;
pub mod process_initialize;
