pub mod process_init;
pub mod process_initialize;
pub mod process_set_keeper;
