pub mod process_create_factory;
pub mod process_deploy_minimal;
