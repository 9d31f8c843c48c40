//! Strategy test-environment bootstrap.
//!
//! Assembles a reproducible bank for strategy tests: named role accounts, a
//! token catalog, whale-funded users, initialized vaults and strategies built
//! either directly or as proxy clones.

pub mod balances;
pub mod config;
pub mod environment;
pub mod error;
pub mod fork;
pub mod impersonation;
pub mod logging;
pub mod roles;
pub mod strategies;
pub mod tokens;
pub mod transaction;
pub mod vaults;

pub use config::NetworkProfile;
pub use environment::TestEnvironment;
pub use error::{FixtureError, Result};
pub use roles::Role;
pub use strategies::{Deployment, StrategyInstance};
pub use tokens::{TokenCatalog, TokenHandle};
pub use vaults::VaultHandle;
