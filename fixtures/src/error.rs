use solana_program::program_error::ProgramError;
use solana_program_test::BanksClientError;
use solana_sdk::{pubkey::Pubkey, transaction::TransactionError};

/// Errors raised while assembling a test environment.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Unknown token symbol: {0}")]
    UnknownToken(String),
    #[error("No whale configured for token {0}")]
    UnsupportedToken(Pubkey),
    #[error("Funding amount overflows: {quantity} x 10^{decimals}")]
    AmountOverflow { quantity: u64, decimals: u8 },
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),
    #[error("Invalid profile: {0}")]
    Config(String),
    #[error("Transaction reverted: {error}")]
    Reverted {
        error: TransactionError,
        logs: Vec<String>,
    },
    #[error("ProxyCreated event missing from deployment logs")]
    MissingProxyEvent,
    #[error("Proxy address mismatch: expected {expected}, got {actual}")]
    ProxyAddressMismatch { expected: Pubkey, actual: Pubkey },
    #[error("Banks client error: {0}")]
    Banks(#[from] BanksClientError),
    #[error("Program error: {0}")]
    Program(#[from] ProgramError),
    #[error("Profile parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixtureError {
    /// The on-chain error of a reverted transaction, if any.
    pub fn transaction_error(&self) -> Option<&TransactionError> {
        match self {
            Self::Reverted { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
