use steel::*;

/// Custom errors for the Frax strategy program.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum StrategyError {
    /// The signer is neither the strategist nor the vault governance
    #[error("Not authorized: signer is not the strategist or governance")]
    NotAuthorized = 1,

    /// A wiring address or role was left as the default pubkey
    #[error("Zero address: wiring addresses must be set")]
    ZeroAddress = 2,

    /// The strategy account has already been initialized
    #[error("Already initialized: strategy can only be initialized once")]
    AlreadyInitialized = 3,

    /// The vault account is not an initialized token vault
    #[error("Vault not initialized: initialize the vault first")]
    VaultNotInitialized = 4,

    /// The underlying token does not match the vault's token
    #[error("Want mismatch: underlying token differs from the vault token")]
    WantMismatch = 5,

    /// The strategy account passed as a vault reference does not match
    #[error("Invalid vault: strategy is attached to a different vault")]
    InvalidVault = 6,

    /// The clone account does not have the strategy layout
    #[error("Invalid clone: account must be a zeroed strategy-sized account")]
    InvalidClone = 7,
}

error!(StrategyError);
