use steel::*;

/// Custom errors for the token vault program.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum VaultError {
    /// Initialize was called on a vault that already has a token
    #[error("Already initialized: vault can only be initialized once")]
    AlreadyInitialized = 1,

    /// A role address was left as the default pubkey
    #[error("Zero address: role accounts must be set")]
    ZeroAddress = 2,

    /// The mint account is not an initialized SPL token mint
    #[error("Invalid mint: token must be an SPL token mint")]
    InvalidMint = 3,

    /// The token account is not the vault's associated token account
    #[error("Invalid token account: expected the vault's associated token account")]
    InvalidTokenAccount = 4,
}

error!(VaultError);
