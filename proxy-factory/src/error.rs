use steel::*;

/// Custom errors for the proxy factory program.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum ProxyFactoryError {
    /// The proxy account does not match the next factory PDA
    #[error("Invalid PDA: proxy does not match the next factory address")]
    InvalidPDA = 1,

    /// The logic account is not owned by the given logic program
    #[error("Invalid logic: account is not owned by the logic program")]
    InvalidLogic = 2,

    /// The logic account holds no data to mirror
    #[error("Empty logic: logic account has no storage layout")]
    EmptyLogic = 3,

    /// The proxy account already exists
    #[error("Proxy exists: address already in use")]
    ProxyExists = 4,
}

error!(ProxyFactoryError);
