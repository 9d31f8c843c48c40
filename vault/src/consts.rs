/// Suffix appended to the token prefix when no name override is given.
pub const DEFAULT_NAME_SUFFIX: &[u8] = b" yVault";

/// Prefix prepended to the token prefix when no symbol override is given.
pub const DEFAULT_SYMBOL_PREFIX: &[u8] = b"yv";

/// Number of base58 characters of the mint used in default names.
pub const TOKEN_PREFIX_LEN: usize = 4;
