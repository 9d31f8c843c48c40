use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::{DEFAULT_NAME_SUFFIX, DEFAULT_SYMBOL_PREFIX, TOKEN_PREFIX_LEN};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum VaultAccount {
    Vault = 110,
}

/// Token vault. Allocated by `Create`, configured exactly once by `Initialize`.
///
/// Size: 5 * 32 + 32 + 16 + 8 = 216 bytes (+ 8 discriminator = 224)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vault {
    /// Underlying SPL mint accepted for deposits
    pub token: Pubkey,
    pub governance: Pubkey,
    /// Recipient of performance fees
    pub rewards: Pubkey,
    /// Emergency role, able to shut the vault down
    pub guardian: Pubkey,
    /// Associated token account of the vault for `token`
    pub token_account: Pubkey,
    pub name: [u8; 32],
    pub symbol: [u8; 16],
    pub decimals: u8,
    pub initialized: u8,
    pub _padding: [u8; 6],
}

account!(VaultAccount, Vault);

impl Vault {
    pub fn is_initialized(&self) -> bool {
        self.initialized != 0
    }

    pub fn name(&self) -> &str {
        trimmed_str(&self.name)
    }

    pub fn symbol(&self) -> &str {
        trimmed_str(&self.symbol)
    }
}

fn trimmed_str(bytes: &[u8]) -> &str {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    std::str::from_utf8(&bytes[..end]).unwrap_or_default()
}

/// Copies `src` into a zero padded fixed buffer, truncating if needed.
pub fn fixed_bytes<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let len = src.len().min(N);
    out[..len].copy_from_slice(&src[..len]);
    out
}

/// Name used when the initializer receives an empty name override.
pub fn default_name(mint: &Pubkey) -> [u8; 32] {
    let mint = mint.to_string();
    let mut name = mint.as_bytes()[..TOKEN_PREFIX_LEN].to_vec();
    name.extend_from_slice(DEFAULT_NAME_SUFFIX);
    fixed_bytes(&name)
}

/// Symbol used when the initializer receives an empty symbol override.
pub fn default_symbol(mint: &Pubkey) -> [u8; 16] {
    let mint = mint.to_string();
    let mut symbol = DEFAULT_SYMBOL_PREFIX.to_vec();
    symbol.extend_from_slice(&mint.as_bytes()[..TOKEN_PREFIX_LEN]);
    fixed_bytes(&symbol)
}

/// Associated token account the vault holds its underlying in.
pub fn vault_token_account(vault: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(vault, mint)
}
