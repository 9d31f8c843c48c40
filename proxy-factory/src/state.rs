use serde::{Deserialize, Serialize};
use steel::*;

use crate::{consts::PROXY, event::ProxyCreated};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum ProxyFactoryAccount {
    ProxyFactory = 130,
}

/// Minimal proxy factory. Every clone it creates is a PDA keyed by the
/// running `proxy_count`.
///
/// The most recent `ProxyCreated` is also kept on the account, so callers
/// that cannot see program logs can still recover it.
///
/// Size: 32 + 8 + 32 + 32 = 104 bytes (+ 8 discriminator = 112)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct ProxyFactory {
    pub authority: Pubkey,
    pub proxy_count: u64,
    pub last_proxy: Pubkey,
    pub last_logic: Pubkey,
}

account!(ProxyFactoryAccount, ProxyFactory);

impl ProxyFactory {
    /// Creation record of the clone at `index`, if it is the latest one.
    pub fn created(&self, index: u64) -> Option<ProxyCreated> {
        if self.proxy_count != index.checked_add(1)? || self.last_proxy == Pubkey::default() {
            return None;
        }
        Some(ProxyCreated {
            proxy: self.last_proxy,
            logic: self.last_logic,
        })
    }
}

/// Derives the proxy PDA for a given factory and sequence number
/// Seeds: ["proxy", factory, index]
pub fn proxy_pda(factory: Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROXY, &factory.to_bytes(), &index.to_le_bytes()],
        &crate::ID,
    )
}
