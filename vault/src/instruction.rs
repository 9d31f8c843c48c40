use steel::*;

use crate::state::{fixed_bytes, vault_token_account};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum Instructions {
    Create = 0,
    Initialize = 1,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Create {}

instruction!(Instructions, Create);

/// Allocates an uninitialized vault account. The deployer pays rent.
pub fn create(deployer: Pubkey, vault: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new(deployer, true),
            AccountMeta::new(vault, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: Create {}.to_bytes(),
    }
}

/// One-time vault configuration.
///
/// An all-zero `name` or `symbol` selects the token-derived default.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    pub governance: Pubkey,
    pub rewards: Pubkey,
    pub guardian: Pubkey,
    pub name: [u8; 32],
    pub symbol: [u8; 16],
}

instruction!(Instructions, Initialize);

#[allow(clippy::too_many_arguments)]
pub fn initialize(
    signer: Pubkey,
    vault: Pubkey,
    token: Pubkey,
    governance: Pubkey,
    rewards: Pubkey,
    guardian: Pubkey,
    name_override: &str,
    symbol_override: &str,
) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(token, false),
            AccountMeta::new_readonly(vault_token_account(&vault, &token), false),
        ],
        data: Initialize {
            governance,
            rewards,
            guardian,
            name: fixed_bytes(name_override.as_bytes()),
            symbol: fixed_bytes(symbol_override.as_bytes()),
        }
        .to_bytes(),
    }
}
