use steel::*;

use crate::state::StrategyParams;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum Instructions {
    Initialize = 0,
    Init = 1,
    SetKeeper = 2,
}

/// Constructor: creates a strategy account wired to `params`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    pub params: StrategyParams,
}

instruction!(Instructions, Initialize);

pub fn initialize(
    strategist: Pubkey,
    strategy: Pubkey,
    vault: Pubkey,
    params: StrategyParams,
) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new(strategist, true),
            AccountMeta::new(strategy, true),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: Initialize { params }.to_bytes(),
    }
}

/// Clone initializer. The first account is the freshly allocated clone,
/// the second the logic account it was cloned from.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Init {
    pub on_behalf_of: Pubkey,
    pub params: StrategyParams,
}

instruction!(Instructions, Init);

/// Encoded `Init` call, as handed to the proxy factory.
pub fn init_data(on_behalf_of: Pubkey, params: StrategyParams) -> Vec<u8> {
    Init {
        on_behalf_of,
        params,
    }
    .to_bytes()
}

/// Accounts the proxy factory must forward after `[proxy, logic]`.
pub fn init_forwarded_accounts(vault: Pubkey) -> Vec<AccountMeta> {
    vec![AccountMeta::new_readonly(vault, false)]
}

pub fn init(
    strategy: Pubkey,
    logic: Pubkey,
    vault: Pubkey,
    on_behalf_of: Pubkey,
    params: StrategyParams,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(strategy, false),
        AccountMeta::new_readonly(logic, false),
    ];
    accounts.extend(init_forwarded_accounts(vault));
    Instruction {
        program_id: crate::id(),
        accounts,
        data: init_data(on_behalf_of, params),
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetKeeper {
    pub keeper: Pubkey,
}

instruction!(Instructions, SetKeeper);

/// Authorized by the strategist or the vault governance.
pub fn set_keeper(signer: Pubkey, strategy: Pubkey, vault: Pubkey, keeper: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new_readonly(signer, true),
            AccountMeta::new(strategy, false),
            AccountMeta::new_readonly(vault, false),
        ],
        data: SetKeeper { keeper }.to_bytes(),
    }
}
