use steel::*;

use crate::state::proxy_pda;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum Instructions {
    CreateFactory = 0,
    DeployMinimal = 1,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CreateFactory {}

instruction!(Instructions, CreateFactory);

pub fn create_factory(authority: Pubkey, factory: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(factory, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CreateFactory {}.to_bytes(),
    }
}

/// Clone-and-initialize. The instruction data is the discriminator
/// followed by the raw initializer call forwarded to the logic program.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DeployMinimal {}

instruction!(Instructions, DeployMinimal);

/// Builds a `DeployMinimal` for the factory's `proxy_index`-th clone.
///
/// `forwarded` are appended after `[proxy, logic]` when the initializer is invoked.
pub fn deploy_minimal(
    payer: Pubkey,
    factory: Pubkey,
    proxy_index: u64,
    logic: Pubkey,
    logic_program: Pubkey,
    init_data: &[u8],
    forwarded: Vec<AccountMeta>,
) -> Instruction {
    let (proxy, _) = proxy_pda(factory, proxy_index);

    let mut accounts = vec![
        AccountMeta::new(payer, true),
        AccountMeta::new(factory, false),
        AccountMeta::new_readonly(logic, false),
        AccountMeta::new(proxy, false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(logic_program, false),
    ];
    accounts.extend(forwarded);

    let mut data = DeployMinimal {}.to_bytes();
    data.extend_from_slice(init_data);

    Instruction {
        program_id: crate::id(),
        accounts,
        data,
    }
}
