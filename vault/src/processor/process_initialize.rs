use solana_program::{
    account_info::AccountInfo, msg, program_error::ProgramError, program_pack::Pack,
};
use steel::*;

use crate::{
    error::VaultError,
    instruction::Initialize,
    state::{default_name, default_symbol, vault_token_account, Vault},
};

pub fn process_initialize(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let args = Initialize::try_from_bytes(instruction_data)?;

    let [signer, vault_info, mint_info, token_account_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !signer.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let default_key = Pubkey::default();
    if args.governance == default_key || args.rewards == default_key || args.guardian == default_key
    {
        return Err(VaultError::ZeroAddress.into());
    }

    if *mint_info.owner != spl_token::id() {
        return Err(VaultError::InvalidMint.into());
    }
    let decimals = spl_token::state::Mint::unpack(&mint_info.try_borrow_data()?)
        .map_err(|_| VaultError::InvalidMint)?
        .decimals;

    if *token_account_info.key != vault_token_account(vault_info.key, mint_info.key) {
        return Err(VaultError::InvalidTokenAccount.into());
    }

    let vault = vault_info.as_account_mut::<Vault>(&crate::ID)?;
    if vault.is_initialized() {
        return Err(VaultError::AlreadyInitialized.into());
    }

    vault.token = *mint_info.key;
    vault.governance = args.governance;
    vault.rewards = args.rewards;
    vault.guardian = args.guardian;
    vault.token_account = *token_account_info.key;
    vault.name = if args.name == [0u8; 32] {
        default_name(mint_info.key)
    } else {
        args.name
    };
    vault.symbol = if args.symbol == [0u8; 16] {
        default_symbol(mint_info.key)
    } else {
        args.symbol
    };
    vault.decimals = decimals;
    vault.initialized = 1;

    msg!("Vault initialized for {}", mint_info.key);

    Ok(())
}
