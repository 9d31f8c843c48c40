use solana_program::{account_info::AccountInfo, program_error::ProgramError};
use steel::*;
use token_vault::state::Vault;

use crate::{error::StrategyError, state::StrategyParams};

/// Rejects any default pubkey in the wiring.
pub fn validate_params(params: &StrategyParams) -> Result<(), ProgramError> {
    if params.addresses().iter().any(|address| **address == Pubkey::default()) {
        return Err(StrategyError::ZeroAddress.into());
    }
    Ok(())
}

/// Loads an initialized vault and checks it holds the strategy's underlying.
pub fn load_vault<'a>(
    vault_info: &'a AccountInfo,
    params: &StrategyParams,
) -> Result<&'a Vault, ProgramError> {
    let vault = vault_info.as_account::<Vault>(&token_vault::ID)?;
    if !vault.is_initialized() {
        return Err(StrategyError::VaultNotInitialized.into());
    }
    if vault.token != params.want {
        return Err(StrategyError::WantMismatch.into());
    }
    Ok(vault)
}
