use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError};
use steel::*;
use token_vault::state::Vault;

use crate::{error::StrategyError, instruction::SetKeeper, state::Strategy};

pub fn process_set_keeper(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let args = SetKeeper::try_from_bytes(instruction_data)?;

    let [signer, strategy_info, vault_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !signer.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if args.keeper == Pubkey::default() {
        return Err(StrategyError::ZeroAddress.into());
    }

    let strategy = strategy_info.as_account_mut::<Strategy>(&crate::ID)?;
    if strategy.vault != *vault_info.key {
        return Err(StrategyError::InvalidVault.into());
    }

    let vault = vault_info.as_account::<Vault>(&token_vault::ID)?;
    if !strategy.is_authorized(signer.key, &vault.governance) {
        return Err(StrategyError::NotAuthorized.into());
    }

    strategy.keeper = args.keeper;

    msg!("UpdatedKeeper {}", args.keeper);

    Ok(())
}
