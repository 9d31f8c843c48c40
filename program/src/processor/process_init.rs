use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError};
use steel::*;

use crate::{
    error::StrategyError,
    instruction::Init,
    state::{Strategy, STRATEGY_SPACE},
    validation::{load_vault, validate_params},
};

pub fn process_init(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let args = Init::try_from_bytes(instruction_data)?;

    let [strategy_info, logic_info, vault_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !strategy_info.is_writable || *strategy_info.owner != crate::ID {
        return Err(StrategyError::InvalidClone.into());
    }

    if strategy_info.data_len() != STRATEGY_SPACE {
        return Err(StrategyError::InvalidClone.into());
    }

    // Discriminator doubles as the initialized flag.
    if strategy_info.try_borrow_data()?[0] != 0 {
        return Err(StrategyError::AlreadyInitialized.into());
    }

    if args.on_behalf_of == Pubkey::default() {
        return Err(StrategyError::ZeroAddress.into());
    }

    logic_info.as_account::<Strategy>(&crate::ID)?;
    validate_params(&args.params)?;
    load_vault(vault_info, &args.params)?;

    let mut data = strategy_info.try_borrow_mut_data()?;
    data[0] = Strategy::discriminator();
    drop(data);

    let strategy = strategy_info.as_account_mut::<Strategy>(&crate::ID)?;
    *strategy = Strategy::new(
        *vault_info.key,
        args.on_behalf_of,
        *logic_info.key,
        args.params,
    );

    msg!("Strategy clone {} initialized from {}", strategy_info.key, logic_info.key);

    Ok(())
}
