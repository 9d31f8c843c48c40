use solana_program::{
    account_info::AccountInfo, msg, program_error::ProgramError, system_program,
};
use steel::*;

use crate::{
    instruction::Initialize,
    state::{Strategy, STRATEGY_SPACE},
    validation::{load_vault, validate_params},
};

pub fn process_initialize(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let args = Initialize::try_from_bytes(instruction_data)?;

    let [strategist, strategy_info, vault_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !strategist.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !strategy_info.is_writable {
        return Err(ProgramError::InvalidAccountData);
    }

    if !strategy_info.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    if *system_program.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    validate_params(&args.params)?;
    load_vault(vault_info, &args.params)?;

    create_account(
        strategist,
        strategy_info,
        system_program,
        STRATEGY_SPACE,
        &crate::ID,
    )?;

    // Set discriminator.
    let mut data = strategy_info.data.borrow_mut();
    data[0] = Strategy::discriminator();
    drop(data);

    let strategy = strategy_info.as_account_mut::<Strategy>(&crate::ID)?;
    *strategy = Strategy::new(
        *vault_info.key,
        *strategist.key,
        Pubkey::default(),
        args.params,
    );

    msg!("Strategy {} deployed for vault {}", strategy_info.key, vault_info.key);

    Ok(())
}
