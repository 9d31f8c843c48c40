use solana_program::{account_info::AccountInfo, program_error::ProgramError, system_program};
use steel::*;

use crate::state::Vault;

pub fn process_create(
    accounts: &[AccountInfo],
    _instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let [deployer, vault_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !deployer.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !vault_info.is_writable {
        return Err(ProgramError::InvalidAccountData);
    }

    if !vault_info.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    if *system_program.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    let space = 8 + std::mem::size_of::<Vault>();
    create_account(deployer, vault_info, system_program, space, &crate::ID)?;

    // Set discriminator. Everything else stays zeroed until Initialize.
    let mut data = vault_info.data.borrow_mut();
    data[0] = Vault::discriminator();

    Ok(())
}
