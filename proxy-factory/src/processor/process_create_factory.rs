use solana_program::{account_info::AccountInfo, program_error::ProgramError, system_program};
use steel::*;

use crate::state::ProxyFactory;

pub fn process_create_factory(
    accounts: &[AccountInfo],
    _instruction_data: &[u8],
) -> Result<(), ProgramError> {
    let [authority, factory_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !factory_info.is_writable {
        return Err(ProgramError::InvalidAccountData);
    }

    if !factory_info.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    if *system_program.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    let space = 8 + std::mem::size_of::<ProxyFactory>();
    create_account(authority, factory_info, system_program, space, &crate::ID)?;

    // Set discriminator.
    let mut data = factory_info.data.borrow_mut();
    data[0] = ProxyFactory::discriminator();
    drop(data);

    let factory = factory_info.as_account_mut::<ProxyFactory>(&crate::ID)?;
    factory.authority = *authority.key;
    factory.proxy_count = 0;
    factory.last_proxy = Pubkey::default();
    factory.last_logic = Pubkey::default();

    Ok(())
}
