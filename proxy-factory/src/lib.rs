use instruction::Instructions;
use solana_program::{
    account_info::AccountInfo, declare_id, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use processor::*;

pub mod consts;
pub mod error;
pub mod event;
pub mod instruction;
pub mod processor;
pub mod state;

declare_id!("68ZtZaks7etSZve362M1ovfbQPjkKqXAED86vc7xH53w");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id.ne(&crate::id()) {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (instruction, data) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    let instruction =
        Instructions::try_from(*instruction).or(Err(ProgramError::InvalidInstructionData))?;

    match instruction {
        Instructions::CreateFactory => {
            process_create_factory::process_create_factory(accounts, data)?;
        }
        Instructions::DeployMinimal => {
            process_deploy_minimal::process_deploy_minimal(accounts, data)?;
        }
    }

    Ok(())
}
