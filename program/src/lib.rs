use instruction::Instructions;
use solana_program::{
    account_info::AccountInfo, declare_id, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use processor::*;

pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;
pub mod validation;

declare_id!("7JKqZp4nNnG8RJaqbqG8TD9GgVnk4NpKzbEfeYEuKatv");

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
        Instructions::Initialize => {
            process_initialize::process_initialize(accounts, data)?;
        }
        Instructions::Init => {
            process_init::process_init(accounts, data)?;
        }
        Instructions::SetKeeper => {
            process_set_keeper::process_set_keeper(accounts, data)?;
        }
    }

    Ok(())
}
