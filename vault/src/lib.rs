use instruction::Instructions;
use solana_program::{
    account_info::AccountInfo, declare_id, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use processor::*;

pub mod consts;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

declare_id!("DxKEEqeDdie32UnzGeSAR1BTW956VoM3UkZ3Cg4sjTJ2");

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
        Instructions::Create => {
            process_create::process_create(accounts, data)?;
        }
        Instructions::Initialize => {
            process_initialize::process_initialize(accounts, data)?;
        }
    }

    Ok(())
}
