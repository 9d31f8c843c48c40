#![allow(dead_code)]

use solana_program::{program_option::COption, program_pack::Pack, rent::Rent};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::Account, instruction::Instruction, pubkey::Pubkey, signature::Keypair,
    signer::Signer, transaction::Transaction,
};
use steel::AccountDeserialize;
use token_vault::state::Vault;

pub const USDC_DECIMALS: u8 = 6;

// ============================================================================
// Program Setup
// ============================================================================

pub fn setup_programs() -> ProgramTest {
    ProgramTest::new(
        "token_vault",
        token_vault::id(),
        processor!(token_vault::process_instruction),
    )
}

pub fn fund_account(program_test: &mut ProgramTest, pubkey: Pubkey, lamports: u64) {
    program_test.add_account(
        pubkey,
        Account {
            lamports,
            data: vec![],
            owner: solana_sdk::system_program::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

pub fn add_mint_account(program_test: &mut ProgramTest, mint: Pubkey, decimals: u8) {
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(
        spl_token::state::Mint {
            mint_authority: COption::None,
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();

    program_test.add_account(
        mint,
        Account {
            lamports: Rent::default().minimum_balance(data.len()).max(1),
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

// ============================================================================
// State Helpers
// ============================================================================

pub async fn get_vault_state(
    banks_client: &mut solana_program_test::BanksClient,
    address: Pubkey,
) -> Vault {
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    *Vault::try_from_bytes(&account.data).unwrap()
}

// ============================================================================
// Transaction Helpers
// ============================================================================

pub async fn send_transaction(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let blockhash = context.banks_client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&context.payer.pubkey()),
        signers,
        blockhash,
    );

    context.banks_client.process_transaction(tx).await
}
