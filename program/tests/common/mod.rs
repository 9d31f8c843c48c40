#![allow(dead_code)]

use solana_program::{program_option::COption, program_pack::Pack, rent::Rent};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::Account, instruction::Instruction, pubkey::Pubkey, signature::Keypair,
    signer::Signer, transaction::Transaction,
};
use steel::AccountDeserialize;
use strategy_frax::state::{Strategy, StrategyParams};

// ============================================================================
// Program Setup
// ============================================================================

pub fn setup_programs() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "strategy_frax",
        strategy_frax::id(),
        processor!(strategy_frax::process_instruction),
    );
    program_test.add_program(
        "token_vault",
        token_vault::id(),
        processor!(token_vault::process_instruction),
    );
    program_test
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
// Fixture
// ============================================================================

/// Accounts shared by every strategy test: funded roles, a mint and an
/// initialized vault for it.
pub struct Fixture {
    pub context: ProgramTestContext,
    pub strategist: Keypair,
    pub governance: Keypair,
    pub guardian: Keypair,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub params: StrategyParams,
}

impl Fixture {
    pub async fn start() -> Self {
        let mut program_test = setup_programs();
        let strategist = Keypair::new();
        let governance = Keypair::new();
        let guardian = Keypair::new();
        let mint = Pubkey::new_unique();

        add_mint_account(&mut program_test, mint, 6);
        for role in [&strategist, &governance, &guardian] {
            fund_account(&mut program_test, role.pubkey(), 10_000_000_000);
        }

        let mut context = program_test.start_with_context().await;
        let vault = create_vault(&mut context, &guardian, governance.pubkey(), mint).await;

        Self {
            context,
            strategist,
            governance,
            guardian,
            mint,
            vault,
            params: params_for(mint),
        }
    }

    /// Deploys a strategy through the constructor and returns its address.
    pub async fn deploy_strategy(&mut self) -> Pubkey {
        let strategy = Keypair::new();
        let ix = strategy_frax::instruction::initialize(
            self.strategist.pubkey(),
            strategy.pubkey(),
            self.vault,
            self.params,
        );
        let payer = self.context.payer.insecure_clone();
        let strategist = self.strategist.insecure_clone();
        send_transaction(&mut self.context, &[ix], &[&payer, &strategist, &strategy])
            .await
            .expect("constructor should succeed");
        strategy.pubkey()
    }

    pub async fn strategy_state(&mut self, address: Pubkey) -> Strategy {
        get_strategy_state(&mut self.context.banks_client, address).await
    }
}

pub async fn create_vault(
    context: &mut ProgramTestContext,
    guardian: &Keypair,
    governance: Pubkey,
    mint: Pubkey,
) -> Pubkey {
    let vault = Keypair::new();
    let payer = context.payer.insecure_clone();
    send_transaction(
        context,
        &[
            token_vault::instruction::create(guardian.pubkey(), vault.pubkey()),
            token_vault::instruction::initialize(
                guardian.pubkey(),
                vault.pubkey(),
                mint,
                governance,
                governance,
                guardian.pubkey(),
                "",
                "",
            ),
        ],
        &[&payer, guardian, &vault],
    )
    .await
    .expect("vault setup should succeed");
    vault.pubkey()
}

pub fn params_for(want: Pubkey) -> StrategyParams {
    StrategyParams {
        wrapped_native: spl_token::native_mint::id(),
        staking_contract: Pubkey::new_unique(),
        reward_token: Pubkey::new_unique(),
        collateral_token: Pubkey::new_unique(),
        want,
        reward_oracle: Pubkey::new_unique(),
        collateral_oracle: Pubkey::new_unique(),
        lp_pool: Pubkey::new_unique(),
        router: Pubkey::new_unique(),
    }
}

// ============================================================================
// State Helpers
// ============================================================================

pub async fn get_strategy_state(
    banks_client: &mut solana_program_test::BanksClient,
    address: Pubkey,
) -> Strategy {
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    *Strategy::try_from_bytes(&account.data).unwrap()
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
