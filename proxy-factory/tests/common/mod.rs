#![allow(dead_code)]

use solana_program::{program_option::COption, program_pack::Pack, rent::Rent};
use solana_program_test::{
    processor, BanksClient, BanksClientError, ProgramTest, ProgramTestContext,
};
use solana_sdk::{
    account::Account, instruction::Instruction, pubkey::Pubkey, signature::Keypair,
    signer::Signer, transaction::Transaction,
};
use steel::AccountDeserialize;
use proxy_factory::state::ProxyFactory;
use strategy_frax::state::{Strategy, StrategyParams};

// ============================================================================
// Program Setup
// ============================================================================

pub fn setup_programs() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "proxy_factory",
        proxy_factory::id(),
        processor!(proxy_factory::process_instruction),
    );
    program_test.add_program(
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

/// A running bank with a factory, an initialized vault and a logic strategy.
pub struct Fixture {
    pub context: ProgramTestContext,
    pub strategist: Keypair,
    pub governance: Keypair,
    pub factory: Pubkey,
    pub vault: Pubkey,
    pub logic: Pubkey,
    pub params: StrategyParams,
}

impl Fixture {
    pub async fn start() -> Self {
        let mut program_test = setup_programs();
        let strategist = Keypair::new();
        let governance = Keypair::new();
        let mint = Pubkey::new_unique();

        add_mint_account(&mut program_test, mint, 6);
        for role in [&strategist, &governance] {
            fund_account(&mut program_test, role.pubkey(), 10_000_000_000);
        }

        let mut context = program_test.start_with_context().await;
        let payer = context.payer.insecure_clone();

        let factory = Keypair::new();
        let vault = Keypair::new();
        let logic = Keypair::new();
        let params = StrategyParams {
            wrapped_native: spl_token::native_mint::id(),
            staking_contract: Pubkey::new_unique(),
            reward_token: Pubkey::new_unique(),
            collateral_token: Pubkey::new_unique(),
            want: mint,
            reward_oracle: Pubkey::new_unique(),
            collateral_oracle: Pubkey::new_unique(),
            lp_pool: Pubkey::new_unique(),
            router: Pubkey::new_unique(),
        };

        send_transaction(
            &mut context,
            &[
                proxy_factory::instruction::create_factory(governance.pubkey(), factory.pubkey()),
                token_vault::instruction::create(governance.pubkey(), vault.pubkey()),
                token_vault::instruction::initialize(
                    governance.pubkey(),
                    vault.pubkey(),
                    mint,
                    governance.pubkey(),
                    governance.pubkey(),
                    governance.pubkey(),
                    "",
                    "",
                ),
            ],
            &[&payer, &governance, &factory, &vault],
        )
        .await
        .expect("factory and vault setup should succeed");

        send_transaction(
            &mut context,
            &[strategy_frax::instruction::initialize(
                strategist.pubkey(),
                logic.pubkey(),
                vault.pubkey(),
                params,
            )],
            &[&payer, &strategist, &logic],
        )
        .await
        .expect("logic deployment should succeed");

        Self {
            context,
            strategist,
            governance,
            factory: factory.pubkey(),
            vault: vault.pubkey(),
            logic: logic.pubkey(),
            params,
        }
    }

    pub async fn factory_state(&mut self) -> ProxyFactory {
        get_factory_state(&mut self.context.banks_client, self.factory).await
    }

    /// Sends `instructions` signed by the context payer only.
    pub async fn send(&mut self, instructions: &[Instruction]) -> Result<(), BanksClientError> {
        let payer = self.context.payer.insecure_clone();
        send_transaction(&mut self.context, instructions, &[&payer]).await
    }

    /// `DeployMinimal` of the logic strategy for `beneficiary` at the given slot.
    pub fn deploy_ix(&self, index: u64, beneficiary: Pubkey) -> Instruction {
        proxy_factory::instruction::deploy_minimal(
            self.context.payer.pubkey(),
            self.factory,
            index,
            self.logic,
            strategy_frax::id(),
            &strategy_frax::instruction::init_data(beneficiary, self.params),
            strategy_frax::instruction::init_forwarded_accounts(self.vault),
        )
    }
}

// ============================================================================
// State Helpers
// ============================================================================

pub async fn get_factory_state(banks_client: &mut BanksClient, address: Pubkey) -> ProxyFactory {
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    *ProxyFactory::try_from_bytes(&account.data).unwrap()
}

pub async fn get_strategy_state(banks_client: &mut BanksClient, address: Pubkey) -> Strategy {
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
