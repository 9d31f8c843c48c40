use solana_program_test::{processor, ProgramTest, ProgramTestContext};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::info;

use crate::{
    balances,
    config::NetworkProfile,
    error::{FixtureError, Result},
    fork::ForkSnapshot,
    impersonation::Impersonator,
    logging,
    roles::{Role, RoleRegistry},
    strategies::{ProtocolWiring, StrategyFactory, StrategyInstance},
    tokens::{TokenCatalog, TokenHandle},
    transaction::send,
    vaults::{self, VaultHandle},
};

/// A running bank seeded from a profile snapshot, with the three programs
/// loaded, the account pool funded and a proxy factory deployed.
pub struct TestEnvironment {
    pub context: ProgramTestContext,
    pub profile: NetworkProfile,
    pub roles: RoleRegistry,
    pub catalog: TokenCatalog,
    pub proxy_factory: Pubkey,
    impersonator: Impersonator,
}

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
    program_test.add_program(
        "proxy_factory",
        proxy_factory::id(),
        processor!(proxy_factory::process_instruction),
    );
    program_test
}

impl TestEnvironment {
    /// Starts from the profile selected by `NetworkProfile::load`.
    pub async fn start_default() -> Result<Self> {
        Self::start(NetworkProfile::load()?).await
    }

    pub async fn start(profile: NetworkProfile) -> Result<Self> {
        logging::init();

        let roles = RoleRegistry::from_profile(&profile)?;
        let catalog = TokenCatalog::from_profile(&profile);

        let mut program_test = setup_programs();
        ForkSnapshot::from_profile(&profile)?.apply(&mut program_test)?;
        roles.fund(&mut program_test, profile.pool_lamports);

        let mut context = program_test.start_with_context().await;

        let factory = Keypair::new();
        let deployer = roles.get(Role::Deployer);
        send(
            &mut context,
            &[proxy_factory::instruction::create_factory(
                deployer.pubkey(),
                factory.pubkey(),
            )],
            &[deployer, &factory],
        )
        .await?;

        info!(
            "Environment {} started, proxy factory {}",
            profile.name,
            factory.pubkey()
        );

        Ok(Self {
            context,
            profile,
            roles,
            catalog,
            proxy_factory: factory.pubkey(),
            impersonator: Impersonator::new(),
        })
    }

    pub fn token(&self, symbol: &str) -> Result<TokenHandle> {
        self.catalog.resolve(symbol)
    }

    /// First underlying token of the profile.
    pub fn underlying(&self) -> Result<TokenHandle> {
        let symbol = self
            .catalog
            .underlying()
            .first()
            .ok_or_else(|| FixtureError::Config("no underlying tokens".to_string()))?;
        self.catalog.resolve(symbol)
    }

    pub fn address(&self, role: Role) -> Pubkey {
        self.roles.address(role)
    }

    pub async fn fund(&mut self, token: &TokenHandle, user: Pubkey) -> Result<Pubkey> {
        balances::fund(
            &mut self.context,
            &self.profile,
            &self.impersonator,
            token,
            user,
        )
        .await
    }

    /// Every token the vault fixture is parametrised over.
    pub fn underlying_tokens(&self) -> Result<Vec<TokenHandle>> {
        self.catalog
            .underlying()
            .iter()
            .map(|symbol| self.catalog.resolve(symbol))
            .collect()
    }

    /// Funds the `User` role with the first underlying token.
    pub async fn funded_user(&mut self) -> Result<Pubkey> {
        let token = self.underlying()?;
        let user = self.roles.address(Role::User);
        self.fund(&token, user).await
    }

    pub async fn make_vault(&mut self, token: &TokenHandle) -> Result<VaultHandle> {
        vaults::make_vault(
            &mut self.context,
            token,
            self.roles.address(Role::Governance),
            self.roles.address(Role::Rewards),
            self.roles.get(Role::Guardian),
        )
        .await
    }

    /// Vault for the first underlying token.
    pub async fn vault(&mut self) -> Result<VaultHandle> {
        let token = self.underlying()?;
        self.make_vault(&token).await
    }

    pub fn strategy_factory(&self) -> Result<StrategyFactory> {
        Ok(StrategyFactory {
            proxy_factory: self.proxy_factory,
            strategist: self.roles.get(Role::Strategist).insecure_clone(),
            keeper: self.roles.address(Role::Keeper),
            wiring: ProtocolWiring::new(&self.catalog, &self.profile.protocol)?,
        })
    }

    pub async fn strategy(&mut self, vault: &VaultHandle, use_proxy: bool) -> Result<StrategyInstance> {
        let factory = self.strategy_factory()?;
        factory.build(&mut self.context, vault, use_proxy).await
    }
}
