//! Strategy construction: a fresh logic instance, optionally cloned behind
//! the proxy factory, then handed to the keeper.

use proxy_factory::{
    event::ProxyCreated,
    state::{proxy_pda, ProxyFactory},
};
use solana_program_test::ProgramTestContext;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use steel::AccountDeserialize;
use strategy_frax::state::{Strategy, StrategyParams};
use tracing::info;

use crate::{
    config::ProtocolConfig,
    error::{FixtureError, Result},
    tokens::TokenCatalog,
    transaction::send,
    vaults::VaultHandle,
};

/// External addresses every strategy is wired to, apart from the vault token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolWiring {
    pub wrapped_native: Pubkey,
    pub staking_contract: Pubkey,
    pub reward_token: Pubkey,
    pub collateral_token: Pubkey,
    pub reward_oracle: Pubkey,
    pub collateral_oracle: Pubkey,
    pub lp_pool: Pubkey,
    pub router: Pubkey,
}

impl ProtocolWiring {
    pub fn new(catalog: &TokenCatalog, protocol: &ProtocolConfig) -> Result<Self> {
        Ok(Self {
            wrapped_native: catalog.wrapped_native()?.mint(),
            staking_contract: protocol.staking_contract,
            reward_token: catalog.reward()?.mint(),
            collateral_token: catalog.collateral()?.mint(),
            reward_oracle: protocol.reward_oracle,
            collateral_oracle: protocol.collateral_oracle,
            lp_pool: protocol.lp_pool,
            router: protocol.router,
        })
    }

    pub fn params(&self, want: Pubkey) -> StrategyParams {
        StrategyParams {
            wrapped_native: self.wrapped_native,
            staking_contract: self.staking_contract,
            reward_token: self.reward_token,
            collateral_token: self.collateral_token,
            want,
            reward_oracle: self.reward_oracle,
            collateral_oracle: self.collateral_oracle,
            lp_pool: self.lp_pool,
            router: self.router,
        }
    }
}

/// How a strategy instance came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// The constructed logic account is the instance.
    Direct(Pubkey),
    /// A clone of `logic`, initialized through the proxy factory.
    Proxied { logic: Pubkey, proxy: Pubkey },
}

/// A ready strategy, used the same way whichever path built it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyInstance {
    pub deployment: Deployment,
    pub vault: Pubkey,
}

impl StrategyInstance {
    pub fn address(&self) -> Pubkey {
        match self.deployment {
            Deployment::Direct(address) => address,
            Deployment::Proxied { proxy, .. } => proxy,
        }
    }

    pub fn logic(&self) -> Pubkey {
        match self.deployment {
            Deployment::Direct(address) => address,
            Deployment::Proxied { logic, .. } => logic,
        }
    }

    pub fn is_proxied(&self) -> bool {
        matches!(self.deployment, Deployment::Proxied { .. })
    }

    pub async fn state(&self, context: &mut ProgramTestContext) -> Result<Strategy> {
        let address = self.address();
        let account = context
            .banks_client
            .get_account(address)
            .await?
            .ok_or(FixtureError::AccountNotFound(address))?;
        Ok(*Strategy::try_from_bytes(&account.data)?)
    }

    /// Signed by the strategist or the vault governance.
    pub async fn set_keeper(
        &self,
        context: &mut ProgramTestContext,
        signer: &Keypair,
        keeper: Pubkey,
    ) -> Result<()> {
        let ix =
            strategy_frax::instruction::set_keeper(signer.pubkey(), self.address(), self.vault, keeper);
        send(context, &[ix], &[signer]).await?;
        Ok(())
    }
}

/// Builds strategies for vaults on behalf of one strategist.
pub struct StrategyFactory {
    pub proxy_factory: Pubkey,
    pub strategist: Keypair,
    pub keeper: Pubkey,
    pub wiring: ProtocolWiring,
}

impl StrategyFactory {
    pub async fn build(
        &self,
        context: &mut ProgramTestContext,
        vault: &VaultHandle,
        use_proxy: bool,
    ) -> Result<StrategyInstance> {
        let params = self.wiring.params(vault.token);
        let logic = self.deploy_logic(context, vault, params).await?;

        let deployment = if use_proxy {
            let proxy = self.deploy_proxy(context, vault, logic, params).await?;
            Deployment::Proxied { logic, proxy }
        } else {
            Deployment::Direct(logic)
        };

        let instance = StrategyInstance {
            deployment,
            vault: vault.address,
        };
        instance
            .set_keeper(context, &self.strategist, self.keeper)
            .await?;

        info!(
            "Strategy {} ready for vault {} (keeper {})",
            instance.address(),
            vault.address,
            self.keeper
        );

        Ok(instance)
    }

    async fn deploy_logic(
        &self,
        context: &mut ProgramTestContext,
        vault: &VaultHandle,
        params: StrategyParams,
    ) -> Result<Pubkey> {
        let logic = Keypair::new();
        let ix = strategy_frax::instruction::initialize(
            self.strategist.pubkey(),
            logic.pubkey(),
            vault.address,
            params,
        );
        send(context, &[ix], &[&self.strategist, &logic]).await?;
        Ok(logic.pubkey())
    }

    async fn deploy_proxy(
        &self,
        context: &mut ProgramTestContext,
        vault: &VaultHandle,
        logic: Pubkey,
        params: StrategyParams,
    ) -> Result<Pubkey> {
        let index = self.factory_state(context).await?.proxy_count;

        let ix = proxy_factory::instruction::deploy_minimal(
            self.strategist.pubkey(),
            self.proxy_factory,
            index,
            logic,
            strategy_frax::id(),
            &strategy_frax::instruction::init_data(self.strategist.pubkey(), params),
            strategy_frax::instruction::init_forwarded_accounts(vault.address),
        );
        let logs = send(context, &[ix], &[&self.strategist]).await?;

        let factory = self.factory_state(context).await?;
        let (expected, _) = proxy_pda(self.proxy_factory, index);
        created_proxy(&logs, &factory, index, expected)
    }

    async fn factory_state(&self, context: &mut ProgramTestContext) -> Result<ProxyFactory> {
        let account = context
            .banks_client
            .get_account(self.proxy_factory)
            .await?
            .ok_or(FixtureError::AccountNotFound(self.proxy_factory))?;
        Ok(*ProxyFactory::try_from_bytes(&account.data)?)
    }
}

/// Proxy announced for clone `index`, checked against the derived PDA.
///
/// Taken from the `ProxyCreated` log line, or from the factory's creation
/// record when the bank does not capture program logs.
pub fn created_proxy<S: AsRef<str>>(
    logs: &[S],
    factory: &ProxyFactory,
    index: u64,
    expected: Pubkey,
) -> Result<Pubkey> {
    let event = ProxyCreated::find(logs)
        .or_else(|| factory.created(index))
        .ok_or(FixtureError::MissingProxyEvent)?;
    if event.proxy != expected {
        return Err(FixtureError::ProxyAddressMismatch {
            expected,
            actual: event.proxy,
        });
    }
    Ok(event.proxy)
}
