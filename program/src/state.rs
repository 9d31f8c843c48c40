use serde::{Deserialize, Serialize};
use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum StrategyAccount {
    Strategy = 120,
}

/// External protocol addresses a strategy is wired to.
///
/// Shared by the constructor (`Initialize`) and the clone initializer (`Init`).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Wrapped native token mint
    pub wrapped_native: Pubkey,
    /// Staking program the collateral is locked in
    pub staking_contract: Pubkey,
    pub reward_token: Pubkey,
    pub collateral_token: Pubkey,
    /// Underlying token; must equal the vault token
    pub want: Pubkey,
    pub reward_oracle: Pubkey,
    pub collateral_oracle: Pubkey,
    pub lp_pool: Pubkey,
    pub router: Pubkey,
}

impl StrategyParams {
    pub fn addresses(&self) -> [&Pubkey; 9] {
        [
            &self.wrapped_native,
            &self.staking_contract,
            &self.reward_token,
            &self.collateral_token,
            &self.want,
            &self.reward_oracle,
            &self.collateral_oracle,
            &self.lp_pool,
            &self.router,
        ]
    }
}

/// Strategy instance. Either constructed directly or a clone initialized
/// through the proxy factory, in which case `implementation` is the logic account.
///
/// Size: 5 * 32 + 9 * 32 = 448 bytes (+ 8 discriminator = 456)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Strategy {
    pub vault: Pubkey,
    pub strategist: Pubkey,
    pub rewards: Pubkey,
    /// Automation account allowed to run maintenance
    pub keeper: Pubkey,
    /// Logic account this clone was created from (default for direct instances)
    pub implementation: Pubkey,
    pub params: StrategyParams,
}

account!(StrategyAccount, Strategy);

impl Strategy {
    pub fn new(vault: Pubkey, owner: Pubkey, implementation: Pubkey, params: StrategyParams) -> Self {
        Self {
            vault,
            strategist: owner,
            rewards: owner,
            keeper: owner,
            implementation,
            params,
        }
    }

    pub fn is_clone(&self) -> bool {
        self.implementation != Pubkey::default()
    }

    pub fn is_authorized(&self, signer: &Pubkey, governance: &Pubkey) -> bool {
        self.strategist == *signer || *governance == *signer
    }
}

/// Account size of a strategy, discriminator included.
pub const STRATEGY_SPACE: usize = 8 + std::mem::size_of::<Strategy>();
