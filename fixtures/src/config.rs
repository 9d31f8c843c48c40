//! Network profiles.
//!
//! A profile holds every chain-specific address the bootstrap needs: tokens,
//! whales, role indices and the external protocol the strategy is wired to.

use std::{collections::BTreeMap, path::Path, str::FromStr};

use serde::{Deserialize, Deserializer};
use solana_sdk::pubkey::Pubkey;

use crate::error::{FixtureError, Result};

/// Env var naming an alternate profile file.
pub const PROFILE_ENV: &str = "STRATEGY_FIXTURES_PROFILE";

const MAINNET: &str = include_str!("../profiles/mainnet.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkProfile {
    pub name: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    #[serde(default = "default_pool_lamports")]
    pub pool_lamports: u64,
    /// Symbols the vault fixture is parametrised over
    pub underlying: Vec<String>,
    pub wrapped_native: String,
    pub reward_token: String,
    pub collateral_token: String,
    #[serde(default)]
    pub roles: RolesConfig,
    pub tokens: BTreeMap<String, TokenConfig>,
    #[serde(default)]
    pub whales: Vec<WhaleConfig>,
    pub protocol: ProtocolConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenConfig {
    #[serde(deserialize_with = "pubkey_from_str")]
    pub mint: Pubkey,
    /// Decimals the snapshot mint is created with
    pub decimals: u8,
    /// Raw deposit size used by APR scenarios
    pub apr_deposit: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WhaleConfig {
    #[serde(deserialize_with = "pubkey_from_str")]
    pub mint: Pubkey,
    #[serde(deserialize_with = "pubkey_from_str")]
    pub owner: Pubkey,
    /// Whole tokens transferred per funding call
    pub quantity: u64,
    /// Whole tokens held in the snapshot
    pub balance: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    pub deployer: usize,
    pub governance: usize,
    pub guardian: usize,
    pub strategist: usize,
    pub keeper: usize,
    pub user: usize,
    pub rewards: Option<usize>,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            deployer: 0,
            governance: 1,
            guardian: 2,
            strategist: 3,
            keeper: 4,
            user: 5,
            rewards: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProtocolConfig {
    #[serde(deserialize_with = "pubkey_from_str")]
    pub staking_contract: Pubkey,
    #[serde(deserialize_with = "pubkey_from_str")]
    pub lp_pool: Pubkey,
    #[serde(deserialize_with = "pubkey_from_str")]
    pub router: Pubkey,
    #[serde(deserialize_with = "pubkey_from_str")]
    pub reward_oracle: Pubkey,
    #[serde(deserialize_with = "pubkey_from_str")]
    pub collateral_oracle: Pubkey,
}

fn default_pool_size() -> usize {
    10
}

fn default_pool_lamports() -> u64 {
    100_000_000_000
}

fn pubkey_from_str<'de, D>(deserializer: D) -> std::result::Result<Pubkey, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(|e| serde::de::Error::custom(format!("{s}: {e}")))
}

impl NetworkProfile {
    /// The embedded mainnet profile.
    pub fn mainnet() -> Result<Self> {
        Self::from_toml_str(MAINNET)
    }

    /// Loads `.env`, then the file named by `STRATEGY_FIXTURES_PROFILE`,
    /// falling back to the mainnet profile.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        match std::env::var(PROFILE_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => Self::mainnet(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let profile: Self = toml::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn token(&self, symbol: &str) -> Option<&TokenConfig> {
        self.tokens.get(symbol)
    }

    pub fn whale(&self, mint: &Pubkey) -> Option<&WhaleConfig> {
        self.whales.iter().find(|whale| whale.mint == *mint)
    }

    pub fn rewards_index(&self) -> usize {
        self.roles.rewards.unwrap_or(self.roles.governance)
    }

    fn validate(&self) -> Result<()> {
        let named = self
            .underlying
            .iter()
            .chain([&self.wrapped_native, &self.reward_token, &self.collateral_token]);
        for symbol in named {
            if !self.tokens.contains_key(symbol) {
                return Err(FixtureError::Config(format!("token {symbol} is not defined")));
            }
        }

        if self.underlying.is_empty() {
            return Err(FixtureError::Config("no underlying tokens".to_string()));
        }

        for whale in &self.whales {
            if !self.tokens.values().any(|token| token.mint == whale.mint) {
                return Err(FixtureError::Config(format!(
                    "whale {} holds unknown mint {}",
                    whale.owner, whale.mint
                )));
            }
        }

        let roles = &self.roles;
        let indices = [
            ("deployer", roles.deployer),
            ("governance", roles.governance),
            ("guardian", roles.guardian),
            ("strategist", roles.strategist),
            ("keeper", roles.keeper),
            ("user", roles.user),
            ("rewards", self.rewards_index()),
        ];
        for (role, index) in indices {
            if index >= self.pool_size {
                return Err(FixtureError::Config(format!(
                    "{role} index {index} outside pool of {}",
                    self.pool_size
                )));
            }
        }

        Ok(())
    }
}
