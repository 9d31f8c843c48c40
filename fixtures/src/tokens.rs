use std::{cell::Cell, collections::BTreeMap};

use solana_program::program_pack::Pack;
use solana_program_test::ProgramTestContext;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use tracing::debug;

use crate::{
    config::{NetworkProfile, TokenConfig},
    error::{FixtureError, Result},
};

/// Symbol to mint lookup for the active profile.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    tokens: BTreeMap<String, TokenConfig>,
    underlying: Vec<String>,
    wrapped_native: String,
    reward: String,
    collateral: String,
}

impl TokenCatalog {
    pub fn from_profile(profile: &NetworkProfile) -> Self {
        Self {
            tokens: profile.tokens.clone(),
            underlying: profile.underlying.clone(),
            wrapped_native: profile.wrapped_native.clone(),
            reward: profile.reward_token.clone(),
            collateral: profile.collateral_token.clone(),
        }
    }

    pub fn resolve(&self, symbol: &str) -> Result<TokenHandle> {
        let token = self
            .tokens
            .get(symbol)
            .ok_or_else(|| FixtureError::UnknownToken(symbol.to_string()))?;
        Ok(TokenHandle::new(symbol, token.mint))
    }

    /// Raw deposit size for APR scenarios, if the profile defines one.
    pub fn apr_deposit(&self, symbol: &str) -> Result<Option<u64>> {
        self.tokens
            .get(symbol)
            .map(|token| token.apr_deposit)
            .ok_or_else(|| FixtureError::UnknownToken(symbol.to_string()))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn underlying(&self) -> &[String] {
        &self.underlying
    }

    pub fn wrapped_native(&self) -> Result<TokenHandle> {
        self.resolve(&self.wrapped_native)
    }

    pub fn reward(&self) -> Result<TokenHandle> {
        self.resolve(&self.reward)
    }

    pub fn collateral(&self) -> Result<TokenHandle> {
        self.resolve(&self.collateral)
    }
}

/// Handle to an SPL mint. Decimals are read from chain on first use.
#[derive(Debug, Clone)]
pub struct TokenHandle {
    symbol: String,
    mint: Pubkey,
    decimals: Cell<Option<u8>>,
}

impl TokenHandle {
    pub fn new(symbol: &str, mint: Pubkey) -> Self {
        Self {
            symbol: symbol.to_string(),
            mint,
            decimals: Cell::new(None),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn mint(&self) -> Pubkey {
        self.mint
    }

    pub async fn decimals(&self, context: &mut ProgramTestContext) -> Result<u8> {
        if let Some(decimals) = self.decimals.get() {
            return Ok(decimals);
        }

        let account = context
            .banks_client
            .get_account(self.mint)
            .await?
            .ok_or(FixtureError::AccountNotFound(self.mint))?;
        let decimals = spl_token::state::Mint::unpack(&account.data)?.decimals;
        debug!("{} decimals: {}", self.symbol, decimals);

        self.decimals.set(Some(decimals));
        Ok(decimals)
    }

    /// Associated token account of `owner` for this mint.
    pub fn account_of(&self, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, &self.mint)
    }

    /// Raw balance of `owner`'s associated token account; zero if it does not exist.
    pub async fn balance_of(&self, context: &mut ProgramTestContext, owner: &Pubkey) -> Result<u64> {
        let address = self.account_of(owner);
        let Some(account) = context.banks_client.get_account(address).await? else {
            return Ok(0);
        };
        Ok(spl_token::state::Account::unpack(&account.data)?.amount)
    }
}
