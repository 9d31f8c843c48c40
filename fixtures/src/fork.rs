use solana_program::{program_option::COption, program_pack::Pack, rent::Rent};
use solana_program_test::ProgramTest;
use solana_sdk::{account::Account, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::{Account as TokenAccount, AccountState, Mint};

use crate::{
    config::NetworkProfile,
    error::{FixtureError, Result},
};

/// Chain state every session starts from: the profile's mints at their
/// canonical addresses and the whales' token accounts.
#[derive(Debug, Clone, Default)]
pub struct ForkSnapshot {
    pub mints: Vec<MintSeed>,
    pub holdings: Vec<HoldingSeed>,
}

#[derive(Debug, Clone, Copy)]
pub struct MintSeed {
    pub address: Pubkey,
    pub decimals: u8,
    pub supply: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct HoldingSeed {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl ForkSnapshot {
    pub fn from_profile(profile: &NetworkProfile) -> Result<Self> {
        let mut snapshot = Self::default();

        for token in profile.tokens.values() {
            let mut supply = 0u64;
            for whale in profile.whales.iter().filter(|w| w.mint == token.mint) {
                let amount = scale(whale.balance, token.decimals)?;
                supply = supply
                    .checked_add(amount)
                    .ok_or(FixtureError::AmountOverflow {
                        quantity: whale.balance,
                        decimals: token.decimals,
                    })?;
                snapshot.holdings.push(HoldingSeed {
                    mint: token.mint,
                    owner: whale.owner,
                    amount,
                });
            }
            snapshot.mints.push(MintSeed {
                address: token.mint,
                decimals: token.decimals,
                supply,
            });
        }

        Ok(snapshot)
    }

    pub fn apply(&self, program_test: &mut ProgramTest) -> Result<()> {
        for mint in &self.mints {
            let mut data = vec![0u8; Mint::LEN];
            Mint::pack(
                Mint {
                    mint_authority: COption::None,
                    supply: mint.supply,
                    decimals: mint.decimals,
                    is_initialized: true,
                    freeze_authority: COption::None,
                },
                &mut data,
            )?;
            program_test.add_account(mint.address, token_program_account(data));
        }

        for holding in &self.holdings {
            let mut data = vec![0u8; TokenAccount::LEN];
            TokenAccount::pack(
                TokenAccount {
                    mint: holding.mint,
                    owner: holding.owner,
                    amount: holding.amount,
                    delegate: COption::None,
                    state: AccountState::Initialized,
                    is_native: COption::None,
                    delegated_amount: 0,
                    close_authority: COption::None,
                },
                &mut data,
            )?;
            program_test.add_account(
                get_associated_token_address(&holding.owner, &holding.mint),
                token_program_account(data),
            );
        }

        Ok(())
    }
}

/// `quantity` whole tokens in base units.
pub fn scale(quantity: u64, decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|unit| quantity.checked_mul(unit))
        .ok_or(FixtureError::AmountOverflow { quantity, decimals })
}

fn token_program_account(data: Vec<u8>) -> Account {
    Account {
        lamports: Rent::default().minimum_balance(data.len()).max(1),
        data,
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}
