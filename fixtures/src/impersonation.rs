use solana_program::{program_option::COption, program_pack::Pack};
use solana_program_test::ProgramTestContext;
use solana_sdk::{
    account::AccountSharedData, pubkey::Pubkey, signature::Keypair, signer::Signer,
};
use tracing::debug;

use crate::error::{FixtureError, Result};

/// Test-only signing authority over token accounts the caller does not own.
///
/// Rewrites the target account so that it delegates `amount` to a key held
/// by this capability. Only a bank that allows direct account writes (the
/// program-test context) can grant it, and only `TestEnvironment` creates one.
///
/// ```compile_fail
/// let _ = strategy_fixtures::impersonation::Impersonator::new();
/// ```
pub struct Impersonator {
    delegate: Keypair,
}

impl Impersonator {
    pub(crate) fn new() -> Self {
        Self {
            delegate: Keypair::new(),
        }
    }

    /// Signer to use as transfer authority after `impersonate`.
    pub fn signer(&self) -> &Keypair {
        &self.delegate
    }

    /// Grants this capability the right to move `amount` out of `token_account`.
    pub async fn impersonate(
        &self,
        context: &mut ProgramTestContext,
        token_account: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let mut account = context
            .banks_client
            .get_account(token_account)
            .await?
            .ok_or(FixtureError::AccountNotFound(token_account))?;

        let mut state = spl_token::state::Account::unpack(&account.data)?;
        state.delegate = COption::Some(self.delegate.pubkey());
        state.delegated_amount = amount;
        spl_token::state::Account::pack(state, &mut account.data)?;

        context.set_account(&token_account, &AccountSharedData::from(account));
        debug!("Impersonating {} (owner {}) for {}", token_account, state.owner, amount);

        Ok(())
    }
}
