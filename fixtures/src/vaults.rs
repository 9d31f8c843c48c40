use solana_program_test::ProgramTestContext;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use steel::AccountDeserialize;
use token_vault::state::Vault;
use tracing::info;

use crate::{
    error::{FixtureError, Result},
    tokens::TokenHandle,
    transaction::send,
};

/// A deployed and initialized token vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultHandle {
    pub address: Pubkey,
    pub token: Pubkey,
}

impl VaultHandle {
    pub async fn state(&self, context: &mut ProgramTestContext) -> Result<Vault> {
        let account = context
            .banks_client
            .get_account(self.address)
            .await?
            .ok_or(FixtureError::AccountNotFound(self.address))?;
        Ok(*Vault::try_from_bytes(&account.data)?)
    }

    /// Associated token account holding the vault's deposits.
    pub fn token_account(&self) -> Pubkey {
        token_vault::state::vault_token_account(&self.address, &self.token)
    }

    /// Sends a second `Initialize`. Always reverts on a provisioned vault.
    pub async fn reinitialize(
        &self,
        context: &mut ProgramTestContext,
        signer: &Keypair,
        governance: Pubkey,
        rewards: Pubkey,
    ) -> Result<()> {
        let ix = token_vault::instruction::initialize(
            signer.pubkey(),
            self.address,
            self.token,
            governance,
            rewards,
            signer.pubkey(),
            "",
            "",
        );
        send(context, &[ix], &[signer]).await?;
        Ok(())
    }
}

/// Deploys a new vault for `token` from the guardian and initializes it
/// with token-derived name and symbol.
pub async fn make_vault(
    context: &mut ProgramTestContext,
    token: &TokenHandle,
    governance: Pubkey,
    rewards: Pubkey,
    guardian: &Keypair,
) -> Result<VaultHandle> {
    let vault = Keypair::new();
    let mint = token.mint();

    let instructions = [
        token_vault::instruction::create(guardian.pubkey(), vault.pubkey()),
        create_associated_token_account_idempotent(
            &guardian.pubkey(),
            &vault.pubkey(),
            &mint,
            &spl_token::id(),
        ),
        token_vault::instruction::initialize(
            guardian.pubkey(),
            vault.pubkey(),
            mint,
            governance,
            rewards,
            guardian.pubkey(),
            "",
            "",
        ),
    ];
    send(context, &instructions, &[guardian, &vault]).await?;

    info!("Vault {} created for {}", vault.pubkey(), token.symbol());

    Ok(VaultHandle {
        address: vault.pubkey(),
        token: mint,
    })
}
