use solana_program_test::ProgramTestContext;
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use tracing::info;

use crate::{
    config::NetworkProfile,
    error::{FixtureError, Result},
    fork::scale,
    impersonation::Impersonator,
    tokens::TokenHandle,
    transaction::send,
};

/// Transfers the configured whale quantity of `token` to `user`.
///
/// The whale lookup happens before any chain access. A whale holding less
/// than the quantity fails the transfer with `FixtureError::Reverted`.
pub async fn fund(
    context: &mut ProgramTestContext,
    profile: &NetworkProfile,
    impersonator: &Impersonator,
    token: &TokenHandle,
    user: Pubkey,
) -> Result<Pubkey> {
    let whale = profile
        .whale(&token.mint())
        .ok_or(FixtureError::UnsupportedToken(token.mint()))?;

    let decimals = token.decimals(context).await?;
    let amount = scale(whale.quantity, decimals)?;

    let whale_account = token.account_of(&whale.owner);
    impersonator
        .impersonate(context, whale_account, amount)
        .await?;

    let payer = context.payer.pubkey();
    let instructions = [
        create_associated_token_account_idempotent(&payer, &user, &token.mint(), &spl_token::id()),
        spl_token::instruction::transfer(
            &spl_token::id(),
            &whale_account,
            &token.account_of(&user),
            &impersonator.signer().pubkey(),
            &[],
            amount,
        )?,
    ];
    send(context, &instructions, &[impersonator.signer()]).await?;

    info!(
        "Funded {} with {} {} from whale {}",
        user,
        amount,
        token.symbol(),
        whale.owner
    );

    Ok(user)
}
