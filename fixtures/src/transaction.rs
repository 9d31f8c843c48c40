use solana_program_test::ProgramTestContext;
use solana_sdk::{
    instruction::Instruction, signature::Keypair, signer::Signer, transaction::Transaction,
};
use tracing::debug;

use crate::error::{FixtureError, Result};

/// Sends `instructions` with the context payer as fee payer.
///
/// Returns the program logs on success; a failed transaction becomes
/// `FixtureError::Reverted` carrying its logs.
pub async fn send(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<Vec<String>> {
    let payer = context.payer.insecure_clone();
    let mut all_signers = vec![&payer];
    all_signers.extend(signers.iter().copied().filter(|s| s.pubkey() != payer.pubkey()));

    let blockhash = context.banks_client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        blockhash,
    );

    let outcome = context
        .banks_client
        .process_transaction_with_metadata(tx)
        .await?;
    let logs = outcome
        .metadata
        .map(|meta| meta.log_messages)
        .unwrap_or_default();

    match outcome.result {
        Ok(()) => Ok(logs),
        Err(error) => {
            debug!("Transaction reverted: {}", error);
            for line in &logs {
                debug!("  {}", line);
            }
            Err(FixtureError::Reverted { error, logs })
        }
    }
}
