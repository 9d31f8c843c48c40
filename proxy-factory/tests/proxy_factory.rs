mod common;

use common::*;

use proxy_factory::{
    event::ProxyCreated,
    instruction::deploy_minimal,
    state::proxy_pda,
};
use solana_sdk::{pubkey::Pubkey, signer::Signer, system_instruction};

// ============================================================================
// CreateFactory
// ============================================================================

#[tokio::test]
async fn test_create_factory() {
    let mut fixture = Fixture::start().await;

    let state = fixture.factory_state().await;
    assert_eq!(state.authority, fixture.governance.pubkey());
    assert_eq!(state.proxy_count, 0);
    assert_eq!(state.created(0), None);
}

// ============================================================================
// DeployMinimal
// ============================================================================

#[tokio::test]
async fn test_deploy_minimal_clones_and_initializes() {
    let mut fixture = Fixture::start().await;
    let beneficiary = fixture.strategist.pubkey();
    let ix = fixture.deploy_ix(0, beneficiary);
    fixture.send(&[ix]).await.unwrap();

    let (expected, _) = proxy_pda(fixture.factory, 0);
    let factory = fixture.factory_state().await;
    assert_eq!(factory.proxy_count, 1);
    assert_eq!(
        factory.created(0),
        Some(ProxyCreated {
            proxy: expected,
            logic: fixture.logic,
        })
    );

    let clone = fixture
        .context
        .banks_client
        .get_account(expected)
        .await
        .unwrap()
        .unwrap();
    let logic = fixture
        .context
        .banks_client
        .get_account(fixture.logic)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(clone.owner, strategy_frax::id());
    assert_eq!(clone.data.len(), logic.data.len());

    let state = get_strategy_state(&mut fixture.context.banks_client, expected).await;
    assert_eq!(state.strategist, beneficiary);
    assert_eq!(state.vault, fixture.vault);
    assert_eq!(state.implementation, fixture.logic);
    assert_eq!(state.params, fixture.params);
}

#[tokio::test]
async fn test_deploy_minimal_twice_yields_distinct_proxies() {
    let mut fixture = Fixture::start().await;
    let first_ix = fixture.deploy_ix(0, fixture.strategist.pubkey());
    let second_ix = fixture.deploy_ix(1, fixture.governance.pubkey());

    fixture.send(&[first_ix]).await.unwrap();
    let first = fixture.factory_state().await.created(0).unwrap();
    fixture.send(&[second_ix]).await.unwrap();
    let factory = fixture.factory_state().await;
    let second = factory.created(1).unwrap();

    // Only the latest clone is on record.
    assert_eq!(factory.created(0), None);
    assert_ne!(first.proxy, second.proxy);
    assert_ne!(first.proxy, fixture.logic);
    assert_ne!(second.proxy, fixture.logic);

    let state = get_strategy_state(&mut fixture.context.banks_client, second.proxy).await;
    assert_eq!(state.strategist, fixture.governance.pubkey());
}

#[tokio::test]
async fn test_deploy_minimal_prefunded_proxy() {
    let mut fixture = Fixture::start().await;
    let (proxy, _) = proxy_pda(fixture.factory, 0);
    let payer = fixture.context.payer.pubkey();
    fixture
        .send(&[system_instruction::transfer(&payer, &proxy, 1_000)])
        .await
        .unwrap();

    let ix = fixture.deploy_ix(0, fixture.strategist.pubkey());
    fixture.send(&[ix]).await.unwrap();

    let account = fixture
        .context
        .banks_client
        .get_account(proxy)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owner, strategy_frax::id());
    assert!(account.lamports > 1_000, "rent must be topped up");

    let state = get_strategy_state(&mut fixture.context.banks_client, proxy).await;
    assert_eq!(state.strategist, fixture.strategist.pubkey());
    assert_eq!(fixture.factory_state().await.proxy_count, 1);
}

#[tokio::test]
async fn test_deploy_minimal_wrong_slot_fails() {
    let mut fixture = Fixture::start().await;
    let ix = fixture.deploy_ix(3, fixture.strategist.pubkey());

    let result = fixture.send(&[ix]).await;
    assert!(result.is_err(), "proxy must be the next factory PDA");
}

#[tokio::test]
async fn test_deploy_minimal_foreign_logic_fails() {
    let mut fixture = Fixture::start().await;
    // The vault is owned by the vault program, not the strategy program.
    let ix = deploy_minimal(
        fixture.context.payer.pubkey(),
        fixture.factory,
        0,
        fixture.vault,
        strategy_frax::id(),
        &strategy_frax::instruction::init_data(fixture.strategist.pubkey(), fixture.params),
        strategy_frax::instruction::init_forwarded_accounts(fixture.vault),
    );

    let result = fixture.send(&[ix]).await;
    assert!(result.is_err(), "logic must belong to the logic program");
}

#[tokio::test]
async fn test_deploy_minimal_failed_init_reverts_clone() {
    let mut fixture = Fixture::start().await;
    let ix = fixture.deploy_ix(0, Pubkey::default());

    let result = fixture.send(&[ix]).await;
    assert!(result.is_err(), "zero beneficiary must be rejected by the initializer");

    let (proxy, _) = proxy_pda(fixture.factory, 0);
    let account = fixture.context.banks_client.get_account(proxy).await.unwrap();
    assert!(account.is_none());
    assert_eq!(fixture.factory_state().await.proxy_count, 0);
}
