// Mint, drop and burn across one or more campaigns.

use anyhow::Result;
use raidar_integration_tests::Harness;
use tracing::info;

#[tokio::test]
async fn test_single_collection_mint_and_burn() -> Result<()> {
    let harness = Harness::setup().await?;
    let (raidar, bob) = (&harness.raidar, &harness.bob);

    harness.create_songs(1).await?;
    assert!(harness.tokens_for_owner(bob).await?.is_empty());

    let start = harness.available_balance(raidar).await?;

    for _ in 1..=5 {
        harness.drop_nft(bob, "1").await?;
    }

    let end = harness.available_balance(raidar).await?;
    harness.log_spent(raidar, start, end);

    assert_eq!(harness.tokens_for_owner(bob).await?.len(), 5);

    harness.burn_nft(bob, "1").await?;

    info!("After burn");
    info!(
        "raidar end balance: {}",
        harness.available_balance(raidar).await?
    );

    assert_eq!(harness.tokens_for_owner(bob).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_three_collections_mint_and_burn() -> Result<()> {
    let harness = Harness::setup().await?;
    let (raidar, bob) = (&harness.raidar, &harness.bob);

    harness.create_songs(3).await?;

    let start = harness.available_balance(raidar).await?;

    for token_id in ["1", "2", "3", "3"] {
        harness.drop_nft(bob, token_id).await?;
    }

    let end = harness.available_balance(raidar).await?;
    harness.log_spent(raidar, start, end);

    assert_eq!(harness.tokens_for_owner(bob).await?.len(), 4);

    for (burn, expected) in [("1", 3), ("3", 1), ("2", 0)] {
        harness.burn_nft(bob, burn).await?;

        info!("After burning {}", burn);
        info!(
            "raidar end balance: {}",
            harness.available_balance(raidar).await?
        );

        let remaining = harness.tokens_for_owner(bob).await?;
        assert_eq!(remaining.len(), expected, "after burning {}", burn);
        assert!(
            remaining.iter().all(|nft| nft.label() != burn),
            "{} should be gone after burning it",
            burn
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_each_campaign_dropped_once() -> Result<()> {
    let harness = Harness::setup().await?;
    let (bob, sam) = (&harness.bob, &harness.sam);
    let campaigns = 4;

    harness.create_songs(campaigns).await?;

    for i in 1..=campaigns {
        harness.drop_nft(bob, &i.to_string()).await?;
    }

    let tokens = harness.tokens_for_owner(bob).await?;
    assert_eq!(tokens.len(), campaigns as usize);
    assert!(tokens.iter().all(|nft| nft.owner_id == bob.id().as_str()));
    assert!(harness.tokens_for_owner(sam).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dropped_token_carries_song_metadata() -> Result<()> {
    let harness = Harness::setup().await?;
    let bob = &harness.bob;

    harness.create_songs(2).await?;
    let dropped = harness.drop_nft(bob, "2").await?;

    assert_eq!(dropped.label(), "2");
    assert_eq!(dropped.owner_id, bob.id().as_str());

    let tokens = harness.tokens_for_owner(bob).await?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_id, dropped.token_id);

    let metadata = tokens[0]
        .metadata
        .as_ref()
        .expect("dropped token should have metadata");
    assert_eq!(metadata.title.as_deref(), Some("Test Song 2"));
    assert_eq!(metadata.description.as_deref(), Some("Test Song 2 description"));
    assert_eq!(metadata.media.as_deref(), Some("song/2/media"));
    assert!(metadata.issued_at.is_some());
    assert!(tokens[0]
        .approved_account_ids
        .as_ref()
        .map_or(true, |approved| approved.is_empty()));

    Ok(())
}

#[tokio::test]
async fn test_supply_matches_owner_holdings() -> Result<()> {
    let harness = Harness::setup().await?;
    let (bob, sam) = (&harness.bob, &harness.sam);

    harness.create_songs(2).await?;
    harness.drop_nft(bob, "1").await?;
    harness.drop_nft(bob, "2").await?;
    harness.drop_nft(sam, "2").await?;

    let total: String = harness
        .view("nft_total_supply", serde_json::json!({}))
        .await?;
    let bob_supply: String = harness
        .view(
            "nft_supply_for_owner",
            serde_json::json!({ "account_id": bob.id() }),
        )
        .await?;

    assert_eq!(total, "3");
    assert_eq!(bob_supply, "2");

    let all: Vec<raidar_integration_tests::NearNft> =
        harness.view("nft_tokens", serde_json::json!({})).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
