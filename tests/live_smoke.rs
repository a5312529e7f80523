use livecoinwatch_api_client::ApiKey;
use livecoinwatch_api_client::rest::LiveCoinWatchClient;

fn live_tests_enabled() -> bool {
    std::env::var("LIVECOINWATCH_LIVE_TESTS").ok().as_deref() == Some("1")
}

fn live_client() -> Option<LiveCoinWatchClient> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return None;
    }
    ApiKey::try_from_env().map(LiveCoinWatchClient::new)
}

#[tokio::test]
#[ignore]
async fn live_status_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let Some(client) = live_client() else {
        return Ok(());
    };

    let response = client.status().await?;
    assert_eq!(response.status(), 200);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_credits_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let Some(client) = live_client() else {
        return Ok(());
    };

    let response = client.credits().await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    let limit = body["dailyCreditsLimit"]
        .as_i64()
        .ok_or("dailyCreditsLimit is not an integer")?;
    let remaining = body["dailyCreditsRemaining"]
        .as_i64()
        .ok_or("dailyCreditsRemaining is not an integer")?;
    assert!(remaining <= limit);

    if let Ok(expected) = std::env::var("DAILY_CREDITS_LIMIT") {
        assert_eq!(expected.parse::<i64>()?, limit);
    }

    Ok(())
}
