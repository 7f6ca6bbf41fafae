use std::env;

use exosign_core::{OsEnv, Signer};
use exosign_exoscale_v2::{Config, RequestSigner};
use http::header::AUTHORIZATION;
use http::StatusCode;
use log::{debug, warn};

fn init_signer() -> Option<(Signer<RequestSigner>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("EXOSIGN_EXOSCALE_V2_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let signer = Config::new()
        .from_env(&OsEnv)
        .into_signer()
        .expect("EXOSCALE_API_KEY and EXOSCALE_API_SECRET must set");
    let url = env::var("EXOSIGN_EXOSCALE_V2_URL")
        .unwrap_or_else(|_| "https://api-ch-gva-2.exoscale.com/v2".to_string());

    Some((signer, url))
}

#[tokio::test]
async fn test_list_instances() -> anyhow::Result<()> {
    let Some((signer, url)) = init_signer() else {
        warn!("EXOSIGN_EXOSCALE_V2_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = http::Request::get(format!("{url}/instance")).body(reqwest::Body::from(""))?;
    signer.sign(&mut req).await?;
    debug!("signed request: {:?}", req.headers().get(AUTHORIZATION));

    let resp = reqwest::Client::new()
        .execute(reqwest::Request::try_from(req)?)
        .await?;
    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::OK, resp.status());

    let body: serde_json::Value = resp.json().await?;
    assert!(body.get("instances").is_some());
    Ok(())
}

#[tokio::test]
async fn test_list_instances_with_query() -> anyhow::Result<()> {
    let Some((signer, url)) = init_signer() else {
        warn!("EXOSIGN_EXOSCALE_V2_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = http::Request::get(format!("{url}/instance?manager-type=instance-pool"))
        .body(reqwest::Body::from(""))?;
    signer.sign(&mut req).await?;

    let resp = reqwest::Client::new()
        .execute(reqwest::Request::try_from(req)?)
        .await?;
    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() -> anyhow::Result<()> {
    let Some((signer, url)) = init_signer() else {
        warn!("EXOSIGN_EXOSCALE_V2_TEST is not set, skipped");
        return Ok(());
    };

    let signer = Config::new()
        .with_api_key(signer.builder().credential().api_key())
        .with_api_secret("not-the-secret")
        .into_signer()?;

    let mut req = http::Request::get(format!("{url}/instance")).body(reqwest::Body::from(""))?;
    signer.sign(&mut req).await?;

    let resp = reqwest::Client::new()
        .execute(reqwest::Request::try_from(req)?)
        .await?;
    assert!(resp.status().is_client_error());
    Ok(())
}
