//! Sign a request to the exoscale API V2 and send it with reqwest.
//!
//! ```shell
//! EXOSCALE_API_KEY=EXO... EXOSCALE_API_SECRET=... cargo run --example sign_request
//! ```

use exosign_core::OsEnv;
use exosign_exoscale_v2::Config;
use http::header::AUTHORIZATION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();

    let signer = Config::new().from_env(&OsEnv).into_signer()?;

    let mut req = http::Request::get("https://api-ch-gva-2.exoscale.com/v2/instance")
        .body(reqwest::Body::from(""))?;
    signer.sign(&mut req).await?;

    println!(
        "Authorization: {}",
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    );

    let resp = reqwest::Client::new()
        .execute(reqwest::Request::try_from(req)?)
        .await?;
    println!("status: {}", resp.status());
    println!("{}", resp.text().await?);

    Ok(())
}
