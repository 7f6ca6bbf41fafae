use std::sync::Arc;
use std::thread;

use exosign_core::Signer;
use exosign_exoscale_v2::{Credential, RequestSigner};
use http::Method;
use pretty_assertions::assert_eq;

use super::{init_signer, sign_at};

#[test]
fn test_concurrent_signing_from_threads() {
    let signer = init_signer("K", "S");
    let expected: Vec<String> = (0..16)
        .map(|i| {
            sign_at(
                &signer,
                Method::GET,
                &format!("https://api.exoscale.com/v2/instance?page={i}"),
                b"",
            )
        })
        .collect();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let signer = signer.clone();
            thread::spawn(move || {
                sign_at(
                    &signer,
                    Method::GET,
                    &format!("https://api.exoscale.com/v2/instance?page={i}"),
                    b"",
                )
            })
        })
        .collect();

    let got: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread must not panic"))
        .collect();
    assert_eq!(got, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signing_from_tasks() -> anyhow::Result<()> {
    let signer = init_signer("K", "S");

    let mut tasks = Vec::new();
    for i in 0..32 {
        let signer = signer.clone();
        tasks.push(tokio::spawn(async move {
            let mut req = http::Request::post("https://api.exoscale.com/v2/instance")
                .body(http_body_util::Full::new(bytes::Bytes::from(format!(
                    "{{\"name\":\"vm-{i}\"}}"
                ))))?;
            signer.sign(&mut req).await?;
            anyhow::Ok(req)
        }));
    }

    for task in tasks {
        let req = task.await??;
        assert!(req.headers().contains_key(http::header::AUTHORIZATION));
    }
    Ok(())
}

#[test]
fn test_shared_credential_is_not_copied() {
    let cred = Arc::new(Credential::new("K", "S").expect("must be valid"));
    let a = Signer::new(RequestSigner::from_shared(cred.clone()));
    let b = Signer::new(RequestSigner::from_shared(cred.clone()));

    assert!(std::ptr::eq(a.builder().credential(), b.builder().credential()));
    assert_eq!(Arc::strong_count(&cred), 3);
}
