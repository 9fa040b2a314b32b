use std::env;

use anyhow::Result;
use http::Request;
use http::StatusCode;
use log::debug;
use log::warn;
use reqwest::Client;
use storsign_azure_storage::{Config, Credential};
use storsign_core::Signer;

mod signing;

fn init_signer() -> Option<Signer<Credential>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("STORSIGN_AZURE_STORAGE_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let config = Config::default()
        .with_account_name(
            env::var("STORSIGN_AZURE_STORAGE_ACCOUNT_NAME")
                .expect("env STORSIGN_AZURE_STORAGE_ACCOUNT_NAME must set"),
        )
        .with_account_key(
            env::var("STORSIGN_AZURE_STORAGE_ACCOUNT_KEY")
                .expect("env STORSIGN_AZURE_STORAGE_ACCOUNT_KEY must set"),
        )
        .from_env()
        .expect("config must be valid");

    Some(config.signer().expect("signer must be built"))
}

fn http_date() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

#[tokio::test]
async fn test_head_blob() -> Result<()> {
    let Some(signer) = init_signer() else {
        warn!("STORSIGN_AZURE_STORAGE_TEST is not set, skipped");
        return Ok(());
    };

    let url =
        &env::var("STORSIGN_AZURE_STORAGE_URL").expect("env STORSIGN_AZURE_STORAGE_URL must set");

    let req = Request::builder()
        .method(http::Method::HEAD)
        .header("x-ms-version", "2023-01-03")
        .header("x-ms-date", http_date())
        .uri(format!("{}/{}", url, "not_exist_file"))
        .body(reqwest::Body::default())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts)?;
    let req = Request::from_parts(parts, body);

    debug!("signed request: {:?}", req);

    let resp = Client::new().execute(req.try_into()?).await?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_list_blobs() -> Result<()> {
    let Some(signer) = init_signer() else {
        warn!("STORSIGN_AZURE_STORAGE_TEST is not set, skipped");
        return Ok(());
    };

    let url =
        &env::var("STORSIGN_AZURE_STORAGE_URL").expect("env STORSIGN_AZURE_STORAGE_URL must set");

    let req = Request::builder()
        .method(http::Method::GET)
        .header("x-ms-version", "2023-01-03")
        .header("x-ms-date", http_date())
        .uri(format!(
            "{}?restype=container&comp=list&prefix=test%2F&maxresults=10",
            url
        ))
        .body(reqwest::Body::default())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts)?;
    let req = Request::from_parts(parts, body);

    debug!("signed request: {:?}", req);

    let resp = Client::new().execute(req.try_into()?).await?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}
