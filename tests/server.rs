use explorer_verifier::{run_http_server, ContractResponse, Settings};
use pretty_assertions::assert_eq;
use std::{io::Write, time::Duration};

async fn get_with_retries(url: &str) -> reqwest::Response {
    for _ in 0..20 {
        if let Ok(response) = reqwest::get(url).await {
            return response;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("failed to connect to server: {url}");
}

#[actix_rt::test]
async fn server_start() {
    let mut seed = tempfile::NamedTempFile::new().unwrap();
    write!(
        seed,
        r#"[{{"address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "bytecode": "0x6001"}}]"#
    )
    .unwrap();

    let mut settings = Settings::default();
    settings.server.addr = "127.0.0.1:8051".parse().unwrap();
    settings.metrics.enabled = true;
    settings.metrics.addr = "127.0.0.1:6061".parse().unwrap();
    settings.store.seed_file = Some(seed.path().to_path_buf());
    let base = format!("http://{}", settings.server.addr);
    let metrics_base = format!("http://{}", settings.metrics.addr);

    let _server_handle = {
        let settings = settings.clone();
        tokio::spawn(async move { run_http_server(settings).await })
    };

    let response = get_with_retries(&format!("{base}/health")).await;
    assert_eq!(response.status(), 200);

    let response = get_with_retries(&format!(
        "{base}/api/v1/contracts/0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
    ))
    .await;
    assert_eq!(response.status(), 200);
    let contract: ContractResponse = response.json().await.expect("contract json");
    assert_eq!(contract.address, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    assert_eq!(contract.bytecode, "6001");
    assert!(!contract.valid);

    let response = get_with_retries(&format!(
        "{base}/api/v1/contracts/0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"
    ))
    .await;
    assert_eq!(response.status(), 404);

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/contracts/verify"))
        .json(&serde_json::json!({
            "address": "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            "contract_name": "Foo",
            "source_code": "contract Foo {}",
        }))
        .send()
        .await
        .expect("verify request failed");
    assert_eq!(response.status(), 404);

    let response = get_with_retries(&format!("{metrics_base}/metrics")).await;
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    for s in [
        "# TYPE explorer_verifier_http_requests_duration_seconds histogram",
        "endpoint=\"/health\"",
        "explorer_verifier_verify_contract{status=\"fail\"}",
    ] {
        assert!(body.contains(s), "body doesn't have string {s}:\n{body}");
    }
}
