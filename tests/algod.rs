use algorand_client::AlgodClient;
use algorand_client::models::{DryrunRequest, DryrunSource};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_bytes, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

fn algod(server: &MockServer) -> AlgodClient {
    AlgodClient::new(&server.uri(), TOKEN).unwrap()
}

#[tokio::test]
async fn status_sends_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .and(header("X-Algo-API-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "last-round": 1000,
            "last-version": "future",
            "time-since-last-round": 1500000000u64,
            "catchup-time": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = algod(&server).status().execute().await.unwrap();
    assert_eq!(status.last_round, 1000);
    assert_eq!(status.last_version, "future");
    assert_eq!(status.time_since_last_round, 1_500_000_000);
    assert!(!status.stopped_at_unsupported_round);
}

#[tokio::test]
async fn account_information_decodes_partial_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts/ADDR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "ADDR",
            "amount": 5000,
            "status": "Offline",
            "round": 12
        })))
        .mount(&server)
        .await;

    let account = algod(&server)
        .account_information("ADDR")
        .execute()
        .await
        .unwrap();
    assert_eq!(account.address, "ADDR");
    assert_eq!(account.amount, 5000);
    assert_eq!(account.pending_rewards, 0);
    assert!(account.participation.is_none());
    assert!(account.assets.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn pending_transactions_max() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/transactions/pending"))
        .and(query_param("max", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "top-transactions": [{"txn": {"type": "pay"}}, {"txn": {"type": "axfer"}}],
            "total-transactions": 9
        })))
        .mount(&server)
        .await;

    let pool = algod(&server)
        .pending_transactions()
        .max(2)
        .execute()
        .await
        .unwrap();
    assert_eq!(pool.top_transactions.len(), 2);
    assert!(pool.is_truncated());
}

#[tokio::test]
async fn raw_transaction_posts_binary_body() {
    let server = MockServer::start().await;
    let signed = vec![0x82u8, 0xa3, 0x73, 0x69, 0x67];
    Mock::given(method("POST"))
        .and(path("/v2/transactions"))
        .and(header("content-type", "application/x-binary"))
        .and(body_bytes(signed.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"txId": "TXID"})))
        .expect(1)
        .mount(&server)
        .await;

    let sent = algod(&server)
        .raw_transaction(signed)
        .execute()
        .await
        .unwrap();
    assert_eq!(sent.tx_id, "TXID");
}

#[tokio::test]
async fn teal_compile_posts_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/teal/compile"))
        .and(header("content-type", "text/plain"))
        .and(body_string("#pragma version 2\nint 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hash": "KI4DJG2OOFJGUERJGSWCYGFZWDNEU2KWTU56VRJHITP62PLJ5VYMBFDBFE",
            "result": "ASABASI="
        })))
        .mount(&server)
        .await;

    let compiled = algod(&server)
        .teal_compile("#pragma version 2\nint 1")
        .execute()
        .await
        .unwrap();
    assert_eq!(compiled.result, "ASABASI=");
}

#[tokio::test]
async fn teal_dryrun_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/teal/dryrun"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "protocol-version": "future",
            "txns": [{"logic-sig-messages": ["PASS"]}]
        })))
        .mount(&server)
        .await;

    let request = DryrunRequest {
        sources: vec![DryrunSource {
            field_name: "lsig".to_string(),
            source: "int 1".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let result = algod(&server)
        .teal_dryrun(request)
        .execute()
        .await
        .unwrap();
    assert_eq!(result.protocol_version, "future");
    assert_eq!(result.txns[0].logic_sig_messages, vec!["PASS".to_string()]);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["sources"][0]["field-name"], "lsig");
}

#[tokio::test]
async fn catchup_start_and_abort() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/catchup/5000%23LABEL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "catchup-message": "Catchpoint 5000#LABEL started"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/catchup/5000%23LABEL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "catchup-message": "Catchpoint 5000#LABEL aborted"
        })))
        .mount(&server)
        .await;

    let client = algod(&server);
    let started = client.start_catchup("5000#LABEL").execute().await.unwrap();
    assert_eq!(started.catchup_message, "Catchpoint 5000#LABEL started");
    let aborted = client.abort_catchup("5000#LABEL").execute().await.unwrap();
    assert_eq!(aborted.catchup_message, "Catchpoint 5000#LABEL aborted");
}

#[tokio::test]
async fn text_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("algod_ledger_round 12\n"))
        .mount(&server)
        .await;

    let client = algod(&server);
    assert_eq!(client.health_check().execute().await.unwrap(), "");
    assert_eq!(
        client.metrics().execute().await.unwrap(),
        "algod_ledger_round 12\n"
    );
}

#[tokio::test]
async fn versions_and_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genesis-id": "testnet-v1.0",
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "versions": ["v1", "v2"],
            "build": {"major": 2, "minor": 1, "channel": "stable"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/transactions/params"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "consensus-version": "future",
            "fee": 0,
            "min-fee": 1000,
            "genesis-id": "testnet-v1.0",
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "last-round": 77
        })))
        .mount(&server)
        .await;

    let client = algod(&server);
    let version = client.versions().execute().await.unwrap();
    assert_eq!(version.genesis_id, "testnet-v1.0");
    assert_eq!(version.genesis_hash.len(), 32);
    assert_eq!(version.build.major, 2);
    assert_eq!(version.build.build_number, 0);

    let params = client.transaction_params().execute().await.unwrap();
    assert_eq!(params.fee, 0);
    assert_eq!(params.min_fee, 1000);
    assert_eq!(params.genesis_hash, version.genesis_hash);
}

#[tokio::test]
async fn swagger_is_raw_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/swagger.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"swagger": "2.0"})))
        .mount(&server)
        .await;

    let swagger = algod(&server).swagger_json().execute().await.unwrap();
    assert_eq!(swagger["swagger"], "2.0");
}
