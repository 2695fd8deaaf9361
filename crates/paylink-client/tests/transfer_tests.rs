//! Integration tests for transfers, refunds and reversals.

mod common;

use chrono::{TimeZone, Utc};
use common::{refund_json, start, transfer_json, ACCOUNT_ID, DESTINATION_ID, SOURCE_ID, TRANSFER_ID};
use paylink_client::transfer::TransferOptionsTarget;
use paylink_client::{
    AccountId, Amount, CancellationId, CancellationStatus, CreateRefund, CreateTransfer,
    IdempotencyKey, PaymentMethodType, RefundId, RefundOutcome, RefundStatus,
    TransferCallOptions, TransferId, TransferListFilter, TransferOptionsRequest,
    TransferOutcome, TransferStatus, X_IDEMPOTENCY_KEY,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn account_id() -> AccountId {
    ACCOUNT_ID.parse().unwrap()
}

fn transfer_id() -> TransferId {
    TRANSFER_ID.parse().unwrap()
}

fn create_transfer() -> CreateTransfer {
    CreateTransfer::new(
        SOURCE_ID.parse().unwrap(),
        DESTINATION_ID.parse().unwrap(),
        Amount::usd(1250),
    )
}

/// Test 202 Accepted yields a started outcome with a generated idempotency key.
#[tokio::test]
async fn test_create_transfer_started() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers")))
        .and(header_exists(X_IDEMPOTENCY_KEY))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "transferID": TRANSFER_ID,
            "createdOn": "2024-04-01T09:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client
        .create_transfer(account_id(), &create_transfer(), TransferCallOptions::default())
        .await
        .unwrap();

    match outcome {
        TransferOutcome::Started(started) => assert_eq!(started.transfer_id, transfer_id()),
        TransferOutcome::Completed(_) => panic!("expected started transfer"),
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-wait-for").is_none());
    let key = requests[0].headers.get(X_IDEMPOTENCY_KEY).unwrap();
    assert!(key.to_str().unwrap().parse::<IdempotencyKey>().is_ok());
}

/// Test waiting for the rail returns the full transfer and sends the caller's key.
#[tokio::test]
async fn test_create_transfer_completed() {
    let (server, client) = start().await;
    let key = IdempotencyKey::generate();

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers")))
        .and(header("x-wait-for", "rail-response"))
        .and(header(X_IDEMPOTENCY_KEY, key.to_string().as_str()))
        .and(body_json(json!({
            "source": {"paymentMethodID": SOURCE_ID},
            "destination": {"paymentMethodID": DESTINATION_ID},
            "amount": {"currency": "USD", "value": 1250}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_json("completed")))
        .expect(1)
        .mount(&server)
        .await;

    let options = TransferCallOptions::wait_for_rail_response().with_idempotency_key(key);
    let outcome = client
        .create_transfer(account_id(), &create_transfer(), options)
        .await
        .unwrap();

    let transfer = outcome.completed().expect("transfer should be completed");
    assert_eq!(transfer.status, TransferStatus::Completed);
    assert_eq!(transfer.amount, Amount::usd(1250));
}

/// Test a reused idempotency key with a different body is a conflict.
#[tokio::test]
async fn test_create_transfer_conflict() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers")))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": "idempotency key reused"})),
        )
        .mount(&server)
        .await;

    let err = client
        .create_transfer(account_id(), &create_transfer(), TransferCallOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

/// Test transfer filters render repeated account IDs and timestamps.
#[tokio::test]
async fn test_list_transfers_query() {
    let (server, client) = start().await;
    let other = AccountId::generate();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers")))
        .and(query_param("accountIDs", ACCOUNT_ID))
        .and(query_param("accountIDs", other.to_string().as_str()))
        .and(query_param("status", "pending"))
        .and(query_param("startDateTime", "2024-04-01T00:00:00Z"))
        .and(query_param("refunded", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([transfer_json("pending")])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TransferListFilter {
        account_ids: vec![account_id(), other],
        status: Some(TransferStatus::Pending),
        start_date_time: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
        refunded: Some(false),
        ..TransferListFilter::default()
    };
    let transfers = client.list_transfers(account_id(), &filter).await.unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].transfer_id, transfer_id());
}

/// Test metadata updates send only the metadata object.
#[tokio::test]
async fn test_update_transfer_metadata() {
    let (server, client) = start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}")))
        .and(body_json(json!({"metadata": {"invoice": "inv-7"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    let metadata = [("invoice".to_string(), "inv-7".to_string())].into_iter().collect();
    client
        .update_transfer_metadata(account_id(), transfer_id(), metadata)
        .await
        .unwrap();
}

/// Test refunds distinguish finished and pending results.
#[tokio::test]
async fn test_refund_outcomes() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/refunds")))
        .and(header("x-wait-for", "rail-response"))
        .and(body_json(json!({"amount": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(refund_json("completed")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/refunds")))
        .respond_with(ResponseTemplate::new(202).set_body_json(refund_json("pending")))
        .mount(&server)
        .await;

    let refund = CreateRefund { amount: 500 };

    let done = client
        .refund_transfer(
            account_id(),
            transfer_id(),
            refund,
            TransferCallOptions::wait_for_rail_response(),
        )
        .await
        .unwrap();
    assert!(matches!(done, RefundOutcome::Completed(r) if r.status == RefundStatus::Completed));

    let pending = client
        .refund_transfer(account_id(), transfer_id(), refund, TransferCallOptions::default())
        .await
        .unwrap();
    assert!(matches!(pending, RefundOutcome::Started(r) if r.status == RefundStatus::Pending));
}

/// Test a reversal of a settled transfer returns the refund it created.
#[tokio::test]
async fn test_reverse_transfer() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/reversals")))
        .and(header_exists(X_IDEMPOTENCY_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refund": refund_json("pending")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reversal = client
        .reverse_transfer(account_id(), transfer_id(), CreateRefund { amount: 1250 }, None)
        .await
        .unwrap();
    assert!(reversal.cancellation.is_none());
    assert_eq!(reversal.refund.unwrap().amount, Amount::usd(500));
}

/// Test cancelling a transfer that already left is a conflict.
#[tokio::test]
async fn test_cancel_transfer_conflict() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/cancellations"
        )))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = client
        .cancel_transfer(account_id(), transfer_id())
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

const REFUND_ID: &str = "6e7f3c2a-40a3-4c8f-9d0e-0c4c3a5f1b22";

/// Test a transfer is fetched by ID.
#[tokio::test]
async fn test_get_transfer() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_json("completed")))
        .expect(1)
        .mount(&server)
        .await;

    let transfer = client.get_transfer(account_id(), transfer_id()).await.unwrap();
    assert_eq!(transfer.transfer_id, transfer_id());
    assert!(transfer.status.is_final());
    assert_eq!(transfer.amount, Amount::usd(1250));
}

/// Test the options lookup posts both parties and the amount.
#[tokio::test]
async fn test_transfer_options() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfer-options")))
        .and(body_json(json!({
            "source": {"accountID": ACCOUNT_ID},
            "destination": {"paymentMethodID": DESTINATION_ID},
            "amount": {"currency": "USD", "value": 1250}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceOptions": [
                {"paymentMethodID": SOURCE_ID, "paymentMethodType": "ach-debit-fund"}
            ],
            "destinationOptions": [
                {"paymentMethodID": DESTINATION_ID, "paymentMethodType": "wallet"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TransferOptionsRequest {
        source: TransferOptionsTarget {
            account_id: Some(account_id()),
            payment_method_id: None,
        },
        destination: TransferOptionsTarget {
            account_id: None,
            payment_method_id: Some(DESTINATION_ID.parse().unwrap()),
        },
        amount: Amount::usd(1250),
    };
    let options = client.transfer_options(account_id(), &request).await.unwrap();
    assert_eq!(
        options.source_options[0].payment_method_type,
        PaymentMethodType::AchDebitFund
    );
    assert_eq!(
        options.destination_options[0].payment_method_type,
        PaymentMethodType::Wallet
    );
}

/// Test refunds of a transfer are listed and fetched by ID.
#[tokio::test]
async fn test_list_and_get_refunds() {
    let (server, client) = start().await;
    let refund_id: RefundId = REFUND_ID.parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/refunds")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([refund_json("completed")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/refunds/{REFUND_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(refund_json("failed")))
        .expect(1)
        .mount(&server)
        .await;

    let refunds = client.list_refunds(account_id(), transfer_id()).await.unwrap();
    assert_eq!(refunds.len(), 1);
    assert_eq!(refunds[0].refund_id, refund_id);

    let refund = client
        .get_refund(account_id(), transfer_id(), refund_id)
        .await
        .unwrap();
    assert_eq!(refund.status, RefundStatus::Failed);
}

/// Test a cancellation is fetched by ID under its transfer.
#[tokio::test]
async fn test_get_cancellation() {
    let (server, client) = start().await;
    let cancellation_id = CancellationId::generate();

    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{ACCOUNT_ID}/transfers/{TRANSFER_ID}/cancellations/{cancellation_id}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cancellationID": cancellation_id.to_string(),
            "status": "completed",
            "createdOn": "2024-04-01T09:35:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cancellation = client
        .get_cancellation(account_id(), transfer_id(), cancellation_id)
        .await
        .unwrap();
    assert_eq!(cancellation.cancellation_id, cancellation_id);
    assert_eq!(cancellation.status, CancellationStatus::Completed);
}
