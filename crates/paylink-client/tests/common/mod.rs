//! Shared helpers for client integration tests.
//!
//! Each test starts its own `wiremock` server and points a client at it, so
//! tests can run in parallel without sharing stubs.

#![allow(dead_code)]

use paylink_client::{Credentials, PaylinkClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "pk_test_123";
pub const SECRET_KEY: &str = "sk_test_456";

pub const ACCOUNT_ID: &str = "3dfff852-927d-47e8-822c-2fffc57ff6b9";
pub const TRANSFER_ID: &str = "ec7e1848-dc80-4ab0-8827-dd7fc0737b43";
pub const SOURCE_ID: &str = "9506dbf6-4208-44c3-ad8a-e4431660e1f2";
pub const DESTINATION_ID: &str = "c87a9b1e-5df2-4ff1-85f7-7d1e8e3f7c66";

/// Start a mock server and a client authenticated against it.
pub async fn start() -> (MockServer, PaylinkClient) {
    let server = MockServer::start().await;
    let credentials = Credentials::new(PUBLIC_KEY, SECRET_KEY).with_host(server.uri());
    let client = PaylinkClient::new(credentials).expect("client should build");
    (server, client)
}

pub fn account_json() -> Value {
    json!({
        "accountID": ACCOUNT_ID,
        "mode": "sandbox",
        "accountType": "business",
        "displayName": "Whole Body Fitness",
        "profile": {
            "business": {
                "legalBusinessName": "Whole Body Fitness LLC",
                "businessType": "llc",
                "taxIDProvided": true
            }
        },
        "createdOn": "2024-03-01T10:00:00Z",
        "updatedOn": "2024-03-02T10:00:00Z"
    })
}

pub fn transfer_json(status: &str) -> Value {
    json!({
        "transferID": TRANSFER_ID,
        "createdOn": "2024-04-01T09:30:00Z",
        "status": status,
        "amount": {"currency": "USD", "value": 1250},
        "source": {
            "paymentMethodID": SOURCE_ID,
            "paymentMethodType": "ach-debit-fund",
            "account": {"accountID": ACCOUNT_ID}
        },
        "destination": {
            "paymentMethodID": DESTINATION_ID,
            "paymentMethodType": "wallet",
            "account": {"accountID": ACCOUNT_ID}
        }
    })
}

pub fn refund_json(status: &str) -> Value {
    json!({
        "refundID": "6e7f3c2a-40a3-4c8f-9d0e-0c4c3a5f1b22",
        "createdOn": "2024-04-02T09:30:00Z",
        "updatedOn": "2024-04-02T09:30:00Z",
        "status": status,
        "amount": {"currency": "USD", "value": 500}
    })
}

pub fn wallet_json(wallet_id: &str) -> Value {
    json!({
        "walletID": wallet_id,
        "availableBalance": {"currency": "USD", "value": 10_000, "valueDecimal": "100.00"},
        "status": "active"
    })
}
