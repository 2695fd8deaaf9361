//! Integration tests for account-scoped resources: capabilities, funding
//! sources, wallets, disputes, sweeps and issued cards.

mod common;

use chrono::{TimeZone, Utc};
use common::{start, wallet_json, ACCOUNT_ID, DESTINATION_ID, SOURCE_ID, TRANSFER_ID};
use paylink_client::issued_card::{AuthorizedUser, FormFactor};
use paylink_client::{
    AccountId, Address, AuthorizationId, AuthorizationListFilter, AuthorizationStatus,
    BankAccountId, BankAccountStatus, CapabilityName, CapabilityStatus, CardExpiration, CardId,
    ClientError, CreateCard, CreateIssuedCard, CreateSweepConfig, DisputeId, DisputeListFilter,
    DisputeStatus, EvidenceId, EvidenceText, EvidenceType, IssuedCardId, IssuedCardListFilter,
    IssuedCardState, Pagination, PaymentMethodListFilter, PaymentMethodType, SweepConfigId,
    SweepConfigStatus, SweepId, SweepListFilter, SweepStatus, UpdateIssuedCard,
    UpdateSweepConfig, WalletId, WalletTransactionId, WalletTransactionListFilter,
    WalletTransactionStatus, WalletTransactionType,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const WALLET_ID: &str = "5ae5d1a2-3f31-4e0e-9f06-6a2f2b7c1e01";
const DISPUTE_ID: &str = "0a5b6c7d-8e9f-4a1b-9c2d-3e4f5a6b7c8d";
const EVIDENCE_ID: &str = "e1f2a3b4-c5d6-4e7f-8a9b-0c1d2e3f4a5b";
const ISSUED_CARD_ID: &str = "bd9d6bce-3a1c-4d2c-8f2d-a8c8ad3b7e0f";

fn account_id() -> AccountId {
    ACCOUNT_ID.parse().unwrap()
}

fn dispute_json(status: &str) -> Value {
    json!({
        "disputeID": DISPUTE_ID,
        "createdOn": "2024-05-01T12:00:00Z",
        "amount": {"currency": "USD", "value": 1250},
        "networkReasonCode": "10.4",
        "transfer": {"transferID": TRANSFER_ID},
        "respondBy": "2024-05-15T12:00:00Z",
        "status": status,
        "phase": "chargeback"
    })
}

fn evidence_json() -> Value {
    json!({
        "evidenceID": EVIDENCE_ID,
        "disputeID": DISPUTE_ID,
        "evidenceType": "proof-of-delivery",
        "text": "Delivered on May 2",
        "createdOn": "2024-05-02T12:00:00Z"
    })
}

fn issued_card_json(state: &str) -> Value {
    json!({
        "issuedCardID": ISSUED_CARD_ID,
        "brand": "Visa",
        "lastFourCardNumber": "4242",
        "expiration": {"month": "01", "year": "30"},
        "authorizedUser": {"firstName": "Jules", "lastName": "Jackson"},
        "fundingWalletID": WALLET_ID,
        "state": state,
        "formFactor": "virtual",
        "createdOn": "2024-09-01T08:00:00Z"
    })
}

fn sweep_config_json(sweep_config_id: SweepConfigId, status: &str) -> Value {
    json!({
        "sweepConfigID": sweep_config_id.to_string(),
        "walletID": WALLET_ID,
        "status": status,
        "pushPaymentMethod": {"paymentMethodID": DESTINATION_ID},
        "pullPaymentMethod": {"paymentMethodID": SOURCE_ID},
        "minimumBalance": "25.00",
        "lockedFields": ["walletID"],
        "createdOn": "2024-08-01T00:00:00Z",
        "updatedOn": "2024-08-01T00:00:00Z"
    })
}

/// Test capability names are used as path segments.
#[tokio::test]
async fn test_capabilities() {
    let (server, client) = start().await;
    let capability = json!({
        "capability": "send-funds",
        "accountID": ACCOUNT_ID,
        "status": "pending",
        "requirements": {"currentlyDue": ["individual.ssn"]},
        "createdOn": "2024-03-01T10:00:00Z",
        "updatedOn": "2024-03-01T10:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/capabilities")))
        .and(body_json(json!({"capabilities": ["send-funds"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([capability.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/capabilities/send-funds")))
        .respond_with(ResponseTemplate::new(200).set_body_json(capability))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/capabilities/send-funds")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let requested = client
        .request_capabilities(account_id(), vec![CapabilityName::SendFunds])
        .await
        .unwrap();
    assert_eq!(requested.len(), 1);
    assert_eq!(requested[0].status, CapabilityStatus::Pending);

    let fetched = client
        .get_capability(account_id(), CapabilityName::SendFunds)
        .await
        .unwrap();
    assert_eq!(
        fetched.requirements.unwrap().currently_due,
        vec!["individual.ssn".to_string()]
    );

    client
        .disable_capability(account_id(), CapabilityName::SendFunds)
        .await
        .unwrap();
}

/// Test linking a card twice is reported as a conflict.
#[tokio::test]
async fn test_create_card_duplicate() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/cards")))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "card already exists"})),
        )
        .mount(&server)
        .await;

    let card = CreateCard {
        card_number: "4111111111111111".into(),
        card_cvv: "123".into(),
        expiration: CardExpiration::new(1, 2030),
        holder_name: "Jules Jackson".into(),
        billing_address: Address {
            postal_code: "80301".into(),
            ..Address::default()
        },
        card_on_file: false,
        merchant_account_id: None,
    };
    let err = client.create_card(account_id(), &card).await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict(r) if r.message == "card already exists"));
}

/// Test disabling a card sends DELETE to the card path.
#[tokio::test]
async fn test_disable_card() {
    let (server, client) = start().await;
    let card_id = CardId::generate();

    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/cards/{card_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.disable_card(account_id(), card_id).await.unwrap();
}

/// Test micro-deposits are started with POST and confirmed with PUT.
#[tokio::test]
async fn test_micro_deposits() {
    let (server, client) = start().await;
    let bank_account_id = BankAccountId::generate();
    let micro_path =
        format!("/accounts/{ACCOUNT_ID}/bank-accounts/{bank_account_id}/micro-deposits");

    Mock::given(method("POST"))
        .and(path(micro_path.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(micro_path.as_str()))
        .and(body_json(json!({"amounts": [18, 21]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"bankAccountStatus": "verified"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client
        .initiate_micro_deposits(account_id(), bank_account_id)
        .await
        .unwrap();
    let confirmation = client
        .confirm_micro_deposits(account_id(), bank_account_id, [18, 21])
        .await
        .unwrap();
    assert_eq!(confirmation.bank_account_status, BankAccountStatus::Verified);
}

/// Test payment method filters render to query parameters.
#[tokio::test]
async fn test_list_payment_methods_query() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/payment-methods")))
        .and(query_param("sourceID", WALLET_ID))
        .and(query_param("paymentMethodType", "wallet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "paymentMethodID": "c87a9b1e-5df2-4ff1-85f7-7d1e8e3f7c66",
            "paymentMethodType": "wallet",
            "wallet": wallet_json(WALLET_ID)
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = PaymentMethodListFilter {
        source_id: Some(WALLET_ID.parse().unwrap()),
        payment_method_type: Some(PaymentMethodType::Wallet),
    };
    let methods = client
        .list_payment_methods(account_id(), &filter)
        .await
        .unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].wallet.as_ref().unwrap().available_balance.value, 10_000);
}

/// Test wallets are listed and fetched by ID.
#[tokio::test]
async fn test_wallets() {
    let (server, client) = start().await;
    let wallet_id: WalletId = WALLET_ID.parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/wallets")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([wallet_json(WALLET_ID)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/wallets/{WALLET_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json(WALLET_ID)))
        .mount(&server)
        .await;

    let wallets = client.list_wallets(account_id()).await.unwrap();
    assert_eq!(wallets[0].wallet_id, wallet_id);

    let wallet = client.get_wallet(account_id(), wallet_id).await.unwrap();
    assert_eq!(wallet.available_balance.value_decimal.as_deref(), Some("100.00"));
}

/// Test the dispute response flow: list, accept, submit evidence.
#[tokio::test]
async fn test_disputes() {
    let (server, client) = start().await;
    let dispute_id: DisputeId = DISPUTE_ID.parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes")))
        .and(query_param("status", "response-needed"))
        .and(query_param("count", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([dispute_json("response-needed")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}/evidence-text")))
        .and(body_json(json!({"text": "Delivered on May 2", "evidenceType": "proof-of-delivery"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(evidence_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}/evidence/submit")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}/accept")))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let filter = DisputeListFilter {
        status: Some(DisputeStatus::ResponseNeeded),
        pagination: Pagination {
            skip: None,
            count: Some(25),
        },
        ..DisputeListFilter::default()
    };
    let disputes = client.list_disputes(account_id(), &filter).await.unwrap();
    assert!(disputes[0].status.awaiting_response());

    let evidence = client
        .upload_dispute_evidence_text(
            account_id(),
            dispute_id,
            &EvidenceText {
                text: "Delivered on May 2".into(),
                evidence_type: EvidenceType::ProofOfDelivery,
            },
        )
        .await
        .unwrap();
    assert_eq!(evidence.dispute_id, dispute_id);

    client
        .submit_dispute_evidence(account_id(), dispute_id)
        .await
        .unwrap();

    let err = client.accept_dispute(account_id(), dispute_id).await.unwrap_err();
    assert!(err.is_conflict());
}

/// Test sweeps are listed per wallet with a status filter.
#[tokio::test]
async fn test_sweeps() {
    let (server, client) = start().await;
    let wallet_id: WalletId = WALLET_ID.parse().unwrap();
    let sweep_id = SweepId::generate();
    let sweep = json!({
        "sweepID": sweep_id.to_string(),
        "status": "accruing",
        "accrualStartDateTime": "2024-08-01T00:00:00Z",
        "currency": "USD",
        "accruedAmountDecimal": "12.50"
    });

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/wallets/{WALLET_ID}/sweeps")))
        .and(query_param("status", "accruing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sweep.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/wallets/{WALLET_ID}/sweeps/{sweep_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sweep))
        .expect(1)
        .mount(&server)
        .await;

    let filter = SweepListFilter {
        status: Some(SweepStatus::Accruing),
        ..SweepListFilter::default()
    };
    let sweeps = client
        .list_sweeps(account_id(), wallet_id, &filter)
        .await
        .unwrap();
    assert_eq!(sweeps[0].sweep_id, sweep_id);

    let fetched = client.get_sweep(account_id(), wallet_id, sweep_id).await.unwrap();
    assert_eq!(fetched.accrued_amount_decimal, "12.50");
}

/// Test issued card states are sent comma-separated.
#[tokio::test]
async fn test_list_issued_cards_states() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/issued-cards")))
        .and(query_param("states", "active,pending-verification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issued_card_json("active")])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = IssuedCardListFilter {
        states: vec![IssuedCardState::Active, IssuedCardState::PendingVerification],
        ..IssuedCardListFilter::default()
    };
    let cards = client.list_issued_cards(account_id(), &filter).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].state, IssuedCardState::Active);
    assert_eq!(cards[0].last_four, "4242");
}

/// Test wallet transaction filters render to query parameters.
#[tokio::test]
async fn test_wallet_transactions() {
    let (server, client) = start().await;
    let wallet_id: WalletId = WALLET_ID.parse().unwrap();
    let transaction_id = WalletTransactionId::generate();
    let transaction = json!({
        "walletID": WALLET_ID,
        "transactionID": transaction_id.to_string(),
        "transactionType": "card-payment",
        "sourceType": "transfer",
        "sourceID": TRANSFER_ID,
        "status": "completed",
        "createdOn": "2024-06-01T12:00:00Z",
        "currency": "USD",
        "grossAmount": 1250,
        "netAmount": 1213
    });

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/wallets/{WALLET_ID}/transactions")))
        .and(query_param("transactionType", "card-payment"))
        .and(query_param("status", "completed"))
        .and(query_param("createdStartDateTime", "2024-06-01T00:00:00Z"))
        .and(query_param("sourceID", TRANSFER_ID))
        .and(query_param("skip", "0"))
        .and(query_param("count", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([transaction.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{ACCOUNT_ID}/wallets/{WALLET_ID}/transactions/{transaction_id}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(transaction))
        .expect(1)
        .mount(&server)
        .await;

    let filter = WalletTransactionListFilter {
        transaction_type: Some(WalletTransactionType::CardPayment),
        status: Some(WalletTransactionStatus::Completed),
        created_start_date_time: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        source_id: Some(TRANSFER_ID.into()),
        pagination: Pagination::page(0, 50),
        ..WalletTransactionListFilter::default()
    };
    let transactions = client
        .list_wallet_transactions(account_id(), wallet_id, &filter)
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].net_amount, 1213);

    let fetched = client
        .get_wallet_transaction(account_id(), wallet_id, transaction_id)
        .await
        .unwrap();
    assert_eq!(fetched.transaction_id, transaction_id);
    assert_eq!(fetched.transaction_type, WalletTransactionType::CardPayment);
}

/// Test a dispute's evidence is fetched, listed and deleted.
#[tokio::test]
async fn test_dispute_evidence() {
    let (server, client) = start().await;
    let dispute_id: DisputeId = DISPUTE_ID.parse().unwrap();
    let evidence_id: EvidenceId = EVIDENCE_ID.parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(dispute_json("under-review")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}/evidence")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([evidence_json()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/disputes/{DISPUTE_ID}/evidence/{EVIDENCE_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dispute = client.get_dispute(account_id(), dispute_id).await.unwrap();
    assert_eq!(dispute.status, DisputeStatus::UnderReview);
    assert!(!dispute.status.awaiting_response());

    let evidence = client
        .list_dispute_evidence(account_id(), dispute_id)
        .await
        .unwrap();
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].evidence_id, evidence_id);
    assert_eq!(evidence[0].evidence_type, EvidenceType::ProofOfDelivery);

    client
        .delete_dispute_evidence(account_id(), dispute_id, evidence_id)
        .await
        .unwrap();
}

/// Test sweep configs are created, fetched, listed and patched.
#[tokio::test]
async fn test_sweep_configs() {
    let (server, client) = start().await;
    let sweep_config_id = SweepConfigId::generate();
    let config_path = format!("/accounts/{ACCOUNT_ID}/sweep-configs/{sweep_config_id}");
    let listed_config = sweep_config_json(sweep_config_id, "enabled");

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/sweep-configs")))
        .and(body_json(json!({
            "walletID": WALLET_ID,
            "status": "enabled",
            "pushPaymentMethodID": DESTINATION_ID,
            "pullPaymentMethodID": SOURCE_ID,
            "minimumBalance": "25.00"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sweep_config_json(sweep_config_id, "enabled")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(config_path.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sweep_config_json(sweep_config_id, "enabled")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT_ID}/sweep-configs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([listed_config])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(config_path.as_str()))
        .and(body_json(json!({"status": "disabled"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sweep_config_json(sweep_config_id, "disabled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let create = CreateSweepConfig {
        wallet_id: WALLET_ID.parse().unwrap(),
        status: SweepConfigStatus::Enabled,
        push_payment_method_id: DESTINATION_ID.parse().unwrap(),
        pull_payment_method_id: SOURCE_ID.parse().unwrap(),
        statement_descriptor: None,
        minimum_balance: Some("25.00".into()),
    };
    let created = client
        .create_sweep_config(account_id(), &create)
        .await
        .unwrap();
    assert_eq!(created.sweep_config_id, sweep_config_id);
    assert_eq!(created.locked_fields, vec!["walletID".to_string()]);

    let fetched = client
        .get_sweep_config(account_id(), sweep_config_id)
        .await
        .unwrap();
    assert_eq!(fetched.minimum_balance.as_deref(), Some("25.00"));

    let listed = client.list_sweep_configs(account_id()).await.unwrap();
    assert_eq!(listed.len(), 1);

    let update = UpdateSweepConfig {
        status: Some(SweepConfigStatus::Disabled),
        ..UpdateSweepConfig::default()
    };
    let updated = client
        .update_sweep_config(account_id(), sweep_config_id, &update)
        .await
        .unwrap();
    assert_eq!(updated.status, SweepConfigStatus::Disabled);
}

/// Test issuing a card and reading it back.
#[tokio::test]
async fn test_create_and_get_issued_card() {
    let (server, client) = start().await;
    let issued_card_id: IssuedCardId = ISSUED_CARD_ID.parse().unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/issued-cards")))
        .and(body_json(json!({
            "fundingWalletID": WALLET_ID,
            "authorizedUser": {"firstName": "Jules", "lastName": "Jackson"},
            "formFactor": "virtual",
            "memo": "Team offsite"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(issued_card_json("pending-verification")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/issued-cards/{ISSUED_CARD_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(issued_card_json("active")))
        .expect(1)
        .mount(&server)
        .await;

    let create = CreateIssuedCard {
        funding_wallet_id: WALLET_ID.parse().unwrap(),
        authorized_user: AuthorizedUser {
            first_name: "Jules".into(),
            last_name: "Jackson".into(),
            birth_date: None,
        },
        form_factor: FormFactor::Virtual,
        memo: Some("Team offsite".into()),
        expiration: None,
        controls: None,
    };
    let issued = client
        .create_issued_card(account_id(), &create)
        .await
        .unwrap();
    assert_eq!(issued.issued_card_id, issued_card_id);
    assert_eq!(issued.state, IssuedCardState::PendingVerification);

    let fetched = client
        .get_issued_card(account_id(), issued_card_id)
        .await
        .unwrap();
    assert_eq!(fetched.state, IssuedCardState::Active);
}

/// Test an issued card patch succeeds on 204 with no body.
#[tokio::test]
async fn test_update_issued_card() {
    let (server, client) = start().await;
    let issued_card_id: IssuedCardId = ISSUED_CARD_ID.parse().unwrap();

    Mock::given(method("PATCH"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/issued-cards/{ISSUED_CARD_ID}")))
        .and(body_json(json!({"state": "closed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateIssuedCard {
        state: Some(IssuedCardState::Closed),
        ..UpdateIssuedCard::default()
    };
    client
        .update_issued_card(account_id(), issued_card_id, &update)
        .await
        .unwrap();
}

/// Test authorization filters render to query parameters and single
/// authorizations are fetched by ID.
#[tokio::test]
async fn test_issued_card_authorizations() {
    let (server, client) = start().await;
    let authorization_id = AuthorizationId::generate();
    let authorization = json!({
        "authorizationID": authorization_id.to_string(),
        "issuedCardID": ISSUED_CARD_ID,
        "fundingWalletID": WALLET_ID,
        "network": "visa",
        "authorizedAmount": "-12.50",
        "status": "pending",
        "merchantData": {"name": "Corner Cafe", "mcc": "5814"},
        "createdOn": "2024-09-02T08:00:00Z"
    });

    Mock::given(method("GET"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/authorizations")))
        .and(query_param("issuedCardID", ISSUED_CARD_ID))
        .and(query_param("statuses", "pending,cleared"))
        .and(query_param("endDateTime", "2024-09-30T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([authorization.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/issuing/{ACCOUNT_ID}/authorizations/{authorization_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(authorization))
        .expect(1)
        .mount(&server)
        .await;

    let filter = AuthorizationListFilter {
        issued_card_id: Some(ISSUED_CARD_ID.parse().unwrap()),
        statuses: vec![AuthorizationStatus::Pending, AuthorizationStatus::Cleared],
        end_date_time: Some(Utc.with_ymd_and_hms(2024, 9, 30, 0, 0, 0).unwrap()),
        ..AuthorizationListFilter::default()
    };
    let authorizations = client
        .list_issued_card_authorizations(account_id(), &filter)
        .await
        .unwrap();
    assert_eq!(authorizations.len(), 1);
    assert_eq!(authorizations[0].status, AuthorizationStatus::Pending);

    let fetched = client
        .get_issued_card_authorization(account_id(), authorization_id)
        .await
        .unwrap();
    assert_eq!(fetched.authorization_id, authorization_id);
    assert_eq!(fetched.amount().value_decimal, "-12.50");
    assert_eq!(
        fetched.merchant_data.and_then(|m| m.name).as_deref(),
        Some("Corner Cafe")
    );
}
