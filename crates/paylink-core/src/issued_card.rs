//! Card issuing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{CardBrand, CardExpiration};
use crate::common::{AmountDecimal, Pagination};
use crate::{AuthorizationId, IssuedCardId, WalletId};

/// Lifecycle of an issued card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssuedCardState {
    /// Usable.
    Active,
    /// Temporarily blocked.
    Inactive,
    /// Waiting on cardholder verification.
    PendingVerification,
    /// Permanently closed.
    Closed,
}

/// Physical form of an issued card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// Card number only, no plastic.
    Virtual,
}

/// The person allowed to use an issued card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<crate::account::BirthDate>,
}

/// Spending controls on an issued card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuingControls {
    /// Close the card after its first authorization.
    #[serde(default)]
    pub single_use: bool,
    /// Spend limits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub velocity_limits: Vec<VelocityLimit>,
}

/// Spend ceiling over an interval, in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityLimit {
    /// Ceiling in cents.
    pub amount: i64,
    /// Window the ceiling applies to.
    pub interval: VelocityInterval,
}

/// Window a velocity limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VelocityInterval {
    /// Each authorization on its own.
    PerTransaction,
}

/// A card issued against a funding wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCard {
    /// The issued card ID.
    #[serde(rename = "issuedCardID")]
    pub issued_card_id: IssuedCardId,
    /// Card network.
    pub brand: CardBrand,
    /// Last four digits of the card number.
    #[serde(rename = "lastFourCardNumber")]
    pub last_four: String,
    /// Expiry month and year.
    pub expiration: CardExpiration,
    /// Person allowed to use the card.
    pub authorized_user: AuthorizedUser,
    /// Note for the issuer's own records.
    #[serde(default)]
    pub memo: Option<String>,
    /// Wallet the card spends from.
    #[serde(rename = "fundingWalletID")]
    pub funding_wallet_id: WalletId,
    /// Current state.
    pub state: IssuedCardState,
    /// Physical form.
    pub form_factor: FormFactor,
    /// Spending controls.
    #[serde(default)]
    pub controls: Option<IssuingControls>,
    /// When the card was issued.
    pub created_on: DateTime<Utc>,
}

/// Request body for issuing a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssuedCard {
    /// Wallet the card spends from.
    #[serde(rename = "fundingWalletID")]
    pub funding_wallet_id: WalletId,
    /// Person allowed to use the card.
    pub authorized_user: AuthorizedUser,
    /// Physical form.
    pub form_factor: FormFactor,
    /// Note for the issuer's own records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Requested expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<CardExpiration>,
    /// Spending controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<IssuingControls>,
}

/// Patch body for an issued card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssuedCard {
    /// New state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssuedCardState>,
    /// New memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// New authorized user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_user: Option<AuthorizedUser>,
}

/// Filters for listing issued cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuedCardListFilter {
    /// Only cards in one of these states.
    pub states: Vec<IssuedCardState>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl IssuedCardListFilter {
    /// Render as query parameters. States are joined with commas.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.states.is_empty() {
            let states: Vec<String> = self.states.iter().map(crate::wire_name).collect();
            params.push(("states", states.join(",")));
        }
        params.extend(self.pagination.to_query());
        params
    }
}

/// Where an authorization stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
    /// Funds held.
    Pending,
    /// Rejected.
    Declined,
    /// Released without clearing.
    Canceled,
    /// Settled.
    Cleared,
    /// Lapsed without clearing.
    Expired,
}

/// An authorization placed on an issued card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCardAuthorization {
    /// The authorization ID.
    #[serde(rename = "authorizationID")]
    pub authorization_id: AuthorizationId,
    /// Card that was authorized.
    #[serde(rename = "issuedCardID")]
    pub issued_card_id: IssuedCardId,
    /// Wallet holding the funds.
    #[serde(rename = "fundingWalletID")]
    pub funding_wallet_id: WalletId,
    /// Card network that sent the request.
    pub network: String,
    /// Authorized amount as a decimal string.
    pub authorized_amount: String,
    /// Current status.
    pub status: AuthorizationStatus,
    /// Merchant details.
    #[serde(default)]
    pub merchant_data: Option<MerchantData>,
    /// When the authorization was received.
    pub created_on: DateTime<Utc>,
}

impl IssuedCardAuthorization {
    /// The authorized amount with its currency, assuming USD.
    #[must_use]
    pub fn amount(&self) -> AmountDecimal {
        AmountDecimal {
            currency: "USD".to_string(),
            value_decimal: self.authorized_amount.clone(),
        }
    }
}

/// Merchant details reported by the card network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantData {
    /// Merchant ID on the network.
    #[serde(default, rename = "networkID")]
    pub network_id: Option<String>,
    /// Merchant name.
    #[serde(default)]
    pub name: Option<String>,
    /// Merchant city.
    #[serde(default)]
    pub city: Option<String>,
    /// Merchant country.
    #[serde(default)]
    pub country: Option<String>,
    /// Merchant postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Merchant state.
    #[serde(default)]
    pub state: Option<String>,
    /// Merchant category code.
    #[serde(default)]
    pub mcc: Option<String>,
}

/// Filters for listing issued card authorizations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationListFilter {
    /// Only authorizations on this card.
    pub issued_card_id: Option<IssuedCardId>,
    /// Only authorizations in one of these statuses.
    pub statuses: Vec<AuthorizationStatus>,
    /// Created at or after this time.
    pub start_date_time: Option<DateTime<Utc>>,
    /// Created before this time.
    pub end_date_time: Option<DateTime<Utc>>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl AuthorizationListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(card_id) = self.issued_card_id {
            params.push(("issuedCardID", card_id.to_string()));
        }
        if !self.statuses.is_empty() {
            let statuses: Vec<String> = self.statuses.iter().map(crate::wire_name).collect();
            params.push(("statuses", statuses.join(",")));
        }
        if let Some(start) = self.start_date_time {
            params.push(("startDateTime", crate::rfc3339(start)));
        }
        if let Some(end) = self.end_date_time {
            params.push(("endDateTime", crate::rfc3339(end)));
        }
        params.extend(self.pagination.to_query());
        params
    }
}
