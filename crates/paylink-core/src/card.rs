//! Payment card types.

use serde::{Deserialize, Serialize};

use crate::common::Address;
use crate::payment_method::PaymentMethodRef;
use crate::CardId;

/// A card linked to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The card ID.
    #[serde(rename = "cardID")]
    pub card_id: CardId,
    /// Stable hash of the card number, shared by duplicate links.
    pub fingerprint: String,
    /// Card network.
    pub brand: CardBrand,
    /// Funding type.
    pub card_type: CardType,
    /// Last four digits of the card number.
    #[serde(rename = "lastFourCardNumber")]
    pub last_four: String,
    /// Bank identification number.
    pub bin: String,
    /// Expiry month and year.
    pub expiration: CardExpiration,
    /// Name on the card.
    pub holder_name: String,
    /// Address the issuer has on file.
    pub billing_address: Address,
    /// Issuer check results.
    pub card_verification: CardVerification,
    /// Issuing bank.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Issuing bank's country.
    #[serde(default)]
    pub issuer_country: Option<String>,
    /// Whether the card is stored for future payments.
    #[serde(default)]
    pub card_on_file: bool,
    /// Merchant account the card is linked under.
    #[serde(default, rename = "merchantAccountID")]
    pub merchant_account_id: Option<String>,
    /// Latest network update.
    #[serde(default)]
    pub card_account_updater: Option<CardAccountUpdater>,
    /// Payment methods backed by this card.
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodRef>,
}

/// Card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
    /// American Express.
    #[serde(rename = "American Express")]
    AmericanExpress,
    /// Discover.
    Discover,
    /// Mastercard.
    Mastercard,
    /// Visa.
    Visa,
    /// A network this client does not know.
    #[serde(other)]
    Unknown,
}

/// Funding type of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Debit card.
    Debit,
    /// Credit card.
    Credit,
    /// Prepaid card.
    Prepaid,
    /// A funding type this client does not know.
    #[serde(other)]
    Unknown,
}

/// Two-digit month and two-digit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiration {
    /// Two-digit month.
    pub month: String,
    /// Two-digit year.
    pub year: String,
}

impl CardExpiration {
    /// Build from numeric month and year, zero padding both to two digits.
    #[must_use]
    pub fn new(month: u8, year: u16) -> Self {
        Self {
            month: format!("{month:02}"),
            year: format!("{:02}", year % 100),
        }
    }
}

/// Outcome of the issuer checks run when the card was linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVerification {
    /// CVV check.
    pub cvv: VerificationResult,
    /// Street address check.
    pub address_line1: VerificationResult,
    /// Postal code check.
    pub postal_code: VerificationResult,
}

/// Result of one issuer check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationResult {
    /// Value did not match.
    NoMatch,
    /// Value matched.
    Match,
    /// Check was not run.
    NotChecked,
    /// Issuer does not support the check.
    Unavailable,
}

/// Most recent automatic card update from the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAccountUpdater {
    /// When the card was updated.
    #[serde(default)]
    pub updated_on: Option<chrono::DateTime<chrono::Utc>>,
    /// Kind of update, such as `number-update`.
    #[serde(default)]
    pub update_type: Option<String>,
}

/// Request body for linking a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    /// Full card number.
    pub card_number: String,
    /// Security code.
    #[serde(rename = "cardCvv")]
    pub card_cvv: String,
    /// Expiry month and year.
    pub expiration: CardExpiration,
    /// Name on the card.
    pub holder_name: String,
    /// Billing address.
    pub billing_address: Address,
    /// Whether to store the card for future payments.
    pub card_on_file: bool,
    /// Merchant account to link the card under.
    #[serde(rename = "merchantAccountID", skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
}

/// Patch body for updating a linked card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    /// New expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<CardExpiration>,
    /// New security code.
    #[serde(rename = "cardCvv", skip_serializing_if = "Option::is_none")]
    pub card_cvv: Option<String>,
    /// Billing address lines to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<UpdateBillingAddress>,
    /// Whether to store the card for future payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_on_file: Option<bool>,
}

/// Partial billing address; only the set lines are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillingAddress {
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
