//! Payment method types.
//!
//! Payment methods are derived by the API from wallets, bank accounts and cards;
//! transfers move money from one payment method to another.

use serde::{Deserialize, Serialize};

use crate::bank_account::BankAccount;
use crate::card::Card;
use crate::wallet::Wallet;
use crate::PaymentMethodId;

/// The rail and direction a payment method represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethodType {
    /// Spend from or pay into a wallet.
    Wallet,
    /// ACH debit that funds a transfer.
    AchDebitFund,
    /// ACH debit that collects into a wallet.
    AchDebitCollect,
    /// Next-day ACH credit.
    AchCreditStandard,
    /// Same-day ACH credit.
    AchCreditSameDay,
    /// Real-time payments credit.
    RtpCredit,
    /// Card charge.
    CardPayment,
    /// Push funds to a debit card.
    PushToCard,
    /// Pull funds from a debit card.
    PullFromCard,
    /// Apple Pay charge.
    ApplePay,
}

impl PaymentMethodType {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::AchDebitFund => "ach-debit-fund",
            Self::AchDebitCollect => "ach-debit-collect",
            Self::AchCreditStandard => "ach-credit-standard",
            Self::AchCreditSameDay => "ach-credit-same-day",
            Self::RtpCredit => "rtp-credit",
            Self::CardPayment => "card-payment",
            Self::PushToCard => "push-to-card",
            Self::PullFromCard => "pull-from-card",
            Self::ApplePay => "apple-pay",
        }
    }
}

/// A payment method with its backing source embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// The payment method ID.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    /// Rail and direction.
    pub payment_method_type: PaymentMethodType,
    /// Set for wallet methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
    /// Set for bank account methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    /// Set for card methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// Short payment method reference embedded in bank accounts and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRef {
    /// The payment method ID.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    /// Rail and direction.
    pub payment_method_type: PaymentMethodType,
}

/// Filters for listing payment methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethodListFilter {
    /// Wallet, bank account or card ID the methods derive from.
    pub source_id: Option<uuid::Uuid>,
    /// Only methods of this type.
    pub payment_method_type: Option<PaymentMethodType>,
}

impl PaymentMethodListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(source_id) = self.source_id {
            params.push(("sourceID", source_id.to_string()));
        }
        if let Some(kind) = self.payment_method_type {
            params.push(("paymentMethodType", kind.as_str().to_string()));
        }
        params
    }
}
