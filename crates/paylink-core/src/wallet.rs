//! Wallet and wallet ledger types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Pagination;
use crate::{AccountId, WalletId, WalletTransactionId};

/// A wallet balance.
///
/// `value` is in cents; `value_decimal` carries the full-precision balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Balance in cents.
    pub value: i64,
    /// Balance as a decimal string.
    #[serde(default)]
    pub value_decimal: Option<String>,
}

/// A wallet holding an account's funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// The wallet ID.
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// Funds available to spend.
    pub available_balance: Balance,
    /// Partner account that manages the wallet.
    #[serde(default, rename = "partnerAccountID")]
    pub partner_account_id: Option<AccountId>,
    /// Whether the wallet is open.
    #[serde(default)]
    pub status: Option<WalletStatus>,
    /// Wallet name.
    #[serde(default)]
    pub name: Option<String>,
    /// Wallet description.
    #[serde(default)]
    pub description: Option<String>,
    /// When the wallet was created.
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

/// Whether a wallet can still move money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    /// Open.
    Active,
    /// Closed for good.
    Closed,
}

/// What produced a wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletTransactionType {
    /// ACH return reversing a credit.
    AchReversal,
    /// Card payment into the wallet.
    CardPayment,
    /// Withdrawal to a bank account.
    CashOut,
    /// Reversal of a dispute debit.
    DisputeReversal,
    /// Dispute debit.
    Dispute,
    /// Refund sent out.
    Refund,
    /// Refund that failed and came back.
    RefundFailure,
    /// RTP credit that failed.
    RtpFailure,
    /// Funding from a bank account.
    TopUp,
    /// Transfer between wallets.
    WalletTransfer,
    /// Fee adjustment.
    AdjustmentFee,
    /// Refund on an issued card.
    IssuingRefund,
    /// Purchase on an issued card.
    IssuingCardTransaction,
    /// Hold placed by an issued card authorization.
    IssuingAuthHold,
    /// Hold released.
    IssuingAuthRelease,
    /// Automatic sweep.
    Sweep,
    /// A type this client does not know. Not usable as a filter.
    #[serde(other)]
    Other,
}

/// Settlement state of a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletTransactionStatus {
    /// Not yet settled.
    Pending,
    /// Settled.
    Completed,
    /// Failed to settle.
    Failed,
    /// Canceled before settling.
    Canceled,
}

/// A single entry in a wallet's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    /// Wallet the entry belongs to.
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// The transaction ID.
    #[serde(rename = "transactionID")]
    pub transaction_id: WalletTransactionId,
    /// What produced the entry.
    pub transaction_type: WalletTransactionType,
    /// Kind of source object, such as `transfer`.
    #[serde(default)]
    pub source_type: Option<String>,
    /// ID of the source object.
    #[serde(default, rename = "sourceID")]
    pub source_id: Option<String>,
    /// Settlement state.
    pub status: WalletTransactionStatus,
    /// Free-text memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// When the entry was recorded.
    pub created_on: DateTime<Utc>,
    /// When the entry settled.
    #[serde(default)]
    pub completed_on: Option<DateTime<Utc>>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Gross amount in cents; negative for debits.
    pub gross_amount: i64,
    /// Gross amount as a decimal string.
    #[serde(default)]
    pub gross_amount_decimal: Option<String>,
    /// Fee in cents.
    #[serde(default)]
    pub fee: Option<i64>,
    /// Net amount in cents after fees.
    pub net_amount: i64,
    /// Wallet balance after the entry, in cents.
    #[serde(default)]
    pub available_balance: Option<i64>,
}

/// Filters for listing wallet transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletTransactionListFilter {
    /// Only entries of this type. [`WalletTransactionType::Other`] is ignored.
    pub transaction_type: Option<WalletTransactionType>,
    /// Only entries in this state.
    pub status: Option<WalletTransactionStatus>,
    /// Created at or after this time.
    pub created_start_date_time: Option<DateTime<Utc>>,
    /// Created before this time.
    pub created_end_date_time: Option<DateTime<Utc>>,
    /// Only entries from this source.
    pub source_id: Option<String>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl WalletTransactionListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(kind) = self
            .transaction_type
            .filter(|kind| *kind != WalletTransactionType::Other)
        {
            params.push(("transactionType", crate::wire_name(&kind)));
        }
        if let Some(status) = self.status {
            params.push(("status", crate::wire_name(&status)));
        }
        if let Some(start) = self.created_start_date_time {
            params.push(("createdStartDateTime", crate::rfc3339(start)));
        }
        if let Some(end) = self.created_end_date_time {
            params.push(("createdEndDateTime", crate::rfc3339(end)));
        }
        if let Some(source_id) = &self.source_id {
            params.push(("sourceID", source_id.clone()));
        }
        params.extend(self.pagination.to_query());
        params
    }
}
