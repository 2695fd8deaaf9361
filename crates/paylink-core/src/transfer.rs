//! Transfer, refund and cancellation types.
//!
//! A transfer moves an [`Amount`] from a source payment method to a destination
//! payment method. Creation is either acknowledged asynchronously
//! ([`TransferStarted`]) or, when the caller waits for the rail response,
//! answered with the full [`Transfer`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bank_account::BankAccount;
use crate::card::Card;
use crate::common::{Amount, Metadata, Pagination};
use crate::payment_method::{PaymentMethod, PaymentMethodType};
use crate::wallet::Wallet;
use crate::{AccountId, CancellationId, PaymentMethodId, RefundId, TransferId};

/// Lifecycle of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Accepted, not yet submitted.
    Created,
    /// Submitted to the rail.
    Pending,
    /// Funds have settled.
    Completed,
    /// Rejected by the rail or a risk check.
    Failed,
    /// Returned after completing.
    Reversed,
    /// Waiting for the next rail window.
    Queued,
    /// Canceled before submission.
    Canceled,
}

impl TransferStatus {
    /// Whether the transfer can no longer change status.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Reversed | Self::Canceled
        )
    }
}

/// A transfer as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// The transfer ID.
    #[serde(rename = "transferID")]
    pub transfer_id: TransferId,
    /// When the transfer was created.
    pub created_on: DateTime<Utc>,
    /// When the transfer reached a final status.
    #[serde(default)]
    pub completed_on: Option<DateTime<Utc>>,
    /// Current status.
    pub status: TransferStatus,
    /// Why the transfer failed.
    #[serde(default)]
    pub failure_reason: Option<String>,
    /// Amount moved.
    pub amount: Amount,
    /// Description shown to both parties.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form key/value pairs.
    #[serde(default)]
    pub metadata: Metadata,
    /// Where the funds come from.
    pub source: TransferParty,
    /// Where the funds go.
    pub destination: TransferParty,
    /// Facilitator fee, if one was set.
    #[serde(default)]
    pub facilitator_fee: Option<FacilitatorFee>,
    /// Platform fee charged for this transfer, in cents.
    #[serde(default)]
    pub service_fee: Option<i64>,
    /// Total refunded so far.
    #[serde(default)]
    pub refunded_amount: Option<Amount>,
    /// Refunds issued against this transfer.
    #[serde(default)]
    pub refunds: Vec<Refund>,
    /// Amount under dispute.
    #[serde(default)]
    pub disputed_amount: Option<Amount>,
    /// Cancellations requested.
    #[serde(default)]
    pub cancellations: Vec<Cancellation>,
    /// Sales tax included in the amount.
    #[serde(default)]
    pub sales_tax_amount: Option<Amount>,
    /// Group this transfer belongs to.
    #[serde(default, rename = "groupID")]
    pub group_id: Option<String>,
    /// Caller's own identifier for the transfer.
    #[serde(default, rename = "foreignID")]
    pub foreign_id: Option<String>,
}

/// One side of a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParty {
    /// Payment method used.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    /// Rail of the payment method.
    pub payment_method_type: PaymentMethodType,
    /// Owning account.
    pub account: TransferAccount,
    /// Set for bank account methods.
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
    /// Set for wallet methods.
    #[serde(default)]
    pub wallet: Option<Wallet>,
    /// Set for card methods.
    #[serde(default)]
    pub card: Option<Card>,
    /// ACH rail progress.
    #[serde(default)]
    pub ach_details: Option<AchDetails>,
    /// Card rail progress.
    #[serde(default)]
    pub card_details: Option<CardDetails>,
}

/// The account that owns one side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAccount {
    /// Account ID.
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Account display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// ACH rail details for one side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchDetails {
    /// ACH status, such as `originated` or `completed`.
    pub status: String,
    /// NACHA trace number.
    #[serde(default)]
    pub trace_number: Option<String>,
    /// Entry description on the bank statement.
    #[serde(default)]
    pub company_entry_description: Option<String>,
    /// Originator name on the bank statement.
    #[serde(default)]
    pub originating_company_name: Option<String>,
    /// Set when the entry was returned.
    #[serde(default)]
    pub return_code: Option<AchReturnCode>,
}

/// ACH return code with its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchReturnCode {
    /// Code, e.g. `R01`.
    pub code: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Card rail details for one side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    /// Card processing status.
    pub status: String,
    /// Network failure code.
    #[serde(default)]
    pub failure_code: Option<String>,
    /// Statement descriptor used.
    #[serde(default)]
    pub dynamic_descriptor: Option<String>,
}

/// Fee the facilitator collects on top of a transfer, in cents.
///
/// Either a fixed `total`, or a `markup` added to the platform fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatorFee {
    /// Fixed fee in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Fee added to the platform fee, in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<i64>,
}

/// Source of a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferSource {
    /// Payment method to pull from.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    /// Card-specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CreateCardDetails>,
    /// ACH-specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach_details: Option<CreateAchDetails>,
}

/// Destination of a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferDestination {
    /// Payment method to push to.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    /// ACH-specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach_details: Option<CreateAchDetails>,
}

/// Card options for a transfer source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardDetails {
    /// Text on the cardholder's statement.
    pub dynamic_descriptor: String,
}

/// ACH options for either side of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchDetails {
    /// Entry description on the bank statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_entry_description: Option<String>,
    /// Originator name on the bank statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_company_name: Option<String>,
}

/// Request body for creating a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransfer {
    /// Funding side.
    pub source: CreateTransferSource,
    /// Receiving side.
    pub destination: CreateTransferDestination,
    /// Amount to move.
    pub amount: Amount,
    /// Facilitator fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilitator_fee: Option<FacilitatorFee>,
    /// Description shown to both parties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form key/value pairs.
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Sales tax included in the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_amount: Option<Amount>,
    /// Caller's own identifier for the transfer.
    #[serde(rename = "foreignID", skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
}

impl CreateTransfer {
    /// Move `amount` between two payment methods with no extra options.
    #[must_use]
    pub fn new(source: PaymentMethodId, destination: PaymentMethodId, amount: Amount) -> Self {
        Self {
            source: CreateTransferSource {
                payment_method_id: source,
                card_details: None,
                ach_details: None,
            },
            destination: CreateTransferDestination {
                payment_method_id: destination,
                ach_details: None,
            },
            amount,
            facilitator_fee: None,
            description: None,
            metadata: Metadata::new(),
            sales_tax_amount: None,
            foreign_id: None,
        }
    }
}

/// Acknowledgement that a transfer was accepted but has not reached the rail yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStarted {
    /// ID of the new transfer.
    #[serde(rename = "transferID")]
    pub transfer_id: TransferId,
    /// When it was created.
    pub created_on: DateTime<Utc>,
}

/// Request body for replacing a transfer's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTransferMetadata {
    /// New metadata, replacing the old map.
    pub metadata: Metadata,
}

/// Filters for listing transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferListFilter {
    /// Only transfers involving these accounts.
    pub account_ids: Vec<AccountId>,
    /// Only transfers in this status.
    pub status: Option<TransferStatus>,
    /// Created at or after this time.
    pub start_date_time: Option<DateTime<Utc>>,
    /// Created before this time.
    pub end_date_time: Option<DateTime<Utc>>,
    /// Only transfers in this group.
    pub group_id: Option<String>,
    /// Only transfers using this payment method.
    pub payment_method_id: Option<PaymentMethodId>,
    /// Only transfers with or without refunds.
    pub refunded: Option<bool>,
    /// Only transfers with or without disputes.
    pub disputed: Option<bool>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl TransferListFilter {
    /// Render as query parameters. Account IDs are repeated, one per parameter.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = self
            .account_ids
            .iter()
            .map(|id| ("accountIDs", id.to_string()))
            .collect();
        if let Some(status) = self.status {
            params.push(("status", crate::wire_name(&status)));
        }
        if let Some(start) = self.start_date_time {
            params.push(("startDateTime", crate::rfc3339(start)));
        }
        if let Some(end) = self.end_date_time {
            params.push(("endDateTime", crate::rfc3339(end)));
        }
        if let Some(group_id) = &self.group_id {
            params.push(("groupID", group_id.clone()));
        }
        if let Some(payment_method_id) = self.payment_method_id {
            params.push(("paymentMethodID", payment_method_id.to_string()));
        }
        if let Some(refunded) = self.refunded {
            params.push(("refunded", refunded.to_string()));
        }
        if let Some(disputed) = self.disputed {
            params.push(("disputed", disputed.to_string()));
        }
        params.extend(self.pagination.to_query());
        params
    }
}

/// Identifies a party when asking which payment methods can be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptionsTarget {
    /// Account to find methods for.
    #[serde(rename = "accountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// A specific payment method.
    #[serde(rename = "paymentMethodID", skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<PaymentMethodId>,
}

/// Request body for the transfer options lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOptionsRequest {
    /// Funding side.
    pub source: TransferOptionsTarget,
    /// Receiving side.
    pub destination: TransferOptionsTarget,
    /// Amount to move.
    pub amount: Amount,
}

/// Payment methods usable for a prospective transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptions {
    /// Methods that can fund the transfer.
    #[serde(default)]
    pub source_options: Vec<PaymentMethod>,
    /// Methods that can receive it.
    #[serde(default)]
    pub destination_options: Vec<PaymentMethod>,
}

/// Lifecycle of a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    /// Accepted, not yet submitted.
    Created,
    /// Submitted to the card network.
    Pending,
    /// Funds returned.
    Completed,
    /// Rejected.
    Failed,
}

/// A refund against a card transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// The refund ID.
    #[serde(rename = "refundID")]
    pub refund_id: RefundId,
    /// When the refund was created.
    pub created_on: DateTime<Utc>,
    /// When the refund last changed.
    pub updated_on: DateTime<Utc>,
    /// Current status.
    pub status: RefundStatus,
    /// Amount returned.
    pub amount: Amount,
    /// Network failure code.
    #[serde(default)]
    pub failure_code: Option<String>,
}

/// Request body for refunding or reversing part or all of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateRefund {
    /// Amount to return, in cents.
    pub amount: i64,
}

/// Lifecycle of a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationStatus {
    /// Requested.
    Pending,
    /// Transfer canceled.
    Completed,
    /// Transfer could not be canceled.
    Failed,
}

/// A request to cancel a transfer before it reaches the rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    /// The cancellation ID.
    #[serde(rename = "cancellationID")]
    pub cancellation_id: CancellationId,
    /// Current status.
    pub status: CancellationStatus,
    /// When the cancellation was requested.
    pub created_on: DateTime<Utc>,
}

/// Result of a reversal: the API cancels unsettled transfers and refunds settled ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reversal {
    /// Set when the transfer was canceled.
    #[serde(default)]
    pub cancellation: Option<Cancellation>,
    /// Set when the transfer was refunded.
    #[serde(default)]
    pub refund: Option<Refund>,
}
