//! Card dispute types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Amount, Pagination};
use crate::{DisputeId, EvidenceId, TransferId};

/// Where a dispute currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeStatus {
    /// The merchant must accept or contest.
    ResponseNeeded,
    /// Settled outside the normal flow.
    Resolved,
    /// Evidence is with the network.
    UnderReview,
    /// Closed without a ruling.
    Closed,
    /// Accepted by the merchant.
    Accepted,
    /// Decided for the merchant.
    Won,
    /// Decided for the cardholder.
    Lost,
}

impl DisputeStatus {
    /// Whether the merchant can still accept or contest the dispute.
    #[must_use]
    pub const fn awaiting_response(self) -> bool {
        matches!(self, Self::ResponseNeeded)
    }
}

/// Network phase of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisputePhase {
    /// Early warning before a chargeback.
    PreDispute,
    /// Information request from the issuer.
    Inquiry,
    /// Formal chargeback.
    Chargeback,
    /// A phase this client does not know.
    #[serde(other)]
    Unknown,
}

/// Transfer a dispute was raised against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeTransfer {
    /// ID of the disputed transfer.
    #[serde(rename = "transferID")]
    pub transfer_id: TransferId,
}

/// A cardholder dispute against a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    /// The dispute ID.
    #[serde(rename = "disputeID")]
    pub dispute_id: DisputeId,
    /// When the dispute was opened.
    pub created_on: DateTime<Utc>,
    /// Disputed amount.
    pub amount: Amount,
    /// Network reason code.
    #[serde(default)]
    pub network_reason_code: Option<String>,
    /// Network reason text.
    #[serde(default)]
    pub network_reason_description: Option<String>,
    /// Disputed transfer.
    pub transfer: DisputeTransfer,
    /// Deadline for accepting or submitting evidence.
    pub respond_by: DateTime<Utc>,
    /// Current status.
    pub status: DisputeStatus,
    /// Network phase.
    #[serde(default)]
    pub phase: Option<DisputePhase>,
}

/// Filters for listing disputes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisputeListFilter {
    /// Only disputes in this status.
    pub status: Option<DisputeStatus>,
    /// Respond-by at or after this time.
    pub respond_start_date_time: Option<DateTime<Utc>>,
    /// Respond-by before this time.
    pub respond_end_date_time: Option<DateTime<Utc>>,
    /// Only disputes against this transfer.
    pub transfer_id: Option<TransferId>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl DisputeListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", crate::wire_name(&status)));
        }
        if let Some(start) = self.respond_start_date_time {
            params.push(("respondStartDateTime", crate::rfc3339(start)));
        }
        if let Some(end) = self.respond_end_date_time {
            params.push(("respondEndDateTime", crate::rfc3339(end)));
        }
        if let Some(transfer_id) = self.transfer_id {
            params.push(("transferID", transfer_id.to_string()));
        }
        params.extend(self.pagination.to_query());
        params
    }
}

/// Category of evidence supplied when contesting a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceType {
    /// Receipt.
    Receipt,
    /// Proof the goods were delivered.
    ProofOfDelivery,
    /// Cancellation policy.
    CancelationPolicy,
    /// Terms of service.
    TermsOfService,
    /// Messages with the customer.
    CustomerCommunication,
    /// Anything else with supporting value.
    GenericEvidence,
    /// Cover letter summarising the case.
    CoverLetter,
    /// Uncategorised.
    Other,
}

/// Request body for attaching text evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceText {
    /// Evidence text.
    pub text: String,
    /// Category of the evidence.
    pub evidence_type: EvidenceType,
}

/// Evidence attached to a dispute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeEvidence {
    /// The evidence ID.
    #[serde(rename = "evidenceID")]
    pub evidence_id: EvidenceId,
    /// Dispute the evidence belongs to.
    #[serde(rename = "disputeID")]
    pub dispute_id: DisputeId,
    /// Category of the evidence.
    pub evidence_type: EvidenceType,
    /// Text, for text evidence.
    #[serde(default)]
    pub text: Option<String>,
    /// MIME type, for file evidence.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Original file name.
    #[serde(default)]
    pub filename: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// When the evidence was added.
    pub created_on: DateTime<Utc>,
    /// When the evidence last changed.
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
}
