//! Wallet sweep types.
//!
//! A sweep config periodically moves a wallet's balance above `minimum_balance` out
//! through the push payment method, and tops it up through the pull payment method
//! when it goes negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Pagination;
use crate::{PaymentMethodId, SweepConfigId, SweepId, TransferId, WalletId};

/// Whether a sweep config is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepConfigStatus {
    /// Sweeps run.
    Enabled,
    /// Sweeps paused.
    Disabled,
}

/// Rules for sweeping one wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    /// The sweep config ID.
    #[serde(rename = "sweepConfigID")]
    pub sweep_config_id: SweepConfigId,
    /// Wallet being swept.
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// Whether sweeps run.
    pub status: SweepConfigStatus,
    /// Where excess balance is pushed.
    pub push_payment_method: SweepPaymentMethod,
    /// Where a negative balance is pulled from.
    pub pull_payment_method: SweepPaymentMethod,
    /// Text on the bank statement for sweep transfers.
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Balance to leave in the wallet, as a decimal string.
    #[serde(default)]
    pub minimum_balance: Option<String>,
    /// Fields the API will not let the caller change.
    #[serde(default)]
    pub locked_fields: Vec<String>,
    /// When the config was created.
    pub created_on: DateTime<Utc>,
    /// When the config last changed.
    pub updated_on: DateTime<Utc>,
}

/// Payment method reference inside a sweep config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPaymentMethod {
    /// Payment method ID.
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: PaymentMethodId,
}

/// Request body for creating a sweep config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSweepConfig {
    /// Wallet to sweep.
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// Initial status.
    pub status: SweepConfigStatus,
    /// Where excess balance is pushed.
    #[serde(rename = "pushPaymentMethodID")]
    pub push_payment_method_id: PaymentMethodId,
    /// Where a negative balance is pulled from.
    #[serde(rename = "pullPaymentMethodID")]
    pub pull_payment_method_id: PaymentMethodId,
    /// Text on the bank statement for sweep transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Balance to leave in the wallet, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_balance: Option<String>,
}

/// Patch body for a sweep config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSweepConfig {
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SweepConfigStatus>,
    /// New push payment method.
    #[serde(rename = "pushPaymentMethodID", skip_serializing_if = "Option::is_none")]
    pub push_payment_method_id: Option<PaymentMethodId>,
    /// New pull payment method.
    #[serde(rename = "pullPaymentMethodID", skip_serializing_if = "Option::is_none")]
    pub pull_payment_method_id: Option<PaymentMethodId>,
    /// New statement descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// New minimum balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_balance: Option<String>,
}

/// Where a sweep run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepStatus {
    /// Collecting wallet activity for the window.
    Accruing,
    /// Needs the caller to fix something before transferring.
    ActionRequired,
    /// Its transfer was canceled.
    CanceledTransfer,
    /// Its transfer failed.
    FailedTransfer,
    /// Nothing to move.
    NoTransfer,
    /// Its transfer is in flight.
    PendingTransfer,
    /// Its transfer was reversed.
    Reversed,
    /// Its transfer settled.
    SettledTransfer,
}

/// A single sweep run over an accrual window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweep {
    /// The sweep ID.
    #[serde(rename = "sweepID")]
    pub sweep_id: SweepId,
    /// Current status.
    pub status: SweepStatus,
    /// Start of the accrual window.
    pub accrual_start_date_time: DateTime<Utc>,
    /// End of the accrual window, once closed.
    #[serde(default)]
    pub accrual_end_date_time: Option<DateTime<Utc>>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Amount accrued during the window, as a decimal string.
    pub accrued_amount_decimal: String,
    /// Balance left in the wallet, as a decimal string.
    #[serde(default)]
    pub residual_balance_decimal: Option<String>,
    /// Transfer that moved the funds.
    #[serde(default, rename = "transferID")]
    pub transfer_id: Option<TransferId>,
    /// Amount transferred, as a decimal string.
    #[serde(default)]
    pub transfer_amount_decimal: Option<String>,
    /// Text on the bank statement.
    #[serde(default)]
    pub statement_descriptor: Option<String>,
}

/// Filters for listing sweeps of a wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepListFilter {
    /// Only sweeps in this status.
    pub status: Option<SweepStatus>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl SweepListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", crate::wire_name(&status)));
        }
        params.extend(self.pagination.to_query());
        params
    }
}
