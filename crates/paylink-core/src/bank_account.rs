//! Bank account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payment_method::PaymentMethodRef;
use crate::BankAccountId;

/// A bank account linked to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// The bank account ID.
    #[serde(rename = "bankAccountID")]
    pub bank_account_id: BankAccountId,
    /// Stable fingerprint; the same account number links to the same fingerprint.
    pub fingerprint: String,
    /// Verification status.
    pub status: BankAccountStatus,
    /// Name on the account.
    pub holder_name: String,
    /// Individual or business holder.
    pub holder_type: HolderType,
    /// Name of the bank.
    pub bank_name: String,
    /// Kind of account.
    pub bank_account_type: BankAccountType,
    /// ABA routing number.
    pub routing_number: String,
    /// Last four digits of the account number.
    pub last_four_account_number: String,
    /// Why the status last changed.
    #[serde(default)]
    pub status_reason: Option<String>,
    /// Set when an ACH return errored the account.
    #[serde(default)]
    pub exception_details: Option<ExceptionDetails>,
    /// Payment methods backed by this account.
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodRef>,
    /// When the account last changed.
    pub updated_on: DateTime<Utc>,
}

impl BankAccount {
    /// Whether the account can be used for ACH debits.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == BankAccountStatus::Verified
    }
}

/// Verification lifecycle of a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BankAccountStatus {
    /// Linked, not yet verified.
    New,
    /// Verified and usable for debits.
    Verified,
    /// Verification attempts failed.
    VerificationFailed,
    /// Verification in progress.
    Pending,
    /// Disabled after an ACH return.
    Errored,
}

/// Kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BankAccountType {
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
    /// General ledger account.
    GeneralLedger,
    /// Loan account.
    Loan,
}

/// Who holds a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderType {
    /// A person.
    Individual,
    /// A business.
    Business,
}

/// Details of an ACH return that moved the account into `errored`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDetails {
    /// Return code, e.g. `R02`.
    pub ach_return_code: String,
    /// Meaning of the return code.
    pub description: String,
}

/// Raw account and routing numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountNumbers {
    /// Name on the account.
    pub holder_name: String,
    /// Individual or business holder.
    pub holder_type: HolderType,
    /// Full account number.
    pub account_number: String,
    /// Kind of account.
    pub bank_account_type: BankAccountType,
    /// ABA routing number.
    pub routing_number: String,
}

/// Request body for linking a bank account.
///
/// Serializes as `{"account": {...}}` or `{"plaid": {"token": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CreateBankAccount {
    /// Link with raw account numbers.
    Account(BankAccountNumbers),
    /// Link with a processor token from an aggregator.
    Plaid {
        /// Processor token.
        token: String,
    },
}

/// Request body confirming the two micro-deposit amounts, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmMicroDeposits {
    /// The two deposit amounts, in any order.
    pub amounts: [u32; 2],
}

/// Result of a micro-deposit confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroDepositConfirmation {
    /// Account status after the check.
    pub bank_account_status: BankAccountStatus,
}
