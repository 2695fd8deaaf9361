//! Request and response types for the Paylink payments API.
//!
//! This crate holds the data-transfer types shared by the client:
//!
//! - **Identifiers**: `AccountId`, `TransferId`, `WalletId`, ...
//! - **Accounts**: `Account`, `CreateAccount`, `Capability`
//! - **Funding sources**: `BankAccount`, `Card`, `PaymentMethod`
//! - **Money movement**: `Transfer`, `Refund`, `Cancellation`, `Sweep`
//! - **Balances**: `Wallet`, `WalletTransaction`
//! - **Risk**: `Dispute`, `DisputeEvidence`
//! - **Issuing**: `IssuedCard`, `IssuedCardAuthorization`
//!
//! # Amounts
//!
//! Amounts are integers in the currency's minor unit (cents for USD). Values that
//! need more precision than a cent are carried as decimal strings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod account;
pub mod bank_account;
pub mod card;
pub mod common;
pub mod dispute;
pub mod ids;
pub mod issued_card;
pub mod payment_method;
pub mod sweep;
pub mod transfer;
pub mod wallet;

pub(crate) use common::{rfc3339, wire_name};

pub use account::{
    Account, AccountListFilter, AccountSettings, AccountType, AddCapabilities, BusinessProfile,
    BusinessType, Capability, CapabilityName, CapabilityStatus, CreateAccount,
    CreateBusinessProfile, CreateIndividualProfile, CreateProfile, CustomerSupport,
    IndividualProfile, Name, Profile, TermsOfService, UpdateAccount,
};
pub use bank_account::{
    BankAccount, BankAccountNumbers, BankAccountStatus, BankAccountType, ConfirmMicroDeposits,
    CreateBankAccount, HolderType, MicroDepositConfirmation,
};
pub use card::{Card, CardBrand, CardExpiration, CardType, CreateCard, UpdateCard};
pub use common::{Address, Amount, AmountDecimal, Metadata, Pagination, Phone};
pub use dispute::{
    Dispute, DisputeEvidence, DisputeListFilter, DisputePhase, DisputeStatus, EvidenceText,
    EvidenceType,
};
pub use ids::{
    AccountId, AuthorizationId, BankAccountId, CancellationId, CardId, DisputeId, EvidenceId,
    IdError, IdempotencyKey, IssuedCardId, PaymentMethodId, RefundId, SweepConfigId, SweepId,
    TransferId, WalletId, WalletTransactionId,
};
pub use issued_card::{
    AuthorizationListFilter, AuthorizationStatus, CreateIssuedCard, IssuedCard,
    IssuedCardAuthorization, IssuedCardListFilter, IssuedCardState, UpdateIssuedCard,
};
pub use payment_method::{PaymentMethod, PaymentMethodListFilter, PaymentMethodType};
pub use sweep::{
    CreateSweepConfig, Sweep, SweepConfig, SweepConfigStatus, SweepListFilter, SweepStatus,
    UpdateSweepConfig,
};
pub use transfer::{
    Cancellation, CancellationStatus, CreateRefund, CreateTransfer, Refund, RefundStatus,
    Reversal, Transfer, TransferListFilter, TransferOptions, TransferOptionsRequest,
    TransferStarted, TransferStatus, UpdateTransferMetadata,
};
pub use wallet::{
    Balance, Wallet, WalletTransaction, WalletTransactionListFilter, WalletTransactionStatus,
    WalletTransactionType,
};
