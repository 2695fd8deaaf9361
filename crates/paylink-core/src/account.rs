//! Account types.
//!
//! An account is either an individual or a business. Its profile carries the KYC/KYB
//! data; sensitive inputs (birth date, SSN, EIN) are write-only and come back only as
//! `*_provided` flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Address, Metadata, Pagination, Phone};
use crate::AccountId;

/// A Paylink account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The account ID.
    #[serde(rename = "accountID")]
    pub account_id: AccountId,

    /// `production` or `sandbox`.
    #[serde(default)]
    pub mode: Option<String>,

    /// Individual or business.
    pub account_type: AccountType,

    /// Name shown in dashboards and statements.
    pub display_name: String,

    /// KYC/KYB profile.
    pub profile: Profile,

    /// Free-form key/value pairs.
    #[serde(default)]
    pub metadata: Metadata,

    /// Terms of service acceptance, if recorded.
    #[serde(default)]
    pub terms_of_service: Option<TermsOfServiceAcceptance>,

    /// Identity verification state.
    #[serde(default)]
    pub verification: Option<Verification>,

    /// Caller's own identifier for this account.
    #[serde(default, rename = "foreignID")]
    pub foreign_id: Option<String>,

    /// Support contact shown to the account's customers.
    #[serde(default)]
    pub customer_support: Option<CustomerSupport>,

    /// Statement descriptors.
    #[serde(default)]
    pub settings: Option<AccountSettings>,

    /// Capabilities currently attached to the account.
    #[serde(default)]
    pub capabilities: Vec<CapabilityRef>,

    /// When the account was created.
    pub created_on: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_on: DateTime<Utc>,

    /// Set once the account has been disconnected.
    #[serde(default)]
    pub disconnected_on: Option<DateTime<Utc>>,
}

impl Account {
    /// Whether this account has been disconnected.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        self.disconnected_on.is_some()
    }

    /// Whether a capability with the given name is attached and enabled.
    #[must_use]
    pub fn has_enabled_capability(&self, name: CapabilityName) -> bool {
        self.capabilities
            .iter()
            .any(|c| c.capability == name && c.status == CapabilityStatus::Enabled)
    }
}

/// The kind of legal entity behind an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// A natural person.
    Individual,
    /// A company or other organisation.
    Business,
}

impl AccountType {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }
}

/// Profile returned by the API. Exactly one side is set, matching `account_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Set for individual accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualProfile>,
    /// Set for business accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessProfile>,
}

/// A person's legal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// Given name.
    pub first_name: String,
    /// Middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Suffix, e.g. `Jr.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Individual profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProfile {
    /// Legal name.
    pub name: Name,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<Phone>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Home address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Whether a birth date is on file.
    #[serde(default)]
    pub birth_date_provided: bool,
    /// Whether an SSN or ITIN is on file.
    #[serde(default, rename = "governmentIDProvided")]
    pub government_id_provided: bool,
}

/// Legal structure of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessType {
    /// Sole proprietorship.
    SoleProprietorship,
    /// Unincorporated association.
    UnincorporatedAssociation,
    /// Trust.
    Trust,
    /// Publicly traded corporation.
    PublicCorporation,
    /// Privately held corporation.
    PrivateCorporation,
    /// Limited liability company.
    #[serde(rename = "llc")]
    Llc,
    /// Partnership.
    Partnership,
    /// Unincorporated non-profit.
    UnincorporatedNonProfit,
    /// Incorporated non-profit.
    IncorporatedNonProfit,
    /// Government entity.
    GovernmentEntity,
}

/// Industry classification codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryCodes {
    /// NAICS code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics: Option<String>,
    /// SIC code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sic: Option<String>,
    /// Merchant category code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

/// Business profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Registered legal name.
    pub legal_business_name: String,
    /// Trade name, if different.
    #[serde(default)]
    pub doing_business_as: Option<String>,
    /// Legal structure.
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    /// Registered address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Business phone.
    #[serde(default)]
    pub phone: Option<Phone>,
    /// Business email.
    #[serde(default)]
    pub email: Option<String>,
    /// Public website.
    #[serde(default)]
    pub website: Option<String>,
    /// What the business does.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether an EIN is on file.
    #[serde(default, rename = "taxIDProvided")]
    pub tax_id_provided: bool,
    /// Whether beneficial owners have been added.
    #[serde(default)]
    pub owners_provided: bool,
    /// Industry classification.
    #[serde(default)]
    pub industry_codes: Option<IndustryCodes>,
}

/// Date of birth, write-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

/// Government identifier, write-only. One of `ssn` or `itin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentId {
    /// Social security number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<IdNumber>,
    /// Individual taxpayer identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itin: Option<IdNumber>,
}

/// A full identifier or just its last four digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdNumber {
    /// The complete number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    /// Last four digits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
}

/// Business tax identifier, write-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    /// Employer identification number.
    pub ein: IdNumber,
}

/// Individual profile on create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndividualProfile {
    /// Legal name.
    pub name: Name,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Home address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<BirthDate>,
    /// SSN or ITIN.
    #[serde(
        default,
        rename = "governmentID",
        skip_serializing_if = "Option::is_none"
    )]
    pub government_id: Option<GovernmentId>,
}

/// Business profile on create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessProfile {
    /// Registered legal name.
    pub legal_business_name: String,
    /// Trade name, if different.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doing_business_as: Option<String>,
    /// Legal structure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    /// Registered address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Business phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Business email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Public website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// What the business does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// EIN.
    #[serde(default, rename = "taxID", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<TaxId>,
    /// Industry classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_codes: Option<IndustryCodes>,
}

/// Profile on create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProfile {
    /// Set when creating an individual account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<CreateIndividualProfile>,
    /// Set when creating a business account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<CreateBusinessProfile>,
}

/// Terms of service acceptance supplied on create.
///
/// Either a token obtained from the hosted terms page, or a manual record of
/// when, where and how the user accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermsOfService {
    /// Token from the terms-of-service endpoint.
    Token {
        /// Opaque acceptance token.
        token: String,
    },
    /// Acceptance recorded by the caller.
    Manual {
        /// Manual acceptance details.
        manual: ManualTermsOfService,
    },
}

/// Manual terms of service acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTermsOfService {
    /// When the user accepted.
    pub accepted_date: DateTime<Utc>,
    /// IP address the user accepted from.
    #[serde(rename = "acceptedIP")]
    pub accepted_ip: String,
    /// User agent of the accepting browser.
    pub accepted_user_agent: String,
    /// Domain the terms were presented on.
    pub accepted_domain: String,
}

/// Terms of service acceptance as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsOfServiceAcceptance {
    /// When the terms were accepted.
    pub accepted_date: DateTime<Utc>,
    /// IP address recorded with the acceptance.
    #[serde(default, rename = "acceptedIP")]
    pub accepted_ip: Option<String>,
}

/// Identity verification state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Verification status, such as `unverified` or `verified`.
    pub status: String,
    /// Extra detail on the status.
    #[serde(default)]
    pub details: Option<String>,
}

/// Customer-facing support contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSupport {
    /// Support phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Support email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Support mailing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Support website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Statement descriptors for card and ACH activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    /// Card statement settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_payment: Option<CardPaymentSettings>,
    /// ACH statement settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_payment: Option<AchPaymentSettings>,
}

/// Card statement settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentSettings {
    /// Text on the cardholder's statement.
    pub statement_descriptor: String,
}

/// ACH statement settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchPaymentSettings {
    /// Company name shown on ACH entries.
    pub company_name: String,
}

/// Request body for creating an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    /// Individual or business.
    pub account_type: AccountType,
    /// KYC/KYB data; the side set must match `account_type`.
    pub profile: CreateProfile,
    /// Free-form key/value pairs.
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Terms of service acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<TermsOfService>,
    /// Caller's own identifier for the account.
    #[serde(rename = "foreignID", skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
    /// Support contact shown to customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_support: Option<CustomerSupport>,
    /// Statement descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccountSettings>,
    /// Capabilities to request at creation time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<CapabilityName>,
}

impl CreateAccount {
    /// Start an individual account request.
    #[must_use]
    pub fn individual(profile: CreateIndividualProfile) -> Self {
        Self::with_profile(
            AccountType::Individual,
            CreateProfile {
                individual: Some(profile),
                business: None,
            },
        )
    }

    /// Start a business account request.
    #[must_use]
    pub fn business(profile: CreateBusinessProfile) -> Self {
        Self::with_profile(
            AccountType::Business,
            CreateProfile {
                individual: None,
                business: Some(profile),
            },
        )
    }

    fn with_profile(account_type: AccountType, profile: CreateProfile) -> Self {
        Self {
            account_type,
            profile,
            metadata: Metadata::new(),
            terms_of_service: None,
            foreign_id: None,
            customer_support: None,
            settings: None,
            capabilities: Vec::new(),
        }
    }
}

/// Patch body for updating an account. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    /// Replacement profile fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<CreateProfile>,
    /// Replacement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Terms of service acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<TermsOfService>,
    /// Caller's own identifier for the account.
    #[serde(rename = "foreignID", skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
    /// Support contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_support: Option<CustomerSupport>,
    /// Statement descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccountSettings>,
}

/// Filters for listing accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListFilter {
    /// Match on display name.
    pub name: Option<String>,
    /// Match on email.
    pub email: Option<String>,
    /// Only accounts of this type.
    pub account_type: Option<AccountType>,
    /// Match on the caller's own identifier.
    pub foreign_id: Option<String>,
    /// Skip and count.
    pub pagination: Pagination,
}

impl AccountListFilter {
    /// Render as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(account_type) = self.account_type {
            params.push(("type", account_type.as_str().to_string()));
        }
        if let Some(foreign_id) = &self.foreign_id {
            params.push(("foreignID", foreign_id.clone()));
        }
        params.extend(self.pagination.to_query());
        params
    }
}

/// Named capability that can be requested for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityName {
    /// Receive transfers.
    Transfers,
    /// Send funds out of the account.
    SendFunds,
    /// Pull funds into the account.
    CollectFunds,
    /// Hold a wallet balance.
    Wallet,
    /// Issue cards.
    CardIssuing,
}

impl CapabilityName {
    /// Wire value used in paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transfers => "transfers",
            Self::SendFunds => "send-funds",
            Self::CollectFunds => "collect-funds",
            Self::Wallet => "wallet",
            Self::CardIssuing => "card-issuing",
        }
    }
}

/// Status of a requested capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatus {
    /// Active.
    Enabled,
    /// Turned off.
    Disabled,
    /// Awaiting data or review.
    Pending,
    /// Under manual review.
    InReview,
}

/// Short capability reference embedded in an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRef {
    /// Capability name.
    pub capability: CapabilityName,
    /// Current status.
    pub status: CapabilityStatus,
}

/// A capability with its outstanding requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    /// Capability name.
    pub capability: CapabilityName,
    /// Owning account.
    #[serde(rename = "accountID")]
    pub account_id: AccountId,
    /// Current status.
    pub status: CapabilityStatus,
    /// Outstanding requirements.
    #[serde(default)]
    pub requirements: Option<CapabilityRequirements>,
    /// Why the capability was disabled.
    #[serde(default)]
    pub disabled_reason: Option<String>,
    /// When the capability was requested.
    pub created_on: DateTime<Utc>,
    /// When the capability last changed.
    pub updated_on: DateTime<Utc>,
    /// When the capability was disabled.
    #[serde(default)]
    pub disabled_on: Option<DateTime<Utc>>,
}

/// Data still needed before a capability can be enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequirements {
    /// Requirement names still due.
    #[serde(default)]
    pub currently_due: Vec<String>,
    /// Problems with submitted data.
    #[serde(default)]
    pub errors: Vec<RequirementError>,
}

/// A problem with data submitted for a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementError {
    /// Requirement name.
    pub requirement: String,
    /// Machine-readable error code.
    #[serde(default)]
    pub error_code: Option<String>,
}

/// Request body for adding capabilities to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCapabilities {
    /// Capabilities to add.
    pub capabilities: Vec<CapabilityName>,
}
