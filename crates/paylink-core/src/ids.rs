//! Identifier types for Paylink resources.
//!
//! Every resource the API hands back is keyed by a UUID. Wrapping each one in its
//! own type keeps a `CardId` from being passed where a `BankAccountId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(uuid::Uuid);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` from a UUID.")]
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            #[doc = concat!("Generate a new random `", stringify!($name), "`.")]
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Return the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = uuid::Uuid::parse_str(s).map_err(|_| IdError::InvalidUuid)?;
                Ok(Self(uuid))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0.to_string()
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id!(
    /// A Paylink account (individual or business).
    AccountId
);
uuid_id!(
    /// A bank account linked to an account.
    BankAccountId
);
uuid_id!(
    /// A payment card linked to an account.
    CardId
);
uuid_id!(
    /// A payment method derived from a wallet, bank account or card.
    PaymentMethodId
);
uuid_id!(
    /// A transfer between two payment methods.
    TransferId
);
uuid_id!(
    /// A refund issued against a card transfer.
    RefundId
);
uuid_id!(
    /// A cancellation request against a transfer.
    CancellationId
);
uuid_id!(
    /// A wallet holding an account's balance.
    WalletId
);
uuid_id!(
    /// A single wallet ledger entry.
    WalletTransactionId
);
uuid_id!(
    /// A card dispute (chargeback or inquiry).
    DisputeId
);
uuid_id!(
    /// A piece of evidence attached to a dispute.
    EvidenceId
);
uuid_id!(
    /// A wallet sweep configuration.
    SweepConfigId
);
uuid_id!(
    /// A single sweep run.
    SweepId
);
uuid_id!(
    /// A card issued against a funding wallet.
    IssuedCardId
);
uuid_id!(
    /// An authorization on an issued card.
    AuthorizationId
);
uuid_id!(
    /// Client-generated key sent as `X-Idempotency-Key`.
    ///
    /// The server uses it to recognise a retried create request; the client only
    /// generates and forwards it.
    IdempotencyKey
);

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid UUID.
    #[error("invalid UUID format")]
    InvalidUuid,
}
