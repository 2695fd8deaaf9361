//! Paylink Client SDK.
//!
//! An async client for the Paylink payments API: connected accounts, linked bank
//! accounts and cards, transfers, wallets, disputes, sweeps and issued cards.
//!
//! Every operation is a single round trip. Responses are classified into a
//! [`CallStatus`]; failures come back as a typed [`ClientError`], and calls that
//! may finish in the background return an [`AsyncOutcome`].
//!
//! # Example
//!
//! ```no_run
//! use paylink_client::{
//!     Amount, CreateTransfer, Credentials, PaylinkClient, TransferCallOptions, TransferOutcome,
//! };
//!
//! # async fn example(
//! #     account_id: paylink_client::AccountId,
//! #     source: paylink_client::PaymentMethodId,
//! #     destination: paylink_client::PaymentMethodId,
//! # ) -> Result<(), paylink_client::ClientError> {
//! let client = PaylinkClient::new(Credentials::new("public-key", "secret-key"))?;
//!
//! let transfer = CreateTransfer::new(source, destination, Amount::usd(1_250));
//! match client
//!     .create_transfer(account_id, &transfer, TransferCallOptions::wait_for_rail_response())
//!     .await?
//! {
//!     TransferOutcome::Completed(transfer) => println!("status: {:?}", transfer.status),
//!     TransferOutcome::Started(started) => println!("queued: {}", started.transfer_id),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod call;
mod client;
mod config;
mod endpoints;
mod error;
mod response;

pub use call::{CallArg, Endpoint, WaitFor, X_IDEMPOTENCY_KEY, X_WAIT_FOR};
pub use client::PaylinkClient;
pub use config::{ClientOptions, Credentials, DEFAULT_HOST};
pub use endpoints::{RefundOutcome, TransferCallOptions, TransferOutcome};
pub use error::{ClientError, ErrorResponse};
pub use paylink_core::*;
pub use response::{AsyncOutcome, CallResponse, CallStatus, X_REQUEST_ID};
