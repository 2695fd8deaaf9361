//! API operations, one `impl PaylinkClient` block per resource.

mod accounts;
mod bank_accounts;
mod capabilities;
mod cards;
mod disputes;
mod issued_cards;
mod payment_methods;
mod sweeps;
mod transfers;
mod wallets;

pub use transfers::{RefundOutcome, TransferCallOptions, TransferOutcome};

use crate::call::CallArg;

/// `AcceptJson` followed by a list filter's query parameters.
fn list_args(query: Vec<(&'static str, String)>) -> impl Iterator<Item = CallArg> {
    std::iter::once(CallArg::AcceptJson).chain(CallArg::queries(query))
}
