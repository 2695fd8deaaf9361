use paylink_core::{
    AccountId, Cancellation, CancellationId, CreateRefund, CreateTransfer, IdempotencyKey,
    Metadata, Refund, RefundId, Reversal, Transfer, TransferId, TransferListFilter,
    TransferOptions, TransferOptionsRequest, TransferStarted, UpdateTransferMetadata,
};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint, WaitFor};
use crate::client::PaylinkClient;
use crate::error::ClientError;
use crate::response::AsyncOutcome;

/// A transfer that either finished on the rail or was only accepted.
pub type TransferOutcome = AsyncOutcome<Transfer, TransferStarted>;

/// A refund that either finished or is still processing.
pub type RefundOutcome = AsyncOutcome<Refund, Refund>;

/// Options for calls that move money.
///
/// Every such call carries an idempotency key. When none is supplied a random
/// one is generated, so retrying the call by hand must pass the same key to
/// avoid a duplicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferCallOptions {
    /// Key identifying this logical operation.
    pub idempotency_key: Option<IdempotencyKey>,
    /// Hold the response until this event.
    pub wait_for: Option<WaitFor>,
}

impl TransferCallOptions {
    /// Wait for the rail's response before returning.
    #[must_use]
    pub fn wait_for_rail_response() -> Self {
        Self {
            wait_for: Some(WaitFor::RailResponse),
            ..Self::default()
        }
    }

    /// Use `key` instead of a generated idempotency key.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: IdempotencyKey) -> Self {
        self.idempotency_key = Some(key);
        self
    }

    fn into_args(self) -> Vec<CallArg> {
        let key = self.idempotency_key.unwrap_or_else(IdempotencyKey::generate);
        let mut args = vec![CallArg::AcceptJson, CallArg::IdempotencyKey(key)];
        if let Some(wait_for) = self.wait_for {
            args.push(CallArg::WaitFor(wait_for));
        }
        args
    }
}

impl PaylinkClient {
    /// Create a transfer.
    ///
    /// Without [`WaitFor::RailResponse`] the API usually answers `202 Accepted`
    /// with only the transfer ID, giving [`TransferOutcome::Started`]. When
    /// waiting, a full [`Transfer`] comes back as [`TransferOutcome::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the idempotency key was already used
    /// with a different body, or another error if the request fails.
    pub async fn create_transfer(
        &self,
        account_id: AccountId,
        transfer: &CreateTransfer,
        options: TransferCallOptions,
    ) -> Result<TransferOutcome, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/accounts/{}/transfers", &[&account_id])?;
        let mut args = options.into_args();
        args.push(CallArg::json_body(transfer)?);
        self.call_http(&endpoint, args)
            .await?
            .completed_or_started()
    }

    /// Fetch a transfer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the transfer does not exist.
    pub async fn get_transfer(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
    ) -> Result<Transfer, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/transfers/{}",
            &[&account_id, &transfer_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List transfers matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_transfers(
        &self,
        account_id: AccountId,
        filter: &TransferListFilter,
    ) -> Result<Vec<Transfer>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/transfers", &[&account_id])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Replace a transfer's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_transfer_metadata(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
        metadata: Metadata,
    ) -> Result<Transfer, ClientError> {
        let endpoint = Endpoint::new(
            Method::PATCH,
            "/accounts/{}/transfers/{}",
            &[&account_id, &transfer_id],
        )?;
        let body = UpdateTransferMetadata { metadata };
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(&body)?])
            .await?
            .completed_object()
    }

    /// Look up which payment methods can fund or receive a prospective transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn transfer_options(
        &self,
        account_id: AccountId,
        request: &TransferOptionsRequest,
    ) -> Result<TransferOptions, ClientError> {
        let endpoint =
            Endpoint::new(Method::POST, "/accounts/{}/transfer-options", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(request)?])
            .await?
            .completed_object()
    }

    /// Refund part or all of a card transfer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the transfer cannot be refunded in its
    /// current state, or another error if the request fails.
    pub async fn refund_transfer(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
        refund: CreateRefund,
        options: TransferCallOptions,
    ) -> Result<RefundOutcome, ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/transfers/{}/refunds",
            &[&account_id, &transfer_id],
        )?;
        let mut args = options.into_args();
        args.push(CallArg::json_body(&refund)?);
        self.call_http(&endpoint, args)
            .await?
            .completed_or_started()
    }

    /// List the refunds of a transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_refunds(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
    ) -> Result<Vec<Refund>, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/transfers/{}/refunds",
            &[&account_id, &transfer_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Fetch a refund.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the refund does not exist.
    pub async fn get_refund(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
        refund_id: RefundId,
    ) -> Result<Refund, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/transfers/{}/refunds/{}",
            &[&account_id, &transfer_id, &refund_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Reverse a transfer. The API cancels it if it has not settled and refunds
    /// it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the transfer can no longer be
    /// reversed, or another error if the request fails.
    pub async fn reverse_transfer(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
        reversal: CreateRefund,
        idempotency_key: Option<IdempotencyKey>,
    ) -> Result<Reversal, ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/transfers/{}/reversals",
            &[&account_id, &transfer_id],
        )?;
        let options = TransferCallOptions {
            idempotency_key,
            wait_for: None,
        };
        let mut args = options.into_args();
        args.push(CallArg::json_body(&reversal)?);
        self.call_http(&endpoint, args)
            .await?
            .completed_object()
    }

    /// Cancel a transfer that has not been submitted to the rail.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the transfer is past cancellation.
    pub async fn cancel_transfer(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
    ) -> Result<Cancellation, ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/transfers/{}/cancellations",
            &[&account_id, &transfer_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Fetch a cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the cancellation does not exist.
    pub async fn get_cancellation(
        &self,
        account_id: AccountId,
        transfer_id: TransferId,
        cancellation_id: CancellationId,
    ) -> Result<Cancellation, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/transfers/{}/cancellations/{}",
            &[&account_id, &transfer_id, &cancellation_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }
}
