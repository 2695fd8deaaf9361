use paylink_core::{
    AccountId, Dispute, DisputeEvidence, DisputeId, DisputeListFilter, EvidenceId, EvidenceText,
};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// List disputes raised against an account's transfers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_disputes(
        &self,
        account_id: AccountId,
        filter: &DisputeListFilter,
    ) -> Result<Vec<Dispute>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/disputes", &[&account_id])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Fetch a dispute.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the dispute does not exist.
    pub async fn get_dispute(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
    ) -> Result<Dispute, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/disputes/{}",
            &[&account_id, &dispute_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Accept liability for a dispute instead of contesting it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the dispute is no longer awaiting a
    /// response.
    pub async fn accept_dispute(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
    ) -> Result<Dispute, ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/disputes/{}/accept",
            &[&account_id, &dispute_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Attach text evidence to a dispute.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn upload_dispute_evidence_text(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
        evidence: &EvidenceText,
    ) -> Result<DisputeEvidence, ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/disputes/{}/evidence-text",
            &[&account_id, &dispute_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(evidence)?])
            .await?
            .completed_object()
    }

    /// List the evidence attached to a dispute.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_dispute_evidence(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
    ) -> Result<Vec<DisputeEvidence>, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/disputes/{}/evidence",
            &[&account_id, &dispute_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Remove evidence that has not been submitted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_dispute_evidence(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
        evidence_id: EvidenceId,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::DELETE,
            "/accounts/{}/disputes/{}/evidence/{}",
            &[&account_id, &dispute_id, &evidence_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }

    /// Submit all attached evidence to the card network. Evidence cannot be
    /// changed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if evidence was already submitted.
    pub async fn submit_dispute_evidence(
        &self,
        account_id: AccountId,
        dispute_id: DisputeId,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/disputes/{}/evidence/submit",
            &[&account_id, &dispute_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }
}
