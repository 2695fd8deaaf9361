use paylink_core::{AccountId, AddCapabilities, Capability, CapabilityName};
use reqwest::Method;

use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Request capabilities for an account. Returns every capability the account
    /// now has, including ones still pending review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn request_capabilities(
        &self,
        account_id: AccountId,
        capabilities: Vec<CapabilityName>,
    ) -> Result<Vec<Capability>, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/accounts/{}/capabilities", &[&account_id])?;
        let body = AddCapabilities { capabilities };
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(&body)?])
            .await?
            .completed_list()
    }

    /// List an account's capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_capabilities(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Capability>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/capabilities", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Fetch one capability with its outstanding requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the capability was never requested.
    pub async fn get_capability(
        &self,
        account_id: AccountId,
        capability: CapabilityName,
    ) -> Result<Capability, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/capabilities/{}",
            &[&account_id, &capability.as_str()],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Disable a capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn disable_capability(
        &self,
        account_id: AccountId,
        capability: CapabilityName,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::DELETE,
            "/accounts/{}/capabilities/{}",
            &[&account_id, &capability.as_str()],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }
}
