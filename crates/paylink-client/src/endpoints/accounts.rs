use paylink_core::{Account, AccountId, AccountListFilter, CreateAccount, UpdateAccount};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Create a connected account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_account(&self, account: &CreateAccount) -> Result<Account, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/accounts", &[])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(account)?])
            .await?
            .completed_object()
    }

    /// Fetch an account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the account does not exist.
    pub async fn get_account(&self, account_id: AccountId) -> Result<Account, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// Patch an account. Only the fields set in `update` change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_account(
        &self,
        account_id: AccountId,
        update: &UpdateAccount,
    ) -> Result<Account, ClientError> {
        let endpoint = Endpoint::new(Method::PATCH, "/accounts/{}", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(update)?])
            .await?
            .completed_object()
    }

    /// List connected accounts matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_accounts(
        &self,
        filter: &AccountListFilter,
    ) -> Result<Vec<Account>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts", &[])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Disconnect an account from the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn disconnect_account(&self, account_id: AccountId) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(Method::DELETE, "/accounts/{}", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }
}
