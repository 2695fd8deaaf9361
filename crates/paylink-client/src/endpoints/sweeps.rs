use paylink_core::{
    AccountId, CreateSweepConfig, Sweep, SweepConfig, SweepConfigId, SweepId, SweepListFilter,
    UpdateSweepConfig, WalletId,
};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Create a sweep config for one of the account's wallets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the wallet already has a sweep config.
    pub async fn create_sweep_config(
        &self,
        account_id: AccountId,
        config: &CreateSweepConfig,
    ) -> Result<SweepConfig, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/accounts/{}/sweep-configs", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(config)?])
            .await?
            .completed_object()
    }

    /// Fetch a sweep config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the config does not exist.
    pub async fn get_sweep_config(
        &self,
        account_id: AccountId,
        sweep_config_id: SweepConfigId,
    ) -> Result<SweepConfig, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/sweep-configs/{}",
            &[&account_id, &sweep_config_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List an account's sweep configs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_sweep_configs(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<SweepConfig>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/sweep-configs", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Patch a sweep config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if a locked field is changed.
    pub async fn update_sweep_config(
        &self,
        account_id: AccountId,
        sweep_config_id: SweepConfigId,
        update: &UpdateSweepConfig,
    ) -> Result<SweepConfig, ClientError> {
        let endpoint = Endpoint::new(
            Method::PATCH,
            "/accounts/{}/sweep-configs/{}",
            &[&account_id, &sweep_config_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(update)?])
            .await?
            .completed_object()
    }

    /// List the sweeps run for a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_sweeps(
        &self,
        account_id: AccountId,
        wallet_id: WalletId,
        filter: &SweepListFilter,
    ) -> Result<Vec<Sweep>, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/wallets/{}/sweeps",
            &[&account_id, &wallet_id],
        )?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Fetch one sweep.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the sweep does not exist.
    pub async fn get_sweep(
        &self,
        account_id: AccountId,
        wallet_id: WalletId,
        sweep_id: SweepId,
    ) -> Result<Sweep, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/wallets/{}/sweeps/{}",
            &[&account_id, &wallet_id, &sweep_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }
}
