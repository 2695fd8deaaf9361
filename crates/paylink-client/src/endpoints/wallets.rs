use paylink_core::{
    AccountId, Wallet, WalletId, WalletTransaction, WalletTransactionId,
    WalletTransactionListFilter,
};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// List an account's wallets.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_wallets(&self, account_id: AccountId) -> Result<Vec<Wallet>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/wallets", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Fetch a wallet with its available balance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the wallet does not exist.
    pub async fn get_wallet(
        &self,
        account_id: AccountId,
        wallet_id: WalletId,
    ) -> Result<Wallet, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/wallets/{}",
            &[&account_id, &wallet_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List the transactions recorded against a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_wallet_transactions(
        &self,
        account_id: AccountId,
        wallet_id: WalletId,
        filter: &WalletTransactionListFilter,
    ) -> Result<Vec<WalletTransaction>, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/wallets/{}/transactions",
            &[&account_id, &wallet_id],
        )?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Fetch one wallet transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the transaction does not exist.
    pub async fn get_wallet_transaction(
        &self,
        account_id: AccountId,
        wallet_id: WalletId,
        transaction_id: WalletTransactionId,
    ) -> Result<WalletTransaction, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/wallets/{}/transactions/{}",
            &[&account_id, &wallet_id, &transaction_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }
}
