use paylink_core::{
    AccountId, BankAccount, BankAccountId, ConfirmMicroDeposits, CreateBankAccount,
    MicroDepositConfirmation,
};
use reqwest::Method;

use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Link a bank account, either by account numbers or an aggregator token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the bank account is already linked.
    pub async fn create_bank_account(
        &self,
        account_id: AccountId,
        bank_account: &CreateBankAccount,
    ) -> Result<BankAccount, ClientError> {
        let endpoint =
            Endpoint::new(Method::POST, "/accounts/{}/bank-accounts", &[&account_id])?;
        self.call_http(
            &endpoint,
            [CallArg::AcceptJson, CallArg::json_body(bank_account)?],
        )
        .await?
        .completed_object()
    }

    /// Fetch a linked bank account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the bank account does not exist.
    pub async fn get_bank_account(
        &self,
        account_id: AccountId,
        bank_account_id: BankAccountId,
    ) -> Result<BankAccount, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/bank-accounts/{}",
            &[&account_id, &bank_account_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List the bank accounts linked to an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_bank_accounts(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<BankAccount>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/bank-accounts", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Unlink a bank account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_bank_account(
        &self,
        account_id: AccountId,
        bank_account_id: BankAccountId,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::DELETE,
            "/accounts/{}/bank-accounts/{}",
            &[&account_id, &bank_account_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }

    /// Send two micro-deposits to verify ownership of a bank account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn initiate_micro_deposits(
        &self,
        account_id: AccountId,
        bank_account_id: BankAccountId,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::POST,
            "/accounts/{}/bank-accounts/{}/micro-deposits",
            &[&account_id, &bank_account_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }

    /// Confirm the micro-deposit amounts, in cents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if the amounts do not match.
    pub async fn confirm_micro_deposits(
        &self,
        account_id: AccountId,
        bank_account_id: BankAccountId,
        amounts: [u32; 2],
    ) -> Result<MicroDepositConfirmation, ClientError> {
        let endpoint = Endpoint::new(
            Method::PUT,
            "/accounts/{}/bank-accounts/{}/micro-deposits",
            &[&account_id, &bank_account_id],
        )?;
        let body = ConfirmMicroDeposits { amounts };
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(&body)?])
            .await?
            .completed_object()
    }
}
