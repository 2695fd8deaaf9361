use paylink_core::{
    AccountId, AuthorizationId, AuthorizationListFilter, CreateIssuedCard, IssuedCard,
    IssuedCardAuthorization, IssuedCardId, IssuedCardListFilter, UpdateIssuedCard,
};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Issue a virtual card funded by one of the account's wallets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Forbidden`] if the account lacks the card-issuing
    /// capability, or another error if the request fails.
    pub async fn create_issued_card(
        &self,
        account_id: AccountId,
        card: &CreateIssuedCard,
    ) -> Result<IssuedCard, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/issuing/{}/issued-cards", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(card)?])
            .await?
            .completed_object()
    }

    /// Fetch an issued card.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the card does not exist.
    pub async fn get_issued_card(
        &self,
        account_id: AccountId,
        issued_card_id: IssuedCardId,
    ) -> Result<IssuedCard, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/issuing/{}/issued-cards/{}",
            &[&account_id, &issued_card_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List cards issued for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_issued_cards(
        &self,
        account_id: AccountId,
        filter: &IssuedCardListFilter,
    ) -> Result<Vec<IssuedCard>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/issuing/{}/issued-cards", &[&account_id])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Change an issued card's state, memo or authorized user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_issued_card(
        &self,
        account_id: AccountId,
        issued_card_id: IssuedCardId,
        update: &UpdateIssuedCard,
    ) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(
            Method::PATCH,
            "/issuing/{}/issued-cards/{}",
            &[&account_id, &issued_card_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(update)?])
            .await?
            .completed_nil()
    }

    /// List authorizations made with the account's issued cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_issued_card_authorizations(
        &self,
        account_id: AccountId,
        filter: &AuthorizationListFilter,
    ) -> Result<Vec<IssuedCardAuthorization>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/issuing/{}/authorizations", &[&account_id])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Fetch one authorization.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the authorization does not exist.
    pub async fn get_issued_card_authorization(
        &self,
        account_id: AccountId,
        authorization_id: AuthorizationId,
    ) -> Result<IssuedCardAuthorization, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/issuing/{}/authorizations/{}",
            &[&account_id, &authorization_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }
}
