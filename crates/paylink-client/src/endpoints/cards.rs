use paylink_core::{AccountId, Card, CardId, CreateCard, UpdateCard};
use reqwest::Method;

use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// Link a card to an account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the card is already linked, or
    /// [`ClientError::Validation`] if the card details are rejected.
    pub async fn create_card(
        &self,
        account_id: AccountId,
        card: &CreateCard,
    ) -> Result<Card, ClientError> {
        let endpoint = Endpoint::new(Method::POST, "/accounts/{}/cards", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(card)?])
            .await?
            .completed_object()
    }

    /// Fetch a linked card.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the card does not exist.
    pub async fn get_card(
        &self,
        account_id: AccountId,
        card_id: CardId,
    ) -> Result<Card, ClientError> {
        let endpoint =
            Endpoint::new(Method::GET, "/accounts/{}/cards/{}", &[&account_id, &card_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }

    /// List the cards linked to an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_cards(&self, account_id: AccountId) -> Result<Vec<Card>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/cards", &[&account_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_list()
    }

    /// Update a card's expiration, CVV, billing address or card-on-file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_card(
        &self,
        account_id: AccountId,
        card_id: CardId,
        update: &UpdateCard,
    ) -> Result<Card, ClientError> {
        let endpoint =
            Endpoint::new(Method::PATCH, "/accounts/{}/cards/{}", &[&account_id, &card_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson, CallArg::json_body(update)?])
            .await?
            .completed_object()
    }

    /// Disable a card. It can no longer be used as a payment method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn disable_card(
        &self,
        account_id: AccountId,
        card_id: CardId,
    ) -> Result<(), ClientError> {
        let endpoint =
            Endpoint::new(Method::DELETE, "/accounts/{}/cards/{}", &[&account_id, &card_id])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }
}
