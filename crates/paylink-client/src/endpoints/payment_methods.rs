use paylink_core::{AccountId, PaymentMethod, PaymentMethodId, PaymentMethodListFilter};
use reqwest::Method;

use super::list_args;
use crate::call::{CallArg, Endpoint};
use crate::client::PaylinkClient;
use crate::error::ClientError;

impl PaylinkClient {
    /// List the payment methods derived from an account's wallets, bank
    /// accounts and cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_payment_methods(
        &self,
        account_id: AccountId,
        filter: &PaymentMethodListFilter,
    ) -> Result<Vec<PaymentMethod>, ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/accounts/{}/payment-methods", &[&account_id])?;
        self.call_http(&endpoint, list_args(filter.to_query()))
            .await?
            .completed_list()
    }

    /// Fetch a payment method.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the payment method does not exist.
    pub async fn get_payment_method(
        &self,
        account_id: AccountId,
        payment_method_id: PaymentMethodId,
    ) -> Result<PaymentMethod, ClientError> {
        let endpoint = Endpoint::new(
            Method::GET,
            "/accounts/{}/payment-methods/{}",
            &[&account_id, &payment_method_id],
        )?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_object()
    }
}
