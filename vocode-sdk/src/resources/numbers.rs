use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::BuyNumberParams;
use crate::types::PhoneNumber;
use crate::types::UpdateNumberParams;

/// Numbers resource for managing phone numbers.
///
/// Numbers are addressed by the number itself rather than by a resource
/// identifier.
pub struct Numbers<'a> {
    client: &'a Client,
}

impl<'a> Numbers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List numbers.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<PhoneNumber>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/numbers/list", &query).await
    }

    /// Get a number.
    pub async fn get(&self, number: &str) -> Result<PhoneNumber> {
        self.client
            .get("/numbers", &[("phone_number", number.to_string())])
            .await
    }

    /// Buy a number in the given area code.
    pub async fn buy(&self, params: BuyNumberParams) -> Result<PhoneNumber> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/numbers/buy", &[], Some(body)).await
    }

    /// Update a number.
    pub async fn update(&self, number: &str, params: UpdateNumberParams) -> Result<PhoneNumber> {
        let body = serde_json::to_value(&params)?;
        self.client
            .post(
                "/numbers/update",
                &[("phone_number", number.to_string())],
                Some(body),
            )
            .await
    }

    /// Cancel a number.
    pub async fn cancel(&self, number: &str) -> Result<PhoneNumber> {
        self.client
            .post(
                "/numbers/cancel",
                &[("phone_number", number.to_string())],
                None,
            )
            .await
    }
}
