//! HTTP implementation of [`CollectionClient`] over the admin REST
//! surface.
//!
//! Route shape, per entity resource:
//! - `GET    /{entity}?language=&page=&pageSize=` — list with pagination
//! - `POST   /{entity}?language=`                — create
//! - `PUT    /{entity}/{id}?language=`           — update
//! - `DELETE /{entity}/{id}?language=`           — delete
//! - `POST   /{entity}/{id}/{action}?language=`  — entity toggles
//!
//! A 404 on the list endpoint means an empty collection, not a failure.
//! Any other non-success status becomes a `FetchError::Http` /
//! `MutationError::Http` carrying the response body, so the view can
//! surface the backend's own message.

use crate::entity::{Language, ListItem, ToggleAction};
use crate::error::{FetchError, MutationError};
use crate::remote::{CollectionClient, Page, PageInfo, PageKey};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::marker::PhantomData;
use tracing::debug;

// One shared connection pool for every collection client in the process.
static HTTP: Lazy<Client> = Lazy::new(Client::new);

/// The list envelope returned by every collection endpoint.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
    pagination: PageInfo,
}

/// A reqwest-backed [`CollectionClient`] for one entity resource.
pub struct RestCollectionClient<T> {
    http: Client,
    base_url: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestCollectionClient<T> {
    /// Creates a client against a base URL (no trailing slash needed),
    /// sharing the process-wide connection pool.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HTTP.clone(), base_url)
    }

    /// Creates a client with a caller-provided `reqwest::Client`, for
    /// custom timeouts or middleware.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            _marker: PhantomData,
        }
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn item_url(&self, resource: &str, id: impl std::fmt::Display) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }
}

async fn write_error(response: Response) -> MutationError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    MutationError::Http { status, message }
}

#[async_trait]
impl<T> CollectionClient<T> for RestCollectionClient<T>
where
    T: ListItem + DeserializeOwned,
{
    async fn list(
        &self,
        language: Language,
        page: usize,
        per_page: usize,
    ) -> Result<Page<T>, FetchError> {
        let url = self.collection_url(T::RESOURCE);
        debug!(resource = T::RESOURCE, %language, page, per_page, "listing collection");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("language", language.as_str().to_string()),
                ("page", page.to_string()),
                ("pageSize", per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Empty collection; zero items is not an error.
            return Ok(Page::empty(&PageKey {
                language,
                page,
                per_page,
            }));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ListEnvelope<T> = response
            .json()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Page {
            items: envelope.data,
            pagination: envelope.pagination,
        })
    }

    async fn create(&self, language: Language, draft: T::Draft) -> Result<T, MutationError> {
        let url = self.collection_url(T::RESOURCE);
        debug!(resource = T::RESOURCE, %language, "creating item");
        let response = self
            .http
            .post(&url)
            .query(&[("language", language.as_str())])
            .json(&draft)
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(write_error(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))
    }

    async fn update(
        &self,
        language: Language,
        id: T::Id,
        draft: T::Draft,
    ) -> Result<T, MutationError> {
        let url = self.item_url(T::RESOURCE, &id);
        debug!(resource = T::RESOURCE, %language, %id, "updating item");
        let response = self
            .http
            .put(&url)
            .query(&[("language", language.as_str())])
            .json(&draft)
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(write_error(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))
    }

    async fn delete(&self, language: Language, id: T::Id) -> Result<(), MutationError> {
        let url = self.item_url(T::RESOURCE, &id);
        debug!(resource = T::RESOURCE, %language, %id, "deleting item");
        let response = self
            .http
            .delete(&url)
            .query(&[("language", language.as_str())])
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(write_error(response).await);
        }
        Ok(())
    }

    async fn toggle(
        &self,
        language: Language,
        id: T::Id,
        action: T::Toggle,
    ) -> Result<T, MutationError> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url,
            T::RESOURCE,
            id,
            action.action()
        );
        debug!(resource = T::RESOURCE, %language, %id, action = action.action(), "toggling item");
        let response = self
            .http
            .post(&url)
            .query(&[("language", language.as_str())])
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(write_error(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brands::Brand;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client: RestCollectionClient<Brand> =
            RestCollectionClient::new("https://api.example.com/admin///");
        assert_eq!(
            client.collection_url("brands"),
            "https://api.example.com/admin/brands"
        );
        assert_eq!(
            client.item_url("brands", "5"),
            "https://api.example.com/admin/brands/5"
        );
    }

    #[test]
    fn list_envelope_matches_the_wire_format() {
        let body = r#"{
            "data": [
                {"id":"1","arName":"أحمر","enName":"Red","visibilityOrder":1,"isVisible":true,"productsCount":3}
            ],
            "pagination": {"currentPage":1,"pageSize":20,"totalCount":25}
        }"#;
        let envelope: ListEnvelope<Brand> = serde_json::from_str(body).expect("envelope parses");
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].en_name, "Red");
        assert_eq!(envelope.pagination.total_count, 25);
        assert_eq!(envelope.pagination.page_size, 20);
    }
}
