//! Paginated content-type schema fetching.
//!
//! [`TypesClient`] pulls content-type descriptors from the Stencil API.
//! Type listings are paginated; the client walks the pages sequentially,
//! sleeping briefly between requests so batch generation runs stay inside
//! the service's rate limits.

use std::time::Duration;

use serde::Deserialize;
use stencil_schema::ContentType;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

/// Default base URL of the delivery API.
pub const DELIVERY_BASE_URL: &str = "https://deliver.stencil.io";

/// Default base URL of the management API.
pub const MANAGEMENT_BASE_URL: &str = "https://manage.stencil.io/v2/projects";

/// Default number of content types requested per page.
const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default delay between page requests.
const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);

/// One page of the `/types` listing.
#[derive(Debug, Deserialize)]
struct TypesPage {
    #[serde(default)]
    types: Vec<ContentType>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    next_page: Option<String>,
}

/// Async client for fetching content-type schemas.
///
/// Construct through [`TypesClient::builder`].
///
/// ## Examples
///
/// ```rust,ignore
/// let client = TypesClient::builder("my-environment")
///     .base_url("https://deliver.stencil.io")
///     .page_size(50)
///     .build()?;
/// let types = client.content_types().await?;
/// ```
#[derive(Debug)]
pub struct TypesClient {
    client: reqwest::Client,
    types_url: Url,
    api_key: Option<String>,
    page_size: u32,
    page_delay: Duration,
}

/// Builder for configuring a [`TypesClient`].
#[derive(Debug)]
pub struct TypesClientBuilder {
    environment_id: String,
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
    page_delay: Duration,
}

impl TypesClient {
    /// Creates a builder for the given environment id, targeting the
    /// delivery API by default.
    pub fn builder(environment_id: impl Into<String>) -> TypesClientBuilder {
        TypesClientBuilder {
            environment_id: environment_id.into(),
            base_url: DELIVERY_BASE_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Fetches every content type, walking the paginated listing to the end.
    ///
    /// Pages are requested sequentially with [`page_delay`] between requests.
    /// A failed page fetch aborts the whole run; partial type lists are never
    /// returned.
    ///
    /// [`page_delay`]: TypesClientBuilder::page_delay
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for non-success responses (the
    /// response body is carried as the message) and
    /// [`ClientError::Request`] for transport failures.
    pub async fn content_types(&self) -> Result<Vec<ContentType>, ClientError> {
        let mut all_types = Vec::new();
        let mut skip: u32 = 0;

        loop {
            let page = self.fetch_page(skip).await?;
            debug!(
                skip,
                fetched = page.types.len(),
                "fetched content-type page"
            );
            all_types.extend(page.types);

            let has_next = page
                .pagination
                .as_ref()
                .and_then(|p| p.next_page.as_deref())
                .is_some_and(|next| !next.is_empty());
            if !has_next {
                break;
            }

            skip += self.page_size;
            tokio::time::sleep(self.page_delay).await;
        }

        Ok(all_types)
    }

    async fn fetch_page(&self, skip: u32) -> Result<TypesPage, ClientError> {
        let mut request = self
            .client
            .get(self.types_url.clone())
            .query(&[("skip", skip), ("limit", self.page_size)]);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedPage(e.to_string()))
    }
}

impl TypesClientBuilder {
    /// Overrides the base URL (e.g. [`MANAGEMENT_BASE_URL`], or a mock
    /// server in tests).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the bearer API key sent with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the number of content types requested per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the delay between consecutive page requests.
    pub fn page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Builds the client, validating the configured URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL and
    /// environment id do not form a valid URL.
    pub fn build(self) -> Result<TypesClient, ClientError> {
        let full = format!(
            "{}/{}/types",
            self.base_url.trim_end_matches('/'),
            self.environment_id
        );
        let types_url = Url::parse(&full).map_err(|source| ClientError::InvalidBaseUrl {
            url: full,
            source,
        })?;

        Ok(TypesClient {
            client: reqwest::Client::new(),
            types_url,
            api_key: self.api_key,
            page_size: self.page_size,
            page_delay: self.page_delay,
        })
    }
}
