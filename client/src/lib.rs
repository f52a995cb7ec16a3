//! HTTP client for fetching Stencil content-type schemas.
//!
//! This crate provides the async client the generator uses to pull
//! content-type descriptors from the Stencil API, one page at a time,
//! with a polite delay between pages to respect rate limits.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use stencil_client::TypesClient;
//!
//! let client = TypesClient::builder("my-environment-id")
//!     .api_key("sk-xxx")
//!     .build()?;
//!
//! let types = client.content_types().await?;
//! println!("fetched {} content types", types.len());
//! ```

mod error;
mod types_client;

pub use error::ClientError;
pub use types_client::{TypesClient, TypesClientBuilder, DELIVERY_BASE_URL, MANAGEMENT_BASE_URL};
