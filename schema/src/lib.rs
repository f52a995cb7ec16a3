//! Stencil Schema Primitives
//!
//! This crate provides the types describing content-type schemas as returned
//! by the Stencil headless CMS. These descriptors are consumed by the
//! `stencil-gen` binary to generate strongly-typed Rust content models.
//!
//! ## Core Types
//!
//! - [`ContentType`] - A complete content-type descriptor with codename and elements
//! - [`Element`] - A single named, typed field of a content type
//! - [`ElementType`] - The closed set of element type tags Stencil defines
//! - [`TypeReference`] - A by-id reference to another content type
//! - [`ItemCountLimit`] - Cardinality constraint on a linked-items element
//!
//! ## Examples
//!
//! Deserialize a content type from the service's JSON:
//!
//! ```
//! use stencil_schema::ContentType;
//!
//! let json = r#"{
//!     "id": "9f1e2b3c-0000-0000-0000-000000000001",
//!     "codename": "article",
//!     "name": "Article",
//!     "elements": [
//!         { "codename": "title", "type": "text", "id": "e-1" },
//!         { "codename": "published", "type": "date_time", "id": "e-2" }
//!     ]
//! }"#;
//!
//! let content_type: ContentType = serde_json::from_str(json).unwrap();
//! assert_eq!(content_type.codename, "article");
//! assert_eq!(content_type.elements.len(), 2);
//! ```
//!
//! ## Snippets
//!
//! Elements of type `snippet` carry a nested element list defined once and
//! included by reference. [`ContentType::flattened_elements`] expands those
//! in place so the generator sees one flat field list per type.

pub mod content_type;
pub mod element;

pub use content_type::{find_type_by_id, ContentType};
pub use element::{CountCondition, Element, ElementType, ItemCountLimit, TypeReference};
