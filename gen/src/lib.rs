//! Model generation for Stencil content types.
//!
//! This crate turns the content-type schema of a Stencil project into Rust
//! model source files. The pipeline is: fetch types with
//! [`stencil_client::TypesClient`], fold each type's elements into a
//! [`class_definition::ClassDefinition`], render one file per type through
//! the [`codegen`] family, and write the batch atomically through
//! [`output`].
//!
//! ## Examples
//!
//! ```
//! use stencil_gen::generator::{GeneratorOptions, ModelGenerator};
//! use stencil_schema::{ContentType, Element};
//!
//! let types = vec![ContentType::new("article")
//!     .with_element(Element::new("title", "text"))];
//! let files = ModelGenerator::new(GeneratorOptions::default())
//!     .generate(&types)
//!     .unwrap();
//! assert_eq!(files[0].filename, "article.rs");
//! ```

pub mod class_definition;
pub mod codegen;
pub mod errors;
pub mod generator;
pub mod identifier;
pub mod mappings;
pub mod output;
pub mod property;

pub use class_definition::ClassDefinition;
pub use errors::GeneratorError;
pub use generator::{GeneratorOptions, ModelGenerator};
pub use mappings::ModelFlavor;
pub use output::GeneratedFile;
