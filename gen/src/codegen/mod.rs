//! Code generators for model files.
//!
//! One generator per output file kind: [`ClassCodeGenerator`] renders a
//! content-type struct for a chosen [`ModelVariant`];
//! [`ContentItemGenerator`], [`BaseClassGenerator`], and
//! [`TypeProviderGenerator`] render the auxiliary files the variants rely
//! on. Every generator validates its tokens with `syn` and formats with
//! `prettyplease` through [`crate::output::render`].

mod base_class;
mod class_generator;
mod content_item;
mod type_provider;
mod typed_accessors;
mod variant;

pub use base_class::BaseClassGenerator;
pub use class_generator::{ClassCodeGenerator, DEFAULT_NAMESPACE};
pub use content_item::{ContentItemGenerator, CONTENT_ITEM_FILENAME};
pub use type_provider::{TypeProviderGenerator, TYPE_PROVIDER_FILENAME};
pub use typed_accessors::{accessor_tokens, typed_accessor_name};
pub use variant::ModelVariant;
