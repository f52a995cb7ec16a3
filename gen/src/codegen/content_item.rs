//! Marker trait file for extended delivery models.
//!
//! Extended delivery structs all implement one shared `ContentItem` trait
//! so cross-reference fields can hold any generated model behind a trait
//! object. The trait file is generated once per run, before any class that
//! mentions it.

use quote::quote;

use crate::errors::GeneratorError;
use crate::output::{render, GeneratedFile};

/// Filename of the generated marker trait module.
pub const CONTENT_ITEM_FILENAME: &str = "content_item.rs";

/// Generates the shared `ContentItem` marker trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentItemGenerator;

impl ContentItemGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders the marker trait module.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::CodeGen`] when the assembled tokens fail
    /// validation.
    pub fn generate_code(&self) -> Result<String, GeneratorError> {
        let tokens = quote! {
            use std::any::Any;

            use stencil_delivery::ContentItemSystemAttributes;

            /// Any generated content model.
            ///
            /// The `Any` supertrait and `as_any` make runtime downcasting
            /// to concrete model structs possible, which typed accessors
            /// rely on.
            pub trait ContentItem: Any {
                /// System metadata common to every content item.
                fn system(&self) -> &ContentItemSystemAttributes;

                /// The item as a dynamic value for downcasting.
                fn as_any(&self) -> &dyn Any;
            }
        };
        render(
            tokens,
            "// This code was automatically generated by stencil-gen.\n\
             // Changes to this file will be lost if the code is regenerated.",
        )
    }

    /// Renders and packages the trait file; always overwritable.
    pub fn generate(&self) -> Result<GeneratedFile, GeneratorError> {
        Ok(GeneratedFile {
            filename: CONTENT_ITEM_FILENAME.to_string(),
            content: self.generate_code()?,
            overwrite_existing: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_declares_system_and_downcast_hooks() {
        let code = ContentItemGenerator::new().generate_code().unwrap();
        assert!(code.contains("pub trait ContentItem: Any {"));
        assert!(code.contains("fn system(&self) -> &ContentItemSystemAttributes;"));
        assert!(code.contains("fn as_any(&self) -> &dyn Any;"));
    }

    #[test]
    fn file_is_overwritable() {
        let file = ContentItemGenerator::new().generate().unwrap();
        assert_eq!(file.filename, CONTENT_ITEM_FILENAME);
        assert!(file.overwrite_existing);
    }
}
