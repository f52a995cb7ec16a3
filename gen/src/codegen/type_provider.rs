//! Codename-to-class lookup table generation.
//!
//! The type provider lets runtime code translate between raw content-type
//! codenames and generated class names without reflection. It renders as a
//! unit struct with two static match tables. A run that registered no
//! mappings produces no file at all.

use std::collections::BTreeMap;

use quote::{format_ident, quote};

use crate::errors::GeneratorError;
use crate::output::{render, GeneratedFile};

/// Filename of the generated type provider module.
pub const TYPE_PROVIDER_FILENAME: &str = "type_provider.rs";

/// Generates the codename/class lookup tables.
///
/// ## Examples
///
/// ```
/// use stencil_gen::codegen::TypeProviderGenerator;
///
/// let mut generator = TypeProviderGenerator::new();
/// generator.add_mapping("article", "Article");
/// let code = generator.generate_code().unwrap().unwrap();
/// assert!(code.contains("\"article\" => Some(\"Article\")"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeProviderGenerator {
    // codename -> class name; repeated registration keeps the last value.
    mappings: BTreeMap<String, String>,
}

impl TypeProviderGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one codename/class pair. Re-registering a codename
    /// replaces the earlier class name.
    pub fn add_mapping(&mut self, codename: impl Into<String>, class_name: impl Into<String>) {
        self.mappings.insert(codename.into(), class_name.into());
    }

    /// Whether any mappings were registered.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Renders the provider, or `None` when no mappings exist.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::CodeGen`] when assembled tokens fail
    /// validation.
    pub fn generate_code(&self) -> Result<Option<String>, GeneratorError> {
        if self.mappings.is_empty() {
            return Ok(None);
        }

        let forward = self.mappings.iter().map(|(codename, class)| {
            quote! { #codename => Some(#class), }
        });

        // Collapse duplicate class names so the reverse table has no
        // unreachable arms; the first codename in order wins.
        let mut reverse_table = BTreeMap::new();
        for (codename, class) in &self.mappings {
            reverse_table.entry(class.clone()).or_insert_with(|| codename.clone());
        }
        let reverse = reverse_table.iter().map(|(class, codename)| {
            quote! { #class => Some(#codename), }
        });

        let provider = format_ident!("TypeProvider");
        let tokens = quote! {
            /// Translates between content-type codenames and generated
            /// class names.
            #[derive(Debug, Clone, Copy, Default)]
            pub struct #provider;

            impl #provider {
                /// Class name generated for a content-type codename.
                pub fn type_name(codename: &str) -> Option<&'static str> {
                    match codename {
                        #(#forward)*
                        _ => None,
                    }
                }

                /// Content-type codename behind a generated class name.
                pub fn codename(type_name: &str) -> Option<&'static str> {
                    match type_name {
                        #(#reverse)*
                        _ => None,
                    }
                }
            }
        };
        render(
            tokens,
            "// This code was automatically generated by stencil-gen.\n\
             // Changes to this file will be lost if the code is regenerated.",
        )
        .map(Some)
    }

    /// Renders and packages the provider file, or `None` when empty.
    pub fn generate(&self) -> Result<Option<GeneratedFile>, GeneratorError> {
        Ok(self.generate_code()?.map(|content| GeneratedFile {
            filename: TYPE_PROVIDER_FILENAME.to_string(),
            content,
            overwrite_existing: true,
        }))
    }
}
