//! Shared base trait and extender file generation.
//!
//! Output structs cannot share a common struct parent, so "all models
//! derive from a base" renders as a pair of files: a user-owned base trait
//! (seeded once, never overwritten) and a derived extender file with one
//! `impl {Base} for {Class} {}` per generated class, regenerated in full on
//! every run.

use quote::{format_ident, quote};

use crate::errors::GeneratorError;
use crate::identifier::{sanitize, to_snake_case};
use crate::output::{render, GeneratedFile};

/// Generates the base trait file and its extender.
#[derive(Debug, Clone)]
pub struct BaseClassGenerator {
    base_name: String,
    namespace: String,
    class_names: Vec<String>,
}

impl BaseClassGenerator {
    /// Creates a generator for the given base class name.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidIdentifier`] when the requested
    /// name does not sanitize to a usable trait name.
    pub fn new(base_name: &str, namespace: impl Into<String>) -> Result<Self, GeneratorError> {
        Ok(Self {
            base_name: sanitize(base_name)?,
            namespace: namespace.into(),
            class_names: vec![],
        })
    }

    /// Registers a generated class for the extender file.
    pub fn add_class(&mut self, class_name: impl Into<String>) {
        self.class_names.push(class_name.into());
    }

    /// Sanitized trait name of the base.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Renders the pair: the user-owned base file first, then the derived
    /// extender. Extender impls are sorted alphabetically by class name.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::CodeGen`] when assembled tokens fail
    /// validation.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let base = format_ident!("{}", self.base_name);
        let base_module = to_snake_case(&self.base_name);

        let base_tokens = quote! {
            /// Shared base of all generated content models.
            ///
            /// Add shared behavior here; this file is yours.
            pub trait #base {}
        };
        let base_file = GeneratedFile {
            filename: format!("{base_module}.rs"),
            content: render(
                base_tokens,
                "// This file is safe to edit. It will not be overwritten by stencil-gen.",
            )?,
            overwrite_existing: false,
        };

        let mut classes = self.class_names.clone();
        classes.sort();
        classes.dedup();

        let namespace = &self.namespace;
        let mut statements = vec![format!(
            "use crate::{namespace}::{base_module}::{};",
            self.base_name
        )];
        for class in &classes {
            statements.push(format!(
                "use crate::{namespace}::{}::{class};",
                to_snake_case(class)
            ));
        }
        let uses = statements
            .iter()
            .map(|statement| {
                syn::parse_str::<syn::ItemUse>(statement).map_err(|e| {
                    GeneratorError::CodeGen(format!("bad import `{statement}`: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let impls = classes.iter().map(|class| {
            let class = format_ident!("{class}");
            quote! { impl #base for #class {} }
        });
        let extender_tokens = quote! {
            #(#uses)*

            #(#impls)*
        };
        let extender_file = GeneratedFile {
            filename: format!("{base_module}_extender.rs"),
            content: render(
                extender_tokens,
                "// This code was automatically generated by stencil-gen.\n\
                 // Changes to this file will be lost if the code is regenerated.",
            )?,
            overwrite_existing: true,
        };

        Ok(vec![base_file, extender_file])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_is_sanitized() {
        let generator = BaseClassGenerator::new("content base", "models").unwrap();
        assert_eq!(generator.base_name(), "ContentBase");
        assert!(BaseClassGenerator::new("123", "models").is_err());
    }

    #[test]
    fn base_file_is_user_owned() {
        let files = BaseClassGenerator::new("ContentBase", "models")
            .unwrap()
            .generate()
            .unwrap();
        let base = &files[0];
        assert_eq!(base.filename, "content_base.rs");
        assert!(!base.overwrite_existing);
        assert!(base.content.starts_with("// This file is safe to edit."));
        assert!(base.content.contains("pub trait ContentBase {}"));
    }

    #[test]
    fn extender_lists_impls_alphabetically() {
        let mut generator = BaseClassGenerator::new("ContentBase", "models").unwrap();
        generator.add_class("Office");
        generator.add_class("Article");
        let files = generator.generate().unwrap();

        let extender = &files[1];
        assert_eq!(extender.filename, "content_base_extender.rs");
        assert!(extender.overwrite_existing);
        assert!(extender.content.contains("use crate::models::article::Article;"));
        let article = extender.content.find("impl ContentBase for Article {}").unwrap();
        let office = extender.content.find("impl ContentBase for Office {}").unwrap();
        assert!(article < office);
    }

    #[test]
    fn extender_regenerates_even_when_empty() {
        let files = BaseClassGenerator::new("ContentBase", "models")
            .unwrap()
            .generate()
            .unwrap();
        let extender = &files[1];
        assert!(extender.overwrite_existing);
        assert!(!extender.content.contains("impl ContentBase for"));
    }
}
