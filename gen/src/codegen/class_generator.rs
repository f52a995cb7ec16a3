//! The class code generator family.
//!
//! A [`ClassCodeGenerator`] turns one [`ClassDefinition`] into a formatted
//! Rust source file for a chosen [`ModelVariant`]. Output is deterministic
//! for a given input: fields sort by identifier, constants by codename, and
//! imports are emitted in a fixed group order, so re-runs and snapshot
//! tests see byte-identical files.
//!
//! ## Examples
//!
//! ```
//! use stencil_gen::class_definition::ClassDefinition;
//! use stencil_gen::codegen::{ClassCodeGenerator, ModelVariant};
//!
//! let definition = ClassDefinition::new("article").unwrap();
//! let generator = ClassCodeGenerator::new(
//!     definition,
//!     "article.rs",
//!     "",
//!     ModelVariant::Delivery { codename_constants: false },
//! )
//! .unwrap();
//! let code = generator.generate_code().unwrap();
//! assert!(code.contains("pub struct Article {}"));
//! ```

use std::collections::BTreeSet;

use proc_macro2::{TokenStream, TokenTree};
use quote::{format_ident, quote};

use crate::class_definition::ClassDefinition;
use crate::codegen::typed_accessors::accessor_tokens;
use crate::codegen::variant::ModelVariant;
use crate::errors::GeneratorError;
use crate::identifier::{field_ident, sanitize, to_screaming_snake_case, to_snake_case};
use crate::output::{render, GeneratedFile};
use crate::property::Decoration;

/// Module path models live under when no namespace is configured.
pub const DEFAULT_NAMESPACE: &str = "models";

/// SDK types re-exported by the delivery runtime crate.
const DELIVERY_SDK_TYPES: &[&str] = &[
    "Asset",
    "ContentItemSystemAttributes",
    "DateTimeElement",
    "MultipleChoiceOption",
    "RichTextElement",
    "TaxonomyTerm",
];

/// SDK types re-exported by the management runtime crate.
const MANAGEMENT_SDK_TYPES: &[&str] = &[
    "AssetReference",
    "ItemReference",
    "ReferenceIdentifier",
    "TaxonomyTermReference",
];

/// Path idents that never produce an import.
const BUILTIN_TYPES: &[&str] = &["Box", "Option", "String", "Value", "Vec"];

/// Renders one class definition as a Rust source file.
#[derive(Debug, Clone)]
pub struct ClassCodeGenerator {
    definition: ClassDefinition,
    filename: String,
    namespace: String,
    variant: ModelVariant,
}

impl ClassCodeGenerator {
    /// Creates a generator for one definition and variant.
    ///
    /// A blank namespace falls back to [`DEFAULT_NAMESPACE`].
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] when the filename is
    /// empty or whitespace.
    pub fn new(
        definition: ClassDefinition,
        filename: impl Into<String>,
        namespace: &str,
        variant: ModelVariant,
    ) -> Result<Self, GeneratorError> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "filename must not be empty".to_string(),
            ));
        }
        let namespace = if namespace.trim().is_empty() {
            DEFAULT_NAMESPACE.to_string()
        } else {
            namespace.trim().to_string()
        };
        Ok(Self {
            definition,
            filename,
            namespace,
            variant,
        })
    }

    /// The definition this generator renders.
    pub fn definition(&self) -> &ClassDefinition {
        &self.definition
    }

    /// Target filename relative to the output directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The active model variant.
    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    /// Renders the class as formatted source text with the variant header.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::CodeGen`] when a type expression or the
    /// assembled file fails to parse. Both indicate generator bugs rather
    /// than bad schema input.
    pub fn generate_code(&self) -> Result<String, GeneratorError> {
        let class = format_ident!("{}", self.definition.class_name());
        let extended = matches!(self.variant, ModelVariant::ExtendedDelivery { .. });

        let mut properties: Vec<_> = self.definition.properties().iter().collect();
        properties.sort_by(|a, b| a.identifier().cmp(b.identifier()));

        let mut fields = Vec::new();
        for property in &properties {
            let name = to_snake_case(property.identifier());
            let ident = field_ident(&name);
            let ty: syn::Type = syn::parse_str(property.type_expression()).map_err(|e| {
                GeneratorError::CodeGen(format!(
                    "bad type expression `{}`: {e}",
                    property.type_expression()
                ))
            })?;

            let mut attrs = Vec::new();
            for decoration in property.decorations() {
                attrs.push(decoration_tokens(decoration)?);
            }
            // Delivery fields deserialize by name; rename when the Rust
            // field no longer spells the codename. serde strips the `r#`
            // prefix itself, so only the visible spelling counts.
            let spelled = ident.to_string();
            let spelled = spelled.trim_start_matches("r#");
            let has_rename = property
                .decorations()
                .iter()
                .any(|d| d.name == "serde.rename");
            if !has_rename && spelled != property.codename() {
                let codename = property.codename();
                attrs.push(quote! { #[serde(rename = #codename)] });
            }
            if self.variant.element_ids() {
                if let Some(id) = property.element_id() {
                    attrs.push(quote! { #[element(id = #id)] });
                }
            }

            fields.push(quote! { #(#attrs)* pub #ident: #ty });
        }

        let mut impl_items = Vec::new();
        if self.variant.codename_constants() {
            let type_codename = self.definition.codename();
            impl_items.push(quote! {
                pub const CODENAME: &'static str = #type_codename;
            });
            let mut constants: Vec<_> = self.definition.codename_constants().iter().collect();
            constants.sort();
            for codename in constants {
                let name = format_ident!("{}_CODENAME", to_screaming_snake_case(&sanitize(codename)?));
                impl_items.push(quote! {
                    pub const #name: &'static str = #codename;
                });
            }
        }
        if self.variant.typed_accessors() {
            for property in &properties {
                if let Some(tokens) = accessor_tokens(property) {
                    impl_items.push(tokens);
                }
            }
        }
        let inherent_impl = if impl_items.is_empty() {
            quote! {}
        } else {
            quote! {
                impl #class {
                    #(#impl_items)*
                }
            }
        };

        let marker_impl = if extended {
            quote! {
                impl ContentItem for #class {
                    fn system(&self) -> &ContentItemSystemAttributes {
                        &self.system
                    }

                    fn as_any(&self) -> &dyn Any {
                        self
                    }
                }
            }
        } else {
            quote! {}
        };

        let derives = if matches!(self.variant, ModelVariant::Management { .. }) {
            quote! { #[derive(Debug, Clone, Serialize, Deserialize)] }
        } else {
            quote! { #[derive(Debug, Clone, Deserialize)] }
        };

        let uses = self.use_items(&properties, extended)?;

        let tokens = quote! {
            #(#uses)*

            #derives
            pub struct #class {
                #(#fields,)*
            }

            #inherent_impl
            #marker_impl
        };
        render(tokens, self.variant.header())
    }

    /// Renders and packages the file with the variant's overwrite policy.
    pub fn generate(&self) -> Result<GeneratedFile, GeneratorError> {
        Ok(GeneratedFile {
            filename: self.filename.clone(),
            content: self.generate_code()?,
            overwrite_existing: self.variant.overwrite_existing(),
        })
    }

    /// Computes the import block from the rendered type expressions.
    fn use_items(
        &self,
        properties: &[&crate::property::Property],
        extended: bool,
    ) -> Result<Vec<syn::ItemUse>, GeneratorError> {
        let mut delivery = BTreeSet::new();
        let mut management = BTreeSet::new();
        let mut classes = BTreeSet::new();
        let mut chrono = false;
        let mut content_item = extended;

        for property in properties {
            let tokens: TokenStream =
                syn::parse_str(property.type_expression()).map_err(|e| {
                    GeneratorError::CodeGen(format!(
                        "bad type expression `{}`: {e}",
                        property.type_expression()
                    ))
                })?;
            for ident in type_idents(tokens) {
                if DELIVERY_SDK_TYPES.contains(&ident.as_str()) {
                    delivery.insert(ident);
                } else if MANAGEMENT_SDK_TYPES.contains(&ident.as_str()) {
                    management.insert(ident);
                } else if ident == "DateTime" || ident == "Utc" {
                    chrono = true;
                } else if ident == "ContentItem" {
                    content_item = true;
                } else if !BUILTIN_TYPES.contains(&ident.as_str())
                    && ident.starts_with(|c: char| c.is_ascii_uppercase())
                {
                    classes.insert(ident);
                }
            }
        }
        if extended {
            // The marker impl names these even when no field does.
            delivery.insert("ContentItemSystemAttributes".to_string());
        }
        if self.variant.typed_accessors() {
            // Accessor bodies name the target class even though the field
            // itself is typed against the marker trait.
            for property in properties {
                if let Some(class) = property.marker().and_then(|m| m.target_class.as_deref()) {
                    classes.insert(class.to_string());
                }
            }
        }
        // A self-referencing type already defines its own class locally;
        // importing it would collide with the struct declaration.
        classes.remove(&self.definition.class_name());

        let mut statements = Vec::new();
        if extended {
            statements.push("use std::any::Any;".to_string());
        }
        if chrono {
            statements.push("use chrono::{DateTime, Utc};".to_string());
        }
        if matches!(self.variant, ModelVariant::Management { .. }) {
            statements.push("use serde::{Deserialize, Serialize};".to_string());
        } else {
            statements.push("use serde::Deserialize;".to_string());
        }
        if let Some(group) = grouped_use("stencil_delivery", &delivery) {
            statements.push(group);
        }
        if let Some(group) = grouped_use("stencil_management", &management) {
            statements.push(group);
        }
        if content_item {
            statements.push(format!(
                "use crate::{}::content_item::ContentItem;",
                self.namespace
            ));
        }
        for class in &classes {
            statements.push(format!(
                "use crate::{}::{}::{class};",
                self.namespace,
                to_snake_case(class)
            ));
        }

        statements
            .iter()
            .map(|statement| {
                syn::parse_str(statement).map_err(|e| {
                    GeneratorError::CodeGen(format!("bad import `{statement}`: {e}"))
                })
            })
            .collect()
    }
}

/// Formats one use statement for a set of SDK types, or `None` when the
/// set is empty.
fn grouped_use(krate: &str, types: &BTreeSet<String>) -> Option<String> {
    let names: Vec<&str> = types.iter().map(String::as_str).collect();
    match names.as_slice() {
        [] => None,
        [only] => Some(format!("use {krate}::{only};")),
        many => Some(format!("use {krate}::{{{}}};", many.join(", "))),
    }
}

/// Renders a decoration pair as a Rust attribute.
fn decoration_tokens(decoration: &Decoration) -> Result<TokenStream, GeneratorError> {
    let value = decoration.value.as_str();
    match decoration.name.as_str() {
        "serde.rename" => Ok(quote! { #[serde(rename = #value)] }),
        "element.id" => Ok(quote! { #[element(id = #value)] }),
        name => Err(GeneratorError::CodeGen(format!(
            "unknown decoration `{name}`"
        ))),
    }
}

/// All idents appearing in a type expression's token stream.
fn type_idents(tokens: TokenStream) -> Vec<String> {
    let mut idents = Vec::new();
    for tree in tokens {
        match tree {
            TokenTree::Ident(ident) => idents.push(ident.to_string()),
            TokenTree::Group(group) => idents.extend(type_idents(group.stream())),
            _ => {}
        }
    }
    idents
}
