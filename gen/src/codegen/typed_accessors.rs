//! Typed accessor methods for cross-reference fields.
//!
//! Extended delivery structs keep cross-reference fields typed against the
//! `ContentItem` marker trait. When the schema pins a reference to exactly
//! one content type, the generator can add an accessor that downcasts to
//! the concrete class, so callers get `&Article` back instead of a trait
//! object.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::identifier::{field_ident, to_snake_case};
use crate::property::Property;

/// Derives the accessor name for a reference field targeting `target_class`.
///
/// The class name is appended to the field identifier unless the identifier
/// already ends with it, which keeps names like `FeaturedArticle` from
/// doubling into `FeaturedArticleArticle`. An identifier equal to the class
/// name comes through unchanged for the same reason.
///
/// ## Examples
///
/// ```
/// use stencil_gen::codegen::typed_accessor_name;
///
/// assert_eq!(typed_accessor_name("Author", "Person"), "AuthorPerson");
/// assert_eq!(typed_accessor_name("FeaturedArticle", "Article"), "FeaturedArticle");
/// assert_eq!(typed_accessor_name("Article", "Article"), "Article");
/// ```
pub fn typed_accessor_name(identifier: &str, target_class: &str) -> String {
    if identifier.ends_with(target_class) {
        identifier.to_string()
    } else {
        format!("{identifier}{target_class}")
    }
}

/// Emits the accessor method for a cross-reference property, or `None`
/// when the property has no resolved single target class.
pub fn accessor_tokens(property: &Property) -> Option<TokenStream> {
    let marker = property.marker()?;
    let target_class = marker.target_class.as_deref()?;

    let field = field_ident(&to_snake_case(property.identifier()));
    let method = field_ident(&to_snake_case(&typed_accessor_name(
        property.identifier(),
        target_class,
    )));
    let class = format_ident!("{target_class}");

    let tokens = if marker.collection {
        quote! {
            pub fn #method(&self) -> impl Iterator<Item = &#class> {
                self.#field
                    .iter()
                    .filter_map(|item| item.as_any().downcast_ref::<#class>())
            }
        }
    } else {
        quote! {
            pub fn #method(&self) -> Option<&#class> {
                self.#field.as_any().downcast_ref::<#class>()
            }
        }
    };
    Some(tokens)
}
