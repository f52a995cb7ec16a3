//! Static type-mapping tables, one per output flavor.
//!
//! Each table maps an element type tag to the Rust type expression emitted
//! for it. The tables are pure functions over `&'static str`: no state, no
//! configuration beyond the structured-models feature flag, same answer on
//! every call.
//!
//! Guidelines elements are rejected with a distinct error so callers can
//! skip them silently; unknown tags are rejected with
//! [`GeneratorError::UnsupportedType`], which callers log as a warning.

use std::str::FromStr;

use stencil_schema::ElementType;

use crate::errors::GeneratorError;

/// The three supported output flavors.
///
/// Selected once per run from CLI flags; every class definition in a run
/// shares the same flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFlavor {
    /// Plain delivery-SDK models.
    Delivery,
    /// Delivery models implementing the shared `ContentItem` marker trait,
    /// with cross-type links.
    ExtendedDelivery,
    /// Management-SDK models carrying field-reference metadata.
    Management,
}

/// Maps an element type tag to the emitted Rust type expression.
///
/// ## Examples
///
/// ```
/// use stencil_gen::mappings::{map_type, ModelFlavor};
///
/// assert_eq!(map_type(ModelFlavor::Delivery, "text", false).unwrap(), "String");
/// assert_eq!(
///     map_type(ModelFlavor::Delivery, "rich_text", true).unwrap(),
///     "RichTextElement"
/// );
/// assert!(map_type(ModelFlavor::Delivery, "hologram", false).is_err());
/// ```
///
/// ## Errors
///
/// - [`GeneratorError::GuidelinesElement`] for the `guidelines` tag — a
///   non-data field; callers skip it without warning.
/// - [`GeneratorError::UnsupportedType`] for unknown tags and for tags the
///   active flavor has no mapping for (including `snippet`, which must be
///   flattened away before mapping).
pub fn map_type(
    flavor: ModelFlavor,
    tag: &str,
    structured_model: bool,
) -> Result<&'static str, GeneratorError> {
    let element_type = ElementType::from_str(tag).map_err(|_| GeneratorError::UnsupportedType {
        element_type: tag.to_string(),
    })?;

    if element_type == ElementType::Guidelines {
        return Err(GeneratorError::GuidelinesElement);
    }

    let expression = match flavor {
        ModelFlavor::Delivery | ModelFlavor::ExtendedDelivery => {
            delivery_expression(flavor, element_type, structured_model)
        }
        ModelFlavor::Management => management_expression(element_type),
    };

    expression.ok_or_else(|| GeneratorError::UnsupportedType {
        element_type: tag.to_string(),
    })
}

/// Returns `true` if the tag has a mapping in the given flavor.
///
/// Consistent with [`map_type`]: `is_supported` returns `true` exactly when
/// `map_type` succeeds. Guidelines count as unsupported here; the caller
/// distinguishes the two through the error variant when it matters.
pub fn is_supported(flavor: ModelFlavor, tag: &str, structured_model: bool) -> bool {
    map_type(flavor, tag, structured_model).is_ok()
}

fn delivery_expression(
    flavor: ModelFlavor,
    element_type: ElementType,
    structured_model: bool,
) -> Option<&'static str> {
    let expression = match element_type {
        ElementType::Text => "String",
        ElementType::RichText if structured_model => "RichTextElement",
        ElementType::RichText => "String",
        ElementType::Number => "f64",
        ElementType::MultipleChoice => "Vec<MultipleChoiceOption>",
        ElementType::DateTime if structured_model => "DateTimeElement",
        ElementType::DateTime => "DateTime<Utc>",
        ElementType::Asset => "Vec<Asset>",
        ElementType::ModularContent => match flavor {
            ModelFlavor::ExtendedDelivery => "Vec<Box<dyn ContentItem>>",
            _ => "Vec<serde_json::Value>",
        },
        ElementType::Taxonomy => "Vec<TaxonomyTerm>",
        ElementType::UrlSlug => "String",
        ElementType::Custom => "String",
        ElementType::Guidelines | ElementType::Snippet => return None,
    };
    Some(expression)
}

fn management_expression(element_type: ElementType) -> Option<&'static str> {
    let expression = match element_type {
        ElementType::Text => "String",
        ElementType::RichText => "String",
        ElementType::Number => "f64",
        ElementType::MultipleChoice => "Vec<ReferenceIdentifier>",
        ElementType::DateTime => "DateTime<Utc>",
        ElementType::Asset => "Vec<AssetReference>",
        ElementType::ModularContent => "Vec<ItemReference>",
        ElementType::Taxonomy => "Vec<TaxonomyTermReference>",
        ElementType::UrlSlug => "String",
        ElementType::Custom => "String",
        ElementType::Guidelines | ElementType::Snippet => return None,
    };
    Some(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn text_maps_to_string_in_delivery() {
        assert_eq!(map_type(ModelFlavor::Delivery, "text", false).unwrap(), "String");
    }

    #[test]
    fn structured_flag_swaps_rich_text_and_date_time() {
        assert_eq!(
            map_type(ModelFlavor::Delivery, "rich_text", false).unwrap(),
            "String"
        );
        assert_eq!(
            map_type(ModelFlavor::Delivery, "rich_text", true).unwrap(),
            "RichTextElement"
        );
        assert_eq!(
            map_type(ModelFlavor::Delivery, "date_time", true).unwrap(),
            "DateTimeElement"
        );
    }

    #[test]
    fn structured_flag_does_not_affect_management() {
        assert_eq!(
            map_type(ModelFlavor::Management, "rich_text", true).unwrap(),
            "String"
        );
    }

    #[test]
    fn modular_content_differs_per_flavor() {
        assert_eq!(
            map_type(ModelFlavor::Delivery, "modular_content", false).unwrap(),
            "Vec<serde_json::Value>"
        );
        assert_eq!(
            map_type(ModelFlavor::ExtendedDelivery, "modular_content", false).unwrap(),
            "Vec<Box<dyn ContentItem>>"
        );
        assert_eq!(
            map_type(ModelFlavor::Management, "modular_content", false).unwrap(),
            "Vec<ItemReference>"
        );
    }

    #[test]
    fn guidelines_rejected_with_distinct_error() {
        for flavor in [
            ModelFlavor::Delivery,
            ModelFlavor::ExtendedDelivery,
            ModelFlavor::Management,
        ] {
            assert!(matches!(
                map_type(flavor, "guidelines", false),
                Err(GeneratorError::GuidelinesElement)
            ));
        }
    }

    #[test]
    fn unknown_tag_rejected_as_unsupported() {
        let err = map_type(ModelFlavor::Delivery, "hologram", false).unwrap_err();
        assert!(
            matches!(err, GeneratorError::UnsupportedType { element_type } if element_type == "hologram")
        );
    }

    #[test]
    fn snippet_rejected_as_unsupported() {
        // Snippets must be flattened before mapping; one surviving to this
        // point is a caller bug surfaced as an unsupported type.
        assert!(matches!(
            map_type(ModelFlavor::Delivery, "snippet", false),
            Err(GeneratorError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn map_type_is_pure() {
        for _ in 0..3 {
            assert_eq!(
                map_type(ModelFlavor::Management, "asset", false).unwrap(),
                "Vec<AssetReference>"
            );
        }
    }

    #[test]
    fn is_supported_consistent_with_map_type() {
        for flavor in [
            ModelFlavor::Delivery,
            ModelFlavor::ExtendedDelivery,
            ModelFlavor::Management,
        ] {
            for element_type in ElementType::iter() {
                let tag = element_type.to_string();
                for structured in [false, true] {
                    assert_eq!(
                        is_supported(flavor, &tag, structured),
                        map_type(flavor, &tag, structured).is_ok(),
                        "inconsistent for {flavor:?}/{tag}/{structured}"
                    );
                }
            }
            assert!(!is_supported(flavor, "hologram", false));
        }
    }
}
