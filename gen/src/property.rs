//! Field-to-property mapping.
//!
//! A [`Property`] is one element of a content type resolved into its
//! emitted form: the PascalCase identifier derived from the codename, the
//! Rust type expression for the active flavor, and (for management output)
//! the schema-level ids and serialization decorations.
//!
//! The identifier is always a function of the codename via
//! [`crate::identifier::sanitize`]; it is never set independently, so the
//! two can never diverge.

use stencil_schema::{find_type_by_id, ContentType, CountCondition, Element};

use crate::errors::GeneratorError;
use crate::identifier::sanitize;
use crate::mappings::{map_type, ModelFlavor};

/// Reserved identifier of the synthesized system property.
pub const SYSTEM_IDENTIFIER: &str = "System";

/// Type of the synthesized system property.
pub const SYSTEM_TYPE: &str = "ContentItemSystemAttributes";

/// A rendering-agnostic annotation attached to a property.
///
/// Decorations are (name, literal-value) pairs; the class generator decides
/// how each name renders as a Rust attribute (`serde.rename` becomes
/// `#[serde(rename = "…")]`, `element.id` becomes `#[element(id = "…")]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Annotation name, dotted for nested attribute paths.
    pub name: String,
    /// Literal string value of the annotation.
    pub value: String,
}

/// Marker-trait typing information of a cross-reference property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerReference {
    /// Concrete class the reference is known to target, when the element
    /// allows exactly one content type.
    pub target_class: Option<String>,
    /// Whether the property is a collection (`Vec<Box<dyn ContentItem>>`)
    /// or a single reference (`Box<dyn ContentItem>`).
    pub collection: bool,
}

/// How `from_element` resolves property types.
#[derive(Debug, Clone, Copy)]
pub struct PropertyOptions {
    /// Active output flavor.
    pub flavor: ModelFlavor,
    /// Swap plain string mappings for structured content types.
    pub structured_model: bool,
    /// Narrow single-target, at-most-one cross-references to the concrete
    /// class type. Disabled when typed accessors are generated instead.
    pub narrow_single_references: bool,
}

/// One field-to-property mapping, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    codename: String,
    identifier: String,
    type_expression: String,
    element_id: Option<String>,
    external_id: Option<String>,
    decorations: Vec<Decoration>,
    marker: Option<MarkerReference>,
}

impl Property {
    /// Resolves an element into a property for the active flavor.
    ///
    /// The identifier is derived from the codename through the sanitizer;
    /// the type expression comes from the flavor's mapping table. For the
    /// extended delivery flavor, cross-reference elements constrained to
    /// exactly one target type are resolved against `all_types` (the full
    /// fetched type list) so the emitted type can name the concrete class.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::InvalidIdentifier`] if the codename sanitizes to
    ///   nothing.
    /// - [`GeneratorError::GuidelinesElement`] for guidelines elements
    ///   (callers skip silently).
    /// - [`GeneratorError::UnsupportedType`] for unmapped type tags.
    /// - [`GeneratorError::TypeNotFound`] when a single-target reference
    ///   points at a type id that was not fetched.
    pub fn from_element(
        element: &Element,
        options: PropertyOptions,
        all_types: &[ContentType],
    ) -> Result<Self, GeneratorError> {
        let identifier = sanitize(&element.codename)?;
        let mapped = map_type(options.flavor, &element.element_type, options.structured_model)?;

        let mut marker = None;
        let mut type_expression = mapped.to_string();

        if options.flavor == ModelFlavor::ExtendedDelivery
            && element.element_type == "modular_content"
        {
            let target_class = resolve_single_target(element, all_types)?;
            let at_most_one = element.item_count_limit.as_ref().is_some_and(|limit| {
                matches!(
                    limit.condition,
                    CountCondition::AtMost | CountCondition::Exactly
                ) && limit.value <= 1
            });

            match (&target_class, at_most_one, options.narrow_single_references) {
                (Some(class), true, true) => {
                    // Narrowed: the concrete class replaces the marker
                    // collection entirely.
                    type_expression = format!("Option<{class}>");
                }
                (_, true, _) => {
                    type_expression = "Box<dyn ContentItem>".to_string();
                    marker = Some(MarkerReference {
                        target_class,
                        collection: false,
                    });
                }
                _ => {
                    marker = Some(MarkerReference {
                        target_class,
                        collection: true,
                    });
                }
            }
        }

        let mut decorations = Vec::new();
        if options.flavor == ModelFlavor::Management {
            decorations.push(Decoration {
                name: "serde.rename".to_string(),
                value: element.codename.clone(),
            });
        }

        Ok(Self {
            codename: element.codename.clone(),
            identifier,
            type_expression,
            element_id: element.id.clone(),
            external_id: element.external_id.clone(),
            decorations,
            marker,
        })
    }

    /// Builds the synthesized reserved `system` property.
    pub fn system() -> Self {
        Self {
            codename: "system".to_string(),
            identifier: SYSTEM_IDENTIFIER.to_string(),
            type_expression: SYSTEM_TYPE.to_string(),
            element_id: None,
            external_id: None,
            decorations: vec![],
            marker: None,
        }
    }

    /// Raw schema codename of the underlying field.
    pub fn codename(&self) -> &str {
        &self.codename
    }

    /// Sanitized PascalCase identifier; the collision and ordering key.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Emitted Rust type expression.
    pub fn type_expression(&self) -> &str {
        &self.type_expression
    }

    /// Schema-level element id (management flavor only).
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// External id assigned through the management API, if any.
    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// Decorations to render as attributes on the emitted field.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Marker-trait reference info, when this property is a cross-reference
    /// typed against the `ContentItem` marker.
    pub fn marker(&self) -> Option<&MarkerReference> {
        self.marker.as_ref()
    }
}

/// Resolves the concrete class name of an element allowing exactly one
/// content type, or `None` when the target set is not a single type.
fn resolve_single_target(
    element: &Element,
    all_types: &[ContentType],
) -> Result<Option<String>, GeneratorError> {
    let [reference] = element.allowed_content_types.as_slice() else {
        return Ok(None);
    };

    let target = find_type_by_id(all_types, &reference.id).ok_or_else(|| {
        GeneratorError::TypeNotFound {
            id: reference.id.clone(),
        }
    })?;

    sanitize(&target.codename).map(Some)
}
