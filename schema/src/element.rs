//! Element descriptors and the element type tag enumeration.
//!
//! An [`Element`] is one named, typed field of a content type. The service
//! reports its type as a free-form string tag; [`ElementType`] enumerates
//! the tags Stencil defines so downstream mapping tables can match on them
//! while still tolerating unknown tags at deserialization time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The closed set of element type tags Stencil defines.
///
/// The wire tag is snake_case (e.g. `rich_text`). Elements keep the raw
/// string so an unknown tag coming from a newer service version does not
/// fail the whole schema deserialization; callers parse the tag with
/// [`std::str::FromStr`] when they need the enum.
///
/// ## Examples
///
/// Parse from the wire tag:
///
/// ```
/// use std::str::FromStr;
/// use stencil_schema::ElementType;
///
/// let tag = ElementType::from_str("rich_text").unwrap();
/// assert_eq!(tag, ElementType::RichText);
/// assert!(ElementType::from_str("hologram").is_err());
/// ```
///
/// Display as the wire tag:
///
/// ```
/// use stencil_schema::ElementType;
///
/// assert_eq!(ElementType::ModularContent.to_string(), "modular_content");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementType {
    /// Plain text element
    Text,
    /// Rich text element (HTML-structured content)
    RichText,
    /// Numeric element
    Number,
    /// Multiple choice element (checkboxes / radio buttons)
    MultipleChoice,
    /// Date and time element
    DateTime,
    /// Asset element (images, files)
    Asset,
    /// Linked items element (cross-references to other content items)
    ModularContent,
    /// Taxonomy element (term assignments from a taxonomy group)
    Taxonomy,
    /// URL slug element
    UrlSlug,
    /// Guidelines element (editor-facing documentation, carries no data)
    Guidelines,
    /// Custom element (third-party editor, serialized as a string)
    Custom,
    /// Content type snippet reference (flattened before generation)
    Snippet,
}

/// A by-id reference to another content type.
///
/// Linked-items elements carry these in `allowed_content_types` to constrain
/// which types their items may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    /// Id of the referenced content type.
    pub id: String,
}

/// Comparison operator of an [`ItemCountLimit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CountCondition {
    /// The element holds at most `value` items.
    AtMost,
    /// The element holds exactly `value` items.
    Exactly,
    /// The element holds at least `value` items.
    AtLeast,
}

/// Cardinality constraint on a linked-items element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCountLimit {
    /// Comparison operator.
    pub condition: CountCondition,
    /// Operand of the comparison.
    pub value: u32,
}

/// A single named, typed field of a content type.
///
/// ## Examples
///
/// ```
/// use stencil_schema::Element;
///
/// let json = r#"{ "codename": "title", "type": "text", "id": "e-1" }"#;
/// let element: Element = serde_json::from_str(json).unwrap();
/// assert_eq!(element.codename, "title");
/// assert_eq!(element.element_type, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Raw machine name assigned in the CMS; not guaranteed to be a valid
    /// Rust identifier.
    pub codename: String,
    /// Raw type tag as reported by the service (see [`ElementType`]).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Schema-level element id (used by management-flavor output).
    #[serde(default)]
    pub id: Option<String>,
    /// Optional external id assigned through the management API.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Content types a linked-items element may reference. Empty means
    /// unconstrained.
    #[serde(default)]
    pub allowed_content_types: Vec<TypeReference>,
    /// Cardinality constraint of a linked-items element, if any.
    #[serde(default)]
    pub item_count_limit: Option<ItemCountLimit>,
    /// Nested elements of a `snippet` element; flattened into the owning
    /// type before generation.
    #[serde(default)]
    pub snippet_elements: Vec<Element>,
}

impl Element {
    /// Creates a minimal element with just a codename and type tag.
    ///
    /// Handy for building descriptors in tests and fixtures; all optional
    /// descriptor data is left unset.
    pub fn new(codename: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            element_type: element_type.into(),
            id: None,
            external_id: None,
            allowed_content_types: vec![],
            item_count_limit: None,
            snippet_elements: vec![],
        }
    }

    /// Sets the schema-level element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns `true` if this element references exactly one allowed content
    /// type and is constrained to hold at most (or exactly) one item.
    ///
    /// Such elements qualify for type narrowing: the generated property can
    /// use the concrete target class instead of a collection of the marker
    /// type.
    pub fn is_single_reference(&self) -> bool {
        self.allowed_content_types.len() == 1
            && matches!(
                self.item_count_limit,
                Some(ItemCountLimit {
                    condition: CountCondition::AtMost | CountCondition::Exactly,
                    value: 1,
                })
            )
    }
}
