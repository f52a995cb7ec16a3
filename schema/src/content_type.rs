//! Content-type descriptors.
//!
//! A [`ContentType`] is the schema of one kind of content item: a codename,
//! an optional display name, and the elements (fields) it defines.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A complete content-type descriptor as returned by the service.
///
/// ## Examples
///
/// ```
/// use stencil_schema::{ContentType, Element};
///
/// let article = ContentType::new("article")
///     .with_element(Element::new("title", "text"))
///     .with_element(Element::new("body", "rich_text"));
///
/// assert_eq!(article.codename, "article");
/// assert_eq!(article.elements.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Service-assigned id; present on management responses, may be absent
    /// on older delivery payloads.
    #[serde(default)]
    pub id: Option<String>,
    /// Raw machine name of the type; not guaranteed to be a valid Rust
    /// identifier.
    pub codename: String,
    /// Human-readable display name, if the service reports one.
    #[serde(default)]
    pub name: Option<String>,
    /// Elements (fields) of this type, in service order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl ContentType {
    /// Creates an empty content type with the given codename.
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            id: None,
            codename: codename.into(),
            name: None,
            elements: vec![],
        }
    }

    /// Sets the service-assigned id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends an element.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Returns the element list with snippet elements expanded in place.
    ///
    /// A `snippet` element is a reusable named group of fields defined once
    /// and included by reference; its nested elements replace it in the
    /// returned list, preserving order. Nested snippets (a snippet inside a
    /// snippet's element list) are expanded recursively.
    ///
    /// ## Examples
    ///
    /// ```
    /// use stencil_schema::{ContentType, Element};
    ///
    /// let mut metadata = Element::new("metadata", "snippet");
    /// metadata.snippet_elements = vec![
    ///     Element::new("meta_title", "text"),
    ///     Element::new("meta_description", "text"),
    /// ];
    ///
    /// let page = ContentType::new("page")
    ///     .with_element(Element::new("heading", "text"))
    ///     .with_element(metadata);
    ///
    /// let flat = page.flattened_elements();
    /// let codenames: Vec<_> = flat.iter().map(|e| e.codename.as_str()).collect();
    /// assert_eq!(codenames, vec!["heading", "meta_title", "meta_description"]);
    /// ```
    pub fn flattened_elements(&self) -> Vec<Element> {
        let mut flat = Vec::with_capacity(self.elements.len());
        flatten_into(&self.elements, &mut flat);
        flat
    }
}

fn flatten_into(elements: &[Element], out: &mut Vec<Element>) {
    for element in elements {
        if element.element_type == "snippet" {
            flatten_into(&element.snippet_elements, out);
        } else {
            out.push(element.clone());
        }
    }
}

/// Looks up a content type by its service-assigned id.
///
/// Linked-items elements constrain their targets by type id; the generator
/// resolves those references against the full fetched type list with this
/// helper.
///
/// ## Examples
///
/// ```
/// use stencil_schema::{find_type_by_id, ContentType};
///
/// let types = vec![
///     ContentType::new("article").with_id("t-1"),
///     ContentType::new("office").with_id("t-2"),
/// ];
///
/// assert_eq!(find_type_by_id(&types, "t-2").unwrap().codename, "office");
/// assert!(find_type_by_id(&types, "t-9").is_none());
/// ```
pub fn find_type_by_id<'a>(types: &'a [ContentType], id: &str) -> Option<&'a ContentType> {
    types
        .iter()
        .find(|t| t.id.as_deref() == Some(id))
}
