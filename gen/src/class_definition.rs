//! The aggregate model of one emitted class.
//!
//! A [`ClassDefinition`] collects the properties and codename constants of
//! one content type and enforces the duplicate invariants: no two
//! properties share an identifier, no two constants share a codename. It is
//! built during the ingestion pass and read-only afterward; a class code
//! generator consumes it exactly once.

use crate::errors::GeneratorError;
use crate::identifier::sanitize;
use crate::property::{Property, SYSTEM_IDENTIFIER, SYSTEM_TYPE};

/// The aggregate model of one emitted class.
///
/// ## Examples
///
/// ```
/// use stencil_gen::class_definition::ClassDefinition;
///
/// let definition = ClassDefinition::new("Article type").unwrap();
/// assert_eq!(definition.codename(), "Article type");
/// assert_eq!(definition.class_name(), "ArticleType");
/// ```
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    codename: String,
    properties: Vec<Property>,
    codename_constants: Vec<String>,
}

impl ClassDefinition {
    /// Creates an empty definition for the given type codename.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidIdentifier`] when the codename
    /// cannot be sanitized into a class name; callers skip the whole type
    /// in that case.
    pub fn new(codename: impl Into<String>) -> Result<Self, GeneratorError> {
        let codename = codename.into();
        // Validate now so class_name() cannot fail later.
        sanitize(&codename)?;
        Ok(Self {
            codename,
            properties: vec![],
            codename_constants: vec![],
        })
    }

    /// Raw codename of the content type.
    pub fn codename(&self) -> &str {
        &self.codename
    }

    /// Class name, always recomputed from the codename through the
    /// sanitizer. It is never cached independently, so the two cannot
    /// diverge.
    pub fn class_name(&self) -> String {
        sanitize(&self.codename).expect("codename validated by ClassDefinition::new")
    }

    /// Adds a property.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::DuplicateIdentifier`] when an existing
    /// property already owns the identifier; the definition is unchanged
    /// and first-seen wins.
    pub fn add_property(&mut self, property: Property) -> Result<(), GeneratorError> {
        if self
            .properties
            .iter()
            .any(|p| p.identifier() == property.identifier())
        {
            return Err(GeneratorError::DuplicateIdentifier {
                identifier: property.identifier().to_string(),
            });
        }
        self.properties.push(property);
        Ok(())
    }

    /// Registers a per-field codename constant.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::DuplicateCodename`] on repeat registration
    /// of the same codename.
    pub fn add_property_codename_constant(
        &mut self,
        codename: impl Into<String>,
    ) -> Result<(), GeneratorError> {
        let codename = codename.into();
        if self.codename_constants.iter().any(|c| *c == codename) {
            return Err(GeneratorError::DuplicateCodename { codename });
        }
        self.codename_constants.push(codename);
        Ok(())
    }

    /// Attempts to add the synthesized reserved `system` property.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::DuplicateIdentifier`] when a user-defined
    /// field already claims the identifier. The user field is retained; the
    /// caller is expected to log and continue rather than propagate.
    pub fn add_system_property(&mut self) -> Result<(), GeneratorError> {
        self.add_property(Property::system())
    }

    /// Properties in insertion order; generators sort on render.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Registered codename constants in insertion order.
    pub fn codename_constants(&self) -> &[String] {
        &self.codename_constants
    }

    /// Returns `true` if the definition has the synthesized system
    /// property. A user field that merely spells `system` does not count;
    /// the synthesized property is recognized by its fixed type.
    pub fn has_system_property(&self) -> bool {
        self.properties
            .iter()
            .any(|p| p.identifier() == SYSTEM_IDENTIFIER && p.type_expression() == SYSTEM_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappings::ModelFlavor;
    use crate::property::PropertyOptions;
    use stencil_schema::Element;

    fn property(codename: &str) -> Property {
        let options = PropertyOptions {
            flavor: ModelFlavor::Delivery,
            structured_model: false,
            narrow_single_references: false,
        };
        Property::from_element(&Element::new(codename, "text"), options, &[]).unwrap()
    }

    #[test]
    fn class_name_recomputed_from_codename() {
        let definition = ClassDefinition::new("Article type").unwrap();
        assert_eq!(definition.class_name(), "ArticleType");
    }

    #[test]
    fn rejects_unsanitizable_codename() {
        assert!(matches!(
            ClassDefinition::new("123"),
            Err(GeneratorError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn add_property_accepts_distinct_identifiers() {
        let mut definition = ClassDefinition::new("article").unwrap();
        definition.add_property(property("title")).unwrap();
        definition.add_property(property("summary")).unwrap();
        assert_eq!(definition.properties().len(), 2);
    }

    #[test]
    fn duplicate_identifier_rejected_first_seen_wins() {
        let mut definition = ClassDefinition::new("article").unwrap();
        definition.add_property(property("title")).unwrap();

        // "Title!" sanitizes to the same identifier as "title".
        let err = definition.add_property(property("Title!")).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateIdentifier { identifier } if identifier == "Title"));
        assert_eq!(definition.properties().len(), 1);
        assert_eq!(definition.properties()[0].codename(), "title");
    }

    #[test]
    fn duplicate_codename_constant_rejected() {
        let mut definition = ClassDefinition::new("article").unwrap();
        definition.add_property_codename_constant("title").unwrap();
        let err = definition
            .add_property_codename_constant("title")
            .unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateCodename { codename } if codename == "title"));
        assert_eq!(definition.codename_constants().len(), 1);
    }

    #[test]
    fn system_property_added_when_free() {
        let mut definition = ClassDefinition::new("article").unwrap();
        definition.add_system_property().unwrap();
        assert!(definition.has_system_property());
    }

    #[test]
    fn user_field_named_system_blocks_synthesized_property() {
        let mut definition = ClassDefinition::new("article").unwrap();
        definition.add_property(property("system")).unwrap();

        let err = definition.add_system_property().unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateIdentifier { .. }));

        // The user field is retained, not overwritten.
        assert_eq!(definition.properties().len(), 1);
        assert_eq!(definition.properties()[0].type_expression(), "String");
        assert!(!definition.has_system_property());
    }
}
