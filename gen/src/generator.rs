//! End-to-end model generation.
//!
//! [`ModelGenerator`] drives the whole pipeline: it folds fetched content
//! types into class definitions, renders one file per type through the
//! class generator family, and appends the auxiliary files (marker trait,
//! type provider, base class pair) the configuration asks for.
//!
//! Field-level problems never abort a run. A property that cannot be
//! resolved is skipped with a `Warning:` line on stdout; guidelines
//! elements are skipped silently; a content type whose codename cannot
//! become a class name drops the whole type with a warning. Everything
//! else propagates.

use colored::Colorize;
use stencil_schema::ContentType;

use crate::class_definition::ClassDefinition;
use crate::codegen::{
    BaseClassGenerator, ClassCodeGenerator, ContentItemGenerator, ModelVariant,
    TypeProviderGenerator, DEFAULT_NAMESPACE,
};
use crate::errors::GeneratorError;
use crate::identifier::to_snake_case;
use crate::mappings::ModelFlavor;
use crate::output::GeneratedFile;
use crate::property::{Property, PropertyOptions};

/// Suffix appended to generated filenames when partials are on and no
/// explicit suffix was configured.
pub const PARTIAL_DEFAULT_SUFFIX: &str = "_generated";

/// Configuration of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Module path models live under in generated imports.
    pub namespace: String,
    /// Active type-mapping flavor.
    pub flavor: ModelFlavor,
    /// Swap plain string mappings for structured element types.
    pub structured_model: bool,
    /// Emit codename constants on plain delivery classes.
    pub codename_constants: bool,
    /// Emit typed accessor methods (extended delivery only).
    pub typed_accessors: bool,
    /// Emit element-id attributes (management only).
    pub element_ids: bool,
    /// Emit external-id attributes (management only; not implemented).
    pub external_ids: bool,
    /// Seed a user-editable partial file next to each generated one.
    pub with_partials: bool,
    /// Emit the codename/class type provider.
    pub with_type_provider: bool,
    /// Base class every generated class should implement.
    pub base_class: Option<String>,
    /// Suffix inserted before `.rs` in generated filenames.
    pub file_name_suffix: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            flavor: ModelFlavor::Delivery,
            structured_model: false,
            codename_constants: false,
            typed_accessors: false,
            element_ids: false,
            external_ids: false,
            with_partials: false,
            with_type_provider: false,
            base_class: None,
            file_name_suffix: None,
        }
    }
}

impl GeneratorOptions {
    /// The filename suffix in effect: the configured one, or the partial
    /// default when partials are on.
    fn effective_suffix(&self) -> &str {
        match &self.file_name_suffix {
            Some(suffix) => suffix,
            None if self.with_partials => PARTIAL_DEFAULT_SUFFIX,
            None => "",
        }
    }
}

/// Runs the generation pipeline over a fetched type list.
#[derive(Debug, Clone)]
pub struct ModelGenerator {
    options: GeneratorOptions,
}

impl ModelGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generates every output file for the given content types.
    ///
    /// The returned list is ordered: marker trait first (extended flavor),
    /// then one or two files per type in input order, then the type
    /// provider, then the base class pair. Nothing is written to disk.
    ///
    /// ## Errors
    ///
    /// Propagates configuration errors ([`GeneratorError::NotImplemented`]
    /// for the external-id combination, [`GeneratorError::InvalidArgument`]
    /// and [`GeneratorError::InvalidIdentifier`] for bad base class names)
    /// and generator bugs ([`GeneratorError::CodeGen`]). Field-level
    /// resolution failures are warnings, not errors.
    pub fn generate(&self, types: &[ContentType]) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let options = &self.options;
        let variant = match options.flavor {
            ModelFlavor::Delivery => ModelVariant::Delivery {
                codename_constants: options.codename_constants,
            },
            ModelFlavor::ExtendedDelivery => ModelVariant::ExtendedDelivery {
                typed_accessors: options.typed_accessors,
            },
            ModelFlavor::Management => {
                ModelVariant::management(options.element_ids, options.external_ids)?
            }
        };
        let extended = options.flavor == ModelFlavor::ExtendedDelivery;
        let property_options = PropertyOptions {
            flavor: options.flavor,
            structured_model: options.structured_model,
            narrow_single_references: extended && !options.typed_accessors,
        };

        let mut files = Vec::new();
        if extended {
            files.push(ContentItemGenerator::new().generate()?);
        }

        let mut type_provider = options
            .with_type_provider
            .then(TypeProviderGenerator::new);
        let mut base = options
            .base_class
            .as_deref()
            .map(|name| BaseClassGenerator::new(name, options.namespace.clone()))
            .transpose()?;

        let suffix = options.effective_suffix();
        for content_type in types {
            let mut definition = match ClassDefinition::new(&content_type.codename) {
                Ok(definition) => definition,
                Err(GeneratorError::InvalidIdentifier { .. }) => {
                    warn(format!(
                        "skipping type '{}': codename cannot become a class name",
                        content_type.codename
                    ));
                    continue;
                }
                Err(e) => return Err(e),
            };

            for element in content_type.flattened_elements() {
                let property =
                    match Property::from_element(&element, property_options, types) {
                        Ok(property) => property,
                        Err(GeneratorError::GuidelinesElement) => continue,
                        Err(e) if e.is_field_level() => {
                            warn(format!(
                                "skipping element '{}' of type '{}': {e}",
                                element.codename, content_type.codename
                            ));
                            continue;
                        }
                        Err(e) => return Err(e),
                    };
                if let Err(e) = definition.add_property(property) {
                    warn(format!(
                        "skipping element '{}' of type '{}': {e}",
                        element.codename, content_type.codename
                    ));
                    continue;
                }
                // Partial companions carry constants even when the main
                // variant does not; register them for either consumer.
                if variant.codename_constants() || options.with_partials {
                    if let Err(e) = definition.add_property_codename_constant(&element.codename) {
                        warn(format!(
                            "skipping codename constant for '{}' of type '{}': {e}",
                            element.codename, content_type.codename
                        ));
                    }
                }
            }

            if options.flavor != ModelFlavor::Management {
                if let Err(e) = definition.add_system_property() {
                    warn(format!(
                        "type '{}' keeps its own 'system' field: {e}",
                        content_type.codename
                    ));
                }
            }

            let class_name = definition.class_name();
            let module = to_snake_case(&class_name);
            files.push(
                ClassCodeGenerator::new(
                    definition.clone(),
                    format!("{module}{suffix}.rs"),
                    &options.namespace,
                    variant,
                )?
                .generate()?,
            );
            if options.with_partials {
                files.push(
                    ClassCodeGenerator::new(
                        definition,
                        format!("{module}.rs"),
                        &options.namespace,
                        ModelVariant::Partial,
                    )?
                    .generate()?,
                );
            }

            if let Some(provider) = &mut type_provider {
                provider.add_mapping(&content_type.codename, &class_name);
            }
            if let Some(base) = &mut base {
                base.add_class(&class_name);
            }
        }

        if let Some(provider) = type_provider {
            if let Some(file) = provider.generate()? {
                files.push(file);
            }
        }
        if let Some(base) = base {
            files.extend(base.generate()?);
        }

        Ok(files)
    }
}

fn warn(message: String) {
    println!("{} {message}", "Warning:".yellow().bold());
}
