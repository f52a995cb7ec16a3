//! The closed set of model variants a class generator can emit.

use crate::errors::GeneratorError;
use crate::mappings::ModelFlavor;

/// Selects which rendition of a class is generated.
///
/// The variant decides derives, attribute decorations, codename constants,
/// accessor methods, header text, and whether an existing file may be
/// overwritten.
///
/// ## Examples
///
/// ```
/// use stencil_gen::codegen::ModelVariant;
///
/// let variant = ModelVariant::Delivery { codename_constants: true };
/// assert!(variant.overwrite_existing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// Plain read-side struct, optionally with codename constants.
    Delivery { codename_constants: bool },
    /// Read-side struct implementing the content-item trait, optionally
    /// with typed accessor methods on linked-item fields.
    ExtendedDelivery { typed_accessors: bool },
    /// Write-side struct with serde renames and element id decorations.
    Management { element_ids: bool },
    /// A user-editable companion struct; never overwritten once written.
    Partial,
}

impl ModelVariant {
    /// Builds the management variant, validating the id/external-id
    /// selection.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::NotImplemented`] when external ids are
    /// requested, with or without element ids. Stencil does not ship
    /// external ids on retrieved type elements yet, so the combination is
    /// rejected up front instead of silently emitting empty decorations.
    pub fn management(element_ids: bool, external_ids: bool) -> Result<Self, GeneratorError> {
        if external_ids {
            return Err(GeneratorError::NotImplemented(
                "external id decorations are not available for retrieved content types"
                    .to_string(),
            ));
        }
        Ok(Self::Management { element_ids })
    }

    /// The type-mapping flavor this variant renders with.
    pub fn flavor(&self) -> ModelFlavor {
        match self {
            Self::Delivery { .. } | Self::Partial => ModelFlavor::Delivery,
            Self::ExtendedDelivery { .. } => ModelFlavor::ExtendedDelivery,
            Self::Management { .. } => ModelFlavor::Management,
        }
    }

    /// Whether an already-existing file of this variant may be replaced.
    ///
    /// Only [`ModelVariant::Partial`] answers `false`: partial files hold
    /// hand-written code and are seeded once.
    pub fn overwrite_existing(&self) -> bool {
        !matches!(self, Self::Partial)
    }

    /// Whether codename constants are emitted. Extended delivery and
    /// partial classes always carry them; the plain delivery variant only
    /// on request.
    pub fn codename_constants(&self) -> bool {
        matches!(
            self,
            Self::Delivery { codename_constants: true }
                | Self::ExtendedDelivery { .. }
                | Self::Partial
        )
    }

    /// Whether typed accessor methods are emitted.
    pub fn typed_accessors(&self) -> bool {
        matches!(self, Self::ExtendedDelivery { typed_accessors: true })
    }

    /// Whether element id decorations are emitted.
    pub fn element_ids(&self) -> bool {
        matches!(self, Self::Management { element_ids: true })
    }

    /// Header comment placed above the generated code.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Partial => {
                "// This file is safe to edit. It will not be overwritten by stencil-gen."
            }
            _ => {
                "// This code was automatically generated by stencil-gen.\n\
                 // Changes to this file will be lost if the code is regenerated."
            }
        }
    }
}
