//! Error types for the stencil generator.

use thiserror::Error;

/// Errors that can occur during model generation.
///
/// Field-level errors (`InvalidIdentifier`, `DuplicateIdentifier`,
/// `DuplicateCodename`, `UnsupportedType`, `TypeNotFound`) are recovered
/// locally by the orchestrator: the offending field is skipped with a
/// warning and generation continues. `GuidelinesElement` is a silent-skip
/// signal, never logged. Everything else is fatal for the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A raw name cannot be sanitized into a non-empty identifier.
    #[error("'{name}' cannot be turned into a valid identifier")]
    InvalidIdentifier {
        /// The raw codename that failed sanitization.
        name: String,
    },

    /// A second field maps to an identifier already claimed in the class.
    #[error("identifier '{identifier}' is already used by another property")]
    DuplicateIdentifier {
        /// The contested identifier.
        identifier: String,
    },

    /// A codename constant was registered twice for the same class.
    #[error("codename constant for '{codename}' is already declared")]
    DuplicateCodename {
        /// The contested codename.
        codename: String,
    },

    /// A field's type tag has no mapping for the active flavor.
    #[error("element type '{element_type}' is not supported")]
    UnsupportedType {
        /// The unmapped type tag.
        element_type: String,
    },

    /// A guidelines element was encountered.
    ///
    /// Guidelines carry editor documentation, not data; callers skip the
    /// field without logging anything.
    #[error("guidelines elements carry no data")]
    GuidelinesElement,

    /// A cross-reference points at a content type that was not fetched.
    #[error("referenced content type '{id}' was not found")]
    TypeNotFound {
        /// The dangling content-type id.
        id: String,
    },

    /// An option combination that is intentionally not implemented.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Malformed generator input (empty filename, empty class name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generated tokens failed to parse as a Rust file.
    #[error("Code generation failed: {0}")]
    CodeGen(String),

    /// Failed to write an output file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    Write {
        /// The path that could not be written.
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration (missing credentials, contradictory flags).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Schema fetching failed.
    #[error(transparent)]
    Client(#[from] stencil_client::ClientError),
}

impl GeneratorError {
    /// Returns `true` if this error is recoverable at field level: the
    /// orchestrator warns and skips the field instead of aborting.
    pub fn is_field_level(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier { .. }
                | Self::DuplicateIdentifier { .. }
                | Self::DuplicateCodename { .. }
                | Self::UnsupportedType { .. }
                | Self::TypeNotFound { .. }
                | Self::GuidelinesElement
        )
    }
}
