//! Validation, formatting, and atomic writing of generated files.
//!
//! Every generator in this crate funnels its token stream through
//! [`render`], which parses the tokens back with `syn` to prove they form
//! a valid Rust file before formatting them with `prettyplease`. Writing
//! goes through a temp-file-and-rename so a crash never leaves a
//! half-written model on disk.
//!
//! ## Examples
//!
//! ```
//! use quote::quote;
//! use stencil_gen::output::render;
//!
//! let code = render(quote! { pub struct Article {} }, "// header").unwrap();
//! assert!(code.starts_with("// header\n"));
//! assert!(code.contains("pub struct Article {}"));
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use proc_macro2::TokenStream;

use crate::errors::GeneratorError;

/// One file produced by a generation run, not yet on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub filename: String,
    /// Fully formatted content, header included.
    pub content: String,
    /// When `false`, an existing file at the target path is left alone.
    pub overwrite_existing: bool,
}

/// Validates a token stream as a Rust file, formats it, and prepends the
/// header comment.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGen`] when the tokens do not parse as a
/// file. That always indicates a bug in a generator, never bad input.
pub fn render(tokens: TokenStream, header: &str) -> Result<String, GeneratorError> {
    let file: syn::File = syn::parse2(tokens)
        .map_err(|e| GeneratorError::CodeGen(format!("generated code failed to parse: {e}")))?;
    let formatted = prettyplease::unparse(&file);
    Ok(format!("{header}\n\n{formatted}"))
}

/// Writes the content to `path` atomically.
///
/// The bytes land in a temp file beside the target first and are renamed
/// into place, so readers observe either the old file or the new one.
///
/// ## Errors
///
/// Returns [`GeneratorError::Write`] when any filesystem step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let wrap = |source: std::io::Error| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(wrap)?;

    let tmp = path.with_extension("rs.tmp");
    {
        let mut file = fs::File::create(&tmp).map_err(wrap)?;
        file.write_all(content.as_bytes()).map_err(wrap)?;
        file.sync_all().map_err(wrap)?;
    }
    fs::rename(&tmp, path).map_err(wrap)
}

/// Writes a batch of generated files into `output_dir`.
///
/// Files whose `overwrite_existing` flag is `false` are skipped when the
/// target already exists. With `dry_run` set, nothing touches the disk;
/// the returned list still names every file that a real run would write.
///
/// ## Errors
///
/// Returns [`GeneratorError::Write`] on the first filesystem failure.
pub fn write_files(
    output_dir: &Path,
    files: &[GeneratedFile],
    dry_run: bool,
) -> Result<Vec<std::path::PathBuf>, GeneratorError> {
    let mut written = Vec::new();
    for file in files {
        let path = output_dir.join(&file.filename);
        if !file.overwrite_existing && path.exists() {
            continue;
        }
        if !dry_run {
            write_atomic(&path, &file.content)?;
        }
        written.push(path);
    }
    Ok(written)
}
