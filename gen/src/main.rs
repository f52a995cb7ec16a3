//! Stencil Model Generator
//!
//! Generates strongly-typed Rust model structs from a Stencil project's
//! content-type schema.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use stencil_client::{TypesClient, DELIVERY_BASE_URL, MANAGEMENT_BASE_URL};
use stencil_gen::errors::GeneratorError;
use stencil_gen::generator::{GeneratorOptions, ModelGenerator};
use stencil_gen::mappings::ModelFlavor;
use stencil_gen::output::write_files;

/// Stencil model generator - transforms content-type schemas into typed Rust models
#[derive(Parser, Debug)]
#[command(name = "stencil-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Environment id of the Stencil project
    #[arg(short, long)]
    environment_id: String,

    /// API key (bearer token); required for the management API
    #[arg(short, long)]
    api_key: Option<String>,

    /// Output directory for generated models
    #[arg(short, long, default_value = "models")]
    output: String,

    /// Module path models live under in generated imports
    #[arg(short, long, default_value = "models")]
    namespace: String,

    /// Generate management API models instead of delivery models
    #[arg(long)]
    management_api: bool,

    /// Generate extended delivery models with the content-item marker trait
    #[arg(long, conflicts_with = "management_api")]
    extended_delivery: bool,

    /// Map rich-text and date-time elements to structured types
    #[arg(long)]
    structured_model: bool,

    /// Emit codename constants on delivery models
    #[arg(long)]
    codename_constants: bool,

    /// Emit typed accessor methods on cross-reference fields
    #[arg(long)]
    typed_accessors: bool,

    /// Emit element-id attributes on management models
    #[arg(long)]
    element_ids: bool,

    /// Emit external-id attributes on management models
    #[arg(long)]
    external_ids: bool,

    /// Seed a user-editable partial file next to each generated model
    #[arg(long)]
    with_partials: bool,

    /// Emit the codename/class type provider
    #[arg(long)]
    with_type_provider: bool,

    /// Base class every generated model should implement
    #[arg(long)]
    base_class: Option<String>,

    /// Suffix inserted before `.rs` in generated filenames
    #[arg(long)]
    file_name_suffix: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Print generated filenames without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn flavor(&self) -> ModelFlavor {
        if self.management_api {
            ModelFlavor::Management
        } else if self.extended_delivery {
            ModelFlavor::ExtendedDelivery
        } else {
            ModelFlavor::Delivery
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.typed_accessors && !self.extended_delivery {
            return Err(GeneratorError::Config(
                "--typed-accessors requires --extended-delivery".to_string(),
            ));
        }
        if (self.element_ids || self.external_ids) && !self.management_api {
            return Err(GeneratorError::Config(
                "--element-ids and --external-ids require --management-api".to_string(),
            ));
        }
        if self.management_api && self.api_key.is_none() {
            return Err(GeneratorError::Config(
                "--management-api requires --api-key".to_string(),
            ));
        }
        Ok(())
    }
}

async fn run(cli: Cli) -> Result<(), GeneratorError> {
    cli.validate()?;

    if cli.verbose > 0 {
        eprintln!("Generating models for environment: {}", cli.environment_id);
        eprintln!("Output directory: {}", cli.output);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let default_base = if cli.management_api {
        MANAGEMENT_BASE_URL
    } else {
        DELIVERY_BASE_URL
    };
    let mut builder = TypesClient::builder(&cli.environment_id)
        .base_url(cli.base_url.as_deref().unwrap_or(default_base));
    if let Some(api_key) = &cli.api_key {
        builder = builder.api_key(api_key);
    }
    let client = builder.build()?;

    let types = client.content_types().await?;
    if cli.verbose > 1 {
        eprintln!("Fetched {} content types", types.len());
        for content_type in &types {
            eprintln!("  - {} ({} elements)", content_type.codename, content_type.elements.len());
        }
    }

    let options = GeneratorOptions {
        namespace: cli.namespace.clone(),
        flavor: cli.flavor(),
        structured_model: cli.structured_model,
        codename_constants: cli.codename_constants,
        typed_accessors: cli.typed_accessors,
        element_ids: cli.element_ids,
        external_ids: cli.external_ids,
        with_partials: cli.with_partials,
        with_type_provider: cli.with_type_provider,
        base_class: cli.base_class.clone(),
        file_name_suffix: cli.file_name_suffix.clone(),
    };
    let files = ModelGenerator::new(options).generate(&types)?;

    let written = write_files(Path::new(&cli.output), &files, cli.dry_run)?;
    if cli.dry_run {
        for path in &written {
            println!("Would write {}", path.display());
        }
    } else if cli.verbose > 0 {
        eprintln!("Successfully generated {} files to {}", written.len(), cli.output);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
