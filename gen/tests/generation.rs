//! End-to-end generation tests: schema in, files on disk out.

use std::fs;

use stencil_gen::generator::{GeneratorOptions, ModelGenerator};
use stencil_gen::mappings::ModelFlavor;
use stencil_gen::output::write_files;
use stencil_schema::{ContentType, CountCondition, Element, ItemCountLimit, TypeReference};

fn blog_types() -> Vec<ContentType> {
    let mut author_ref = Element::new("author", "modular_content").with_id("e-author");
    author_ref.allowed_content_types = vec![TypeReference {
        id: "t-person".to_string(),
    }];
    author_ref.item_count_limit = Some(ItemCountLimit {
        condition: CountCondition::Exactly,
        value: 1,
    });

    let mut related = Element::new("related_articles", "modular_content").with_id("e-related");
    related.allowed_content_types = vec![TypeReference {
        id: "t-article".to_string(),
    }];

    vec![
        ContentType::new("article")
            .with_id("t-article")
            .with_element(Element::new("title", "text").with_id("e-title"))
            .with_element(Element::new("published", "date_time").with_id("e-published"))
            .with_element(Element::new("teaser_image", "asset").with_id("e-teaser"))
            .with_element(author_ref)
            .with_element(related),
        ContentType::new("person")
            .with_id("t-person")
            .with_element(Element::new("full_name", "text").with_id("e-name")),
    ]
}

#[test]
fn delivery_run_writes_one_model_per_type() {
    let dir = tempfile::tempdir().unwrap();
    let files = ModelGenerator::new(GeneratorOptions::default())
        .generate(&blog_types())
        .unwrap();
    let written = write_files(dir.path(), &files, false).unwrap();
    assert_eq!(written.len(), 2);

    let article = fs::read_to_string(dir.path().join("article.rs")).unwrap();
    assert!(article.starts_with("// This code was automatically generated by stencil-gen."));
    assert!(article.contains("pub struct Article {"));
    assert!(article.contains("pub title: String"));
    assert!(article.contains("pub published: DateTime<Utc>"));
    assert!(article.contains("pub teaser_image: Vec<Asset>"));
    assert!(article.contains("pub author: Vec<serde_json::Value>"));
    assert!(article.contains("pub system: ContentItemSystemAttributes"));

    let person = fs::read_to_string(dir.path().join("person.rs")).unwrap();
    assert!(person.contains("pub full_name: String"));
}

#[test]
fn extended_run_wires_marker_trait_and_accessors() {
    let dir = tempfile::tempdir().unwrap();
    let options = GeneratorOptions {
        flavor: ModelFlavor::ExtendedDelivery,
        typed_accessors: true,
        ..GeneratorOptions::default()
    };
    let files = ModelGenerator::new(options).generate(&blog_types()).unwrap();
    write_files(dir.path(), &files, false).unwrap();

    let marker = fs::read_to_string(dir.path().join("content_item.rs")).unwrap();
    assert!(marker.contains("pub trait ContentItem: Any {"));

    let article = fs::read_to_string(dir.path().join("article.rs")).unwrap();
    assert!(article.contains("pub author: Box<dyn ContentItem>"));
    assert!(article.contains("pub related_articles: Vec<Box<dyn ContentItem>>"));
    assert!(article.contains("pub fn author_person(&self) -> Option<&Person> {"));
    assert!(article.contains(
        "pub fn related_articles_article(&self) -> impl Iterator<Item = &Article> {"
    ));
    assert!(article.contains("impl ContentItem for Article {"));
    assert!(article.contains("pub const CODENAME: &'static str = \"article\";"));
}

#[test]
fn regeneration_preserves_partial_edits() {
    let dir = tempfile::tempdir().unwrap();
    let options = GeneratorOptions {
        with_partials: true,
        ..GeneratorOptions::default()
    };
    let generator = ModelGenerator::new(options);

    let files = generator.generate(&blog_types()).unwrap();
    write_files(dir.path(), &files, false).unwrap();

    let partial_path = dir.path().join("article.rs");
    fs::write(&partial_path, "// my edits\n").unwrap();

    let files = generator.generate(&blog_types()).unwrap();
    write_files(dir.path(), &files, false).unwrap();

    assert_eq!(fs::read_to_string(&partial_path).unwrap(), "// my edits\n");
    let generated = fs::read_to_string(dir.path().join("article_generated.rs")).unwrap();
    assert!(generated.contains("pub struct Article {"));
}

#[test]
fn management_run_with_auxiliaries() {
    let dir = tempfile::tempdir().unwrap();
    let options = GeneratorOptions {
        flavor: ModelFlavor::Management,
        element_ids: true,
        with_type_provider: true,
        base_class: Some("ContentBase".to_string()),
        ..GeneratorOptions::default()
    };
    let files = ModelGenerator::new(options).generate(&blog_types()).unwrap();
    write_files(dir.path(), &files, false).unwrap();

    let article = fs::read_to_string(dir.path().join("article.rs")).unwrap();
    assert!(article.contains("#[serde(rename = \"title\")]"));
    assert!(article.contains("#[element(id = \"e-title\")]"));
    assert!(article.contains("pub author: Vec<ItemReference>"));
    assert!(article.contains("use stencil_management::ItemReference;"));

    let provider = fs::read_to_string(dir.path().join("type_provider.rs")).unwrap();
    assert!(provider.contains("\"article\" => Some(\"Article\"),"));
    assert!(provider.contains("\"Person\" => Some(\"person\"),"));

    let extender = fs::read_to_string(dir.path().join("content_base_extender.rs")).unwrap();
    let article_impl = extender.find("impl ContentBase for Article {}").unwrap();
    let person_impl = extender.find("impl ContentBase for Person {}").unwrap();
    assert!(article_impl < person_impl);
    assert!(dir.path().join("content_base.rs").exists());
}

#[test]
fn dry_run_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let files = ModelGenerator::new(GeneratorOptions::default())
        .generate(&blog_types())
        .unwrap();
    let written = write_files(dir.path(), &files, true).unwrap();
    assert_eq!(written.len(), 2);
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn snippet_elements_flatten_into_the_host_type() {
    let dir = tempfile::tempdir().unwrap();
    let mut snippet = Element::new("metadata", "snippet");
    snippet.snippet_elements = vec![
        Element::new("meta_title", "text"),
        Element::new("meta_description", "text"),
    ];
    let types = vec![ContentType::new("article").with_element(snippet)];

    let files = ModelGenerator::new(GeneratorOptions::default())
        .generate(&types)
        .unwrap();
    write_files(dir.path(), &files, false).unwrap();

    let article = fs::read_to_string(dir.path().join("article.rs")).unwrap();
    assert!(article.contains("pub meta_title: String"));
    assert!(article.contains("pub meta_description: String"));
    assert!(!article.contains("metadata"));
}
