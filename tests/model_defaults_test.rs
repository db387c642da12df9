//! Integration tests for defaults read from a backing model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use formschema::{
    DefaultStrategy, FormField, FormType, ModelDefinition, ModelField, SchemaBuilder,
};
use serde_json::json;

fn article_form() -> FormType {
    FormType::new("ArticleForm")
        .field("title", FormField::char().initial("Untitled"))
        .field("status", FormField::choice([("draft", "Draft"), ("live", "Live")]))
        .field("views", FormField::integer())
}

fn article_model() -> ModelDefinition {
    ModelDefinition::new("Article")
        .field("title", ModelField::new())
        .field("status", ModelField::new().default_value("draft"))
        .field("views", ModelField::new().default_value(0))
}

fn model_builder(model: ModelDefinition) -> SchemaBuilder {
    SchemaBuilder::new().with_default_strategy(DefaultStrategy::ModelField(Arc::new(model)))
}

#[test]
fn test_model_defaults_replace_form_defaults() {
    let document = model_builder(article_model())
        .convert(&article_form(), None)
        .unwrap();

    assert_eq!(document.property("status").unwrap().default, Some(json!("draft")));
    assert_eq!(document.property("views").unwrap().default, Some(json!(0)));
    // A model field without a declared default yields "", not the form's initial.
    assert_eq!(document.property("title").unwrap().default, Some(json!("")));
}

#[test]
fn test_form_initial_strategy_ignores_model() {
    let document = SchemaBuilder::new().convert(&article_form(), None).unwrap();

    assert_eq!(document.property("status").unwrap().default, Some(json!("")));
    assert_eq!(document.property("views").unwrap().default, Some(json!("")));
}

#[test]
fn test_producer_invoked_per_conversion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let model = article_model().field(
        "views",
        ModelField::new().default_with(move || {
            json!(counter.fetch_add(1, Ordering::SeqCst) + 100)
        }),
    );
    let builder = model_builder(model);

    let first = builder.convert(&article_form(), None).unwrap();
    let second = builder.convert(&article_form(), None).unwrap();

    assert_eq!(first.property("views").unwrap().default, Some(json!(100)));
    assert_eq!(second.property("views").unwrap().default, Some(json!(101)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_missing_model_field_propagates() {
    let model = ModelDefinition::new("Article").field("title", ModelField::new());
    let errors = model_builder(model)
        .convert(&article_form(), None)
        .unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.with_code("model_field_not_found").len(), 2);
    assert_eq!(errors.for_property("status").len(), 1);
    assert_eq!(errors.for_property("views").len(), 1);
    assert!(errors.to_string().contains("model 'Article' has no field named 'status'"));
}

#[test]
fn test_instance_still_overrides_model_defaults() {
    let instance = json!({"status": "live"});
    let document = model_builder(article_model())
        .convert(&article_form(), Some(&instance))
        .unwrap();

    assert_eq!(document.property("status").unwrap().default, Some(json!("live")));
}
