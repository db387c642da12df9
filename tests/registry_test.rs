//! Integration tests for the form registry.

use formschema::{FormField, FormRegistry, FormType, RegistryError, SchemaBuilder};
use serde_json::json;

fn login_form() -> FormType {
    FormType::new("LoginForm")
        .doc("Sign in")
        .field("username", FormField::char().attr("maxlength", 150))
        .field("password", FormField::char().widget(formschema::WidgetKind::input("password")))
}

fn newsletter_form() -> FormType {
    FormType::new("NewsletterForm").field("email", FormField::email())
}

#[test]
fn test_register_and_get() {
    let registry = FormRegistry::new();
    registry.register(login_form()).unwrap();

    assert!(registry.get("LoginForm").is_some());
    assert!(registry.get("Unknown").is_none());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = FormRegistry::new();
    registry.register(login_form()).unwrap();

    let result = registry.register(login_form());
    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "LoginForm"));
}

#[test]
fn test_names_sorted() {
    let registry = FormRegistry::new();
    registry.register(newsletter_form()).unwrap();
    registry.register(login_form()).unwrap();

    assert_eq!(registry.names(), vec!["LoginForm", "NewsletterForm"]);
}

#[test]
fn test_convert_by_name() {
    let registry = FormRegistry::new();
    registry.register(login_form()).unwrap();

    let instance = json!({"username": "ada"});
    let document = registry.convert("LoginForm", Some(&instance)).unwrap();

    assert_eq!(document.description, "Sign in");
    assert_eq!(document.property("username").unwrap().default, Some(json!("ada")));
    assert_eq!(document.property("username").unwrap().max_length, Some(150));
}

#[test]
fn test_convert_unknown_form() {
    let registry = FormRegistry::new();
    let result = registry.convert("Missing", None);

    assert!(matches!(result, Err(RegistryError::FormNotFound(name)) if name == "Missing"));
}

#[test]
fn test_registry_builder_configuration() {
    let registry = FormRegistry::new().with_builder(SchemaBuilder::new().exclude(["password"]));
    registry.register(login_form()).unwrap();

    let document = registry.convert("LoginForm", None).unwrap();
    let names: Vec<&str> = document.property_names().collect();
    assert_eq!(names, vec!["username"]);
}

#[test]
fn test_export_all() {
    let registry = FormRegistry::new();
    registry.register(newsletter_form()).unwrap();
    registry.register(login_form()).unwrap();

    let export = registry.export_all().unwrap();
    let definitions = export["definitions"].as_object().unwrap();
    let names: Vec<&String> = definitions.keys().collect();

    assert_eq!(names, vec!["LoginForm", "NewsletterForm"]);
    assert_eq!(definitions["LoginForm"]["title"], "Loginform");
    assert_eq!(definitions["NewsletterForm"]["properties"]["email"]["format"], "email");
    assert!(export.get("$schema").is_none());
    assert!(definitions["LoginForm"].get("$schema").is_none());
}

#[test]
fn test_export_all_with_schema_uri() {
    let registry = FormRegistry::new().with_builder(SchemaBuilder::new().with_schema_uri(true));
    registry.register(login_form()).unwrap();

    let export = registry.export_all().unwrap();

    assert_eq!(export["$schema"], "http://json-schema.org/draft-04/schema#");
    assert!(export["definitions"]["LoginForm"].get("$schema").is_none());
}

#[test]
fn test_export_empty_registry() {
    let export = FormRegistry::default().export_all().unwrap();
    assert_eq!(export, json!({"definitions": {}}));
}

#[test]
fn test_export_reports_failing_form() {
    let registry = FormRegistry::new();
    registry
        .register(FormType::new("Broken").field("zip", FormField::char().attr("pattern", "(")))
        .unwrap();

    match registry.export_all() {
        Err(RegistryError::Conversion(name, errors)) => {
            assert_eq!(name, "Broken");
            assert_eq!(errors.first().code, "invalid_pattern");
        }
        other => panic!("expected conversion error, got {:?}", other),
    }
}

#[test]
fn test_registry_clone_shares_forms() {
    let registry = FormRegistry::new();
    let cloned = registry.clone();
    registry.register(login_form()).unwrap();

    assert!(cloned.get("LoginForm").is_some());
}
