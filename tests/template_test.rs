use droidgen::project::ProjectSpec;
use droidgen::templates::{self, MiniJinjaRenderer, TemplateRenderer};

fn context() -> serde_json::Value {
    serde_json::to_value(ProjectSpec {
        project_name: "Demo".to_string(),
        app_name: "Demo & Friends".to_string(),
        application_id: "com.example.app".to_string(),
        compile_sdk: 34,
        min_sdk: 24,
        target_sdk: 34,
    })
    .unwrap()
}

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({
        "name": "test",
        "value": 42
    });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_app_name_substituted_verbatim() {
    let engine = MiniJinjaRenderer::new();
    let strings = engine.render(templates::STRINGS_XML, &context()).unwrap();

    // No escaping is applied to the label, not even for XML metacharacters
    assert!(strings.contains(r#"<string name="app_name">Demo & Friends</string>"#));
}

#[test]
fn test_application_id_renders_identically_everywhere() {
    let engine = MiniJinjaRenderer::new();
    let context = context();

    let app_build = engine.render(templates::APP_BUILD_GRADLE, &context).unwrap();
    assert_eq!(app_build.matches("com.example.app").count(), 2);

    let stub = engine.render(templates::MAIN_ACTIVITY, &context).unwrap();
    assert!(stub.starts_with("package com.example.app\n"));
}

#[test]
fn test_rendering_leaves_no_placeholders_behind() {
    let engine = MiniJinjaRenderer::new();
    let context = context();

    for template in [
        templates::STRINGS_XML,
        templates::SETTINGS_GRADLE,
        templates::APP_BUILD_GRADLE,
        templates::MAIN_ACTIVITY,
    ] {
        let rendered = engine.render(template, &context).unwrap();
        assert!(!rendered.contains("{{"), "unresolved placeholder in: {}", rendered);
    }
}

#[test]
fn test_static_templates_have_no_placeholders() {
    assert!(!templates::ANDROID_MANIFEST.contains("{{"));
    assert!(!templates::ROOT_BUILD_GRADLE.contains("{{"));
    assert!(!templates::GRADLE_PROPERTIES.contains("{{"));
}
