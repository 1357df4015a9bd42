use super::*;
use crate::config::default_templates_dir;
use crate::wizard::{Step, View};
use serde_json::json;

fn shipped() -> Templates {
    Templates::load(&default_templates_dir()).unwrap()
}

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

#[test]
fn shipped_templates_cover_every_view() {
    let templates = shipped();
    let mut views = vec![View::Home, View::Submitted];
    for step in Step::ALL {
        views.push(View::Page(step));
        views.push(View::Fragment(step));
    }
    for view in views {
        assert!(templates.has_view(&view.name()), "missing template for {}", view.name());
    }
    assert!(templates.has_view("layout"));
}

#[test]
fn fragment_is_only_the_form() {
    let html = shipped().render("form-two", &View::Fragment(Step::Two).data()).unwrap();
    assert!(html.trim_start().starts_with("<form"));
    assert!(html.contains(r#"action="/form/two""#));
    assert!(html.contains(r#"name="next" value="next""#));
    assert!(html.contains(r#"name="prev" value="prev""#));
    assert!(html.contains("Step 2 of 3"));
    assert!(!html.contains("<html"));
}

#[test]
fn page_wraps_fragment_in_layout() {
    let html = shipped().render("page-form-three", &View::Page(Step::Three).data()).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(r#"hx-boost="true""#));
    assert!(html.contains(r#"action="/form/three""#));
    assert!(html.contains(r#"name="submit" value="submit""#));
    assert!(html.contains("Step 3 of 3"));
}

#[test]
fn unknown_view_is_an_error() {
    let err = shipped().render("page-form-four", &json!({})).unwrap_err();
    assert!(matches!(err, TemplateError::Render { ref view, .. } if view == "page-form-four"));
}

#[test]
fn load_registers_by_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "greeting.hbs", "hello {{name}}");
    write(dir.path(), "notes.txt", "ignored");

    let templates = Templates::load(dir.path()).unwrap();
    assert_eq!(templates.view_count(), 1);
    assert!(templates.has_view("greeting"));
    assert!(!templates.has_view("notes"));
    assert_eq!(templates.render("greeting", &json!({ "name": "<b>" })).unwrap(), "hello &lt;b&gt;");
}

#[test]
fn templates_resolve_each_other_as_partials() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "shell.hbs", "[{{> @partial-block}}]");
    write(dir.path(), "inner.hbs", "inner");
    write(dir.path(), "page.hbs", "{{#> shell}}{{> inner}}{{/shell}}");

    let templates = Templates::load(dir.path()).unwrap();
    assert_eq!(templates.render("page", &json!({})).unwrap(), "[inner]");
}

#[test]
fn load_fails_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = Templates::load(dir.path()).err().unwrap();
    assert!(matches!(err, TemplateError::Empty(_)));
}

#[test]
fn load_fails_on_malformed_template() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.hbs", "{{#if}}never closed");
    let err = Templates::load(dir.path()).err().unwrap();
    assert!(matches!(err, TemplateError::Register { .. }));
}

#[test]
fn clones_share_the_registry() {
    let templates = shipped();
    let clone = templates.clone();
    assert!(Arc::ptr_eq(&templates.registry, &clone.registry));
}
