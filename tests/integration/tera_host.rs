//! Integration tests for rendering through the Tera host.

use anyhow::Result;
use cache_rocket::rendering::{CacheOptions, CachedRenderer, ReplaceMap, TeraHost};
use cache_rocket::test_utils::init_test_logging;

fn renderer_with(templates: &[(&str, &str)]) -> Result<CachedRenderer<TeraHost>> {
    init_test_logging(None);
    let mut host = TeraHost::new();
    for (name, content) in templates {
        host.add_raw_template(name, content)?;
    }
    Ok(CachedRenderer::new(host))
}

#[test]
fn test_single_partial() -> Result<()> {
    let renderer = renderer_with(&[
        ("container", r#"X {{ "inner" | cache_replace_key }} Y"#),
        ("inner", "Z"),
    ])?;

    assert_eq!(renderer.render_cached("container", CacheOptions::new().replace("inner"))?, "X Z Y");
    Ok(())
}

#[test]
fn test_list_of_partials() -> Result<()> {
    let renderer = renderer_with(&[
        ("container", r#"{{ "a" | cache_replace_key }} {{ "b" | cache_replace_key }}"#),
        ("a", "1"),
        ("b", "2"),
    ])?;

    assert_eq!(renderer.render_cached("container", CacheOptions::new().replace(["a", "b"]))?, "1 2");
    Ok(())
}

#[test]
fn test_collection_with_computed_value() -> Result<()> {
    let renderer = renderer_with(&[("partial", r#"Hi {{ "dog" | cache_replace_key }}."#)])?;

    let options = CacheOptions::with_collection(vec!["Snoop".to_string(), "Boo".to_string()])
        .replace(ReplaceMap::new().computed("dog", |dog: Option<&String>| dog.cloned()));
    assert_eq!(renderer.render_cached("partial", options)?, "Hi Snoop.Hi Boo.");
    Ok(())
}

#[test]
fn test_repeated_marker() -> Result<()> {
    let renderer = renderer_with(&[
        ("container", r#"{{ "inner" | cache_replace_key }} {{ "inner" | cache_replace_key }}"#),
        ("inner", "Q"),
    ])?;

    assert_eq!(renderer.render_cached("container", CacheOptions::new().replace("inner"))?, "Q Q");
    Ok(())
}

#[test]
fn test_options_reach_outer_and_inner_templates() -> Result<()> {
    let renderer = renderer_with(&[
        ("page", r#"<h1>{{ title }}</h1>{{ "body" | cache_replace_key }}"#),
        ("body", "<p>{{ title }} body</p>"),
    ])?;

    let output = renderer
        .render_cached("page", CacheOptions::new().option("title", "News").replace("body"))?;
    assert_eq!(output, "<h1>News</h1><p>News body</p>");
    Ok(())
}

#[test]
fn test_inner_partial_markers_are_not_expanded_recursively() -> Result<()> {
    // Inner output is spliced in as-is; markers it contains stay for a later pass
    let renderer = renderer_with(&[
        ("outer", r#"[{{ "middle" | cache_replace_key }}]"#),
        ("middle", r#"({{ "leaf" | cache_replace_key }})"#),
    ])?;

    let output = renderer.render_cached("outer", CacheOptions::new().replace("middle"))?;
    assert_eq!(output, "[(<cr leaf>)]");
    Ok(())
}

#[test]
fn test_missing_inner_template_is_an_error() -> Result<()> {
    let renderer = renderer_with(&[("container", r#"{{ "ghost" | cache_replace_key }}"#)])?;

    let err = renderer
        .render_cached("container", CacheOptions::new().replace("ghost"))
        .unwrap_err();
    assert!(err.to_string().contains("'ghost'"));
    Ok(())
}

#[test]
fn test_html_template_needs_safe_when_autoescaping() -> Result<()> {
    let renderer = renderer_with(&[
        ("escaped.html", r#"<div>{{ "inner" | cache_replace_key }}</div>"#),
        ("safe.html", r#"<div>{{ "inner" | cache_replace_key | safe }}</div>"#),
        ("inner", "ok"),
    ])?;

    let escaped = renderer.render_cached("escaped.html", CacheOptions::new().replace("inner"))?;
    assert_eq!(escaped, "<div>&lt;cr inner&gt;</div>");

    let safe = renderer.render_cached("safe.html", CacheOptions::new().replace("inner"))?;
    assert_eq!(safe, "<div>ok</div>");
    Ok(())
}
