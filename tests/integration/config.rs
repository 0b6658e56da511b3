//! Integration tests for host configuration files.

use anyhow::Result;
use cache_rocket::config::HostConfig;
use cache_rocket::core::CacheRocketError;
use cache_rocket::rendering::{CacheOptions, CachedRenderer, TeraHost};
use std::fs;
use tempfile::TempDir;

fn write_templates(dir: &TempDir) -> Result<()> {
    let templates = dir.path().join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(
        templates.join("container.html"),
        r#"Fanny pack {{ "inner.html" | cache_replace_key }} viral mustache."#,
    )?;
    fs::write(templates.join("inner.html"), "{{ adjective }} hoodie")?;
    Ok(())
}

fn write_config(dir: &TempDir, body: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("rocket.toml");
    fs::write(&path, body)?;
    Ok(path)
}

#[test]
fn test_host_from_config_file() -> Result<()> {
    let temp = TempDir::new()?;
    write_templates(&temp)?;
    let glob = temp.path().join("templates").join("**").join("*");
    let config_path = write_config(
        &temp,
        &format!("templates = {:?}\nautoescape = false\n", glob.to_string_lossy()),
    )?;

    let config = HostConfig::load(&config_path)?;
    assert!(!config.autoescape);

    let renderer = CachedRenderer::new(TeraHost::from_config(&config)?);
    let output = renderer.render_cached(
        "container.html",
        CacheOptions::new().option("adjective", "quinoa").replace("inner.html"),
    )?;
    assert_eq!(output, "Fanny pack quinoa hoodie viral mustache.");
    Ok(())
}

#[test]
fn test_autoescape_default_escapes_markers_in_html() -> Result<()> {
    let temp = TempDir::new()?;
    write_templates(&temp)?;
    let glob = temp.path().join("templates").join("**").join("*");
    let config_path = write_config(&temp, &format!("templates = {:?}\n", glob.to_string_lossy()))?;

    let config = HostConfig::load(&config_path)?;
    assert!(config.autoescape);

    let renderer = CachedRenderer::new(TeraHost::from_config(&config)?);
    let output = renderer.render_cached("container.html", CacheOptions::new())?;
    assert_eq!(output, "Fanny pack &lt;cr inner.html&gt; viral mustache.");
    Ok(())
}

#[test]
fn test_empty_config_builds_empty_host() -> Result<()> {
    let temp = TempDir::new()?;
    let config_path = write_config(&temp, "")?;

    let host = TeraHost::from_config(&HostConfig::load(&config_path)?)?;
    assert_eq!(host.tera().get_template_names().count(), 0);
    Ok(())
}

#[test]
fn test_invalid_config_reports_path() -> Result<()> {
    let temp = TempDir::new()?;
    let config_path = write_config(&temp, "autoescape = \"sometimes\"")?;

    let err = HostConfig::load(&config_path).unwrap_err();
    match err.downcast_ref::<CacheRocketError>() {
        Some(CacheRocketError::Config {
            path,
            ..
        }) => assert_eq!(path, &config_path),
        other => panic!("expected config error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_broken_template_fails_host_construction() -> Result<()> {
    let temp = TempDir::new()?;
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(templates.join("broken.html"), "{% if %}")?;
    let glob = templates.join("*");

    let config = HostConfig {
        templates: Some(glob.to_string_lossy().into_owned()),
        autoescape: true,
    };
    let err = TeraHost::from_config(&config).err().expect("broken template should fail");
    assert!(err.to_string().contains("Failed to load templates"));
    Ok(())
}
