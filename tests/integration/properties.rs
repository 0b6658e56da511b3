//! Substitution properties checked over a spread of inputs.

use anyhow::Result;
use cache_rocket::key::{cache_replace_key, extract_keys};
use cache_rocket::rendering::{CacheOptions, CachedRenderer, RenderOptions, ReplaceMap};

const KEYS: &[&str] = &["a", "inner", "some/thing", "with space", "dog_1", "ü"];

#[test]
fn test_marker_ends_with_close_and_round_trips_through_scan() {
    for key in KEYS {
        let token = cache_replace_key(key);
        assert!(token.ends_with('>'), "{token}");
        assert_eq!(extract_keys(&token), vec![key.to_string()]);
    }
}

#[test]
fn test_every_occurrence_replaced() -> Result<()> {
    for key in KEYS {
        for count in 1..=4 {
            let outer = vec![cache_replace_key(key); count].join("|");
            let renderer = CachedRenderer::from_fn(move |_name, _options| Ok(outer.clone()));

            let map = ReplaceMap::new().literal(*key, "R");
            let output = renderer.render_cached("outer", CacheOptions::new().replace(map))?;

            assert_eq!(output, vec!["R"; count].join("|"));
            assert!(!output.contains(&cache_replace_key(key)));
        }
    }
    Ok(())
}

#[test]
fn test_unmatched_entries_leave_output_unchanged() -> Result<()> {
    let outer = format!("static {} text", cache_replace_key("kept"));
    let expected = outer.clone();
    let renderer = CachedRenderer::from_fn(move |_name, _options| Ok(outer.clone()));

    for key in KEYS {
        let map = ReplaceMap::new().literal(*key, "unused");
        assert_eq!(renderer.render_cached("outer", CacheOptions::new().replace(map))?, expected);
    }
    Ok(())
}

#[test]
fn test_collection_concatenates_in_order() -> Result<()> {
    let renderer =
        CachedRenderer::from_fn(|_name, _options| Ok(format!("<{}>", cache_replace_key("v"))));
    let render = |items: Vec<&'static str>| {
        let options = CacheOptions::with_collection(items)
            .replace(ReplaceMap::new().computed("v", |v: Option<&&str>| v.map(|v| v.to_string())));
        renderer.render_cached("row", options)
    };

    let a = render(vec!["a"])?;
    let b = render(vec!["b"])?;
    assert_eq!(render(vec!["a", "b"])?, format!("{a}{b}"));
    assert_eq!(render(vec![])?, "");
    Ok(())
}

#[test]
fn test_closure_host_sees_forwarded_options() -> Result<()> {
    let renderer = CachedRenderer::from_fn(|name, options: &RenderOptions| {
        let locale = options.get("locale").and_then(|v| v.as_str()).unwrap_or("none");
        Ok(match name {
            "outer" => format!("{locale}:{}", cache_replace_key("inner")),
            _ => format!("inner-{locale}"),
        })
    });

    let output = renderer
        .render_cached("outer", CacheOptions::new().option("locale", "fr").replace("inner"))?;
    assert_eq!(output, "fr:inner-fr");
    Ok(())
}
