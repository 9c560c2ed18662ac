//! Askama template filters for asset management

// Include compile-time generated asset hashes
include!(concat!(env!("OUT_DIR"), "/asset_hashes.rs"));

/// Append cache-busting hash to static asset URLs.
///
/// Usage in templates:
/// ```html
/// <script src="{{ "/static/js/deck.js"|asset_url }}"></script>
/// ```
#[askama::filter_fn]
pub fn asset_url(path: impl std::fmt::Display, _: &dyn askama::Values) -> askama::Result<String> {
    let path_str = path.to_string();
    Ok(versioned(&path_str))
}

fn versioned(path: &str) -> String {
    match path {
        "/static/js/deck.js" => format!("{}?v={}", path, DECK_JS_HASH),
        "/static/css/deck.css" => format!("{}?v={}", path, DECK_CSS_HASH),
        _ => path.to_string(),
    }
}
