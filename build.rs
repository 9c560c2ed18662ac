use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

fn hash_file(path: &Path) -> String {
    let content = fs::read(path).unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())[..8].to_string()
}

fn main() {
    // Re-run build script if relevant files change
    println!("cargo:rerun-if-changed=static/js/deck.js");
    println!("cargo:rerun-if-changed=static/css/deck.css");
    println!("cargo:rerun-if-changed=templates/");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let root = Path::new(&manifest_dir);

    // Hash static assets for cache busting
    let js_hash = hash_file(&root.join("static/js/deck.js"));
    let css_hash = hash_file(&root.join("static/css/deck.css"));

    // Write generated code to OUT_DIR
    let out_dir = std::env::var("OUT_DIR").unwrap();
    fs::write(
        Path::new(&out_dir).join("asset_hashes.rs"),
        format!(
            r#"/// Hash of deck.js for cache busting
pub const DECK_JS_HASH: &str = "{}";
/// Hash of deck.css for cache busting
pub const DECK_CSS_HASH: &str = "{}";"#,
            js_hash, css_hash
        ),
    )
    .unwrap();
}
