pub mod check;
pub mod play;
pub mod sample;
pub mod validate;

use std::path::Path;

use gs_story::Content;

/// Load a content file, or the bundled sample when no path is given.
fn load_content(path: Option<&Path>) -> Result<Content, String> {
    match path {
        Some(path) => Content::from_path(path)
            .map_err(|e| format!("failed to load '{}': {e}", path.display())),
        None => Content::sample().map_err(|e| e.to_string()),
    }
}
