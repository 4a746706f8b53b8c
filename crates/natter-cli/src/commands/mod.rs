pub mod check;
pub mod demo;
pub mod play;

use std::path::Path;

use natter_core::Script;

/// Load and validate a script file.
fn load_script(path: &Path) -> Result<Script, String> {
    Script::load(path).map_err(|e| format!("{}: {e}", path.display()))
}
