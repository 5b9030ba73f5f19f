use std::path::PathBuf;
use anyhow::Result;

/// Returns the application data directory.
/// Uses `dirs::data_dir()` + "tutor" (e.g., %APPDATA%/tutor or ~/.local/share/tutor).
/// Creates the directory if it doesn't exist.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    let path = base.join("tutor");

    if !path.exists() {
        std::fs::create_dir_all(&path)?;
    }

    Ok(path)
}
