use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Saves a fitted model to a file atomically.
///
/// Writes to a temporary file first and then renames it to the target
/// path, so a crash mid-save never leaves a truncated model behind.
///
/// # Arguments
///
/// * `path` - The target file path.
/// * `model` - The model to serialize and save.
///
/// # Returns
///
/// * `Ok(())` on success.
/// * `Err` on serialization or IO failure.
pub fn save_model<T: Serialize>(path: &Path, model: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create parent directory")?;
        }
    }

    let json = serde_json::to_string_pretty(model).context("Failed to serialize model")?;

    // Temporary file in the same directory to ensure atomic move support.
    let temp_path = path.with_extension("tmp");
    let mut temp_file =
        std::fs::File::create(&temp_path).context("Failed to create temp file")?;

    temp_file
        .write_all(json.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.sync_all().context("Failed to sync temp file")?;

    std::fs::rename(&temp_path, path).context("Failed to rename temp file to target")?;

    Ok(())
}

/// Loads a fitted model from a file.
///
/// # Returns
///
/// * `Ok(T)` containing the deserialized model.
/// * `Err` if the file doesn't exist, cannot be read, or deserialization
///   fails.
pub fn load_model<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open model file {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    let model = serde_json::from_reader(reader).context("Failed to deserialize model")?;
    Ok(model)
}
