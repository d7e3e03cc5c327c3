//! Filename handling for uploads.

use std::path::Path;

/// Picks the `filename` sent to `files.getUploadURLExternal`.
///
/// - No (or empty) provided name: the base name of `file_path`.
/// - Provided name without an extension: the extension of `file_path` is
///   appended.
/// - Otherwise the provided name is used as-is.
pub fn resolve_upload_filename(provided: Option<&str>, file_path: &Path) -> String {
    let Some(provided) = provided.filter(|name| !name.is_empty()) else {
        return base_name(file_path);
    };

    if has_extension(Path::new(provided)) {
        return provided.to_string();
    }

    match extension(file_path) {
        Some(ext) => format!("{provided}.{ext}"),
        None => provided.to_string(),
    }
}

/// Display-only name and type for a file; never sent to Slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMetadata {
    pub name: String,
    pub file_type: Option<String>,
}

impl DisplayMetadata {
    pub fn derive(
        provided_name: Option<&str>,
        provided_type: Option<&str>,
        file_path: &Path,
    ) -> Self {
        let name = provided_name
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                file_path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        let file_type = provided_type
            .filter(|ty| !ty.is_empty())
            .map(str::to_string)
            .or_else(|| extension(file_path).map(str::to_string));

        Self { name, file_type }
    }
}

fn base_name(file_path: &Path) -> String {
    file_path.file_name().map_or_else(
        || file_path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn extension(path: &Path) -> Option<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

fn has_extension(path: &Path) -> bool {
    extension(path).is_some()
}
