//! Whole-document JSON load/save.
//!
//! A missing file loads as an empty document. Saving overwrites the file in
//! place with 4-space indentation; non-ASCII text is written literally.
//! There is no temp-file-and-rename step, so a crash mid-write can truncate
//! the document.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RepositoryError;

const INDENT: &[u8] = b"    ";

/// Load and parse the document at `path`.
///
/// # Errors
///
/// Returns `RepositoryError::Json` if the file exists but is not valid JSON
/// for `T`, and `RepositoryError::Io` for read failures other than not-found.
pub async fn load<T>(path: &Path) -> Result<T, RepositoryError>
where
    T: DeserializeOwned + Default,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "document missing, starting empty");
            Ok(T::default())
        }
        Err(source) => Err(RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serialize `data` and overwrite the document at `path`.
///
/// Creates the parent directory if it does not exist yet.
///
/// # Errors
///
/// Returns `RepositoryError::Io` if the directory or file cannot be written.
pub async fn save<T>(path: &Path, data: &T) -> Result<(), RepositoryError>
where
    T: Serialize + ?Sized,
{
    let bytes = to_pretty_json(data).map_err(|source| RepositoryError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| RepositoryError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn to_pretty_json<T>(data: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    Ok(buf)
}
