//! JSON file plumbing shared by the commands.

use std::fmt::Display;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads JSON from `path`, or from stdin when `path` is `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| FileError::Read {
                path: path.to_owned(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_owned(),
            source,
        })?
    };
    serde_json::from_str(&text).map_err(|source| FileError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Writes pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<(), FileError> {
    let write_err = |source: io::Error| FileError::Write {
        path: path.map_or_else(|| PathBuf::from("-"), Path::to_owned),
        source,
    };
    let mut text = serde_json::to_string_pretty(value).map_err(|e| write_err(e.into()))?;
    text.push('\n');
    match path {
        Some(path) => fs::write(path, text).map_err(write_err),
        None => io::stdout().lock().write_all(text.as_bytes()).map_err(write_err),
    }
}

/// Parsed document for a records file whose first record came from `filename`.
pub fn document_path(documents: &Path, filename: &str) -> PathBuf {
    let stem = Path::new(filename)
        .file_stem()
        .map_or_else(|| filename.to_owned(), |s| s.to_string_lossy().into_owned());
    documents.join(format!("{stem}.json"))
}

/// Unwraps or reports the error the way every command does: on stderr, exit 1.
pub fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
