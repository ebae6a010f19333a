//! Helpers for loading GraphQL documents and JSON variable files from disk.

use crate::operation::ExecutableDocument;
use crate::operation::OperationBuildError;
use crate::Variables;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read a UTF-8 text file into a `String`.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

/// Read and parse an executable GraphQL document.
pub fn read_executable_document<P: AsRef<Path>>(
    file_path: P,
) -> Result<ExecutableDocument> {
    let file_path = file_path.as_ref();
    let content = read_content(file_path)?;
    ExecutableDocument::from_str(content.as_str())
        .map_err(|err| ReadContentError::InvalidDocument {
            file_path: file_path.to_path_buf(),
            err,
        })
}

/// Read a JSON object of variable bindings, e.g.
/// `{"input": {"id": 1, "name": "Marta"}}`.
pub fn read_variables<P: AsRef<Path>>(file_path: P) -> Result<Variables> {
    let file_path = file_path.as_ref();
    let content = read_content(file_path)?;
    serde_json::from_str(content.as_str())
        .map_err(|err| ReadContentError::InvalidVariables {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid UTF-8")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Invalid GraphQL document at {file_path:?}: {err}")]
    InvalidDocument {
        file_path: PathBuf,
        err: OperationBuildError,
    },

    #[error("Invalid variables JSON at {file_path:?}: {err}")]
    InvalidVariables {
        file_path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
