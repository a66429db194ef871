use thiserror::Error;

const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidFilename {
    pub name: String,
    pub extension: String,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FilenameError {
    #[error("filename is empty")]
    Empty,
    #[error("filename contains forbidden character {0:?}")]
    ForbiddenChar(char),
    #[error("filename must not start with '-'")]
    LeadingHyphen,
    #[error("\"{0}\" is a reserved name")]
    Reserved(String),
    #[error("filename must not start or end with whitespace")]
    SurroundingWhitespace,
    #[error("filename has no extension (expected .pdf)")]
    MissingExtension,
    #[error("unsupported extension \".{0}\" (expected .pdf)")]
    UnsupportedExtension(String),
}

/// Checks a proposed document filename.
///
/// Rules apply in a fixed order, so the reported reason is always the first
/// one that fails. The extension is the text after the last `.` and must
/// match exactly.
pub fn validate(name: &str) -> Result<ValidFilename, FilenameError> {
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(FilenameError::ForbiddenChar(c));
    }

    if name.starts_with('-') {
        return Err(FilenameError::LeadingHyphen);
    }

    if name == "." || name == ".." {
        return Err(FilenameError::Reserved(name.to_string()));
    }

    if name.trim() != name {
        return Err(FilenameError::SurroundingWhitespace);
    }

    let extension = match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => return Err(FilenameError::MissingExtension),
    };

    if !SUPPORTED_EXTENSIONS.contains(&extension) {
        return Err(FilenameError::UnsupportedExtension(extension.to_string()));
    }

    Ok(ValidFilename {
        name: name.to_string(),
        extension: extension.to_string(),
    })
}
