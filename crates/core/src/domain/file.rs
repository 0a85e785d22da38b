// Filesystem Result Models

use serde::{Deserialize, Serialize};

use crate::error::{HostIoError, Result};

/// Classification of a filesystem path.
///
/// Decided by two checks in fixed priority: regular-file first,
/// directory second, everything else (symlinks, devices, sockets,
/// FIFOs) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathKind {
    File,
    Directory,
    Other,
}

impl PathKind {
    /// Classify a native file type. The file check runs strictly before
    /// the directory check.
    pub fn from_file_type(file_type: &std::fs::FileType) -> Self {
        if file_type.is_file() {
            PathKind::File
        } else if file_type.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathKind::File => write!(f, "FILE"),
            PathKind::Directory => write!(f, "DIRECTORY"),
            PathKind::Other => write!(f, "OTHER"),
        }
    }
}

/// Text encoding accepted by the read operation. Exactly one may be
/// supplied per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Parse an encoding label as the embedding runtime supplies it.
    ///
    /// # Errors
    /// - `HostIoError::UnknownEncoding` for any unrecognized label
    pub fn parse(label: &str) -> Result<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "iso-8859-1" | "binary" => Ok(TextEncoding::Latin1),
            _ => Err(HostIoError::UnknownEncoding(label.to_string())),
        }
    }

    /// Decode raw bytes with this encoding. UTF-8 decoding is lossy
    /// (invalid sequences become U+FFFD); Latin-1 maps each byte to the
    /// matching code point and cannot fail.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Options for a file read. `Default` reads raw bytes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReadOptions {
    pub encoding: Option<TextEncoding>,
}

impl ReadOptions {
    pub fn text(encoding: TextEncoding) -> Self {
        Self {
            encoding: Some(encoding),
        }
    }
}

/// Contents of a read file: raw bytes when no encoding was given,
/// decoded text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContents {
    Bytes(Vec<u8>),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_type_classification_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("plain.txt");
        let mut f = std::fs::File::create(&file_path).unwrap();
        f.write_all(b"x").unwrap();

        let file_type = std::fs::symlink_metadata(&file_path).unwrap().file_type();
        assert_eq!(PathKind::from_file_type(&file_type), PathKind::File);

        let dir_type = std::fs::symlink_metadata(dir.path()).unwrap().file_type();
        assert_eq!(PathKind::from_file_type(&dir_type), PathKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_classifies_as_other() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target.txt");
        std::fs::write(&target, b"x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let file_type = std::fs::symlink_metadata(&link).unwrap().file_type();
        assert_eq!(PathKind::from_file_type(&file_type), PathKind::Other);
    }

    #[test]
    fn test_encoding_label_parsing() {
        assert_eq!(TextEncoding::parse("utf8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::parse("UTF-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(
            TextEncoding::parse("latin1").unwrap(),
            TextEncoding::Latin1
        );
        assert_eq!(
            TextEncoding::parse("ISO-8859-1").unwrap(),
            TextEncoding::Latin1
        );

        let err = TextEncoding::parse("utf-99").unwrap_err();
        assert!(matches!(err, HostIoError::UnknownEncoding(_)));
        assert!(err.to_string().contains("utf-99"));
    }

    #[test]
    fn test_utf8_decode_is_lossy() {
        let bytes = [b'h', b'i', 0xFF, b'!'];
        let text = TextEncoding::Utf8.decode(&bytes);
        assert_eq!(text, "hi\u{FFFD}!");
    }

    #[test]
    fn test_latin1_decode_maps_bytes_to_code_points() {
        let bytes = [0x63, 0x61, 0x66, 0xE9]; // "café" in Latin-1
        assert_eq!(TextEncoding::Latin1.decode(&bytes), "café");
    }

    #[test]
    fn test_path_kind_display() {
        assert_eq!(PathKind::File.to_string(), "FILE");
        assert_eq!(PathKind::Directory.to_string(), "DIRECTORY");
        assert_eq!(PathKind::Other.to_string(), "OTHER");
    }
}
