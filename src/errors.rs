use std::fmt;
use thiserror::Error;

/// Error type for ID3v2.3 tag decoding
///
/// Covers every failure the decoder can report: file access problems,
/// structural damage to the tag or a frame header, unsupported tag versions,
/// unsupported text encodings inside a frame body, and frame types absent
/// from the registry. Each error carries enough context to locate the fault
/// and a machine-readable code for programmatic handling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Id3Error {
    // ========== I/O ERRORS (1000-1099) ==========
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        io_kind: Option<std::io::ErrorKind>,
    },

    /// Error reading file contents
    #[error("Failed to read file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    /// Permission denied when accessing file
    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: String },

    // ========== STRUCTURAL ERRORS (2000-2099) ==========
    /// Fewer than 10 bytes available for the tag header
    #[error("Short tag header: got {available} bytes, need 10")]
    ShortTagHeader { available: usize },

    /// The first three bytes are not "ID3"
    #[error("Bad tag identifier: expected \"ID3\", found {found:02X?}")]
    BadIdentifier { found: [u8; 3] },

    /// Version or revision byte is the reserved value 255
    #[error("Invalid tag version bytes: major {major}, revision {revision}")]
    InvalidVersionBytes { major: u8, revision: u8 },

    /// A synchsafe size byte has its high bit set
    #[error("Invalid size byte 0x{value:02X} at size index {index}: high bit must be clear")]
    InvalidSizeByte { index: usize, value: u8 },

    /// Fewer than 10 bytes available for a frame header
    #[error("Short frame header at offset {offset}: got {available} bytes, need 10")]
    ShortFrameHeader { offset: usize, available: usize },

    /// Frame body ends before its fixed leading fields
    #[error("Short {frame_type} frame body: needed {needed} bytes, only {available} available")]
    ShortFrameBody {
        frame_type: String,
        needed: usize,
        available: usize,
    },

    // ========== VERSION ERRORS (3000-3099) ==========
    /// Tag major version is not 3; frame iteration is skipped
    #[error("Unsupported ID3v2 major version {major}: only version 3 is decoded")]
    UnsupportedVersion { major: u8 },

    // ========== ENCODING ERRORS (4000-4099) ==========
    /// Encoding byte is neither 0 (single-byte) nor 1 (two-byte)
    #[error("Unsupported encoding 0x{encoding:02X} in {frame_type} frame")]
    UnsupportedEncoding { frame_type: String, encoding: u8 },

    // ========== FRAME TYPE WARNINGS (5000-5099) ==========
    /// Frame type has no registry entry; raw bytes are still surfaced
    #[error("Unknown frame type {frame_type} ({size} bytes)")]
    UnknownFrameType { frame_type: String, size: u32 },
}

impl Id3Error {
    /// Get the error code for machine-readable processing
    pub fn code(&self) -> u16 {
        match self {
            // I/O Errors (1000-1099)
            Self::FileNotFound { .. } => 1001,
            Self::FileReadError { .. } => 1002,
            Self::PermissionDenied { .. } => 1003,

            // Structural Errors (2000-2099)
            Self::ShortTagHeader { .. } => 2001,
            Self::BadIdentifier { .. } => 2002,
            Self::InvalidVersionBytes { .. } => 2003,
            Self::InvalidSizeByte { .. } => 2004,
            Self::ShortFrameHeader { .. } => 2005,
            Self::ShortFrameBody { .. } => 2006,

            // Version Errors (3000-3099)
            Self::UnsupportedVersion { .. } => 3001,

            // Encoding Errors (4000-4099)
            Self::UnsupportedEncoding { .. } => 4001,

            // Frame Type Warnings (5000-5099)
            Self::UnknownFrameType { .. } => 5001,
        }
    }

    /// Get the error category for grouping related errors
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            1000..=1099 => ErrorCategory::Io,
            2000..=2099 => ErrorCategory::Structural,
            3000..=3099 => ErrorCategory::UnsupportedVersion,
            4000..=4099 => ErrorCategory::UnsupportedEncoding,
            5000..=5099 => ErrorCategory::UnknownFrame,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Check if frame iteration can continue past this error
    ///
    /// Structural damage and unsupported versions end the current file.
    /// An unsupported encoding or unknown frame type is scoped to a single
    /// frame; the walker reports it and moves to the next frame.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedEncoding { .. } | Self::UnknownFrameType { .. }
        )
    }
}

/// Error categories for grouping related error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Io,
    Structural,
    UnsupportedVersion,
    UnsupportedEncoding,
    UnknownFrame,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O"),
            Self::Structural => write!(f, "Structural"),
            Self::UnsupportedVersion => write!(f, "Unsupported Version"),
            Self::UnsupportedEncoding => write!(f, "Unsupported Encoding"),
            Self::UnknownFrame => write!(f, "Unknown Frame"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result type alias for tag decoding operations
pub type Id3Result<T> = Result<T, Id3Error>;

// Implement From traits for common error conversions
impl From<std::io::Error> for Id3Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Id3Error::FileNotFound {
                path: "unknown".to_string(),
                io_kind: Some(err.kind()),
            },
            std::io::ErrorKind::PermissionDenied => Id3Error::PermissionDenied {
                path: "unknown".to_string(),
            },
            _ => Id3Error::FileReadError {
                path: "unknown".to_string(),
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors = vec![
            Id3Error::FileNotFound {
                path: "test".to_string(),
                io_kind: None,
            },
            Id3Error::FileReadError {
                path: "test".to_string(),
                reason: "test".to_string(),
            },
            Id3Error::PermissionDenied {
                path: "test".to_string(),
            },
            Id3Error::ShortTagHeader { available: 0 },
            Id3Error::BadIdentifier { found: [0; 3] },
            Id3Error::InvalidVersionBytes {
                major: 255,
                revision: 0,
            },
            Id3Error::InvalidSizeByte {
                index: 0,
                value: 0x80,
            },
            Id3Error::ShortFrameHeader {
                offset: 0,
                available: 0,
            },
            Id3Error::ShortFrameBody {
                frame_type: "TIT2".to_string(),
                needed: 1,
                available: 0,
            },
            Id3Error::UnsupportedVersion { major: 4 },
            Id3Error::UnsupportedEncoding {
                frame_type: "TIT2".to_string(),
                encoding: 2,
            },
            Id3Error::UnknownFrameType {
                frame_type: "ZZZZ".to_string(),
                size: 5,
            },
        ];

        for error in errors {
            let code = error.code();
            assert!(codes.insert(code), "Duplicate error code: {}", code);
        }

        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn test_error_categories() {
        let not_found = Id3Error::FileNotFound {
            path: "test".to_string(),
            io_kind: None,
        };
        assert_eq!(not_found.category(), ErrorCategory::Io);
        assert_eq!(not_found.code(), 1001);

        let bad_identifier = Id3Error::BadIdentifier { found: *b"ID2" };
        assert_eq!(bad_identifier.category(), ErrorCategory::Structural);
        assert_eq!(bad_identifier.code(), 2002);

        let unknown_frame = Id3Error::UnknownFrameType {
            frame_type: "ZZZZ".to_string(),
            size: 5,
        };
        assert_eq!(unknown_frame.category(), ErrorCategory::UnknownFrame);
        assert_eq!(unknown_frame.code(), 5001);
    }

    #[test]
    fn test_error_recoverability() {
        let unknown_frame = Id3Error::UnknownFrameType {
            frame_type: "ZZZZ".to_string(),
            size: 5,
        };
        assert!(unknown_frame.is_recoverable());

        let bad_encoding = Id3Error::UnsupportedEncoding {
            frame_type: "COMM".to_string(),
            encoding: 3,
        };
        assert!(bad_encoding.is_recoverable());

        let short_header = Id3Error::ShortTagHeader { available: 4 };
        assert!(!short_header.is_recoverable());

        let wrong_version = Id3Error::UnsupportedVersion { major: 4 };
        assert!(!wrong_version.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let size_error = Id3Error::InvalidSizeByte {
            index: 2,
            value: 0xFF,
        };
        let display_text = format!("{}", size_error);
        assert!(display_text.contains("0xFF"));
        assert!(display_text.contains("index 2"));

        let version_error = Id3Error::UnsupportedVersion { major: 4 };
        let display_text = format!("{}", version_error);
        assert!(display_text.contains("version 4"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let id3_error = Id3Error::from(io_error);

        match id3_error {
            Id3Error::FileNotFound { path, io_kind } => {
                assert_eq!(path, "unknown");
                assert_eq!(io_kind, Some(std::io::ErrorKind::NotFound));
            }
            _ => panic!("Expected FileNotFound error"),
        }

        let permission_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let id3_error = Id3Error::from(permission_error);

        match id3_error {
            Id3Error::PermissionDenied { path } => {
                assert_eq!(path, "unknown");
            }
            _ => panic!("Expected PermissionDenied error"),
        }
    }

    #[test]
    fn test_id3_result_type_alias() {
        fn ok_function() -> Id3Result<u32> {
            Ok(257)
        }

        fn err_function() -> Id3Result<u32> {
            Err(Id3Error::ShortTagHeader { available: 3 })
        }

        assert!(ok_function().is_ok());
        assert!(err_function().is_err());
    }
}
