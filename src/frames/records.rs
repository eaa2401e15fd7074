//! Frame Record Definition
//!
//! The structured result of decoding one frame body. Binary payloads are
//! kept as opaque byte sequences and never reinterpreted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub enum FrameRecord {
    /// Text-information frame: one encoded string to end of frame
    Text { text: String },
    /// Comment frame: language code plus descriptor and body text
    Comment {
        language: String,
        descriptor: String,
        text: String,
    },
    /// Unsynchronized lyrics frame: same layout as a comment
    Lyrics {
        language: String,
        descriptor: String,
        text: String,
    },
    /// Attached picture frame
    Picture {
        mime_type: String,
        picture_type: u8,
        description: String,
        data: Vec<u8>,
    },
    /// General encapsulated object frame
    Object {
        mime_type: String,
        description: String,
        filename: String,
        data: Vec<u8>,
    },
    /// Music CD identifier frame: the whole body, unstructured
    CdIdentifier { data: Vec<u8> },
    /// Private frame: owner identifier plus opaque payload
    Private { owner: String, data: Vec<u8> },
}

impl FrameRecord {
    /// Length of the opaque payload, for records that carry one
    pub fn payload_len(&self) -> Option<usize> {
        match self {
            Self::Picture { data, .. }
            | Self::Object { data, .. }
            | Self::CdIdentifier { data }
            | Self::Private { data, .. } => Some(data.len()),
            Self::Text { .. } | Self::Comment { .. } | Self::Lyrics { .. } => None,
        }
    }
}
