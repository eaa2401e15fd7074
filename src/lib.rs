pub mod errors;
pub mod frame_header;
pub mod frames;
pub mod handler;
pub mod header;
pub mod strings;
pub mod utils;
pub mod walker;

pub use errors::*;
pub use frame_header::*;
pub use frames::*;
pub use handler::*;
pub use header::*;
pub use strings::*;
pub use walker::*;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One frame as collected from the event stream: the parsed header fields
/// plus the decoded record, or `None` when the frame could not be decoded
/// (unknown type or unsupported encoding).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Frame {
    pub frame_type: String,
    pub size: u32,
    pub flags: u16,
    pub record: Option<FrameRecord>,
}

/// A fully parsed tag, for callers that want a value instead of events
///
/// Assembled by an internal collecting handler over the same walk the
/// event-driven API performs.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Id3Tag {
    pub path: String,
    pub header: TagHeader,
    pub frames: Vec<Frame>,
}

impl Id3Tag {
    /// Parse the tag of the file at `path`
    pub fn from_path(path: &str) -> Id3Result<Self> {
        let mut collector = TagCollector::default();
        TagWalker::parse_path(path, &mut collector)?;
        collector.into_tag(path)
    }

    /// Parse a tag from an in-memory buffer; `path` labels diagnostics
    pub fn from_bytes(path: &str, data: Bytes) -> Id3Result<Self> {
        let mut collector = TagCollector::default();
        TagWalker::parse_bytes(path, data, &mut collector)?;
        collector.into_tag(path)
    }

    /// The first text record with the given frame type, if any
    pub fn text(&self, frame_type: &str) -> Option<&str> {
        self.frames
            .iter()
            .find(|frame| frame.frame_type == frame_type)
            .and_then(|frame| match &frame.record {
                Some(FrameRecord::Text { text }) => Some(text.as_str()),
                _ => None,
            })
    }

    pub fn has_picture(&self) -> bool {
        for frame in &self.frames {
            if let Some(FrameRecord::Picture { .. }) = frame.record {
                return true;
            }
        }
        false
    }
}

/// Handler that accumulates the event stream into an [`Id3Tag`]
#[derive(Debug, Default)]
struct TagCollector {
    header: Option<TagHeader>,
    frames: Vec<Frame>,
}

impl Id3Handler for TagCollector {
    fn on_tag_header(&mut self, header: &TagHeader) {
        self.header = Some(header.clone());
    }

    fn on_frame_header(&mut self, header: &FrameHeader) {
        self.frames.push(Frame {
            frame_type: header.type_code(),
            size: header.frame_size,
            flags: header.frame_flags,
            record: None,
        });
    }

    fn on_frame(&mut self, _frame_type: &str, record: &FrameRecord) {
        if let Some(frame) = self.frames.last_mut() {
            frame.record = Some(record.clone());
        }
    }
}

impl TagCollector {
    fn into_tag(self, path: &str) -> Id3Result<Id3Tag> {
        // The walk returns an error before a missing header can reach here;
        // the fallback keeps this path panic-free anyway.
        let header = self.header.ok_or(Id3Error::ShortTagHeader { available: 0 })?;

        Ok(Id3Tag {
            path: path.to_string(),
            header,
            frames: self.frames,
        })
    }
}
