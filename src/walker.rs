//! Frame Iterator / Tag Walker
//!
//! Drives repeated frame-header and frame-body reads over one file's tag,
//! bounded by the declared tag extent, reporting every structural fact to an
//! [`Id3Handler`] as it is produced. The walker holds no state of its own;
//! per-file state lives in an explicit [`ParseContext`].

use bytes::Bytes;

use crate::errors::{Id3Error, Id3Result};
use crate::frame_header::FrameHeader;
use crate::frames::decode_frame;
use crate::handler::Id3Handler;
use crate::header::TagHeader;
use crate::utils::{FRAME_HEADER_LEN, TAG_HEADER_LEN};

/// Per-file transient parse state
///
/// Owned exclusively by one in-flight parse and never reused concurrently;
/// concurrent callers use one context per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// Path of the file being parsed, carried for diagnostics
    pub path: String,
    /// Current read offset from the start of the file
    pub offset: usize,
    /// Iteration bound: declared tag size plus the 10-byte tag header
    pub total_extent: usize,
}

impl ParseContext {
    pub fn new(path: &str) -> Self {
        ParseContext {
            path: path.to_string(),
            offset: 0,
            total_extent: 0,
        }
    }
}

/// Iteration state: walking frames, or finished with this file
enum WalkState {
    Iterating,
    Done,
}

/// Event-driven ID3v2.3 decoder
///
/// Terminal failures (structural damage, unsupported version, I/O) are
/// reported once through the handler's diagnostic channel and then returned,
/// so value-oriented callers observe them too. Per-frame failures (unknown
/// frame type, unsupported encoding) are reported and skipped; iteration
/// continues with the next frame.
pub struct TagWalker;

impl TagWalker {
    /// Parse the tag at the start of the file at `path`
    ///
    /// The file is read fully into memory up front, so the handle is
    /// released before any event fires.
    pub fn parse_path<H: Id3Handler>(path: &str, handler: &mut H) -> Id3Result<()> {
        handler.on_path(path);

        let file_data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Id3Error::FileNotFound {
                path: path.to_string(),
                io_kind: Some(e.kind()),
            },
            std::io::ErrorKind::PermissionDenied => Id3Error::PermissionDenied {
                path: path.to_string(),
            },
            _ => Id3Error::FileReadError {
                path: path.to_string(),
                reason: e.to_string(),
            },
        });

        let file_data = match file_data {
            Ok(file_data) => file_data,
            Err(error) => {
                handler.on_diagnostic(path, &error);
                return Err(error);
            }
        };

        Self::parse_tag(path, &Bytes::from(file_data), handler)
    }

    /// Parse a tag from an in-memory buffer
    ///
    /// `path` is a label used for the path event and diagnostics; synthetic
    /// buffers in tests pass whatever they like.
    pub fn parse_bytes<H: Id3Handler>(path: &str, data: Bytes, handler: &mut H) -> Id3Result<()> {
        handler.on_path(path);
        Self::parse_tag(path, &data, handler)
    }

    fn parse_tag<H: Id3Handler>(path: &str, data: &Bytes, handler: &mut H) -> Id3Result<()> {
        let mut ctx = ParseContext::new(path);

        let header_bytes = data.slice(..data.len().min(TAG_HEADER_LEN));
        handler.on_raw_tag_header(&header_bytes);

        let header = match TagHeader::from_bytes(&header_bytes) {
            Ok(header) => header,
            Err(error) => {
                handler.on_diagnostic(&ctx.path, &error);
                return Err(error);
            }
        };
        handler.on_tag_header(&header);

        if header.major_version != 3 {
            let error = Id3Error::UnsupportedVersion {
                major: header.major_version,
            };
            handler.on_diagnostic(&ctx.path, &error);
            return Err(error);
        }

        ctx.offset = TAG_HEADER_LEN;
        ctx.total_extent = header.total_extent();

        loop {
            match Self::parse_frame(&mut ctx, data, handler)? {
                WalkState::Iterating => continue,
                WalkState::Done => return Ok(()),
            }
        }
    }

    /// Read one frame, or decide to stop
    ///
    /// Halt conditions, checked in order: the next frame header would not
    /// fit inside the tag extent; the type field is all zero (padding); the
    /// declared frame size is zero. The raw-header event fires before the
    /// padding and zero-size checks, so a halting header is still surfaced.
    fn parse_frame<H: Id3Handler>(
        ctx: &mut ParseContext,
        data: &Bytes,
        handler: &mut H,
    ) -> Id3Result<WalkState> {
        if ctx.offset + FRAME_HEADER_LEN >= ctx.total_extent {
            return Ok(WalkState::Done);
        }

        let start = ctx.offset.min(data.len());
        let end = (ctx.offset + FRAME_HEADER_LEN).min(data.len());
        let header_bytes = data.slice(start..end);
        handler.on_raw_frame_header(&header_bytes);

        let frame_header = match FrameHeader::from_bytes(&header_bytes, ctx.offset) {
            Ok(frame_header) => frame_header,
            Err(error) => {
                handler.on_diagnostic(&ctx.path, &error);
                return Err(error);
            }
        };

        if frame_header.is_padding() {
            return Ok(WalkState::Done);
        }
        if frame_header.frame_size == 0 {
            return Ok(WalkState::Done);
        }

        handler.on_frame_header(&frame_header);

        let frame_type = frame_header.type_code();
        let body_start = (ctx.offset + FRAME_HEADER_LEN).min(data.len());
        // The body read is clamped by the buffer alone, never by the tag's
        // declared extent: the last frame may run past it. Only the
        // header-read boundary above is checked against the extent.
        let body_end =
            (ctx.offset + FRAME_HEADER_LEN + frame_header.frame_size as usize).min(data.len());
        let body = data.slice(body_start..body_end);
        handler.on_raw_frame(&frame_type, &body);

        match decode_frame(&frame_type, &body) {
            Ok(record) => handler.on_frame(&frame_type, &record),
            Err(error) => {
                handler.on_diagnostic(&ctx.path, &error);
                if !error.is_recoverable() {
                    return Err(error);
                }
            }
        }

        ctx.offset += FRAME_HEADER_LEN + frame_header.frame_size as usize;
        Ok(WalkState::Iterating)
    }
}
