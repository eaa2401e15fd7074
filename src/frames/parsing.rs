//! Frame Body Parsing Module
//!
//! One decoder per frame shape. Every decoder receives the full raw body of
//! a single frame and returns a structured record; the byte accounting for
//! each field follows the layouts described on the registry entries.

use super::records::FrameRecord;
use crate::errors::{Id3Error, Id3Result};
use crate::strings::{decode_latin1, decode_terminated, decode_to_end, TextEncoding};

/// Read and validate the leading encoding byte of a frame body
fn read_encoding(frame_type: &str, data: &[u8]) -> Id3Result<TextEncoding> {
    let &byte = data.first().ok_or_else(|| Id3Error::ShortFrameBody {
        frame_type: frame_type.to_string(),
        needed: 1,
        available: 0,
    })?;

    TextEncoding::from_byte(byte).ok_or_else(|| Id3Error::UnsupportedEncoding {
        frame_type: frame_type.to_string(),
        encoding: byte,
    })
}

/// Text-information frame: encoding byte, then one string to end of frame
pub fn decode_text_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let encoding = read_encoding(frame_type, data)?;

    Ok(FrameRecord::Text {
        text: decode_to_end(encoding, &data[1..]),
    })
}

/// Shared layout of comment and lyrics frames: encoding byte, 3-byte
/// language code, terminated descriptor, then body text to end of frame.
/// The language is reported empty when its first byte is nul.
fn decode_language_text(frame_type: &str, data: &[u8]) -> Id3Result<(String, String, String)> {
    if data.len() < 4 {
        return Err(Id3Error::ShortFrameBody {
            frame_type: frame_type.to_string(),
            needed: 4,
            available: data.len(),
        });
    }
    let encoding = read_encoding(frame_type, data)?;

    let language = if data[1] == 0 {
        String::new()
    } else {
        decode_latin1(&data[1..4])
    };

    let (consumed, descriptor) = decode_terminated(encoding, &data[4..]);
    let text = decode_to_end(encoding, &data[4 + consumed..]);

    Ok((language, descriptor, text))
}

pub fn decode_comment_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let (language, descriptor, text) = decode_language_text(frame_type, data)?;
    Ok(FrameRecord::Comment {
        language,
        descriptor,
        text,
    })
}

pub fn decode_lyrics_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let (language, descriptor, text) = decode_language_text(frame_type, data)?;
    Ok(FrameRecord::Lyrics {
        language,
        descriptor,
        text,
    })
}

/// Attached picture frame: encoding byte, nul-terminated single-byte MIME
/// type, picture-type byte, terminated description in the frame's encoding,
/// then the opaque picture payload.
pub fn decode_picture_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let encoding = read_encoding(frame_type, data)?;

    let (mime_len, mime_type) = decode_terminated(TextEncoding::Latin1, &data[1..]);
    let type_index = 1 + mime_len;
    let &picture_type = data.get(type_index).ok_or_else(|| Id3Error::ShortFrameBody {
        frame_type: frame_type.to_string(),
        needed: type_index + 1,
        available: data.len(),
    })?;

    let (desc_len, description) = decode_terminated(encoding, &data[type_index + 1..]);
    let payload = data[type_index + 1 + desc_len..].to_vec();

    Ok(FrameRecord::Picture {
        mime_type,
        picture_type,
        description,
        data: payload,
    })
}

/// General encapsulated object frame: encoding byte, nul-terminated
/// single-byte MIME type, terminated description, terminated filename,
/// then the opaque payload.
pub fn decode_object_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let encoding = read_encoding(frame_type, data)?;

    let (mime_len, mime_type) = decode_terminated(TextEncoding::Latin1, &data[1..]);
    let desc_start = 1 + mime_len;
    let (desc_len, description) = decode_terminated(encoding, &data[desc_start..]);
    let name_start = desc_start + desc_len;
    let (name_len, filename) = decode_terminated(encoding, &data[name_start..]);
    let payload = data[name_start + name_len..].to_vec();

    Ok(FrameRecord::Object {
        mime_type,
        description,
        filename,
        data: payload,
    })
}

/// Music CD identifier frame: the whole body is opaque
pub fn decode_cd_identifier_frame(data: &[u8]) -> FrameRecord {
    FrameRecord::CdIdentifier {
        data: data.to_vec(),
    }
}

/// Private frame: nul-terminated single-byte owner identifier (never
/// encoding-selectable), then the opaque payload.
pub fn decode_private_frame(data: &[u8]) -> FrameRecord {
    let (owner_len, owner) = decode_terminated(TextEncoding::Latin1, data);

    FrameRecord::Private {
        owner,
        data: data[owner_len..].to_vec(),
    }
}
