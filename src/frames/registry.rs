//! Frame Type Registry
//!
//! Static lookup from 4-character frame type codes to body decoders, plus
//! human-readable display names for front-ends. Adding a frame shape means
//! adding a registry entry and a decoder; iteration logic never changes.

use phf::phf_map;

use super::parsing;
use super::records::FrameRecord;
use crate::errors::{Id3Error, Id3Result};

/// The decodable frame body shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Text,
    Comment,
    Lyrics,
    Picture,
    Object,
    CdIdentifier,
    Private,
}

/// Dispatch table from frame type code to body shape
pub static FRAME_REGISTRY: phf::Map<&'static str, FrameKind> = phf_map! {
    "APIC" => FrameKind::Picture,
    "COMM" => FrameKind::Comment,
    "GEOB" => FrameKind::Object,
    "MCDI" => FrameKind::CdIdentifier,
    "PRIV" => FrameKind::Private,
    "TALB" => FrameKind::Text,
    "TBPM" => FrameKind::Text,
    "TCOM" => FrameKind::Text,
    "TCON" => FrameKind::Text,
    "TCOP" => FrameKind::Text,
    "TENC" => FrameKind::Text,
    "TFLT" => FrameKind::Text,
    "TIT1" => FrameKind::Text,
    "TIT2" => FrameKind::Text,
    "TIT3" => FrameKind::Text,
    "TLEN" => FrameKind::Text,
    "TPE1" => FrameKind::Text,
    "TPE2" => FrameKind::Text,
    "TPE3" => FrameKind::Text,
    "TPOS" => FrameKind::Text,
    "TPUB" => FrameKind::Text,
    "TRCK" => FrameKind::Text,
    "TXXX" => FrameKind::Text,
    "TYER" => FrameKind::Text,
    "USLT" => FrameKind::Lyrics,
};

/// Display names for the text-information frames
static FRAME_TYPE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "TALB" => "Album/Movie/Show Title",
    "TBPM" => "BPM (beats per minute)",
    "TCOM" => "Composer",
    "TCON" => "Content type",
    "TCOP" => "Copyright message",
    "TENC" => "Encoded by",
    "TFLT" => "File type",
    "TIT1" => "Content group description",
    "TIT2" => "Title/songname/content description",
    "TIT3" => "Subtitle/Description refinement",
    "TLEN" => "Length",
    "TPE1" => "Lead performer(s)/Soloist(s)",
    "TPE2" => "Band/orchestra/accompaniment",
    "TPE3" => "Conductor/performer refinement",
    "TPOS" => "Part of set",
    "TPUB" => "Publisher",
    "TRCK" => "Track number/Position in set",
    "TXXX" => "User defined text information frame",
    "TYER" => "Year",
};

/// Look up the body shape for a type code
pub fn lookup(frame_type: &str) -> Option<FrameKind> {
    FRAME_REGISTRY.get(frame_type).copied()
}

/// Human-readable name for a text frame type code
pub fn frame_type_name(frame_type: &str) -> Option<&'static str> {
    FRAME_TYPE_NAMES.get(frame_type).copied()
}

/// Decode one frame body into a structured record
///
/// Unregistered types yield [`Id3Error::UnknownFrameType`]; the caller
/// still has the raw bytes and is expected to surface them.
pub fn decode_frame(frame_type: &str, data: &[u8]) -> Id3Result<FrameRecord> {
    let kind = lookup(frame_type).ok_or_else(|| Id3Error::UnknownFrameType {
        frame_type: frame_type.to_string(),
        size: data.len() as u32,
    })?;

    match kind {
        FrameKind::Text => parsing::decode_text_frame(frame_type, data),
        FrameKind::Comment => parsing::decode_comment_frame(frame_type, data),
        FrameKind::Lyrics => parsing::decode_lyrics_frame(frame_type, data),
        FrameKind::Picture => parsing::decode_picture_frame(frame_type, data),
        FrameKind::Object => parsing::decode_object_frame(frame_type, data),
        FrameKind::CdIdentifier => Ok(parsing::decode_cd_identifier_frame(data)),
        FrameKind::Private => Ok(parsing::decode_private_frame(data)),
    }
}
