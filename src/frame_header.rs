use byteorder::{BigEndian, ByteOrder};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Id3Error, Id3Result},
    strings::decode_latin1,
    utils::FRAME_HEADER_LEN,
};

/// Fixed 10-byte structural header preceding every frame
///
/// The type code is used verbatim as the registry dispatch key. The size
/// counts only the body that follows. The flags are carried through to
/// handlers but not interpreted by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHeader {
    pub frame_type: [u8; 4],
    pub frame_size: u32,
    pub frame_flags: u16,
}

impl FrameHeader {
    /// Parse the 10 bytes at `offset` (offset is error context only)
    pub fn from_bytes(data: &[u8], offset: usize) -> Id3Result<Self> {
        if data.len() < FRAME_HEADER_LEN {
            return Err(Id3Error::ShortFrameHeader {
                offset,
                available: data.len(),
            });
        }

        Ok(FrameHeader {
            frame_type: [data[0], data[1], data[2], data[3]],
            frame_size: BigEndian::read_u32(&data[4..8]),
            frame_flags: BigEndian::read_u16(&data[8..10]),
        })
    }

    /// Four zero type bytes mark the start of tag padding
    pub fn is_padding(&self) -> bool {
        self.frame_type == [0u8; 4]
    }

    /// The type code as text, for dispatch and display
    pub fn type_code(&self) -> String {
        decode_latin1(&self.frame_type)
    }
}
