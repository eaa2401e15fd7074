use serde::{Deserialize, Serialize};

/// Per-string text representation selector carried in frame bodies
///
/// Byte value 0 selects single-byte (Latin-1) text terminated by one 0x00
/// byte. Byte value 1 selects two-byte units, always read little-endian with
/// no byte-order-mark inspection, terminated by a 0x0000 unit. Any other
/// byte value is an unsupported encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    Latin1,
    Utf16,
}

impl TextEncoding {
    /// Map an encoding byte to its selector; `None` for unsupported values
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(TextEncoding::Latin1),
            1 => Some(TextEncoding::Utf16),
            _ => None,
        }
    }
}

/// Unpack one terminator-delimited string
///
/// Returns `(consumed, string)` where `consumed` counts the terminator:
/// content length + 1 for Latin-1, content length * 2 + 2 for two-byte text.
/// When no terminator is found before the buffer ends, the whole buffer is
/// consumed and the string is empty. That fallback is lossy by design, not
/// an error.
pub fn decode_terminated(encoding: TextEncoding, data: &[u8]) -> (usize, String) {
    match encoding {
        TextEncoding::Latin1 => match data.iter().position(|&b| b == 0) {
            Some(i) => (i + 1, decode_latin1(&data[..i])),
            None => (data.len(), String::new()),
        },
        TextEncoding::Utf16 => {
            let mut i = 0;
            while i + 1 < data.len() {
                if data[i] == 0 && data[i + 1] == 0 {
                    return (i + 2, decode_utf16_le(&data[..i]));
                }
                i += 2;
            }
            (data.len(), String::new())
        }
    }
}

/// Decode a string that runs to the end of its frame
///
/// No terminator is required; if one is present, the content stops there and
/// trailing bytes are ignored.
pub fn decode_to_end(encoding: TextEncoding, data: &[u8]) -> String {
    match encoding {
        TextEncoding::Latin1 => {
            let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
            decode_latin1(&data[..end])
        }
        TextEncoding::Utf16 => {
            let mut end = data.len();
            let mut i = 0;
            while i + 1 < data.len() {
                if data[i] == 0 && data[i + 1] == 0 {
                    end = i;
                    break;
                }
                i += 2;
            }
            decode_utf16_le(&data[..end])
        }
    }
}

/// Decode single-byte text; each byte maps to the code point of equal value
pub fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| b as char).collect()
}

/// Decode two-byte little-endian units; unpaired surrogates are replaced
pub fn decode_utf16_le(data: &[u8]) -> String {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16_lossy(&units)
}
