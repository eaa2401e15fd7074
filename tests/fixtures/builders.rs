//! ID3v2.3 Test Data Generators and Builders
//!
//! Builder pattern implementations for generating synthetic tag buffers,
//! including invalid and edge-case data, for walker tests.

use id3_parser::utils::encode_synchsafe;

/// Little-endian UTF-16 bytes for a str, without terminator
pub fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

/// Little-endian UTF-16 bytes for a str, with the 0x0000 terminator
pub fn utf16le_terminated(s: &str) -> Vec<u8> {
    let mut bytes = utf16le(s);
    bytes.extend_from_slice(&[0x00, 0x00]);
    bytes
}

/// Builder for one frame: 10-byte header plus body
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    frame_type: [u8; 4],
    flags: u16,
    body: Vec<u8>,
    declared_size: Option<u32>,
}

impl FrameBuilder {
    pub fn new(frame_type: &str) -> Self {
        let mut bytes = [0u8; 4];
        for (i, b) in frame_type.bytes().take(4).enumerate() {
            bytes[i] = b;
        }

        FrameBuilder {
            frame_type: bytes,
            flags: 0,
            body: Vec::new(),
            declared_size: None,
        }
    }

    /// Text-information frame: encoding byte plus encoded text
    ///
    /// Encoding 1 bodies get a 0x0000 terminator after the text, the way
    /// tag writers usually emit them; encoding 0 bodies are unterminated.
    pub fn text(frame_type: &str, encoding: u8, text: &str) -> Self {
        let mut body = vec![encoding];
        if encoding == 1 {
            body.extend_from_slice(&utf16le_terminated(text));
        } else {
            body.extend_from_slice(text.as_bytes());
        }

        Self::new(frame_type).body(body)
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Override the declared size; the body is still written as given
    pub fn declared_size(mut self, size: u32) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let size = self.declared_size.unwrap_or(self.body.len() as u32);

        let mut out = Vec::with_capacity(10 + self.body.len());
        out.extend_from_slice(&self.frame_type);
        out.extend_from_slice(&size.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}

/// Builder for whole tag buffers with ID3v2.3 defaults
#[derive(Debug, Clone)]
pub struct TagBuilder {
    identifier: [u8; 3],
    major_version: u8,
    revision: u8,
    flags: u8,
    declared_size: Option<u32>,
    raw_size_bytes: Option<[u8; 4]>,
    frames: Vec<Vec<u8>>,
    padding: usize,
    trailing: Vec<u8>,
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TagBuilder {
    pub fn new() -> Self {
        TagBuilder {
            identifier: *b"ID3",
            major_version: 3,
            revision: 0,
            flags: 0,
            declared_size: None,
            raw_size_bytes: None,
            frames: Vec::new(),
            padding: 0,
            trailing: Vec::new(),
        }
    }

    pub fn identifier(mut self, identifier: [u8; 3]) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn major_version(mut self, major_version: u8) -> Self {
        self.major_version = major_version;
        self
    }

    pub fn revision(mut self, revision: u8) -> Self {
        self.revision = revision;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Override the declared tag size instead of deriving it from content
    pub fn declared_size(mut self, size: u32) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Write these four size bytes verbatim, bypassing synchsafe encoding
    pub fn raw_size_bytes(mut self, bytes: [u8; 4]) -> Self {
        self.raw_size_bytes = Some(bytes);
        self
    }

    pub fn frame(mut self, frame: FrameBuilder) -> Self {
        self.frames.push(frame.build());
        self
    }

    /// Append pre-built frame bytes verbatim
    pub fn raw_frame(mut self, bytes: Vec<u8>) -> Self {
        self.frames.push(bytes);
        self
    }

    /// Zero padding after the frames, inside the declared size
    pub fn padding(mut self, len: usize) -> Self {
        self.padding = len;
        self
    }

    /// Bytes after the tag content (stand-in for audio data)
    pub fn trailing(mut self, bytes: Vec<u8>) -> Self {
        self.trailing = bytes;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let frames_len: usize = self.frames.iter().map(Vec::len).sum();
        let declared = self
            .declared_size
            .unwrap_or((frames_len + self.padding) as u32);
        let size_bytes = self
            .raw_size_bytes
            .unwrap_or_else(|| encode_synchsafe(declared));

        let mut out = Vec::new();
        out.extend_from_slice(&self.identifier);
        out.push(self.major_version);
        out.push(self.revision);
        out.push(self.flags);
        out.extend_from_slice(&size_bytes);
        for frame in &self.frames {
            out.extend_from_slice(frame);
        }
        out.extend(std::iter::repeat(0u8).take(self.padding));
        out.extend_from_slice(&self.trailing);
        out
    }
}
