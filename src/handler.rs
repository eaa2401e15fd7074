use crate::errors::Id3Error;
use crate::frame_header::FrameHeader;
use crate::frames::FrameRecord;
use crate::header::TagHeader;

/// Capability set the tag walker reports into
///
/// One method per structural fact, invoked in strict chronological order:
/// the file path once, then the raw and parsed tag header, then per frame
/// the raw frame header, the parsed frame header, the raw body bytes, and
/// finally either a decoded record or a diagnostic. Every method has a
/// default empty body so a handler implements only the subset it needs.
///
/// The walker never retains headers or records after the corresponding call
/// returns; a handler that wants them must copy them out.
pub trait Id3Handler {
    /// A new file is about to be parsed
    fn on_path(&mut self, path: &str) {
        let _ = path;
    }

    /// The raw tag header bytes, possibly short when the file is truncated
    fn on_raw_tag_header(&mut self, header: &[u8]) {
        let _ = header;
    }

    /// The validated tag header fields
    fn on_tag_header(&mut self, header: &TagHeader) {
        let _ = header;
    }

    /// The raw frame header bytes; fires even for the padding marker
    fn on_raw_frame_header(&mut self, header: &[u8]) {
        let _ = header;
    }

    /// The parsed frame header fields
    fn on_frame_header(&mut self, header: &FrameHeader) {
        let _ = header;
    }

    /// The raw frame body bytes, surfaced for every frame, known type or not
    fn on_raw_frame(&mut self, frame_type: &str, data: &[u8]) {
        let _ = (frame_type, data);
    }

    /// The structured record decoded from a frame body
    fn on_frame(&mut self, frame_type: &str, record: &FrameRecord) {
        let _ = (frame_type, record);
    }

    /// Diagnostic channel: every error in the taxonomy, tagged with the
    /// path of the file being parsed when it was raised
    fn on_diagnostic(&mut self, path: &str, error: &Id3Error) {
        let _ = (path, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SubsetHandler {
        paths: Vec<String>,
    }

    impl Id3Handler for SubsetHandler {
        fn on_path(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }
    }

    #[test]
    fn test_handler_default_methods_are_no_ops() {
        // A handler implementing only part of the contract compiles and
        // silently ignores the rest.
        let mut handler = SubsetHandler { paths: vec![] };
        handler.on_path("a.mp3");
        handler.on_raw_tag_header(&[0x49, 0x44, 0x33]);
        handler.on_diagnostic("a.mp3", &Id3Error::ShortTagHeader { available: 3 });

        assert_eq!(handler.paths, vec!["a.mp3".to_string()]);
    }
}
