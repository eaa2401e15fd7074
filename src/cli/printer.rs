//! Console renderer for the decoder's event stream

use std::path::Path;

use id3_parser::{
    decode_terminated, frame_type_name, FrameHeader, FrameRecord, Id3Error, Id3Handler, TagHeader,
    TextEncoding,
};

use super::{hexdump, paths};

/// Handler that prints parsed pieces as they arrive
///
/// `aatpath` adds an artist/album/track line derived from path components,
/// `hexdump` dumps every raw byte event, `print_headers` prints the tag and
/// frame structural headers. Decoded records are always printed.
pub struct Id3Printer {
    aatpath: bool,
    hexdump: bool,
    print_headers: bool,
}

impl Id3Printer {
    pub fn new(aatpath: bool, hexdump: bool, print_headers: bool) -> Self {
        Id3Printer {
            aatpath,
            hexdump,
            print_headers,
        }
    }
}

impl Id3Handler for Id3Printer {
    fn on_path(&mut self, path: &str) {
        println!("{}", path);
        if self.aatpath {
            let (artist, album, track) = paths::derive_artist_album_track(Path::new(path));
            println!("Artist: {} Album: {} Track: {}", artist, album, track);
        }
    }

    fn on_raw_tag_header(&mut self, header: &[u8]) {
        if self.hexdump {
            hexdump::print_bytes(header);
        }
    }

    fn on_tag_header(&mut self, header: &TagHeader) {
        if self.print_headers {
            println!(
                "ID3v2 version {} revision {} flags {:02x} size {}",
                header.major_version, header.revision, header.flags, header.declared_size
            );
        }
    }

    fn on_raw_frame_header(&mut self, header: &[u8]) {
        if self.hexdump {
            hexdump::print_bytes(header);
        }
    }

    fn on_frame_header(&mut self, header: &FrameHeader) {
        if self.print_headers {
            println!(
                "type: {} size: {} flags: {:04x}",
                header.type_code(),
                header.frame_size,
                header.frame_flags
            );
        }
    }

    fn on_raw_frame(&mut self, _frame_type: &str, data: &[u8]) {
        if self.hexdump {
            hexdump::print_bytes(data);
        }
    }

    fn on_frame(&mut self, frame_type: &str, record: &FrameRecord) {
        match record {
            FrameRecord::Text { text } => {
                let name = frame_type_name(frame_type).unwrap_or(frame_type);
                println!("{:>40} : {}", name, text);
            }
            FrameRecord::Comment {
                language,
                descriptor,
                text,
            } => {
                println!("{:>40} : {}", "Comment language", language);
                println!("{:>40} : {}", "Comment description", descriptor);
                println!("{:>40} : {}", "Comment text", text);
            }
            FrameRecord::Lyrics {
                language,
                descriptor,
                text,
            } => {
                println!(
                    "{:>40} : {}",
                    "Unsynchronized lyric translation language", language
                );
                println!(
                    "{:>40} : {}",
                    "Unsynchronized lyric translation description", descriptor
                );
                println!("{:>40} : {}", "Unsynchronized lyric translation text", text);
            }
            FrameRecord::Picture {
                mime_type,
                description,
                data,
                ..
            } => {
                println!("{:>40} : {}", "Attached picture mime type", mime_type);
                println!("{:>40} : {}", "Attached picture description", description);
                println!("{:>40} : {}", "Attached picture data length", data.len());
            }
            FrameRecord::Object {
                mime_type,
                description,
                filename,
                data,
            } => {
                println!(
                    "{:>40} : {}",
                    "General encapsulated object mime type", mime_type
                );
                println!(
                    "{:>40} : {}",
                    "General encapsulated object description", description
                );
                println!(
                    "{:>40} : {}",
                    "General encapsulated object filename", filename
                );
                println!(
                    "{:>40} : {}",
                    "General encapsulated object data length",
                    data.len()
                );
            }
            FrameRecord::CdIdentifier { data } => {
                println!("{:>40} : {}", "Music CD identifier data length", data.len());
            }
            FrameRecord::Private { owner, data } => {
                println!("{:>40} : {}", "Private owner", owner);
                println!("{:>40} : {}", "Private data length", data.len());
                // Some Windows Media owners carry a two-byte-unit string as
                // their payload; show it when it decodes to something.
                if owner == "WM/UniqueFileIdentifier" || owner == "WM/Provider" {
                    let (_, value) = decode_terminated(TextEncoding::Utf16, data);
                    if !value.is_empty() {
                        println!("{:>40} : {}", "Private data", value);
                    }
                }
            }
        }
    }

    fn on_diagnostic(&mut self, path: &str, error: &Id3Error) {
        eprintln!("{} : {}", path, error);
    }
}
