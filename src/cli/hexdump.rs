//! Hex/ASCII dump of raw byte events

/// Whether a byte is an ASCII printable character
fn is_printable(byte: u8) -> bool {
    (32..127).contains(&byte)
}

/// Format bytes as hex plus ASCII translation, 16 bytes per line
pub fn dump_lines(data: &[u8]) -> Vec<String> {
    data.chunks(16)
        .map(|chunk| {
            let mut hex = String::new();
            let mut ascii = String::new();
            for &byte in chunk {
                hex.push_str(&format!("{:02x} ", byte));
                ascii.push(if is_printable(byte) { byte as char } else { '.' });
            }
            for _ in chunk.len()..16 {
                hex.push_str("   ");
                ascii.push(' ');
            }
            format!("{}  {}", hex, ascii)
        })
        .collect()
}

/// Print bytes in hex and ASCII translation, 16 bytes per line
pub fn print_bytes(data: &[u8]) {
    for line in dump_lines(data) {
        println!("{}", line);
    }
}
