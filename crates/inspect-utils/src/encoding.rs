//! Character decoding for chart sources.

use encoding_rs::Encoding;

/// Decode an XML document to UTF-8.
///
/// A BOM wins, then an `encoding="..."` declaration, then strict UTF-8.
/// Returns the text and the name of the encoding used, or `None` when the
/// bytes are not valid UTF-8 and nothing else was declared.
pub fn decode_xml(bytes: &[u8]) -> Option<(String, &'static str)> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (result, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Some((result.into_owned(), encoding.name()));
    }

    if let Some(label) = detect_xml_encoding(bytes) {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) if encoding != encoding_rs::UTF_8 => {
                let (result, _) = encoding.decode_without_bom_handling(bytes);
                return Some((result.into_owned(), encoding.name()));
            }
            Some(_) => {}
            None => log::warn!("Unknown XML encoding {:?}, assuming UTF-8", label),
        }
    }

    std::str::from_utf8(bytes)
        .ok()
        .map(|s| (s.to_string(), encoding_rs::UTF_8.name()))
}

/// Decode as ISO-8859-1. Never fails: every byte maps to the code point of
/// the same value, so character offsets equal byte offsets in the source file.
/// 0x80..=0x9F stay C1 controls (0x85 is NEL, a regex `\s`); `encoding_rs`
/// would decode the `latin1` label as Windows-1252 and remap them.
pub fn decode_single_byte(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Try to detect the encoding from an XML declaration.
/// Looks for `<?xml ... encoding="..." ?>`.
pub fn detect_xml_encoding(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(512)];
    let head_str = String::from_utf8_lossy(head);

    let decl_end = head_str.find("?>")?;
    let decl = &head_str[..decl_end];
    if !decl.trim_start().starts_with("<?xml") {
        return None;
    }

    let start = decl.find("encoding=")?;
    let rest = &decl[start + 9..];
    let quote = rest.chars().next()?;
    if quote == '"' || quote == '\'' {
        let rest = &rest[1..];
        if let Some(end) = rest.find(quote) {
            return Some(rest[..end].to_string());
        }
    }
    None
}
