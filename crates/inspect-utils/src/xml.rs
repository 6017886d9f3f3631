//! XML helpers for quick-xml readers.

use quick_xml::events::BytesStart;

/// Namespace URI of SVG elements.
pub const SVG_NS: &[u8] = b"http://www.w3.org/2000/svg";

/// Local (unprefixed) name of an element as a string.
pub fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

/// Unescaped value of the attribute whose qualified name is `name`.
pub fn attribute(e: &BytesStart, name: &str) -> Result<Option<String>, quick_xml::Error> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
