//! Small helpers shared by the inspectors: decoding, XML names, text windows.

pub mod encoding;
pub mod text;
pub mod xml;
