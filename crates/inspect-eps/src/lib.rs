//! EPS command scanner — bounding box and drawing operators of an EPS chart.
//!
//! The file is treated as plain text: no PostScript interpretation, just a
//! pattern search over a permissively decoded copy of the bytes.

use std::path::Path;

use inspect_core::error::Result;

pub mod report;
pub mod scan;

pub use report::write_report;
pub use scan::{find_bounding_box, scan_commands};

/// Characters of decoded text searched for drawing commands.
pub const SCAN_WINDOW_CHARS: usize = 5000;

/// Matches echoed in the report.
pub const COMMAND_PREVIEW: usize = 10;

/// `%%BoundingBox` extent in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl BoundingBox {
    pub fn width(&self) -> i64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i64 {
        self.y2 - self.y1
    }
}

/// Two operands and an operator letter (`m`, `l` or `c`), as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken {
    pub x: String,
    pub y: String,
    pub op: char,
}

impl CommandToken {
    pub fn new(x: &str, y: &str, op: char) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
            op,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpsScan {
    pub bounding_box: Option<BoundingBox>,
    /// Every match inside the scan window, in order.
    pub commands: Vec<CommandToken>,
}

impl EpsScan {
    pub fn preview(&self) -> &[CommandToken] {
        &self.commands[..self.commands.len().min(COMMAND_PREVIEW)]
    }
}

/// Decode raw EPS bytes and run both searches.
pub fn scan_eps_bytes(bytes: &[u8]) -> EpsScan {
    let text = inspect_utils::encoding::decode_single_byte(bytes);
    EpsScan {
        bounding_box: find_bounding_box(&text),
        commands: scan_commands(&text),
    }
}

/// Read and scan an EPS file.
pub fn scan_eps_file(path: &Path) -> Result<EpsScan> {
    log::info!("Reading EPS: {}", path.display());

    let bytes = std::fs::read(path)?;
    let scan = scan_eps_bytes(&bytes);
    log::info!(
        "Bounding box {}, {} drawing commands in window",
        if scan.bounding_box.is_some() { "found" } else { "absent" },
        scan.commands.len()
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspect_core::error::InspectError;
    use std::io::Write;

    #[test]
    fn test_bounding_box_dimensions() {
        let bbox = BoundingBox {
            x1: 10,
            y1: 20,
            x2: 610,
            y2: 820,
        };
        assert_eq!(bbox.width(), 600);
        assert_eq!(bbox.height(), 800);
    }

    #[test]
    fn test_preview_caps_at_ten() {
        let commands = (0..15)
            .map(|i| CommandToken::new(&i.to_string(), "0", 'l'))
            .collect();
        let scan = EpsScan {
            bounding_box: None,
            commands,
        };
        assert_eq!(scan.preview().len(), COMMAND_PREVIEW);
        assert_eq!(scan.preview()[9].x, "9");
    }

    #[test]
    fn test_scan_eps_bytes_tolerates_binary() {
        let mut bytes = b"%!PS-Adobe-3.0 EPSF-3.0\n%%BoundingBox: 0 0 600 800\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00, 0x81]);
        bytes.extend_from_slice(b"\n12.5 34 m 56 78 l\n");

        let scan = scan_eps_bytes(&bytes);
        assert_eq!(scan.bounding_box.map(|b| (b.width(), b.height())), Some((600, 800)));
        assert_eq!(
            scan.commands,
            vec![
                CommandToken::new("12.5", "34", 'm'),
                CommandToken::new("56", "78", 'l'),
            ]
        );
    }

    #[test]
    fn test_scan_eps_bytes_next_line_separator() {
        let scan = scan_eps_bytes(b"10 20\x85m 30 40 l");
        assert_eq!(
            scan.commands,
            vec![
                CommandToken::new("10", "20", 'm'),
                CommandToken::new("30", "40", 'l'),
            ]
        );
    }

    #[test]
    fn test_scan_eps_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "%!PS\n100 200 moveto\n").unwrap();
        let scan = scan_eps_file(file.path()).unwrap();
        assert!(scan.bounding_box.is_none());
        assert_eq!(scan.commands, vec![CommandToken::new("100", "200", 'm')]);
    }

    #[test]
    fn test_scan_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = scan_eps_file(&dir.path().join("missing.eps")).unwrap_err();
        assert!(matches!(err, InspectError::Io(_)));
    }
}
