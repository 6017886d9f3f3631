//! Console report for an EPS scan.

use std::io::{self, Write};

use crate::{EpsScan, SCAN_WINDOW_CHARS};

/// Fixed advice printed after every scan.
pub const STRATEGY_NOTES: [&str; 4] = [
    "Diagnóstico:",
    "- As coordenadas dos paths já estão no espaço do BoundingBox do EPS.",
    "- Em vez de regenerar os dados dos paths, ajuste o viewBox do SVG para essas dimensões.",
    "- Assim o desenho original é preservado e só a janela de visualização muda.",
];

pub fn write_report<W: Write>(scan: &EpsScan, mut out: W) -> io::Result<()> {
    if let Some(bbox) = &scan.bounding_box {
        writeln!(
            out,
            "BoundingBox: x1={}, y1={}, x2={}, y2={}",
            bbox.x1, bbox.y1, bbox.x2, bbox.y2
        )?;
        writeln!(out, "Dimensões: {} x {}", bbox.width(), bbox.height())?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Comandos de desenho encontrados (primeiros {} caracteres): {}",
        SCAN_WINDOW_CHARS,
        scan.commands.len()
    )?;
    for token in scan.preview() {
        writeln!(out, "  ('{}', '{}', '{}')", token.x, token.y, token.op)?;
    }

    writeln!(out)?;
    for line in STRATEGY_NOTES {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
