//! Console report for an SVG inventory.

use std::io::{self, Write};

use crate::SvgInventory;

/// Manual follow-up steps printed after every report.
pub const NEXT_STEPS: [&str; 3] = [
    "1. Abra o SVG no navegador ou no Inkscape e localize cada grupo pelo id listado acima.",
    "2. Compare a posição de cada grupo com o odontograma para descobrir a qual dente ele corresponde.",
    "3. Anote o mapeamento grupo -> número do dente (notação FDI) antes de editar o componente.",
];

pub fn write_report<W: Write>(inventory: &SvgInventory, mut out: W) -> io::Result<()> {
    writeln!(out, "Total de grupos encontrados: {}", inventory.total_groups())?;

    for group in inventory.detailed() {
        writeln!(out)?;
        writeln!(out, "Grupo {}: {}", group.index, group.display_id())?;
        writeln!(out, "  Paths: {}", group.path_count)?;
        if let Some(transform) = &group.transform {
            writeln!(out, "  Transform: {}", transform)?;
        }
        writeln!(out, "  Primeiro path: {}...", group.path_sample())?;
    }

    writeln!(out)?;
    writeln!(out, "Próximos passos:")?;
    for step in NEXT_STEPS {
        writeln!(out, "{}", step)?;
    }
    Ok(())
}
