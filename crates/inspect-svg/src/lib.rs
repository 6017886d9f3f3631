//! SVG group inspector — lists the `<g>` groups of a chart and samples their paths.
//!
//! Used to match the groups of an exported dental chart to individual teeth by
//! hand: the report shows each group's id, how many paths it draws, its
//! transform, and the start of its first path.

use std::path::Path;

use inspect_core::error::{InspectError, Result};

pub mod parser;
pub mod report;

pub use parser::parse_svg_str;
pub use report::write_report;

/// Only the first groups in document order get a detailed block.
pub const GROUP_LIMIT: usize = 20;

/// Characters of path data shown per group.
pub const PATH_SAMPLE_CHARS: usize = 100;

/// One SVG `<g>` element and the paths nested anywhere below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    /// Zero-based position among all groups, in document order.
    pub index: usize,
    pub id: Option<String>,
    pub transform: Option<String>,
    pub path_count: usize,
    /// `d` attribute of the first descendant path, if it had one.
    pub first_path_data: Option<String>,
}

impl GroupRecord {
    pub fn new(index: usize, id: Option<String>, transform: Option<String>) -> Self {
        Self {
            index,
            id,
            transform,
            path_count: 0,
            first_path_data: None,
        }
    }

    /// The `id` attribute, or `no-id-<index>` when the group has none.
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("no-id-{}", self.index),
        }
    }

    /// At most [`PATH_SAMPLE_CHARS`] characters of the first path's data.
    pub fn path_sample(&self) -> &str {
        let data = self.first_path_data.as_deref().unwrap_or("");
        inspect_utils::text::prefix_chars(data, PATH_SAMPLE_CHARS)
    }

    pub fn has_paths(&self) -> bool {
        self.path_count > 0
    }
}

/// Every group found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgInventory {
    pub groups: Vec<GroupRecord>,
}

impl SvgInventory {
    pub fn total_groups(&self) -> usize {
        self.groups.len()
    }

    /// Groups that get a detailed block: within the first [`GROUP_LIMIT`]
    /// and drawing at least one path.
    pub fn detailed(&self) -> impl Iterator<Item = &GroupRecord> {
        self.groups
            .iter()
            .take(GROUP_LIMIT)
            .filter(|g| g.has_paths())
    }
}

/// Read and parse an SVG file.
pub fn inspect_svg_file(path: &Path) -> Result<SvgInventory> {
    log::info!("Reading SVG: {}", path.display());

    let bytes = std::fs::read(path)?;
    let (text, encoding) = inspect_utils::encoding::decode_xml(&bytes)
        .ok_or_else(|| InspectError::Xml(format!("{}: not valid UTF-8", path.display())))?;
    log::debug!("Decoded {} bytes as {}", bytes.len(), encoding);

    let inventory = parse_svg_str(&text)?;
    log::info!("Found {} groups", inventory.total_groups());
    Ok(inventory)
}
