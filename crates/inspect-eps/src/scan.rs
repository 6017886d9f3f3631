//! Pattern searches over decoded EPS text.

use once_cell::sync::Lazy;
use regex::Regex;

use inspect_utils::text::prefix_chars;

use crate::{BoundingBox, CommandToken, SCAN_WINDOW_CHARS};

static BOUNDING_BOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%%BoundingBox:\s*(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").unwrap());

// The operator letter may be the start of a longer word, so `moveto`,
// `lineto` and `curveto` are picked up through their first letter.
static COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s+(\d+\.?\d*)\s+([mlc])").unwrap());

/// First `%%BoundingBox:` directive carrying four integers.
///
/// Deferred forms such as `%%BoundingBox: (atend)` are not matched. Values
/// too large for `i64` are reported as absent.
pub fn find_bounding_box(text: &str) -> Option<BoundingBox> {
    let caps = BOUNDING_BOX_RE.captures(text)?;

    let mut values = [0i64; 4];
    for (slot, i) in values.iter_mut().zip(1usize..=4) {
        match caps[i].parse::<i64>() {
            Ok(v) => *slot = v,
            Err(e) => {
                log::warn!("Ignoring %%BoundingBox value {:?}: {}", &caps[i], e);
                return None;
            }
        }
    }

    let [x1, y1, x2, y2] = values;
    log::debug!("BoundingBox: {} {} {} {}", x1, y1, x2, y2);
    Some(BoundingBox { x1, y1, x2, y2 })
}

/// Drawing commands within the first [`SCAN_WINDOW_CHARS`] characters.
pub fn scan_commands(text: &str) -> Vec<CommandToken> {
    let window = prefix_chars(text, SCAN_WINDOW_CHARS);

    COMMAND_RE
        .captures_iter(window)
        .filter_map(|caps| {
            let op = caps[3].chars().next()?;
            Some(CommandToken::new(&caps[1], &caps[2], op))
        })
        .collect()
}
