//! Streaming group collector built on quick-xml's namespace-aware reader.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use inspect_core::error::{InspectError, Result};
use inspect_utils::xml::{attribute, local_name, SVG_NS};

use crate::{GroupRecord, SvgInventory};

/// Element kinds the collector cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Group,
    Path,
    Other,
}

#[derive(Default)]
struct ParseState {
    groups: Vec<GroupRecord>,
    /// Indices into `groups` for every `<g>` currently open.
    open_groups: Vec<usize>,
    /// One entry per open element, to pop groups on the matching end tag.
    elements: Vec<Kind>,
    seen_root: bool,
}

impl ParseState {
    fn open_group(&mut self, id: Option<String>, transform: Option<String>) {
        let index = self.groups.len();
        log::debug!("Group {} opened (id={:?})", index, id);
        self.groups.push(GroupRecord::new(index, id, transform));
        self.open_groups.push(index);
    }

    /// Count a path for every enclosing group.
    fn add_path(&mut self, d: Option<String>) {
        for &idx in &self.open_groups {
            let group = &mut self.groups[idx];
            if group.path_count == 0 {
                group.first_path_data = d.clone();
            }
            group.path_count += 1;
        }
    }

    fn close_element(&mut self) -> Result<()> {
        match self.elements.pop() {
            Some(Kind::Group) => {
                self.open_groups.pop();
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(InspectError::Xml("unexpected end tag".to_string())),
        }
    }
}

/// Parse an SVG document and collect every `<g>` in the SVG namespace.
///
/// Groups are listed in document order. A path counts towards each group
/// that contains it, however deeply nested. Elements outside the SVG
/// namespace are walked but never counted.
pub fn parse_svg_str(xml: &str) -> Result<SvgInventory> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;

    let mut state = ParseState::default();

    loop {
        let (ns, event) = match reader.read_resolved_event() {
            Ok(pair) => pair,
            Err(e) => return Err(InspectError::Xml(e.to_string())),
        };
        if let ResolveResult::Unknown(prefix) = &ns {
            return Err(InspectError::Xml(format!(
                "unbound namespace prefix {:?}",
                String::from_utf8_lossy(prefix)
            )));
        }
        let in_svg_ns = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == SVG_NS);

        match event {
            Event::Start(e) => {
                if state.elements.is_empty() {
                    if state.seen_root {
                        return Err(InspectError::Xml(
                            "junk after document element".to_string(),
                        ));
                    }
                    state.seen_root = true;
                }

                let kind = match local_name(&e).as_str() {
                    "g" if in_svg_ns => Kind::Group,
                    "path" if in_svg_ns => Kind::Path,
                    _ => Kind::Other,
                };

                match kind {
                    Kind::Group => {
                        let id = attribute(&e, "id").map_err(xml_err)?;
                        let transform = attribute(&e, "transform").map_err(xml_err)?;
                        state.open_group(id, transform);
                    }
                    Kind::Path if !state.open_groups.is_empty() => {
                        let d = attribute(&e, "d").map_err(xml_err)?;
                        state.add_path(d);
                    }
                    _ => {}
                }
                state.elements.push(kind);
            }
            Event::End(_) => state.close_element()?,
            Event::Text(e) => {
                let text = e.unescape().map_err(xml_err)?;
                if state.elements.is_empty() && !text.trim().is_empty() {
                    return Err(InspectError::Xml(
                        "text outside the document element".to_string(),
                    ));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !state.seen_root {
        return Err(InspectError::Xml("no element found".to_string()));
    }
    if !state.elements.is_empty() {
        return Err(InspectError::Xml(format!(
            "{} unclosed element(s) at end of document",
            state.elements.len()
        )));
    }

    Ok(SvgInventory {
        groups: state.groups,
    })
}

fn xml_err(e: quick_xml::Error) -> InspectError {
    InspectError::Xml(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

    fn svg(body: &str) -> String {
        format!(
            r#"{}<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 800">{}</svg>"#,
            HEADER, body
        )
    }

    #[test]
    fn test_counts_all_groups() {
        let doc = svg(r#"<g id="a"><path d="M0 0"/></g><g/><g id="c"><g><path/></g></g>"#);
        let inventory = parse_svg_str(&doc).unwrap();
        assert_eq!(inventory.total_groups(), 4);
        let indices: Vec<usize> = inventory.groups.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_group_counted_but_not_detailed() {
        let doc = svg(r#"<g id="vazio"></g><g id="dente"><path d="M1 1"/></g>"#);
        let inventory = parse_svg_str(&doc).unwrap();
        assert_eq!(inventory.total_groups(), 2);
        let ids: Vec<String> = inventory.detailed().map(|g| g.display_id()).collect();
        assert_eq!(ids, vec!["dente"]);
    }

    #[test]
    fn test_nested_paths_count_for_every_ancestor() {
        let doc = svg(
            r#"<g id="arcada"><path d="M0 0 L1 1"/><g id="dente-11"><path d="M5 5"/><path d="M6 6"/></g></g>"#,
        );
        let inventory = parse_svg_str(&doc).unwrap();
        let outer = &inventory.groups[0];
        let inner = &inventory.groups[1];
        assert_eq!(outer.path_count, 3);
        assert_eq!(outer.first_path_data.as_deref(), Some("M0 0 L1 1"));
        assert_eq!(inner.path_count, 2);
        assert_eq!(inner.first_path_data.as_deref(), Some("M5 5"));
    }

    #[test]
    fn test_transform_and_missing_d() {
        let doc = svg(r#"<g transform="translate(10,20)"><path/><path d="M1 1"/></g>"#);
        let inventory = parse_svg_str(&doc).unwrap();
        let g = &inventory.groups[0];
        assert_eq!(g.transform.as_deref(), Some("translate(10,20)"));
        assert_eq!(g.path_count, 2);
        assert_eq!(g.path_sample(), "");
        assert_eq!(g.display_id(), "no-id-0");
    }

    #[test]
    fn test_prefixed_svg_namespace() {
        let doc = r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:g id="x"><s:path d="M0 0"/></s:g></s:svg>"#;
        let inventory = parse_svg_str(doc).unwrap();
        assert_eq!(inventory.total_groups(), 1);
        assert_eq!(inventory.groups[0].path_count, 1);
    }

    #[test]
    fn test_ignores_foreign_namespace() {
        let doc = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:o="urn:other"><o:g><path d="M0 0"/></o:g><g><o:path d="M1 1"/></g></svg>"#;
        let inventory = parse_svg_str(doc).unwrap();
        assert_eq!(inventory.total_groups(), 1);
        assert_eq!(inventory.groups[0].path_count, 0);
    }

    #[test]
    fn test_no_namespace_finds_nothing() {
        let inventory = parse_svg_str(r#"<svg><g><path d="M0 0"/></g></svg>"#).unwrap();
        assert_eq!(inventory.total_groups(), 0);
    }

    #[test]
    fn test_text_and_entities_accepted() {
        let doc = svg(r#"<text>A &amp; B &#233;</text><g id="d&lt;1&gt;"><path d="M0 0"/></g>"#);
        let inventory = parse_svg_str(&format!("{}\n", doc)).unwrap();
        assert_eq!(inventory.groups[0].display_id(), "d<1>");
    }

    #[test]
    fn test_malformed_xml_is_error() {
        for doc in [
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g></svg>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g>"#,
            "",
            "<a/><b/>",
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text>&bogus;</text></svg>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text>a & b</text></svg>"#,
            r#"junk<svg xmlns="http://www.w3.org/2000/svg"><g/></svg>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><x:g/></svg>"#,
        ] {
            let err = parse_svg_str(doc).unwrap_err();
            assert!(matches!(err, InspectError::Xml(_)), "{:?}", doc);
        }
    }
}
