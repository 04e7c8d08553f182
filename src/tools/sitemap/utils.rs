use super::types::SitemapDocument;
use crate::error::SitemapError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const INDEX_ROOT: &str = "sitemapindex";
const URLSET_ROOT: &str = "urlset";
const INDEX_ENTRY: &str = "sitemap";
const URLSET_ENTRY: &str = "url";
const LOC: &str = "loc";

// Depths: root = 1, entry = 2, loc = 3.
const ENTRY_DEPTH: usize = 2;
const LOC_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Index,
    UrlSet,
    Unknown,
}

impl Shape {
    fn entry_name(self) -> Option<&'static str> {
        match self {
            Shape::Index => Some(INDEX_ENTRY),
            Shape::UrlSet => Some(URLSET_ENTRY),
            Shape::Unknown => None,
        }
    }
}

/// Per-entry accumulation state.
#[derive(Default)]
struct Entry {
    loc: Option<String>,
    in_loc: bool,
    text: String,
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase()
}

fn shape_of(root: &str) -> Shape {
    match root {
        INDEX_ROOT => Shape::Index,
        URLSET_ROOT => Shape::UrlSet,
        _ => Shape::Unknown,
    }
}

/// Walk the whole document, checking well-formedness, and collect entry locations.
pub(super) fn parse_document(xml: &str) -> Result<SitemapDocument, SitemapError> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut root: Option<(String, Shape)> = None;
    let mut entry: Option<Entry> = None;
    let mut locations = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            SitemapError::Malformed(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                let name = local_name(&e);
                on_open(&name, depth, &mut root, &mut entry)?;
            }
            Event::Empty(e) => {
                // Self-closing: opened and closed at the same depth.
                let name = local_name(&e);
                on_open(&name, depth + 1, &mut root, &mut entry)?;
                on_close(depth + 1, &root, &mut entry, &mut locations);
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(SitemapError::Malformed("unexpected closing tag".into()));
                }
                on_close(depth, &root, &mut entry, &mut locations);
                depth -= 1;
            }
            Event::Text(t) => {
                if depth == 0 {
                    // Stray text outside the root element.
                    return Err(SitemapError::Malformed("text outside of root element".into()));
                }
                if let Some(current) = entry.as_mut().filter(|cur| cur.in_loc) {
                    let text = t
                        .unescape()
                        .map_err(|e| SitemapError::Malformed(e.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if let Some(current) = entry.as_mut().filter(|cur| cur.in_loc) {
                    current.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(SitemapError::Malformed("unexpected end of document".into()));
    }

    match root {
        None => Err(SitemapError::Malformed("no root element".into())),
        Some((_, Shape::Index)) => Ok(SitemapDocument::Index(locations)),
        Some((_, Shape::UrlSet)) => Ok(SitemapDocument::UrlSet(locations)),
        Some((name, Shape::Unknown)) => Err(SitemapError::UnrecognizedShape(name)),
    }
}

fn on_open(
    name: &str,
    depth: usize,
    root: &mut Option<(String, Shape)>,
    entry: &mut Option<Entry>,
) -> Result<(), SitemapError> {
    if depth == 1 {
        if root.is_some() {
            return Err(SitemapError::Malformed("multiple root elements".into()));
        }
        *root = Some((name.to_string(), shape_of(name)));
        return Ok(());
    }

    let entry_name = root.as_ref().and_then(|(_, shape)| shape.entry_name());
    if depth == ENTRY_DEPTH && entry_name == Some(name) {
        *entry = Some(Entry::default());
    } else if depth == LOC_DEPTH && name == LOC {
        if let Some(current) = entry.as_mut().filter(|c| c.loc.is_none()) {
            current.in_loc = true;
            current.text.clear();
        }
    }
    Ok(())
}

fn on_close(
    depth: usize,
    root: &Option<(String, Shape)>,
    entry: &mut Option<Entry>,
    locations: &mut Vec<String>,
) {
    if root.is_none() {
        return;
    }

    if depth == LOC_DEPTH {
        if let Some(current) = entry.as_mut().filter(|c| c.in_loc) {
            current.in_loc = false;
            let loc = current.text.trim();
            if !loc.is_empty() {
                current.loc = Some(loc.to_string());
            }
        }
    } else if depth == ENTRY_DEPTH {
        if let Some(loc) = entry.take().and_then(|e| e.loc) {
            locations.push(loc);
        }
    }
}
