//! XML graph-document loader.
//!
//! # Format
//!
//! ```xml
//! <reseau>
//!   <noeud id="25175791" latitude="45.75406" longitude="4.857418"/>
//!   <troncon origine="25175791" destination="2129259178"
//!            longueur="15.7" nomRue="Rue Danton"/>
//! </reseau>
//! ```
//!
//! `noeud` and `troncon` elements are collected wherever they appear, in
//! document order.  `nomRue` is optional; every other attribute is required
//! and numeric attributes must parse as finite numbers.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::info;

use dv_core::{Bounds, GeoPoint};

use crate::{GraphDocument, GraphDocumentBuilder, GraphError, GraphResult};

const ROOT_TAG: &str = "reseau";
const NODE_TAG: &str = "noeud";
const SEGMENT_TAG: &str = "troncon";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a graph document from a file.
pub fn load_graph_file(path: &Path, fallback_bounds: Bounds) -> GraphResult<GraphDocument> {
    let xml = std::fs::read_to_string(path)?;
    parse_graph(&xml, fallback_bounds)
}

/// Parse a graph document from its XML text.
///
/// `fallback_bounds` frames a document without any node.
///
/// # Errors
///
/// [`GraphError::Malformed`] when a required attribute is missing or not a
/// finite number, [`GraphError::Xml`] when the text is not well-formed XML,
/// is cut off before `</reseau>`, or has a root other than a single
/// `<reseau>`.
pub fn parse_graph(xml: &str, fallback_bounds: Bounds) -> GraphResult<GraphDocument> {
    let mut reader = Reader::from_str(xml);
    let mut builder = GraphDocumentBuilder::new();
    let mut outline = Outline::default();

    loop {
        let (e, empty) = match reader.read_event() {
            Err(e) => {
                return Err(GraphError::Xml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            Ok(Event::Eof) => break,
            Ok(Event::End(_)) => {
                outline.close();
                continue;
            }
            Ok(Event::Start(e)) => (e, false),
            Ok(Event::Empty(e)) => (e, true),
            Ok(_) => continue,
        };
        outline.open(e.local_name().as_ref(), empty)?;
        match e.local_name().as_ref() {
            b"noeud" => read_node(&e, &mut builder)?,
            b"troncon" => read_segment(&e, &mut builder)?,
            _ => {}
        }
    }
    outline.finish()?;

    let graph = builder.build(fallback_bounds);
    info!(
        nodes = graph.node_count(),
        segments = graph.segment_count(),
        bounds = %graph.bounds(),
        "graph document loaded"
    );
    Ok(graph)
}

// ── Element readers ───────────────────────────────────────────────────────────

fn read_node(e: &BytesStart<'_>, builder: &mut GraphDocumentBuilder) -> GraphResult<()> {
    let attrs = Attrs::read(e, NODE_TAG)?;
    let id = attrs.required("id")?;
    let lat = attrs.number("latitude")?;
    let lon = attrs.number("longitude")?;
    builder.add_node(id, GeoPoint::new(lat, lon));
    Ok(())
}

fn read_segment(e: &BytesStart<'_>, builder: &mut GraphDocumentBuilder) -> GraphResult<()> {
    let attrs = Attrs::read(e, SEGMENT_TAG)?;
    let origin = attrs.required("origine")?;
    let destination = attrs.required("destination")?;
    let length = attrs.number("longueur")?;
    let street = attrs.optional("nomRue").unwrap_or_default();
    builder.add_segment(origin, destination, length, street);
    Ok(())
}

// ── Document outline ──────────────────────────────────────────────────────────

/// Element nesting seen so far.  A document has exactly one `<reseau>` root
/// and every element is closed before the end of the text.
#[derive(Default)]
struct Outline {
    depth:     usize,
    root_seen: bool,
}

impl Outline {
    fn open(&mut self, name: &[u8], empty: bool) -> GraphResult<()> {
        if self.depth == 0 {
            if self.root_seen {
                return Err(GraphError::Xml(format!(
                    "second top-level element <{}>",
                    String::from_utf8_lossy(name)
                )));
            }
            if name != ROOT_TAG.as_bytes() {
                return Err(GraphError::Xml(format!(
                    "root element is <{}>, expected <{ROOT_TAG}>",
                    String::from_utf8_lossy(name)
                )));
            }
            self.root_seen = true;
        }
        if !empty {
            self.depth += 1;
        }
        Ok(())
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(&self) -> GraphResult<()> {
        if !self.root_seen {
            return Err(GraphError::Xml(format!("no <{ROOT_TAG}> element")));
        }
        if self.depth > 0 {
            return Err(GraphError::Xml(format!(
                "document ends with {} unclosed element(s)",
                self.depth
            )));
        }
        Ok(())
    }
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

/// Unescaped attributes of one element.
struct Attrs {
    element: &'static str,
    pairs:   Vec<(String, String)>,
}

impl Attrs {
    fn read(e: &BytesStart<'_>, element: &'static str) -> GraphResult<Self> {
        let mut pairs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| GraphError::Xml(format!("<{element}>: {err}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| GraphError::Xml(format!("<{element}> attribute {key:?}: {err}")))?
                .into_owned();
            pairs.push((key, value));
        }
        Ok(Self { element, pairs })
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn required(&self, name: &'static str) -> GraphResult<String> {
        self.optional(name).ok_or_else(|| GraphError::Malformed {
            element:   self.element,
            attribute: name,
            reason:    "missing".to_owned(),
        })
    }

    fn number(&self, name: &'static str) -> GraphResult<f64> {
        let raw = self.required(name)?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(GraphError::Malformed {
                element:   self.element,
                attribute: name,
                reason:    format!("{raw:?} is not a finite number"),
            }),
        }
    }
}
