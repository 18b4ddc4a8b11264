//! XML request-document loader.
//!
//! # Format
//!
//! ```xml
//! <demandeDeLivraison>
//!   <entrepot adresse="342873658" heureDepart="8:0:0"/>
//!   <livraison adresseEnlevement="208769039" adresseLivraison="25173820"
//!              dureeEnlevement="180" dureeLivraison="240"/>
//! </demandeDeLivraison>
//! ```
//!
//! | Element     | Attribute           | Meaning                         |
//! |-------------|---------------------|---------------------------------|
//! | `entrepot`  | `adresse`           | warehouse node id               |
//! |             | `heureDepart`       | departure, `H:M:S`              |
//! | `livraison` | `adresseEnlevement` | pickup node id                  |
//! |             | `adresseLivraison`  | delivery node id                |
//! |             | `dureeEnlevement`   | pickup duration, seconds (≥ 0)  |
//! |             | `dureeLivraison`    | delivery duration, seconds (≥ 0)|
//!
//! Exactly one `entrepot` is required.  Deliveries receive the ids
//! `delivery-0`, `delivery-1`, … in document order.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::info;

use dv_core::{DepartureTime, NodeId};

use crate::{DeliveryRequest, NewDelivery, RequestError, RequestResult, Warehouse};

pub(crate) const ROOT_TAG: &str = "demandeDeLivraison";
pub(crate) const WAREHOUSE_TAG: &str = "entrepot";
pub(crate) const DELIVERY_TAG: &str = "livraison";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a request document from a file.
pub fn load_request_file(path: &Path) -> RequestResult<DeliveryRequest> {
    let xml = std::fs::read_to_string(path)?;
    parse_request(&xml)
}

/// Parse a request document from its XML text.
///
/// # Errors
///
/// [`RequestError::WarehouseCount`] unless exactly one `entrepot` is
/// present, [`RequestError::Malformed`] for a missing or unparseable
/// attribute, [`RequestError::Xml`] for text that is not well-formed XML,
/// is cut off before `</demandeDeLivraison>`, or has a root other than a
/// single `<demandeDeLivraison>`.
pub fn parse_request(xml: &str) -> RequestResult<DeliveryRequest> {
    let mut reader = Reader::from_str(xml);
    let mut warehouses: Vec<Warehouse> = Vec::new();
    let mut deliveries: Vec<NewDelivery> = Vec::new();

    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        let (e, empty) = match reader.read_event() {
            Err(e) => {
                return Err(RequestError::Xml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            Ok(Event::Eof) => break,
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Ok(Event::Start(e)) => (e, false),
            Ok(Event::Empty(e)) => (e, true),
            Ok(_) => continue,
        };

        if depth == 0 {
            check_root(e.local_name().as_ref(), root_seen)?;
            root_seen = true;
        }
        if !empty {
            depth += 1;
        }
        match e.local_name().as_ref() {
            b"entrepot" => warehouses.push(read_warehouse(&e)?),
            b"livraison" => deliveries.push(read_delivery(&e)?),
            _ => {}
        }
    }

    if !root_seen {
        return Err(RequestError::Xml(format!("no <{ROOT_TAG}> element")));
    }
    if depth > 0 {
        return Err(RequestError::Xml(format!(
            "document ends with {depth} unclosed element(s)"
        )));
    }

    let count = warehouses.len();
    let (Some(warehouse), 1) = (warehouses.pop(), count) else {
        return Err(RequestError::WarehouseCount(count));
    };

    let mut request = DeliveryRequest::new(warehouse);
    for d in deliveries {
        request.push_delivery(d);
    }

    info!(
        warehouse = %request.warehouse.node_id,
        departure = %request.warehouse.departure,
        deliveries = request.delivery_count(),
        "request document loaded"
    );
    Ok(request)
}

/// A top-level element must be the first and only `<demandeDeLivraison>`.
fn check_root(name: &[u8], root_seen: bool) -> RequestResult<()> {
    let name = String::from_utf8_lossy(name);
    if root_seen {
        return Err(RequestError::Xml(format!("second top-level element <{name}>")));
    }
    if name != ROOT_TAG {
        return Err(RequestError::Xml(format!(
            "root element is <{name}>, expected <{ROOT_TAG}>"
        )));
    }
    Ok(())
}

// ── Element readers ───────────────────────────────────────────────────────────

fn read_warehouse(e: &BytesStart<'_>) -> RequestResult<Warehouse> {
    let attrs = Attrs::read(e, WAREHOUSE_TAG)?;
    let node_id = attrs.node_id("adresse")?;
    let raw = attrs.required("heureDepart")?;
    let departure = raw
        .parse::<DepartureTime>()
        .map_err(|err| attrs.malformed("heureDepart", err.to_string()))?;
    Ok(Warehouse { node_id, departure })
}

fn read_delivery(e: &BytesStart<'_>) -> RequestResult<NewDelivery> {
    let attrs = Attrs::read(e, DELIVERY_TAG)?;
    Ok(NewDelivery {
        pickup_node_id:    attrs.node_id("adresseEnlevement")?,
        delivery_node_id:  attrs.node_id("adresseLivraison")?,
        pickup_duration:   attrs.seconds("dureeEnlevement")?,
        delivery_duration: attrs.seconds("dureeLivraison")?,
    })
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

struct Attrs {
    element: &'static str,
    pairs:   Vec<(String, String)>,
}

impl Attrs {
    fn read(e: &BytesStart<'_>, element: &'static str) -> RequestResult<Self> {
        let mut pairs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| RequestError::Xml(format!("<{element}>: {err}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| RequestError::Xml(format!("<{element}> attribute {key:?}: {err}")))?
                .into_owned();
            pairs.push((key, value));
        }
        Ok(Self { element, pairs })
    }

    fn malformed(&self, attribute: &'static str, reason: String) -> RequestError {
        RequestError::Malformed { element: self.element, attribute, reason }
    }

    fn required(&self, name: &'static str) -> RequestResult<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| self.malformed(name, "missing".to_owned()))
    }

    fn node_id(&self, name: &'static str) -> RequestResult<NodeId> {
        let raw = self.required(name)?.trim();
        if raw.is_empty() {
            return Err(self.malformed(name, "empty node id".to_owned()));
        }
        Ok(NodeId::from(raw))
    }

    fn seconds(&self, name: &'static str) -> RequestResult<u32> {
        let raw = self.required(name)?;
        raw.trim()
            .parse::<u32>()
            .map_err(|_| self.malformed(name, format!("{raw:?} is not a non-negative integer")))
    }
}
