//! XML request-document writer.
//!
//! Output layout: XML declaration, `demandeDeLivraison` root, the warehouse
//! record, one `livraison` per existing delivery, then one per additional
//! pair.  Attribute values are escaped, so the text always re-parses.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::writer::Writer;
use tracing::{info, warn};

use crate::loader::{DELIVERY_TAG, ROOT_TAG, WAREHOUSE_TAG};
use crate::{DeliveryRequest, NewDelivery, RequestError, RequestResult};

/// Serialize `request` followed by `additional` pairs.
///
/// Without a request no `entrepot` record is written and the result will be
/// rejected by [`parse_request`](crate::parse_request); callers that need a
/// loadable document must supply a warehouse first.
pub fn write_request(
    request:    Option<&DeliveryRequest>,
    additional: &[NewDelivery],
) -> RequestResult<String> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(&mut w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    emit(&mut w, Event::Start(BytesStart::new(ROOT_TAG)))?;

    match request {
        Some(r) => {
            let departure = r.warehouse.departure.to_document_string();
            let mut e = BytesStart::new(WAREHOUSE_TAG);
            e.push_attribute(("adresse", r.warehouse.node_id.as_str()));
            e.push_attribute(("heureDepart", departure.as_str()));
            emit(&mut w, Event::Empty(e))?;

            for d in r.deliveries() {
                emit(&mut w, Event::Empty(delivery_element(
                    d.pickup_node_id.as_str(),
                    d.delivery_node_id.as_str(),
                    d.pickup_duration,
                    d.delivery_duration,
                )))?;
            }
        }
        None => warn!("writing a request document without a warehouse"),
    }

    for d in additional {
        emit(&mut w, Event::Empty(delivery_element(
            d.pickup_node_id.as_str(),
            d.delivery_node_id.as_str(),
            d.pickup_duration,
            d.delivery_duration,
        )))?;
    }

    emit(&mut w, Event::End(BytesEnd::new(ROOT_TAG)))?;

    let xml = String::from_utf8(w.into_inner()).map_err(|e| RequestError::Write(e.to_string()))?;
    info!(
        deliveries = request.map_or(0, DeliveryRequest::delivery_count) + additional.len(),
        bytes = xml.len(),
        "request document written"
    );
    Ok(xml)
}

fn delivery_element(
    pickup:            &str,
    delivery:          &str,
    pickup_duration:   u32,
    delivery_duration: u32,
) -> BytesStart<'static> {
    let mut e = BytesStart::new(DELIVERY_TAG);
    e.push_attribute(("adresseEnlevement", pickup));
    e.push_attribute(("adresseLivraison", delivery));
    e.push_attribute(("dureeEnlevement", pickup_duration.to_string().as_str()));
    e.push_attribute(("dureeLivraison", delivery_duration.to_string().as_str()));
    e
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> RequestResult<()> {
    w.write_event(event).map_err(|e| RequestError::Write(e.to_string()))
}
