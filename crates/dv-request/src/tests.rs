//! Unit tests for dv-request.

use dv_core::{DepartureTime, NodeId};

use crate::{DeliveryRequest, NewDelivery, Warehouse};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SMALL_REQUEST: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<demandeDeLivraison>
  <entrepot adresse="342873658" heureDepart="8:0:0"/>
  <livraison adresseEnlevement="208769039" adresseLivraison="25173820"
             dureeEnlevement="180" dureeLivraison="240"/>
  <livraison adresseEnlevement="1679901320" adresseLivraison="208769457"
             dureeEnlevement="420" dureeLivraison="600"/>
</demandeDeLivraison>
"#;

fn new_delivery(p: &str, d: &str, pd: u32, dd: u32) -> NewDelivery {
    NewDelivery {
        pickup_node_id:    NodeId::from(p),
        delivery_node_id:  NodeId::from(d),
        pickup_duration:   pd,
        delivery_duration: dd,
    }
}

fn request_with(n: usize) -> DeliveryRequest {
    let mut r = DeliveryRequest::new(Warehouse {
        node_id:   NodeId::from("w"),
        departure: DepartureTime::default(),
    });
    for i in 0..n {
        r.push_delivery(new_delivery(&format!("p{i}"), &format!("d{i}"), 60, 120));
    }
    r
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::*;
    use crate::{RequestError, StopKind};

    #[test]
    fn push_assigns_sequential_ids() {
        let r = request_with(3);
        let ids: Vec<&str> = r.deliveries().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["delivery-0", "delivery-1", "delivery-2"]);
    }

    #[test]
    fn remove_renumbers_and_keeps_warehouse() {
        let mut r = request_with(3);
        let removed = r.remove_delivery(0).unwrap();
        assert_eq!(removed.pickup_node_id.as_str(), "p0");
        assert_eq!(r.delivery_count(), 2);
        assert_eq!(r.deliveries()[0].id.as_str(), "delivery-0");
        assert_eq!(r.deliveries()[0].pickup_node_id.as_str(), "p1");
        assert_eq!(r.deliveries()[1].id.as_str(), "delivery-1");
        assert_eq!(r.warehouse.node_id.as_str(), "w");
    }

    #[test]
    fn remove_only_delivery() {
        let mut r = request_with(1);
        r.remove_delivery(0).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.warehouse.node_id.as_str(), "w");
    }

    #[test]
    fn remove_out_of_range() {
        let mut r = request_with(1);
        let err = r.remove_delivery(1).unwrap_err();
        assert!(matches!(err, RequestError::DeliveryIndex { index: 1, len: 1 }));
        assert_eq!(r.delivery_count(), 1);
    }

    #[test]
    fn set_warehouse_keeps_departure() {
        let mut r = request_with(0);
        r.warehouse.departure = "9:30:0".parse().unwrap();
        r.set_warehouse_node(NodeId::from("w2"));
        assert_eq!(r.warehouse.node_id.as_str(), "w2");
        assert_eq!(r.warehouse.departure.to_string(), "09:30:00");
    }

    #[test]
    fn locate_stop_prefers_first_delivery_then_pickup() {
        let mut r = request_with(0);
        r.push_delivery(new_delivery("x", "y", 0, 0));
        r.push_delivery(new_delivery("y", "x", 0, 0));
        assert_eq!(r.locate_stop("x"), Some((0, StopKind::Pickup)));
        assert_eq!(r.locate_stop("y"), Some((0, StopKind::Delivery)));
        assert_eq!(r.locate_stop("z"), None);
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use crate::{parse_request, RequestError};

    #[test]
    fn parses_warehouse_and_deliveries() {
        let r = parse_request(super::SMALL_REQUEST).unwrap();
        assert_eq!(r.warehouse.node_id.as_str(), "342873658");
        assert_eq!(r.warehouse.departure.to_string(), "08:00:00");
        assert_eq!(r.delivery_count(), 2);

        let d = &r.deliveries()[1];
        assert_eq!(d.id.as_str(), "delivery-1");
        assert_eq!(d.pickup_node_id.as_str(), "1679901320");
        assert_eq!(d.delivery_node_id.as_str(), "208769457");
        assert_eq!(d.pickup_duration, 420);
        assert_eq!(d.delivery_duration, 600);
    }

    #[test]
    fn ids_follow_document_order() {
        let r = parse_request(super::SMALL_REQUEST).unwrap();
        for (i, d) in r.deliveries().iter().enumerate() {
            assert_eq!(d.id.as_str(), format!("delivery-{i}"));
        }
    }

    #[test]
    fn warehouse_only() {
        let r = parse_request(
            r#"<demandeDeLivraison>
                 <entrepot adresse="1" heureDepart="7:5:3"/>
               </demandeDeLivraison>"#,
        )
        .unwrap();
        assert!(r.is_empty());
        assert_eq!(r.warehouse.departure.to_document_string(), "7:5:3");
    }

    #[test]
    fn missing_warehouse() {
        let err = parse_request("<demandeDeLivraison></demandeDeLivraison>").unwrap_err();
        assert!(matches!(err, RequestError::WarehouseCount(0)));
        assert!(err.is_malformed());
    }

    #[test]
    fn two_warehouses() {
        let err = parse_request(
            r#"<demandeDeLivraison>
                 <entrepot adresse="1" heureDepart="8:0:0"/>
                 <entrepot adresse="2" heureDepart="8:0:0"/>
               </demandeDeLivraison>"#,
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::WarehouseCount(2)));
    }

    #[test]
    fn bad_departure_time() {
        let err = parse_request(
            r#"<demandeDeLivraison>
                 <entrepot adresse="1" heureDepart="noon"/>
               </demandeDeLivraison>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RequestError::Malformed { element: "entrepot", attribute: "heureDepart", .. }
        ));
    }

    #[test]
    fn missing_warehouse_address() {
        let err = parse_request(
            r#"<demandeDeLivraison><entrepot heureDepart="8:0:0"/></demandeDeLivraison>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RequestError::Malformed { element: "entrepot", attribute: "adresse", .. }
        ));
    }

    #[test]
    fn bad_duration() {
        for bad in ["abc", "-5", "1.5", ""] {
            let xml = format!(
                r#"<demandeDeLivraison>
                     <entrepot adresse="1" heureDepart="8:0:0"/>
                     <livraison adresseEnlevement="2" adresseLivraison="3"
                                dureeEnlevement="{bad}" dureeLivraison="0"/>
                   </demandeDeLivraison>"#
            );
            let err = parse_request(&xml).unwrap_err();
            assert!(
                matches!(
                    err,
                    RequestError::Malformed {
                        element: "livraison",
                        attribute: "dureeEnlevement",
                        ..
                    }
                ),
                "{bad:?} should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn not_xml() {
        let err = parse_request("<demandeDeLivraison><entrepot adresse=1/></demandeDeLivraison>")
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn truncated_document() {
        let end = super::SMALL_REQUEST.find("</demandeDeLivraison>").unwrap();
        let err = parse_request(&super::SMALL_REQUEST[..end]).unwrap_err();
        assert!(matches!(err, RequestError::Xml(_)), "got {err}");

        let err = parse_request(
            r#"<demandeDeLivraison>
                 <entrepot adresse="1" heureDepart="8:0:0"/>
                 <livraison adresseEnlevement="2" adresseLivraison="3"
                            dureeEnlevement="0" dureeLivraison="0"/>"#,
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::Xml(_)));
    }

    #[test]
    fn single_root_required() {
        let bare = r#"<entrepot adresse="1" heureDepart="8:0:0"/>"#;
        assert!(matches!(parse_request(bare).unwrap_err(), RequestError::Xml(_)));

        let twice = r#"<demandeDeLivraison>
                         <entrepot adresse="1" heureDepart="8:0:0"/>
                       </demandeDeLivraison>
                       <demandeDeLivraison/>"#;
        assert!(matches!(parse_request(twice).unwrap_err(), RequestError::Xml(_)));

        assert!(matches!(parse_request("").unwrap_err(), RequestError::Xml(_)));
    }
}

// ── Writing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod write {
    use super::*;
    use crate::{parse_request, write_request, RequestError};

    fn tuples(r: &DeliveryRequest) -> Vec<(String, String, u32, u32)> {
        r.deliveries()
            .iter()
            .map(|d| {
                let (p, q, pd, dd) = d.content();
                (p.to_string(), q.to_string(), pd, dd)
            })
            .collect()
    }

    #[test]
    fn round_trip_preserves_content() {
        let original = parse_request(super::SMALL_REQUEST).unwrap();
        let xml = write_request(Some(&original), &[]).unwrap();
        let reparsed = parse_request(&xml).unwrap();
        assert_eq!(reparsed.warehouse, original.warehouse);
        assert_eq!(tuples(&reparsed), tuples(&original));
        assert_eq!(reparsed, original); // ids are regenerated identically
    }

    #[test]
    fn additional_pairs_follow_existing_deliveries() {
        let r = request_with(1);
        let extra = [new_delivery("p9", "d9", 0, 30)];
        let reparsed = parse_request(&write_request(Some(&r), &extra).unwrap()).unwrap();
        assert_eq!(reparsed.delivery_count(), 2);
        assert_eq!(reparsed.deliveries()[1].pickup_node_id.as_str(), "p9");
        assert_eq!(reparsed.deliveries()[1].pickup_duration, 0);
        assert_eq!(reparsed.deliveries()[1].delivery_duration, 30);
        assert_eq!(reparsed.deliveries()[1].id.as_str(), "delivery-1");
    }

    #[test]
    fn without_request_omits_warehouse() {
        let xml = write_request(None, &[new_delivery("a", "b", 1, 2)]).unwrap();
        assert!(!xml.contains("entrepot"));
        assert!(xml.contains("livraison"));
        assert!(matches!(parse_request(&xml).unwrap_err(), RequestError::WarehouseCount(0)));
    }

    #[test]
    fn document_departure_format() {
        let xml = write_request(Some(&request_with(0)), &[]).unwrap();
        assert!(xml.contains(r#"heureDepart="8:0:0""#), "{xml}");
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn node_ids_are_escaped() {
        let mut r = request_with(0);
        r.set_warehouse_node(NodeId::from(r#"a"<&>b"#));
        let reparsed = parse_request(&write_request(Some(&r), &[]).unwrap()).unwrap();
        assert_eq!(reparsed.warehouse.node_id.as_str(), r#"a"<&>b"#);
    }
}
