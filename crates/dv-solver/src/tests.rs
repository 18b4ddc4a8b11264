//! Unit tests for dv-solver.  None of them opens a network connection.

use std::collections::HashMap;

use crate::{SolverClient, SolverConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |k| map.get(k).cloned()
}

fn client(base_url: &str) -> SolverClient {
    SolverClient::new(SolverConfig { base_url: base_url.to_owned(), ..SolverConfig::default() })
        .unwrap()
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::time::Duration;

    use super::*;
    use crate::SolverError;

    #[test]
    fn defaults_without_environment() {
        let c = SolverConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(c, SolverConfig::default());
        assert_eq!(c.couriers, 1);
        assert_eq!(c.time_budget, Duration::from_secs(10));
    }

    #[test]
    fn environment_overrides() {
        let c = SolverConfig::from_lookup(env(&[
            ("DELIVERIF_SOLVER_URL", "http://solver:9000/api"),
            ("DELIVERIF_COURIERS", "3"),
            ("DELIVERIF_SPEED_FACTOR", " 1.5 "),
            ("DELIVERIF_TIME_BUDGET_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(c.base_url, "http://solver:9000/api");
        assert_eq!(c.couriers, 3);
        assert_eq!(c.speed_factor, 1.5);
        assert_eq!(c.time_budget, Duration::from_secs(30));
    }

    #[test]
    fn unparseable_value() {
        let err = SolverConfig::from_lookup(env(&[("DELIVERIF_COURIERS", "two")])).unwrap_err();
        assert!(matches!(err, SolverError::Config { var: "DELIVERIF_COURIERS", .. }));
    }

    #[test]
    fn zero_couriers_rejected() {
        let err = SolverConfig::from_lookup(env(&[("DELIVERIF_COURIERS", "0")])).unwrap_err();
        assert!(matches!(err, SolverError::Config { var: "DELIVERIF_COURIERS", .. }));
    }

    #[test]
    fn non_positive_speed_rejected() {
        for bad in ["0", "-1", "NaN"] {
            let err =
                SolverConfig::from_lookup(env(&[("DELIVERIF_SPEED_FACTOR", bad)])).unwrap_err();
            assert!(
                matches!(err, SolverError::Config { var: "DELIVERIF_SPEED_FACTOR", .. }),
                "{bad}"
            );
        }
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod protocol {
    use serde_json::json;

    use super::*;
    use crate::{DocumentSource, SolveResponse, UploadReceipt};

    #[test]
    fn solve_request_shape() {
        let c = client("http://localhost:8080");
        let body = c.solve_request(
            DocumentSource::Name("petitPlan.xml".into()),
            DocumentSource::Xml("<demandeDeLivraison/>".into()),
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "graph": { "name": "petitPlan.xml" },
                "request": { "xml": "<demandeDeLivraison/>" },
                "couriers": 1,
                "speedFactor": 1.0,
                "timeBudgetSecs": 10
            })
        );
    }

    #[test]
    fn solve_response_to_paths() {
        let r: SolveResponse = serde_json::from_value(json!({
            "deliveryCount": 1,
            "courierCount": 2,
            "paths": [["W", "P1", "D1", "W"], ["W", "W"]]
        }))
        .unwrap();
        assert_eq!(r.delivery_count, 1);
        let paths = r.courier_paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].interior().len(), 2);
        assert_eq!(paths[0].nodes()[1].as_str(), "P1");
        assert!(paths[1].interior().is_empty());
    }

    #[test]
    fn malformed_response_is_a_deserialize_error() {
        let err = serde_json::from_str::<SolveResponse>(r#"{"paths": "nope"}"#).unwrap_err();
        let err: crate::SolverError = err.into();
        assert!(matches!(err, crate::SolverError::Deserialize(_)));
    }

    #[test]
    fn upload_receipt() {
        let r: UploadReceipt = serde_json::from_str(
            r#"{"message": "File uploaded successfully", "filename": "mine.xml"}"#,
        )
        .unwrap();
        assert_eq!(r.filename, "mine.xml");
    }

    #[test]
    fn describe_never_contains_body() {
        let d = DocumentSource::Xml("<secret/>".into());
        assert_eq!(d.describe(), "inline:9B");
        assert_eq!(DocumentSource::Name("a.xml".into()).describe(), "stored:a.xml");
    }
}

// ── Client plumbing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod plumbing {
    use super::*;
    use crate::client::xml_file_name;
    use crate::{DocumentSource, SingleFlight, SolverError};

    #[test]
    fn endpoints_join_and_escape() {
        let c = client("http://localhost:8080");
        assert_eq!(c.endpoint(&["get_tsp"]).unwrap().as_str(), "http://localhost:8080/get_tsp");

        let c = client("http://host/api/");
        assert_eq!(
            c.endpoint(&["plans", "grand plan.xml"]).unwrap().as_str(),
            "http://host/api/plans/grand%20plan.xml"
        );
    }

    #[test]
    fn bad_base_url() {
        let c = client("not a url");
        assert!(matches!(c.endpoint(&["x"]), Err(SolverError::InvalidUrl { .. })));
    }

    #[test]
    fn upload_name_gets_extension_once() {
        assert_eq!(xml_file_name("mine"), "mine.xml");
        assert_eq!(xml_file_name("mine.xml"), "mine.xml");
    }

    #[test]
    fn service_error_keeps_message_verbatim() {
        let e = SolverError::Service { status: 500, message: "No route found".into() };
        assert_eq!(e.to_string(), "service error: 500 - No route found");
    }

    #[tokio::test]
    async fn single_flight_rejects_second_entry() {
        let gate = SingleFlight::new();
        let first = gate.try_enter().unwrap();
        assert!(gate.is_busy());
        assert!(matches!(gate.try_enter(), Err(SolverError::InFlight)));
        drop(first);
        assert!(!gate.is_busy());
        assert!(gate.try_enter().is_ok());
    }

    #[test]
    fn polling_busy_never_refuses_an_entry() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let gate = Arc::new(SingleFlight::new());
        let done = Arc::new(AtomicBool::new(false));
        let poller = {
            let (gate, done) = (Arc::clone(&gate), Arc::clone(&done));
            std::thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    let _ = gate.is_busy();
                }
            })
        };

        for _ in 0..20_000 {
            let guard = gate.try_enter();
            assert!(guard.is_ok(), "entry refused while only polled");
        }
        done.store(true, Ordering::Relaxed);
        poller.join().unwrap();
    }

    #[tokio::test]
    async fn solve_while_busy_fails_fast() {
        let c = client("http://10.255.255.1:9");
        let _held = c.flight.try_enter().unwrap();
        assert!(c.is_solving());
        let err = c
            .solve(DocumentSource::Name("g".into()), DocumentSource::Name("r".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, SolverError::InFlight));
    }

    #[test]
    fn zero_couriers_refused_by_client() {
        let cfg = SolverConfig { couriers: 0, ..SolverConfig::default() };
        assert!(matches!(SolverClient::new(cfg), Err(SolverError::Config { .. })));
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use crate::DocumentCatalog;

    #[test]
    fn empty_until_refreshed() {
        let c = DocumentCatalog::new();
        assert!(!c.is_loaded());
        assert!(c.plans().is_empty());
    }

    #[test]
    fn replace_sorts_and_marks_loaded() {
        let mut c = DocumentCatalog::new();
        c.replace(
            vec!["petitPlan.xml".into(), "grandPlan.xml".into()],
            vec!["demandePetit1.xml".into()],
        );
        assert!(c.is_loaded());
        assert_eq!(c.plans(), ["grandPlan.xml", "petitPlan.xml"]);
        assert!(c.has_plan("petitPlan.xml"));
        assert!(c.has_request("demandePetit1.xml"));
        assert!(!c.has_request("petitPlan.xml"));
    }
}
