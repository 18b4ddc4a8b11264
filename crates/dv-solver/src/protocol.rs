//! JSON shapes exchanged with the solver service.
//!
//! ```json
//! // POST /get_tsp
//! { "graph":   { "name": "petitPlan.xml" },
//!   "request": { "xml": "<demandeDeLivraison>…</demandeDeLivraison>" },
//!   "couriers": 2, "speedFactor": 1.0, "timeBudgetSecs": 10 }
//!
//! // 200 OK
//! { "deliveryCount": 2, "courierCount": 2,
//!   "paths": [["W", "P1", "D1", "W"], ["W", "P2", "D2", "W"]] }
//! ```

use serde::{Deserialize, Serialize};

use dv_overlay::CourierPath;

/// A document either stored on the service (by name) or sent inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Name(String),
    Xml(String),
}

impl DocumentSource {
    /// Short description for logs; never the document body.
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::Name(n) => format!("stored:{n}"),
            DocumentSource::Xml(x) => format!("inline:{}B", x.len()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub graph:            DocumentSource,
    pub request:          DocumentSource,
    pub couriers:         u32,
    pub speed_factor:     f64,
    pub time_budget_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub delivery_count: usize,
    pub courier_count:  usize,
    /// One node-id sequence per courier, warehouse first and last.
    pub paths:          Vec<Vec<String>>,
}

impl SolveResponse {
    pub fn courier_paths(&self) -> Vec<CourierPath> {
        self.paths.iter().map(|p| CourierPath::new(p.iter().map(String::as_str))).collect()
    }
}

/// Reply of the upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message:  String,
    pub filename: String,
}
