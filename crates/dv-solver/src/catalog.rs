//! Cached lists of the documents stored on the service.
//!
//! The lists are filled only by an explicit [`DocumentCatalog::refresh`];
//! nothing revalidates them behind the caller's back.

use tracing::info;

use crate::{SolverClient, SolverResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentCatalog {
    plans:     Vec<String>,
    requests:  Vec<String>,
    refreshed: bool,
}

impl DocumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload both lists.  On error the previous lists are kept.
    pub async fn refresh(&mut self, client: &SolverClient) -> SolverResult<()> {
        let plans = client.plan_names().await?;
        let requests = client.request_names().await?;
        self.replace(plans, requests);
        info!(plans = self.plans.len(), requests = self.requests.len(), "catalog refreshed");
        Ok(())
    }

    pub(crate) fn replace(&mut self, mut plans: Vec<String>, mut requests: Vec<String>) {
        plans.sort();
        requests.sort();
        self.plans = plans;
        self.requests = requests;
        self.refreshed = true;
    }

    /// Whether [`refresh`](Self::refresh) has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.refreshed
    }

    pub fn plans(&self) -> &[String] {
        &self.plans
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn has_plan(&self, name: &str) -> bool {
        self.plans.iter().any(|p| p == name)
    }

    pub fn has_request(&self, name: &str) -> bool {
        self.requests.iter().any(|r| r == name)
    }
}
