//! HTTP client for the solver service.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    DocumentSource, SingleFlight, SolveRequest, SolveResponse, SolverConfig, SolverError,
    SolverResult, UploadReceipt,
};

pub const SOLVE_PATH: &str = "get_tsp";
pub const PLAN_NAMES_PATH: &str = "plan-names";
pub const REQUEST_NAMES_PATH: &str = "request-names";
pub const PLANS_PATH: &str = "plans";
pub const REQUESTS_PATH: &str = "requests";
pub const UPLOAD_PATH: &str = "upload-request";

pub struct SolverClient {
    config: SolverConfig,
    client: reqwest::Client,
    pub(crate) flight: SingleFlight,
}

impl SolverClient {
    pub fn new(config: SolverConfig) -> SolverResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self { config, client, flight: SingleFlight::new() })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Whether a [`solve`](Self::solve) call is currently running.
    pub fn is_solving(&self) -> bool {
        self.flight.is_busy()
    }

    /// The body [`solve`](Self::solve) would post for these documents.
    pub fn solve_request(&self, graph: DocumentSource, request: DocumentSource) -> SolveRequest {
        SolveRequest {
            graph,
            request,
            couriers:         self.config.couriers,
            speed_factor:     self.config.speed_factor,
            time_budget_secs: self.config.time_budget.as_secs(),
        }
    }

    /// Ask the service for one path per courier.
    ///
    /// # Errors
    ///
    /// [`SolverError::InFlight`] immediately if another call on this client
    /// has not finished yet.
    pub async fn solve(
        &self,
        graph:   DocumentSource,
        request: DocumentSource,
    ) -> SolverResult<SolveResponse> {
        let _flight = self.flight.try_enter()?;
        let body = self.solve_request(graph, request);
        info!(
            graph = %body.graph.describe(),
            request = %body.request.describe(),
            couriers = body.couriers,
            "requesting routes"
        );

        let response = self.client.post(self.endpoint(&[SOLVE_PATH])?).json(&body).send().await?;
        let solution: SolveResponse = read_json(response).await?;

        if solution.paths.len() != solution.courier_count {
            warn!(
                courier_count = solution.courier_count,
                paths = solution.paths.len(),
                "solver returned a path count different from its courier count"
            );
        }
        info!(
            deliveries = solution.delivery_count,
            couriers = solution.courier_count,
            "routes received"
        );
        Ok(solution)
    }

    // ── Document store ────────────────────────────────────────────────────

    pub async fn plan_names(&self) -> SolverResult<Vec<String>> {
        self.get_json(&[PLAN_NAMES_PATH]).await
    }

    pub async fn request_names(&self) -> SolverResult<Vec<String>> {
        self.get_json(&[REQUEST_NAMES_PATH]).await
    }

    /// Text of the stored graph document `name`.
    pub async fn fetch_plan(&self, name: &str) -> SolverResult<String> {
        self.get_text(&[PLANS_PATH, name]).await
    }

    /// Text of the stored request document `name`.
    pub async fn fetch_request(&self, name: &str) -> SolverResult<String> {
        self.get_text(&[REQUESTS_PATH, name]).await
    }

    /// Store `xml` on the service as a request document.  `.xml` is appended
    /// to `file_name` when missing.
    pub async fn upload_request(
        &self,
        file_name: &str,
        xml:       String,
    ) -> SolverResult<UploadReceipt> {
        let file_name = xml_file_name(file_name);
        let part = Part::text(xml).file_name(file_name.clone()).mime_str("application/xml")?;
        let form = Form::new().part("file", part);

        let url = self.endpoint(&[UPLOAD_PATH])?;
        let response = self.client.post(url).multipart(form).send().await?;
        let receipt: UploadReceipt = read_json(response).await?;
        info!(file = %receipt.filename, "request uploaded");
        Ok(receipt)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    pub(crate) fn endpoint(&self, segments: &[&str]) -> SolverResult<Url> {
        let invalid = |reason: String| SolverError::InvalidUrl {
            url: self.config.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.config.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base URL".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> SolverResult<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        read_json(self.client.get(url).send().await?).await
    }

    async fn get_text(&self, segments: &[&str]) -> SolverResult<String> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        Ok(check(self.client.get(url).send().await?).await?.text().await?)
    }
}

pub(crate) fn xml_file_name(name: &str) -> String {
    if name.ends_with(".xml") { name.to_owned() } else { format!("{name}.xml") }
}

/// Pass a success response through; turn anything else into
/// [`SolverError::Service`] carrying the body verbatim.
async fn check(response: Response) -> SolverResult<Response> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        warn!(status, %message, "service call failed");
        return Err(SolverError::Service { status, message });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> SolverResult<T> {
    let body = check(response).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
}
