//! Solver connection and tuning parameters.
//!
//! | Variable                     | Field          | Default                 |
//! |------------------------------|----------------|-------------------------|
//! | `DELIVERIF_SOLVER_URL`       | `base_url`     | `http://localhost:8080` |
//! | `DELIVERIF_COURIERS`         | `couriers`     | `1` (must be ≥ 1)       |
//! | `DELIVERIF_SPEED_FACTOR`     | `speed_factor` | `1.0` (must be > 0)     |
//! | `DELIVERIF_TIME_BUDGET_SECS` | `time_budget`  | `10`                    |

use std::str::FromStr;
use std::time::Duration;

use crate::{SolverError, SolverResult};

pub const ENV_URL: &str = "DELIVERIF_SOLVER_URL";
pub const ENV_COURIERS: &str = "DELIVERIF_COURIERS";
pub const ENV_SPEED_FACTOR: &str = "DELIVERIF_SPEED_FACTOR";
pub const ENV_TIME_BUDGET: &str = "DELIVERIF_TIME_BUDGET_SECS";

#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Service root; endpoint paths are appended to it.
    pub base_url:     String,

    /// Number of couriers to plan for.
    pub couriers:     u32,

    /// Multiplier applied by the solver to travel speeds.
    pub speed_factor: f64,

    /// Wall-clock budget the solver may spend searching.
    pub time_budget:  Duration,

    /// Timeout of each HTTP call made by the client.
    pub http_timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_url:     "http://localhost:8080".to_owned(),
            couriers:     1,
            speed_factor: 1.0,
            time_budget:  Duration::from_secs(10),
            http_timeout: Duration::from_secs(120),
        }
    }
}

impl SolverConfig {
    /// Defaults overridden by the `DELIVERIF_*` process environment.
    pub fn from_env() -> SolverResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> SolverResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut c = Self::default();
        if let Some(url) = lookup(ENV_URL) {
            c.base_url = url;
        }
        if let Some(v) = lookup(ENV_COURIERS) {
            c.couriers = parse(ENV_COURIERS, &v)?;
        }
        if let Some(v) = lookup(ENV_SPEED_FACTOR) {
            c.speed_factor = parse(ENV_SPEED_FACTOR, &v)?;
        }
        if let Some(v) = lookup(ENV_TIME_BUDGET) {
            c.time_budget = Duration::from_secs(parse(ENV_TIME_BUDGET, &v)?);
        }
        c.validate()?;
        Ok(c)
    }

    /// Reject values the service cannot work with.
    pub fn validate(&self) -> SolverResult<()> {
        if self.couriers == 0 {
            return Err(SolverError::Config {
                var:    ENV_COURIERS,
                value:  self.couriers.to_string(),
                reason: "at least one courier is required",
            });
        }
        if !(self.speed_factor.is_finite() && self.speed_factor > 0.0) {
            return Err(SolverError::Config {
                var:    ENV_SPEED_FACTOR,
                value:  self.speed_factor.to_string(),
                reason: "must be a positive number",
            });
        }
        Ok(())
    }
}

fn parse<T: FromStr>(var: &'static str, raw: &str) -> SolverResult<T> {
    raw.trim().parse().map_err(|_| SolverError::Config {
        var,
        value:  raw.to_owned(),
        reason: "not a valid number",
    })
}
