//! Solver settings shared by every subcommand that talks to the service.

use std::time::Duration;

use clap::Args;

use dv_solver::{SolverClient, SolverConfig};

#[derive(Args, Clone, Debug, Default)]
pub struct ServiceArgs {
    /// Solver base URL [env: DELIVERIF_SOLVER_URL]
    #[arg(long)]
    url: Option<String>,

    /// Number of couriers [env: DELIVERIF_COURIERS]
    #[arg(short, long)]
    couriers: Option<u32>,

    /// Travel-speed multiplier [env: DELIVERIF_SPEED_FACTOR]
    #[arg(long)]
    speed_factor: Option<f64>,

    /// Solver search budget in seconds [env: DELIVERIF_TIME_BUDGET_SECS]
    #[arg(long)]
    time_budget: Option<u64>,
}

impl ServiceArgs {
    /// Environment first, then flags on top.
    pub fn config(&self) -> anyhow::Result<SolverConfig> {
        let mut c = SolverConfig::from_env()?;
        if let Some(url) = &self.url {
            c.base_url = url.clone();
        }
        if let Some(n) = self.couriers {
            c.couriers = n;
        }
        if let Some(f) = self.speed_factor {
            c.speed_factor = f;
        }
        if let Some(s) = self.time_budget {
            c.time_budget = Duration::from_secs(s);
        }
        c.validate()?;
        Ok(c)
    }

    pub fn client(&self) -> anyhow::Result<SolverClient> {
        Ok(SolverClient::new(self.config()?)?)
    }
}
