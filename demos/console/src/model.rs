//! A small discrete-time compartment model (susceptible, infected,
//! recovered, dead) standing in for a real epidemic simulation.

use gv_core::{Day, TargetStats, round_pct};
use gv_sim::{EpidemicModel, SimResult};
use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    pub population: u32,
    /// New infections per infected individual per day, at full susceptibility.
    pub beta:       f64,
    /// Daily recovery probability.
    pub gamma:      f64,
    /// Daily death probability.
    pub mu:         f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self { population: 10_000, beta: 0.3, gamma: 0.08, mu: 0.004 }
    }
}

pub struct CompartmentModel {
    params:      ModelParams,
    susceptible: f64,
    infected:    f64,
    recovered:   f64,
    dead:        f64,
}

impl CompartmentModel {
    pub fn new(params: ModelParams) -> Self {
        let population = f64::from(params.population.max(1));
        Self { params, susceptible: population, infected: 0.0, recovered: 0.0, dead: 0.0 }
    }

    fn population(&self) -> f64 {
        self.susceptible + self.infected + self.recovered + self.dead
    }

    fn percentages(&self) -> TargetStats {
        let pct = |v: f64| round_pct(v / self.population() * 100.0);
        TargetStats::new(
            pct(self.susceptible),
            pct(self.infected),
            pct(self.recovered),
            pct(self.dead),
        )
    }
}

impl EpidemicModel for CompartmentModel {
    fn seed_infections(&mut self, count: u32) -> SimResult<()> {
        let moved = f64::from(count).min(self.susceptible);
        self.susceptible -= moved;
        self.infected += moved;
        debug!(count = moved, "seeded infections");
        Ok(())
    }

    fn pass_day(&mut self, day: Day) -> SimResult<TargetStats> {
        let n = self.population();
        let p = &self.params;
        let new_infections = (p.beta * self.susceptible * self.infected / n).min(self.susceptible);
        let recoveries = (p.gamma * self.infected).min(self.infected);
        let deaths = (p.mu * self.infected).min(self.infected - recoveries);

        self.susceptible -= new_infections;
        self.infected += new_infections - recoveries - deaths;
        self.recovered += recoveries;
        self.dead += deaths;

        let stats = self.percentages();
        debug!(day = day.0, infected_pct = stats.infected_percentage, "model day");
        Ok(stats)
    }
}
