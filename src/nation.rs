use rand::Rng;
use tracing::{debug, warn};

use crate::config::{ConfigError, NationConfig, SimulationParams};
use crate::growth;

/// One competing polity: current attributes plus its per-tick record.
///
/// Population is kept as a real number internally and truncated toward
/// zero whenever it is snapshotted into the history or reported. The
/// histories double as the authoritative "previous value" source for the
/// next tick's food balance.
#[derive(Debug, Clone)]
pub struct Nation {
    name: String,
    population: f64,
    food: f64,
    food_production: f64,
    growth_rate: f64,
    carrying_capacity: f64,
    population_history: Vec<u64>,
    food_history: Vec<f64>,
    war_count: u32,
    famine_count: u32,
}

impl Nation {
    pub fn new(config: NationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            population_history: vec![config.population.trunc() as u64],
            food_history: vec![config.food],
            name: config.name,
            population: config.population,
            food: config.food,
            food_production: config.food_production,
            growth_rate: config.growth_rate,
            carrying_capacity: config.carrying_capacity,
            war_count: 0,
            famine_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> f64 {
        self.population
    }

    pub fn food(&self) -> f64 {
        self.food
    }

    pub fn war_count(&self) -> u32 {
        self.war_count
    }

    pub fn famine_count(&self) -> u32 {
        self.famine_count
    }

    /// Per-tick population snapshots, index = tick number.
    pub fn population_history(&self) -> &[u64] {
        &self.population_history
    }

    /// Per-tick food snapshots, index = tick number.
    pub fn food_history(&self) -> &[f64] {
        &self.food_history
    }

    /// Population as recorded at the end of the previous tick.
    pub fn last_population(&self) -> f64 {
        *self
            .population_history
            .last()
            .expect("history seeded at construction") as f64
    }

    fn last_food(&self) -> f64 {
        *self
            .food_history
            .last()
            .expect("history seeded at construction")
    }

    /// Resolve one tick of consumption, stochastic yield, and growth or
    /// famine.
    ///
    /// The conflict opportunity and the history append happen afterwards,
    /// driven by the world, so a nation resolved earlier in the tick can
    /// still be attacked before its history is read again.
    pub fn resolve_resources<R: Rng>(&mut self, params: &SimulationParams, rng: &mut R) {
        let last_population = self.last_population();
        let consumption = last_population * params.consumption_per_person;
        let weather_factor = rng.gen_range(0.8..1.2);
        let actual_production = self.food_production * weather_factor;
        self.food = self.last_food() + actual_production - consumption;

        if self.food >= 0.0 {
            self.population = growth::integrate(
                self.population.trunc(),
                params.time_step,
                self.growth_rate,
                self.carrying_capacity,
            );
        } else {
            self.starve(last_population, params.famine_intensity);
        }
    }

    /// Famine: the food deficit translates into a capped death rate.
    fn starve(&mut self, last_population: f64, famine_intensity: f64) {
        let deaths = if last_population > 0.0 {
            let deficit_per_person = self.food.abs() / last_population;
            let death_rate = (deficit_per_person * famine_intensity).min(1.0);
            (last_population * death_rate).floor()
        } else {
            // An empty nation consumes nothing, so its balance can never go
            // negative from consumption; this branch should be unreachable.
            debug_assert!(false, "famine branch reached with zero population");
            warn!(nation = %self.name, "famine with zero population; no deaths applied");
            0.0
        };
        self.population = (last_population - deaths).max(0.0);
        self.food = 0.0;
        self.famine_count += 1;
        debug!(nation = %self.name, deaths, population = self.population, "famine");
    }

    /// Lose `fraction` of the current population to a battle and count the
    /// war. Used for both sides of an attack.
    pub(crate) fn apply_battle_damage(&mut self, fraction: f64) {
        self.population = (self.population - self.population * fraction).max(0.0);
        self.war_count += 1;
    }

    /// Append the tick's resolved food and truncated population.
    pub fn record_history(&mut self) {
        self.food_history.push(self.food);
        self.population_history.push(self.population.trunc() as u64);
    }
}
