use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::{ConfigError, NationConfig, SimulationParams};
use crate::conflict;
use crate::nation::Nation;

/// Whether a nation still has anyone left, judged on the truncated
/// population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NationStatus {
    Alive,
    Extinct,
}

impl fmt::Display for NationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationStatus::Alive => write!(f, "Alive"),
            NationStatus::Extinct => write!(f, "Extinct"),
        }
    }
}

/// Read-only end-of-run view of one nation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationReport {
    pub name: String,
    pub population: u64,
    pub status: NationStatus,
    pub famine_count: u32,
    pub food: u64,
    pub war_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSummary {
    pub ticks: u64,
    pub nations: Vec<NationReport>,
}

/// Owns the fixed roster, the simulation parameters, the seeded random
/// source, and the tick counter. Strictly sequential: exactly one nation
/// transitions at a time, and an attack mutates both participants before
/// the next nation in the shuffled order begins.
///
/// A run is fully reproducible from its roster and seed; parallel scenario
/// sweeps must give each run its own `World`.
pub struct World {
    nations: Vec<Nation>,
    params: SimulationParams,
    rng: ChaCha8Rng,
    tick: u64,
}

impl World {
    /// Build a world from a fixed roster. Names must be unique and every
    /// nation's attributes valid, otherwise the run aborts before any tick
    /// executes.
    pub fn new(
        roster: Vec<NationConfig>,
        params: SimulationParams,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        let mut nations: Vec<Nation> = Vec::with_capacity(roster.len());
        for config in roster {
            if nations.iter().any(|n| n.name() == config.name) {
                return Err(ConfigError::DuplicateName { name: config.name });
            }
            nations.push(Nation::new(config)?);
        }
        Ok(Self {
            nations,
            params,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    /// Advance every nation one tick, in freshly shuffled order.
    ///
    /// Order matters: a nation that already took its turn can still be
    /// attacked later in the same tick, and a famine-weakened nation is a
    /// viable target immediately.
    pub fn advance_tick(&mut self) {
        let mut order: Vec<usize> = (0..self.nations.len()).collect();
        order.shuffle(&mut self.rng);
        for actor in order {
            self.nations[actor].resolve_resources(&self.params, &mut self.rng);
            conflict::resolve(&mut self.nations, actor, &self.params, &mut self.rng);
            self.nations[actor].record_history();
        }
        self.tick += 1;
    }

    /// Run `ticks` consecutive years.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.advance_tick();
        }
    }

    /// Read-only end-of-run report; mutates nothing.
    pub fn summarize(&self) -> WorldSummary {
        let nations = self
            .nations
            .iter()
            .map(|nation| {
                let population = nation.population().trunc() as u64;
                NationReport {
                    name: nation.name().to_string(),
                    population,
                    status: if population > 0 {
                        NationStatus::Alive
                    } else {
                        NationStatus::Extinct
                    },
                    famine_count: nation.famine_count(),
                    food: nation.food().trunc() as u64,
                    war_count: nation.war_count(),
                }
            })
            .collect();
        WorldSummary {
            ticks: self.tick,
            nations,
        }
    }
}
