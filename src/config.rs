use thiserror::Error;

/// Tuning constants for a simulation run.
///
/// Immutable once the world is built; `Default` carries the reference
/// values of the model. Keeping these on an explicit struct (instead of
/// module-level constants) lets tests run parameterized scenarios without
/// touching shared state.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// Chance per nation per tick of attempting an attack.
    pub warfare_probability: f64,
    /// Multiplier turning per-person food deficit into a death rate.
    pub famine_intensity: f64,
    /// Fraction of the defender's population lost in an attack.
    pub enemy_damage: f64,
    /// Fraction of the attacker's own population lost when attacking.
    pub attacker_damage: f64,
    /// Food units one person consumes per tick.
    pub consumption_per_person: f64,
    /// Integration step for the growth equation, in years.
    pub time_step: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            warfare_probability: 0.1,
            famine_intensity: 0.3,
            enemy_damage: 0.1,
            attacker_damage: 0.04,
            consumption_per_person: 10.0,
            time_step: 1.0,
        }
    }
}

/// Initial attributes of one nation in the roster.
#[derive(Debug, Clone)]
pub struct NationConfig {
    pub name: String,
    pub population: f64,
    pub food: f64,
    pub food_production: f64,
    pub growth_rate: f64,
    pub carrying_capacity: f64,
}

/// Fatal construction-time errors. A run never starts with an invalid
/// roster; once the world exists, no per-tick operation can raise.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("nation '{name}': growth_rate must be strictly positive, got {value}")]
    NonPositiveGrowthRate { name: String, value: f64 },
    #[error("nation '{name}': carrying_capacity must be strictly positive, got {value}")]
    NonPositiveCarryingCapacity { name: String, value: f64 },
    #[error("nation '{name}': {field} must be non-negative, got {value}")]
    NegativeInitial {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("nation '{name}' defined more than once")]
    DuplicateName { name: String },
    #[error("roster must contain at least one nation")]
    EmptyRoster,
}

impl NationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.growth_rate > 0.0) {
            return Err(ConfigError::NonPositiveGrowthRate {
                name: self.name.clone(),
                value: self.growth_rate,
            });
        }
        if !(self.carrying_capacity > 0.0) {
            return Err(ConfigError::NonPositiveCarryingCapacity {
                name: self.name.clone(),
                value: self.carrying_capacity,
            });
        }
        for (field, value) in [
            ("population", self.population),
            ("food", self.food),
            ("food_production", self.food_production),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeInitial {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// The built-in three-nation roster used by the demo binary and the
/// determinism tests.
pub fn demo_roster() -> Vec<NationConfig> {
    vec![
        NationConfig {
            name: "Nation_A".into(),
            population: 1000.0,
            food: 5000.0,
            food_production: 10500.0,
            growth_rate: 0.02,
            carrying_capacity: 5000.0,
        },
        NationConfig {
            name: "Nation_B".into(),
            population: 1500.0,
            food: 7000.0,
            food_production: 16000.0,
            growth_rate: 0.025,
            carrying_capacity: 7000.0,
        },
        NationConfig {
            name: "Nation_C".into(),
            population: 800.0,
            food: 4000.0,
            food_production: 8200.0,
            growth_rate: 0.015,
            carrying_capacity: 4000.0,
        },
    ]
}
