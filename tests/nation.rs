//! Per-nation state-transition behavior: food balance, growth, famine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hegemon::{growth, ConfigError, Nation, NationConfig, SimulationParams};

fn config(name: &str, population: f64, food: f64, food_production: f64) -> NationConfig {
    NationConfig {
        name: name.into(),
        population,
        food,
        food_production,
        growth_rate: 0.02,
        carrying_capacity: 5000.0,
    }
}

#[test]
fn famine_kills_in_proportion_to_deficit() {
    // Zero production keeps the weather draw out of the balance:
    // 950 food - 100 people * 10 = -50, so 0.5 deficit per person,
    // death rate min(1, 0.5 * 0.3) = 0.15, 15 deaths.
    let mut nation = Nation::new(config("a", 100.0, 950.0, 0.0)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    nation.resolve_resources(&SimulationParams::default(), &mut rng);
    nation.record_history();

    assert_eq!(nation.population(), 85.0);
    assert_eq!(nation.food(), 0.0);
    assert_eq!(nation.famine_count(), 1);
    assert_eq!(nation.population_history(), &[100, 85]);
    assert_eq!(nation.food_history(), &[950.0, 0.0]);
}

#[test]
fn famine_counts_even_when_nobody_dies() {
    // Balance of -0.05 gives a death rate of 0.00015; deaths floor to 0.
    let mut nation = Nation::new(config("a", 100.0, 999.95, 0.0)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    nation.resolve_resources(&SimulationParams::default(), &mut rng);

    assert_eq!(nation.population(), 100.0);
    assert_eq!(nation.food(), 0.0);
    assert_eq!(nation.famine_count(), 1);
}

#[test]
fn death_rate_caps_at_total_loss() {
    // Deficit per person of 100 would give a 30x death rate; it is capped
    // at 1.0 and the population bottoms out at zero, never below.
    let mut nation = Nation::new(config("a", 100.0, 0.0, 0.0)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    nation.resolve_resources(&SimulationParams::default(), &mut rng);

    assert_eq!(nation.population(), 0.0);
    assert_eq!(nation.food(), 0.0);
    assert_eq!(nation.famine_count(), 1);
}

#[test]
fn surplus_food_grows_population_via_rk4() {
    let mut nation = Nation::new(config("a", 100.0, 10_000.0, 0.0)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    nation.resolve_resources(&SimulationParams::default(), &mut rng);

    assert_eq!(nation.famine_count(), 0);
    let expected = growth::integrate(100.0, 1.0, 0.02, 5000.0);
    assert!((nation.population() - expected).abs() < 1e-12);
    // 10000 - 1000 consumed, production zero.
    assert_eq!(nation.food(), 9000.0);
}

#[test]
fn empty_nation_transition_is_a_noop() {
    let mut nation = Nation::new(config("ghost", 0.0, 100.0, 50.0)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..10 {
        nation.resolve_resources(&SimulationParams::default(), &mut rng);
        nation.record_history();
    }

    assert_eq!(nation.population(), 0.0);
    assert_eq!(nation.famine_count(), 0);
    assert!(nation.food() >= 100.0, "stock only accumulates");
    assert!(nation.population_history().iter().all(|&p| p == 0));
}

#[test]
fn construction_rejects_bad_attributes() {
    let bad_rate = NationConfig {
        growth_rate: 0.0,
        ..config("a", 100.0, 100.0, 100.0)
    };
    assert!(matches!(
        Nation::new(bad_rate),
        Err(ConfigError::NonPositiveGrowthRate { .. })
    ));

    let bad_capacity = NationConfig {
        carrying_capacity: -5000.0,
        ..config("a", 100.0, 100.0, 100.0)
    };
    assert!(matches!(
        Nation::new(bad_capacity),
        Err(ConfigError::NonPositiveCarryingCapacity { .. })
    ));

    let bad_food = config("a", 100.0, -1.0, 100.0);
    assert!(matches!(
        Nation::new(bad_food),
        Err(ConfigError::NegativeInitial { field: "food", .. })
    ));
}
