//! Warfare: whether, whom, and how a nation attacks each tick.

use rand::Rng;
use tracing::debug;

use crate::config::SimulationParams;
use crate::nation::Nation;

/// Give `actor` its once-per-tick chance to attack another nation.
///
/// Candidates are every other nation with a living population; a nation at
/// zero can neither attack nor be targeted. When the warfare draw passes,
/// one enemy is picked uniformly, and the actor commits only if strictly
/// stronger than the pick (a weaker or equal nation never attacks). Damage
/// lands on both sides at once, as a fraction of each side's population at
/// the moment of attack, with no retaliation cascade within the tick.
///
/// Returns the index of the defender when an attack happened.
pub fn resolve<R: Rng>(
    nations: &mut [Nation],
    actor: usize,
    params: &SimulationParams,
    rng: &mut R,
) -> Option<usize> {
    let candidates: Vec<usize> = (0..nations.len())
        .filter(|&i| i != actor && nations[i].population() > 0.0)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    if rng.gen::<f64>() >= params.warfare_probability {
        return None;
    }
    let target = candidates[rng.gen_range(0..candidates.len())];
    if nations[actor].population() <= nations[target].population() {
        return None;
    }

    nations[target].apply_battle_damage(params.enemy_damage);
    nations[actor].apply_battle_damage(params.attacker_damage);
    debug!(
        attacker = nations[actor].name(),
        defender = nations[target].name(),
        "attack"
    );
    Some(target)
}
