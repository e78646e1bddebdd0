//! Damage formulas.
//!
//! All damage is integral and every hit deals at least 1.

/// Damage of one melee hit.
#[must_use]
pub fn melee_damage(attack: i32, defense: i32) -> i32 {
    attack.saturating_sub(defense).max(1)
}

/// Damage of one fatigue pulse against a hero with `max_hp`.
#[must_use]
pub fn fatigue_damage(max_hp: i32, fraction: f32) -> i32 {
    ((max_hp as f32 * fraction).floor() as i32).max(1)
}
