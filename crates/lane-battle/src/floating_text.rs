//! Floating combat texts.
//!
//! Purely cosmetic labels that drift upwards and fade. Combat logic never
//! reads them; they exist for the renderer.

use lane_common::LanePosition;
use serde::{Deserialize, Serialize};

/// What a floating text announces. Determines its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextTone {
    /// A normal enemy entered the lane.
    Spawn,
    /// A strengthened enemy entered the lane.
    SpawnStrengthened,
    /// A weakened enemy entered the lane.
    SpawnWeakened,
    /// Damage dealt by the hero.
    EnemyHit,
    /// Damage taken by the hero.
    HeroHit,
    /// Gold reward.
    Gold,
    /// Kill streak banner.
    Streak,
    /// Full heal.
    Heal,
    /// Fatigue damage.
    Fatigue,
    /// Positive buff.
    Buff,
    /// Negative buff.
    Debuff,
}

impl TextTone {
    /// CSS-style colour for this tone.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Spawn | Self::Fatigue | Self::HeroHit => "#f97316",
            Self::SpawnStrengthened | Self::EnemyHit | Self::Debuff => "#ef4444",
            Self::SpawnWeakened => "#facc15",
            Self::Gold => "#eab308",
            Self::Streak => "#f59e0b",
            Self::Heal => "#22c55e",
            Self::Buff => "#a855f7",
        }
    }
}

/// A short-lived label on the lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    /// Current position
    pub position: LanePosition,
    /// Text to draw
    pub text: String,
    /// Colour category
    pub tone: TextTone,
    /// Seconds left
    pub life: f32,
    /// Initial lifetime, for alpha fading
    pub max_life: f32,
}

impl FloatingText {
    /// Creates a new floating text.
    #[must_use]
    pub fn new(position: LanePosition, text: impl Into<String>, tone: TextTone, life: f32) -> Self {
        Self {
            position,
            text: text.into(),
            tone,
            life,
            max_life: life,
        }
    }

    /// Age the text and drift it upwards.
    pub fn update(&mut self, dt: f32, drift: f32) {
        self.life -= dt;
        self.position.y -= drift * dt;
    }

    /// Checks if the text is still visible.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining opacity in 0..=1.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drifts_up() {
        let mut text =
            FloatingText::new(LanePosition::new(10.0, 100.0), "-5", TextTone::EnemyHit, 1.2);
        text.update(0.5, 30.0);

        assert!((text.position.y - 85.0).abs() < 1e-4);
        assert!((text.life - 0.7).abs() < 1e-4);
        assert!(text.is_active());
    }

    #[test]
    fn test_expiry() {
        let mut text = FloatingText::new(LanePosition::default(), "x", TextTone::Heal, 0.2);
        text.update(0.2, 30.0);
        assert!(!text.is_active());
        assert_eq!(text.alpha(), 0.0);
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(TextTone::Heal.color(), "#22c55e");
        assert_eq!(TextTone::SpawnWeakened.color(), "#facc15");
    }
}
