//! HUD display state.
//!
//! One mutable display value recomputed from the round each frame and
//! diffed against the previous frame, so the rendering collaborator only
//! re-renders text when something actually changed, with no per-frame
//! detach-and-recreate of display objects.

use serde::Serialize;

use crate::game::round::RoundState;

/// Everything the HUD shows: ammo counter, round state, and the
/// completion banner once a terminal state has been reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudState {
    pub ammo_remaining: u32,
    pub round_state: RoundState,
    /// Completion banner; `None` while the round is live.
    pub banner: Option<String>,
}

impl HudState {
    pub fn new(starting_ammo: u32) -> Self {
        Self {
            ammo_remaining: starting_ammo,
            round_state: RoundState::Playing,
            banner: None,
        }
    }

    /// Recompute the display state; returns whether anything changed
    /// since the previous frame.
    pub fn refresh(
        &mut self,
        ammo_remaining: u32,
        round_state: RoundState,
        banner: Option<&str>,
    ) -> bool {
        let next = Self {
            ammo_remaining,
            round_state,
            banner: banner.map(str::to_owned),
        };
        if *self == next {
            false
        } else {
            *self = next;
            true
        }
    }

    /// Ammo counter line.
    pub fn status_line(&self) -> String {
        format!("Cannonballs left: {}", self.ammo_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_hud() {
        let hud = HudState::new(6);
        assert_eq!(hud.ammo_remaining, 6);
        assert_eq!(hud.round_state, RoundState::Playing);
        assert!(hud.banner.is_none());
        assert_eq!(hud.status_line(), "Cannonballs left: 6");
    }

    #[test]
    fn test_refresh_reports_change_once() {
        let mut hud = HudState::new(6);
        assert!(hud.refresh(5, RoundState::Playing, None));
        // Identical frame: nothing to re-render.
        assert!(!hud.refresh(5, RoundState::Playing, None));
    }

    #[test]
    fn test_banner_change_is_a_change() {
        let mut hud = HudState::new(6);
        assert!(hud.refresh(0, RoundState::Lost, Some("You Lose\nTry Again")));
        assert_eq!(hud.banner.as_deref(), Some("You Lose\nTry Again"));
        assert!(!hud.refresh(0, RoundState::Lost, Some("You Lose\nTry Again")));
    }
}
