//! Discrete input events.
//!
//! The boundary between the windowing collaborator and the core: raw
//! device state never crosses it, only these events. Whatever the outer
//! layer maps keys and buttons to, the core sees presses, releases, and
//! look deltas.

use crate::player::MoveDirection;

/// One discrete input event delivered to the scene.
///
/// Both fire actions trigger on *release*, avoiding any
/// charge-then-hold ambiguity; the press events exist so the outer
/// layer can forward complete press/release pairs without tracking
/// which ones the core cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    DirectionPressed(MoveDirection),
    DirectionReleased(MoveDirection),
    JumpPressed,
    /// Primary fire (cannonball) button went down. No-op for the core.
    FirePressed,
    /// Primary fire released: spawn a cannonball if ammo remains.
    FireReleased,
    /// Alternate fire (fireball) button went down. No-op for the core.
    AltFirePressed,
    /// Alternate fire released: spawn a fireball.
    AltFireReleased,
    /// Relative mouse-look movement.
    LookDelta { dx: f32, dy: f32 },
}
