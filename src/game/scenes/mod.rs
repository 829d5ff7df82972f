//! Scene Module
//!
//! Full-round composition of engine and game systems.

pub mod siege_scene;

pub use siege_scene::{BodySnapshot, FrameSnapshot, SiegeScene};
