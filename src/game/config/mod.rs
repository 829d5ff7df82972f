//! Configuration Module
//!
//! Central tuning knobs for the scenario layout and physics parameters.

pub mod siege_config;

pub use crate::game::wall::WallConfig;
pub use siege_config::{ProjectileSpec, SiegeConfig};
