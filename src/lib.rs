//! Gravwell Engine - 2D gravity and collision simulation in WASM
//!
//! Circular particles attract each other pairwise and either bounce or merge
//! when they overlap. The host (usually a JS render loop) owns a
//! [`Simulation`], adds particles, steps time and reads state back.
//!
//! Architecture:
//! - core/       - Vector math, packed colors, console logging
//! - domain/     - Particles, storage, parameters, scenarios, errors
//! - systems/    - Gravity, integration, collision response
//! - simulation/ - Orchestration and the wasm-facing API

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Reached by the exported logging macros as `$crate::web_sys`
#[doc(hidden)]
pub use web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Gravwell WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{CollisionMode, Particle, ParticleId, ParticleStatus, SimError, SimParams};
pub use simulation::{PerfStats, Simulation, SimulationCore};
