//! Particle emitters and pools for natural phenomena such as rain, fire
//! and smoke.
//!
//! The crate is free of any windowing or graphics API. A renderer asks a
//! [`ParticleSystem`] for its [`Billboard`]s and turns them into whatever
//! instance data its pipeline expects.

pub mod billboard;
pub mod emitter;
pub mod emitters;
pub mod error;
pub mod particle;
pub mod system;

pub use billboard::Billboard;
pub use emitter::{Emitter, EmitterConfig, EmitterKind, SimRng};
pub use emitters::*;
pub use error::Error;
pub use particle::Particle;
pub use system::ParticleSystem;

pub use glam;
pub use rand;
