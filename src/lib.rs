//! Minimal 2D gravitational particle simulator.
//!
//! A [`ParticleSystem`] owns an ordered collection of [`PointSet`] groups,
//! each a fixed-size block of particles stored as flat interleaved (x, y, z)
//! `f32` triples. Every step applies an inverse-square attraction toward the
//! origin with coupling `K = G * M` (see [`Params`]) using semi-implicit
//! Euler integration by default; see [`Scheme`] for the alternate midpoint
//! step.
//!
//! A host renderer consumes the engine either through the safe Rust API:
//!
//! ```
//! use gravsim::ParticleSystem;
//!
//! let mut system = ParticleSystem::new();
//! let group = system.add(64);
//! group.fill_lattice(0.5);
//! system.update(1.0 / 60.0);
//! let positions = system.get(0)?.positions();
//! # assert_eq!(positions.len(), 64 * gravsim::COMPONENTS);
//! # Ok::<(), gravsim::Error>(())
//! ```
//!
//! or through the flat C surface in [`ffi`], which wraps one process-wide
//! system behind `particle_system_init`/`particle_system_destroy` and hands
//! out zero-copy buffer views.
//!
//! Known limitation: a particle exactly at the origin divides by zero during
//! a step and its components go non-finite. That is a property of the force
//! model and is deliberately left unguarded.

pub mod core;
pub mod error;
pub mod ffi;

pub use crate::core::{Params, ParticleSystem, PointSet, Scheme, COMPONENTS};
pub use crate::error::{Error, Result};
