//! Types shared between the simulation core and the renderer.

pub mod config;
pub mod snapshot;
pub mod vec3;
