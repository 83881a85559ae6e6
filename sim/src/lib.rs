//! Basketball simulation core.
//!
//! One moving body (the ball) against a fixed set of analytic colliders:
//! the court floor, two backboards, two poles, and two rims. The renderer
//! drives [`state::Simulation::tick`] once per frame and reads back a
//! snapshot; nothing in here depends on a rendering context.

pub mod collision;
pub mod court;
pub mod input;
pub mod integrator;
pub mod launcher;
pub mod scoring;
pub mod state;
pub mod trajectory;
