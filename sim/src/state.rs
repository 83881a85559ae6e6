use hoopshot_shared::config::{CourtConfig, PhysicsConfig};
use hoopshot_shared::snapshot::FrameSnapshot;
use hoopshot_shared::vec3::{vec3, Vec3};

use crate::collision::{self, GroundResponse, RimResponse};
use crate::court::CourtLayout;
use crate::input::MovementInput;
use crate::integrator;
use crate::launcher;
use crate::scoring::{Scoreboard, ShotOutcome};
use crate::trajectory;

/// Power level a fresh session starts with.
pub const INITIAL_POWER: u32 = 50;
/// Power adjustment range.
pub const MIN_POWER: u32 = 0;
pub const MAX_POWER: u32 = 100;

/// The ball: kinematic state plus the visual roll angles accumulated while
/// dribbling around the court.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f64,
    pub roll_x: f64,
    pub roll_z: f64,
}

/// Per-shot flags. `target` is locked in at launch; only that hoop can
/// award points for this shot.
#[derive(Debug, Clone, Copy, Default)]
struct ShotState {
    airborne: bool,
    can_score: bool,
    target: Option<usize>,
}

/// The whole game in one owned struct. Drive it with [`tick`](Self::tick)
/// once per frame, plus the edge-triggered operations ([`fire`](Self::fire),
/// [`adjust_power`](Self::adjust_power), [`reset`](Self::reset)).
pub struct Simulation {
    physics: PhysicsConfig,
    court: CourtConfig,
    layout: CourtLayout,
    ball: Ball,
    shot: ShotState,
    scoreboard: Scoreboard,
    power: u32,
    preview: Vec<Vec3>,
}

impl Simulation {
    pub fn new(physics: PhysicsConfig, court: CourtConfig) -> Self {
        let layout = CourtLayout::standard(&court);
        let mut sim = Self {
            physics,
            court,
            layout,
            ball: initial_ball(&court),
            shot: ShotState::default(),
            scoreboard: Scoreboard::default(),
            power: INITIAL_POWER,
            preview: Vec::with_capacity(physics.prediction_steps),
        };
        sim.recompute_preview();
        sim
    }

    /// Advance the simulation by one frame. Returns the shot outcome if
    /// this tick resolved one (score or settle), else `None`.
    pub fn tick(&mut self, dt: f64, movement: &MovementInput) -> Option<ShotOutcome> {
        let dt = dt.min(self.physics.max_tick_dt);
        if self.shot.airborne {
            self.tick_airborne(dt)
        } else {
            self.tick_grounded(dt, movement);
            None
        }
    }

    fn tick_airborne(&mut self, dt: f64) -> Option<ShotOutcome> {
        integrator::integrate(
            &mut self.ball.pos,
            &mut self.ball.vel,
            self.physics.gravity,
            dt,
        );

        let floor_y = self.floor_y();
        match collision::resolve_ground(&mut self.ball.pos, &mut self.ball.vel, floor_y, &self.physics)
        {
            GroundResponse::AtRest => {
                let missed = self.shot.can_score;
                self.shot = ShotState::default();
                self.recompute_preview();
                if missed {
                    tracing::info!(
                        attempts = self.scoreboard.attempts,
                        "shot settled without scoring"
                    );
                    return Some(ShotOutcome::Missed);
                }
                return None;
            }
            GroundResponse::Bounced | GroundResponse::Clear => {}
        }

        let backboards = [
            self.layout.colliders[0].backboard,
            self.layout.colliders[1].backboard,
        ];
        collision::resolve_boxes(self.ball.pos, self.ball.radius, &mut self.ball.vel, &backboards);
        let poles = [self.layout.colliders[0].pole, self.layout.colliders[1].pole];
        collision::resolve_boxes(self.ball.pos, self.ball.radius, &mut self.ball.vel, &poles);

        for (i, hoop) in self.layout.hoops.iter().enumerate() {
            let scoring_allowed = self.shot.can_score && self.shot.target == Some(i);
            match collision::resolve_rim(
                hoop,
                self.ball.pos,
                self.ball.radius,
                &mut self.ball.vel,
                scoring_allowed,
                &self.physics,
            ) {
                RimResponse::Scored => {
                    self.shot.can_score = false;
                    self.scoreboard.record_make();
                    tracing::info!(
                        hoop = i,
                        score = self.scoreboard.score,
                        makes = self.scoreboard.makes,
                        "shot made"
                    );
                    return Some(ShotOutcome::Made);
                }
                RimResponse::Bounced | RimResponse::Clear => {}
            }
        }

        None
    }

    fn tick_grounded(&mut self, dt: f64, movement: &MovementInput) {
        // Position and power are the only preview inputs, so an idle tick
        // has nothing to update
        if !movement.any() {
            return;
        }

        let step = self.physics.move_speed * dt;
        let roll = self.physics.roll_rate;

        if movement.forward {
            self.ball.pos.z -= step;
            self.ball.roll_x -= roll;
        }
        if movement.backward {
            self.ball.pos.z += step;
            self.ball.roll_x += roll;
        }
        if movement.left {
            self.ball.pos.x -= step;
            self.ball.roll_z += roll;
        }
        if movement.right {
            self.ball.pos.x += step;
            self.ball.roll_z -= roll;
        }

        let x_limit = self.court.width / 2.0 - self.ball.radius;
        let z_limit = self.court.depth / 2.0 - self.ball.radius;
        self.ball.pos.x = self.ball.pos.x.clamp(-x_limit, x_limit);
        self.ball.pos.z = self.ball.pos.z.clamp(-z_limit, z_limit);

        // Target hoop and arc both depend on position, so refresh every
        // grounded frame
        self.recompute_preview();
    }

    /// Launch the ball toward the nearest hoop at the current power level.
    /// Ignored while a shot is in flight; returns whether a launch happened.
    pub fn fire(&mut self) -> bool {
        if self.shot.airborne {
            return false;
        }

        let target = launcher::nearest_hoop_index(self.ball.pos, &self.layout.hoops);
        self.ball.vel = launcher::launch_velocity(
            self.ball.pos,
            self.layout.hoops[target].center,
            self.power,
            &self.physics,
        );
        self.shot = ShotState {
            airborne: true,
            can_score: true,
            target: Some(target),
        };
        self.scoreboard.record_attempt();
        self.preview.clear();
        tracing::debug!(target, power = self.power, "shot launched");
        true
    }

    /// Nudge shot power, clamped to the legal range. The preview only
    /// exists while grounded, so only then does it need refreshing.
    pub fn adjust_power(&mut self, delta: i32) {
        self.power = self
            .power
            .saturating_add_signed(delta)
            .clamp(MIN_POWER, MAX_POWER);
        if !self.shot.airborne {
            self.recompute_preview();
        }
    }

    /// Put the ball back at center court and restore the starting power.
    /// The scoreboard carries on; an in-flight shot is abandoned without
    /// counting as a miss.
    pub fn reset(&mut self) {
        self.ball = initial_ball(&self.court);
        self.shot = ShotState::default();
        self.power = INITIAL_POWER;
        self.recompute_preview();
        tracing::debug!("ball reset to center court");
    }

    fn recompute_preview(&mut self) {
        let target = launcher::nearest_hoop_index(self.ball.pos, &self.layout.hoops);
        trajectory::predict_arc_into(
            self.ball.pos,
            self.layout.hoops[target].center,
            self.power,
            self.floor_y(),
            &self.physics,
            &mut self.preview,
        );
    }

    /// Lowest legal ball-center height.
    fn floor_y(&self) -> f64 {
        self.court.surface_y + self.ball.radius
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access for scripted scenarios in tests.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn airborne(&self) -> bool {
        self.shot.airborne
    }

    /// Predicted arc points; empty while a shot is in flight.
    pub fn preview(&self) -> &[Vec3] {
        &self.preview
    }

    pub fn layout(&self) -> &CourtLayout {
        &self.layout
    }

    pub fn court(&self) -> &CourtConfig {
        &self.court
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            ball_pos: [self.ball.pos.x, self.ball.pos.y, self.ball.pos.z],
            ball_roll: [self.ball.roll_x, self.ball.roll_z],
            airborne: self.shot.airborne,
            power: self.power,
            scoreboard: self.scoreboard.to_wire(),
            preview: self.preview.iter().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }
}

fn initial_ball(court: &CourtConfig) -> Ball {
    Ball {
        pos: vec3(0.0, court.surface_y + court.ball_radius, 0.0),
        vel: Vec3::ZERO,
        radius: court.ball_radius,
        roll_x: 0.0,
        roll_z: 0.0,
    }
}
