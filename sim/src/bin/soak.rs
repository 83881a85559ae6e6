//! Headless soak run for the ball simulation.
//!
//! Fires many randomized shots from random court positions and ticks each
//! one to rest at 60 Hz, checking physical invariants along the way. Prints
//! a JSON summary when done.
//!
//! Usage:
//!   soak [--shots N] [--seed S]
//!
//! Options:
//!   --shots N   Number of shots to simulate (default 1000)
//!   --seed S    RNG seed for reproducible runs (default 42)

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hoopshot_shared::config::{CourtConfig, PhysicsConfig};
use hoopshot_sim::input::MovementInput;
use hoopshot_sim::state::Simulation;

const TICK_DT: f64 = 1.0 / 60.0;
const MAX_TICKS_PER_SHOT: usize = 10_000;

#[derive(serde::Serialize)]
struct SoakSummary {
    shots: usize,
    makes: u32,
    score: u32,
    accuracy: f64,
    total_ticks: u64,
    longest_flight_ticks: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut shots: usize = 1000;
    let mut seed: u64 = 42;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--shots" => {
                i += 1;
                shots = args[i].parse().expect("--shots takes a number");
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().expect("--seed takes a number");
            }
            other => {
                eprintln!("unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let physics = PhysicsConfig::default();
    let court = CourtConfig::default();
    let mut sim = Simulation::new(physics, court);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let floor_y = court.surface_y + court.ball_radius;
    let x_limit = court.width / 2.0 - court.ball_radius;
    let z_limit = court.depth / 2.0 - court.ball_radius;

    let mut total_ticks: u64 = 0;
    let mut longest_flight = 0;

    for shot in 0..shots {
        sim.reset();
        {
            let ball = sim.ball_mut();
            ball.pos.x = rng.gen_range(-x_limit..x_limit);
            ball.pos.z = rng.gen_range(-z_limit..z_limit);
        }
        // Reset restores power to 50; shift it anywhere in 0..=100
        sim.adjust_power(rng.gen_range(-50..=50));

        assert!(sim.fire(), "fire refused while grounded");

        let mut ticks = 0;
        while sim.airborne() {
            sim.tick(TICK_DT, &MovementInput::default());
            ticks += 1;
            total_ticks += 1;

            let pos = sim.ball().pos;
            assert!(
                pos.x.is_finite() && pos.y.is_finite() && pos.z.is_finite(),
                "non-finite position on shot {}",
                shot
            );
            assert!(
                pos.y >= floor_y - 1e-9,
                "ball below floor on shot {}: y = {}",
                shot,
                pos.y
            );

            if ticks > MAX_TICKS_PER_SHOT {
                panic!("shot {} never settled", shot);
            }
        }
        longest_flight = longest_flight.max(ticks);
    }

    let board = sim.scoreboard();
    assert_eq!(board.attempts as usize, shots);
    assert_eq!(board.score, board.makes * 2);

    let summary = SoakSummary {
        shots,
        makes: board.makes,
        score: board.score,
        accuracy: board.accuracy(),
        total_ticks,
        longest_flight_ticks: longest_flight,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
