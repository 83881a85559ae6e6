use hoopshot_shared::config::PhysicsConfig;
use hoopshot_shared::vec3::Vec3;

use crate::integrator;
use crate::launcher;

/// Predict the flight arc of a shot from `pos` toward `target` at the given
/// power, writing up to `prediction_steps` points into `out`. Pure ghost
/// integration: same launch velocity and same integrator as the real shot,
/// stepped at the fixed prediction timestep, stopping once the ghost drops
/// below `floor_y`. The buffer is reused across frames; it is cleared first.
pub fn predict_arc_into(
    pos: Vec3,
    target: Vec3,
    power: u32,
    floor_y: f64,
    physics: &PhysicsConfig,
    out: &mut Vec<Vec3>,
) {
    out.clear();

    let mut ghost_pos = pos;
    let mut ghost_vel = launcher::launch_velocity(pos, target, power, physics);

    for _ in 0..physics.prediction_steps {
        integrator::integrate(&mut ghost_pos, &mut ghost_vel, physics.gravity, physics.prediction_dt);
        out.push(ghost_pos);
        if ghost_pos.y < floor_y {
            break;
        }
    }
}

/// Allocating convenience wrapper around [`predict_arc_into`].
pub fn predict_arc(
    pos: Vec3,
    target: Vec3,
    power: u32,
    floor_y: f64,
    physics: &PhysicsConfig,
) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(physics.prediction_steps);
    predict_arc_into(pos, target, power, floor_y, physics, &mut points);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopshot_shared::vec3::vec3;

    const FLOOR_Y: f64 = 0.4;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    #[test]
    fn first_point_matches_one_integrator_step() {
        let physics = physics();
        let start = vec3(0.0, 0.4, 0.0);
        let target = vec3(13.75, 3.15, 0.0);
        let points = predict_arc(start, target, 50, FLOOR_Y, &physics);

        let mut pos = start;
        let mut vel = launcher::launch_velocity(start, target, 50, &physics);
        integrator::integrate(&mut pos, &mut vel, physics.gravity, physics.prediction_dt);

        assert_eq!(points[0], pos);
    }

    #[test]
    fn arc_never_exceeds_step_cap() {
        let physics = physics();
        // Max power straight up from high above the floor would fly forever
        let points = predict_arc(
            vec3(0.0, 50.0, 0.0),
            vec3(0.0, 100.0, 0.0),
            100,
            FLOOR_Y,
            &physics,
        );
        assert_eq!(points.len(), physics.prediction_steps);
    }

    #[test]
    fn arc_stops_below_floor() {
        let physics = physics();
        // A weak shot arcs up and comes straight back down well within cap
        let points = predict_arc(
            vec3(0.0, 0.4, 0.0),
            vec3(13.75, 3.15, 0.0),
            0,
            FLOOR_Y,
            &physics,
        );
        assert!(points.len() < physics.prediction_steps);
        let last = points.last().unwrap();
        assert!(last.y < FLOOR_Y);
        // Every earlier point is at or above the floor
        for p in &points[..points.len() - 1] {
            assert!(p.y >= FLOOR_Y);
        }
    }

    #[test]
    fn arc_rises_before_it_falls() {
        let points = predict_arc(
            vec3(0.0, 0.4, 0.0),
            vec3(13.75, 3.15, 0.0),
            50,
            FLOOR_Y,
            &physics(),
        );
        assert!(points[0].y > 0.4);
        let apex = points.iter().fold(f64::MIN, |m, p| m.max(p.y));
        assert!(apex > 1.0);
        assert!(points.last().unwrap().y < apex);
    }

    #[test]
    fn reused_buffer_is_cleared_first() {
        let physics = physics();
        let mut buffer = vec![vec3(99.0, 99.0, 99.0); 250];
        predict_arc_into(
            vec3(0.0, 0.4, 0.0),
            vec3(13.75, 3.15, 0.0),
            50,
            FLOOR_Y,
            &physics,
            &mut buffer,
        );
        assert!(buffer.len() <= physics.prediction_steps);
        assert!(buffer.iter().all(|p| p.x < 99.0));
    }

    #[test]
    fn higher_power_carries_further() {
        let physics = physics();
        let start = vec3(0.0, 0.4, 0.0);
        let target = vec3(13.75, 3.15, 0.0);
        let weak = predict_arc(start, target, 30, FLOOR_Y, &physics);
        let strong = predict_arc(start, target, 70, FLOOR_Y, &physics);
        assert!(strong.last().unwrap().x > weak.last().unwrap().x);
    }
}
