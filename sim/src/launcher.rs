use hoopshot_shared::config::PhysicsConfig;
use hoopshot_shared::vec3::{self, Vec3};

use crate::court::Hoop;

/// Index of the hoop nearest to `pos` by straight-line distance. Strict
/// less-than comparison, so the first hoop wins an exact tie.
pub fn nearest_hoop_index(pos: Vec3, hoops: &[Hoop]) -> usize {
    let mut best = 0;
    for i in 1..hoops.len() {
        if vec3::distance(pos, hoops[i].center) < vec3::distance(pos, hoops[best].center) {
            best = i;
        }
    }
    best
}

/// Initial velocity for a shot from `pos` aimed at `target` with the given
/// power. Shared by the real launch and the trajectory preview so the two
/// can never diverge: speed = power / power_divisor along the straight
/// line to the target, plus a fixed upward arc boost.
pub fn launch_velocity(pos: Vec3, target: Vec3, power: u32, physics: &PhysicsConfig) -> Vec3 {
    let direction = vec3::normalize(vec3::sub(target, pos));
    let mut vel = vec3::scale(direction, power as f64 / physics.power_divisor);
    vel.y += physics.arc_boost;
    vel
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopshot_shared::config::CourtConfig;
    use hoopshot_shared::vec3::vec3;

    use crate::court::CourtLayout;

    fn hoops() -> [Hoop; 2] {
        CourtLayout::standard(&CourtConfig::default()).hoops
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn selects_nearer_hoop() {
        let hoops = hoops();
        assert_eq!(nearest_hoop_index(vec3(-5.0, 0.4, 0.0), &hoops), 0);
        assert_eq!(nearest_hoop_index(vec3(5.0, 0.4, 0.0), &hoops), 1);
    }

    #[test]
    fn exact_tie_goes_to_first_hoop() {
        let hoops = hoops();
        // Court center is equidistant from both rims
        assert_eq!(nearest_hoop_index(vec3(0.0, 0.4, 0.0), &hoops), 0);
    }

    #[test]
    fn launch_speed_is_power_over_divisor() {
        let physics = PhysicsConfig::default();
        // Aim straight along +x so the direction is trivial
        let vel = launch_velocity(
            vec3(0.0, 3.0, 0.0),
            vec3(10.0, 3.0, 0.0),
            50,
            &physics,
        );
        assert_close(vel.x, 12.5);
        assert_close(vel.y, 7.0); // arc boost only; flat aim has no y component
        assert_close(vel.z, 0.0);
    }

    #[test]
    fn zero_power_still_gets_arc_boost() {
        let physics = PhysicsConfig::default();
        let vel = launch_velocity(vec3(0.0, 0.4, 0.0), vec3(5.0, 3.0, 1.0), 0, &physics);
        assert_close(vel.x, 0.0);
        assert_close(vel.y, 7.0);
        assert_close(vel.z, 0.0);
    }

    #[test]
    fn full_power_reaches_speed_cap() {
        let physics = PhysicsConfig::default();
        let vel = launch_velocity(
            vec3(0.0, 3.0, 0.0),
            vec3(-8.0, 3.0, 0.0),
            100,
            &physics,
        );
        assert_close(vel.x, -25.0);
    }

    #[test]
    fn direction_is_normalized_before_scaling() {
        let physics = PhysicsConfig::default();
        let near = launch_velocity(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), 40, &physics);
        let far = launch_velocity(vec3(0.0, 0.0, 0.0), vec3(100.0, 0.0, 0.0), 40, &physics);
        assert_close(near.x, far.x);
    }
}
