use hoopshot_shared::config::PhysicsConfig;
use hoopshot_shared::vec3::{self, Vec3};

use crate::court::{Aabb, Hoop};

/// Result of the ground-plane pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundResponse {
    /// Ball is above the floor, nothing happened
    Clear,
    /// Ball was clamped to the floor and bounced
    Bounced,
    /// Bounce speed fell below the rest threshold; velocity was zeroed
    AtRest,
}

/// Clamp the ball to the floor and reflect its vertical velocity. `floor_y`
/// is the lowest legal ball-center height (surface + radius); after this
/// call `pos.y >= floor_y` always holds.
pub fn resolve_ground(
    pos: &mut Vec3,
    vel: &mut Vec3,
    floor_y: f64,
    physics: &PhysicsConfig,
) -> GroundResponse {
    if pos.y >= floor_y {
        return GroundResponse::Clear;
    }

    pos.y = floor_y;
    vel.y *= -physics.ball_bounciness;

    if vel.y.abs() < physics.rest_speed {
        *vel = Vec3::ZERO;
        GroundResponse::AtRest
    } else {
        GroundResponse::Bounced
    }
}

/// Crude board/pole response: any sphere-box overlap negates the long-axis
/// velocity outright. Direction-agnostic full reflection, not a true
/// normal bounce; the game feel depends on this exact behavior.
pub fn resolve_boxes(pos: Vec3, radius: f64, vel: &mut Vec3, boxes: &[Aabb]) -> bool {
    let mut hit = false;
    for b in boxes {
        if b.intersects_sphere(pos, radius) {
            vel.x = -vel.x;
            hit = true;
        }
    }
    hit
}

/// Result of the rim proximity test for one hoop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RimResponse {
    Clear,
    Bounced,
    Scored,
}

/// Rim test: score when the ball center passes cleanly through the
/// aperture while descending, otherwise bounce off the torus region.
/// `scoring_allowed` gates the score branch (can_score and target hoop).
pub fn resolve_rim(
    hoop: &Hoop,
    pos: Vec3,
    radius: f64,
    vel: &mut Vec3,
    scoring_allowed: bool,
    physics: &PhysicsConfig,
) -> RimResponse {
    let horizontal = vec3::horizontal_offset(pos, hoop.center);
    let horizontal_dist = vec3::length(horizontal);
    let vertical_dist = (pos.y - hoop.center.y).abs();

    if scoring_allowed
        && vel.y < 0.0
        && vertical_dist < radius
        && horizontal_dist < hoop.aperture_radius() - radius
    {
        return RimResponse::Scored;
    }

    if vertical_dist < radius + hoop.rim_tube && horizontal_dist < hoop.rim_radius + radius {
        vel.y *= -physics.rim_bounciness;
        // Outward shove from the rim center; dead-center contact gets none
        let outward = vec3::normalize(horizontal);
        vel.x += outward.x * physics.rim_impulse;
        vel.z += outward.z * physics.rim_impulse;
        return RimResponse::Bounced;
    }

    RimResponse::Clear
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopshot_shared::vec3::vec3;

    const FLOOR_Y: f64 = 0.4;
    const BALL_RADIUS: f64 = 0.3;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn rim() -> Hoop {
        Hoop {
            center: vec3(-13.75, 3.15, 0.0),
            rim_radius: 0.7,
            rim_tube: 0.02,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {} to be close to {}",
            actual,
            expected
        );
    }

    // --- ground ---

    #[test]
    fn ball_above_floor_untouched() {
        let mut pos = vec3(0.0, 1.0, 0.0);
        let mut vel = vec3(1.0, -3.0, 0.0);
        assert_eq!(
            resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics()),
            GroundResponse::Clear
        );
        assert_close(pos.y, 1.0);
        assert_close(vel.y, -3.0);
    }

    #[test]
    fn floor_clamp_is_exact() {
        let mut pos = vec3(0.0, 0.05, 0.0);
        let mut vel = vec3(0.0, -8.0, 0.0);
        resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics());
        assert_eq!(pos.y, FLOOR_Y);
    }

    #[test]
    fn ground_bounce_scales_by_bounciness() {
        let mut pos = vec3(0.0, 0.1, 0.0);
        let mut vel = vec3(2.0, -6.0, 1.0);
        assert_eq!(
            resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics()),
            GroundResponse::Bounced
        );
        assert_close(vel.y, 4.2); // -6.0 * -0.7
        assert_close(vel.x, 2.0); // horizontal velocity untouched
        assert_close(vel.z, 1.0);
    }

    #[test]
    fn slow_bounce_comes_to_rest() {
        let mut pos = vec3(3.0, 0.3, -1.0);
        // -1.2 * 0.7 = 0.84, below the 1.0 rest threshold
        let mut vel = vec3(0.5, -1.2, 0.2);
        assert_eq!(
            resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics()),
            GroundResponse::AtRest
        );
        assert_eq!(vel, Vec3::ZERO);
        assert_eq!(pos.y, FLOOR_Y);
    }

    #[test]
    fn bounce_just_above_threshold_keeps_going() {
        let mut pos = vec3(0.0, 0.3, 0.0);
        // -1.5 * 0.7 = 1.05, still above threshold
        let mut vel = vec3(0.0, -1.5, 0.0);
        assert_eq!(
            resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics()),
            GroundResponse::Bounced
        );
        assert_close(vel.y, 1.05);
    }

    #[test]
    fn clamp_holds_for_large_dt_penetration() {
        // Even a grossly tunneled position ends exactly on the floor
        let mut pos = vec3(0.0, -50.0, 0.0);
        let mut vel = vec3(0.0, -40.0, 0.0);
        resolve_ground(&mut pos, &mut vel, FLOOR_Y, &physics());
        assert_eq!(pos.y, FLOOR_Y);
        assert_close(vel.y, 28.0);
    }

    // --- backboard / pole boxes ---

    #[test]
    fn box_overlap_negates_long_axis_velocity() {
        let board = Aabb::from_center_half(vec3(-14.45, 3.65, 0.0), vec3(0.015, 0.9, 1.15));
        let mut vel = vec3(-5.0, 2.0, 1.0);
        let hit = resolve_boxes(vec3(-14.3, 3.5, 0.2), BALL_RADIUS, &mut vel, &[board]);
        assert!(hit);
        assert_close(vel.x, 5.0);
        assert_close(vel.y, 2.0); // other axes untouched, even moving upward
        assert_close(vel.z, 1.0);
    }

    #[test]
    fn box_reflection_is_direction_agnostic() {
        // A ball moving away still gets its x velocity flipped; this crude
        // response is intentional.
        let board = Aabb::from_center_half(vec3(-14.45, 3.65, 0.0), vec3(0.015, 0.9, 1.15));
        let mut vel = vec3(3.0, 0.0, 0.0);
        resolve_boxes(vec3(-14.3, 3.5, 0.0), BALL_RADIUS, &mut vel, &[board]);
        assert_close(vel.x, -3.0);
    }

    #[test]
    fn no_overlap_no_reflection() {
        let board = Aabb::from_center_half(vec3(-14.45, 3.65, 0.0), vec3(0.015, 0.9, 1.15));
        let mut vel = vec3(-5.0, 0.0, 0.0);
        let hit = resolve_boxes(vec3(0.0, 0.4, 0.0), BALL_RADIUS, &mut vel, &[board]);
        assert!(!hit);
        assert_close(vel.x, -5.0);
    }

    // --- rim ---

    #[test]
    fn clean_descent_through_aperture_scores() {
        let hoop = rim();
        // 0.3 horizontal < 0.68 - 0.3 = 0.38
        let pos = vec3(hoop.center.x + 0.3, hoop.center.y + 0.2, 0.0);
        let mut vel = vec3(0.0, -3.0, 0.0);
        assert_eq!(
            resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, true, &physics()),
            RimResponse::Scored
        );
        // Scoring never alters velocity
        assert_close(vel.y, -3.0);
    }

    #[test]
    fn ascending_ball_cannot_score() {
        let hoop = rim();
        let pos = vec3(hoop.center.x, hoop.center.y, 0.0);
        let mut vel = vec3(0.0, 3.0, 0.0);
        let response = resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, true, &physics());
        // Falls through to the bounce branch instead
        assert_eq!(response, RimResponse::Bounced);
    }

    #[test]
    fn scoring_gated_by_flag() {
        let hoop = rim();
        let pos = vec3(hoop.center.x + 0.1, hoop.center.y + 0.1, 0.0);
        let mut vel = vec3(0.0, -3.0, 0.0);
        let response = resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, false, &physics());
        assert_ne!(response, RimResponse::Scored);
    }

    #[test]
    fn rim_bounce_reflects_and_shoves_outward() {
        let hoop = rim();
        // On the torus: horizontal 0.7 from center, at rim height
        let pos = vec3(hoop.center.x + 0.7, hoop.center.y + 0.1, hoop.center.z);
        let mut vel = vec3(0.0, -4.0, 0.0);
        assert_eq!(
            resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, true, &physics()),
            RimResponse::Bounced
        );
        assert_close(vel.y, 3.2); // -4.0 * -0.8
        assert_close(vel.x, 0.5); // full impulse along +x, away from center
        assert_close(vel.z, 0.0);
    }

    #[test]
    fn rim_impulse_has_fixed_magnitude() {
        let hoop = rim();
        let pos = vec3(hoop.center.x + 0.5, hoop.center.y, hoop.center.z + 0.5);
        let mut vel = vec3(0.0, 2.0, 0.0);
        resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, false, &physics());
        let impulse = (vel.x * vel.x + vel.z * vel.z).sqrt();
        assert_close(impulse, 0.5);
    }

    #[test]
    fn dead_center_contact_gets_no_impulse() {
        let hoop = rim();
        let pos = vec3(hoop.center.x, hoop.center.y, hoop.center.z);
        let mut vel = vec3(0.0, 2.0, 0.0);
        resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, false, &physics());
        assert_close(vel.x, 0.0);
        assert_close(vel.z, 0.0);
        assert_close(vel.y, -1.6);
    }

    #[test]
    fn far_from_rim_is_clear() {
        let hoop = rim();
        let mut vel = vec3(0.0, -3.0, 0.0);
        assert_eq!(
            resolve_rim(
                &hoop,
                vec3(0.0, 0.4, 0.0),
                BALL_RADIUS,
                &mut vel,
                true,
                &physics()
            ),
            RimResponse::Clear
        );
        assert_close(vel.y, -3.0);
    }

    #[test]
    fn inside_aperture_but_too_wide_bounces() {
        let hoop = rim();
        // 0.5 horizontal: inside the rim ring (< 1.0) but not clean (> 0.38)
        let pos = vec3(hoop.center.x + 0.5, hoop.center.y + 0.1, 0.0);
        let mut vel = vec3(0.0, -3.0, 0.0);
        assert_eq!(
            resolve_rim(&hoop, pos, BALL_RADIUS, &mut vel, true, &physics()),
            RimResponse::Bounced
        );
    }
}
