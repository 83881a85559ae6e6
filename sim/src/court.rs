use hoopshot_shared::config::CourtConfig;
use hoopshot_shared::vec3::{vec3, Vec3};

// Structural dimensions of the basket assembly (world units). Fixed by the
// court design; only court-level parameters live in CourtConfig.
pub const POLE_WIDTH: f64 = 0.1;
pub const POLE_DEPTH: f64 = 0.1;
pub const ARM_LENGTH: f64 = 0.5;
pub const ARM_HEIGHT: f64 = 0.1;
pub const BACKBOARD_WIDTH: f64 = 2.3;
pub const BACKBOARD_HEIGHT: f64 = 1.8;
pub const BACKBOARD_THICKNESS: f64 = 0.03;

/// One rim, described by its world-space center and torus parameters.
/// Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct Hoop {
    pub center: Vec3,
    pub rim_radius: f64,
    pub rim_tube: f64,
}

impl Hoop {
    /// Effective hole radius the ball center must pass through to score.
    pub fn aperture_radius(&self) -> f64 {
        self.rim_radius - self.rim_tube
    }
}

/// Axis-aligned box, used for backboard and pole collision.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self {
            min: vec3(center.x - half.x, center.y - half.y, center.z - half.z),
            max: vec3(center.x + half.x, center.y + half.y, center.z + half.z),
        }
    }

    /// Sphere-vs-box overlap: clamp the sphere center into the box and
    /// compare the squared distance to the radius.
    pub fn intersects_sphere(&self, center: Vec3, radius: f64) -> bool {
        let cx = center.x.clamp(self.min.x, self.max.x);
        let cy = center.y.clamp(self.min.y, self.max.y);
        let cz = center.z.clamp(self.min.z, self.max.z);

        let dx = center.x - cx;
        let dy = center.y - cy;
        let dz = center.z - cz;

        dx * dx + dy * dy + dz * dz <= radius * radius
    }
}

/// Static colliders belonging to one basket.
#[derive(Debug, Clone, Copy)]
pub struct BasketColliders {
    pub backboard: Aabb,
    pub pole: Aabb,
}

/// The two hoops and their colliders, derived once from the court config.
#[derive(Debug, Clone)]
pub struct CourtLayout {
    pub hoops: [Hoop; 2],
    pub colliders: [BasketColliders; 2],
}

impl CourtLayout {
    /// Standard two-basket layout: one basket at each end of the long (x)
    /// axis, rim facing the court center.
    pub fn standard(court: &CourtConfig) -> Self {
        let (hoop_a, coll_a) = basket(court, -1.0);
        let (hoop_b, coll_b) = basket(court, 1.0);
        Self {
            hoops: [hoop_a, hoop_b],
            colliders: [coll_a, coll_b],
        }
    }
}

/// Build one basket. `side` is -1.0 for the basket at the -x end, +1.0 for
/// the +x end; everything hangs inward from the pole.
fn basket(court: &CourtConfig, side: f64) -> (Hoop, BasketColliders) {
    let pole_x = side * court.width / 2.0;
    let inward = -side;
    let rim_y = court.surface_y + court.pole_height;

    // Rim center: board thickness + tube + arm + rim radius in from the pole
    let rim_offset = BACKBOARD_THICKNESS + court.rim_tube + ARM_LENGTH + court.rim_radius;
    let hoop = Hoop {
        center: vec3(pole_x + inward * rim_offset, rim_y, 0.0),
        rim_radius: court.rim_radius,
        rim_tube: court.rim_tube,
    };

    let backboard_center = vec3(
        pole_x + inward * (ARM_LENGTH + POLE_DEPTH / 2.0),
        court.surface_y + court.pole_height - ARM_HEIGHT + BACKBOARD_HEIGHT / 3.0,
        0.0,
    );
    // The board faces the long axis, so its thickness lies along x
    let backboard_half = vec3(
        BACKBOARD_THICKNESS / 2.0,
        BACKBOARD_HEIGHT / 2.0,
        BACKBOARD_WIDTH / 2.0,
    );

    let pole_center = vec3(pole_x, court.surface_y + court.pole_height / 2.0, 0.0);
    let pole_half = vec3(POLE_DEPTH / 2.0, court.pole_height / 2.0, POLE_WIDTH / 2.0);

    let colliders = BasketColliders {
        backboard: Aabb::from_center_half(backboard_center, backboard_half),
        pole: Aabb::from_center_half(pole_center, pole_half),
    };

    (hoop, colliders)
}
