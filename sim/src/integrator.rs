use hoopshot_shared::vec3::Vec3;

/// Advance one step of semi-implicit Euler under constant gravity:
/// velocity first, then position with the updated velocity. Gravity acts
/// on the vertical axis only.
pub fn integrate(pos: &mut Vec3, vel: &mut Vec3, gravity: f64, dt: f64) {
    vel.y += gravity * dt;
    pos.x += vel.x * dt;
    pos.y += vel.y * dt;
    pos.z += vel.z * dt;
}
