use crate::math::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Velocity half of semi-implicit Euler: applies gravity and the accumulated
/// force/torque, then clears the accumulators. Static bodies are skipped.
pub fn integrate_velocity(body: &mut RigidBody, dt: f64, gravity: Vec2) {
    if body.is_static() {
        return;
    }

    // a = g + F/m
    let linear_acceleration = gravity + body.force * body.inv_mass();
    body.linear_velocity += linear_acceleration * dt;

    let angular_acceleration = body.torque * body.inv_inertia();
    body.angular_velocity += angular_acceleration * dt;

    body.clear_accumulators();
}

/// Position half of semi-implicit Euler, using the already-updated velocities.
/// The caller refreshes the body's cached geometry afterwards.
pub fn integrate_position(body: &mut RigidBody, dt: f64) {
    if body.is_static() {
        return;
    }

    body.position += body.linear_velocity * dt;
    body.rotation += body.angular_velocity * dt;
}
