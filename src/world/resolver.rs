//! Sequential-impulse contact resolution.

use crate::collision::{Manifold, Penetration};
use crate::math::{Vec2, EPSILON};
use crate::objects::rigid_body::RigidBody;

/// Returns mutable references to two distinct bodies of a slice.
///
/// `None` when the indices are equal or out of range.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [RigidBody],
    idx_a: usize,
    idx_b: usize,
) -> Option<(&mut RigidBody, &mut RigidBody)> {
    if idx_a == idx_b || idx_a >= bodies.len() || idx_b >= bodies.len() {
        return None;
    }

    // Ensure a < b for split_at_mut
    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        Some((&mut slice_a[idx_a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        Some((&mut slice_a[0], &mut slice_b[idx_b]))
    }
}

/// Pushes two overlapping bodies apart along the penetration normal.
///
/// A static body never moves; the dynamic partner takes the full depth.
/// Two dynamic bodies each move half the depth.
pub fn separate(body_a: &mut RigidBody, body_b: &mut RigidBody, penetration: &Penetration) {
    let translation = penetration.translation();
    match (body_a.is_static(), body_b.is_static()) {
        (true, true) => {}
        (true, false) => body_b.move_by(translation),
        (false, true) => body_a.move_by(-translation),
        (false, false) => {
            let half = translation * 0.5;
            body_a.move_by(-half);
            body_b.move_by(half);
        }
    }
}

/// Coulomb clamp for a tangential impulse.
///
/// `jt` is kept while it stays inside the static friction cone `j * static_friction`;
/// otherwise the bodies slide and the impulse becomes `-j * dynamic_friction`.
pub fn friction_impulse(jt: f64, j: f64, static_friction: f64, dynamic_friction: f64) -> f64 {
    if jt.abs() < j * static_friction {
        jt
    } else {
        -j * dynamic_friction
    }
}

/// Applies restitution and friction impulses for every contact of `manifold`.
///
/// The impulse per contact is divided by the contact count so a two-point
/// manifold delivers the same total impulse as a single point.
pub fn resolve_manifold(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &Manifold) {
    let count = manifold.contact_count();
    if count == 0 {
        return;
    }

    let normal = manifold.penetration.normal;
    let restitution = body_a.material().restitution.min(body_b.material().restitution);
    let static_friction =
        (body_a.material().static_friction + body_b.material().static_friction) * 0.5;
    let dynamic_friction =
        (body_a.material().dynamic_friction + body_b.material().dynamic_friction) * 0.5;

    for &contact in &manifold.contact_points {
        let r_a = contact - body_a.position();
        let r_b = contact - body_b.position();
        let r_a_perp = r_a.perpendicular();
        let r_b_perp = r_b.perpendicular();

        let velocity_a = body_a.linear_velocity + r_a_perp * body_a.angular_velocity;
        let velocity_b = body_b.linear_velocity + r_b_perp * body_b.angular_velocity;
        let relative_velocity = velocity_b - velocity_a;

        let contact_velocity = relative_velocity.dot(normal);
        if contact_velocity > 0.0 {
            continue;
        }

        let r_a_perp_dot_n = r_a_perp.dot(normal);
        let r_b_perp_dot_n = r_b_perp.dot(normal);
        let denom = (body_a.inv_mass()
            + body_b.inv_mass()
            + r_a_perp_dot_n * r_a_perp_dot_n * body_a.inv_inertia()
            + r_b_perp_dot_n * r_b_perp_dot_n * body_b.inv_inertia())
            * count as f64;
        if denom <= 0.0 {
            continue;
        }

        let j = -(1.0 + restitution) * contact_velocity / denom;
        apply_impulse(body_a, body_b, r_a, r_b, normal * j);

        let tangent = relative_velocity - normal * contact_velocity;
        if tangent.magnitude() < EPSILON {
            continue;
        }
        let tangent = tangent.normalize();

        let jt = relative_velocity.dot(-tangent) / denom;
        let jt = friction_impulse(jt, j, static_friction, dynamic_friction);
        apply_impulse(body_a, body_b, r_a, r_b, tangent * jt);
    }
}

/// `-impulse` on A and `+impulse` on B at the given contact arms.
fn apply_impulse(body_a: &mut RigidBody, body_b: &mut RigidBody, r_a: Vec2, r_b: Vec2, impulse: Vec2) {
    body_a.linear_velocity -= impulse * body_a.inv_mass();
    body_a.angular_velocity -= r_a.cross(impulse) * body_a.inv_inertia();
    body_b.linear_velocity += impulse * body_b.inv_mass();
    body_b.angular_velocity += r_b.cross(impulse) * body_b.inv_inertia();
}
