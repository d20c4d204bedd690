use impulse_engine::collision::{
    epa, gjk, CollisionDetector, GjkEpa, GjkResult, EPA_MAX_ITERATIONS, GJK_MAX_ITERATIONS,
};
use impulse_engine::world::friction_impulse;
use impulse_engine::{RigidBody, Vec2};
use proptest::prelude::*;

fn ball(x: f64, y: f64, r: f64) -> RigidBody {
    RigidBody::create_circle(Vec2::new(x, y), r, false).unwrap()
}

fn boxed(x: f64, y: f64, w: f64, h: f64) -> RigidBody {
    RigidBody::create_box(Vec2::new(x, y), w, h, false).unwrap()
}

proptest! {
    #[test]
    fn circle_overlap_is_symmetric(
        ax in -100.0..100.0f64, ay in -100.0..100.0f64, ar in 5.0..40.0f64,
        bx in -100.0..100.0f64, by in -100.0..100.0f64, br in 5.0..40.0f64,
    ) {
        let distance = Vec2::new(ax, ay).distance(Vec2::new(bx, by));
        prop_assume!((distance - (ar + br)).abs() > 0.5);
        prop_assume!(distance > 1.0);

        let a = ball(ax, ay, ar);
        let b = ball(bx, by, br);
        let expected = distance < ar + br;

        prop_assert_eq!(gjk(&a, &b).intersects(), expected);
        prop_assert_eq!(gjk(&b, &a).intersects(), expected);

        if expected {
            let ab = GjkEpa.detect(&a, &b).unwrap();
            let ba = GjkEpa.detect(&b, &a).unwrap();
            prop_assert!((ab.depth - ba.depth).abs() < 0.05);
            prop_assert!((ab.depth - (ar + br - distance)).abs() < 0.05);
            prop_assert!((ab.normal + ba.normal).magnitude() < 0.05);

            let axis = (Vec2::new(bx, by) - Vec2::new(ax, ay)).normalize();
            prop_assert!(ab.normal.dot(axis) > 0.99);
        }
    }

    #[test]
    fn box_overlap_is_symmetric(
        ax in -60.0..60.0f64, ay in -60.0..60.0f64, aw in 5.0..50.0f64, ah in 5.0..50.0f64,
        bx in -60.0..60.0f64, by in -60.0..60.0f64, bw in 5.0..50.0f64, bh in 5.0..50.0f64,
    ) {
        let overlap_x = (aw + bw) / 2.0 - (bx - ax).abs();
        let overlap_y = (ah + bh) / 2.0 - (by - ay).abs();
        prop_assume!(overlap_x.abs() > 0.5 && overlap_y.abs() > 0.5);

        let a = boxed(ax, ay, aw, ah);
        let b = boxed(bx, by, bw, bh);
        let expected = overlap_x > 0.0 && overlap_y > 0.0;

        prop_assert_eq!(gjk(&a, &b).intersects(), expected);
        prop_assert_eq!(gjk(&b, &a).intersects(), expected);

        if expected {
            prop_assume!((overlap_x - overlap_y).abs() > 0.5);
            let ab = GjkEpa.detect(&a, &b).unwrap();
            let ba = GjkEpa.detect(&b, &a).unwrap();

            let depth = overlap_x.min(overlap_y);
            prop_assert!((ab.depth - depth).abs() < 1e-3);
            prop_assert!((ba.depth - depth).abs() < 1e-3);
            prop_assert!((ab.normal + ba.normal).magnitude() < 1e-6);
        }
    }

    #[test]
    fn narrow_phase_respects_iteration_caps(
        ax in -20.0..20.0f64, ay in -20.0..20.0f64, a_rot in 0.0..std::f64::consts::TAU,
        bx in -20.0..20.0f64, by in -20.0..20.0f64, b_rot in 0.0..std::f64::consts::TAU,
        size in 5.0..30.0f64,
        coincident in any::<bool>(),
    ) {
        let mut a = boxed(ax, ay, size, size * 0.5);
        let (bx, by) = if coincident { (ax, ay) } else { (bx, by) };
        let mut b = boxed(bx, by, size, size * 0.5);
        a.rotate(a_rot);
        b.rotate(if coincident { a_rot } else { b_rot });

        let result = gjk(&a, &b);
        prop_assert!(result.iterations() <= GJK_MAX_ITERATIONS);

        if let GjkResult::Intersecting { simplex, .. } = result {
            let refined = epa(&simplex, &a, &b);
            prop_assert!(refined.expansions <= EPA_MAX_ITERATIONS);
            prop_assert!(refined.penetration.depth.is_finite());
            prop_assert!(refined.penetration.depth >= 0.0);
        }
    }

    #[test]
    fn friction_never_exceeds_coulomb_limit(
        jt in -100.0..100.0f64,
        j in 0.0..100.0f64,
        dynamic in 0.0..1.0f64,
        extra in 0.0..1.0f64,
    ) {
        let static_friction = dynamic + extra;
        let impulse = friction_impulse(jt, j, static_friction, dynamic);

        if jt.abs() < j * static_friction {
            prop_assert_eq!(impulse, jt);
        } else {
            prop_assert_eq!(impulse, -j * dynamic);
            prop_assert!(impulse.abs() <= j * dynamic);
        }
    }
}
