use std::ops::Range;
use std::time::{Duration, Instant};

use crate::collision::{check_collision, CollisionDetector, ContactPointSolver, GjkEpa, Manifold};
use crate::error::{PhysicsError, Result};
use crate::math::Vec2;
use crate::objects::rigid_body::RigidBody;

use super::config::WorldConfig;
use super::resolver::{get_mutable_body_pair, resolve_manifold, separate};
use super::timestep::FixedTimestep;

/// Owns the bodies and runs the detect/separate/resolve pipeline.
#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    config: WorldConfig,
    // Contacts found during the current substep
    manifolds: Vec<Manifold>,
    detector: Box<dyn CollisionDetector>,
    contact_solver: Box<dyn ContactPointSolver>,
    last_step_duration: Duration,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        let config = WorldConfig::default();
        Self {
            bodies: Vec::new(),
            contact_solver: config.contact_solver.solver(),
            config,
            manifolds: Vec::new(),
            detector: Box::new(GjkEpa),
            last_step_duration: Duration::ZERO,
        }
    }

    /// Creates an empty world after validating `config`.
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            contact_solver: config.contact_solver.solver(),
            config,
            ..Self::new()
        })
    }

    /// Replaces the narrow-phase detector.
    pub fn set_collision_detector(&mut self, detector: Box<dyn CollisionDetector>) {
        self.detector = detector;
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.config.gravity = gravity;
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Adds several bodies and returns their index range.
    pub fn add_all<I>(&mut self, bodies: I) -> Range<usize>
    where
        I: IntoIterator<Item = RigidBody>,
    {
        let start = self.bodies.len();
        self.bodies.extend(bodies);
        start..self.bodies.len()
    }

    /// Removes and returns the body at `index`. Later bodies shift down by one.
    pub fn remove_body(&mut self, index: usize) -> Result<RigidBody> {
        if index >= self.bodies.len() {
            return Err(PhysicsError::BodyIndexOutOfRange {
                index,
                count: self.bodies.len(),
            });
        }
        self.manifolds.clear();
        Ok(self.bodies.remove(index))
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Contacts from the most recent substep.
    pub fn manifolds(&self) -> &[Manifold] {
        &self.manifolds
    }

    /// Wall-clock time spent in the last call to [`step`](Self::step).
    pub fn last_step_duration(&self) -> Duration {
        self.last_step_duration
    }

    pub fn clear_manifolds(&mut self) {
        self.manifolds.clear();
    }

    /// Integrates every body by `dt` under the world gravity.
    pub fn step_bodies(&mut self, dt: f64) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            body.step(dt, gravity);
        }
    }

    /// Tests every pair of bodies, pushes overlapping pairs apart and records
    /// a manifold for each of them.
    pub fn detect(&mut self) {
        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let Some((body_a, body_b)) = get_mutable_body_pair(&mut self.bodies, i, j) else {
                    continue;
                };
                if body_a.is_static() && body_b.is_static() {
                    continue;
                }

                let Some(collision) = check_collision(self.detector.as_ref(), body_a, i, body_b, j)
                else {
                    continue;
                };
                log::trace!(
                    "bodies {i} and {j} overlap by {:.4} along {:?}",
                    collision.penetration.depth,
                    collision.penetration.normal
                );

                separate(body_a, body_b, &collision.penetration);

                let contact_points =
                    self.contact_solver
                        .find_contact_points(body_a, body_b, &collision.penetration);
                if contact_points.is_empty() {
                    log::debug!("no contact points for bodies {i} and {j}");
                    continue;
                }
                self.manifolds.push(Manifold::new(collision, contact_points));
            }
        }
    }

    /// Applies contact impulses for every manifold of the current substep.
    pub fn solve(&mut self) {
        for manifold in &self.manifolds {
            if let Some((body_a, body_b)) =
                get_mutable_body_pair(&mut self.bodies, manifold.body_a_idx, manifold.body_b_idx)
            {
                resolve_manifold(body_a, body_b, manifold);
            }
        }
    }

    /// Advances the simulation by `dt` seconds, split into `config.substeps` substeps,
    /// then drops bodies that fell out of bounds.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let started = Instant::now();
        let substeps = self.config.substeps.max(1);
        let sub_dt = dt / substeps as f64;
        for _ in 0..substeps {
            self.clear_manifolds();
            self.step_bodies(sub_dt);
            self.detect();
            self.solve();
        }
        self.remove_out_of_bounds();

        self.last_step_duration = started.elapsed();
        log::trace!(
            "step of {dt:.4}s: {} bodies, {} manifolds, took {:?}",
            self.bodies.len(),
            self.manifolds.len(),
            self.last_step_duration
        );
    }

    /// Feeds `elapsed` seconds into `clock` and runs the fixed steps it releases.
    /// Returns how many steps ran.
    pub fn advance(&mut self, clock: &mut FixedTimestep, elapsed: f64) -> usize {
        let steps = clock.accumulate(elapsed);
        for _ in 0..steps {
            self.step(clock.step_size());
        }
        steps
    }

    /// Removes bodies lying entirely below `config.despawn_below`.
    /// Returns the number of removed bodies.
    pub fn remove_out_of_bounds(&mut self) -> usize {
        let Some(limit) = self.config.despawn_below else {
            return 0;
        };

        let before = self.bodies.len();
        self.bodies.retain(|body| body.aabb().max.y >= limit);
        let removed = before - self.bodies.len();
        if removed > 0 {
            self.manifolds.clear();
            log::debug!("removed {removed} bodies below y = {limit}");
        }
        removed
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
