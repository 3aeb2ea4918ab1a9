//! Fixed-step integrators for the central-force model.
//!
//! Both schemes integrate the same inverse-square attraction toward the
//! origin with coupling `k = G * M`. Only the x and y slots of each particle
//! are read or written; the reserved z slot passes through untouched.

use glam::Vec2;

use crate::core::points::{PointSet, COMPONENTS};

/// Stepping scheme applied by [`ParticleSystem::update`](crate::ParticleSystem::update).
///
/// `SemiImplicitEuler` is the behavioral contract: one force evaluation per
/// step, velocity updated from the un-updated position, position updated from
/// the already-updated velocity. `Midpoint` is an alternate two-stage scheme
/// that evaluates the force a second time at a half-step estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    /// Symplectic Euler, the default.
    #[default]
    SemiImplicitEuler,
    /// Two-stage midpoint step.
    Midpoint,
}

impl Scheme {
    /// Advance every particle of `set` by one step of length `dt`.
    ///
    /// `dt` is applied verbatim: zero leaves the state bit-for-bit unchanged
    /// and a negative value integrates backward. A particle exactly at the
    /// origin divides by zero and degenerates to non-finite components; the
    /// model does not guard against it.
    pub fn advance(self, k: f32, dt: f32, set: &mut PointSet) {
        let n = set.len();
        let (pos, vel) = set.buffers_mut();
        for i in 0..n {
            let base = i * COMPONENTS;
            let p = Vec2::new(pos[base], pos[base + 1]);
            let v = Vec2::new(vel[base], vel[base + 1]);
            let (p, v) = match self {
                Scheme::SemiImplicitEuler => semi_implicit_euler(k, dt, p, v),
                Scheme::Midpoint => midpoint(k, dt, p, v),
            };
            pos[base] = p.x;
            pos[base + 1] = p.y;
            vel[base] = v.x;
            vel[base + 1] = v.y;
        }
    }
}

/// Single-stage symplectic Euler step.
///
/// `impulse = (k / r^2) * dt` along the unit vector toward the origin,
/// applied to the velocity first; the position then advances with the
/// updated velocity.
#[inline]
pub fn semi_implicit_euler(k: f32, dt: f32, p: Vec2, v: Vec2) -> (Vec2, Vec2) {
    let r2 = p.length_squared();
    let r = r2.sqrt();
    let impulse = (k / r2) * dt;
    let v = v - impulse * (p / r);
    let p = p + v * dt;
    (p, v)
}

/// Two-stage midpoint step.
///
/// Stage one takes a half-step Euler estimate of the state; stage two
/// re-evaluates the force there, applies it over the half step, and advances
/// the position by a full step with the updated velocity.
#[inline]
pub fn midpoint(k: f32, dt: f32, p: Vec2, v: Vec2) -> (Vec2, Vec2) {
    let half = 0.5 * dt;
    // Stage one: half-step estimate from the current state.
    let r2_0 = p.length_squared();
    let r0 = r2_0.sqrt();
    let imp0 = (k / r2_0) * half;
    let v_mid = v - imp0 * (p / r0);
    let p_mid = p + half * v_mid;
    // Stage two: force at the estimate, then the full position advance.
    let r2_1 = p_mid.length_squared();
    let r1 = r2_1.sqrt();
    let imp1 = (k / r2_1) * half;
    let v = v - imp1 * (p_mid / r1);
    let p = p + v * dt;
    (p, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_is_the_identity() {
        let p = Vec2::new(0.3, -0.7);
        let v = Vec2::new(1.5, 2.5);
        assert_eq!(semi_implicit_euler(1.0e-4, 0.0, p, v), (p, v));
        assert_eq!(midpoint(1.0e-4, 0.0, p, v), (p, v));
    }

    #[test]
    fn advance_leaves_the_z_slot_alone() {
        let mut set = PointSet::new(2);
        for i in 0..2 {
            let base = i * COMPONENTS;
            set.positions_mut()[base] = 1.0;
            set.positions_mut()[base + 2] = 7.5;
            set.velocities_mut()[base + 2] = -7.5;
        }
        Scheme::SemiImplicitEuler.advance(1.0e-4, 0.5, &mut set);
        for i in 0..2 {
            let base = i * COMPONENTS;
            assert_eq!(set.positions()[base + 2], 7.5);
            assert_eq!(set.velocities()[base + 2], -7.5);
        }
    }
}
