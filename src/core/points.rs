use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};

/// Components stored per particle in each buffer.
///
/// The layout is interleaved (x, y, z) triples; particle `i` occupies slots
/// `[3i, 3i + 2]`. The physics only reads and writes x and y; the z slot is
/// reserved for a future 3D force model and is never touched.
pub const COMPONENTS: usize = 3;

/// A fixed-size group of particles sharing one position/velocity buffer pair.
///
/// The particle count is set at construction and never changes. Both buffers
/// hold `COMPONENTS * len` values and are exposed mutably so a host renderer
/// can read (and write) particle state in place; the slices alias live
/// simulation state, not a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    len: usize,
    position: Vec<f32>,
    velocity: Vec<f32>,
}

impl PointSet {
    /// Create a group of `len` particles with zero-initialized buffers.
    ///
    /// `len == 0` is legal and yields empty buffers.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            position: vec![0.0; len * COMPONENTS],
            velocity: vec![0.0; len * COMPONENTS],
        }
    }

    /// Number of particles in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-particle group.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position buffer, `COMPONENTS * len` interleaved values.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.position
    }

    /// Mutable position buffer; writes feed directly into the next step.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.position
    }

    /// Velocity buffer, same shape and indexing as the positions.
    #[inline]
    pub fn velocities(&self) -> &[f32] {
        &self.velocity
    }

    /// Mutable velocity buffer.
    #[inline]
    pub fn velocities_mut(&mut self) -> &mut [f32] {
        &mut self.velocity
    }

    /// Both buffers mutably at once, for callers that update positions and
    /// velocities in the same pass (the integrators, the C boundary).
    #[inline]
    pub fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.position, &mut self.velocity)
    }

    /// Arrange the particles on a centered square lattice spanning
    /// `[-half_extent, half_extent)` on both axes, and zero the velocities.
    ///
    /// A convenient initial layout for a fresh group. The lattice side is
    /// `ceil(sqrt(len))`, so the last row may be partially filled.
    pub fn fill_lattice(&mut self, half_extent: f32) {
        let side = (self.len as f32).sqrt().ceil() as usize;
        if side == 0 {
            return;
        }
        for i in 0..self.len {
            let col = (i % side) as f32;
            let row = (i / side) as f32;
            let base = i * COMPONENTS;
            self.position[base] = (col / side as f32 - 0.5) * 2.0 * half_extent;
            self.position[base + 1] = (row / side as f32 - 0.5) * 2.0 * half_extent;
            self.velocity[base] = 0.0;
            self.velocity[base + 1] = 0.0;
        }
    }

    /// Place the particles uniformly at random in the square
    /// `[-half_extent, half_extent]^2` and zero the velocities.
    ///
    /// Pass a seed for reproducible placement; `None` draws a fresh seed.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `half_extent` is negative or not finite.
    pub fn scatter(&mut self, half_extent: f32, seed: Option<u64>) -> Result<()> {
        if !half_extent.is_finite() || half_extent < 0.0 {
            return Err(Error::InvalidParam(
                "half_extent must be finite and >= 0".into(),
            ));
        }
        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rand::rng().random()),
        };
        for i in 0..self.len {
            let base = i * COMPONENTS;
            self.position[base] = rng.random_range(-half_extent..=half_extent);
            self.position[base + 1] = rng.random_range(-half_extent..=half_extent);
            self.velocity[base] = 0.0;
            self.velocity[base + 1] = 0.0;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_is_zero_initialized() {
        let set = PointSet::new(5);
        assert_eq!(set.len(), 5);
        assert_eq!(set.positions().len(), 5 * COMPONENTS);
        assert_eq!(set.velocities().len(), 5 * COMPONENTS);
        assert!(set.positions().iter().all(|&v| v == 0.0));
        assert!(set.velocities().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_group_is_legal() {
        let set = PointSet::new(0);
        assert!(set.is_empty());
        assert!(set.positions().is_empty());
        assert!(set.velocities().is_empty());
    }

    #[test]
    fn lattice_spans_the_requested_square() {
        let mut set = PointSet::new(4);
        set.velocities_mut()[0] = 3.0;
        set.fill_lattice(0.5);
        // side = 2: columns and rows map to {-0.5, 0.0}
        assert_eq!(&set.positions()[0..2], &[-0.5, -0.5]);
        assert_eq!(&set.positions()[3..5], &[0.0, -0.5]);
        assert_eq!(&set.positions()[6..8], &[-0.5, 0.0]);
        assert_eq!(&set.positions()[9..11], &[0.0, 0.0]);
        assert_eq!(set.velocities()[0], 0.0);
    }

    #[test]
    fn scatter_is_reproducible_and_bounded() -> crate::error::Result<()> {
        let mut a = PointSet::new(16);
        let mut b = PointSet::new(16);
        a.scatter(0.25, Some(42))?;
        b.scatter(0.25, Some(42))?;
        assert_eq!(a.positions(), b.positions());
        for i in 0..a.len() {
            let base = i * COMPONENTS;
            assert!(a.positions()[base].abs() <= 0.25);
            assert!(a.positions()[base + 1].abs() <= 0.25);
        }
        Ok(())
    }

    #[test]
    fn scatter_rejects_bad_extent() {
        let mut set = PointSet::new(2);
        assert!(set.scatter(f32::NAN, Some(1)).is_err());
        assert!(set.scatter(-1.0, Some(1)).is_err());
    }
}
