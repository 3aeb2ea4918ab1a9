use log::debug;

use crate::core::integrator::Scheme;
use crate::core::params::Params;
use crate::core::points::PointSet;
use crate::error::{Error, Result};

/// The simulation world: an ordered collection of particle groups advanced
/// together under the central attractor.
///
/// Groups are indexed by insertion position; indices are positional, not
/// stable identifiers, and shift down when an earlier group is removed.
/// The system exclusively owns every group's buffers. Views handed out by
/// [`get_mut`](Self::get_mut) or [`add`](Self::add) borrow live state and
/// must end before the next structural change, which makes use-after-remove
/// unrepresentable in the safe API.
///
/// Group buffers never reallocate after creation, so raw pointers taken into
/// them (the C boundary does this) stay valid until their group is removed
/// or the system is dropped, even across unrelated `add`/`remove` calls.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    params: Params,
    scheme: Scheme,
    sets: Vec<PointSet>,
}

impl ParticleSystem {
    /// Create an empty system with the default constants and the default
    /// semi-implicit Euler scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty system with custom physical constants.
    pub fn with_params(params: Params) -> Self {
        Self::with_scheme(params, Scheme::default())
    }

    /// Create an empty system with custom constants and stepping scheme.
    pub fn with_scheme(params: Params, scheme: Scheme) -> Self {
        Self {
            params,
            scheme,
            sets: Vec::new(),
        }
    }

    /// Physical constants in effect.
    #[inline]
    pub fn params(&self) -> Params {
        self.params
    }

    /// Stepping scheme in effect.
    #[inline]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Number of live groups.
    #[inline]
    pub fn count(&self) -> usize {
        self.sets.len()
    }

    /// Create a group of `len` zero-initialized particles, append it, and
    /// return a view of it. The new group's index is `count() - 1`.
    pub fn add(&mut self, len: usize) -> &mut PointSet {
        debug!("adding group {} with {} particles", self.sets.len(), len);
        self.sets.push(PointSet::new(len));
        // Just pushed, so the vec is non-empty.
        let index = self.sets.len() - 1;
        &mut self.sets[index]
    }

    /// The group at `index`.
    ///
    /// Errors:
    /// - `Error::IndexOutOfRange` if `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&PointSet> {
        self.sets.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.sets.len(),
        })
    }

    /// Mutable view of the group at `index`.
    ///
    /// Errors:
    /// - `Error::IndexOutOfRange` if `index >= count()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut PointSet> {
        let count = self.sets.len();
        self.sets
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, count })
    }

    /// Delete the group at `index`, shifting all later groups down by one.
    ///
    /// Returns whether the index was valid; out of range is a no-op
    /// returning false.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.sets.len() {
            debug!("removing group {}", index);
            self.sets.remove(index);
            true
        } else {
            false
        }
    }

    /// Advance every group by one step of length `dt` seconds.
    ///
    /// `dt` is applied mechanically with no clamping; zero is the identity
    /// and a negative value integrates backward.
    pub fn update(&mut self, dt: f32) {
        let k = self.params.coupling();
        let scheme = self.scheme;
        for set in &mut self.sets {
            scheme.advance(k, dt, set);
        }
    }
}
