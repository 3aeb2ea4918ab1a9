//! Flat C boundary over one process-wide [`ParticleSystem`].
//!
//! This is the surface a C or Swift host links against: explicit
//! `particle_system_init`/`particle_system_destroy` lifecycle, then
//! `add`/`get`/`count`/`update` against the hidden instance. Calls made
//! before `init` or after `destroy` are rejected with the documented
//! sentinels instead of touching absent state.
//!
//! Buffer views are zero-copy by contract: [`RawPointSet`] carries raw
//! pointers into the owning group's live buffers, so a renderer reads (and
//! may write) particle state directly. Group buffers never reallocate after
//! creation, which keeps the pointers stable across unrelated `add` calls;
//! they are invalidated only when their group is removed or the system is
//! destroyed.

use std::ffi::{c_float, c_int};
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::core::{ParticleSystem, PointSet};
use crate::error::{Error, Result};

/// Success status for calls returning a code.
pub const STATUS_OK: c_int = 0;
/// Failure status; also the `count` sentinel for an uninitialized system.
pub const STATUS_ERROR: c_int = -1;

static SYSTEM: Mutex<Option<ParticleSystem>> = Mutex::new(None);

/// Zero-copy view of one particle group, ABI-compatible with the host's
/// `PointSet` struct.
///
/// An invalid view (lookup failure or lifecycle misuse) has `size == -1`
/// and null pointers; callers must check before dereferencing.
///
/// # Safety
///
/// `position` and `velocity` each point at `3 * size` floats of live
/// simulation state, not a copy: writes through them feed directly into the
/// next `particle_system_update` call. The pointers become dangling once
/// the owning group is removed or the system is destroyed. The engine
/// assumes a single calling thread; the host must not use a view
/// concurrently with other `particle_system_*` calls.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawPointSet {
    /// Particle count, or -1 for an invalid view.
    pub size: c_int,
    /// Start of the interleaved position triples.
    pub position: *mut c_float,
    /// Start of the interleaved velocity triples.
    pub velocity: *mut c_float,
}

impl RawPointSet {
    fn invalid() -> Self {
        Self {
            size: -1,
            position: ptr::null_mut(),
            velocity: ptr::null_mut(),
        }
    }

    fn from_set(set: &mut PointSet) -> Self {
        let size = set.len() as c_int;
        let (position, velocity) = set.buffers_mut();
        Self {
            size,
            position: position.as_mut_ptr(),
            velocity: velocity.as_mut_ptr(),
        }
    }
}

fn lock() -> MutexGuard<'static, Option<ParticleSystem>> {
    // A poisoned lock still holds consistent state; recover the guard.
    SYSTEM.lock().unwrap_or_else(PoisonError::into_inner)
}

fn status(result: Result<()>) -> c_int {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => {
            debug!("boundary call rejected: {e}");
            STATUS_ERROR
        }
    }
}

/// Create the process-wide simulation instance.
///
/// Returns [`STATUS_OK`], or [`STATUS_ERROR`] if an instance already exists
/// (double-init is an error, not idempotent).
#[no_mangle]
pub extern "C" fn particle_system_init() -> c_int {
    let mut guard = lock();
    status(if guard.is_some() {
        Err(Error::AlreadyInitialized)
    } else {
        *guard = Some(ParticleSystem::new());
        debug!("particle system initialized");
        Ok(())
    })
}

/// Destroy the instance and release every group, invalidating all views.
///
/// Returns [`STATUS_OK`], or [`STATUS_ERROR`] if no instance exists.
#[no_mangle]
pub extern "C" fn particle_system_destroy() -> c_int {
    let mut guard = lock();
    status(match guard.take() {
        Some(_) => {
            debug!("particle system destroyed");
            Ok(())
        }
        None => Err(Error::Uninitialized),
    })
}

/// Number of live groups, or -1 if the system is not initialized.
#[no_mangle]
pub extern "C" fn particle_system_count() -> c_int {
    let guard = lock();
    match guard.as_ref() {
        Some(system) => system.count() as c_int,
        None => STATUS_ERROR,
    }
}

/// Create and append a group of `size` particles, returning a view of its
/// live buffers.
///
/// Returns an invalid view if `size` is negative or the system is not
/// initialized.
#[no_mangle]
pub extern "C" fn particle_system_add(size: c_int) -> RawPointSet {
    if size < 0 {
        debug!("boundary call rejected: negative group size {size}");
        return RawPointSet::invalid();
    }
    let mut guard = lock();
    match guard.as_mut() {
        Some(system) => RawPointSet::from_set(system.add(size as usize)),
        None => RawPointSet::invalid(),
    }
}

/// View of the live buffers of the group at `index`.
///
/// Returns an invalid view if `index` is out of range or the system is not
/// initialized.
#[no_mangle]
pub extern "C" fn particle_system_get(index: c_int) -> RawPointSet {
    if index < 0 {
        debug!("boundary call rejected: negative group index {index}");
        return RawPointSet::invalid();
    }
    let mut guard = lock();
    match guard.as_mut().map(|system| system.get_mut(index as usize)) {
        Some(Ok(set)) => RawPointSet::from_set(set),
        Some(Err(e)) => {
            debug!("boundary call rejected: {e}");
            RawPointSet::invalid()
        }
        None => RawPointSet::invalid(),
    }
}

/// Advance every group by one step of `dt` seconds.
///
/// Returns [`STATUS_OK`], or [`STATUS_ERROR`] if the system is not
/// initialized.
#[no_mangle]
pub extern "C" fn particle_system_update(dt: c_float) -> c_int {
    let mut guard = lock();
    status(match guard.as_mut() {
        Some(system) => {
            system.update(dt);
            Ok(())
        }
        None => Err(Error::Uninitialized),
    })
}
