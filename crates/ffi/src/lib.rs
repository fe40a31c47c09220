//! C bindings for Scorepad.
//!
//! This crate exposes the score formatter over a plain C ABI so a host
//! application (game engine, scripting runtime) can load it as a native
//! plugin. Two surfaces are exported:
//!
//! - a handle-based API ([`handle`]) where the host owns explicit formatter
//!   instances, and
//! - the flat legacy surface (`GetScore` / `SetScore` / `SetLength` /
//!   `ToString`) backed by one process-wide instance, matching the original
//!   plugin contract.
//!
//! The flat surface's instance is created lazily on first use and lives for
//! the rest of the process; a mutex serializes access so concurrent hosts
//! are safe even though the contract only promises single-threaded calls.
//!
//! Strings returned by `ToString` and `scorepad_to_string` are owned by the
//! caller and must be released with `FreeString`.

pub mod handle;
mod types;

pub use handle::*;
pub use types::FfiScore;

use scorepad_core::ScoreString;
use std::os::raw::{c_char, c_int};
use std::sync::{Mutex, OnceLock, PoisonError};

static INSTANCE: OnceLock<Mutex<ScoreString>> = OnceLock::new();

fn instance() -> std::sync::MutexGuard<'static, ScoreString> {
    INSTANCE
        .get_or_init(|| Mutex::new(ScoreString::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The library version as a static C string. Never freed by the host.
#[no_mangle]
pub extern "C" fn scorepad_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast()
}

// =============================================================================
// Flat legacy surface
// =============================================================================

/// Copy out the process-wide formatter's current record.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetScore() -> FfiScore {
    instance().score().into()
}

/// Overwrite the process-wide score value. Pass 0 to restore the default;
/// the length field is untouched.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn SetScore(score: c_int) {
    tracing::trace!(score, "host set score");
    instance().set_score(score);
}

/// Overwrite the process-wide minimum rendered width. Pass 0 to restore the
/// default (no padding); the score value is untouched.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn SetLength(length: c_int) {
    tracing::trace!(length, "host set length");
    instance().set_length(length);
}

/// Render the process-wide score as a zero-padded decimal C string.
///
/// The caller owns the result and must release it with [`FreeString`].
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ToString() -> *mut c_char {
    types::into_raw_c_string(instance().to_string())
}

/// Release a string returned by [`ToString`] or
/// [`scorepad_to_string`](handle::scorepad_to_string). Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a string pointer obtained from this library that
/// has not already been freed.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn FreeString(ptr: *mut c_char) {
    types::free_raw_c_string(ptr);
}
