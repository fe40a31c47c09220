//! Handle-based C API.
//!
//! Hosts that can carry a context pointer should prefer this surface over
//! the flat singleton one in the crate root: each handle is an independent
//! formatter, so several score displays can coexist in one process.
//!
//! Lifecycle: `scorepad_new` allocates, every other function borrows, and
//! `scorepad_free` releases. All functions tolerate a null handle.

use crate::types::{into_raw_c_string, FfiScore};
use scorepad_core::ScoreString;
use std::os::raw::{c_char, c_int};
use std::ptr;

/// Opaque formatter handle. The host only ever sees `*mut Scorepad`.
pub struct Scorepad(ScoreString);

/// Allocate a formatter with its record reset to `{0, 0}`.
#[no_mangle]
pub extern "C" fn scorepad_new() -> *mut Scorepad {
    Box::into_raw(Box::new(Scorepad(ScoreString::new())))
}

/// Release a formatter. Null is a no-op.
///
/// # Safety
///
/// `handle` must be null or a pointer from [`scorepad_new`] that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn scorepad_free(handle: *mut Scorepad) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Copy out the current record. A null handle yields a zeroed record.
///
/// # Safety
///
/// `handle` must be null or a live pointer from [`scorepad_new`].
#[no_mangle]
pub unsafe extern "C" fn scorepad_get_score(handle: *const Scorepad) -> FfiScore {
    match handle.as_ref() {
        Some(pad) => pad.0.score().into(),
        None => FfiScore {
            score: 0,
            length: 0,
        },
    }
}

/// Overwrite the score value; length is untouched. Null handle is a no-op.
///
/// # Safety
///
/// `handle` must be null or a live pointer from [`scorepad_new`].
#[no_mangle]
pub unsafe extern "C" fn scorepad_set_score(handle: *mut Scorepad, score: c_int) {
    if let Some(pad) = handle.as_mut() {
        pad.0.set_score(score);
    }
}

/// Overwrite the minimum rendered width; score is untouched. Null handle is
/// a no-op.
///
/// # Safety
///
/// `handle` must be null or a live pointer from [`scorepad_new`].
#[no_mangle]
pub unsafe extern "C" fn scorepad_set_length(handle: *mut Scorepad, length: c_int) {
    if let Some(pad) = handle.as_mut() {
        pad.0.set_length(length);
    }
}

/// Render the current score as a zero-padded decimal C string.
///
/// The caller owns the result and must release it with
/// [`FreeString`](crate::FreeString). A null handle yields null.
///
/// # Safety
///
/// `handle` must be null or a live pointer from [`scorepad_new`].
#[no_mangle]
pub unsafe extern "C" fn scorepad_to_string(handle: *const Scorepad) -> *mut c_char {
    match handle.as_ref() {
        Some(pad) => into_raw_c_string(pad.0.to_string()),
        None => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    unsafe fn rendered(handle: *const Scorepad) -> String {
        let ptr = scorepad_to_string(handle);
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        crate::types::free_raw_c_string(ptr);
        s
    }

    #[test]
    fn handle_lifecycle_and_rendering() {
        unsafe {
            let pad = scorepad_new();
            assert_eq!(scorepad_get_score(pad), FfiScore { score: 0, length: 0 });

            scorepad_set_score(pad, 5);
            scorepad_set_length(pad, 3);
            assert_eq!(scorepad_get_score(pad), FfiScore { score: 5, length: 3 });
            assert_eq!(rendered(pad), "005");

            scorepad_free(pad);
        }
    }

    #[test]
    fn handles_are_independent() {
        unsafe {
            let a = scorepad_new();
            let b = scorepad_new();
            scorepad_set_score(a, 7);
            scorepad_set_length(b, 4);
            assert_eq!(scorepad_get_score(a), FfiScore { score: 7, length: 0 });
            assert_eq!(scorepad_get_score(b), FfiScore { score: 0, length: 4 });
            scorepad_free(a);
            scorepad_free(b);
        }
    }

    #[test]
    fn null_handle_is_tolerated_everywhere() {
        unsafe {
            let null = ptr::null_mut();
            scorepad_set_score(null, 1);
            scorepad_set_length(null, 1);
            assert_eq!(scorepad_get_score(null), FfiScore { score: 0, length: 0 });
            assert!(scorepad_to_string(null).is_null());
            scorepad_free(null);
        }
    }
}
