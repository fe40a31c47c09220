//! FFI-safe types for the C export surface.
//!
//! These mirror the core types with `repr(C)` layouts so the host can pass
//! them by value across the boundary.

use scorepad_core::Score;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

/// C-layout mirror of [`scorepad_core::Score`], returned by value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiScore {
    pub score: c_int,
    pub length: c_int,
}

impl From<Score> for FfiScore {
    fn from(s: Score) -> Self {
        Self {
            score: s.score,
            length: s.length,
        }
    }
}

impl From<FfiScore> for Score {
    fn from(s: FfiScore) -> Self {
        Self {
            score: s.score,
            length: s.length,
        }
    }
}

/// Hand a Rust string to the host as a NUL-terminated C string.
///
/// Ownership transfers to the caller, who must release it with
/// [`FreeString`](crate::FreeString). Returns null if the string contains an
/// interior NUL, which decimal renderings never do.
pub(crate) fn into_raw_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

/// Reclaim a string previously handed out by [`into_raw_c_string`].
///
/// Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer obtained from [`into_raw_c_string`] that
/// has not already been freed.
pub(crate) unsafe fn free_raw_c_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn score_round_trips_through_ffi_layout() {
        let score = Score::new(-7, 4);
        let ffi: FfiScore = score.into();
        assert_eq!(Score::from(ffi), score);
    }

    #[test]
    fn raw_string_round_trip() {
        let ptr = into_raw_c_string("005".to_string());
        assert!(!ptr.is_null());
        let seen = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { free_raw_c_string(ptr) };
        assert_eq!(seen, "005");
    }

    #[test]
    fn freeing_null_is_harmless() {
        unsafe { free_raw_c_string(std::ptr::null_mut()) };
    }
}
