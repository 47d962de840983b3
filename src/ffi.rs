//! FFI bindings for workout statistics
//!
//! This module provides C-compatible functions for calling the library from other
//! languages. All functions use C strings (null-terminated) and return allocated
//! memory that must be freed by the caller using `workout_free_string`.
//!
//! Package parameters are passed as a JSON array of numbers, e.g. `[15000, 1, 75]`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::encoder::SummaryEncoder;
use crate::error::WorkoutError;
use crate::package::read_package;
use crate::workouts::Workout;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Decode the C arguments and build the workout, recording any failure
unsafe fn workout_from_args(
    workout_type: *const c_char,
    params_json: *const c_char,
) -> Option<Workout> {
    let Some(code) = cstr_to_string(workout_type) else {
        set_last_error("Invalid workout type string pointer");
        return None;
    };

    let Some(params) = cstr_to_string(params_json) else {
        set_last_error("Invalid params string pointer");
        return None;
    };

    let built = serde_json::from_str::<Vec<f64>>(&params)
        .map_err(WorkoutError::from)
        .and_then(|data| read_package(&code, &data));

    match built {
        Ok(workout) => Some(workout),
        Err(e) => {
            set_last_error(&e.to_string());
            None
        }
    }
}

/// Build a workout and return its summary message.
///
/// # Safety
/// - `workout_type` and `params_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `workout_free_string`.
/// - Returns NULL on error; call `workout_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn workout_read_package(
    workout_type: *const c_char,
    params_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    match workout_from_args(workout_type, params_json) {
        Some(workout) => string_to_cstr(&workout.show_training_info().get_message()),
        None => ptr::null_mut(),
    }
}

/// Build a workout and return its JSON summary payload.
///
/// # Safety
/// - `workout_type` and `params_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `workout_free_string`.
/// - Returns NULL on error; call `workout_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn workout_summary_json(
    workout_type: *const c_char,
    params_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let Some(workout) = workout_from_args(workout_type, params_json) else {
        return ptr::null_mut();
    };

    match SummaryEncoder::new().encode_to_json(&workout) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a string returned by workout functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a workout function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn workout_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next workout function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn workout_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn workout_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
