//! A C API for interacting with `PersonName` values.

extern crate libc;

use self::libc::c_char;
use super::PersonName;
use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Names never contain NUL, so this only fails on a broken invariant
macro_rules! str_to_char_star {
    ($str:expr) => {{
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    }};
}

/// Returns null if the input is not valid UTF-8 or not a valid name.
#[no_mangle]
pub unsafe extern "C" fn person_name_parse(input: *const c_char) -> Option<Box<PersonName>> {
    let s = CStr::from_ptr(input).to_str().ok()?;
    PersonName::parse(s).ok().map(Box::new)
}

/// Zero if the input parses, otherwise the code of its `ParseErrorKind`.
/// Invalid UTF-8 is replaced lossily before parsing.
#[no_mangle]
pub unsafe extern "C" fn person_name_parse_error(input: *const c_char) -> i32 {
    let s = CStr::from_ptr(input).to_string_lossy();
    match PersonName::parse(&s) {
        Ok(_) => 0,
        Err(err) => err.kind().code(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn person_name_free_name(name_ptr: *mut PersonName) {
    mem::drop(Box::from_raw(name_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn person_name_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn person_name_format(name: &PersonName) -> *const c_char {
    str_to_char_star!(name.as_str())
}

#[no_mangle]
pub unsafe extern "C" fn person_name_family(name: &PersonName) -> *const c_char {
    str_to_char_star!(name.family())
}

#[no_mangle]
pub unsafe extern "C" fn person_name_given(name: &PersonName) -> *const c_char {
    str_to_char_star!(name.given())
}

#[no_mangle]
pub unsafe extern "C" fn person_name_display(name: &PersonName) -> *const c_char {
    str_to_char_star!(name.display_name())
}

#[no_mangle]
pub unsafe extern "C" fn person_name_compare(a: &PersonName, b: &PersonName) -> i32 {
    match a.compare(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[no_mangle]
pub unsafe extern "C" fn person_name_eq(a: &PersonName, b: &PersonName) -> bool {
    a == b
}

#[no_mangle]
pub unsafe extern "C" fn person_name_hash(name: &PersonName) -> u32 {
    name.hash32()
}

#[no_mangle]
pub unsafe extern "C" fn person_name_byte_len(name: &PersonName) -> libc::size_t {
    name.byte_len()
}
