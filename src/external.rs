//! A C API returning conversions as JSON strings.
//!
//! Every non-null string returned must be released with
//! `namecast_free_string`. Null is returned when the input is not valid
//! UTF-8, when conversion fails, or when an argument is unrecognized.

use super::{detect_script, process, Script, Target};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! string_to_char_star {
    ($string:expr) => {
        match CString::new($string) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    };
}

unsafe fn optional_str<'a>(input: *const c_char) -> Result<Option<&'a str>, ()> {
    if input.is_null() {
        Ok(None)
    } else {
        CStr::from_ptr(input).to_str().map(Some).map_err(|_| ())
    }
}

/// Convert a name. `source` and `locale` may be null; `target` is `latin`
/// or `ascii`, defaulting to `ascii` when null.
#[no_mangle]
pub unsafe extern "C" fn namecast_convert(
    input: *const c_char,
    source: *const c_char,
    target: *const c_char,
    locale: *const c_char,
) -> *mut c_char {
    let (input, source, target, locale) = match (
        optional_str(input),
        optional_str(source),
        optional_str(target),
        optional_str(locale),
    ) {
        (Ok(Some(input)), Ok(source), Ok(target), Ok(locale)) => (input, source, target, locale),
        _ => return ptr::null_mut(),
    };

    let source = match source.map(str::parse::<Script>).transpose() {
        Ok(source) => source,
        Err(_) => return ptr::null_mut(),
    };
    let target = match target.map(str::parse::<Target>).transpose() {
        Ok(target) => target.unwrap_or(Target::Ascii),
        Err(_) => return ptr::null_mut(),
    };

    match process(input, source, target, locale).map(|c| c.to_json()) {
        Ok(Ok(json)) => string_to_char_star!(json),
        Ok(Err(e)) => {
            log::warn!("Could not serialize conversion: {}", e);
            ptr::null_mut()
        }
        Err(e) => {
            log::debug!("Conversion failed: {}", e);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn namecast_detect_script(input: *const c_char) -> *mut c_char {
    let input = match optional_str(input) {
        Ok(Some(input)) => input,
        _ => return ptr::null_mut(),
    };
    match detect_script(input).to_json() {
        Ok(json) => string_to_char_star!(json),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn namecast_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(ptr: *mut c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        namecast_free_string(ptr);
        Some(s)
    }

    #[test]
    fn convert() {
        let input = CString::new("Привет").unwrap();
        let target = CString::new("latin").unwrap();
        let json = unsafe {
            take(namecast_convert(
                input.as_ptr(),
                ptr::null(),
                target.as_ptr(),
                ptr::null(),
            ))
        }
        .unwrap();
        assert!(json.contains(r#""output":"Privet""#));
    }

    #[test]
    fn convert_failures() {
        let empty = CString::new(" ").unwrap();
        let bogus = CString::new("klingon").unwrap();
        let name = CString::new("Jane Doe").unwrap();
        unsafe {
            assert_eq!(
                None,
                take(namecast_convert(empty.as_ptr(), ptr::null(), ptr::null(), ptr::null()))
            );
            assert_eq!(
                None,
                take(namecast_convert(name.as_ptr(), bogus.as_ptr(), ptr::null(), ptr::null()))
            );
            assert_eq!(
                None,
                take(namecast_convert(ptr::null(), ptr::null(), ptr::null(), ptr::null()))
            );
        }
    }

    #[test]
    fn detect() {
        let input = CString::new("김민준").unwrap();
        let json = unsafe { take(namecast_detect_script(input.as_ptr())) }.unwrap();
        assert!(json.contains(r#""script":"korean""#));
    }
}
