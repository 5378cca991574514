use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that failed and the inputs it received.
    pub error_report_data: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, error_report_data: CString) -> Self {
        LastErrorData {
            error_msg,
            error_report_data,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Strip interior nulls so the text always converts to a [CString].
fn to_c_string(text: String) -> CString {
    let bytes: Vec<u8> = text.into_bytes().into_iter().filter(|&b| b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}

/// Set last error information and log it.
pub fn set_last_error(error_msg: impl Into<String>, error_report: impl Into<String>) {
    let error_msg = error_msg.into();
    let error_report = error_report.into();
    log::warn!("{error_msg} ({error_report})");

    let data = LastErrorData::new(to_c_string(error_msg), to_c_string(error_report));
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(data);
    });
}

/// Clear the last error, done at the start of every fallible FFI call.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}
