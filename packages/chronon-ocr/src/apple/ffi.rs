use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::engine::{OcrError, RecognitionLevel, RecognitionRequest};
use crate::region::TextObservation;

use super::frame::deserialize_observations;

extern "C" {
    fn vision_ocr_recognize_bytes(
        data: *const u8,
        len: u64,
        languages: *const c_char,
        level: i32,
        language_correction: i32,
        out_data: *mut *mut u8,
        out_len: *mut u64,
        out_error: *mut *mut c_char,
    ) -> i32;

    fn vision_ocr_free_data(ptr: *mut u8, len: u64);
    fn vision_ocr_free_error(ptr: *mut c_char);
}

unsafe fn parse_output(
    data: *mut u8,
    len: u64,
    error: *mut c_char,
    status: i32,
) -> Result<Vec<Option<TextObservation>>, OcrError> {
    if status != 0 || !error.is_null() {
        let msg = if !error.is_null() {
            let s = CStr::from_ptr(error).to_string_lossy().into_owned();
            vision_ocr_free_error(error);
            s
        } else {
            "unknown error".into()
        };
        if !data.is_null() {
            vision_ocr_free_data(data, len);
        }
        return Err(OcrError::EngineError(format!(
            "Error performing Vision request: {msg}"
        )));
    }

    if data.is_null() || len == 0 {
        return Ok(Vec::new());
    }

    let slice = std::slice::from_raw_parts(data, len as usize);
    let observations = deserialize_observations(slice);
    vision_ocr_free_data(data, len);
    observations
}

/// Runs a blocking `VNRecognizeTextRequest` over the encoded image.
pub fn recognize(request: &RecognitionRequest) -> Result<Vec<Option<TextObservation>>, OcrError> {
    if request.image.is_empty() {
        return Err(OcrError::InvalidInput("empty image".into()));
    }
    let languages = CString::new(request.languages.join(","))
        .map_err(|_| OcrError::InvalidInput("null byte in language list".into()))?;
    let level = match request.level {
        RecognitionLevel::Fast => 1,
        RecognitionLevel::Accurate => 0,
    };

    let mut data: *mut u8 = std::ptr::null_mut();
    let mut len: u64 = 0;
    let mut error: *mut c_char = std::ptr::null_mut();

    unsafe {
        let status = vision_ocr_recognize_bytes(
            request.image.as_ptr(),
            request.image.len() as u64,
            languages.as_ptr(),
            level,
            i32::from(request.uses_language_correction),
            &mut data,
            &mut len,
            &mut error,
        );
        parse_output(data, len, error, status)
    }
}
