/// Read the full text of an FLTK TextBuffer without leaking the C-allocated copy.
///
/// The editor keeps its text in a gap buffer; callers only ever need the
/// whole document as one string, which is what this returns.
///
/// fltk-rs's `TextBuffer::text()` copies FLTK's `malloc()`'d string into a
/// `String` but never frees the original, leaking the full buffer size on
/// every call. Editor change events read the buffer on every keystroke, so
/// this helper calls the FFI directly and frees the C allocation.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a malloc'd, null-terminated copy (or null),
    // which is read once and released with the matching free().
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
