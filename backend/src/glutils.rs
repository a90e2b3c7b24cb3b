use std::ffi::CStr;

use gl::types::GLenum;

use crate::error::{Result, SystemError};

pub fn gl_error() -> Result<()> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(SystemError::Renderer(format!("OpenGL error: 0x{err:04x}")))
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

/// Requires a current GL context with loaded function pointers.
pub fn log_gl_info() {
    log::debug!("GL_VENDOR = {}", gl_string(gl::VENDOR));
    log::debug!("GL_RENDERER = {}", gl_string(gl::RENDERER));
    log::debug!("GL_VERSION = {}", gl_string(gl::VERSION));
}
