pub mod color;
pub mod config;
pub mod error;
pub mod glutils;
pub mod system;

pub use color::Rgba;
pub use config::{RenderBackend, WindowConfig, WindowPosition};
pub use error::{Result, SystemError};
pub use system::System;
