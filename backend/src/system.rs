use std::time::Duration;

use sdl2::render::WindowCanvas;
use sdl2::video::{GLContext, GLProfile, SwapInterval, Window};

use crate::color::Rgba;
use crate::config::{RenderBackend, WindowConfig, WindowPosition};
use crate::error::{Result, SystemError};
use crate::glutils;

enum Surface {
    Canvas(WindowCanvas),
    // context is declared first so it is deleted before its window
    OpenGl { _gl_ctx: GLContext, window: Window },
}

/// SDL context plus one window and the renderer bound to it.
///
/// Field order is drop order: the surface goes before the subsystems it was
/// created from.
pub struct System {
    w: u32,
    h: u32,
    surface: Surface,
    timer: sdl2::TimerSubsystem,
    _event_subsystem: sdl2::EventSubsystem,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl_context: sdl2::Sdl,
}

impl System {
    /// Only the video, timer and event subsystems are started. Audio and
    /// game controllers are skipped since nothing here uses them.
    pub fn new(cfg: &WindowConfig) -> Result<System> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer = sdl_context.timer()?;
        let event_subsystem = sdl_context.event()?;
        log::debug!("SDL {} initialized", sdl2::version::version());

        let window = build_window(&video_subsystem, cfg)?;
        let surface = match cfg.backend {
            RenderBackend::Canvas => create_canvas(window, cfg.vsync)?,
            RenderBackend::OpenGl => create_gl(&video_subsystem, window, cfg.vsync)?,
        };

        let system = System {
            w: cfg.width,
            h: cfg.height,
            surface,
            timer,
            _event_subsystem: event_subsystem,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        };
        log::info!(
            "Opened {:?} window {}x{} on {} renderer",
            cfg.title,
            system.w,
            system.h,
            system.renderer_name()
        );
        Ok(system)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    pub fn renderer_name(&self) -> &'static str {
        match &self.surface {
            Surface::Canvas(canvas) => canvas.info().name,
            Surface::OpenGl { .. } => "opengl",
        }
    }

    pub fn clear_screen(&mut self, color: Rgba) -> Result<()> {
        match &mut self.surface {
            Surface::Canvas(canvas) => {
                canvas.set_draw_color(color);
                canvas.clear();
                Ok(())
            }
            Surface::OpenGl { .. } => {
                let [r, g, b, a] = color.to_gl();
                unsafe {
                    gl::ClearColor(r, g, b, a);
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }
                glutils::gl_error()
            }
        }
    }

    pub fn draw_to_screen(&mut self) {
        match &mut self.surface {
            Surface::Canvas(canvas) => canvas.present(),
            Surface::OpenGl { window, .. } => window.gl_swap_window(),
        }
    }

    /// Blocks the calling thread. Durations past `u32::MAX` ms are clamped.
    pub fn hold(&self, duration: Duration) {
        let ms = delay_ms(duration);
        log::debug!("Holding frame for {ms} ms");
        self.timer.delay(ms);
    }
}

fn delay_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn build_window(video: &sdl2::VideoSubsystem, cfg: &WindowConfig) -> Result<Window> {
    let mut builder = video.window(&cfg.title, cfg.width, cfg.height);
    match cfg.position {
        WindowPosition::Centered => {
            builder.position_centered();
        }
        WindowPosition::At { x, y } => {
            builder.position(x, y);
        }
        WindowPosition::Undefined => {}
    }
    if cfg.backend == RenderBackend::OpenGl {
        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        builder.opengl();
    }
    let window = builder.build()?;
    log::debug!("Window created at {:?}", window.position());
    Ok(window)
}

fn create_canvas(window: Window, vsync: bool) -> Result<Surface> {
    let mut builder = window.into_canvas();
    if vsync {
        builder = builder.present_vsync();
    }
    let canvas = builder
        .build()
        .map_err(|e| SystemError::Renderer(format!("Error while creating renderer: {e}")))?;
    log::debug!("Renderer created: {}", canvas.info().name);
    Ok(Surface::Canvas(canvas))
}

fn create_gl(video: &sdl2::VideoSubsystem, window: Window, vsync: bool) -> Result<Surface> {
    let gl_ctx = window.gl_create_context()?;
    gl::load_with(|name| video.gl_get_proc_address(name) as *const _);

    let interval = if vsync {
        SwapInterval::VSync
    } else {
        SwapInterval::Immediate
    };
    if let Err(e) = video.gl_set_swap_interval(interval) {
        // not every driver lets us pick; keep going with its default
        log::warn!("Could not set swap interval (vsync={vsync}): {e}");
    }

    let gl_attr = video.gl_attr();
    debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
    debug_assert_eq!(gl_attr.context_version(), (3, 3));
    glutils::log_gl_info();

    Ok(Surface::OpenGl {
        _gl_ctx: gl_ctx,
        window,
    })
}
