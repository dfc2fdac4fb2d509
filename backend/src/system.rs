use gl;
use sdl2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video::{GLProfile, SwapInterval};

use crate::error::SystemError;

/// Opaque magenta, the fixed per-frame clear color.
pub const CLEAR_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// Context configuration hints, consumed once at window-creation time.
///
/// No validation happens here; an unsatisfiable combination surfaces as
/// `SystemError::WindowCreation` when the driver rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub major: u8,
    pub minor: u8,
    pub core_profile: bool,
    pub forward_compat: bool,
}

impl Default for ContextConfig {
    // OpenGL 4.0 Core, forward-compatible
    fn default() -> ContextConfig {
        ContextConfig {
            major: 4,
            minor: 0,
            core_profile: true,
            forward_compat: true,
        }
    }
}

/// Handle to the initialized windowing subsystem. Every later call needs
/// it, so "used before init" is unrepresentable, and `create_window`
/// consumes it so there is exactly one owner at any time.
pub struct Platform {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
}

impl Platform {
    pub fn initialize() -> Result<Platform, SystemError> {
        let sdl_context = sdl2::init().map_err(SystemError::Init)?;
        let video_subsystem = sdl_context.video().map_err(SystemError::Init)?;
        let event_pump = sdl_context.event_pump().map_err(SystemError::Init)?;

        Ok(Platform {
            sdl_context,
            video_subsystem,
            event_pump,
        })
    }

    /// Sets the GL attribute hints consumed by the next `create_window`.
    pub fn configure_context(&self, config: &ContextConfig) {
        let gl_attr = self.video_subsystem.gl_attr();
        gl_attr.set_context_version(config.major, config.minor);
        if config.core_profile {
            gl_attr.set_context_profile(GLProfile::Core);
        }
        if config.forward_compat {
            gl_attr.set_context_flags().forward_compatible().set();
        }
    }

    /// Requests a window plus GL context matching the configured hints,
    /// makes the context current and resolves the GL entry points.
    ///
    /// On failure the consumed handle is dropped, which tears the
    /// subsystem down before the error reaches the caller.
    pub fn create_window(self, w: u32, h: u32, title: &str) -> Result<System, SystemError> {
        let window = match self.video_subsystem.window(title, w, h).opengl().build() {
            Ok(w) => w,
            Err(e) => return Err(SystemError::WindowCreation(e.to_string())),
        };

        // gl_create_context leaves the new context current.
        let gl_ctx = window
            .gl_create_context()
            .map_err(SystemError::WindowCreation)?;
        gl::load_with(|name| self.video_subsystem.gl_get_proc_address(name) as *const _);

        // Once is enough; the request is idempotent anyway.
        if let Err(msg) = self.video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
            log::warn!("swap interval request not honored: {msg}");
        }

        let gl_attr = self.video_subsystem.gl_attr();
        log::debug!(
            "created {}x{} window, got OpenGL {:?} {:?}",
            w,
            h,
            gl_attr.context_version(),
            gl_attr.context_profile(),
        );

        Ok(System {
            gl_ctx,
            window,
            event_pump: self.event_pump,
            video_subsystem: self.video_subsystem,
            sdl_context: self.sdl_context,
            close_requested: false,
        })
    }
}

/// The window, its GL context and the subsystem they live in. Sole owner
/// of all of them for the program's lifetime; dropping it releases the
/// context, then the window, then the subsystem, exactly once.
pub struct System {
    // field order is drop order: context before window before subsystem
    pub gl_ctx: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    event_pump: sdl2::EventPump,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
    close_requested: bool,
}

impl System {
    pub fn clear_screen(&self, rgba: [f32; 4]) {
        unsafe {
            gl::ClearColor(rgba[0], rgba[1], rgba[2], rgba[3]);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn present(&self) {
        self.window.gl_swap_window();
    }

    /// Polls and dispatches pending OS events. This is the only place the
    /// close flag gets updated: quit, window close and Escape all request it.
    pub fn pump_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.close_requested = true;
                }
                _ => {}
            }
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}
