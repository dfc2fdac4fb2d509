//! Display-dependent checks. All ignored by default; run them on a machine
//! with a usable display via `cargo test -- --ignored --test-threads=1`.

use backend::system::{ContextConfig, Platform, CLEAR_COLOR};

fn open_window(title: &str) -> backend::system::System {
    let platform = Platform::initialize().expect("display required for this test");
    platform.configure_context(&ContextConfig::default());
    platform
        .create_window(640, 480, title)
        .expect("window creation failed")
}

#[test]
#[ignore = "requires a display"]
fn window_matches_requested_size_and_title() {
    let system = open_window("gl-smoke");
    assert_eq!(system.window.title(), "gl-smoke");
    assert_eq!(system.window.size(), (640, 480));
    assert!(!system.close_requested());
}

#[test]
#[ignore = "requires a display"]
fn cleared_framebuffer_reads_back_magenta() {
    let system = open_window("gl-smoke clear test");
    system.clear_screen(CLEAR_COLOR);

    let mut pixel = [0u8; 4];
    unsafe {
        // back buffer still holds the clear, nothing has been presented yet
        gl::ReadBuffer(gl::BACK);
        gl::ReadPixels(
            0,
            0,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixel.as_mut_ptr().cast(),
        );
    }
    assert_eq!(pixel, [255, 0, 255, 255]);
}

#[test]
#[ignore = "requires a display"]
fn quit_event_sets_close_flag() {
    let mut system = open_window("gl-smoke quit test");
    assert!(!system.close_requested());

    let events = system.sdl_context.event().unwrap();
    events
        .push_event(sdl2::event::Event::Quit { timestamp: 0 })
        .unwrap();

    system.pump_events();
    assert!(system.close_requested());
}
