// Scripts a few resize gestures against the headless toolkit model.
use minmax_window::{
    dpi::LogicalSize,
    event::ReportingListener,
    headless::Host,
    session::WindowSession,
    window::WindowBuilder,
};

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();

    let attributes = WindowBuilder::new().build().unwrap();
    let session = WindowSession::new(attributes, ReportingListener::stdout()).unwrap();
    let mut window = session.launch_headless(Host::default()).unwrap();

    println!(
        "Opened at {} with content {}",
        window.position(),
        window.content_size(),
    );

    // Shrink past the minimum, grow past the maximum, then settle in between.
    window.live_resize(vec![LogicalSize::new(500.0, 300.0), LogicalSize::new(120.0, 90.0)]);
    window.live_resize(vec![LogicalSize::new(900.0, 700.0)]);
    window.live_resize(vec![LogicalSize::new(512.0, 328.0)]);

    window.close();
    window.live_resize(vec![LogicalSize::new(450.0, 250.0)]);
}
