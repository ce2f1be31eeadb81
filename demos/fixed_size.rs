// Pins the content at 700x420. The resize handle stays, the size doesn't change.
use minmax_window::{
    dpi::LogicalSize,
    event::ReportingListener,
    session::WindowSession,
    window::WindowBuilder,
};

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();

    let attributes = WindowBuilder::new()
        .with_title("Fixed Size Test Window")
        .with_fixed_size(LogicalSize::new(700.0, 420.0))
        .build()
        .unwrap();

    WindowSession::new(attributes, ReportingListener::stdout())
        .unwrap()
        .run()
        .unwrap();
}
