// 16:10 aspect lock on top of the default 400x200 to 600x400 bounds.
use minmax_window::{
    constraints::AspectRatio,
    event::ReportingListener,
    session::WindowSession,
    window::WindowBuilder,
};

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();

    let attributes = WindowBuilder::new()
        .with_title("Aspect Ratio Test Window")
        .with_aspect_ratio(Some(AspectRatio::new(16.0, 10.0)))
        .build()
        .unwrap();

    WindowSession::new(attributes, ReportingListener::stdout())
        .unwrap()
        .run()
        .unwrap();
}
