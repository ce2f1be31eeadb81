#[macro_use]
extern crate log;

use std::{error::Error, process};

use minmax_window::{
    event::ReportingListener,
    session::WindowSession,
    window::WindowBuilder,
};

fn run() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout is reserved for resize reports.
    simple_logger::init_with_level(log::Level::Warn)?;

    let attributes = WindowBuilder::new().build()?;
    let session = WindowSession::new(attributes, ReportingListener::stdout())?;
    session.run()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
