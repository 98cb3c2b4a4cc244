//! Error rendering using miette
//!
//! Errors carry a diagnostic code and, where there is something the caller
//! can do about them, a help line. These functions render both through
//! miette's graphical report handler.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Render an error with formatting to stderr
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr()).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    writer.write_all(render_error_to_string(error).as_bytes())
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    render(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render(error, GraphicalTheme::unicode_nocolor())
}

fn render(error: &Error, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = GraphicalReportHandler::new_themed(theme).render_report(&mut out, error);
    out
}
