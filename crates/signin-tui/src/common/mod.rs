//! Shared helpers for TUI rendering.

pub mod text;

pub use text::truncate_with_ellipsis;

/// Flattens a test buffer into newline-separated rows of cell symbols.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
