//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for styled output with a plain-text fallback for
//! `--no-color` and for scripts.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Headers keep their hash marks; tables need the whole block so that
        // termimad can align the columns.
        let mut table = Vec::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push(line);
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
        Ok(())
    }

    fn flush_table(&self, table: &mut Vec<&str>) {
        if table.is_empty() {
            return;
        }
        self.skin.print_text(&table.join("\n"));
        table.clear();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Schedule\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
