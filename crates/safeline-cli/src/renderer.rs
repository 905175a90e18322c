//! Terminal rendering for markdown output
//!
//! Uses termimad when colors are enabled and prints the raw markdown
//! otherwise.

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

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Tables need the block renderer to line up their columns; other text
    /// is printed line by line so headers keep their `#` markers.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        if has_table(markdown) {
            self.skin.print_text(markdown);
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

fn has_table(markdown: &str) -> bool {
    markdown.lines().any(|line| line.starts_with("|-") || line.starts_with("|:"))
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
