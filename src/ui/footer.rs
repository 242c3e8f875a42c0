use crate::ui::app::KEY_BINDINGS;
use crate::ui::input::QUIT_HINT;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = key_hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// `" keys: label │ ..."`, merging adjacent bindings that share a label.
fn key_hints() -> String {
    let mut groups: Vec<(String, &str)> = Vec::new();
    for binding in KEY_BINDINGS {
        match groups.last_mut() {
            Some((keys, label)) if *label == binding.label => {
                keys.push('/');
                keys.push_str(binding.hint);
            }
            _ => groups.push((binding.hint.to_string(), binding.label)),
        }
    }
    groups.push((QUIT_HINT.0.to_string(), QUIT_HINT.1));

    let parts: Vec<String> = groups
        .iter()
        .map(|(keys, label)| format!("{keys}: {label}"))
        .collect();
    format!(" {}", parts.join(" │ "))
}
