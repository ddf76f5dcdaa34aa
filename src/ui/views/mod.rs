use crate::ui::{RenderContext, ViewResult};

pub mod build;
pub mod catalog;

pub use build::*;
pub use catalog::*;

/// Trait for rendering views in the TUI
pub trait RenderableView {
    /// Render the view into a ratatui Frame with scroll support
    fn render(&self, rc: RenderContext) -> ViewResult;

    fn title(&self) -> &str;
}

#[macro_export]
macro_rules! styled_span {
    ($text:literal $(, $arg:expr)*; $color:ident Bold) => {
        ratatui::text::Span::styled(
            format!($text $(, $arg)*),
            ratatui::style::Style::default()
                .fg(ratatui::style::Color::$color)
                .add_modifier(ratatui::style::Modifier::BOLD),
        )
    };

    ($text:literal $(, $arg:expr)*; $color:ident) => {
        ratatui::text::Span::styled(
            format!($text $(, $arg)*),
            ratatui::style::Style::default().fg(ratatui::style::Color::$color),
        )
    };

    ($text:literal $(, $arg:expr)*) => {
        ratatui::text::Span::raw(format!($text $(, $arg)*))
    };
}

#[macro_export]
macro_rules! styled_line {
    () => {
        ratatui::text::Line::raw("")
    };

    (LIST [$($span:expr),+ $(,)?]) => {
        ratatui::text::Line::from(vec![$($span),+])
    };

    ($($args:tt)+) => {
        ratatui::text::Line::from($crate::styled_span!($($args)+))
    };
}

/// Macro for simple text-based views: the creation function gathers the
/// lines up front, rendering just scrolls through them. Potato mode drops
/// the styling at render time.
#[macro_export]
macro_rules! impl_text_view {
    ($name:ident, $text_render_fn:expr, $title:expr) => {
        pub struct $name {
            lines: Vec<ratatui::text::Line<'static>>,
            error: Option<String>,
        }

        impl $name {
            pub fn new(controller: &$crate::ui::Controller) -> Self {
                match $text_render_fn(controller) {
                    Ok(lines) => Self { lines, error: None },
                    Err(e) => Self {
                        lines: Vec::new(),
                        error: Some(format!("{}", e)),
                    },
                }
            }
        }

        impl $crate::ui::views::RenderableView for $name {
            fn title(&self) -> &str {
                $title
            }

            fn render(&self, rc: $crate::ui::RenderContext) -> $crate::ui::ViewResult {
                use ratatui::style::{Color, Style};
                use ratatui::text::{Line, Span};

                let text = if let Some(error) = &self.error {
                    vec![Line::from(vec![
                        Span::raw("\n  [!] Error: "),
                        Span::styled(error.clone(), Style::default().fg(Color::Red)),
                    ])]
                } else if rc.plain {
                    $crate::ui::views::strip_styling(&self.lines)
                } else {
                    self.lines.clone()
                };

                let paragraph = ratatui::widgets::Paragraph::new(text)
                    .block(rc.block)
                    .wrap(ratatui::widgets::Wrap { trim: false })
                    .scroll((rc.scroll_offset, 0));

                rc.frame.render_widget(paragraph, rc.area);
                Ok(())
            }
        }
    };
}

/// Rebuilds lines with all color/modifier styling removed.
pub fn strip_styling(lines: &[ratatui::text::Line<'static>]) -> Vec<ratatui::text::Line<'static>> {
    lines
        .iter()
        .map(|line| {
            let content = line
                .spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>();
            ratatui::text::Line::raw(content)
        })
        .collect()
}
