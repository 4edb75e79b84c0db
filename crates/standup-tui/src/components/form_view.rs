use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use standup_core::{FormState, ListField, ProjectEntry};

use crate::cursor::Cursor;

const NOTES_PLACEHOLDER: &str = "Enter project notes...";
const PROJECT_PLACEHOLDER: &str = "Select a project";
const EDIT_CARET: &str = "█";

/// Scrolling view of every project card in the form.
pub struct FormView<'a> {
    form: &'a FormState,
    cursor: Cursor,
    /// Text being typed into the focused field, shown in place of its value.
    editing: Option<&'a str>,
    missing_project: Option<usize>,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState, cursor: Cursor) -> Self {
        Self {
            form,
            cursor,
            editing: None,
            missing_project: None,
        }
    }

    pub fn editing(mut self, input: Option<&'a str>) -> Self {
        self.editing = input;
        self
    }

    /// Mark a project whose selection failed validation.
    pub fn missing_project(mut self, index: Option<usize>) -> Self {
        self.missing_project = index;
        self
    }

    /// Build the form lines, returning them with the index of the focused line.
    pub fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut focus_line = 0;
        let removable = self.form.can_remove_project();

        for (idx, entry) in self.form.projects().iter().enumerate() {
            let mut title = vec![Span::styled(
                format!("Project {}", idx + 1),
                Style::default().bold().fg(Color::Cyan),
            )];
            if removable {
                title.push(Span::styled(
                    "  [D] remove project",
                    Style::default().fg(Color::Red),
                ));
            }
            lines.push(Line::from(title));

            let here = Cursor::project_field(idx);
            if here == self.cursor {
                focus_line = lines.len();
            }
            lines.push(self.project_line(entry, here));
            if self.missing_project == Some(idx) {
                lines.push(Line::from(Span::styled(
                    "    Project selection is required",
                    Style::default().fg(Color::Red),
                )));
            }

            for &list in ListField::ALL {
                let items = entry.list(list);
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", list.label()), Style::default().bold()),
                    Span::styled("  [+]", Style::default().fg(Color::Green)),
                ]));
                for (item, value) in items.iter().enumerate() {
                    let here = Cursor::item(idx, list, item);
                    if here == self.cursor {
                        focus_line = lines.len();
                    }
                    lines.push(self.item_line(list, value, items.len() > 1, here));
                }
            }

            lines.push(Line::from(Span::styled("  Notes", Style::default().bold())));
            let here = Cursor::notes(idx);
            if here == self.cursor {
                focus_line = lines.len();
            }
            lines.extend(self.notes_lines(&entry.notes, here));
            lines.push(Line::default());
        }

        (lines, focus_line)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Project Status Form ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let (lines, focus_line) = self.lines();
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = (focus_line + 2).saturating_sub(visible);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((scroll.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn marker(&self, here: Cursor) -> Span<'static> {
        if here == self.cursor {
            Span::styled("> ", Style::default().fg(Color::Yellow).bold())
        } else {
            Span::raw("  ")
        }
    }

    fn value_spans(&self, here: Cursor, value: &str, placeholder: &str) -> Vec<Span<'static>> {
        if here == self.cursor {
            if let Some(input) = self.editing {
                return vec![
                    Span::styled(input.to_string(), Style::default().fg(Color::Cyan)),
                    Span::styled(EDIT_CARET, Style::default().fg(Color::Cyan)),
                ];
            }
        }
        if value.is_empty() {
            return vec![Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )];
        }
        let style = if here == self.cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        vec![Span::styled(value.to_string(), style)]
    }

    fn project_line(&self, entry: &ProjectEntry, here: Cursor) -> Line<'static> {
        let mut spans = vec![
            Span::raw("  "),
            self.marker(here),
            Span::styled("Project: ", Style::default().bold()),
        ];
        spans.extend(self.value_spans(here, &entry.project, PROJECT_PLACEHOLDER));
        Line::from(spans)
    }

    fn item_line(&self, list: ListField, value: &str, removable: bool, here: Cursor) -> Line<'static> {
        let mut spans = vec![Span::raw("  "), self.marker(here), Span::raw("• ")];
        spans.extend(self.value_spans(here, value, list.placeholder()));
        if removable {
            spans.push(Span::styled("  [-]", Style::default().fg(Color::Red)));
        }
        Line::from(spans)
    }

    fn notes_lines(&self, notes: &str, here: Cursor) -> Vec<Line<'static>> {
        let focused = here == self.cursor;
        let text = match (focused, self.editing) {
            (true, Some(input)) => input,
            _ => notes,
        };

        if text.is_empty() && !(focused && self.editing.is_some()) {
            return vec![Line::from(vec![
                Span::raw("  "),
                self.marker(here),
                Span::styled(NOTES_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])];
        }

        let style = match (focused, self.editing.is_some()) {
            (true, true) => Style::default().fg(Color::Cyan),
            (true, false) => Style::default().fg(Color::Yellow),
            _ => Style::default(),
        };
        let raw: Vec<&str> = text.split('\n').collect();
        let last = raw.len() - 1;
        raw.into_iter()
            .enumerate()
            .map(|(i, line)| {
                let lead = if i == 0 { self.marker(here) } else { Span::raw("  ") };
                let mut spans = vec![Span::raw("  "), lead, Span::styled(line.to_string(), style)];
                if focused && self.editing.is_some() && i == last {
                    spans.push(Span::styled(EDIT_CARET, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}
