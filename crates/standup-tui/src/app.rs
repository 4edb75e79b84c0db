use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use standup_core::entry::is_blank;
use standup_core::{FormError, FormState, ListField, ProjectCatalog, ProjectEntry};
use standup_message::MessageTemplate;
use standup_service::BlockingWebhookService;
use tracing::{debug, error, info};

use crate::components::form_view::FormView;
use crate::cursor::{Cursor, Field};

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Moving between fields
    Normal,
    /// Choosing the project for an entry
    ProjectPick {
        project: usize,
        list_state: ListState,
    },
    /// Typing into a list row
    EditItem {
        project: usize,
        list: ListField,
        item: usize,
        input: String,
    },
    /// Editing an entry's notes
    EditNotes { project: usize, input: String },
    /// Confirm removing a project entry
    ConfirmRemoveProject { project: usize },
    /// Viewing the last submission
    Submitted {
        submission: Submission,
        scroll: u16,
        show_payload: bool,
    },
}

/// What was rendered (and possibly sent) on submit.
#[derive(Debug, Clone)]
pub struct Submission {
    pub message: String,
    /// The cleaned entries the message was rendered from.
    pub payload: Vec<ProjectEntry>,
    /// Parsed webhook reply; `None` for a dry run.
    pub response: Option<serde_json::Value>,
}

impl Submission {
    pub fn is_dry_run(&self) -> bool {
        self.response.is_none()
    }

    pub fn payload_json(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub catalog: ProjectCatalog,
    pub template: MessageTemplate,
    /// Render and show the message but never send it.
    pub dry_run: bool,
    /// Fixed report date; today's date when unset.
    pub date: Option<String>,
}

pub struct App {
    service: BlockingWebhookService,
    settings: AppSettings,
    form: FormState,
    cursor: Cursor,
    mode: Mode,
    notice: Option<Notice>,
    /// Project whose selection failed the last submit.
    missing_project: Option<usize>,
}

impl App {
    pub fn new(service: BlockingWebhookService, settings: AppSettings) -> Self {
        Self {
            service,
            settings,
            form: FormState::new(),
            cursor: Cursor::default(),
            mode: Mode::Normal,
            notice: None,
            missing_project: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::EditItem { .. } | Mode::EditNotes { .. })
    }

    fn info(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Info(msg.into()));
    }

    fn fail(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Error(msg.into()));
    }

    fn form_error(&mut self, e: FormError) {
        error!(error = %e, "form update rejected");
        self.fail(format!("Error: {e}"));
        self.cursor = self.cursor.clamped(&self.form);
        self.mode = Mode::Normal;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        match self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::ProjectPick {
                project,
                list_state,
            } => self.handle_project_pick(key, project, list_state),
            Mode::EditItem {
                project,
                list,
                item,
                input,
            } => self.handle_edit_item(key, project, list, item, input),
            Mode::EditNotes { project, input } => self.handle_edit_notes(key, project, input),
            Mode::ConfirmRemoveProject { project } => {
                self.handle_confirm_remove_project(key, project)
            }
            Mode::Submitted {
                submission,
                scroll,
                show_payload,
            } => self.handle_submitted(key, submission, scroll, show_payload),
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor = self.cursor.step(&self.form, 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.step(&self.form, -1);
            }
            KeyCode::Tab => {
                let next = (self.cursor.project + 1).min(self.form.len().saturating_sub(1));
                self.cursor = Cursor::project_field(next);
            }
            KeyCode::BackTab => {
                self.cursor = Cursor::project_field(self.cursor.project.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('+') | KeyCode::Char('a') => self.add_item(),
            KeyCode::Char('-') | KeyCode::Char('x') => self.remove_item(),
            KeyCode::Char('N') => {
                let idx = self.form.add_project();
                self.cursor = Cursor::project_field(idx);
                self.info(format!("Added Project {}", idx + 1));
            }
            KeyCode::Char('D') => {
                if self.form.can_remove_project() {
                    self.mode = Mode::ConfirmRemoveProject {
                        project: self.cursor.project,
                    };
                } else {
                    self.fail("At least one project is required");
                }
            }
            KeyCode::Char('s') => self.submit(),
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        let project = self.cursor.project;
        let entry = match self.form.project(project) {
            Ok(entry) => entry.clone(),
            Err(e) => return self.form_error(e),
        };

        self.mode = match self.cursor.field {
            Field::Project => {
                let mut list_state = ListState::default();
                list_state.select(Some(
                    self.settings.catalog.position(&entry.project).unwrap_or(0),
                ));
                Mode::ProjectPick {
                    project,
                    list_state,
                }
            }
            Field::Item { list, item } => Mode::EditItem {
                project,
                list,
                item,
                input: entry.list(list).get(item).cloned().unwrap_or_default(),
            },
            Field::Notes => Mode::EditNotes {
                project,
                input: entry.notes,
            },
        };
    }

    fn add_item(&mut self) {
        let Some(list) = self.cursor.list() else {
            return;
        };
        match self.form.add_item(self.cursor.project, list) {
            Ok(item) => self.cursor = Cursor::item(self.cursor.project, list, item),
            Err(e) => self.form_error(e),
        }
    }

    fn remove_item(&mut self) {
        let Field::Item { list, item } = self.cursor.field else {
            return;
        };
        match self.form.remove_item(self.cursor.project, list, item) {
            Ok(true) => self.cursor = self.cursor.clamped(&self.form),
            Ok(false) => self.fail(format!("{list} needs at least one row")),
            Err(e) => self.form_error(e),
        }
    }

    fn handle_project_pick(&mut self, key: KeyEvent, project: usize, mut list_state: ListState) {
        let options = self.settings.catalog.projects().to_vec();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Char('j') | KeyCode::Down => {
                let i = list_state.selected().unwrap_or(0);
                if i + 1 < options.len() {
                    list_state.select(Some(i + 1));
                }
                self.mode = Mode::ProjectPick {
                    project,
                    list_state,
                };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let i = list_state.selected().unwrap_or(0);
                if i > 0 {
                    list_state.select(Some(i - 1));
                }
                self.mode = Mode::ProjectPick {
                    project,
                    list_state,
                };
            }
            KeyCode::Enter => {
                let Some(choice) = list_state.selected().and_then(|i| options.get(i)) else {
                    self.mode = Mode::Normal;
                    return;
                };
                match self
                    .form
                    .select_project(project, choice, &self.settings.catalog)
                {
                    Ok(()) => {
                        if self.missing_project == Some(project) {
                            self.missing_project = None;
                        }
                        self.info(format!("Project {}: {choice}", project + 1));
                        self.mode = Mode::Normal;
                    }
                    Err(e) => self.form_error(e),
                }
            }
            _ => {}
        }
    }

    fn handle_edit_item(
        &mut self,
        key: KeyEvent,
        project: usize,
        list: ListField,
        item: usize,
        mut input: String,
    ) {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = self.form.set_item(project, list, item, input.clone()) {
                    return self.form_error(e);
                }
                let is_last = self
                    .form
                    .project(project)
                    .is_ok_and(|entry| item + 1 == entry.list(list).len());

                // Enter on a filled-in last row opens the next one.
                if is_last && !is_blank(&input) {
                    match self.form.add_item(project, list) {
                        Ok(next) => {
                            self.cursor = Cursor::item(project, list, next);
                            self.mode = Mode::EditItem {
                                project,
                                list,
                                item: next,
                                input: String::new(),
                            };
                        }
                        Err(e) => self.form_error(e),
                    }
                } else {
                    self.mode = Mode::Normal;
                }
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::EditItem {
                    project,
                    list,
                    item,
                    input,
                };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.push(c);
                self.mode = Mode::EditItem {
                    project,
                    list,
                    item,
                    input,
                };
            }
            _ => {}
        }
    }

    fn handle_edit_notes(&mut self, key: KeyEvent, project: usize, mut input: String) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.form.set_notes(project, input) {
                    Ok(()) => {
                        self.info("Notes updated");
                        self.mode = Mode::Normal;
                    }
                    Err(e) => self.form_error(e),
                }
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                input.push('\n');
                self.mode = Mode::EditNotes { project, input };
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::EditNotes { project, input };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.push(c);
                self.mode = Mode::EditNotes { project, input };
            }
            _ => {}
        }
    }

    fn handle_confirm_remove_project(&mut self, key: KeyEvent, project: usize) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.form.remove_project(project) {
                    Ok(true) => {
                        self.missing_project = None;
                        self.cursor = self.cursor.clamped(&self.form);
                        self.info(format!("Removed Project {}", project + 1));
                    }
                    Ok(false) => self.fail("At least one project is required"),
                    Err(e) => self.form_error(e),
                }
                self.mode = Mode::Normal;
            }
            _ => self.mode = Mode::Normal,
        }
    }

    fn handle_submitted(
        &mut self,
        key: KeyEvent,
        submission: Submission,
        mut scroll: u16,
        mut show_payload: bool,
    ) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Char('j') | KeyCode::Down => scroll = scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => scroll = scroll.saturating_sub(1),
            KeyCode::Tab | KeyCode::Char('p') => {
                show_payload = !show_payload;
                scroll = 0;
            }
            _ => {}
        }
        self.mode = Mode::Submitted {
            submission,
            scroll,
            show_payload,
        };
    }

    /// Validate, render and deliver the form.
    ///
    /// A delivered form is reset to a fresh one. On failure the form is kept
    /// so it can be fixed or resent.
    fn submit(&mut self) {
        let payload = match self.form.submission() {
            Ok(payload) => payload,
            Err(e) => {
                if let FormError::ProjectRequired { index } = e {
                    self.missing_project = Some(index);
                    self.cursor = Cursor::project_field(index);
                }
                self.fail(e.to_string());
                return;
            }
        };
        self.missing_project = None;

        let date = self
            .settings
            .date
            .clone()
            .unwrap_or_else(standup_message::today);
        let message = self.settings.template.render(&date, &payload);
        debug!(%message, "rendered status message");

        if self.settings.dry_run {
            self.info("Dry run: message not sent");
            self.mode = Mode::Submitted {
                submission: Submission {
                    message,
                    payload,
                    response: None,
                },
                scroll: 0,
                show_payload: false,
            };
            return;
        }

        match self.service.dispatch(&message) {
            Ok(response) => {
                info!(projects = payload.len(), "status message delivered");
                self.form = FormState::new();
                self.cursor = Cursor::default();
                self.info("Message sent");
                self.mode = Mode::Submitted {
                    submission: Submission {
                        message,
                        payload,
                        response: Some(response),
                    },
                    scroll: 0,
                    show_payload: false,
                };
            }
            Err(e) => {
                error!(error = %e, url = self.service.url(), "status message delivery failed");
                self.fail(format!("Delivery failed: {e}"));
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let editing = match &self.mode {
            Mode::EditItem { input, .. } | Mode::EditNotes { input, .. } => Some(input.as_str()),
            _ => None,
        };

        self.render_title_bar(frame, layout[0]);
        FormView::new(&self.form, self.cursor)
            .editing(editing)
            .missing_project(self.missing_project)
            .render(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays
        match &self.mode {
            Mode::Normal | Mode::EditItem { .. } | Mode::EditNotes { .. } => {}
            Mode::ProjectPick { list_state, .. } => {
                self.render_project_pick(frame, list_state, area)
            }
            Mode::ConfirmRemoveProject { project } => {
                self.render_confirm_remove_project(frame, *project, area)
            }
            Mode::Submitted {
                submission,
                scroll,
                show_payload,
            } => self.render_submitted(frame, submission, *scroll, *show_payload, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let count = self.form.len();
        let mut spans = vec![
            Span::styled(" standup ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(
                format!("{count} project{}", if count == 1 { "" } else { "s" }),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!(" → {}", self.service.url()),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if self.settings.dry_run {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("DRY RUN", Style::default().fg(Color::Magenta)));
        }
        frame.render_widget(Line::from(spans), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref notice) = self.notice {
            let color = if notice.is_error() {
                Color::Red
            } else {
                Color::Green
            };
            let line = Line::from(Span::styled(
                format!(" {}", notice.text()),
                Style::default().fg(color),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Normal => {
                let mut hints = vec![("q", "quit"), ("j/k", "fields"), ("Tab", "project")];
                hints.push(("Enter", "edit"));
                if let Some(list) = self.cursor.list() {
                    hints.push(("+", "add row"));
                    if self.form.can_remove_item(self.cursor.project, list) {
                        hints.push(("-", "remove row"));
                    }
                }
                hints.push(("N", "add project"));
                if self.form.can_remove_project() {
                    hints.push(("D", "remove project"));
                }
                hints.push(("s", "submit"));
                hints
            }
            Mode::ProjectPick { .. } => {
                vec![("j/k", "nav"), ("Enter", "select"), ("Esc", "cancel")]
            }
            Mode::EditItem { .. } => vec![("Enter", "save"), ("Esc", "cancel")],
            Mode::EditNotes { .. } => vec![("Ctrl+S", "save"), ("Esc", "cancel")],
            Mode::ConfirmRemoveProject { .. } => vec![("y", "confirm"), ("any", "cancel")],
            Mode::Submitted { .. } => {
                vec![("j/k", "scroll"), ("Tab", "message/data"), ("Esc", "back")]
            }
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_project_pick(&self, frame: &mut Frame, list_state: &ListState, area: Rect) {
        let popup = centered_rect(50, 40, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Select a project ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let items: Vec<ListItem> = self
            .settings
            .catalog
            .projects()
            .iter()
            .map(|p| ListItem::new(Line::from(Span::styled(p.as_str(), Style::default().bold()))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Magenta).bold())
            .highlight_symbol("> ");

        let mut state = list_state.clone();
        frame.render_stateful_widget(list, popup, &mut state);
    }

    fn render_confirm_remove_project(&self, frame: &mut Frame, project: usize, area: Rect) {
        let popup = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Remove Project ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let name = self
            .form
            .project(project)
            .ok()
            .filter(|p| p.has_project())
            .map(|p| format!(" ({})", p.project))
            .unwrap_or_default();
        let text = format!(
            "Remove Project {}{name}?\n\n(y)es / (any key) cancel",
            project + 1
        );
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup);
    }

    fn render_submitted(
        &self,
        frame: &mut Frame,
        submission: &Submission,
        scroll: u16,
        show_payload: bool,
        area: Rect,
    ) {
        let popup = centered_rect(80, 80, area);
        frame.render_widget(Clear, popup);

        let (title, content) = match (show_payload, submission.is_dry_run()) {
            (true, _) => (" Submitted Data ", submission.payload_json()),
            (false, true) => (" Message (dry run, not sent) ", submission.message.clone()),
            (false, false) => (" Message sent ", submission.message.clone()),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, popup);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
