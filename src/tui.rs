use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use serde::{Deserialize, Serialize};
use std::io::stdout;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::interview::{MockInterview, TRACKED_ASPECTS};
use crate::models::{ApplicationRecord, ApplicationStatus, Domain, NewApplication, RecordId};
use crate::pipeline::Pipeline;
use crate::quiz::{QuizPhase, QuizSession};
use crate::resume::{
    AtsReport, AtsScorer, DocumentExporter, ResumeField, ResumeForm, UnavailableExporter,
    UnavailableScorer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Resume,
    Status,
    Qa,
    Interview,
}

impl Section {
    const ALL: [Section; 4] = [Section::Resume, Section::Status, Section::Qa, Section::Interview];

    fn title(self) -> &'static str {
        match self {
            Section::Resume => "Resume",
            Section::Status => "Status",
            Section::Qa => "Q&A",
            Section::Interview => "Interview",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

const FILTERS: [Option<ApplicationStatus>; 5] = [
    None,
    Some(ApplicationStatus::Applied),
    Some(ApplicationStatus::Interviewing),
    Some(ApplicationStatus::Rejected),
    Some(ApplicationStatus::Offered),
];

fn filter_label(filter: Option<ApplicationStatus>) -> &'static str {
    filter.map_or("All", |s| s.label())
}

const DIALOG_LABELS: [&str; 4] = ["Company Name", "Position", "Location", "Application Date"];
const DIALOG_PLACEHOLDERS: [&str; 4] = [
    "e.g., Google",
    "e.g., Senior Developer",
    "e.g., San Francisco, CA",
    "YYYY-MM-DD",
];

struct AddDialog {
    inputs: [String; 4],
    focus: usize,
    error: Option<String>,
}

impl AddDialog {
    fn new() -> Self {
        Self {
            inputs: [
                String::new(),
                String::new(),
                String::new(),
                Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ],
            focus: 0,
            error: None,
        }
    }

    fn to_application(&self) -> Result<NewApplication, ValidationError> {
        let date_text = self.inputs[3].trim();
        let applied_date = if date_text.is_empty() {
            None
        } else {
            let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(date_text.to_string()))?;
            Some(date)
        };
        Ok(NewApplication {
            company: self.inputs[0].clone(),
            position: self.inputs[1].clone(),
            location: self.inputs[2].clone(),
            applied_date,
        })
    }
}

/// All dashboard state. Each section owns its component; nothing is shared.
pub struct App {
    section: Section,
    pipeline: Pipeline,
    filter: usize,
    selected: usize,
    dialog: Option<AddDialog>,
    quiz: QuizSession,
    interview: MockInterview,
    resume: ResumeForm,
    resume_focus: usize,
    resume_editing: bool,
    ats_report: Option<AtsReport>,
    scorer: Box<dyn AtsScorer>,
    exporter: Box<dyn DocumentExporter>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(pipeline: Pipeline, section: Section) -> Self {
        Self {
            section,
            pipeline,
            filter: 0,
            selected: 0,
            dialog: None,
            quiz: QuizSession::default(),
            interview: MockInterview::default(),
            resume: ResumeForm::default(),
            resume_focus: 0,
            resume_editing: false,
            ats_report: None,
            scorer: Box::new(UnavailableScorer),
            exporter: Box::new(UnavailableExporter),
            notice: None,
            should_quit: false,
        }
    }

    fn visible_records(&self) -> Vec<&ApplicationRecord> {
        self.pipeline.list_by(FILTERS[self.filter])
    }

    fn selected_record_id(&self) -> Option<RecordId> {
        self.visible_records().get(self.selected).map(|r| r.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_records().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn focused_field(&self) -> ResumeField {
        ResumeField::ALL[self.resume_focus]
    }

    fn switch_section(&mut self, section: Section) {
        if section != self.section {
            debug!(from = self.section.title(), to = section.title(), "Switched section");
            self.section = section;
            self.notice = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }
        if self.resume_editing {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_section(self.section.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_section(self.section.prev());
                return;
            }
            _ => {}
        }

        match self.section {
            Section::Resume => self.handle_resume_key(key),
            Section::Status => self.handle_status_key(key),
            Section::Qa => self.handle_quiz_key(key),
            Section::Interview => self.handle_interview_key(key),
        }
    }

    // --- Status ---

    fn handle_status_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible_records().len();
                if len > 0 && self.selected < len - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('f') => {
                self.filter = (self.filter + 1) % FILTERS.len();
                self.selected = 0;
            }
            KeyCode::Left => {
                self.filter = (self.filter + FILTERS.len() - 1) % FILTERS.len();
                self.selected = 0;
            }
            KeyCode::Char('n') => self.dialog = Some(AddDialog::new()),
            KeyCode::Char('a') => self.set_selected_status(ApplicationStatus::Applied),
            KeyCode::Char('i') => self.set_selected_status(ApplicationStatus::Interviewing),
            KeyCode::Char('x') => self.set_selected_status(ApplicationStatus::Rejected),
            KeyCode::Char('o') => self.set_selected_status(ApplicationStatus::Offered),
            _ => {}
        }
    }

    fn set_selected_status(&mut self, status: ApplicationStatus) {
        if let Some(id) = self.selected_record_id() {
            self.pipeline.set_status(id, status);
            // The record may have left the filtered view.
            self.clamp_selection();
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else { return };
        match key.code {
            KeyCode::Esc => self.dialog = None,
            KeyCode::Enter => self.submit_dialog(),
            KeyCode::Tab | KeyCode::Down => dialog.focus = (dialog.focus + 1) % DIALOG_LABELS.len(),
            KeyCode::BackTab | KeyCode::Up => {
                dialog.focus = (dialog.focus + DIALOG_LABELS.len() - 1) % DIALOG_LABELS.len()
            }
            KeyCode::Backspace => {
                let focus = dialog.focus;
                dialog.inputs[focus].pop();
            }
            KeyCode::Char(c) => {
                let focus = dialog.focus;
                dialog.inputs[focus].push(c);
            }
            _ => {}
        }
    }

    fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else { return };
        let result = match dialog.to_application() {
            Ok(input) => self.pipeline.add_record(input),
            Err(e) => Err(e),
        };
        match result {
            Ok(record) => {
                self.dialog = None;
                self.selected = 0;
                self.notice = Some(format!("Added {} at {}", record.position, record.company));
            }
            Err(e) => {
                info!(error = %e, "Application not added");
                dialog.error = Some(e.to_string());
            }
        }
    }

    // --- Q&A ---

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') => self.select_domain(Domain::Frontend),
            KeyCode::Char('b') => self.select_domain(Domain::Backend),
            KeyCode::Char('h') => self.select_domain(Domain::HR),
            KeyCode::Char('p') => self.select_domain(Domain::Product),
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self.quiz.selected().map_or(0, |i| i + 1);
                self.choose_option(next);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let prev = self.quiz.selected().map_or(0, |i| i.saturating_sub(1));
                self.choose_option(prev);
            }
            KeyCode::Char(c @ '1'..='9') => self.choose_option(c as usize - '1' as usize),
            KeyCode::Enter => {
                if self.quiz.phase() == QuizPhase::AnswerSubmitted {
                    self.next_question();
                } else {
                    self.submit_answer();
                }
            }
            KeyCode::Char('n') => self.next_question(),
            _ => {}
        }
    }

    fn select_domain(&mut self, domain: Domain) {
        self.quiz.select_domain(domain);
        self.notice = None;
    }

    fn choose_option(&mut self, index: usize) {
        if let Err(e) = self.quiz.choose(index) {
            debug!(error = %e, index, "Choice ignored");
        }
    }

    fn submit_answer(&mut self) {
        match self.quiz.submit() {
            Ok(outcome) if outcome.correct => self.notice = Some("Correct! Well done!".to_string()),
            Ok(_) => self.notice = Some("Incorrect. Keep learning!".to_string()),
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn next_question(&mut self) {
        if self.quiz.domain().is_none() {
            return;
        }
        self.quiz.next_question();
        self.notice = if self.quiz.questions_in_domain() <= 1 {
            Some("This is a demo - in the full version, you'd get more questions!".to_string())
        } else {
            None
        };
    }

    // --- Interview ---

    fn handle_interview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.interview.start(),
            KeyCode::Char('e') => self.interview.stop(),
            _ => {}
        }
    }

    // --- Resume ---

    fn handle_resume_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.resume_focus = (self.resume_focus + 1).min(ResumeField::ALL.len() - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => self.resume_focus = self.resume_focus.saturating_sub(1),
            KeyCode::Enter => self.resume_editing = true,
            KeyCode::Char('A') => match self.scorer.analyze(&self.resume) {
                Ok(report) => {
                    self.notice = Some(format!("ATS score: {}", report.score));
                    self.ats_report = Some(report);
                }
                Err(e) => self.notice = Some(e.to_string()),
            },
            KeyCode::Char('D') => match self.exporter.export(&self.resume) {
                Ok(bytes) => self.notice = Some(format!("Exported resume ({} bytes)", bytes.len())),
                Err(e) => self.notice = Some(e.to_string()),
            },
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let field = self.focused_field();
        match key.code {
            KeyCode::Esc => self.resume_editing = false,
            KeyCode::Enter if field.multiline() => self.resume.push_char(field, '\n'),
            KeyCode::Enter => self.resume_editing = false,
            KeyCode::Backspace => self.resume.pop_char(field),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.resume.set(field, "")
            }
            KeyCode::Char(c) => self.resume.push_char(field, c),
            _ => {}
        }
    }
}

pub fn run_dashboard(mut app: App) -> Result<()> {
    info!(section = app.section.title(), records = app.pipeline.len(), "Dashboard opened");

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.title())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" YourInterviewr "))
        .select(app.section.index())
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    match app.section {
        Section::Resume => draw_resume(frame, app, chunks[1]),
        Section::Status => draw_status(frame, app, chunks[1]),
        Section::Qa => draw_quiz(frame, app, chunks[1]),
        Section::Interview => draw_interview(frame, app, chunks[1]),
    }

    let footer = match &app.notice {
        Some(msg) => Paragraph::new(format!(" {}", msg)).style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, chunks[2]);

    if let Some(dialog) = &app.dialog {
        draw_dialog(frame, dialog);
    }
}

fn help_text(app: &App) -> &'static str {
    if app.resume_editing {
        return " typing edits the field  Ctrl-U:clear  Esc:done";
    }
    match app.section {
        Section::Resume => " Tab:section  j/k:field  Enter:edit  A:analyze ATS  D:download PDF  q:quit",
        Section::Status => {
            " Tab:section  j/k:move  f/\u{2190}/\u{2192}:filter  n:add  a/i/x/o:set status  q:quit"
        }
        Section::Qa => " Tab:section  f/b/h/p:domain  1-4 or j/k:choose  Enter:submit/next  n:next  q:quit",
        Section::Interview => " Tab:section  s:start  e:end  q:quit",
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn status_style(status: ApplicationStatus) -> Style {
    match status {
        ApplicationStatus::Applied => Style::default().fg(Color::Cyan),
        ApplicationStatus::Interviewing => Style::default().fg(Color::Yellow),
        ApplicationStatus::Rejected => Style::default().fg(Color::Red),
        ApplicationStatus::Offered => Style::default().fg(Color::Green),
    }
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let counts = app.pipeline.summary_counts();
    let stats = [
        ("Applications", counts.total, Color::Blue),
        ("Interviews", counts.interviewing, Color::Yellow),
        ("Rejections", counts.rejected, Color::Magenta),
        ("Offers", counts.offered, Color::Green),
    ];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for (cell, (label, value, color)) in cells.iter().zip(stats) {
        let widget = Paragraph::new(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", label)));
        frame.render_widget(widget, *cell);
    }

    let filter_titles: Vec<Line> = FILTERS.iter().map(|f| Line::from(filter_label(*f))).collect();
    let filters = Tabs::new(filter_titles)
        .block(Block::default().borders(Borders::ALL).title(" Your Applications "))
        .select(app.filter)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(filters, rows[1]);

    let records = app.visible_records();
    let list_title = format!(" {} ({}) ", filter_label(FILTERS[app.filter]), records.len());
    if records.is_empty() {
        let empty = Paragraph::new("No interviews in this category")
            .style(dim())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(list_title));
        frame.render_widget(empty, rows[2]);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .map(|r| {
            let location = if r.location.is_empty() { "-" } else { r.location.as_str() };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(r.company.clone(), bold()),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", r.status), status_style(r.status)),
                ]),
                Line::from(Span::styled(
                    format!("  {} | {} | {}", r.position, location, r.applied_date),
                    dim(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, rows[2], &mut list_state);
}

fn draw_dialog(frame: &mut Frame, dialog: &AddDialog) {
    let area = centered_rect(64, 12, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("Track a new job application in your pipeline", dim())),
        Line::from(""),
    ];
    for (i, label) in DIALOG_LABELS.iter().enumerate() {
        let focused = i == dialog.focus;
        let value = &dialog.inputs[i];
        let shown = if value.is_empty() {
            Span::styled(DIALOG_PLACEHOLDERS[i], dim())
        } else {
            Span::raw(value.as_str())
        };
        lines.push(Line::from(vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(format!("{:<18}", label), if focused { bold() } else { Style::default() }),
            shown,
        ]));
    }
    lines.push(Line::from(""));
    if let Some(error) = &dialog.error {
        lines.push(Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled("Enter:add  Tab:next field  Esc:cancel", dim())));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Add New Interview "));
    frame.render_widget(widget, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_quiz(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let score = app.quiz.score();
    let title = if score.total > 0 {
        format!(" Q&A Practice Session  [{}/{}] ", score.correct, score.total)
    } else {
        " Q&A Practice Session ".to_string()
    };

    let mut domain_spans = Vec::new();
    for domain in Domain::ALL {
        let key = domain.label().chars().next().unwrap_or(' ').to_ascii_lowercase();
        let style = if app.quiz.domain() == Some(domain) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        domain_spans.push(Span::styled(format!(" [{}] {} ", key, domain), style));
        domain_spans.push(Span::raw("  "));
    }
    let domains = Paragraph::new(Line::from(domain_spans))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(domains, rows[0]);

    let (Some(domain), Some(question)) = (app.quiz.domain(), app.quiz.current_question()) else {
        let prompt = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Select a Domain to Start", bold())),
            Line::from(Span::styled("Choose your area of focus and test your knowledge", dim())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(prompt, rows[1]);
        return;
    };

    let submitted = app.quiz.phase() == QuizPhase::AnswerSubmitted;
    let selected = app.quiz.selected();

    let mut lines = vec![Line::from(Span::styled(question.prompt, bold())), Line::from("")];
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let is_correct = i == question.correct_index;
        let (marker, style) = if !submitted {
            if is_selected {
                ("(*)", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("( )", Style::default())
            }
        } else if is_correct {
            ("(+)", Style::default().fg(Color::Green))
        } else if is_selected {
            ("(x)", Style::default().fg(Color::Red))
        } else {
            ("( )", dim())
        };
        lines.push(Line::from(Span::styled(format!("{} {}. {}", marker, i + 1, option), style)));
    }

    if submitted {
        lines.push(Line::from(""));
        let heading = if selected == Some(question.correct_index) {
            "Correct!"
        } else {
            "Explanation:"
        };
        lines.push(Line::from(Span::styled(heading, bold())));
        let width = (rows[1].width.saturating_sub(4) as usize).max(20);
        for line in textwrap::fill(question.explanation, width).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", domain)))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, rows[1]);
}

fn draw_interview(frame: &mut Frame, app: &App, area: Rect) {
    let interview = &app.interview;
    let metrics = interview.metrics();

    let mut lines = Vec::new();
    if interview.is_active() {
        lines.push(Line::from(Span::styled(
            "Interview in Progress",
            bold().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(Span::styled("Ready to start your interview?", bold())));
        lines.push(Line::from(Span::styled(
            "We'll analyze your responses, eye contact, and body language",
            dim(),
        )));
    }
    let capture_style = if interview.capture_available() {
        Style::default().fg(Color::Green)
    } else {
        dim()
    };
    lines.push(Line::from(Span::styled(interview.capture_status(), capture_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("Eye Contact  "),
        Span::styled(metrics.eye_contact, bold().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Confidence   "),
        Span::styled(metrics.confidence, bold().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("What we track:", bold())));
    for aspect in TRACKED_ASPECTS {
        lines.push(Line::from(format!("  - {}", aspect)));
    }

    let title = format!(" AI Video Interview ({:?}) ", interview.state());
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_resume(frame: &mut Frame, app: &App, area: Rect) {
    let ats = app
        .ats_report
        .as_ref()
        .map_or_else(|| "--".to_string(), |r| format!("{}%", r.score));

    let mut lines = Vec::new();
    for (i, field) in ResumeField::ALL.into_iter().enumerate() {
        let focused = i == app.resume_focus;
        let mut header = vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(field.label(), if focused { bold() } else { Style::default() }),
        ];
        if focused && app.resume_editing {
            header.push(Span::styled("  (editing)", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(header));

        let value = app.resume.get(field);
        if value.is_empty() {
            lines.push(Line::from(Span::styled(format!("    {}", field.placeholder()), dim())));
        } else {
            for line in value.lines() {
                lines.push(Line::from(format!("    {}", line)));
            }
        }
        if let Some(report) = app.ats_report.as_ref().filter(|_| field == ResumeField::Experience) {
            for suggestion in &report.suggestions {
                lines.push(Line::from(Span::styled(format!("    * {}", suggestion), dim())));
            }
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Resume Builder ")
                .title(Line::from(format!(" ATS Score: {} ", ats)).right_aligned()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
