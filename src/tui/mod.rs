//! TUI interface: ratatui panels for the fields, normalized readout, envelope
//! timeline, activity log, status bar.
//!
//! The App struct holds all TUI state and drives the event loop.

pub mod entry;
pub mod help;
pub mod keybindings;
pub mod layout;
pub mod status;
pub mod theme;
pub mod timeline;

pub use entry::FieldEntry;
pub use help::HelpScreen;
pub use keybindings::{map_key, Action};
pub use layout::Field;
pub use status::StatusInfo;
pub use timeline::TimelineCell;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;
use tracing::info;

use crate::config::AppConfig;
use crate::logging::ActivityLog;
use crate::session::Session;

/// Longest wait for input before the loop re-checks the clock and the
/// interrupt flag.
const IDLE_POLL_MS: u64 = 100;

/// The main TUI application state.
pub struct App {
    pub session: Session,
    pub focus: Field,
    pub entry: FieldEntry,
    pub help_screen: HelpScreen,
    pub activity: ActivityLog,
    pub should_quit: bool,
    pub theme: theme::Theme,
    available_themes: Vec<theme::Theme>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl App {
    /// Create a new App from configuration, recording into `activity`.
    pub fn new(config: &AppConfig, activity: ActivityLog) -> Self {
        Self {
            session: Session::new(config),
            focus: Field::Time,
            entry: FieldEntry::default(),
            help_screen: HelpScreen::default(),
            activity,
            should_quit: false,
            theme: theme::load_theme(config.theme.as_deref()),
            available_themes: theme::builtin::all_builtins(),
            interrupt: None,
        }
    }

    /// Quit when `flag` is raised from another thread (signal handler).
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Process an action at the current instant.
    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Process an action as if it happened at `now`.
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleClock => self.session.toggle_clock(now),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Nudge(steps) => {
                if let Some(param) = self.focus.param() {
                    self.session.nudge(param, steps);
                }
            }
            Action::SetMin => {
                if let Some(param) = self.focus.param() {
                    self.session.set_min(param);
                }
            }
            Action::SetMax => {
                if let Some(param) = self.focus.param() {
                    self.session.set_max(param);
                }
            }
            Action::Activate => match self.focus.param() {
                None => self.session.toggle_clock(now),
                Some(param) => {
                    let current = self.session.param(param).display();
                    self.entry.begin(self.focus, &current);
                }
            },
            Action::BeginEntry(c) => {
                if self.focus.param().is_some() {
                    self.entry.begin(self.focus, &c.to_string());
                }
            }
            Action::EntryInsert(c) => self.entry.insert(c),
            Action::EntryBackspace => self.entry.backspace(),
            Action::EntryCommit => {
                if let Some((field, text)) = self.entry.take() {
                    if let Some(param) = field.param() {
                        // Rejected text leaves the field unchanged.
                        self.session.commit_text(param, &text);
                    }
                }
            }
            Action::EntryCancel => self.entry.cancel(),
            Action::ToggleHelp => self.help_screen.toggle(),
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.available_themes);
                info!(target: "envnorm::tui", theme = %self.theme.name, "theme changed");
            }
            Action::Escape => {
                if self.help_screen.visible {
                    self.help_screen.hide();
                }
            }
        }
    }

    /// How long the loop may wait for input at `now`.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(IDLE_POLL_MS);
        match self.session.time_until_tick(now) {
            Some(until) => until.min(idle),
            None => idle,
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Snapshot for the status bar.
    pub fn status(&self) -> StatusInfo {
        StatusInfo::from_session(&self.session)
    }

    /// Key hint for the current context.
    pub fn context_hint(&self) -> String {
        if self.help_screen.visible {
            return "Esc/?:close help".to_string();
        }
        if self.entry.is_active() {
            return "Enter:commit  Esc:cancel".to_string();
        }
        let label = self.session.toggle_label();
        match self.focus {
            Field::Transport => format!("Space/Enter:{label}  Tab:next  ?:help  q:quit"),
            _ => format!("←/→:step  0-9:type  Space:{label}  ?:help  q:quit"),
        }
    }

    /// Draw the UI.
    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Field::ALL.len() as u16 + 2), // Fields
                Constraint::Length(5),                           // Readout
                Constraint::Length(3),                           // Timeline
                Constraint::Min(3),                              // Activity
                Constraint::Length(1),                           // Status bar
            ])
            .split(size);

        self.draw_fields(frame, chunks[0]);
        self.draw_readout(frame, chunks[1]);
        self.draw_timeline(frame, chunks[2]);
        self.draw_activity(frame, chunks[3]);
        self.draw_status(frame, chunks[4]);

        if self.help_screen.visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_fields(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                " Envelope Segment Normalizer ",
                Style::default().fg(self.theme.title),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, field) in Field::ALL.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            self.draw_field_row(frame, row, *field);
        }
    }

    fn draw_field_row(&self, frame: &mut Frame, area: Rect, field: Field) {
        let theme = &self.theme;
        let focused = self.focus == field;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24),
                Constraint::Length(12),
                Constraint::Min(1),
            ])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.label)
        };
        let marker = if focused { "▶ " } else { "  " };

        let Some(param) = field.param() else {
            let running = self.session.is_running();
            let label = Paragraph::new(Span::styled(format!("{marker}Clock"), label_style));
            let button_style = Style::default()
                .fg(if running { theme.running } else { theme.stopped })
                .add_modifier(Modifier::BOLD);
            let button = Paragraph::new(Span::styled(
                format!("[ {} ]", self.session.toggle_label()),
                button_style,
            ));
            frame.render_widget(label, cols[0]);
            frame.render_widget(button, cols[1]);
            return;
        };

        let label = Paragraph::new(Span::styled(
            format!("{marker}{}", param.label()),
            label_style,
        ));
        frame.render_widget(label, cols[0]);

        let value = match self.entry.target() {
            Some(target) if target == field => Span::styled(
                format!("{}_", self.entry.buffer()),
                Style::default()
                    .fg(theme.entry)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            _ => Span::styled(
                self.session.param(param).display(),
                Style::default().fg(theme.value),
            ),
        };
        frame.render_widget(Paragraph::new(value), cols[1]);

        let gauge = Gauge::default()
            .label("")
            .ratio(self.session.param(param).ratio())
            .gauge_style(Style::default().fg(theme.gauge));
        frame.render_widget(gauge, cols[2]);
    }

    fn draw_readout(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let readout = self.session.readout();
        let block = Block::default()
            .title(" Normalized ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let attack = Gauge::default()
            .label(format!("Normalized Attack: {}", readout.attack_display()))
            .ratio(readout.attack.clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(theme.attack));
        frame.render_widget(attack, rows[0]);

        let decay = Gauge::default()
            .label(format!("Normalized Decay:  {}", readout.decay_display()))
            .ratio(readout.decay.clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(theme.decay));
        frame.render_widget(decay, rows[1]);

        let segment_color = match readout.segment {
            crate::envelope::Segment::Attack => theme.attack,
            crate::envelope::Segment::Decay => theme.decay,
            crate::envelope::Segment::Outside => theme.outside,
        };
        let segment = Paragraph::new(Line::from(vec![
            Span::styled("segment: ", Style::default().fg(theme.label)),
            Span::styled(
                readout.segment.label(),
                Style::default()
                    .fg(segment_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(segment, rows[2]);
    }

    fn draw_timeline(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .title(" Timeline ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = timeline::project(
            &self.session.envelope(),
            self.session.time(),
            inner.width as usize,
        );
        let spans: Vec<Span> = cells
            .iter()
            .map(|cell| {
                let color = match cell {
                    TimelineCell::Attack => theme.attack,
                    TimelineCell::Decay => theme.decay,
                    TimelineCell::Outside => theme.outside,
                    TimelineCell::Playhead => theme.playhead,
                };
                Span::styled(cell.symbol().to_string(), Style::default().fg(color))
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn draw_activity(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .title(format!(" Activity ({}) ", self.activity.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        if self.activity.is_empty() {
            let hint = Paragraph::new(Span::styled(
                "no activity yet",
                Style::default().fg(theme.outside),
            ))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .activity
            .recent(visible)
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>5} ", entry.level.to_string()),
                        Style::default().fg(theme.help_key),
                    ),
                    Span::styled(
                        format!("{:<6} ", entry.source()),
                        Style::default().fg(theme.label),
                    ),
                    Span::styled(entry.display(), Style::default().fg(theme.log)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let status = self.status();
        let running = self.session.is_running();

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", status.clock_display()),
                Style::default()
                    .fg(if running { theme.running } else { theme.stopped })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " {} | {} | {} | {} ",
                status.position_display(),
                status.interval_display(),
                status.segment.label(),
                theme.name,
            )),
            Span::styled(
                format!(" {} ", self.context_hint()),
                Style::default().fg(theme.outside),
            ),
        ]);

        let paragraph =
            Paragraph::new(line).style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 60 / 100).max(48).min(area.width);
        let height = (self.help_screen.lines().len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(" Help (? or Esc to close) ");
        let inner = block.inner(overlay);
        frame.render_widget(Clear, overlay);
        frame.render_widget(block, overlay);

        let lines: Vec<Line> = self
            .help_screen
            .lines()
            .iter()
            .take(inner.height as usize)
            .map(|hl| {
                let color = if hl.is_header {
                    self.theme.help_key
                } else {
                    self.theme.help_desc
                };
                Line::from(Span::styled(&hl.text, Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        info!(target: "envnorm::tui", "ready");
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            // Wait for input no longer than the next clock tick
            if event::poll(self.poll_timeout(Instant::now()))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) =
                            keybindings::map_key(key, self.entry.is_active(), self.focus)
                        {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.session.tick(Instant::now());

            if self.interrupted() {
                self.should_quit = true;
            }
        }

        Ok(())
    }
}
