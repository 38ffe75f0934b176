use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use spelaspel_core::{
    audio::{AudioCue, CueDispatcher, CueError, CuePlayer},
    clock::{ClockReading, HandPlacement, ALL_POSITIONS},
    config::AppConfig,
    mode::{Area, GameMode},
    preferences::PreferenceStore,
    session::{AnswerOutcome, Question, QuizSession, SessionHandle, SessionPhase, Target},
};
use tokio::{sync::mpsc, time::sleep};
use tracing::{debug, error, info, warn};

use crate::block_font;

const TICK_RATE: Duration = Duration::from_millis(250);
const AREAS: [Area; 2] = [Area::Svenska, Area::Klockan];

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Area(Area),
    Game,
    Result,
}

/// Events consumed by the main loop. Timer events carry the game
/// generation they were scheduled for; stale ones are dropped.
enum AppEvent {
    Input(Event),
    Tick,
    Settle(u64),
    Instruction(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    Correct { first_try: bool },
    Wrong { option: String, repeated: bool },
}

/// Plays correct/wrong as the terminal bell. Spoken cues have no terminal
/// rendition and report [`CueError::Missing`].
struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&self, cue: &AudioCue, volume: f32) -> Result<(), CueError> {
        match cue {
            AudioCue::Correct | AudioCue::Wrong => {
                if volume <= 0.0 {
                    return Ok(());
                }
                let mut stdout = io::stdout();
                stdout.write_all(b"\x07")?;
                stdout.flush()?;
                Ok(())
            }
            other => Err(CueError::Missing(other.asset_path())),
        }
    }
}

/// Terminal front end for the quiz engine.
pub struct SpelaspelApp {
    config: AppConfig,
    session: SessionHandle,
    preferences: PreferenceStore,
    audio: CueDispatcher<TerminalBell>,
    state: UiState,
    screen: Screen,
    theme: Theme,
    event_tx: Option<mpsc::Sender<AppEvent>>,
    generation: u64,
}

impl SpelaspelApp {
    pub fn new(config: AppConfig, preferences: PreferenceStore) -> Self {
        let sound = preferences.sound_enabled();
        let session = QuizSession::new(config.quiz.clone());
        Self {
            config,
            session,
            preferences,
            audio: CueDispatcher::new(TerminalBell, sound),
            state: UiState::default(),
            screen: Screen::Home,
            theme: Theme::default(),
            event_tx: None,
            generation: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let enabled = self.config.quiz.enabled_modes.len();
        self.state
            .set_status(format!("{enabled} spel tillgängliga • s slår av/på ljud"));

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx.clone());
        self.event_tx = Some(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.state.should_quit {
                break;
            }
            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        self.event_tx = None;
        Ok(())
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                if let Err(err) = self.handle_input(event) {
                    error!(?err, "input handling failed");
                    self.state.set_status(format!("Fel: {err}"));
                }
                true
            }
            Some(AppEvent::Tick) => true,
            Some(AppEvent::Settle(generation)) => {
                if generation == self.generation {
                    if let Err(err) = self.handle_settle() {
                        error!(?err, "failed to advance session");
                        self.state.set_status(format!("Fel: {err}"));
                    }
                }
                true
            }
            Some(AppEvent::Instruction(generation)) => {
                if generation == self.generation {
                    self.play_instructions();
                }
                true
            }
            None => false,
        }
    }

    fn schedule(&self, delay: Duration, event: AppEvent) {
        let Some(sender) = self.event_tx.clone() else {
            return;
        };
        tokio::spawn(async move {
            sleep(delay).await;
            if sender.send(event).await.is_err() {
                debug!("event loop closed before timer fired");
            }
        });
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if let KeyCode::Char('s') | KeyCode::Char('S') = key.code {
            self.toggle_sound();
            return Ok(());
        }
        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Area(area) => self.handle_area_key(area, key)?,
            Screen::Game => self.handle_game_key(key),
            Screen::Result => self.handle_result_key(key)?,
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.state.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.home_cursor = step(self.state.home_cursor, 1, AREAS.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.home_cursor = step(self.state.home_cursor, -1, AREAS.len());
            }
            KeyCode::Enter => {
                if let Some(area) = AREAS.get(self.state.home_cursor).copied() {
                    self.open_area(area);
                }
            }
            _ => {}
        }
    }

    fn open_area(&mut self, area: Area) {
        let modes = modes_in_area(&self.config, area);
        self.state.area_cursor = 0;
        self.screen = Screen::Area(area);
        if modes.is_empty() {
            self.state.set_status(format!("Inga spel i {}", area.title()));
        } else {
            self.state.set_status("Välj ett spel".to_string());
        }
    }

    fn handle_area_key(&mut self, area: Area, key: KeyEvent) -> Result<()> {
        let modes = modes_in_area(&self.config, area);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.screen = Screen::Home;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.area_cursor = step(self.state.area_cursor, 1, modes.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.area_cursor = step(self.state.area_cursor, -1, modes.len());
            }
            KeyCode::Enter => {
                if let Some(mode) = modes.get(self.state.area_cursor).copied() {
                    self.start_game(mode)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn start_game(&mut self, mode: GameMode) -> Result<()> {
        self.generation += 1;
        self.session.start(mode)?;
        self.state.option_cursor = 0;
        self.state.feedback = None;
        self.screen = Screen::Game;
        self.state.set_status(mode.prompt().to_string());
        info!(mode = %mode, "game opened");
        self.schedule(
            self.config.timing.instruction_delay(),
            AppEvent::Instruction(self.generation),
        );
        Ok(())
    }

    fn leave_game(&mut self) {
        self.generation += 1;
        let area = self.session.mode().map(GameMode::area).unwrap_or(Area::Svenska);
        self.state.feedback = None;
        self.screen = Screen::Area(area);
        self.state.set_status("Välj ett spel".to_string());
    }

    fn play_instructions(&mut self) {
        if let Some(mode) = self.session.mode() {
            self.audio.cue(AudioCue::Instruction(mode));
        }
        if let Some(cue) = self.session.current_question().and_then(Question::prompt_cue) {
            self.audio.cue(cue);
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let option_count = self
            .session
            .current_question()
            .map(|question| question.options.len())
            .unwrap_or(0);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.leave_game(),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.state.option_cursor = step(self.state.option_cursor, -1, option_count);
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.state.option_cursor = step(self.state.option_cursor, 1, option_count);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.state.option_cursor),
            code => {
                if let Some(index) = option_index_for_key(code, option_count) {
                    self.state.option_cursor = index;
                    self.choose(index);
                }
            }
        }
    }

    fn choose(&mut self, index: usize) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return;
        };

        let outcome = self.session.submit_answer(&option);
        if let Some(cue) = answer_cue(outcome) {
            self.audio.cue(cue);
        }
        match outcome {
            AnswerOutcome::Correct {
                first_try,
                session_complete,
            } => {
                self.state.feedback = Some(Feedback::Correct { first_try });
                self.state.set_status(if session_complete {
                    "Rätt! Sista frågan klar.".to_string()
                } else {
                    "Rätt!".to_string()
                });
                self.schedule(
                    self.config.timing.settle_delay(),
                    AppEvent::Settle(self.generation),
                );
            }
            AnswerOutcome::Wrong { repeated } => {
                self.state.feedback = Some(Feedback::Wrong { option, repeated });
                self.state.set_status("Försök igen!".to_string());
            }
            AnswerOutcome::Ignored => {}
        }
    }

    fn handle_settle(&mut self) -> Result<()> {
        if self.session.phase() == SessionPhase::Completed {
            self.show_result();
            return Ok(());
        }
        let prompt_cue = self.session.settle()?.and_then(Question::prompt_cue);
        self.state.feedback = None;
        self.state.option_cursor = 0;
        if let Some(cue) = prompt_cue {
            self.audio.cue(cue);
        }
        if self.session.phase() == SessionPhase::Completed {
            self.show_result();
        }
        Ok(())
    }

    fn show_result(&mut self) {
        self.screen = Screen::Result;
        self.state.feedback = None;
        if let Some(result) = self.session.result() {
            let passed = result.passed(self.config.quiz.pass_threshold);
            info!(percentage = result.percentage, passed, "showing result");
            self.state.set_status(format!(
                "{} av {} rätt på första försöket • r spelar igen",
                result.correct_first_try, result.total_questions
            ));
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if let Some(mode) = self.session.mode() {
                    self.start_game(mode)?;
                }
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave_game();
            }
            _ => {}
        }
        Ok(())
    }

    fn toggle_sound(&mut self) {
        let enabled = !self.audio.enabled();
        self.audio.set_enabled(enabled);
        let label = if enabled { "Ljud på" } else { "Ljud av" };
        match self.preferences.persist_sound(enabled) {
            Ok(_) => self.state.set_status(label.to_string()),
            Err(err) => {
                warn!(?err, "failed to persist sound preference");
                self.state
                    .set_status(format!("{label} (kunde inte sparas)"));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Home => self.draw_home(frame),
            Screen::Area(area) => self.draw_area(frame, area),
            Screen::Game => self.draw_game(frame),
            Screen::Result => self.draw_result(frame),
        }
    }

    fn draw_home(&self, frame: &mut Frame) {
        let area = frame.size();
        let banner_lines = block_font::render("SPELA");
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((banner_lines.len() as u16 + 2).min(area.height)),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_banner(frame, layout[0], &banner_lines);

        let items: Vec<&str> = AREAS.iter().map(|area| area.title()).collect();
        let menu_height = (items.len() as u16 * 2 + 2).min(layout[1].height);
        let menu_area = centered_rect(30, menu_height, layout[1]);
        let menu = Paragraph::new(self.menu_lines(&items, self.state.home_cursor))
            .block(Block::default().borders(Borders::ALL).title("Välj"))
            .alignment(Alignment::Center);
        frame.render_widget(menu, menu_area);

        self.render_status(frame, layout[2]);
    }

    fn draw_area(&self, frame: &mut Frame, area: Area) {
        let size = frame.size();
        let banner_lines = block_font::render(area.title());
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((banner_lines.len() as u16 + 2).min(size.height)),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(size);

        self.render_banner(frame, layout[0], &banner_lines);

        let modes = modes_in_area(&self.config, area);
        let items: Vec<&str> = modes.iter().map(|mode| mode.title()).collect();
        let menu_height = (items.len() as u16 * 2 + 2).min(layout[1].height);
        let menu_area = centered_rect(40, menu_height, layout[1]);
        let menu = Paragraph::new(self.menu_lines(&items, self.state.area_cursor))
            .block(Block::default().borders(Borders::ALL).title("Spel"))
            .alignment(Alignment::Center);
        frame.render_widget(menu, menu_area);

        self.render_status(frame, layout[2]);
    }

    fn draw_game(&self, frame: &mut Frame) {
        let size = frame.size();
        let Some(question) = self.session.current_question() else {
            self.render_status(frame, size);
            return;
        };
        let target_lines = self.target_lines(question);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(target_lines.len() as u16 + 2),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(size);

        self.render_game_header(frame, layout[0], question);

        let target = Paragraph::new(target_lines)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(target, layout[1]);

        self.render_options(frame, layout[2], question);
        self.render_status(frame, layout[3]);
    }

    fn draw_result(&self, frame: &mut Frame) {
        let size = frame.size();
        let Some(result) = self.session.result() else {
            self.render_status(frame, size);
            return;
        };
        let passed = result.passed(self.config.quiz.pass_threshold);
        let banner_lines = block_font::render(&format!("{}%", result.percentage));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((banner_lines.len() as u16 + 2).min(size.height)),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(size);

        self.render_banner(frame, layout[0], &banner_lines);

        let (message, color) = if passed {
            ("★ BRA JOBBAT! ★", self.theme.success)
        } else {
            ("FÖRSÖK IGEN!", self.theme.warning)
        };
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                message,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "r: spela igen   Enter: tillbaka",
                Style::default().fg(self.theme.muted),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Resultat"))
        .alignment(Alignment::Center);
        frame.render_widget(body, layout[1]);

        self.render_status(frame, layout[2]);
    }

    fn menu_lines(&self, items: &[&str], cursor: usize) -> Vec<Line<'static>> {
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if idx == cursor {
                    Line::from(Span::styled(
                        format!("▶ {item}"),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {item}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                }
            })
            .collect()
    }

    fn target_lines(&self, question: &Question) -> Vec<Line<'static>> {
        let style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        match (question.target, question.clock) {
            (Target::Letter(letter), _) => block_font::render(&letter.to_string())
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style)))
                .collect(),
            (_, Some(reading)) => describe_clock(&reading, question.context.labels_visible)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style)))
                .collect(),
            (_, None) => Vec::new(),
        }
    }

    fn render_game_header(&self, frame: &mut Frame, area: Rect, question: &Question) {
        let title = self
            .session
            .mode()
            .map(|mode| mode.title())
            .unwrap_or_default();
        let sound = if self.audio.enabled() { "♪ på" } else { "♪ av" };
        let header = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Fråga {}/{}",
                    question.index + 1,
                    self.session.total_questions()
                ),
                Style::default().fg(self.theme.primary_fg),
            ),
            Span::raw("  "),
            Span::styled(sound, Style::default().fg(self.theme.muted)),
        ]);
        let paragraph = Paragraph::new(header).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_options(&self, frame: &mut Frame, area: Rect, question: &Question) {
        let locked = !self.session.is_awaiting_answer();
        let wrong = self.session.wrong_answers();
        let lines: Vec<Line> = question
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let mut style = Style::default().fg(self.theme.primary_fg);
                if wrong.contains(option) {
                    style = style
                        .fg(self.theme.danger)
                        .add_modifier(Modifier::CROSSED_OUT);
                }
                if locked && question.is_correct(option) {
                    style = style
                        .fg(self.theme.success)
                        .add_modifier(Modifier::BOLD);
                }
                if idx == self.state.option_cursor && !locked {
                    style = style
                        .bg(self.theme.selection_bg)
                        .fg(self.theme.selection_fg);
                }
                Line::from(Span::styled(format!(" {}  {option} ", idx + 1), style))
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.session.mode().map(GameMode::prompt).unwrap_or_default()),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (text, color) = match &self.state.feedback {
            Some(Feedback::Correct { first_try: true }) => {
                ("Rätt på första försöket!".to_string(), self.theme.success)
            }
            Some(Feedback::Correct { first_try: false }) => ("Rätt!".to_string(), self.theme.success),
            Some(Feedback::Wrong { option, repeated }) => {
                let note = if *repeated { " (redan provat)" } else { "" };
                (format!("{option} var fel{note}"), self.theme.danger)
            }
            None => (self.state.status.clone(), self.theme.primary_fg),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, lines: &[String]) {
        let content: Vec<Line> = lines
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    line.clone(),
                    Style::default().fg(self.theme.accent),
                ))
            })
            .collect();
        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

struct UiState {
    status: String,
    home_cursor: usize,
    area_cursor: usize,
    option_cursor: usize,
    feedback: Option<Feedback>,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: "Redo".to_string(),
            home_cursor: 0,
            area_cursor: 0,
            option_cursor: 0,
            feedback: None,
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

/// Enabled modes of `area`, in menu order.
fn modes_in_area(config: &AppConfig, area: Area) -> Vec<GameMode> {
    GameMode::ALL
        .into_iter()
        .filter(|mode| mode.area() == area && config.quiz.is_enabled(*mode))
        .collect()
}

/// Move `cursor` by `delta` within `0..len`, wrapping around.
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta).rem_euclid(len as isize) as usize
}

/// Option picked by a digit key, `1` being the first.
fn option_index_for_key(code: KeyCode, option_count: usize) -> Option<usize> {
    let KeyCode::Char(ch) = code else {
        return None;
    };
    let index = ch.to_digit(10)?.checked_sub(1)? as usize;
    (index < option_count).then_some(index)
}

/// Sound for an answer. An option already marked wrong stays silent.
fn answer_cue(outcome: AnswerOutcome) -> Option<AudioCue> {
    match outcome {
        AnswerOutcome::Correct { .. } => Some(AudioCue::Correct),
        AnswerOutcome::Wrong { repeated: false } => Some(AudioCue::Wrong),
        AnswerOutcome::Wrong { repeated: true } | AnswerOutcome::Ignored => None,
    }
}

/// Text rendition of the clock face.
fn describe_clock(reading: &ClockReading, labels_visible: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if reading.hour_hand_visible {
        let placement = match reading.hour_hand_placement() {
            HandPlacement::On(numeral) => format!("pekar på {numeral}"),
            HandPlacement::Between(lower, upper) => format!("står mellan {lower} och {upper}"),
        };
        lines.push(format!(
            "Timvisaren {placement} ({:.1}°)",
            reading.hour_angle_degrees
        ));
    } else {
        lines.push("Timvisaren syns inte".to_string());
    }
    if reading.minute_hand_visible {
        lines.push(format!(
            "Minutvisaren pekar på {} ({:.0}°)",
            reading.minute_numeral(),
            reading.minute_angle_degrees
        ));
    } else {
        lines.push("Minutvisaren syns inte".to_string());
    }
    if labels_visible {
        lines.push(String::new());
        lines.extend(
            ALL_POSITIONS
                .chunks(4)
                .map(|row| {
                    row.iter()
                        .map(|position| format!("{}: {}", position.get(), position.label()))
                        .collect::<Vec<_>>()
                        .join("   ")
                }),
        );
    }
    lines
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
