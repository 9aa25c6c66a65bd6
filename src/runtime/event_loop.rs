use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use quaver::app::App;
use quaver::carousel::SlotTransform;
use quaver::config;
use quaver::library::{Column, LoftyCovers};

use crate::ui;

/// Upper bound on how long we block waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Next carousel tick, while an animation is running.
    carousel_due: Option<Instant>,
    decay_due: Option<Instant>,
    /// Next visualizer jump, while the visualizer is active.
    jump_due: Option<Instant>,
    /// Last frame produced by the carousel; `None` draws its resting pose.
    pub frame: Option<Vec<SlotTransform>>,
    rng: ThreadRng,
}

impl EventLoopState {
    pub fn new(app: &App) -> Self {
        let now = Instant::now();
        let vis = &app.settings().visualizer;
        Self {
            carousel_due: None,
            decay_due: Some(now + Duration::from_millis(vis.decay_ms)),
            jump_due: app
                .visualizer()
                .is_active()
                .then(|| now + Duration::from_millis(vis.jump_ms)),
            frame: None,
            rng: rand::rng(),
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        [self.carousel_due, self.decay_due, self.jump_due]
            .into_iter()
            .flatten()
            .min()
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_deadline()
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL)
    }
}

/// Main terminal event loop: draws, waits for input or the next timer and
/// fires whatever is due. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, state.frame.as_deref(), &settings.ui))?;

        if event::poll(state.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key_event(key, settings, app, state, Instant::now())
                {
                    break;
                }
            }
        }

        fire_timers(settings, app, state, Instant::now());
    }

    Ok(())
}

fn fire_timers(
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
    now: Instant,
) {
    if state.carousel_due.is_some_and(|due| due <= now) {
        if let Some(frame) = app.tick_carousel() {
            state.frame = Some(frame);
        }
        state.carousel_due = app
            .carousel()
            .is_running()
            .then(|| now + app.carousel().period());
    }

    let vis = &settings.visualizer;
    if state.decay_due.is_some_and(|due| due <= now) {
        app.visualizer_mut().decay();
        state.decay_due = Some(now + Duration::from_millis(vis.decay_ms));
    }

    if state.jump_due.is_some_and(|due| due <= now) {
        app.visualizer_mut().jump(&mut state.rng);
        state.jump_due = app
            .visualizer()
            .is_active()
            .then(|| now + Duration::from_millis(vis.jump_ms));
    }
}

/// Start (or re-arm) the carousel. The single carousel deadline is replaced,
/// never added to.
fn animate(app: &mut App, state: &mut EventLoopState, left: bool, now: Instant) {
    app.start_animate(left);
    state.carousel_due = Some(now + app.carousel().period());
}

fn toggle_visualizer(
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
    now: Instant,
) {
    let active = !app.visualizer().is_active();
    app.visualizer_mut().set_active(active);
    state.jump_due = active.then(|| now + Duration::from_millis(settings.visualizer.jump_ms));
}

/// Keys typed while entering a new library folder.
fn handle_path_input(key: KeyEvent, app: &mut App, state: &mut EventLoopState) {
    let Some(input) = app.path_input.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.path_input = None,
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) if !c.is_control() => input.push(c),
        KeyCode::Enter => {
            let root = PathBuf::from(input.trim());
            app.path_input = None;
            // Failures land in the status line and keep the old library.
            if app.reload(&root, &LoftyCovers).is_ok() {
                state.frame = None;
                state.carousel_due = None;
            }
        }
        _ => {}
    }
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
    now: Instant,
) -> bool {
    if app.path_input.is_some() {
        handle_path_input(key, app, state);
        return false;
    }

    if app.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.search_mode = false,
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Tab => app.cycle_search_field(),
            KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => {
            app.search_mode = true;
        }
        KeyCode::Char('o') => {
            let current = app
                .root()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            app.path_input = Some(current);
        }
        KeyCode::Esc => app.clear_search(),
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('h') | KeyCode::Left => animate(app, state, true, now),
        KeyCode::Char('l') | KeyCode::Right => animate(app, state, false, now),
        KeyCode::Char(c @ '1'..='6') => {
            let column = Column::ALL[c as usize - '1' as usize];
            app.sort_visible(column);
        }
        KeyCode::Char('r') => {
            let had_root = app.root().is_some();
            if app.rescan(&LoftyCovers).is_ok() && had_root {
                state.frame = None;
                state.carousel_due = None;
            }
        }
        KeyCode::Char('t') => app.toggle_display(),
        KeyCode::Char('v') => toggle_visualizer(settings, app, state, now),
        KeyCode::Char('c') => {
            app.visualizer_mut().cycle_color();
        }
        _ => {}
    }

    false
}
