//! Keyboard and mouse state built from crossterm events
//!
//! Terminals without the keyboard enhancement protocol never report key
//! releases, only a press followed by auto-repeat presses. Until a release is
//! seen, a tapped key stays held for `TAP_HOLD` seconds and an auto-repeating
//! key until `REPEAT_GAP` passes without another press. A press arriving more
//! than `REPEAT_GAP` after the previous one is a new press.

use std::collections::{HashMap, HashSet};
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use glam::Vec2;

use crate::input::{InputProvider, Key};

/// How long a single tap keeps a key held
pub const TAP_HOLD: f64 = 0.15;

/// About twice the usual auto-repeat interval
pub const REPEAT_GAP: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Hold {
    last: f64,
    repeating: bool,
}

impl Hold {
    fn at(last: f64, repeating: bool) -> Self {
        Self { last, repeating }
    }

    fn expired(&self, now: f64) -> bool {
        let window = if self.repeating { REPEAT_GAP } else { TAP_HOLD };
        now - self.last > window
    }
}

pub struct TerminalInput {
    cols: u16,
    rows: u16,
    arena: Vec2,
    held: HashMap<Key, Hold>,
    pressed: HashSet<Key>,
    releases_seen: bool,
    pointer: Option<Vec2>,
    pointer_pressed: bool,
    resized: Option<(u16, u16)>,
}

impl TerminalInput {
    pub fn new(cols: u16, rows: u16, arena: Vec2) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            arena,
            held: HashMap::new(),
            pressed: HashSet::new(),
            releases_seen: false,
            pointer: None,
            pointer_pressed: false,
            resized: None,
        }
    }

    /// Drain pending terminal events without blocking
    pub fn poll(&mut self, now: f64) -> io::Result<()> {
        self.begin_frame(now);
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle(event, now);
        }
        Ok(())
    }

    /// Forget last frame's edges and expire stale holds
    pub fn begin_frame(&mut self, now: f64) {
        self.pressed.clear();
        self.pointer_pressed = false;
        if !self.releases_seen {
            self.held.retain(|_, hold| !hold.expired(now));
        }
    }

    pub fn handle(&mut self, event: Event, now: f64) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                self.cols = cols.max(1);
                self.rows = rows.max(1);
                self.resized = Some((cols, rows));
            }
            _ => {}
        }
    }

    /// New terminal size, once per resize
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }

    fn handle_key(&mut self, event: KeyEvent, now: f64) {
        let Some(key) = map_key(&event) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press => {
                let fresh = match self.held.get(&key) {
                    None => true,
                    Some(_) if self.releases_seen => false,
                    Some(hold) => now - hold.last > REPEAT_GAP,
                };
                if fresh {
                    self.pressed.insert(key);
                }
                self.held.insert(key, Hold::at(now, !fresh));
            }
            KeyEventKind::Repeat => {
                self.held.insert(key, Hold::at(now, true));
            }
            KeyEventKind::Release => {
                self.releases_seen = true;
                self.held.remove(&key);
            }
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some(self.to_playfield(event.column, event.row));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some(self.to_playfield(event.column, event.row));
                self.pointer_pressed = true;
            }
            _ => {}
        }
    }

    /// Center of a cell in playfield units
    fn to_playfield(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.arena.x / self.cols as f32,
            (row as f32 + 0.5) * self.arena.y / self.rows as f32,
        )
    }
}

fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Key::Quit),
            _ => None,
        };
    }
    let key = match event.code {
        KeyCode::Char('w' | 'W') => Key::W,
        KeyCode::Char('s' | 'S') => Key::S,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char('1') => Key::Num1,
        KeyCode::Char('2') => Key::Num2,
        KeyCode::Char('3') => Key::Num3,
        KeyCode::Char('q' | 'Q') => Key::Quit,
        _ => return None,
    };
    Some(key)
}

impl InputProvider for TerminalInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer
    }

    fn is_pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }
}
