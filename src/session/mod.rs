// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interaction state machine.
//!
//! A [`Session`] owns the zone store and everything the user is in the
//! middle of doing: the current mode, the zone selected for editing, the
//! drag gesture in progress and any open text prompt. The GUI feeds it
//! [`Event`]s one at a time; each event may produce a [`Notice`] describing
//! what happened.
//!
//! Text input never blocks. Actions that need a name (naming a new zone,
//! picking a zone to edit or delete) open a [`Prompt`] and wait for a later
//! [`Event::SubmitPrompt`] or [`Event::CancelPrompt`].

pub mod overlay;

use crate::models::{
    store::ZoneStore,
    zone::{Point, Rect},
};
use std::fmt;

/// Top-level interaction mode, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Draw,
    Edit,
    Delete,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Draw => "DRAW",
            Mode::Edit => "EDIT",
            Mode::Delete => "DELETE",
        }
    }
}

/// Keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Edit,
    Delete,
    Normal,
    TogglePause,
}

impl Command {
    /// Map a key character to its command.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'q' => Some(Command::Quit),
            's' => Some(Command::Save),
            'e' => Some(Command::Edit),
            'd' => Some(Command::Delete),
            'n' => Some(Command::Normal),
            'p' => Some(Command::TogglePause),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Command::Quit => 'q',
            Command::Save => 's',
            Command::Edit => 'e',
            Command::Delete => 'd',
            Command::Normal => 'n',
            Command::TogglePause => 'p',
        }
    }

    /// Commands that still work while a prompt is open.
    fn allowed_while_prompting(&self) -> bool {
        matches!(self, Command::Quit | Command::TogglePause | Command::Normal)
    }
}

/// Input delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Command(Command),
    SubmitPrompt(String),
    CancelPrompt,
}

/// A pending request for text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Name for a freshly drawn rectangle.
    ZoneName(Rect),
    /// Name of the zone to redraw.
    EditTarget,
    /// Name of the zone to delete.
    DeleteTarget,
}

impl Prompt {
    pub fn label(&self) -> &'static str {
        match self {
            Prompt::ZoneName(_) => "Zone name:",
            Prompt::EditTarget => "Enter zone name to edit:",
            Prompt::DeleteTarget => "Enter zone name to delete:",
        }
    }
}

/// Outcome of an event, for the log and the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added(String),
    Updated(String),
    Discarded,
    Selected(String),
    Deleted(String),
    NotFound(String),
    Saved(usize),
    SaveFailed(String),
    Paused(bool),
    Reset,
    Quit,
}

impl Notice {
    fn log(&self) {
        match self {
            Notice::NotFound(_) => log::warn!("{}", self),
            Notice::SaveFailed(_) => log::error!("{}", self),
            _ => log::info!("{}", self),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added(name) => write!(f, "Added {} to memory", name),
            Notice::Updated(name) => write!(f, "Updated zone: {}", name),
            Notice::Discarded => write!(f, "No name given, zone discarded"),
            Notice::Selected(name) => write!(
                f,
                "Selected '{}' for editing. Now draw the new area for this zone.",
                name
            ),
            Notice::Deleted(name) => write!(
                f,
                "Deleted zone '{}' from memory. Press 's' to save changes.",
                name
            ),
            Notice::NotFound(name) => write!(f, "Zone '{}' not found", name),
            Notice::Saved(count) => write!(f, "Saved {} zones to file", count),
            Notice::SaveFailed(reason) => write!(f, "Failed to save zones: {}", reason),
            Notice::Paused(true) => write!(f, "Video paused"),
            Notice::Paused(false) => write!(f, "Video resumed"),
            Notice::Reset => write!(f, "Drawing mode: Draw new zones with mouse"),
            Notice::Quit => write!(f, "Quitting"),
        }
    }
}

/// Drag gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    start: Point,
    current: Point,
}

/// Zone store plus interaction state.
pub struct Session {
    store: ZoneStore,
    mode: Mode,
    /// Zone whose rectangle the next drag replaces.
    selected: Option<String>,
    drag: Option<Drag>,
    prompt: Option<Prompt>,
    paused: bool,
    quit: bool,
}

impl Session {
    pub fn new(store: ZoneStore) -> Self {
        Self {
            store,
            mode: Mode::Draw,
            selected: None,
            drag: None,
            prompt: None,
            paused: false,
            quit: false,
        }
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: Event) -> Option<Notice> {
        let notice = match event {
            Event::PointerDown(point) => {
                self.pointer_down(point);
                None
            }
            Event::PointerMove(point) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.current = point;
                }
                None
            }
            Event::PointerUp(point) => self.pointer_up(point),
            Event::Command(command) => self.command(command),
            Event::SubmitPrompt(text) => self.submit_prompt(text.trim()),
            Event::CancelPrompt => self.cancel_prompt(),
        };

        if let Some(notice) = &notice {
            notice.log();
        }
        notice
    }

    fn can_draw(&self) -> bool {
        self.prompt.is_none()
            && match self.mode {
                Mode::Draw => true,
                Mode::Edit => self.selected.is_some(),
                Mode::Delete => false,
            }
    }

    fn pointer_down(&mut self, point: Point) {
        if self.can_draw() {
            self.drag = Some(Drag {
                start: point,
                current: point,
            });
        }
    }

    fn pointer_up(&mut self, point: Point) -> Option<Notice> {
        let drag = self.drag.take()?;
        let rect = Rect::from_corners(drag.start, point);
        if rect.is_degenerate() {
            log::debug!("Zero-area rectangle {}", rect);
        }

        match self.selected.take() {
            Some(name) => {
                self.store.insert(name.clone(), rect);
                self.mode = Mode::Draw;
                Some(Notice::Updated(name))
            }
            None => {
                self.prompt = Some(Prompt::ZoneName(rect));
                None
            }
        }
    }

    fn command(&mut self, command: Command) -> Option<Notice> {
        if self.prompt.is_some() && !command.allowed_while_prompting() {
            log::debug!("Ignoring {:?} while a prompt is open", command);
            return None;
        }

        match command {
            Command::Quit => {
                self.quit = true;
                Some(Notice::Quit)
            }
            Command::Save => Some(match self.store.save() {
                Ok(count) => Notice::Saved(count),
                Err(e) => Notice::SaveFailed(format!("{:#}", e)),
            }),
            Command::Edit => {
                self.drag = None;
                self.mode = Mode::Edit;
                self.prompt = Some(Prompt::EditTarget);
                None
            }
            Command::Delete => {
                self.drag = None;
                self.mode = Mode::Delete;
                self.prompt = Some(Prompt::DeleteTarget);
                None
            }
            Command::Normal => {
                self.reset();
                Some(Notice::Reset)
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                Some(Notice::Paused(self.paused))
            }
        }
    }

    fn submit_prompt(&mut self, text: &str) -> Option<Notice> {
        match self.prompt.take()? {
            Prompt::ZoneName(rect) => {
                if text.is_empty() {
                    return Some(Notice::Discarded);
                }
                self.store.insert(text, rect);
                Some(Notice::Added(text.to_string()))
            }
            Prompt::EditTarget => {
                if self.store.contains(text) {
                    self.selected = Some(text.to_string());
                    self.mode = Mode::Edit;
                    Some(Notice::Selected(text.to_string()))
                } else {
                    self.selected = None;
                    self.mode = Mode::Draw;
                    Some(Notice::NotFound(text.to_string()))
                }
            }
            Prompt::DeleteTarget => {
                self.selected = None;
                self.mode = Mode::Draw;
                match self.store.remove(text) {
                    Some(_) => Some(Notice::Deleted(text.to_string())),
                    None => Some(Notice::NotFound(text.to_string())),
                }
            }
        }
    }

    fn cancel_prompt(&mut self) -> Option<Notice> {
        match self.prompt.take()? {
            Prompt::ZoneName(_) => Some(Notice::Discarded),
            Prompt::EditTarget | Prompt::DeleteTarget => {
                self.selected = None;
                self.mode = Mode::Draw;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Draw;
        self.selected = None;
        self.prompt = None;
        self.drag = None;
    }

    pub fn store(&self) -> &ZoneStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Normalized rectangle of the drag in progress.
    pub fn drag_rect(&self) -> Option<Rect> {
        self.drag.map(|d| Rect::from_corners(d.start, d.current))
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
