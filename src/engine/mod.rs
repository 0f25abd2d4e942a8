//! The navigation engine: three panels, a focus index, and the input loop.
//!
//! All browsing state lives here. The current directory is an explicit
//! `PathBuf` threaded through the filesystem capability, never the
//! process-wide working directory, so navigation runs the same against the
//! real filesystem or an in-memory fake. Focus is a single index into the
//! panel array; a panel is "focused" exactly when the engine says so at
//! render time, which makes focus exclusivity structural.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use crossterm::event;
use ratatui::layout::Rect;
use ratatui::style::Color;
use tracing::{debug, info, warn};

use crate::audio::TagSource;
use crate::fs::Filesystem;
use crate::panel::factory::{self, PanelKind};
use crate::panel::list::ListPanel;
use crate::panel::Panel;
use crate::ui::events::{self, AppEvent};
use crate::ui::TerminalManager;

const PREV: usize = 0;
const CURR: usize = 1;
const TAGS: usize = 2;

const TAGS_UNAVAILABLE: &str = "tags unavailable";

pub struct NavigationEngine<F, T> {
    panels: [ListPanel; 3],
    focus: usize,
    quit: bool,
    cwd: PathBuf,
    extensions: Vec<String>,
    fs: F,
    tags: T,
}

impl<F: Filesystem, T: TagSource> NavigationEngine<F, T> {
    /// Builds the three panels and loads the starting directory. Fails on
    /// a bad layout or an unusable start directory; everything after this
    /// point degrades instead of failing.
    pub fn new(
        area: Rect,
        start_dir: PathBuf,
        extensions: Vec<String>,
        accent: Color,
        fs: F,
        tags: T,
    ) -> Result<Self> {
        ensure!(
            fs.is_directory(&start_dir),
            "{} is not a directory",
            start_dir.display()
        );
        let mut panels = [
            factory::make_panel(PanelKind::PreviousDirectory, area)?,
            factory::make_panel(PanelKind::CurrentDirectory, area)?,
            factory::make_panel(PanelKind::Tags, area)?,
        ];
        for panel in &mut panels {
            panel.set_accent(accent);
        }
        let mut engine = Self {
            panels,
            focus: CURR,
            quit: false,
            cwd: start_dir,
            extensions,
            fs,
            tags,
        };
        let current = engine
            .filtered_entries(&engine.cwd)
            .with_context(|| format!("cannot list {}", engine.cwd.display()))?;
        let previous = engine.parent_entries();
        engine.panels[PREV].set_items(previous);
        engine.panels[CURR].set_items(current);
        Ok(engine)
    }

    pub fn current_directory(&self) -> &Path {
        &self.cwd
    }

    pub fn focused_index(&self) -> usize {
        self.focus
    }

    /// Render, block for one input event, dispatch, repeat until quit.
    pub fn run(&mut self, terminal: &mut TerminalManager) -> Result<()> {
        info!(dir = %self.cwd.display(), "browser loop starting");
        while !self.quit {
            self.render(terminal)?;
            let event = event::read().context("reading terminal input")?;
            if let Some(app_event) = events::translate(&event) {
                self.handle_event(app_event);
            }
        }
        info!("browser loop finished");
        Ok(())
    }

    fn render(&mut self, terminal: &mut TerminalManager) -> Result<()> {
        let focus = self.focus;
        let panels = &mut self.panels;
        terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            for (index, panel) in panels.iter_mut().enumerate() {
                panel.render(index == focus);
                panel.surface().blit_into(buf);
            }
        })
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                debug!("quit requested");
                self.quit = true;
            }
            AppEvent::MoveDown => self.panels[self.focus].move_cursor(1),
            AppEvent::MoveUp => self.panels[self.focus].move_cursor(-1),
            AppEvent::Left => self.go_left(),
            AppEvent::Right => self.go_right(),
            AppEvent::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
        }
    }

    fn go_left(&mut self) {
        match self.focus {
            CURR => self.ascend(),
            TAGS => self.set_focus(CURR),
            _ => {}
        }
    }

    fn go_right(&mut self) {
        if self.focus != CURR {
            return;
        }
        let name = match self.panels[CURR].current_item() {
            Some(name) => name.to_string(),
            None => return,
        };
        let target = self.cwd.join(&name);
        if self.fs.is_directory(&target) {
            debug!(to = %target.display(), "descending");
            self.change_directory(target);
        } else {
            self.inspect_tags(&target);
        }
    }

    fn ascend(&mut self) {
        match self.cwd.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                debug!(to = %parent.display(), "ascending");
                self.change_directory(parent);
            }
            None => debug!("already at the filesystem root"),
        }
    }

    /// Commits to `target` only once its listing is in hand; an unreadable
    /// target leaves the browser where it was.
    fn change_directory(&mut self, target: PathBuf) {
        let current = match self.filtered_entries(&target) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %target.display(), %err, "directory unreadable, staying put");
                return;
            }
        };
        self.cwd = target;
        let previous = self.parent_entries();
        self.panels[PREV].set_items(previous);
        self.panels[CURR].set_items(current);
    }

    /// Listing for the previous-directory panel: the parent's entries, or
    /// nothing at the filesystem root.
    fn parent_entries(&self) -> Vec<String> {
        match self.cwd.parent() {
            Some(parent) => self.filtered_entries(parent).unwrap_or_else(|err| {
                warn!(dir = %parent.display(), %err, "parent unreadable");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn inspect_tags(&mut self, path: &Path) {
        let rows = match self.tags.load_tags(path) {
            Ok(fields) => fields.iter().map(|field| field.display()).collect(),
            Err(err) => {
                warn!(file = %path.display(), %err, "tags unreadable");
                vec![TAGS_UNAVAILABLE.to_string()]
            }
        };
        self.panels[TAGS].set_items(rows);
        self.set_focus(TAGS);
    }

    fn set_focus(&mut self, index: usize) {
        if index < self.panels.len() {
            self.focus = index;
        }
    }

    fn resize(&mut self, area: Rect) {
        match factory::split_panels(area) {
            Ok(rects) => {
                debug!(width = area.width, height = area.height, "resizing panels");
                for (panel, rect) in self.panels.iter_mut().zip(rects) {
                    panel.resize(rect);
                }
            }
            Err(err) => warn!(%err, "ignoring resize below the minimum layout"),
        }
    }

    fn filtered_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let names = self.fs.list_entries(dir)?;
        Ok(names
            .into_iter()
            .filter(|name| self.keeps(dir, name))
            .collect())
    }

    /// Listing filter: directories and audio files stay, dotfiles and
    /// everything else go.
    fn keeps(&self, dir: &Path, name: &str) -> bool {
        if name.starts_with('.') {
            return false;
        }
        if self.fs.is_directory(&dir.join(name)) {
            return true;
        }
        self.is_audio_name(name)
    }

    fn is_audio_name(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}
