//! Application state and key handling.
//!
//! `App` owns the game controller and the string catalog; every
//! user-facing string is resolved here through the catalog so the
//! widgets never embed literal text.

use crossterm::event::KeyCode;
use noughts_core::{Game, GameStatus, Player};
use noughts_i18n::StringCatalog;
use tracing::{debug, instrument};

use crate::input::move_cursor;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor; Enter places a mark.
    #[default]
    Board,
    /// Arrow keys move the history selection; Enter jumps to a step.
    History,
}

impl Focus {
    /// Toggles between the two panes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
pub struct App {
    game: Game,
    catalog: StringCatalog,
    locale: String,
    cursor: usize,
    selected: usize,
    focus: Focus,
}

impl App {
    /// Creates the application with a loaded catalog and starting locale.
    pub fn new(catalog: StringCatalog, locale: String) -> Self {
        Self {
            game: Game::new(),
            catalog,
            locale,
            cursor: 4,
            selected: 0,
            focus: Focus::Board,
        }
    }

    /// Returns the game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board cursor position (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the history step under the selection bar.
    pub fn selected_step(&self) -> usize {
        self.selected
    }

    /// Returns the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the active locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Routes a key press. Quit is handled by the event loop, not here.
    #[instrument(skip(self))]
    pub fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                let _ = self.game.click(idx);
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::History {
                    self.selected = self.game.current_step();
                }
            }
            KeyCode::Char('s') => self.game.toggle_order(),
            KeyCode::Char('l') => self.next_locale(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => {
                    let _ = self.game.click(self.cursor);
                }
                Focus::History => self.game.jump_to(self.selected),
            },
            _ => {}
        }
        // A truncating click can leave the selection past the end.
        if self.selected >= self.game.history().len() {
            self.selected = self.game.history().len() - 1;
        }
    }

    /// Moves the history selection one row in the rendered direction.
    fn move_selection(&mut self, key: KeyCode) {
        let order = self.game.display_order();
        let Some(pos) = order.iter().position(|&step| step == self.selected) else {
            return;
        };
        let pos = match key {
            KeyCode::Up if pos > 0 => pos - 1,
            KeyCode::Down if pos + 1 < order.len() => pos + 1,
            _ => pos,
        };
        self.selected = order[pos];
    }

    /// Starts a fresh game, keeping locale and sort preference.
    fn restart(&mut self) {
        debug!("restarting game");
        let ascending = self.game.is_ascending();
        self.game = Game::new();
        if !ascending {
            self.game.toggle_order();
        }
        self.selected = 0;
        self.cursor = 4;
    }

    /// Switches to the next loaded locale, cyclically.
    fn next_locale(&mut self) {
        let locales: Vec<String> = self.catalog.locales().map(str::to_string).collect();
        if locales.is_empty() {
            return;
        }
        let next = match locales.iter().position(|tag| *tag == self.locale) {
            Some(pos) => locales[(pos + 1) % locales.len()].clone(),
            None => locales[0].clone(),
        };
        debug!(from = %self.locale, to = %next, "switching locale");
        self.locale = next;
    }

    fn text(&self, key: &str, args: &[(&str, &str)]) -> String {
        // A missing key renders as the key itself; better a visible
        // marker than a crash or silent blank.
        self.catalog
            .format(&self.locale, key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Localized window title.
    pub fn title(&self) -> String {
        self.text("game.title", &[])
    }

    /// Localized status line: winner, draw, or next player.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => {
                let mark = player.to_string();
                self.text("game.winner", &[("player", &mark)])
            }
            GameStatus::Draw => self.text("game.draw", &[]),
            GameStatus::Next(player) => {
                let mark = player.to_string();
                self.text("game.next", &[("player", &mark)])
            }
        }
    }

    /// Localized key-binding help line.
    pub fn help_line(&self) -> String {
        self.text("help.line", &[])
    }

    /// Localized title of the history pane.
    pub fn history_title(&self) -> String {
        self.text("history.title", &[])
    }

    /// Localized label for one history step.
    pub fn history_label(&self, step: usize) -> String {
        if step == 0 {
            return self.text("history.go_to_start", &[]);
        }
        // Move 1 was played by X, move 2 by O, and so on.
        let player = if step % 2 == 1 { Player::X } else { Player::O };
        let coord = self
            .game
            .history()
            .get(step)
            .and_then(|entry| entry.moved());
        let (row, col) = match coord {
            Some(coord) => (coord.row.to_string(), coord.col.to_string()),
            None => (String::new(), String::new()),
        };
        let step_text = step.to_string();
        let mark = player.to_string();
        self.text(
            "history.go_to",
            &[
                ("step", &step_text),
                ("player", &mark),
                ("row", &row),
                ("col", &col),
            ],
        )
    }

    /// Localized sort-order line, e.g. "Sort order: ascending".
    pub fn sort_line(&self) -> String {
        let direction = if self.game.is_ascending() {
            self.text("history.sort.asc", &[])
        } else {
            self.text("history.sort.desc", &[])
        };
        format!("{} {}", self.text("history.sort.label", &[]), direction)
    }

    /// Pluralized move counter, with `<b>` markup around the count.
    pub fn moves_line(&self) -> String {
        let moves = self.game.history().len() as i64 - 1;
        self.catalog
            .format_plural(&self.locale, "history.moves", moves, &[])
            .unwrap_or_else(|| moves.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_i18n::LocaleStrings;

    fn test_app() -> App {
        let mut catalog = StringCatalog::new();
        let en = LocaleStrings::from_toml_str(include_str!("../locales/en.toml")).unwrap();
        let fr = LocaleStrings::from_toml_str(include_str!("../locales/fr.toml")).unwrap();
        catalog.add_locale("en", en);
        catalog.add_locale("fr", fr);
        App::new(catalog, "en".to_string())
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = test_app();
        app.on_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.status_line(), "Next player: O");
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = test_app();
        app.on_key(KeyCode::Left);
        app.on_key(KeyCode::Enter);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(
            app.game().history().get(1).unwrap().moved().unwrap().col,
            1
        );
    }

    #[test]
    fn test_tab_focuses_history_on_current_step() {
        let mut app = test_app();
        app.on_key(KeyCode::Char('1'));
        app.on_key(KeyCode::Char('2'));
        app.on_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_history_navigation_and_jump() {
        let mut app = test_app();
        for key in ['1', '5', '9'] {
            app.on_key(KeyCode::Char(key));
        }
        app.on_key(KeyCode::Tab);
        app.on_key(KeyCode::Up);
        app.on_key(KeyCode::Up);
        assert_eq!(app.selected_step(), 1);
        app.on_key(KeyCode::Enter);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_selection_moves_in_rendered_direction_when_descending() {
        let mut app = test_app();
        for key in ['1', '5'] {
            app.on_key(KeyCode::Char(key));
        }
        app.on_key(KeyCode::Char('s'));
        app.on_key(KeyCode::Tab);
        // Descending order renders [2, 1, 0]; Down moves toward step 0.
        assert_eq!(app.selected_step(), 2);
        app.on_key(KeyCode::Down);
        assert_eq!(app.selected_step(), 1);
        app.on_key(KeyCode::Down);
        assert_eq!(app.selected_step(), 0);
    }

    #[test]
    fn test_history_labels() {
        let mut app = test_app();
        app.on_key(KeyCode::Char('1'));
        app.on_key(KeyCode::Char('5'));
        assert_eq!(app.history_label(0), "Go to game start");
        assert_eq!(app.history_label(1), "Go to move #1: X at row 1, col 1");
        assert_eq!(app.history_label(2), "Go to move #2: O at row 2, col 2");
    }

    #[test]
    fn test_locale_cycling_changes_strings() {
        let mut app = test_app();
        assert_eq!(app.sort_line(), "Sort order: ascending");
        app.on_key(KeyCode::Char('l'));
        assert_eq!(app.locale(), "fr");
        assert_eq!(app.sort_line(), "Ordre de tri : croissant");
    }

    #[test]
    fn test_moves_line_pluralizes() {
        let mut app = test_app();
        assert_eq!(app.moves_line(), "<b>0</b> moves played");
        app.on_key(KeyCode::Char('1'));
        assert_eq!(app.moves_line(), "<b>1</b> move played");
        app.on_key(KeyCode::Char('2'));
        assert_eq!(app.moves_line(), "<b>2</b> moves played");
    }

    #[test]
    fn test_restart_keeps_sort_preference() {
        let mut app = test_app();
        app.on_key(KeyCode::Char('1'));
        app.on_key(KeyCode::Char('s'));
        app.on_key(KeyCode::Char('r'));
        assert_eq!(app.game().history().len(), 1);
        assert!(!app.game().is_ascending());
    }

    #[test]
    fn test_selection_clamped_after_truncating_click() {
        let mut app = test_app();
        for key in ['1', '5', '9', '3'] {
            app.on_key(KeyCode::Char(key));
        }
        app.on_key(KeyCode::Tab);
        app.on_key(KeyCode::Up);
        app.on_key(KeyCode::Up);
        app.on_key(KeyCode::Up);
        app.on_key(KeyCode::Enter); // jump to step 1
        app.on_key(KeyCode::Tab); // back to the board
        app.on_key(KeyCode::Char('7')); // truncates steps 2-4
        assert!(app.selected_step() < app.game().history().len());
    }
}
