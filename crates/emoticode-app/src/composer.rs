//! Message composer state machine.
//!
//! [`Composer`] owns the text being typed (buffer, cursor) and the emoji
//! suggestions for it. It consumes [`KeyInput`]s and produces
//! [`ComposerAction`]s; it never touches a terminal or the network.
//!
//! # Responsibilities
//!
//! - Edits the buffer on character and cursor keys.
//! - Recomputes completions whenever the text or cursor changes.
//! - Replaces the typed `:prefix` with the chosen glyph on Tab/Enter.
//! - Replaces shortcodes in the finished message on Enter.

use std::sync::Arc;

use emoticode_core::{Alphabetical, EmojiResolver, Ranker, Suggestion, scan};

use crate::{ComposerAction, KeyInput};

/// Input line with live emoji completion.
///
/// The cursor counts chars, not bytes, so multi-byte glyphs move as one
/// position.
#[derive(Debug, Clone)]
pub struct Composer {
    resolver: EmojiResolver,
    ranker: Arc<dyn Ranker>,
    /// Text being composed.
    buffer: String,
    /// Cursor position in chars, `0..=buffer.chars().count()`.
    cursor: usize,
    /// Completions for the token at the cursor. Empty when none is open.
    suggestions: Vec<Suggestion>,
    /// Highlighted suggestion. Always `< suggestions.len()` when any exist.
    selected: usize,
}

impl Composer {
    /// Create an empty composer ranking suggestions alphabetically.
    pub fn new(resolver: EmojiResolver) -> Self {
        Self {
            resolver,
            ranker: Arc::new(Alphabetical),
            buffer: String::new(),
            cursor: 0,
            suggestions: Vec::new(),
            selected: 0,
        }
    }

    /// Use `ranker` to order suggestions.
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.set_ranker(ranker);
        self
    }

    /// Replace the ranker, e.g. after the host updated usage weights.
    pub fn set_ranker(&mut self, ranker: Arc<dyn Ranker>) {
        self.ranker = ranker;
        self.refresh();
    }

    /// Handle a key input event.
    ///
    /// Returns actions for the host; empty when the key did nothing.
    pub fn handle_key(&mut self, key: KeyInput) -> Vec<ComposerAction> {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                self.edited()
            },
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return vec![];
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                self.edited()
            },
            KeyInput::Delete => {
                if self.cursor >= self.len() {
                    return vec![];
                }
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                self.edited()
            },
            KeyInput::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyInput::Right => self.move_to((self.cursor + 1).min(self.len())),
            KeyInput::Home => self.move_to(0),
            KeyInput::End => self.move_to(self.len()),
            KeyInput::Up => self.cycle(false),
            KeyInput::Down => self.cycle(true),
            KeyInput::Tab => {
                if self.suggestions.is_empty() {
                    vec![]
                } else {
                    self.accept()
                }
            },
            KeyInput::Enter => {
                if self.suggestions.is_empty() {
                    self.submit()
                } else {
                    self.accept()
                }
            },
            KeyInput::Esc => {
                if self.suggestions.is_empty() {
                    vec![ComposerAction::Quit]
                } else {
                    self.suggestions.clear();
                    self.selected = 0;
                    vec![ComposerAction::Render]
                }
            },
        }
    }

    /// Current text in the buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completions for the shortcode at the cursor.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlighted suggestion. `None` if no suggestions are open.
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.selected)
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        scan::byte_offset(&self.buffer, cursor).unwrap_or(self.buffer.len())
    }

    fn edited(&mut self) -> Vec<ComposerAction> {
        self.refresh();
        vec![ComposerAction::Render]
    }

    fn move_to(&mut self, cursor: usize) -> Vec<ComposerAction> {
        if cursor == self.cursor {
            return vec![];
        }
        self.cursor = cursor;
        self.edited()
    }

    fn refresh(&mut self) {
        let limit = self.resolver.config().default_limit;
        self.suggestions =
            self.resolver.suggest_ranked(&self.buffer, self.cursor, limit, self.ranker.as_ref());
        self.selected = 0;
    }

    fn cycle(&mut self, forward: bool) -> Vec<ComposerAction> {
        let count = self.suggestions.len();
        if count == 0 {
            return vec![];
        }
        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        vec![ComposerAction::Render]
    }

    /// Replace the typed `:prefix` with the highlighted glyph and a space.
    fn accept(&mut self) -> Vec<ComposerAction> {
        let Some(suggestion) = self.suggestions.get(self.selected).cloned() else {
            return vec![];
        };
        let Some((token_start, token_end)) =
            scan::active_token(&self.buffer, self.cursor).map(|token| (token.start, token.end))
        else {
            self.suggestions.clear();
            return vec![ComposerAction::Render];
        };

        let start = self.byte_index(token_start);
        let end = self.byte_index(token_end);
        let insert = format!("{} ", suggestion.code);
        self.buffer.replace_range(start..end, &insert);
        self.cursor = token_start + insert.chars().count();
        self.refresh();

        tracing::debug!(name = %suggestion.name, "emoji suggestion accepted");
        vec![ComposerAction::EmojiUsed { name: suggestion.name }, ComposerAction::Render]
    }

    /// Send the buffer with shortcodes replaced and start over.
    fn submit(&mut self) -> Vec<ComposerAction> {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.suggestions.clear();
        self.selected = 0;

        if text.trim().is_empty() {
            return vec![];
        }

        let message = self.resolver.replace_shortcodes(&text).into_owned();
        vec![ComposerAction::Submit { message }, ComposerAction::Render]
    }
}
