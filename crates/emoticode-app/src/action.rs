//! Composer side-effects.
//!
//! This module defines the [`ComposerAction`] enum, instructions produced by
//! the [`crate::Composer`] for the host UI to execute.

/// Actions produced by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    /// Redraw the input line and suggestion list.
    Render,

    /// Quit the composer.
    Quit,

    /// Send a finished message.
    Submit {
        /// Message text with recognized shortcodes replaced by glyphs.
        message: String,
    },

    /// A suggestion was inserted.
    ///
    /// Hosts that rank by usage count this toward the emoji's weight.
    EmojiUsed {
        /// Canonical shortcode name.
        name: String,
    },
}
