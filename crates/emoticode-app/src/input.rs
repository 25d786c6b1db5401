//! Keys understood by the composer.
//!
//! Hosts translate their own key events (crossterm, a browser, a test
//! script) into [`KeyInput`] before calling
//! [`crate::Composer::handle_key`]. Keys the composer does not list here
//! (function keys, modifiers on their own) are dropped by the host.
//!
//! Several keys change meaning while a suggestion list is open:
//!
//! | Key | List open | List closed |
//! |-----|-----------|-------------|
//! | `Tab` | insert highlighted glyph | nothing |
//! | `Enter` | insert highlighted glyph | send the message |
//! | `Up` / `Down` | move the highlight, wrapping | nothing |
//! | `Esc` | close the list | quit |

/// A key press fed to the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Insert a char at the cursor. `:` opens a shortcode when it starts the
    /// text or follows whitespace.
    Char(char),
    /// Remove the char before the cursor. Ignored at position 0.
    Backspace,
    /// Remove the char under the cursor. Ignored at the end of the text.
    Delete,

    /// One char left. Stepping back into a `:prefix` reopens its list.
    Left,
    /// One char right.
    Right,
    /// Start of the text.
    Home,
    /// End of the text.
    End,

    /// Highlight the previous suggestion.
    Up,
    /// Highlight the next suggestion.
    Down,
    /// Accept the highlighted suggestion.
    Tab,
    /// Accept the highlighted suggestion, or send when none is open.
    Enter,
    /// Close the suggestion list, or quit when none is open.
    Esc,
}
