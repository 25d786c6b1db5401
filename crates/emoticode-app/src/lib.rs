//! Message composer for chat front-ends.
//!
//! A pure state machine for an input line with live emoji completion. The
//! host feeds it [`KeyInput`]s and executes the [`ComposerAction`]s it
//! returns, so the same code runs under a terminal, a GUI, or a test.
//!
//! # Components
//!
//! - [`Composer`]: buffer, cursor and suggestion state
//! - [`KeyInput`]: platform-independent key events
//! - [`ComposerAction`]: side-effects for the host

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod composer;
mod input;

pub use action::ComposerAction;
pub use composer::Composer;
pub use input::KeyInput;
