//! Typed state storage shared between the business layer and the UI.
//!
//! A [`StateCtx`] owns one value per [`State`] type. Async work never touches
//! the context directly: it holds an [`Updater`] and sends replacements or
//! patches, which the owner applies on its own thread with [`StateCtx::sync`].

mod ctx;
mod error;
mod state;
mod task;

pub use ctx::StateCtx;
pub use error::Error;
pub use state::{State, Updater};
pub use task::spawn;
