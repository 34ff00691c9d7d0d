//! TUI module for the interactive ticket browser

pub mod browser;
pub mod components;
pub mod keymap;
pub mod navigation;
pub mod state;
pub mod theme;
pub mod validate;

pub use browser::{TicketBrowser, TicketBrowserProps};
pub use keymap::{BrowserAction, key_to_action};
pub use state::Pane;
pub use theme::Theme;

use iocraft::prelude::*;

use crate::error::Result;
use crate::store::TicketStore;

/// Launch the ticket browser over the given store. Blocks until the user
/// quits.
pub async fn run(store: TicketStore) -> Result<()> {
    element!(TicketBrowser(initial: Some(store)))
        .fullscreen()
        .await?;
    Ok(())
}
