//! # View Models
//!
//! Screen-level state machines consumed by a UI layer. Each view model owns
//! its published state in a `tokio::sync::watch` channel: read the current
//! value with the accessors or `subscribe()` to be notified of changes.
//!
//! - [`LoginViewModel`]: `Loading → ShowLogin | NavigateToHeroes`
//! - [`HeroesViewModel`]: hero list with loading and error flags
//! - [`DetailsViewModel`]: one hero, its transformations and a local favorite flag
//!
//! Errors arriving from the use cases are translated into localized text
//! here, through [`messages::MessageKey`].

pub mod details;
pub mod heroes;
pub mod login;
pub mod messages;

pub use details::{DetailsViewModel, TransformationsState};
pub use heroes::{HeroesState, HeroesViewModel};
pub use login::{LoginState, LoginViewModel, UserMessage};
pub use messages::{Locale, MessageKey};

use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawn on the ambient Tokio runtime, or return `None` outside of one.
pub(crate) fn spawn_on_current<F>(future: F) -> Option<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn(future)),
        Err(e) => {
            tracing::warn!(error = %e, "No Tokio runtime for background task");
            None
        }
    }
}
