//! Hero detail screen: transformations of one hero and a local favorite flag.

use shared::{hero_id_param, Hero, Transformation};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::spawn_on_current;
use crate::use_case::TransformationUseCase;

/// Load state of a hero's transformations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformationsState {
    Loading,
    /// Nothing to show: the hero has none, or loading failed.
    Empty,
    Loaded(Vec<Transformation>),
}

/// Detail screen of a single hero.
///
/// Loads the transformations on construction. The favorite flag is local to
/// this view model and never sent to the server.
pub struct DetailsViewModel {
    hero: Hero,
    transformations: Arc<watch::Sender<TransformationsState>>,
    favorite: watch::Sender<Option<bool>>,
    load: Option<JoinHandle<()>>,
}

impl DetailsViewModel {
    /// Must be created inside a Tokio runtime.
    pub fn new(hero: Hero, use_case: Arc<dyn TransformationUseCase>) -> Self {
        let transformations = Arc::new(watch::channel(TransformationsState::Loading).0);
        let (favorite, _) = watch::channel(hero.favorite);

        let id = hero_id_param(&hero.id);
        let publish = Arc::clone(&transformations);
        let load = spawn_on_current(async move {
            let state = match use_case.get_transformations(&id).await {
                Ok(list) if list.is_empty() => TransformationsState::Empty,
                Ok(list) => {
                    tracing::info!(hero_id = %id, count = list.len(), "Transformations loaded");
                    TransformationsState::Loaded(list)
                }
                Err(e) => {
                    tracing::warn!(hero_id = %id, error = ?e, "Failed to load transformations");
                    TransformationsState::Empty
                }
            };
            publish.send_replace(state);
        });
        if load.is_none() {
            tracing::warn!("No runtime available, transformations not loaded");
            transformations.send_replace(TransformationsState::Empty);
        }

        Self {
            hero,
            transformations,
            favorite,
            load,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn transformations_state(&self) -> TransformationsState {
        self.transformations.borrow().clone()
    }

    /// The loaded list, or `None` while loading or when there is nothing to show.
    pub fn transformations(&self) -> Option<Vec<Transformation>> {
        match &*self.transformations.borrow() {
            TransformationsState::Loaded(list) => Some(list.clone()),
            TransformationsState::Loading | TransformationsState::Empty => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.transformations.borrow(), TransformationsState::Loading)
    }

    pub fn subscribe(&self) -> watch::Receiver<TransformationsState> {
        self.transformations.subscribe()
    }

    pub fn favorite(&self) -> Option<bool> {
        *self.favorite.borrow()
    }

    pub fn subscribe_favorite(&self) -> watch::Receiver<Option<bool>> {
        self.favorite.subscribe()
    }

    /// Flip the favorite flag. An unknown flag becomes `true`.
    pub fn toggle_favorite(&self) {
        self.favorite
            .send_modify(|favorite| *favorite = Some(!favorite.unwrap_or(false)));
    }
}

impl Drop for DetailsViewModel {
    fn drop(&mut self) {
        if let Some(load) = self.load.take() {
            load.abort();
        }
    }
}
