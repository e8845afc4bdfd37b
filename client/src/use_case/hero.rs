//! Hero list use case.

use async_trait::async_trait;
use shared::Hero;
use std::sync::Arc;

use super::ordering::compare_case_insensitive;
use crate::core::error::Result;
use crate::repository::HeroRepository;
use crate::store::SessionStore;

/// Hero list orchestration.
#[async_trait]
pub trait HeroUseCase: Send + Sync {
    /// Heroes matching `filter`, sorted by name (case-insensitive, stable).
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>>;

    /// Forget the stored session token.
    fn logout(&self);
}

pub struct DefaultHeroUseCase {
    repo: Arc<dyn HeroRepository>,
    session: Arc<SessionStore>,
}

impl DefaultHeroUseCase {
    pub fn new(repo: Arc<dyn HeroRepository>, session: Arc<SessionStore>) -> Self {
        Self { repo, session }
    }
}

#[async_trait]
impl HeroUseCase for DefaultHeroUseCase {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>> {
        let heroes = self.repo.get_heroes(filter).await?;
        Ok(sort_heroes(heroes))
    }

    fn logout(&self) {
        if let Err(e) = self.session.delete() {
            tracing::warn!(error = %e, "Failed to delete session token on logout");
        }
    }
}

/// Sort ascending by name, ignoring case. Ties keep their input order.
pub fn sort_heroes(mut heroes: Vec<Hero>) -> Vec<Hero> {
    heroes.sort_by(|a, b| compare_case_insensitive(&a.name, &b.name));
    heroes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::fakes::{hero, HeroServiceFake, HeroServiceScenario};
    use crate::repository::DefaultHeroRepository;

    /// Repository returning a fixed list.
    struct FixedHeroes(Vec<Hero>);

    #[async_trait]
    impl HeroRepository for FixedHeroes {
        async fn get_heroes(&self, _filter: &str) -> Result<Vec<Hero>> {
            Ok(self.0.clone())
        }
    }

    fn use_case_with(heroes: Vec<Hero>) -> DefaultHeroUseCase {
        DefaultHeroUseCase::new(Arc::new(FixedHeroes(heroes)), Arc::new(SessionStore::in_memory()))
    }

    fn names(heroes: &[Hero]) -> Vec<&str> {
        heroes.iter().map(|h| h.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_get_heroes_sorts_case_insensitively() {
        let use_case = use_case_with(vec![hero(1, "vegeta"), hero(2, "Goku"), hero(3, "piccolo")]);

        let heroes = use_case.get_heroes("").await.unwrap();

        assert_eq!(names(&heroes), ["Goku", "piccolo", "vegeta"]);
    }

    #[tokio::test]
    async fn test_get_heroes_sort_is_stable_for_case_ties() {
        let use_case = use_case_with(vec![hero(1, "goku"), hero(2, "Goku"), hero(3, "Bulma")]);

        let heroes = use_case.get_heroes("").await.unwrap();

        assert_eq!(names(&heroes), ["Bulma", "goku", "Goku"]);
        assert_eq!(heroes[1].id, hero(1, "").id);
    }

    #[test]
    fn test_sort_heroes_places_accented_names_by_base_letter() {
        let heroes = sort_heroes(vec![
            hero(1, "Zarbon"),
            hero(2, "Ángel"),
            hero(3, "bulma"),
            hero(4, "Éxodo"),
        ]);

        assert_eq!(names(&heroes), ["Ángel", "bulma", "Éxodo", "Zarbon"]);
    }

    #[tokio::test]
    async fn test_get_heroes_propagates_errors() {
        let service = HeroServiceFake::new(HeroServiceScenario::Error);
        let repo = DefaultHeroRepository::new(Arc::new(service));
        let use_case = DefaultHeroUseCase::new(Arc::new(repo), Arc::new(SessionStore::in_memory()));

        assert_eq!(use_case.get_heroes("").await, Err(AppError::Network));
    }

    #[tokio::test]
    async fn test_get_heroes_with_service_fake_filter() {
        let service = HeroServiceFake::new(HeroServiceScenario::Success);
        let repo = DefaultHeroRepository::new(Arc::new(service));
        let use_case = DefaultHeroUseCase::new(Arc::new(repo), Arc::new(SessionStore::in_memory()));

        assert_eq!(names(&use_case.get_heroes("").await.unwrap()), ["Goku", "Piccolo", "Vegeta"]);
        assert_eq!(names(&use_case.get_heroes("o").await.unwrap()), ["Goku", "Piccolo"]);
    }

    #[test]
    fn test_logout_deletes_token() {
        let session = Arc::new(SessionStore::in_memory());
        session.save("token").unwrap();
        let use_case = DefaultHeroUseCase::new(Arc::new(FixedHeroes(Vec::new())), session.clone());

        use_case.logout();

        assert_eq!(session.load(), None);
    }
}
