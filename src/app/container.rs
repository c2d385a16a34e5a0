//! Dependency injection container for the recall application.
//!
//! The container owns the storage adapter and the default seed, and builds the
//! avoidance store and game sessions from them.

use std::sync::Arc;

use rand::rngs::StdRng;

use super::{config::RecallConfig, session::Session};
use crate::{
    Result,
    adapters::TextFileRepository,
    memory::{AvoidanceStore, MoveSelector},
    ports::AvoidanceRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use recall::app::{App, RecallConfig};
///
/// let app = App::from_config(&RecallConfig::default())?;
/// let session = app.create_session(None);
/// # Ok::<(), recall::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use recall::app::App;
/// use recall::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// let session = app.create_session(None);
/// assert!(session.store().keys().is_empty());
/// ```
pub struct App {
    repository: Arc<dyn AvoidanceRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app storing keys in the default text files of the working
    /// directory.
    pub fn new() -> Self {
        Self {
            repository: Arc::new(TextFileRepository::default()),
            default_seed: None,
        }
    }

    /// Create an app from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the config does not
    /// validate.
    pub fn from_config(config: &RecallConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository: Arc::new(TextFileRepository::new(
                &config.concise_path,
                &config.verbose_path,
            )),
            default_seed: config.seed,
        })
    }

    /// Create a builder for constructing app with custom dependencies.
    ///
    /// Primarily used for testing with in-memory storage.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the avoidance repository.
    pub fn repository(&self) -> Arc<dyn AvoidanceRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Load the avoidance store. Unreadable storage yields an empty store.
    pub fn open_store(&self) -> AvoidanceStore {
        AvoidanceStore::open(self.repository())
    }

    /// Load the store and wrap it in a session ready to play.
    ///
    /// `seed` overrides the app's default seed.
    pub fn create_session(&self, seed: Option<u64>) -> Session<StdRng> {
        let selector = MoveSelector::seeded(seed.or(self.default_seed));
        Session::new(self.open_store(), selector)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
pub struct AppBuilder {
    repository: Option<Arc<dyn AvoidanceRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom avoidance repository.
    pub fn with_repository<R: AvoidanceRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for every session created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses the default text files.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(TextFileRepository::default())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{InMemoryRepository, ScriptedHuman},
        memory::AvoidanceSet,
        ports::SilentObserver,
        types::MoveKey,
    };

    #[test]
    fn test_session_sees_stored_keys() {
        let keys: AvoidanceSet = [MoveKey::parse("153").unwrap()].into_iter().collect();
        let app = App::for_testing()
            .with_repository(InMemoryRepository::with_keys(keys.clone()))
            .build();

        let session = app.create_session(Some(1));
        assert_eq!(session.store().keys(), &keys);
    }

    #[test]
    fn test_default_seed_makes_sessions_repeatable() {
        let app = App::for_testing()
            .with_repository(InMemoryRepository::new())
            .with_default_seed(42)
            .build();

        let opening = || {
            let mut session = app.create_session(None);
            let mut human = ScriptedHuman::default();
            session
                .play_game(&mut human, &mut SilentObserver)
                .unwrap()
                .plies[0]
        };
        assert_eq!(opening(), opening());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = RecallConfig::default().with_verbose_path("tttConcise.log");
        assert!(App::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_carries_seed() {
        let config = RecallConfig::default().with_seed(9);
        let app = App::from_config(&config).unwrap();
        assert_eq!(app.default_seed(), Some(9));
    }
}
