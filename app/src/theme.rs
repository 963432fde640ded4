//! Theme preference store.
//!
//! The theme runs as its own small store, independent of the todo list.
//! The preference is restored from storage on startup and persisted on
//! every toggle; both directions go through the [`ThemeStorage`]
//! provider so tests run against an in-memory implementation.

use std::path::PathBuf;
use taskwire_core::effect::Effect;
use taskwire_core::reducer::Reducer;
use taskwire_core::{SmallVec, smallvec};
use taskwire_macros::Action;

/// Visual theme of the client
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light theme, the default when nothing is persisted
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the persisted literal for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal, falling back to light.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the theme store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// Current theme
    pub theme: Theme,
}

/// Actions of the theme store
#[derive(Action, Clone, Debug, PartialEq)]
pub enum ThemeAction {
    // ========== Commands ==========
    /// Command: Restore the persisted preference
    #[command]
    Load,

    /// Command: Switch to the opposite theme
    #[command]
    Toggled,

    // ========== Responses ==========
    /// Response: Storage yielded a preference
    #[response]
    Loaded {
        /// Restored theme
        theme: Theme,
    },

    /// Response: Persisting the preference failed
    #[response]
    PersistFailed {
        /// Underlying error message
        error: String,
    },
}

/// Persistence provider for the theme preference.
///
/// Implementations store the literal strings `light` and `dark`.
pub trait ThemeStorage: Send + Sync {
    /// Read the persisted preference.
    ///
    /// Returns `None` when nothing usable is stored.
    fn load(&self) -> impl std::future::Future<Output = Option<Theme>> + Send;

    /// Persist the preference.
    fn store(&self, theme: Theme) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

/// Theme storage backed by a plain file.
///
/// The file holds the literal `light` or `dark`. A missing or
/// unreadable file restores the default.
#[derive(Clone, Debug)]
pub struct FileThemeStorage {
    /// Path of the preference file
    path: PathBuf,
}

/// Fallback preference file, relative to the working directory
const DEFAULT_THEME_FILE: &str = ".taskwire-theme";

impl FileThemeStorage {
    /// Create a storage configured from `TASKWIRE_THEME_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        let path = std::env::var("TASKWIRE_THEME_FILE")
            .unwrap_or_else(|_| DEFAULT_THEME_FILE.to_string());
        Self::new(path)
    }

    /// Create a storage over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStorage for FileThemeStorage {
    fn load(&self) -> impl std::future::Future<Output = Option<Theme>> + Send {
        let path = self.path.clone();

        async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => Some(Theme::parse(contents.trim())),
                Err(_) => None,
            }
        }
    }

    fn store(&self, theme: Theme) -> impl std::future::Future<Output = std::io::Result<()>> + Send {
        let path = self.path.clone();

        async move { tokio::fs::write(&path, theme.as_str()).await }
    }
}

/// Environment of the theme store
#[derive(Clone)]
pub struct ThemeEnvironment<S>
where
    S: ThemeStorage + Clone,
{
    /// Preference storage
    storage: S,
}

impl<S> ThemeEnvironment<S>
where
    S: ThemeStorage + Clone + Send + Sync + 'static,
{
    /// Create an environment over the given storage.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create effect to restore the persisted preference.
    fn load(&self) -> Effect<ThemeAction> {
        let storage = self.storage.clone();

        Effect::Future(Box::pin(async move {
            let theme = storage.load().await.unwrap_or_default();
            Some(ThemeAction::Loaded { theme })
        }))
    }

    /// Create effect to persist the preference.
    ///
    /// Resolves to nothing on success; the write is fire-and-forget.
    fn persist(&self, theme: Theme) -> Effect<ThemeAction> {
        let storage = self.storage.clone();

        Effect::Future(Box::pin(async move {
            match storage.store(theme).await {
                Ok(()) => None,
                Err(e) => Some(ThemeAction::PersistFailed {
                    error: e.to_string(),
                }),
            }
        }))
    }
}

/// Reducer for the theme store.
///
/// Toggling applies immediately and persists in the background; the
/// restored preference simply overwrites the default.
#[derive(Debug, Clone)]
pub struct ThemeReducer<S> {
    /// Phantom data to hold the storage type parameter.
    _phantom: std::marker::PhantomData<S>,
}

impl<S> ThemeReducer<S> {
    /// Create a new theme reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S> Default for ThemeReducer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Reducer for ThemeReducer<S>
where
    S: ThemeStorage + Clone + Send + Sync + 'static,
{
    type State = ThemeState;
    type Action = ThemeAction;
    type Environment = ThemeEnvironment<S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ThemeAction::Load => smallvec![env.load()],

            ThemeAction::Toggled => {
                state.theme = state.theme.toggled();
                smallvec![env.persist(state.theme)]
            }

            ThemeAction::Loaded { theme } => {
                state.theme = theme;
                smallvec![Effect::None]
            }

            ThemeAction::PersistFailed { error } => {
                // The in-memory theme stays switched; only the file write
                // failed.
                tracing::warn!(error = %error, "failed to persist theme preference");
                smallvec![Effect::None]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use taskwire_runtime::Store;
    use taskwire_testing::{ReducerTest, assertions};

    /// In-memory storage for reducer and store tests
    #[derive(Clone, Default)]
    struct MemoryThemeStorage {
        saved: Arc<Mutex<Option<Theme>>>,
    }

    #[allow(clippy::unwrap_used)] // Lock poisoning means a test already failed
    impl MemoryThemeStorage {
        fn with_saved(theme: Theme) -> Self {
            let storage = Self::default();
            *storage.saved.lock().unwrap() = Some(theme);
            storage
        }

        fn saved(&self) -> Option<Theme> {
            *self.saved.lock().unwrap()
        }
    }

    #[allow(clippy::unwrap_used)] // Lock poisoning means a test already failed
    impl ThemeStorage for MemoryThemeStorage {
        fn load(&self) -> impl std::future::Future<Output = Option<Theme>> + Send {
            let saved = self.saved.clone();
            async move { *saved.lock().unwrap() }
        }

        fn store(&self, theme: Theme) -> impl std::future::Future<Output = std::io::Result<()>> + Send {
            let saved = self.saved.clone();
            async move {
                *saved.lock().unwrap() = Some(theme);
                Ok(())
            }
        }
    }

    fn test_reducer() -> ThemeReducer<MemoryThemeStorage> {
        ThemeReducer::new()
    }

    #[test]
    fn test_toggled_flips_and_schedules_persist() {
        ReducerTest::new(test_reducer())
            .with_env(ThemeEnvironment::new(MemoryThemeStorage::default()))
            .given_state(ThemeState::default())
            .when_action(ThemeAction::Toggled)
            .then_state(|state| {
                assert_eq!(state.theme, Theme::Dark);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let reducer = test_reducer();
        let env = ThemeEnvironment::new(MemoryThemeStorage::default());
        let mut state = ThemeState::default();

        reducer.reduce(&mut state, ThemeAction::Toggled, &env);
        assert_eq!(state.theme, Theme::Dark);

        reducer.reduce(&mut state, ThemeAction::Toggled, &env);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_loaded_applies_saved_preference() {
        ReducerTest::new(test_reducer())
            .with_env(ThemeEnvironment::new(MemoryThemeStorage::default()))
            .given_state(ThemeState::default())
            .when_action(ThemeAction::Loaded { theme: Theme::Dark })
            .then_state(|state| {
                assert_eq!(state.theme, Theme::Dark);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_persist_failure_keeps_switched_theme() {
        ReducerTest::new(test_reducer())
            .with_env(ThemeEnvironment::new(MemoryThemeStorage::default()))
            .given_state(ThemeState { theme: Theme::Dark })
            .when_action(ThemeAction::PersistFailed {
                error: "read-only file system".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.theme, Theme::Dark);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_parse_falls_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("sparkly"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[tokio::test]
    async fn test_store_restores_persisted_theme() {
        let storage = MemoryThemeStorage::with_saved(Theme::Dark);
        let store = Store::new(
            ThemeState::default(),
            ThemeReducer::new(),
            ThemeEnvironment::new(storage),
        );

        #[allow(clippy::unwrap_used)] // Test will fail if the send is rejected
        let mut handle = store.send(ThemeAction::Load).await.unwrap();
        handle.wait().await;

        let theme = store.state(|s| s.theme).await;
        assert_eq!(theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_store_toggle_persists() {
        let storage = MemoryThemeStorage::default();
        let store = Store::new(
            ThemeState::default(),
            ThemeReducer::new(),
            ThemeEnvironment::new(storage.clone()),
        );

        #[allow(clippy::unwrap_used)] // Test will fail if the send is rejected
        let mut handle = store.send(ThemeAction::Toggled).await.unwrap();
        handle.wait().await;

        assert_eq!(storage.saved(), Some(Theme::Dark));
        assert_eq!(store.state(|s| s.theme).await, Theme::Dark);
    }

    #[tokio::test]
    #[allow(clippy::unwrap_used)] // Test will fail if file I/O fails
    async fn test_file_storage_round_trips() {
        let path = std::env::temp_dir().join(format!("taskwire-theme-{}", std::process::id()));
        let storage = FileThemeStorage::new(&path);

        storage.store(Theme::Dark).await.unwrap();
        assert_eq!(storage.load().await, Some(Theme::Dark));

        tokio::fs::write(&path, "sparkly\n").await.unwrap();
        assert_eq!(storage.load().await, Some(Theme::Light));

        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(storage.load().await, None);
    }
}
