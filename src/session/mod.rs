//! Per-session humanizer instances.
//!
//! A hosting UI keeps one [`Humanizer`] per user session so histories never
//! mix between users. The store creates an instance lazily the first time a
//! session uses it and hands its history back when the session ends.

use crate::config::HumanizerConfig;
use crate::error::HumanizeError;
use crate::history::TransformationHistory;
use crate::humanizer::Humanizer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use uuid::Uuid;

/// Owns one humanizer per session id.
#[derive(Debug, Default)]
pub struct SessionStore {
    config: HumanizerConfig,
    sessions: HashMap<String, Humanizer>,
}

impl SessionStore {
    /// Creates a store whose humanizers use the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose humanizers share the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `HumanizeError::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: HumanizerConfig) -> Result<Self, HumanizeError> {
        config.validate().map_err(HumanizeError::InvalidConfig)?;
        Ok(Self {
            config,
            sessions: HashMap::new(),
        })
    }

    /// Allocates a fresh session id.
    ///
    /// The humanizer itself is not created until the session first uses it.
    pub fn create_session(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Returns the humanizer for `session_id`, creating it on first use.
    ///
    /// # Example
    ///
    /// ```
    /// use text_humanizer::session::SessionStore;
    /// use text_humanizer::Intensity;
    ///
    /// let mut store = SessionStore::new();
    /// let id = store.create_session();
    /// store.humanizer(&id).humanize("Hello there.", "Casual", Intensity::default());
    ///
    /// assert_eq!(store.get(&id).unwrap().history().len(), 1);
    /// ```
    pub fn humanizer(&mut self, session_id: &str) -> &mut Humanizer {
        let config = &self.config;
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                log::debug!("Creating humanizer for session {}", session_id);
                Humanizer::from_validated(config.clone(), StdRng::from_entropy())
            })
    }

    /// Returns the humanizer for `session_id` if the session has used one.
    pub fn get(&self, session_id: &str) -> Option<&Humanizer> {
        self.sessions.get(session_id)
    }

    /// Ends a session, discarding its humanizer and returning its history.
    pub fn end_session(&mut self, session_id: &str) -> Option<TransformationHistory> {
        let humanizer = self.sessions.remove(session_id)?;
        log::debug!(
            "Ended session {} after {} transformations",
            session_id,
            humanizer.history().len()
        );
        Some(humanizer.into_history())
    }

    /// Number of sessions with a live humanizer.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has a live humanizer.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
