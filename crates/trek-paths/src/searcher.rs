use trek_core::SearchConfig;

/// Entry point for the state-space engines.
///
/// A `Searcher` only carries configuration. Every call builds its own
/// frontier and visited set, so one searcher (or clones of it) can serve
/// any number of concurrent searches.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Searcher {
    pub(crate) config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }
}
