//! Runtime configuration.
//!
//! Built in code or from command-line flags; there are no config files.

/// Default number of practice challenges kept open at once.
pub const DEFAULT_PRACTICE_CAPACITY: usize = 64;

/// Default `tracing` filter when `FOLNL_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable holding the `tracing` filter.
pub const LOG_ENV_VAR: &str = "FOLNL_LOG";

/// Settings for the REPL and practice components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Print the welcome banner when the REPL starts.
    pub show_banner: bool,
    /// Primary REPL prompt.
    pub prompt: String,
    /// Maximum line-editor history entries.
    pub history_size: usize,
    /// Practice challenges kept before the oldest is evicted.
    pub practice_capacity: usize,
    /// Fixed seed for practice challenges; entropy when `None`.
    pub practice_seed: Option<u64>,
    /// `tracing` filter directive used when `FOLNL_LOG` is unset.
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "fol> ".to_string(),
            history_size: 1000,
            practice_capacity: DEFAULT_PRACTICE_CAPACITY,
            practice_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Default settings without the banner.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            show_banner: false,
            ..Self::default()
        }
    }

    /// Sets whether the banner is shown.
    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the history size.
    #[must_use]
    pub const fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Sets the practice capacity. Zero is raised to one.
    #[must_use]
    pub fn with_practice_capacity(mut self, capacity: usize) -> Self {
        self.practice_capacity = capacity.max(1);
        self
    }

    /// Fixes the practice seed.
    #[must_use]
    pub const fn with_practice_seed(mut self, seed: u64) -> Self {
        self.practice_seed = Some(seed);
        self
    }

    /// Sets the fallback log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
