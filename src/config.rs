//! Configuration for metricstore
//!
//! Centralized configuration with sensible defaults.

/// Configuration for a metric store instance
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Total buffer capacity in bytes. Must be at least one record header
    /// (24 bytes) or store construction fails.
    pub capacity: usize,

    /// Zero the buffer region on construction. Turn off only when the caller
    /// hands over memory it already knows to be zeroed.
    pub zero_fill: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: 4 * 1024, // 4 KB
            zero_fill: true,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the buffer capacity (in bytes)
    pub fn capacity(mut self, bytes: usize) -> Self {
        self.config.capacity = bytes;
        self
    }

    /// Set whether the buffer is zeroed on construction
    pub fn zero_fill(mut self, enabled: bool) -> Self {
        self.config.zero_fill = enabled;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
