/// Maximum number of gate inputs a single wire may drive in the default configuration.
pub const MAX_FANOUT: usize = 2;

/// Default number of nested wire drives a single [drive_level](super::Network::drive_level)
/// may reach before it is treated as a loop.
pub const DEFAULT_MAX_PROPAGATION_DEPTH: usize = 64;

/// Limits applied to a [Network](super::Network).
///
/// # Example
/// ```
/// # use trilogic::NetworkConfig;
/// let config = NetworkConfig::default().with_max_fanout(4);
///
/// assert_eq!(config.max_fanout, 4);
/// assert_eq!(config.max_propagation_depth, trilogic::DEFAULT_MAX_PROPAGATION_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct NetworkConfig {
    pub max_fanout: usize,
    pub max_propagation_depth: usize,
}

impl NetworkConfig {
    /// Returns `self` with [max_fanout](NetworkConfig::max_fanout) set to `max_fanout`.
    pub fn with_max_fanout(mut self, max_fanout: usize) -> Self {
        self.max_fanout = max_fanout;
        self
    }

    /// Returns `self` with [max_propagation_depth](NetworkConfig::max_propagation_depth) set to `depth`.
    pub fn with_max_propagation_depth(mut self, depth: usize) -> Self {
        self.max_propagation_depth = depth;
        self
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_fanout: MAX_FANOUT,
            max_propagation_depth: DEFAULT_MAX_PROPAGATION_DEPTH,
        }
    }
}
