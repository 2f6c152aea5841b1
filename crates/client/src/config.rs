use crate::constants::DEFAULT_CONSUMER_GROUP;
use std::fmt;

/// Immutable settings shared by every hub operation.
///
/// A `HubConfig` is built once at startup and passed by reference to each command, so
/// the connection descriptor, consumer group, hub name and verbosity are resolved in a
/// single place.
#[derive(Clone, PartialEq, Eq)]
pub struct HubConfig {
    connection_string: String,
    consumer_group: String,
    hub_name: String,
    verbose: bool,
}

impl HubConfig {
    pub fn new(connection_string: impl Into<String>, hub_name: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            consumer_group: DEFAULT_CONSUMER_GROUP.to_owned(),
            hub_name: hub_name.into(),
            verbose: false,
        }
    }

    pub fn with_consumer_group(mut self, consumer_group: impl Into<String>) -> Self {
        self.consumer_group = consumer_group.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn consumer_group(&self) -> &str {
        &self.consumer_group
    }

    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

// The connection string may embed credentials, so it never reaches the logs.
impl fmt::Debug for HubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubConfig")
            .field("connection_string", &"<redacted>")
            .field("consumer_group", &self.consumer_group)
            .field("hub_name", &self.hub_name)
            .field("verbose", &self.verbose)
            .finish()
    }
}
