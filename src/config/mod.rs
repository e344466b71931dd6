//! Module to instantiate containers from a configuration file.
//!
//! Configuration files/strings are a way to instantiate containers.
//! They describe containers using the [`toml`](https://toml.io/en/)
//! format.
//! The [`ConfigBuilder`] structure is the entry point to create a
//! container instance from a configuration string or file:
//! ```
//! use pairseq::PairedSequence;
//! use pairseq::config::ConfigBuilder;
//!
//! let config_str = "
//! id='PairedSequenceConfig'
//! capacity=10000
//! ";
//! let mut container: PairedSequence<u64, String> =
//!            ConfigBuilder::from_string(config_str).unwrap().build();
//! assert!(container.capacity() >= 10000);
//! container.append((1, String::from("foo")));
//! ```
//!
//! See the [`configs`](configs/index.html) module for the collection of
//! containers configuration format.

use crate::PairedSequence;
use serde::Serialize;
use std::io::Read;

/// Trait used to instantiate a configuration object from a toml
/// configuration and build a container.
///
/// Implementers provide the configuration `id` and the parsing of a
/// [`toml::Value`] into a configuration. Reading from a string or from a
/// file is derived from these two methods.
pub trait ConfigInstance: Sized {
    /// The value of the `id` field identifying this configuration.
    fn id() -> &'static str;

    /// Create this configuration from a parsed toml [`toml::Value`].
    ///
    /// This method returns either Self on success to parse input toml into
    /// a valid configuration or an Error describing what went wrong.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;

    /// Create this configuration from a string in the `toml` format.
    fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml(&value)
    }

    /// Create this configuration from a file in the `toml` format.
    fn from_file<P: AsRef<std::path::Path> + std::fmt::Debug>(
        path: P,
    ) -> Result<Self, ConfigError> {
        log::debug!("Loading configuration file {:?}.", path);
        let mut file = std::fs::File::open(&path)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        Self::from_string(s.as_str())
    }

    /// Write this configuration as a `toml` string.
    fn to_toml_string(&self) -> Result<String, ConfigError>
    where
        Self: Serialize,
    {
        Ok(toml::to_string(self)?)
    }

    /// Build the configuration into a container.
    fn build<First, Second>(self) -> PairedSequence<First, Second>;
}

/// Describe an existing container as a configuration that builds an
/// equivalent empty container.
pub trait IntoConfig<C: ConfigInstance> {
    fn as_config(&self) -> C;

    fn into_config(self) -> C
    where
        Self: Sized,
    {
        self.as_config()
    }
}

mod builder;
pub use builder::ConfigBuilder;
mod error;
pub use error::ConfigError;

/// The collection of available configurations.
pub mod configs {
    pub use crate::paired_sequence::config::PairedSequenceConfig;
}

#[cfg(test)]
pub(crate) mod tests;
