use super::{ConfigError, ConfigInstance};
use crate::paired_sequence::config::PairedSequenceConfig;
use crate::PairedSequence;

/// Configuration ids supported by [`ConfigBuilder`].
static CONFIGS: [&str; 1] = ["PairedSequenceConfig"];

/// Container builder from a generic configuration.
///
/// This structure is the entry point to build a container from a
/// configuration file/string. It is instantiated from a
/// [`toml`](../../toml/index.html) configuration string or file and consumed
/// to produce a container.
///
/// In order to be valid, a configuration must be in a proper
/// [`toml`](../../toml/index.html) format where the root element is a
/// [`toml`](../../toml/index.html) [`Table`](../../toml/value/type.Table.html).
/// The table must contain an "id" key identifying the type of container to
/// build. Valid container types are enumerated in the
/// [`configs`](configs/index.html) module.
///
/// If one of these condition is not satisfied,
/// a [`ConfigError::ConfigFormatError`] is returned instead of a valid
/// [`ConfigBuilder`]. If the input is not valid toml, a
/// [`ConfigError::TomlFormatError`] is returned.
///
/// ## Examples
///
/// ```
/// use pairseq::PairedSequence;
/// use pairseq::config::{ConfigBuilder, ConfigError};
///
/// let c: PairedSequence<u8, bool> =
///     ConfigBuilder::from_string("id='PairedSequenceConfig'")
///         .unwrap()
///         .build();
/// assert!(c.is_empty());
///
/// assert!(matches!(
///     ConfigBuilder::from_string("id='Array'"),
///     Err(ConfigError::ConfigFormatError(_))
/// ));
/// ```
#[derive(Clone)]
pub struct ConfigBuilder {
    config: PairedSequenceConfig,
}

impl ConfigBuilder {
    /// Build a [`ConfigBuilder`] from a string in the `toml` format.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        ConfigInstance::from_string(s)
    }

    /// Build a [`ConfigBuilder`] from a file in the `toml` format.
    pub fn from_file<P: AsRef<std::path::Path> + std::fmt::Debug>(
        path: P,
    ) -> Result<Self, ConfigError> {
        ConfigInstance::from_file(path)
    }

    /// Consume the builder into an empty container.
    pub fn build<First, Second>(self) -> PairedSequence<First, Second> {
        ConfigInstance::build(self)
    }
}

impl ConfigInstance for ConfigBuilder {
    fn id() -> &'static str {
        "ConfigBuilder"
    }

    /// Build a container configuration from a toml value.
    /// This function checks that:
    /// * The toml configuration is a toml `Table`,
    /// * The toml configuration contains an "id" field
    /// * The value of the "id" field is a supported value.
    /// * The target configuration identified by "id" is valid.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Container configuration must be a toml table.",
                )))
            }
        };

        let id = match table.get("id") {
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must have an 'id' field.",
                )))
            }
            Some(s) => match s.as_str() {
                Some(s) => s,
                None => {
                    return Err(ConfigError::ConfigFormatError(
                        String::from("Invalid id type, must be a string."),
                    ))
                }
            },
        };

        match id {
            "PairedSequenceConfig" => {
                PairedSequenceConfig::from_toml(value)
                    .map(|config| ConfigBuilder { config })
            }
            unknown => Err(ConfigError::ConfigFormatError(format!(
                "Invalid container configuration type: {}. Possible values are: {:?}.",
                unknown, CONFIGS
            ))),
        }
    }

    fn build<First, Second>(self) -> PairedSequence<First, Second> {
        self.config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigBuilder;
    use crate::config::ConfigError;
    use crate::PairedSequence;
    use std::io::Write;

    #[test]
    fn test_generic_config() {
        let capacity = 10;
        let config_str =
            format!("id=\"PairedSequenceConfig\"\ncapacity={}", capacity);
        let c: PairedSequence<u64, u64> =
            ConfigBuilder::from_string(config_str.as_str())
                .unwrap()
                .build();
        assert!(c.capacity() >= capacity);
        assert!(c.is_empty());
    }

    #[test]
    fn test_invalid_id_config() {
        let config_str = "id=\"Array\"\ncapacity=10".to_string();
        assert!(matches!(
            ConfigBuilder::from_string(config_str.as_str()),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_missing_id_config() {
        assert!(matches!(
            ConfigBuilder::from_string("capacity=10"),
            Err(ConfigError::ConfigFormatError(_))
        ));
        assert!(matches!(
            ConfigBuilder::from_string("id=10"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ConfigBuilder::from_string("id = = 'PairedSequenceConfig'"),
            Err(ConfigError::TomlFormatError(_))
        ));
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join(format!(
            "pairseq_config_test_{}.toml",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "id='PairedSequenceConfig'\ncapacity=4").unwrap();
        }
        let c: PairedSequence<u8, u8> =
            ConfigBuilder::from_file(&path).unwrap().build();
        std::fs::remove_file(&path).unwrap();
        assert!(c.capacity() >= 4);

        assert!(matches!(
            ConfigBuilder::from_file(&path),
            Err(ConfigError::IOError(_))
        ));
    }
}
