use std::fmt;
use std::io::Error as IOError;
use std::string::String;
use toml::de::Error as TomlDeError;
use toml::ser::Error as TomlSerError;

/// Error returned when a configuration cannot be read or turned into a
/// container.
#[derive(Debug)]
pub enum ConfigError {
    /// The input is not valid toml.
    TomlFormatError(TomlDeError),
    /// The configuration cannot be written as toml.
    TomlSerializeError(TomlSerError),
    /// The input is valid toml but does not describe a supported
    /// configuration.
    ConfigFormatError(String),
    /// The configuration file could not be read.
    IOError(IOError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TomlFormatError(e) => {
                write!(f, "Invalid toml: {}", e)
            }
            ConfigError::TomlSerializeError(e) => {
                write!(f, "Configuration cannot be written as toml: {}", e)
            }
            ConfigError::ConfigFormatError(s) => {
                write!(f, "Invalid configuration: {}", s)
            }
            ConfigError::IOError(e) => {
                write!(f, "Configuration read failed: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::TomlFormatError(e) => Some(e),
            ConfigError::TomlSerializeError(e) => Some(e),
            ConfigError::ConfigFormatError(_) => None,
            ConfigError::IOError(e) => Some(e),
        }
    }
}

impl From<TomlDeError> for ConfigError {
    fn from(e: TomlDeError) -> Self {
        ConfigError::TomlFormatError(e)
    }
}

impl From<TomlSerError> for ConfigError {
    fn from(e: TomlSerError) -> Self {
        ConfigError::TomlSerializeError(e)
    }
}

impl From<IOError> for ConfigError {
    fn from(e: IOError) -> Self {
        ConfigError::IOError(e)
    }
}
