use crate::config::{ConfigError, ConfigInstance, IntoConfig};
use crate::PairedSequence;
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`PairedSequence`](../../struct.PairedSequence.html) containers.
///
/// This configuration format is composed of up to two key/value fields:
/// - `id = "PairedSequenceConfig"` (required) and
/// - `capacity = <int>` (optional, defaults to 0).
///
/// The `id` field must be exactly "PairedSequenceConfig" while the capacity
/// sets the number of pairs the container can hold before its first
/// reallocation. The capacity does not bound the container length.
/// ```
/// use pairseq::PairedSequence;
/// use pairseq::config::ConfigInstance;
/// use pairseq::config::configs::PairedSequenceConfig;
///
/// let config_str = "
/// id = 'PairedSequenceConfig'
/// capacity = 10
/// ";
/// let c: PairedSequence<u64, u64> =
///            PairedSequenceConfig::from_string(config_str)
///            .unwrap()
///            .build();
/// assert!(c.capacity() >= 10);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PairedSequenceConfig {
    id: String,
    #[serde(default)]
    capacity: usize,
}

impl ConfigInstance for PairedSequenceConfig {
    fn id() -> &'static str {
        "PairedSequenceConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let config: PairedSequenceConfig =
            value.clone().try_into().map_err(|e| {
                ConfigError::ConfigFormatError(format!(
                    "Invalid PairedSequenceConfig: {}\n{:?}",
                    value, e
                ))
            })?;
        if config.id != Self::id() {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid PairedSequenceConfig id: {}",
                config.id
            )));
        }
        Ok(config)
    }

    fn build<First, Second>(self) -> PairedSequence<First, Second> {
        log::debug!(
            "Building PairedSequence<{}, {}> with capacity {}.",
            std::any::type_name::<First>(),
            std::any::type_name::<Second>(),
            self.capacity
        );
        PairedSequence::with_capacity(self.capacity)
    }
}

impl<First, Second> IntoConfig<PairedSequenceConfig>
    for PairedSequence<First, Second>
{
    fn as_config(&self) -> PairedSequenceConfig {
        PairedSequenceConfig {
            id: String::from(PairedSequenceConfig::id()),
            capacity: self.capacity(),
        }
    }
}
