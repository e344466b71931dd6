use crate::config::{ConfigError, ConfigInstance, IntoConfig};
use crate::PairedSequence;
use serde::Serialize;

pub(crate) fn test_into_config<B, C>(container: B) -> C
where
    B: IntoConfig<C>,
    C: ConfigInstance + Serialize,
{
    // Building configuration object succeeds or panics.
    let config: C = container.into_config();
    let toml_str = config.to_toml_string().unwrap();
    println!(
        "{} into {}: \n{}",
        std::any::type_name::<B>(),
        std::any::type_name::<C>(),
        toml_str
    );
    // The written configuration reads back.
    C::from_string(toml_str.as_str()).unwrap()
}

/// Configuration holding a field toml has no representation for.
#[derive(Serialize)]
struct UnitConfig {
    id: String,
    unit: (),
}

impl ConfigInstance for UnitConfig {
    fn id() -> &'static str {
        "UnitConfig"
    }

    fn from_toml(_value: &toml::Value) -> Result<Self, ConfigError> {
        Err(ConfigError::ConfigFormatError(String::from("UnitConfig")))
    }

    fn build<First, Second>(self) -> PairedSequence<First, Second> {
        PairedSequence::new()
    }
}

#[test]
fn test_unwritable_config() {
    let config = UnitConfig {
        id: String::from(UnitConfig::id()),
        unit: (),
    };
    assert!(matches!(
        config.to_toml_string(),
        Err(ConfigError::TomlSerializeError(_))
    ));
}
