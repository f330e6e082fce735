use rocket::figment::{providers::Env, Figment};
use serde::Deserialize;

use engine::EngineConfig;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
}

/// Rocket's configuration overlaid with `CALCULATOR_` environment variables,
/// e.g. `CALCULATOR_ENGINE_SIGNIFICANT_DIGITS=8` sets `engine.significant_digits`
pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("CALCULATOR_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), rocket::figment::Error> {
        let config: Config = figment().extract()?;
        assert_eq!(config.engine.significant_digits, 11);
        Ok(())
    }
}
