use std::{fs, path::Path};

use graphql_reflect::SchemaOptions;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// How schemas are derived from the served values
    pub schema: SchemaOptions,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use graphql_reflect::CollisionPolicy;

    use super::*;

    #[test]
    fn empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.schema.root_type_name, "RootQuery");
    }

    #[test]
    fn schema_section() {
        let config: Config = toml::from_str(
            r#"
            [schema]
            root_type_name = "Query"
            on_collision = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.schema.root_type_name, "Query");
        assert_eq!(config.schema.on_collision, CollisionPolicy::Reject);
    }

    #[test]
    fn unknown_sections_are_refused() {
        let err = toml::from_str::<Config>("[telemetry]\nenabled = true").unwrap_err().to_string();

        assert!(err.contains("unknown field `telemetry`, expected `schema`"), "{err}");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[schema]\non_collision = \"first_wins\"").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.schema.on_collision, CollisionPolicy::FirstWins);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reflect.toml");

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, Error::ReadConfig { .. }), "{err}");
    }
}
