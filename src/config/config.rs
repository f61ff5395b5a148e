use std::error::Error;
use std::fs::File;

use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Trace {
    // print a line per parsed implementation
    pub parse: bool,
    // print the parsed tree in debug form
    pub ast: bool,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(default)]
pub struct FrontendConfig {
    pub trace: Trace,
    // render the canonical form of the parsed program to stdout
    pub pretty_print: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            trace: Trace::default(),
            pretty_print: true,
        }
    }
}

pub fn load_frontend_config(file_path: &str) -> Result<FrontendConfig, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let config = serde_yaml::from_reader(file)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::default();
        assert!(config.pretty_print);
        assert!(!config.trace.parse);
        assert!(!config.trace.ast);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
pretty_print: false
trace:
  ast: true
"#;
        let config: FrontendConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.pretty_print);
        assert!(config.trace.ast);
        assert!(!config.trace.parse);
    }
}
