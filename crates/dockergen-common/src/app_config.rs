use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{DockergenError, DockergenResult};
use crate::util::fs_utils::read_file;

pub const NAME_KEY: &str = "name";
pub const STARTUP_COMMAND_KEY: &str = "startup_command";

/// Reads and parses a YAML config into its top-level mapping.
///
/// An empty document yields an empty mapping. Any other non-mapping root is rejected.
pub fn load_config(path: &Path) -> DockergenResult<Mapping> {
    let contents = read_file(path)?;
    let value: Value = serde_yaml::from_str(&contents)?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(DockergenError::NotAMapping(type_name(&other).to_string())),
    }
}

/// The two fields the template needs, both guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
    pub startup_command: String,
}

impl AppConfig {
    /// Logs the validated values at info level.
    pub fn report(&self) {
        tracing::info!(name = %self.name, "Name parameter: {}", self.name);
        tracing::info!(
            startup_command = %self.startup_command,
            "Startup command: {}",
            self.startup_command
        );
    }
}

/// Extracts `name` and `startup_command` from a parsed config.
///
/// Absent keys and falsy values (null, `false`, zero, empty string, empty
/// sequence or mapping) are all treated as missing. Truthy scalars that are
/// not strings are used in their YAML text form.
pub fn validate(config: &Mapping) -> DockergenResult<AppConfig> {
    let name = required_str(config, NAME_KEY);
    let startup_command = required_str(config, STARTUP_COMMAND_KEY);

    match (name, startup_command) {
        (Some(name), Some(startup_command)) => Ok(AppConfig {
            name,
            startup_command,
        }),
        (name, startup_command) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(NAME_KEY);
            }
            if startup_command.is_none() {
                missing.push(STARTUP_COMMAND_KEY);
            }
            Err(DockergenError::Validation(missing))
        }
    }
}

fn required_str(config: &Mapping, key: &str) -> Option<String> {
    config.get(key).and_then(scalar_text)
}

// None for falsy values and for non-empty collections, which have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => b.then(|| "true".to_string()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => None,
            _ => Some(n.to_string()),
        },
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) => None,
        Value::Tagged(tagged) => scalar_text(&tagged.value),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp_root = tempfile::tempdir().unwrap();
        let path = temp_root.path().join("project.yaml");
        std::fs::write(&path, contents).unwrap();
        (temp_root, path)
    }

    #[test]
    fn test_load_config_reads_mapping() {
        let (_dir, path) =
            write_config("name: myapp\nstartup_command: npm start\nextra:\n  - ignored\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.get("name").and_then(Value::as_str), Some("myapp"));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp_root = tempfile::tempdir().unwrap();
        let err = load_config(&temp_root.path().join("project.yaml")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("project.yaml"));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let (_dir, path) = write_config("name: [unclosed\n");
        assert!(matches!(
            load_config(&path),
            Err(DockergenError::Yaml { .. })
        ));
    }

    #[test]
    fn test_load_config_empty_document_is_empty_mapping() {
        let (_dir, path) = write_config("");
        assert!(load_config(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_config_rejects_sequence_root() {
        let (_dir, path) = write_config("- name\n- startup_command\n");
        match load_config(&path) {
            Err(DockergenError::NotAMapping(found)) => assert_eq!(found, "a sequence"),
            other => panic!("expected NotAMapping, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_both_fields() {
        let config = mapping("name: myapp\nstartup_command: python3 app.py --port 8080\n");
        assert_eq!(
            validate(&config).unwrap(),
            AppConfig {
                name: "myapp".to_string(),
                startup_command: "python3 app.py --port 8080".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        match validate(&Mapping::new()) {
            Err(DockergenError::Validation(missing)) => {
                assert_eq!(missing, vec![NAME_KEY, STARTUP_COMMAND_KEY])
            }
            other => panic!("expected Validation, got {:?}", other),
        }

        match validate(&mapping("name: myapp\n")) {
            Err(DockergenError::Validation(missing)) => {
                assert_eq!(missing, vec![STARTUP_COMMAND_KEY])
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_falsy_values() {
        for falsy in ["''", "null", "~", "false", "0", "0.0", "[]", "{}"] {
            let config = mapping(&format!("name: {falsy}\nstartup_command: npm start\n"));
            let err = validate(&config).unwrap_err();
            assert!(err.is_validation(), "{falsy} should be rejected");

            let config = mapping(&format!("name: myapp\nstartup_command: {falsy}\n"));
            let err = validate(&config).unwrap_err();
            assert!(err.is_validation(), "{falsy} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_non_empty_collections() {
        let config = mapping("name: myapp\nstartup_command: [npm, start]\n");
        assert!(validate(&config).unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_uses_text_of_truthy_scalars() {
        let config = mapping("name: 42\nstartup_command: true\n");
        let app = validate(&config).unwrap();
        assert_eq!(app.name, "42");
        assert_eq!(app.startup_command, "true");
    }

    #[test]
    fn test_validate_keeps_yaml_1_1_booleans_as_strings() {
        // YAML 1.2 has no `off`/`no`/`yes` booleans, so these are plain words.
        let config = mapping("name: no\nstartup_command: off\n");
        assert_eq!(
            validate(&config).unwrap(),
            AppConfig {
                name: "no".to_string(),
                startup_command: "off".to_string(),
            }
        );

        let config = mapping("name: myapp\nstartup_command: false\n");
        assert!(validate(&config).unwrap_err().is_validation());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_logs_both_fields() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let app = AppConfig {
            name: "myapp".to_string(),
            startup_command: "npm start".to_string(),
        };
        tracing::subscriber::with_default(subscriber, || app.report());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("INFO"));
        assert!(output.contains("Name parameter: myapp"));
        assert!(output.contains("Startup command: npm start"));
    }
}
