use std::fs;
use std::path::Path;

use eyre::eyre;
use serde::{Deserialize, Serialize};

/// An off-chain job definition: the ordered task list an oracle executes to
/// produce the buffer's value. Stored verbatim in the job account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JobDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tasks: Vec<serde_json::Value>,
}

impl JobDefinition {
    pub fn load(path: &Path) -> eyre::Result<JobDefinition> {
        if !path.exists() {
            return Err(eyre!(
                "Failed to find job definition file at {}",
                path.display()
            ));
        }
        let content = fs::read_to_string(path)?;
        let def: JobDefinition = serde_json::from_str(&content)?;

        if def.tasks.is_empty() {
            return Err(eyre!(
                "Failed to find 'tasks' in job definition file at {}",
                path.display()
            ));
        }

        Ok(def)
    }

    pub fn to_bytes(&self) -> eyre::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_jobdef_load() {
        let tmpdir = TempDir::with_prefix("bufferpool-tests-").unwrap();
        let path = tmpdir.path().join("job.json");
        fs::write(
            &path,
            r#"{"name":"btc-usd","tasks":[{"httpTask":{"url":"https://example.com"}}]}"#,
        )
        .unwrap();

        let def = JobDefinition::load(&path).unwrap();
        assert_eq!(def.name.as_deref(), Some("btc-usd"));
        assert_eq!(def.tasks.len(), 1);
        assert!(!def.to_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_jobdef_rejects_empty_tasks() {
        let tmpdir = TempDir::with_prefix("bufferpool-tests-").unwrap();
        let path = tmpdir.path().join("job.json");
        fs::write(&path, r#"{"name":"empty"}"#).unwrap();

        assert!(JobDefinition::load(&path).is_err());
    }

    #[test]
    fn test_jobdef_missing_file() {
        let tmpdir = TempDir::with_prefix("bufferpool-tests-").unwrap();
        assert!(JobDefinition::load(&tmpdir.path().join("nope.json")).is_err());
    }
}
