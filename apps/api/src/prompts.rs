//! File-backed prompt templates with `{{key}}` placeholders.
//!
//! Templates live as plain text files in the prompts directory
//! (`coverLetter.txt`, `createCvObject.txt`, `customizedResume.txt`,
//! `generateJobScore.txt`). Substitution replaces the FIRST occurrence of
//! each placeholder only; the test below pins that. None of the shipped
//! templates repeat a placeholder.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct PromptLoader {
    prompts_dir: PathBuf,
}

impl PromptLoader {
    pub fn new(prompts_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompts_dir: prompts_dir.into(),
        }
    }

    /// Loads the named template and substitutes each `{{key}}` placeholder
    /// with its value. A missing or unreadable template file is an error.
    pub async fn load(&self, name: &str, vars: &[(&str, &str)]) -> Result<String> {
        let path = self.prompts_dir.join(name);
        let mut text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read prompt template {}", path.display()))?;

        for (key, value) in vars {
            // First occurrence only.
            text = text.replacen(&format!("{{{{{key}}}}}"), value, 1);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn loader_with(name: &str, content: &str) -> (tempfile::TempDir, PromptLoader) {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let loader = PromptLoader::new(dir.path());
        (dir, loader)
    }

    #[tokio::test]
    async fn test_substitutes_placeholder() {
        let (_dir, loader) = loader_with("x.txt", "Hi {{name}}");
        let prompt = loader.load("x.txt", &[("name", "Waddy")]).await.unwrap();
        assert_eq!(prompt, "Hi Waddy");
    }

    #[tokio::test]
    async fn test_substitutes_multiple_keys() {
        let (_dir, loader) = loader_with("x.txt", "{{a}} and {{b}}");
        let prompt = loader
            .load("x.txt", &[("a", "one"), ("b", "two")])
            .await
            .unwrap();
        assert_eq!(prompt, "one and two");
    }

    #[tokio::test]
    async fn test_repeated_placeholder_replaced_once() {
        // First-occurrence-only policy: the second {{name}} survives.
        let (_dir, loader) = loader_with("x.txt", "{{name}} {{name}}");
        let prompt = loader.load("x.txt", &[("name", "Waddy")]).await.unwrap();
        assert_eq!(prompt, "Waddy {{name}}");
    }

    #[tokio::test]
    async fn test_unknown_placeholder_left_intact() {
        let (_dir, loader) = loader_with("x.txt", "Hi {{name}}");
        let prompt = loader.load("x.txt", &[("other", "x")]).await.unwrap();
        assert_eq!(prompt, "Hi {{name}}");
    }

    #[tokio::test]
    async fn test_missing_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = PromptLoader::new(dir.path());
        assert!(loader.load("missing.txt", &[]).await.is_err());
    }

    #[tokio::test]
    async fn test_shipped_templates_have_expected_placeholders() {
        // The real templates ship with the binary; make sure the keys the
        // pipelines pass actually appear in them.
        let loader = PromptLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts"));
        let cover = loader.load("coverLetter.txt", &[]).await.unwrap();
        for key in ["{{company}}", "{{location}}", "{{description}}"] {
            assert!(cover.contains(key), "coverLetter.txt missing {key}");
        }
        let create = loader.load("createCvObject.txt", &[]).await.unwrap();
        for key in ["{{cv_text}}", "{{sample_json}}"] {
            assert!(create.contains(key), "createCvObject.txt missing {key}");
        }
        let tailor = loader.load("customizedResume.txt", &[]).await.unwrap();
        for key in ["{{cv}}", "{{job}}"] {
            assert!(tailor.contains(key), "customizedResume.txt missing {key}");
        }
        let score = loader.load("generateJobScore.txt", &[]).await.unwrap();
        for key in ["{{job_description}}", "{{cv}}"] {
            assert!(score.contains(key), "generateJobScore.txt missing {key}");
        }
    }
}
