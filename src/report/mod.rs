//! Report rendering collaborator
//!
//! The ingestion service delegates report generation entirely to a
//! `ReportRenderer`; it never renders anything itself. The bundled
//! `MarkdownRenderer` writes a keyword-indexed skeleton to disk and returns
//! the artifact path.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Renders a market report for a set of keywords and returns a locator
/// for the generated artifact.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, keywords: &[String]) -> Result<PathBuf>;
}

/// Writes markdown reports under a configured output directory
pub struct MarkdownRenderer {
    output_dir: PathBuf,
}

impl MarkdownRenderer {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportRenderer for MarkdownRenderer {
    async fn render(&self, keywords: &[String]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let now = Utc::now();
        let path = self
            .output_dir
            .join(format!("market-report-{}.md", now.format("%Y%m%d-%H%M%S")));

        let mut body = String::new();
        body.push_str("# Market Report\n\n");
        body.push_str(&format!("Generated: {}\n\n", now.format("%Y-%m-%d %H:%M UTC")));
        body.push_str("## Keywords\n\n");
        for keyword in keywords {
            body.push_str(&format!("- {}\n", keyword));
        }

        std::fs::write(&path, body)?;
        tracing::info!("Wrote market report to {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_markdown_renderer_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MarkdownRenderer::new(dir.path());

        let keywords = vec!["semiconductors".to_string(), "energy".to_string()];
        let path = renderer.render(&keywords).await.unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# Market Report"));
        assert!(contents.contains("- semiconductors"));
        assert!(contents.contains("- energy"));
    }

    #[tokio::test]
    async fn test_markdown_renderer_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        let renderer = MarkdownRenderer::new(&nested);

        let path = renderer.render(&["tech".to_string()]).await.unwrap();
        assert!(path.starts_with(&nested));
    }
}
