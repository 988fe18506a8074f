//! "Add recipe from link".
//!
//! Links are not fetched or parsed. A submitted link sits in the processing
//! state until the host, after the configured delay, calls
//! [`LinkImport::complete`]. Navigating away calls [`LinkImport::cancel`] and
//! the pending link is dropped.

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LinkImportStatus {
    #[default]
    Idle,
    Processing {
        url: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct LinkImport {
    status: LinkImportStatus,
    delay: Duration,
}

impl LinkImport {
    pub fn new(delay: Duration) -> Self {
        LinkImport {
            status: LinkImportStatus::Idle,
            delay,
        }
    }

    pub fn status(&self) -> &LinkImportStatus {
        &self.status
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.status, LinkImportStatus::Processing { .. })
    }

    /// How long the host should wait before calling [`LinkImport::complete`].
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts processing `url`. Blank input, or a submission while another
    /// link is processing, is refused.
    pub fn submit(&mut self, url: &str) -> bool {
        if url.trim().is_empty() || self.is_processing() {
            return false;
        }
        self.status = LinkImportStatus::Processing {
            url: url.to_string(),
        };
        tracing::debug!("Processing link: {url}");
        true
    }

    /// Finishes the pending submission and hands back its link.
    pub fn complete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.status) {
            LinkImportStatus::Processing { url } => {
                tracing::info!("Processed link: {url}");
                Some(url)
            }
            LinkImportStatus::Idle => None,
        }
    }

    /// Drops the pending submission, if any.
    pub fn cancel(&mut self) {
        if let LinkImportStatus::Processing { url } = std::mem::take(&mut self.status) {
            tracing::debug!("Discarded link: {url}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_complete() {
        let mut import = LinkImport::new(Duration::from_millis(2000));
        assert!(import.submit("https://youtube.com/watch?v=abc"));
        assert!(import.is_processing());
        assert_eq!(
            import.complete().as_deref(),
            Some("https://youtube.com/watch?v=abc")
        );
        assert_eq!(import.status(), &LinkImportStatus::Idle);
        assert_eq!(import.complete(), None);
    }

    #[test]
    fn test_blank_links_are_refused() {
        let mut import = LinkImport::default();
        assert!(!import.submit(""));
        assert!(!import.submit("   "));
        assert!(!import.is_processing());
    }

    #[test]
    fn test_one_link_at_a_time() {
        let mut import = LinkImport::default();
        assert!(import.submit("https://a.example"));
        assert!(!import.submit("https://b.example"));
        assert_eq!(import.complete().as_deref(), Some("https://a.example"));
    }

    #[test]
    fn test_cancel_discards_pending_link() {
        let mut import = LinkImport::default();
        import.submit("https://a.example");
        import.cancel();
        assert!(!import.is_processing());
        assert_eq!(import.complete(), None);
    }
}
