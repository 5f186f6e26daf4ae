/// File shown in the preview pane.
///
/// Each selection takes a ticket; a read only lands if its ticket is still
/// the latest one, so a slow earlier read cannot replace a newer file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    data_url: Option<String>,
    file_name: Option<String>,
    latest_ticket: u64,
}

impl PreviewState {
    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data_url.is_some()
    }

    pub fn begin_read(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Returns `false` when the read was superseded and has been dropped.
    pub fn complete(&mut self, ticket: u64, file_name: String, data_url: String) -> bool {
        if ticket != self.latest_ticket {
            log::info!("ℹ️ Dropping superseded read of {}", file_name);
            return false;
        }
        log::info!("📎 Preview ready: {}", file_name);
        self.data_url = Some(data_url);
        self.file_name = Some(file_name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_a_read_completes() {
        let mut preview = PreviewState::default();
        let ticket = preview.begin_read();
        assert!(!preview.is_loaded());

        let url = "data:application/pdf;base64,AA".to_string();
        assert!(preview.complete(ticket, "a.pdf".to_string(), url));
        assert_eq!(preview.data_url(), Some("data:application/pdf;base64,AA"));
        assert_eq!(preview.file_name(), Some("a.pdf"));
    }

    #[test]
    fn stale_read_does_not_overwrite_newer_selection() {
        let mut preview = PreviewState::default();
        let first = preview.begin_read();
        let second = preview.begin_read();

        assert!(preview.complete(second, "new.pdf".to_string(), "data:new".to_string()));
        assert!(!preview.complete(first, "old.pdf".to_string(), "data:old".to_string()));

        assert_eq!(preview.data_url(), Some("data:new"));
    }
}
