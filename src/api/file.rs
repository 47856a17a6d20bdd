use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::api::EmailSource;
use crate::domain::email::FetchResponse;

/// Reads a saved `/api/fetch-emails` response from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmailSource for JsonFileSource {
    fn fetch_emails(&self) -> Result<FetchResponse> {
        let s = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_saved_response() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"success": true, "emails": [], "stats": {{"total": 0}}}}"#).unwrap();
        let resp = JsonFileSource::new(f.path()).fetch_emails().unwrap();
        assert!(resp.success);
        assert_eq!(resp.emails.unwrap().len(), 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let src = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(src.fetch_emails(), Err(crate::Error::Io(_))));
    }
}
