use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::api::{EmailSource, FETCH_EMAILS_PATH, RECLASSIFY_PATH};
use crate::domain::email::{FetchResponse, ReclassifyRequest, ReclassifyResponse};
use crate::{Error, Result};

/// Blocking client for the triage backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: Url,
    http: Client,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last path segment unless it ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    /// Report a corrected category for one email.
    pub fn reclassify(&self, email_id: &str, category: &str) -> Result<String> {
        let url = self.endpoint(RECLASSIFY_PATH)?;
        debug!("POST {url}");
        let resp = self
            .http
            .post(url)
            .json(&ReclassifyRequest {
                email_id: email_id.to_string(),
                category: category.to_string(),
            })
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        let parsed: ReclassifyResponse =
            serde_json::from_str(&body).map_err(|source| Error::Decode { status, source })?;

        if parsed.success {
            Ok(parsed
                .message
                .unwrap_or_else(|| "Classification updated".to_string()))
        } else {
            Err(Error::Application(
                parsed.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

impl EmailSource for HttpApi {
    fn fetch_emails(&self) -> Result<FetchResponse> {
        let url = self.endpoint(FETCH_EMAILS_PATH)?;
        debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        // error statuses still carry a JSON body with `error`
        let status = resp.status().as_u16();
        let body = resp.text()?;
        debug!("HTTP {status}, {} bytes", body.len());
        serde_json::from_str(&body).map_err(|source| Error::Decode { status, source })
    }
}
