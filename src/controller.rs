//! One trigger -> fetch -> render cycle.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::Result;
use crate::api::EmailSource;
use crate::domain::email::{EmailRecord, FetchResponse, StatsSummary};
use crate::page::{BUSY_TRIGGER_LABEL, Page, Panel, TriggerState};
use crate::render::group::DataContractViolation;
use crate::render::pipeline::{render_email_list, render_stats};

/// View state owned by the controller: the last batch fetched successfully
/// and whether a cycle is in flight.
#[derive(Debug, Default)]
pub struct Session {
    emails: Vec<EmailRecord>,
    stats: StatsSummary,
    busy: bool,
    saved_trigger: Option<TriggerState>,
}

impl Session {
    pub fn emails(&self) -> &[EmailRecord] {
        &self.emails
    }

    pub fn stats(&self) -> &StatsSummary {
        &self.stats
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered {
        emails: usize,
        violations: Vec<DataContractViolation>,
    },
    /// Backend answered `success: false`.
    ApplicationError(String),
    /// Request failed or the body could not be decoded.
    TransportError(String),
    /// A cycle was already in flight.
    Ignored,
}

pub struct FetchController {
    source: Arc<dyn EmailSource>,
    session: Session,
}

impl FetchController {
    pub fn new(source: Arc<dyn EmailSource>) -> Self {
        Self {
            source,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Shared handle to the source, for running the fetch off the UI thread.
    pub fn source(&self) -> Arc<dyn EmailSource> {
        Arc::clone(&self.source)
    }

    /// Run a full cycle on the calling thread.
    pub fn refresh(&mut self, page: &mut dyn Page) -> RefreshOutcome {
        if !self.begin(page) {
            return RefreshOutcome::Ignored;
        }
        let result = self.source.fetch_emails();
        self.finish(page, result)
    }

    /// Put the page into its busy state. Returns `false`, and leaves the page
    /// alone, when a cycle is already in flight.
    pub fn begin(&mut self, page: &mut dyn Page) -> bool {
        if self.session.busy {
            warn!("refresh already in progress; ignoring trigger");
            return false;
        }
        debug!("refresh started");
        self.session.busy = true;
        self.session.saved_trigger = Some(page.trigger());

        page.set_visible(Panel::Loading, true);
        page.set_visible(Panel::Stats, false);
        page.clear_list();
        page.set_trigger(TriggerState {
            enabled: false,
            label: BUSY_TRIGGER_LABEL.to_string(),
        });
        true
    }

    /// Apply the fetch result, then leave the busy state. The busy state is
    /// cleared on every path out of here, unwinding included.
    pub fn finish(
        &mut self,
        page: &mut dyn Page,
        result: Result<FetchResponse>,
    ) -> RefreshOutcome {
        let trigger = self.session.saved_trigger.take().unwrap_or_default();
        let Session {
            emails,
            stats,
            busy,
            ..
        } = &mut self.session;
        let mut guard = BusyGuard {
            page,
            busy,
            trigger,
        };

        match result {
            Ok(resp) if resp.success => {
                *emails = resp.emails.unwrap_or_default();
                *stats = resp.stats.unwrap_or_default();
                render_stats(&mut *guard.page, &*stats);
                let violations = render_email_list(&mut *guard.page, emails.as_slice());
                info!(
                    "rendered {} emails ({} skipped)",
                    emails.len(),
                    violations.len()
                );
                RefreshOutcome::Rendered {
                    emails: emails.len(),
                    violations,
                }
            }
            Ok(resp) => {
                let message = resp.error.unwrap_or_else(|| {
                    warn!("backend reported failure without an error message");
                    "unknown error".to_string()
                });
                error!("backend error: {message}");
                guard.page.alert(&format!("Error: {message}"));
                RefreshOutcome::ApplicationError(message)
            }
            Err(e) => {
                error!("fetch failed: {e}");
                guard.page.alert(&format!("Failed to fetch emails: {e}"));
                RefreshOutcome::TransportError(e.to_string())
            }
        }
    }
}

struct BusyGuard<'a, 'p> {
    page: &'a mut (dyn Page + 'p),
    busy: &'a mut bool,
    trigger: TriggerState,
}

impl Drop for BusyGuard<'_, '_> {
    fn drop(&mut self) {
        self.page.set_visible(Panel::Loading, false);
        self.page.set_trigger(self.trigger.clone());
        *self.busy = false;
        debug!("refresh finished");
    }
}
