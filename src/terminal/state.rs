use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::error;

use crate::controller::{FetchController, RefreshOutcome};
use crate::domain::email::FetchResponse;
use crate::page::{Page, Panel, StatField, TriggerState};
use crate::render::view::ListEntry;
use crate::{Error, Result};

/// Terminal rendition of the dashboard slots.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    pub loading: bool,
    pub stats_visible: bool,
    pub stats: [u64; 4],
    pub entries: Vec<ListEntry>,
    pub trigger: TriggerState,
    /// Alerts waiting to be dismissed, oldest first.
    pub alerts: Vec<String>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self {
            loading: false,
            stats_visible: false,
            stats: [0; 4],
            entries: vec![ListEntry::Welcome],
            trigger: TriggerState::default(),
            alerts: Vec::new(),
        }
    }

    pub fn stat(&self, field: StatField) -> u64 {
        self.stats[field.index()]
    }
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for TerminalPage {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        match panel {
            Panel::Loading => self.loading = visible,
            Panel::Stats => self.stats_visible = visible,
        }
    }

    fn set_stat(&mut self, field: StatField, value: u64) {
        self.stats[field.index()] = value;
    }

    fn clear_list(&mut self) {
        self.entries.clear();
    }

    fn append_entry(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    fn trigger(&self) -> TriggerState {
        self.trigger.clone()
    }

    fn set_trigger(&mut self, state: TriggerState) {
        self.trigger = state;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub struct AppState {
    pub page: TerminalPage,
    pub controller: FetchController,
    pub list_scroll: u16,
    pending: Option<Receiver<Result<FetchResponse>>>,
}

impl AppState {
    pub fn new(controller: FetchController) -> Self {
        Self {
            page: TerminalPage::new(),
            controller,
            list_scroll: 0,
            pending: None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a cycle with the fetch on a worker thread. A trigger while one is
    /// in flight is ignored.
    pub fn trigger_refresh(&mut self) -> bool {
        if !self.controller.begin(&mut self.page) {
            return false;
        }
        self.list_scroll = 0;

        let source = self.controller.source();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // receiver gone means the UI quit; nothing to report
            let _ = tx.send(source.fetch_emails());
        });
        self.pending = Some(rx);
        true
    }

    /// Finish the cycle if the worker has answered.
    pub fn poll_fetch(&mut self) -> Option<RefreshOutcome> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                error!("fetch worker exited without a response");
                Err(Error::Io(std::io::Error::other(
                    "fetch worker exited without a response",
                )))
            }
        };
        self.pending = None;
        Some(self.controller.finish(&mut self.page, result))
    }

    pub fn dismiss_alert(&mut self) -> bool {
        if self.page.alerts.is_empty() {
            return false;
        }
        self.page.alerts.remove(0);
        true
    }

    pub fn scroll_list(&mut self, delta: i32) {
        if delta < 0 {
            self.list_scroll = self.list_scroll.saturating_sub((-delta) as u16);
        } else {
            self.list_scroll = self.list_scroll.saturating_add(delta as u16);
        }
    }
}
