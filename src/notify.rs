use log::warn;
use notify_rust::{Hint, Notification};

/// Mirror an alert as a desktop notification. Failures are logged, never
/// raised: the alert has already been shown in the page.
pub fn desktop_alert(message: &str) {
    let mut n = Notification::new();
    n.summary("SmartInbox AI")
        .body(message)
        .hint(Hint::Category("email".to_string()));

    if let Err(e) = n.show() {
        warn!("notification error: {e}");
    }
}
