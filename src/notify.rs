use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::content;

/// Somewhere a short user-facing notice can be shown.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// The notifier handed to views through the component context.
pub type SharedNotifier = Rc<dyn Notifier>;

/// Shows notices with the renderer's blocking `alert()` dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        match alert_script(message) {
            Ok(script) => {
                let _eval = document::eval(&script);
            }
            Err(e) => warn!("could not quote notice {message:?}: {e}"),
        }
    }
}

/// Builds `alert("...")` with the message quoted as a JS string literal.
fn alert_script(message: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(message)?;
    Ok(format!("alert({literal});"))
}

/// Handler behind the "Explore Now" button. The feature does not exist yet,
/// so all it does is say so.
pub fn explore_now(notifier: &dyn Notifier) {
    info!("explore requested, feature not available");
    notifier.notify(content::HOME.action_notice);
}

/// Keeps every notice instead of showing it.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier(std::cell::RefCell<Vec<String>>);

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_now_raises_a_single_notice() {
        let recorder = RecordingNotifier::default();
        explore_now(&recorder);
        assert_eq!(recorder.notices(), ["Feature coming soon!"]);
    }

    #[test]
    fn alert_script_quotes_the_message() {
        assert_eq!(
            alert_script("Feature coming soon!").unwrap(),
            r#"alert("Feature coming soon!");"#
        );
        assert_eq!(
            alert_script(r#"say "hi" </script>"#).unwrap(),
            r#"alert("say \"hi\" </script>");"#
        );
    }
}
