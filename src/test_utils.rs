//! Shared test utilities for the samples.
//!
//! Recording doubles for the injected capabilities. Every double writes into a
//! shared `CallLog`, so a test can hand the double to a consumer by value and
//! still inspect the order of calls afterwards.

use crate::{
    core::{notification, registration},
    errors::{Channel, Error, Result},
};
use std::{cell::RefCell, rc::Rc};
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Ordered record of calls made on test doubles.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    /// Appends one call.
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    /// Snapshot of every call so far.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Whether any call starts with `prefix`.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.0.borrow().iter().any(|e| e.starts_with(prefix))
    }
}

/// Notification recipient with sensible defaults.
#[must_use]
pub fn sample_user() -> notification::User {
    notification::User {
        id: 1,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: "+15550100".to_string(),
        device_id: "device-1".to_string(),
    }
}

/// Registration user with the given name and email.
#[must_use]
pub fn registration_user(id: u64, name: &str, email: &str) -> registration::User {
    registration::User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
    }
}

/// Sender double for any notification channel.
pub struct RecordingSender {
    log: CallLog,
    channel: Channel,
    fail: bool,
}

impl RecordingSender {
    /// Creates a succeeding sender for `channel`.
    #[must_use]
    pub fn new(log: &CallLog, channel: Channel) -> Self {
        Self {
            log: log.clone(),
            channel,
            fail: false,
        }
    }

    /// Makes every send fail with a delivery error after recording the call.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn record(&self, entry: String) -> Result<()> {
        self.log.push(entry);
        if self.fail {
            return Err(Error::Delivery {
                channel: self.channel,
                message: "simulated outage".to_string(),
            });
        }
        Ok(())
    }
}

impl notification::EmailSender for RecordingSender {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        self.record(format!("email:{to}:{subject}:{body}"))
    }
}

impl notification::SmsSender for RecordingSender {
    fn send_sms(&self, to: &str, message: &str) -> Result<()> {
        self.record(format!("sms:{to}:{message}"))
    }
}

impl notification::PushSender for RecordingSender {
    fn send_push(&self, device_id: &str, message: &str) -> Result<()> {
        self.record(format!("push:{device_id}:{message}"))
    }
}

/// Welcome notifier double.
pub struct RecordingNotifier {
    log: CallLog,
    fail: bool,
}

impl RecordingNotifier {
    /// Creates a succeeding notifier.
    #[must_use]
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    /// Makes every welcome fail after recording the call.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl registration::WelcomeNotifier for RecordingNotifier {
    fn send_welcome(&self, user: &registration::User) -> Result<()> {
        self.log.push(format!("welcome:{}", user.email));
        if self.fail {
            return Err(Error::Delivery {
                channel: Channel::Email,
                message: "simulated outage".to_string(),
            });
        }
        Ok(())
    }
}

/// Exporter double that records how many users each export saw.
pub struct RecordingExporter {
    log: CallLog,
}

impl RecordingExporter {
    /// Creates an exporter double.
    #[must_use]
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl registration::UserExporter for RecordingExporter {
    fn export(&mut self, users: &[registration::RegisteredUser]) -> Result<()> {
        self.log.push(format!("export:{}", users.len()));
        Ok(())
    }
}
