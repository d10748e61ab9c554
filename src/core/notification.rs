//! Notification dispatch - a manager that depends on delivery capabilities, not senders.
//!
//! `NotificationManager` only ever sees the three sender traits. Concrete
//! senders are built by the caller and injected through the constructor, so
//! swapping a channel implementation never touches the manager.

use crate::errors::Result;
use tracing::{debug, info, warn};

/// Subject used for notification emails unless overridden
pub const DEFAULT_SUBJECT: &str = "Notification";

/// Recipient of a notification, with one address per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number for SMS
    pub phone: String,
    /// Push notification device identifier
    pub device_id: String,
}

/// Capability to deliver an email.
pub trait EmailSender {
    /// Sends one email.
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Capability to deliver an SMS.
pub trait SmsSender {
    /// Sends one text message.
    fn send_sms(&self, to: &str, message: &str) -> Result<()>;
}

/// Capability to deliver a push notification.
pub trait PushSender {
    /// Sends one push notification to a device.
    fn send_push(&self, device_id: &str, message: &str) -> Result<()>;
}

/// Email sender stub that logs the delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl EmailSender for EmailService {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to, subject, "Sending email: {body}");
        Ok(())
    }
}

/// SMS sender stub that logs the delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsService;

impl SmsSender for SmsService {
    fn send_sms(&self, to: &str, message: &str) -> Result<()> {
        info!(to, "Sending SMS: {message}");
        Ok(())
    }
}

/// Push sender stub that logs the delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct PushNotificationService;

impl PushSender for PushNotificationService {
    fn send_push(&self, device_id: &str, message: &str) -> Result<()> {
        info!(device_id, "Sending push: {message}");
        Ok(())
    }
}

/// Sends a message to a user over email, SMS and push, in that order.
pub struct NotificationManager {
    email_service: Box<dyn EmailSender>,
    sms_service: Box<dyn SmsSender>,
    push_service: Box<dyn PushSender>,
    subject: String,
}

impl NotificationManager {
    /// Creates a manager from the three injected channel capabilities.
    #[must_use]
    pub fn new(
        email_service: Box<dyn EmailSender>,
        sms_service: Box<dyn SmsSender>,
        push_service: Box<dyn PushSender>,
    ) -> Self {
        Self {
            email_service,
            sms_service,
            push_service,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    /// Overrides the subject line used for the email channel.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Subject line used for the email channel.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Delivers `message` to `user` on every channel.
    ///
    /// Stops at the first failing channel and returns its error; channels
    /// after it are not attempted.
    pub fn notify_user(&self, user: &User, message: &str) -> Result<()> {
        debug!(user_id = user.id, "Dispatching notification");

        self.email_service
            .send_email(&user.email, &self.subject, message)
            .inspect_err(|e| warn!(user_id = user.id, "Email delivery failed: {e}"))?;

        self.sms_service
            .send_sms(&user.phone, message)
            .inspect_err(|e| warn!(user_id = user.id, "SMS delivery failed: {e}"))?;

        self.push_service
            .send_push(&user.device_id, message)
            .inspect_err(|e| warn!(user_id = user.id, "Push delivery failed: {e}"))?;

        Ok(())
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(
            Box::new(EmailService),
            Box::new(SmsService),
            Box::new(PushNotificationService),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::{Channel, Error};
    use crate::test_utils::*;

    fn manager_with(log: &CallLog, failing: Option<Channel>) -> NotificationManager {
        let sender = |channel| {
            let s = RecordingSender::new(log, channel);
            if failing == Some(channel) { s.failing() } else { s }
        };
        NotificationManager::new(
            Box::new(sender(Channel::Email)),
            Box::new(sender(Channel::Sms)),
            Box::new(sender(Channel::Push)),
        )
    }

    #[test]
    fn test_notify_user_calls_channels_in_order() {
        let log = CallLog::default();
        let manager = manager_with(&log, None);

        manager.notify_user(&sample_user(), "hello").unwrap();

        assert_eq!(
            log.entries(),
            vec![
                "email:alice@example.com:Notification:hello",
                "sms:+15550100:hello",
                "push:device-1:hello",
            ]
        );
    }

    #[test]
    fn test_failing_sms_stops_before_push() {
        let log = CallLog::default();
        let manager = manager_with(&log, Some(Channel::Sms));

        let result = manager.notify_user(&sample_user(), "hello");

        assert!(matches!(
            result,
            Err(Error::Delivery {
                channel: Channel::Sms,
                ..
            })
        ));
        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("email:"));
        assert!(entries[1].starts_with("sms:"));
        assert!(!entries.iter().any(|e| e.starts_with("push:")));
    }

    #[test]
    fn test_failing_email_attempts_nothing_else() {
        let log = CallLog::default();
        let manager = manager_with(&log, Some(Channel::Email));

        let result = manager.notify_user(&sample_user(), "hello");

        assert!(matches!(
            result,
            Err(Error::Delivery {
                channel: Channel::Email,
                ..
            })
        ));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_failing_push_is_surfaced() {
        let log = CallLog::default();
        let manager = manager_with(&log, Some(Channel::Push));

        let result = manager.notify_user(&sample_user(), "hello");

        assert!(matches!(
            result,
            Err(Error::Delivery {
                channel: Channel::Push,
                ..
            })
        ));
        assert_eq!(log.entries().len(), 3);
    }

    #[test]
    fn test_custom_subject_reaches_email_channel() {
        let log = CallLog::default();
        let manager = manager_with(&log, None).with_subject("Reminder");

        manager.notify_user(&sample_user(), "pay rent").unwrap();

        assert_eq!(log.entries()[0], "email:alice@example.com:Reminder:pay rent");
    }

    #[test]
    fn test_default_manager_uses_stub_services() {
        init_test_tracing();
        let manager = NotificationManager::default();
        assert_eq!(manager.subject(), DEFAULT_SUBJECT);
        assert!(manager.notify_user(&sample_user(), "hi").is_ok());
    }
}
