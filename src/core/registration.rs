//! User registration - one do-everything manager and its split-up counterpart.
//!
//! `UserManager` validates, stores, emails and exports inside a single
//! `add_user` call, which is the shape the single responsibility principle
//! warns against. `RegistrationService` performs the same steps in the same
//! order, but each step lives behind its own trait and can be built, replaced
//! and tested on its own.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Subject used for welcome emails unless overridden
pub const DEFAULT_WELCOME_SUBJECT: &str = "Welcome!";

const CSV_HEADER: [&str; 4] = ["id", "name", "email", "registered_at"];

/// Account being registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier
    pub id: u64,
    /// Display name, required
    pub name: String,
    /// Email address, required
    pub email: String,
    /// Never exported
    pub password: String,
}

/// A stored user together with the moment it was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    /// The stored user
    pub user: User,
    /// When the user was stored
    pub registered_at: DateTime<Utc>,
}

impl RegisteredUser {
    /// Stamps `user` with the current time.
    #[must_use]
    pub fn now(user: User) -> Self {
        Self {
            user,
            registered_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: u64,
    name: &'a str,
    email: &'a str,
    registered_at: DateTime<Utc>,
}

/// Checks that name and email are present.
///
/// # Errors
/// Returns `Error::Validation` when either field is empty or only whitespace.
pub fn validate_user(user: &User) -> Result<()> {
    if user.name.trim().is_empty() || user.email.trim().is_empty() {
        return Err(Error::Validation {
            message: "invalid user data: name and email are required".to_string(),
        });
    }
    Ok(())
}

/// Writes a header row and one row per user as CSV.
///
/// # Errors
/// Returns `Error::Export` if serialization or the underlying writer fails.
pub fn write_csv<W: Write>(writer: W, users: &[RegisteredUser]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for registered in users {
        csv_writer.serialize(CsvRow {
            id: registered.user.id,
            name: &registered.user.name,
            email: &registered.user.email,
            registered_at: registered.registered_at,
        })?;
    }
    csv_writer.flush().map_err(|e| Error::Export {
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Everything in one place
// ---------------------------------------------------------------------------

/// Registration that handles validation, storage, email and export itself.
#[derive(Debug)]
pub struct UserManager {
    users: Vec<RegisteredUser>,
    welcome_subject: String,
    welcome_emails_sent: usize,
    last_export: Vec<u8>,
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UserManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            welcome_subject: DEFAULT_WELCOME_SUBJECT.to_string(),
            welcome_emails_sent: 0,
            last_export: Vec::new(),
        }
    }

    /// Overrides the welcome email subject.
    #[must_use]
    pub fn with_welcome_subject(mut self, subject: impl Into<String>) -> Self {
        self.welcome_subject = subject.into();
        self
    }

    /// Validates, stores, welcomes and exports, in that order.
    ///
    /// A validation failure leaves the manager untouched.
    pub fn add_user(&mut self, user: User) -> Result<()> {
        validate_user(&user)?;

        self.users.push(RegisteredUser::now(user));

        if let Some(latest) = self.users.last() {
            self.send_welcome_email(&latest.user);
            self.welcome_emails_sent += 1;
        }

        self.export_to_csv()
    }

    fn send_welcome_email(&self, user: &User) {
        info!(
            to = %user.email,
            subject = %self.welcome_subject,
            "Sending welcome email to {}",
            user.name
        );
    }

    fn export_to_csv(&mut self) -> Result<()> {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &self.users)?;
        debug!(users = self.users.len(), bytes = buffer.len(), "Exported users to CSV");
        self.last_export = buffer;
        Ok(())
    }

    /// Every stored user, oldest first.
    #[must_use]
    pub fn users(&self) -> &[RegisteredUser] {
        &self.users
    }

    /// Number of welcome emails sent so far.
    #[must_use]
    pub const fn welcome_emails_sent(&self) -> usize {
        self.welcome_emails_sent
    }

    /// CSV produced by the most recent export; empty before the first one.
    #[must_use]
    pub fn last_export(&self) -> &[u8] {
        &self.last_export
    }
}

// ---------------------------------------------------------------------------
// Split into collaborators
// ---------------------------------------------------------------------------

/// Decides whether a user may be registered.
pub trait UserValidator {
    /// Accepts or rejects `user`.
    fn validate(&self, user: &User) -> Result<()>;
}

/// Keeps registered users.
pub trait UserStore {
    /// Stores `user` and returns the stored record.
    fn add(&mut self, user: User) -> Result<RegisteredUser>;
    /// Every stored user, oldest first.
    fn all(&self) -> &[RegisteredUser];
}

/// Greets newly registered users.
pub trait WelcomeNotifier {
    /// Sends the welcome message.
    fn send_welcome(&self, user: &User) -> Result<()>;
}

/// Publishes the full user list somewhere.
pub trait UserExporter {
    /// Exports a snapshot of `users`.
    fn export(&mut self, users: &[RegisteredUser]) -> Result<()>;
}

/// Requires a non-empty name and email.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequiredFieldsValidator;

impl UserValidator for RequiredFieldsValidator {
    fn validate(&self, user: &User) -> Result<()> {
        validate_user(user)
    }
}

/// Vector-backed store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Vec<RegisteredUser>,
}

impl UserStore for InMemoryUserStore {
    fn add(&mut self, user: User) -> Result<RegisteredUser> {
        let registered = RegisteredUser::now(user);
        self.users.push(registered.clone());
        Ok(registered)
    }

    fn all(&self) -> &[RegisteredUser] {
        &self.users
    }
}

/// Welcome notifier stub that logs the email.
#[derive(Debug, Clone)]
pub struct LoggingWelcomeNotifier {
    subject: String,
}

impl LoggingWelcomeNotifier {
    /// Creates a notifier using `subject` for every welcome email.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

impl Default for LoggingWelcomeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME_SUBJECT)
    }
}

impl WelcomeNotifier for LoggingWelcomeNotifier {
    fn send_welcome(&self, user: &User) -> Result<()> {
        info!(
            to = %user.email,
            subject = %self.subject,
            "Sending welcome email to {}",
            user.name
        );
        Ok(())
    }
}

/// Writes a full CSV snapshot to `W` on every export.
#[derive(Debug)]
pub struct CsvUserExporter<W: Write> {
    writer: W,
}

impl<W: Write> CsvUserExporter<W> {
    /// Creates an exporter writing into `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UserExporter for CsvUserExporter<W> {
    fn export(&mut self, users: &[RegisteredUser]) -> Result<()> {
        write_csv(&mut self.writer, users)?;
        debug!(users = users.len(), "Exported users to CSV");
        Ok(())
    }
}

/// Thin orchestrator over the four registration collaborators.
pub struct RegistrationService {
    validator: Box<dyn UserValidator>,
    store: Box<dyn UserStore>,
    notifier: Box<dyn WelcomeNotifier>,
    exporter: Box<dyn UserExporter>,
}

impl RegistrationService {
    /// Wires the service from injected collaborators.
    #[must_use]
    pub fn new(
        validator: Box<dyn UserValidator>,
        store: Box<dyn UserStore>,
        notifier: Box<dyn WelcomeNotifier>,
        exporter: Box<dyn UserExporter>,
    ) -> Self {
        Self {
            validator,
            store,
            notifier,
            exporter,
        }
    }

    /// Validates, stores, welcomes and exports, stopping at the first error.
    pub fn register(&mut self, user: User) -> Result<RegisteredUser> {
        self.validator.validate(&user)?;
        let registered = self.store.add(user)?;
        self.notifier.send_welcome(&registered.user)?;
        self.exporter.export(self.store.all())?;
        Ok(registered)
    }

    /// Every stored user, oldest first.
    #[must_use]
    pub fn users(&self) -> &[RegisteredUser] {
        self.store.all()
    }
}
