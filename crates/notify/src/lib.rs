//! Folio outbound notifications.
//!
//! - [`Mailer`] -- the seam handlers send mail through.
//! - [`SmtpMailer`] -- `lettre` SMTP delivery, configured by [`EmailConfig`].
//! - [`LogMailer`] -- used when SMTP is not configured; logs and drops.
//! - [`RecordingMailer`] -- keeps every message in memory, for tests.

pub mod email;

pub use email::{
    EmailConfig, EmailError, LogMailer, Mailer, OutboundEmail, RecordingMailer, SmtpMailer,
};
