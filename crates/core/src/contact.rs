//! Contact form submission and the notification email built from it.

use serde::Deserialize;

/// Where visitors land after submitting the contact form.
pub const CONTACT_REDIRECT: &str = "/?message_sent=true#contact";

/// Form fields posted to `/`. Every field is optional on the wire; the
/// presence of `name` is what marks a contact submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A composed notification ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub subject: String,
    pub body: String,
    /// Visitor address, used as `Reply-To` when it parses.
    pub reply_to: Option<String>,
}

impl ContactSubmission {
    /// `true` when the form carried a `name` field (even an empty one).
    pub fn is_submission(&self) -> bool {
        self.name.is_some()
    }

    /// Build the notification. Returns `None` when this is not a submission.
    pub fn compose(&self) -> Option<ContactMessage> {
        let name = self.name.as_deref()?;
        let email = self.email.as_deref().unwrap_or_default();
        let message = self.message.as_deref().unwrap_or_default();

        let subject = format!("New Contact Form Message from {name}");
        let body = format!(
            "You have received a new message from your portfolio website:\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Message:\n\
             {message}\n"
        );
        let reply_to = Some(email.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Some(ContactMessage {
            subject,
            body,
            reply_to,
        })
    }
}
