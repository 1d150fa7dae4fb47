use super::{ContactEmail, ContactName};

/// A validated contact-form submission. Lives for the duration of one
/// request and is dropped once the notification send attempt completes.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: Option<String>,
    pub message: String,
}
