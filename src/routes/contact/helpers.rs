use super::super::helpers::prepare_html_template;
use crate::domain::ContactSubmission;

const DEFAULT_SUBJECT: &str = "New message";

pub fn notification_subject(submission: &ContactSubmission) -> String {
    format!(
        "Portfolio contact: {}",
        submission.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    )
}

pub fn notification_text(submission: &ContactSubmission) -> String {
    format!(
        "\
New contact form submission

Name: {name}
Email: {email}
Subject: {subject}

{message}

This message was sent from your portfolio website.
",
        name = submission.name.as_ref(),
        email = submission.email.as_ref(),
        subject = submission.subject.as_deref().unwrap_or("No subject"),
        message = submission.message,
    )
}

pub fn notification_html(submission: &ContactSubmission) -> Result<String, tera::Error> {
    prepare_html_template(
        &[
            ("name", submission.name.as_ref()),
            ("email", submission.email.as_ref()),
            (
                "subject",
                submission.subject.as_deref().unwrap_or("No subject"),
            ),
            ("message", &submission.message),
        ],
        "contact_notification.html",
    )
}
