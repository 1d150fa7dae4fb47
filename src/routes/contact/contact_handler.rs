use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::errors::ContactError;
use super::helpers::{notification_html, notification_subject, notification_text};
use super::types::ContactForm;
use crate::domain::ContactSubmission;
use crate::email_client::EmailClient;
use crate::routes::ApiResponse;

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, email_client),
    fields(contact_email = tracing::field::Empty)
)]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form
        .into_inner()
        .try_into()
        .map_err(ContactError::ValidationError)?;
    tracing::Span::current().record(
        "contact_email",
        tracing::field::display(submission.email.as_ref()),
    );

    relay_submission(&email_client, &submission).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Thank you for your message! I will get back to you soon.",
    )))
}

#[tracing::instrument(name = "Relaying the notification email", skip_all)]
async fn relay_submission(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    let subject = notification_subject(submission);
    let html = notification_html(submission)
        .context("Failed to render the notification email template.")?;
    let text = notification_text(submission);

    email_client
        .send_email(email_client.operator(), &subject, &html, &text)
        .await
        .map_err(ContactError::SendError)
}
