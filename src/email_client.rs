use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::ContactEmail;

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: ContactEmail,
    operator: ContactEmail,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct EmailUnit<'a> {
    email: &'a str,
}

impl<'a> EmailUnit<'a> {
    fn new(email: &'a str) -> Self {
        Self { email }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: EmailUnit<'a>,
    to: Vec<EmailUnit<'a>>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        operator: ContactEmail,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build the mail HTTP client."),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
            sender,
            operator,
            auth_token,
        }
    }

    /// The fixed address every contact-form notification is delivered to.
    pub fn operator(&self) -> &ContactEmail {
        &self.operator
    }

    pub async fn send_email(
        &self,
        recipient: &ContactEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("v1/email")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from: EmailUnit::new(self.sender.as_ref()),
            to: vec![EmailUnit::new(recipient.as_ref())],
            html: html_content,
            text: text_content,
            subject,
        };

        self.http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Startup self-check against the provider. A failure here means the
    /// credentials or base URL are off; the caller decides what to do with it.
    pub async fn verify(&self) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("v1/ping")
            .expect("Failed joining route to email api url.");

        self.http_client
            .get(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
