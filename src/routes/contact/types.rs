use crate::domain::{ContactEmail, ContactName, ContactSubmission};

/// Raw contact-form body. Required fields stay optional at the wire level
/// so that an absent field produces the missing-field message instead of a
/// deserialization error.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(form.name),
            non_empty(form.email),
            non_empty(form.message),
        ) else {
            return Err("Please fill in all required fields.".into());
        };

        let name = ContactName::parse(name)?;
        let email = ContactEmail::parse(email)?;

        Ok(Self {
            name,
            email,
            subject: non_empty(form.subject),
            message,
        })
    }
}
