use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Contact form as submitted by the browser. Every field may be missing.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
#[error("The contact field {0} was missing or empty")]
pub struct MissingContactFieldError(pub ContactField);

/// A contact message with all four fields present and non-empty.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(
    value: Option<String>,
    field: ContactField,
) -> Result<String, MissingContactFieldError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(MissingContactFieldError(field))
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = MissingContactFieldError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(value.name, ContactField::Name)?,
            email: required(value.email, ContactField::Email)?,
            subject: required(value.subject, ContactField::Subject)?,
            message: required(value.message, ContactField::Message)?,
        })
    }
}
