use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

const MAX_FIELD: usize = 200;
const MAX_MESSAGE: usize = 2000;

/// Reference id handed back for an accepted submission, quoted in follow-up
/// correspondence and tracking events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadRef(Uuid);

impl LeadRef {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for LeadRef {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for LeadRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Contact-form submission. All fields arrive as strings; only `name`,
/// `email` and `message` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub product_interest: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required("name", &self.name)?;
        capped("name", &self.name, MAX_FIELD)?;
        email("email", &self.email)?;
        capped("organization", &self.organization, MAX_FIELD)?;
        capped("phone", &self.phone, MAX_FIELD)?;
        capped("productInterest", &self.product_interest, MAX_FIELD)?;
        required("message", &self.message)?;
        capped("message", &self.message, MAX_MESSAGE)?;
        Ok(())
    }
}

/// Newsletter/catalog-download signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> Result<(), FormError> {
        required("name", &self.name)?;
        capped("name", &self.name, MAX_FIELD)?;
        email("email", &self.email)?;
        capped("phone", &self.phone, MAX_FIELD)?;
        capped("company", &self.company, MAX_FIELD)?;
        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required { field });
    }
    Ok(())
}

fn capped(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::TooLong { field, max });
    }
    Ok(())
}

/// Plausibility check only: a non-empty local part and domain around one
/// `@`. Deliverability is the mail provider's problem.
fn email(field: &'static str, value: &str) -> Result<(), FormError> {
    required(field, value)?;
    capped(field, value, MAX_FIELD)?;

    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(FormError::Invalid {
            field,
            reason: "expected an address like name@example.com",
        });
    }
    Ok(())
}
