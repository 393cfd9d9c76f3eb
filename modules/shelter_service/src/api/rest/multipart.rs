//! Multipart form parsing for RSL create/update
//!
//! Text parts carry the record fields (camelCase names); the optional file
//! part named `logo` carries the image.

use super::error::ApiError;
use crate::contract::{LogoUpload, NewRsl, RslPatch};
use axum::extract::Multipart;
use std::collections::HashMap;

/// Form field that carries the logo file
pub const LOGO_FIELD: &str = "logo";

const TEXT_FIELDS: [&str; 6] = [
    "name",
    "registrationNumber",
    "email",
    "phoneNumber",
    "address",
    "website",
];

/// Decoded RSL form
#[derive(Debug, Default)]
pub struct RslForm {
    fields: HashMap<&'static str, String>,
    pub logo: Option<LogoUpload>,
}

impl RslForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = RslForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == LOGO_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content = field.bytes().await?;
                // Browsers send an empty part when no file was picked.
                if file_name.is_empty() && content.is_empty() {
                    continue;
                }
                if form.logo.is_some() {
                    return Err(ApiError::bad_request("only one logo file may be uploaded"));
                }
                form.logo = Some(LogoUpload { file_name, content });
                continue;
            }

            match TEXT_FIELDS.iter().find(|known| **known == name) {
                Some(known) => {
                    let value = field.text().await?;
                    form.fields.insert(*known, value);
                }
                None => tracing::debug!(field = %name, "ignoring unknown RSL form field"),
            }
        }

        Ok(form)
    }

    fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Split into create input and logo
    pub fn into_new_rsl(mut self) -> (NewRsl, Option<LogoUpload>) {
        let rsl = NewRsl {
            name: self.take("name").unwrap_or_default(),
            registration_number: self.take("registrationNumber"),
            email: self.take("email"),
            phone_number: self.take("phoneNumber"),
            address: self.take("address"),
            website: self.take("website"),
        };
        (rsl, self.logo)
    }

    /// Split into patch and logo; only submitted fields are patched
    pub fn into_patch(mut self) -> (RslPatch, Option<LogoUpload>) {
        let patch = RslPatch {
            name: self.take("name"),
            registration_number: self.take("registrationNumber"),
            email: self.take("email"),
            phone_number: self.take("phoneNumber"),
            address: self.take("address"),
            website: self.take("website"),
        };
        (patch, self.logo)
    }
}
