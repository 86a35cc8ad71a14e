use serde::{Deserialize, Serialize};

use glowcart_core::{DomainError, DomainResult};

pub const DEFAULT_COUNTRY: &str = "Indonesia";

/// Shipping form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ShippingInfo {
    /// Every field is required; the email needs an `@` with text on both sides.
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(DomainError::validation(format!("{field} is required")));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(DomainError::validation("email is not a valid address")),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShippingInfo {
        ShippingInfo {
            first_name: "Sari".into(),
            last_name: "Wijaya".into(),
            email: "sari@example.com".into(),
            phone: "+62 812 0000 0000".into(),
            address: "Jl. Melati 12".into(),
            city: "Bandung".into(),
            state: "Jawa Barat".into(),
            zip_code: "40111".into(),
            ..ShippingInfo::default()
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(filled().validate().is_ok());
        assert_eq!(filled().country, "Indonesia");
        assert_eq!(filled().full_name(), "Sari Wijaya");
    }

    #[test]
    fn blank_field_is_named_in_error() {
        let info = ShippingInfo {
            city: "   ".into(),
            ..filled()
        };
        assert_eq!(
            info.validate().unwrap_err(),
            DomainError::validation("city is required")
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        let info = ShippingInfo {
            email: "sari.example.com".into(),
            ..filled()
        };
        assert!(matches!(info.validate(), Err(DomainError::Validation(_))));
    }
}
