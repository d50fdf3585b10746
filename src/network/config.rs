use serde::Deserialize;

use crate::constants::CONTACT_FORM_ID;

/// Identifiers the e-mail relay needs for every `sendForm` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    #[serde(default = "default_form_selector")]
    pub form_selector: String,
    pub public_key: String,
}

fn default_form_selector() -> String {
    format!("#{}", CONTACT_FORM_ID)
}

impl RelayConfig {
    /// Build the configuration from the `EMAILJS_SERVICE_ID`,
    /// `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY` variables captured at
    /// compile time.
    pub fn new() -> Result<Self, &'static str> {
        match (
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service), Some(template), Some(key)) => {
                Self::from_parts(service, template, key).validated()
            }
            _ => Err("EMAILJS_* environment variables are not set"),
        }
    }

    pub fn from_parts(service_id: &str, template_id: &str, public_key: &str) -> Self {
        Self {
            service_id: service_id.trim().to_string(),
            template_id: template_id.trim().to_string(),
            form_selector: default_form_selector(),
            public_key: public_key.trim().to_string(),
        }
    }

    /// Trim every field and reject configurations with blank identifiers.
    pub fn validated(mut self) -> Result<Self, &'static str> {
        for field in [
            &mut self.service_id,
            &mut self.template_id,
            &mut self.form_selector,
            &mut self.public_key,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        if self.service_id.is_empty() {
            return Err("relay service id is empty");
        }
        if self.template_id.is_empty() {
            return Err("relay template id is empty");
        }
        if self.public_key.is_empty() {
            return Err("relay public key is empty");
        }
        if self.form_selector.is_empty() {
            return Err("relay form selector is empty");
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_default_form() {
        let cfg: RelayConfig = serde_json::from_str(
            r#"{"serviceId":"svc","templateId":"tpl","publicKey":"pk"}"#,
        )
        .unwrap();
        assert_eq!(cfg, RelayConfig::from_parts("svc", "tpl", "pk"));
        assert_eq!(cfg.form_selector, "#contact-form");
    }

    #[test]
    fn explicit_form_selector_wins() {
        let cfg: RelayConfig = serde_json::from_str(
            r##"{"serviceId":"svc","templateId":"tpl","publicKey":"pk","formSelector":"#signup"}"##,
        )
        .unwrap();
        assert_eq!(cfg.form_selector, "#signup");
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        assert!(RelayConfig::from_parts("svc", " ", "pk").validated().is_err());
        assert!(RelayConfig::from_parts("", "tpl", "pk").validated().is_err());
        assert!(RelayConfig::from_parts("svc", "tpl", "pk").validated().is_ok());
    }

    #[test]
    fn whitespace_ids_from_js_object_are_rejected() {
        let cfg: RelayConfig = serde_json::from_str(
            r#"{"serviceId":"  ","templateId":"tpl","publicKey":"pk"}"#,
        )
        .unwrap();
        assert_eq!(cfg.validated(), Err("relay service id is empty"));
    }

    #[test]
    fn validated_trims_padded_ids() {
        let cfg: RelayConfig = serde_json::from_str(
            r##"{"serviceId":" svc ","templateId":"tpl\n","publicKey":"pk","formSelector":" #signup"}"##,
        )
        .unwrap();
        let cfg = cfg.validated().unwrap();
        assert_eq!(cfg.service_id, "svc");
        assert_eq!(cfg.template_id, "tpl");
        assert_eq!(cfg.form_selector, "#signup");
    }
}
