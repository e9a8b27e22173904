//! Settings schema, defaults, and the credential scrub policy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder token replaced by the generated description when the
/// output template is applied.
pub const DESC_TOKEN: &str = "$desc$";

const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
const DEFAULT_PROMPT: &str = "Provide a description of this image suitable for use as HTML \
                              alt-text. Do not use line breaks or square bracket characters \
                              in your description.";

/// User-facing settings (mirrors the stored settings JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AltTextSettings {
    /// Provider API key. Sensitive: only persisted when
    /// `sync_sensitive_settings` is on.
    pub api_key: String,
    /// Model identifier for description requests.
    pub model: String,
    /// Prompt sent alongside each image.
    pub prompt: String,
    /// Output template; the first `$desc$` is replaced with the generated
    /// description. A template without the token is static boilerplate.
    pub template: String,
    /// Opt-in to persisting the credential to disk.
    pub sync_sensitive_settings: bool,
}

impl Default for AltTextSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            template: DESC_TOKEN.to_string(),
            sync_sensitive_settings: false,
        }
    }
}

impl AltTextSettings {
    /// Defaults with only the model identifier carried over. Everything
    /// else, the credential included, reverts to its default.
    pub fn scrubbed(&self) -> Self {
        Self {
            model: self.model.clone(),
            ..Self::default()
        }
    }

    /// What actually gets written to disk: the full settings when the
    /// user opted in, the scrubbed copy otherwise.
    pub fn to_persistable(&self) -> Self {
        if self.sync_sensitive_settings {
            self.clone()
        } else {
            self.scrubbed()
        }
    }

    /// Overlay stored data on top of the defaults. Missing or unknown
    /// fields are tolerated, so older settings files keep loading.
    pub fn from_value(data: Value) -> Self {
        let mut base = serde_json::to_value(Self::default()).unwrap_or(Value::Null);
        if let (Some(base_map), Value::Object(data_map)) = (base.as_object_mut(), data) {
            for (key, value) in data_map {
                if base_map.contains_key(&key) {
                    base_map.insert(key, value);
                }
            }
        }
        serde_json::from_value(base).unwrap_or_default()
    }
}

/// Apply the output template: substitute the first `$desc$` occurrence
/// with the generated description.
pub fn render_template(template: &str, description: &str) -> String {
    template.replacen(DESC_TOKEN, description, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scrub_drops_credential_but_keeps_model() {
        let settings = AltTextSettings {
            api_key: "sk-secret".into(),
            model: "claude-3-opus-20240229".into(),
            prompt: "custom prompt".into(),
            template: "> $desc$".into(),
            sync_sensitive_settings: false,
        };
        let scrubbed = settings.scrubbed();
        assert_eq!(scrubbed.api_key, "");
        assert_eq!(scrubbed.model, "claude-3-opus-20240229");
        assert_eq!(scrubbed.prompt, AltTextSettings::default().prompt);
        assert_eq!(scrubbed.template, DESC_TOKEN);
    }

    #[test]
    fn sync_flag_persists_everything() {
        let settings = AltTextSettings {
            api_key: "sk-secret".into(),
            sync_sensitive_settings: true,
            ..Default::default()
        };
        assert_eq!(settings.to_persistable(), settings);
        let off = AltTextSettings {
            sync_sensitive_settings: false,
            ..settings
        };
        assert_eq!(off.to_persistable().api_key, "");
    }

    #[test]
    fn from_value_overlays_known_fields_only() {
        let settings = AltTextSettings::from_value(json!({
            "model": "claude-3-haiku-20240307",
            "unknownField": 42,
        }));
        assert_eq!(settings.model, "claude-3-haiku-20240307");
        assert_eq!(settings.prompt, AltTextSettings::default().prompt);
    }

    #[test]
    fn from_value_tolerates_non_object_data() {
        assert_eq!(AltTextSettings::from_value(Value::Null), AltTextSettings::default());
    }

    #[test]
    fn template_substitutes_first_token_once() {
        assert_eq!(render_template("$desc$", "a cat"), "a cat");
        assert_eq!(render_template("Image: $desc$ ($desc$)", "a cat"), "Image: a cat ($desc$)");
        assert_eq!(render_template("static", "a cat"), "static");
    }
}
