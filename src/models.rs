use serde::{Deserialize, Serialize};

/// Clinic settings as served by the config document. Leaf fields are
/// tolerant: an absent key deserializes to `false` / `""` instead of
/// failing the whole document.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicSettings {
  #[serde(default, rename = "isChatEnabled")]
  pub chat_enabled: bool,
  #[serde(default, rename = "isCallEnabled")]
  pub call_enabled: bool,
  #[serde(default, rename = "workHours")]
  pub work_hours: String,
}

/// Root of the config document. `settings` itself is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDoc {
  pub settings: ClinicSettings,
}

/// One pet article. `date_added` is ISO-8601 text and is displayed as-is.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetArticle {
  #[serde(default)]
  pub image_url: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub content_url: String,
  #[serde(default)]
  pub date_added: String,
}

/// Root of the pets document. `pets` itself is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetsDoc {
  pub pets: Vec<PetArticle>,
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn settings_absent_leaves_default() {
    let doc: ConfigDoc = serde_json::from_str(r#"{ "settings": {} }"#).unwrap();
    assert_eq!(doc.settings, ClinicSettings::default());
  }

  #[test]
  fn settings_unknown_keys_ignored() {
    let doc: ConfigDoc = serde_json::from_str(
      r#"{ "settings": { "isChatEnabled": true, "workHours": "M-F 09:00 - 18:00", "theme": "dark" } }"#,
    )
    .unwrap();
    assert!(doc.settings.chat_enabled);
    assert!(!doc.settings.call_enabled);
    assert_eq!(doc.settings.work_hours, "M-F 09:00 - 18:00");
  }

  #[test]
  fn missing_settings_object_fails() {
    assert!(serde_json::from_str::<ConfigDoc>(r#"{}"#).is_err());
  }

  #[test]
  fn pet_absent_fields_default_to_empty() {
    let doc: PetsDoc = serde_json::from_str(r#"{ "pets": [ { "title": "Cat" } ] }"#).unwrap();
    assert_eq!(doc.pets[0].title, "Cat");
    assert_eq!(doc.pets[0].image_url, "");
    assert_eq!(doc.pets[0].content_url, "");
    assert_eq!(doc.pets[0].date_added, "");
  }
}
