use serde::{Deserialize, Serialize};

use crate::{
  action::Action,
  api::FetchResult,
  models::{ClinicSettings, PetArticle},
};

/// The single snapshot the presentation layer renders from. Replaced
/// wholesale by `reduce`; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
  pub loading: bool,
  pub settings: ClinicSettings,
  pub pets: Vec<PetArticle>,
  pub error: Option<String>,
}

impl Default for UiState {
  fn default() -> Self {
    Self { loading: true, settings: ClinicSettings::default(), pets: Vec::new(), error: None }
  }
}

/// Pure reducer. A reload cycle ends (`loading = false`) exactly once, when
/// the pets fetch completes, whatever the config fetch did.
pub fn reduce(state: &UiState, action: &Action) -> UiState {
  match action {
    Action::Reload => UiState { loading: true, error: None, ..state.clone() },
    Action::ConfigFetched(FetchResult::Success { value, .. }) => {
      UiState { settings: value.clone(), ..state.clone() }
    },
    Action::ConfigFetched(FetchResult::Failure { message, .. }) => {
      UiState { error: Some(format!("Config: {message}")), ..state.clone() }
    },
    Action::PetsFetched(FetchResult::Success { value, .. }) => {
      UiState { pets: value.clone(), loading: false, ..state.clone() }
    },
    Action::PetsFetched(FetchResult::Failure { message, .. }) => {
      UiState { error: Some(format!("Pets: {message}")), loading: false, ..state.clone() }
    },
    _ => state.clone(),
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn settings() -> ClinicSettings {
    ClinicSettings {
      chat_enabled: true,
      call_enabled: false,
      work_hours: "M-F 9:00 - 18:00".to_string(),
    }
  }

  fn pets() -> Vec<PetArticle> {
    vec![PetArticle {
      title: "Dog".to_string(),
      image_url: "http://example.com/dog.png".to_string(),
      content_url: "http://example.com".to_string(),
      date_added: "2023-01-01".to_string(),
    }]
  }

  fn run(actions: &[Action]) -> UiState {
    actions.iter().fold(UiState::default(), |state, action| reduce(&state, action))
  }

  #[test]
  fn starts_loading() {
    let state = UiState::default();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert!(state.pets.is_empty());
  }

  #[test]
  fn successful_cycle_populates_everything() {
    let state = run(&[
      Action::Reload,
      Action::ConfigFetched(FetchResult::Success { value: settings(), status: 200 }),
      Action::PetsFetched(FetchResult::Success { value: pets(), status: 200 }),
    ]);

    assert!(!state.loading);
    assert_eq!(state.settings, settings());
    assert_eq!(state.pets, pets());
    assert_eq!(state.error, None);
  }

  #[test]
  fn config_failure_keeps_loading_until_pets_complete() {
    let failed = run(&[
      Action::Reload,
      Action::ConfigFetched(FetchResult::Failure { status: Some(404), message: "Not Found".to_string() }),
    ]);
    assert!(failed.loading);
    assert_eq!(failed.error, Some("Config: Not Found".to_string()));

    let done = reduce(&failed, &Action::PetsFetched(FetchResult::Success { value: pets(), status: 200 }));
    assert!(!done.loading);
    assert_eq!(done.pets, pets());
  }

  #[test]
  fn pets_failure_ends_the_cycle() {
    let state = run(&[
      Action::Reload,
      Action::ConfigFetched(FetchResult::Success { value: settings(), status: 200 }),
      Action::PetsFetched(FetchResult::Failure { status: Some(500), message: "Server Error".to_string() }),
    ]);

    assert!(!state.loading);
    assert_eq!(state.error, Some("Pets: Server Error".to_string()));
    assert_eq!(state.settings, settings());
  }

  #[test]
  fn reload_clears_previous_error() {
    let state = run(&[
      Action::PetsFetched(FetchResult::Failure { status: None, message: "boom".to_string() }),
      Action::Reload,
    ]);

    assert!(state.loading);
    assert_eq!(state.error, None);
  }

  #[test]
  fn unrelated_actions_leave_state_untouched() {
    let state = run(&[
      Action::ConfigFetched(FetchResult::Success { value: settings(), status: 200 }),
      Action::Tick,
      Action::Render,
      Action::Resize(80, 24),
    ]);
    assert_eq!(state.settings, settings());
    assert!(state.loading);
  }
}
