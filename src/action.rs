use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
  api::FetchResult,
  mode::Mode,
  models::{ClinicSettings, PetArticle},
  state::UiState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
  Tick,
  Render,
  Resize(u16, u16),
  Suspend,
  Resume,
  ConfirmQuit,
  Quit,
  Reload,
  ConfigFetched(FetchResult<ClinicSettings>),
  PetsFetched(FetchResult<Vec<PetArticle>>),
  StateChanged(UiState),
  ModeChange(Mode),
  Contact,
  CloseDialog,
  Error(String),
  Help,
}
