use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, BorderType, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{action::Action, config::Config, mode::Mode, models::ClinicSettings, tui::Frame};

const CHAT_COLOR: Color = Color::Blue;
const CALL_COLOR: Color = Color::Green;

/// The chat/call button row. A button is rendered, and its key active, only
/// while the matching flag in the clinic settings is enabled.
pub struct ContactBar {
  command_tx: Option<UnboundedSender<Action>>,
  config: Config,
  mode: Mode,
  settings: ClinicSettings,
}

impl ContactBar {
  pub fn new() -> Self {
    Self {
      command_tx: None,
      config: Config::default(),
      mode: Mode::default(),
      settings: ClinicSettings::default(),
    }
  }
}

impl Component for ContactBar {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.command_tx = Some(tx);
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.config = config;
    Ok(())
  }

  fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    if self.mode == Mode::Home {
      match key.code {
        KeyCode::Char('c') if self.settings.chat_enabled => {
          if let Some(tx) = &self.command_tx {
            tx.send(Action::Contact)?;
          }
        },
        KeyCode::Char('p') if self.settings.call_enabled => {
          if let Some(tx) = &self.command_tx {
            tx.send(Action::Contact)?;
          }
        },
        _ => {},
      }
    }
    Ok(None)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::StateChanged(state) => {
        self.settings = state.settings;
      },
      Action::ModeChange(mode) => {
        self.mode = mode;
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let buttons: Vec<(&str, Color)> = [
      self.settings.chat_enabled.then_some(("Chat [c]", CHAT_COLOR)),
      self.settings.call_enabled.then_some(("Call [p]", CALL_COLOR)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if buttons.is_empty() {
      return Ok(());
    }

    let chunks = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(vec![Constraint::Ratio(1, buttons.len() as u32); buttons.len()])
      .split(area);

    for ((label, color), chunk) in buttons.into_iter().zip(chunks.iter()) {
      let button = Paragraph::new(label)
        .centered()
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(color)));
      f.render_widget(button, *chunk);
    }
    Ok(())
  }
}
