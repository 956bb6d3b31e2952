use chrono::Local;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Text},
  widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedSender;

use super::{centered_rect, Component};
use crate::{
  action::Action, config::Config, mode::Mode, models::ClinicSettings, tui::Frame, work_hours::is_within_work_hours,
};

const OPEN_MESSAGE: &str = "Thank you for getting in touch with us. We'll get back to you as soon as possible";
const CLOSED_MESSAGE: &str = "Work hours has ended. Please contact us again on the next work day";

/// Popup shown after a contact key press. The message is fixed at the moment
/// the dialog opens.
pub struct InfoDialog {
  command_tx: Option<UnboundedSender<Action>>,
  config: Config,
  settings: ClinicSettings,
  message: String,
  show: bool,
}

impl InfoDialog {
  pub fn new() -> Self {
    Self {
      command_tx: None,
      config: Config::default(),
      settings: ClinicSettings::default(),
      message: String::new(),
      show: false,
    }
  }
}

impl Component for InfoDialog {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.command_tx = Some(tx);
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.config = config;
    Ok(())
  }

  fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    if self.show {
      match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') => {
          if let Some(tx) = &self.command_tx {
            tx.send(Action::CloseDialog)?;
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
      Action::ModeChange(Mode::Dialog) => {
        let open = is_within_work_hours(&self.settings.work_hours, Local::now().naive_local());
        self.message = if open { OPEN_MESSAGE } else { CLOSED_MESSAGE }.to_string();
        self.show = true;
      },
      Action::ModeChange(Mode::Home) => {
        self.show = false;
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if self.show {
      let popup_area = centered_rect(50, 30, area);

      let text = Text::from(vec![
        Line::styled("Information", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(self.message.clone()),
        Line::raw(""),
        Line::styled("[enter] ok", Style::default().fg(Color::Gray)),
      ])
      .centered();

      let paragraph =
        Paragraph::new(text).wrap(Wrap { trim: true }).block(Block::bordered().border_type(BorderType::Rounded));
      f.render_widget(Clear, popup_area);
      f.render_widget(paragraph, popup_area);
    }
    Ok(())
  }
}
