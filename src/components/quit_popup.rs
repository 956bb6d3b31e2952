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
use crate::{action::Action, config::Config, tui::Frame};

pub struct QuitPopup {
  command_tx: Option<UnboundedSender<Action>>,
  config: Config,
  show: bool,
}

impl QuitPopup {
  pub fn new() -> Self {
    Self { command_tx: None, config: Config::default(), show: false }
  }
}

impl Component for QuitPopup {
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
        KeyCode::Char('y') => {
          if let Some(tx) = &self.command_tx {
            tx.send(Action::Quit)?;
          }
        },
        KeyCode::Char('n') | KeyCode::Esc => {
          self.show = false;
        },
        _ => {},
      }
    }
    Ok(None)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    if action == Action::ConfirmQuit {
      if self.config.confirm_quit {
        self.show = true;
      } else if let Some(tx) = &self.command_tx {
        tx.send(Action::Quit)?;
      }
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if self.show {
      let popup_area = centered_rect(40, 20, area);

      let text = Text::from(vec![
        Line::styled("Are you sure you want to quit?", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Line::styled("[y]es      [n]o", Style::default().fg(Color::Gray)),
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
