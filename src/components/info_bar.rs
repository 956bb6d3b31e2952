use clap::crate_version;
use ratatui::{layout::Rect, widgets::Paragraph};

use crate::{components::Component, config::Config, tui::Frame};

pub struct InfoBar {
  config: Config,
}

impl InfoBar {
  pub fn new() -> Self {
    Self { config: Config::default() }
  }
}

impl Component for InfoBar {
  fn register_config_handler(&mut self, config: Config) -> color_eyre::Result<()> {
    self.config = config;
    Ok(())
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> color_eyre::Result<()> {
    let paragraph =
      Paragraph::new("Kliniek ".to_string() + crate_version!() + "  [q]uit [r]eload [c]hat [p]hone [j/k]scroll");

    f.render_widget(paragraph, area);
    Ok(())
  }
}
