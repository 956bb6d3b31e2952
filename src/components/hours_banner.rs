use chrono::Local;
use color_eyre::eyre::Result;
use ratatui::{
  layout::Rect,
  style::{Color, Modifier, Style},
  widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::{action::Action, tui::Frame, work_hours::is_within_work_hours};

#[derive(Default)]
pub struct HoursBanner {
  work_hours: String,
}

impl HoursBanner {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Component for HoursBanner {
  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    if let Action::StateChanged(state) = action {
      self.work_hours = state.settings.work_hours;
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let open = is_within_work_hours(&self.work_hours, Local::now().naive_local());
    let style = if open {
      Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };

    let banner = Paragraph::new(format!("Office Hours: {}", self.work_hours))
      .centered()
      .style(style)
      .block(Block::bordered().border_type(BorderType::Rounded).title(if open { "Open" } else { "Closed" }));
    f.render_widget(banner, area);
    Ok(())
  }
}
