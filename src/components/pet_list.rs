use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
  layout::{Margin, Rect},
  prelude::{Color, Line, Modifier, Style, Text},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{action::Action, config::Config, mode::Mode, state::UiState, tui::Frame};

/// The loading / error / article-list area of the home screen.
pub struct PetList {
  command_tx: Option<UnboundedSender<Action>>,
  config: Config,
  mode: Mode,
  state: UiState,
  list_state: ListState,
  scrollbar_state: ScrollbarState,
}

impl PetList {
  pub fn new() -> Self {
    Self {
      command_tx: None,
      config: Config::default(),
      mode: Mode::default(),
      state: UiState::default(),
      list_state: ListState::default().with_selected(Some(0)),
      scrollbar_state: ScrollbarState::default(),
    }
  }

  fn select_next(&mut self) {
    let len = self.state.pets.len();
    if len == 0 {
      return;
    }
    let selected = self.list_state.selected().unwrap_or(0);
    self.list_state.select(Some((selected + 1) % len));
  }

  fn select_previous(&mut self) {
    let len = self.state.pets.len();
    if len == 0 {
      return;
    }
    let selected = self.list_state.selected().unwrap_or(0);
    self.list_state.select(Some(if selected == 0 { len - 1 } else { selected - 1 }));
  }
}

impl Component for PetList {
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
        KeyCode::Char('j') | KeyCode::Down => self.select_next(),
        KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
        _ => {},
      }
    }
    Ok(None)
  }

  fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
    if self.mode == Mode::Home {
      match mouse.kind {
        MouseEventKind::ScrollDown => self.select_next(),
        MouseEventKind::ScrollUp => self.select_previous(),
        _ => {},
      }
    }
    Ok(None)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::StateChanged(state) => {
        self.state = state;
        let len = self.state.pets.len();
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state.select(if len == 0 { Some(0) } else { Some(selected.min(len - 1)) });
      },
      Action::ModeChange(mode) => {
        self.mode = mode;
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let block = Block::default().borders(Borders::ALL).title("Pets");

    if self.state.loading {
      let paragraph = Paragraph::new("Loading...").centered().style(Style::default().fg(Color::Gray)).block(block);
      f.render_widget(paragraph, area);
      return Ok(());
    }

    if let Some(error) = &self.state.error {
      let paragraph = Paragraph::new(format!("Error: {error}")).style(Style::default().fg(Color::Red)).block(block);
      f.render_widget(paragraph, area);
      return Ok(());
    }

    let name_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    let date_style = Style::default().fg(Color::Gray);
    let selected_name_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = self
      .state
      .pets
      .iter()
      .enumerate()
      .map(|(i, pet)| {
        let style = if self.list_state.selected() == Some(i) { selected_name_style } else { name_style };
        let text = Text::from(vec![
          Line::styled(&pet.title, style),
          Line::styled(format!("added {}", pet.date_added), date_style),
        ]);
        ListItem::new(text)
      })
      .collect();

    let list = List::new(items).block(block).highlight_symbol("┃").repeat_highlight_symbol(true).scroll_padding(1);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
      .begin_symbol(None)
      .end_symbol(None)
      .track_symbol(None)
      .thumb_symbol("▌");

    self.scrollbar_state = ScrollbarState::new(self.state.pets.len()).position(self.list_state.selected().unwrap_or(0));

    f.render_stateful_widget(list, area, &mut self.list_state);
    f.render_stateful_widget(scrollbar, area.inner(&Margin { vertical: 1, horizontal: 0 }), &mut self.scrollbar_state);

    Ok(())
  }
}
