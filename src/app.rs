use color_eyre::eyre::Result;
use crossterm::event::KeyCode;
use ratatui::{
  layout::{Constraint, Direction, Layout},
  prelude::Rect,
};
use tokio::sync::mpsc;

use crate::{
  action::Action,
  api::ClinicApi,
  components::{
    contact_bar::ContactBar, hours_banner::HoursBanner, info_bar::InfoBar, info_dialog::InfoDialog,
    pet_list::PetList, quit_popup::QuitPopup, Component,
  },
  config::Config,
  mode::Mode,
  state::{reduce, UiState},
  tui,
};

pub struct App {
  pub config: Config,
  pub api: ClinicApi,
  pub state: UiState,
  pub tick_rate: f64,
  pub frame_rate: f64,
  pub components: Vec<Box<dyn Component>>,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub mode: Mode,
}

impl App {
  pub async fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
    let config = Config::new()?;
    let api = ClinicApi::new(&config)?;
    let contact_bar = ContactBar::new();
    let hours_banner = HoursBanner::new();
    let pet_list = PetList::new();
    let info_bar = InfoBar::new();
    let info_dialog = InfoDialog::new();
    let quit_popup = QuitPopup::new();
    let mode = Mode::Home;
    Ok(Self {
      config,
      api,
      state: UiState::default(),
      tick_rate,
      frame_rate,
      components: vec![
        Box::new(contact_bar),
        Box::new(hours_banner),
        Box::new(pet_list),
        Box::new(info_bar),
        Box::new(info_dialog),
        Box::new(quit_popup),
      ],
      should_quit: false,
      should_suspend: false,
      mode,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let mut tui = tui::Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate).mouse(true);
    tui.enter()?;

    for component in self.components.iter_mut() {
      component.register_action_handler(action_tx.clone())?;
    }

    for component in self.components.iter_mut() {
      component.register_config_handler(self.config.clone())?;
    }

    for component in self.components.iter_mut() {
      component.init(tui.size()?)?;
    }

    action_tx.send(Action::Reload)?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Quit => action_tx.send(Action::Quit)?,
          tui::Event::Tick => action_tx.send(Action::Tick)?,
          tui::Event::Render => action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => match key.code {
            KeyCode::Char('q') => action_tx.send(Action::ConfirmQuit)?,
            KeyCode::Char('r') => action_tx.send(Action::Reload)?,
            _ => {},
          },
          _ => {},
        }
        for component in self.components.iter_mut() {
          if let Some(action) = component.handle_events(Some(e.clone()))? {
            action_tx.send(action)?;
          }
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          log::debug!("{action:?}");
        }
        match action {
          Action::Quit => self.should_quit = true,
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            tui.draw(|f| {
              let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                  Constraint::Length(3),
                  Constraint::Length(3),
                  Constraint::Fill(1),
                  Constraint::Length(1),
                ])
                .split(f.size());
              let areas = [layout[0], layout[1], layout[2], layout[3], f.size(), f.size()];
              for (component, area) in self.components.iter_mut().zip(areas) {
                if let Err(e) = component.draw(f, area) {
                  action_tx.send(Action::Error(format!("Failed to draw: {:?}", e))).unwrap();
                }
              }
            })?;
          },
          Action::Render => {
            tui.draw(|f| {
              let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                  Constraint::Length(3),
                  Constraint::Length(3),
                  Constraint::Fill(1),
                  Constraint::Length(1),
                ])
                .split(f.size());
              let areas = [layout[0], layout[1], layout[2], layout[3], f.size(), f.size()];
              for (component, area) in self.components.iter_mut().zip(areas) {
                if let Err(e) = component.draw(f, area) {
                  action_tx.send(Action::Error(format!("Failed to draw: {:?}", e))).unwrap();
                }
              }
            })?;
          },
          Action::Reload => {
            self.state = reduce(&self.state, &action);
            action_tx.send(Action::StateChanged(self.state.clone()))?;

            // One reload = one sequential config-then-pets task off the UI
            // loop. Concurrent reloads are last-write-wins.
            let api = self.api.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
              let config = api.fetch_config().await;
              if tx.send(Action::ConfigFetched(config)).is_err() {
                return;
              }
              let pets = api.fetch_pets().await;
              let _ = tx.send(Action::PetsFetched(pets));
            });
          },
          Action::ConfigFetched(_) | Action::PetsFetched(_) => {
            self.state = reduce(&self.state, &action);
            action_tx.send(Action::StateChanged(self.state.clone()))?;
          },
          Action::Contact => {
            self.mode = Mode::Dialog;
            action_tx.send(Action::ModeChange(self.mode))?;
          },
          Action::CloseDialog => {
            self.mode = Mode::Home;
            action_tx.send(Action::ModeChange(self.mode))?;
          },
          Action::Error(ref message) => {
            log::error!("{message}");
          },
          _ => {},
        }
        for component in self.components.iter_mut() {
          if let Some(action) = component.update(action.clone())? {
            action_tx.send(action)?
          };
        }
      }
      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = tui::Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate);
        tui.enter()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }
}
