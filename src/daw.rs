use crate::{
    about,
    config::Config,
    pane::{PaneId, PaneSync, Propagation},
    preferences::{self, Preferences},
    title_bar::{self, TitleBar},
    track_panel,
    widget::{Spinner, VSplit},
    zoom_controls::{self, ZoomControls},
};
use iced::{
    event::{self, Status},
    keyboard,
    widget::{
        button, canvas, center, column, container, mouse_area, opaque, scrollable, stack, text,
        Space,
    },
    window, Color, Element, Event, Length, Subscription, Task, Theme,
};
use log::{error, info, trace, warn};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Message {
    Tick(Instant),
    TitleBar(title_bar::Message),
    ZoomControls(zoom_controls::Message),
    TrackPanel(track_panel::Message),
    Preferences(preferences::Message),
    Menu(MenuItem),
    DividerMoved(PaneId, f32),
    PaneResized(PaneId, f32),
    Escape,
    CloseAbout,
    CloseRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuItem {
    Save,
    SaveAs,
    ExportProject,
    Preferences,
    About,
}

impl MenuItem {
    const ALL: [Self; 5] = [
        Self::Save,
        Self::SaveAs,
        Self::ExportProject,
        Self::Preferences,
        Self::About,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::SaveAs => "Save As...",
            Self::ExportProject => "Export project",
            Self::Preferences => "Preferences",
            Self::About => "About",
        }
    }
}

#[derive(Debug)]
enum Modal {
    About,
    Preferences(Preferences),
}

#[derive(Debug)]
pub struct Daw {
    config: Config,
    panes: PaneSync,
    title_bar: TitleBar,
    zoom_controls: ZoomControls,
    modal: Option<Modal>,
    started: Instant,
    now: Instant,
}

impl Daw {
    pub fn create(config: Config) -> (Self, Task<Message>) {
        let now = Instant::now();

        let daw = Self {
            panes: PaneSync::new(config.divider_offset),
            title_bar: TitleBar::new(config.bpm, config.time_signature),
            zoom_controls: ZoomControls::new(config.zoom, config.ruler),
            modal: None,
            started: now,
            now,
            config,
        };

        (daw, Task::none())
    }

    pub fn title(&self) -> String {
        about::PROGRAM_NAME.to_owned()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.now = now,
            Message::TitleBar(message) => self.title_bar.update(message),
            Message::ZoomControls(message) => self.zoom_controls.update(message),
            Message::TrackPanel(track_panel::Message::AddTrack) => {
                info!("adding tracks is not available yet");
            }
            Message::Preferences(message) => {
                if let Some(Modal::Preferences(preferences)) = &mut self.modal {
                    match preferences.update(message) {
                        preferences::Action::None => {}
                        preferences::Action::Save(config) => {
                            self.apply_preferences(config);
                            self.modal = None;
                        }
                        preferences::Action::Close => self.modal = None,
                    }
                }
            }
            Message::Menu(item) => {
                self.title_bar.close_menu();
                match item {
                    MenuItem::Save | MenuItem::SaveAs | MenuItem::ExportProject => {
                        warn!("{} is not available: projects can't be saved yet", item.label());
                    }
                    MenuItem::Preferences => {
                        self.modal = Some(Modal::Preferences(Preferences::new(self.snapshot())));
                    }
                    MenuItem::About => self.modal = Some(Modal::About),
                }
            }
            Message::DividerMoved(pane, offset) => {
                let propagation = self.panes.move_divider(pane, offset.round() as u32);
                log_propagation(pane, propagation);
            }
            Message::PaneResized(pane, max) => {
                let propagation = self.panes.resize(pane, max.floor() as u32);
                log_propagation(pane, propagation);
            }
            Message::Escape => {
                if self.title_bar.menu_open() {
                    self.title_bar.close_menu();
                } else {
                    self.modal = None;
                }
            }
            Message::CloseAbout => self.modal = None,
            Message::CloseRequested => {
                if let Err(err) = self.snapshot().write() {
                    error!("couldn't save configuration: {err}");
                }
                info!("window closed");
                return iced::exit();
            }
        }

        Task::none()
    }

    /// The config as it should be persisted: the loaded file plus the current UI state.
    fn snapshot(&self) -> Config {
        Config {
            divider_offset: self.panes.offset(),
            bpm: self.title_bar.bpm(),
            time_signature: self.title_bar.time_signature(),
            zoom: self.zoom_controls.zoom(),
            ruler: self.zoom_controls.ruler(),
            ..self.config.clone()
        }
    }

    fn apply_preferences(&mut self, config: Config) {
        if config.divider_offset != self.panes.offset() {
            self.panes.move_divider(PaneId::Fixed, config.divider_offset);
        }

        self.config = Config {
            divider_offset: self.panes.offset(),
            ..config
        };

        if let Err(err) = self.config.write() {
            error!("couldn't save configuration: {err}");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let elapsed = self.now.duration_since(self.started);

        let fixed = VSplit::new(
            self.zoom_controls.view().map(Message::ZoomControls),
            placeholder(elapsed),
            self.panes.pane(PaneId::Fixed).offset() as f32,
            |offset| Message::DividerMoved(PaneId::Fixed, offset),
        )
        .on_resize(|max| Message::PaneResized(PaneId::Fixed, max))
        .height(Length::Shrink);

        let scrolling = VSplit::new(
            track_panel::view().map(Message::TrackPanel),
            placeholder(elapsed),
            self.panes.pane(PaneId::Scrolling).offset() as f32,
            |offset| Message::DividerMoved(PaneId::Scrolling, offset),
        )
        .on_resize(|max| Message::PaneResized(PaneId::Scrolling, max))
        .height(Length::Shrink);

        let content = column![
            self.title_bar.view().map(Message::TitleBar),
            fixed,
            scrollable(scrolling).height(Length::Fill),
        ];

        let base: Element<'_, Message> = if self.title_bar.menu_open() {
            stack![
                content,
                mouse_area(Space::new(Length::Fill, Length::Fill))
                    .on_press(Message::TitleBar(title_bar::Message::ToggleMenu)),
                primary_menu(),
            ]
            .into()
        } else {
            content.into()
        };

        match &self.modal {
            None => base,
            Some(Modal::About) => modal(base, about::view(Message::CloseAbout), Message::CloseAbout),
            Some(Modal::Preferences(preferences)) => modal(
                base,
                preferences.view().map(Message::Preferences),
                Message::Preferences(preferences::Message::Cancel),
            ),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::frames().map(Message::Tick),
            window::close_requests().map(|_| Message::CloseRequested),
            event::listen_with(|e, s, _| match (e, s) {
                (Event::Keyboard(keyboard::Event::KeyPressed { key, .. }), Status::Ignored) => {
                    match key {
                        keyboard::Key::Named(keyboard::key::Named::Space) => {
                            Some(Message::TitleBar(title_bar::Message::TogglePlay))
                        }
                        keyboard::Key::Named(keyboard::key::Named::Escape) => {
                            Some(Message::Escape)
                        }
                        _ => None,
                    }
                }
                _ => None,
            }),
        ])
    }

    pub fn theme(&self) -> Theme {
        self.config.theme.to_iced()
    }
}

fn log_propagation(pane: PaneId, propagation: Propagation) {
    if propagation.writes > 0 {
        trace!(
            "{pane:?} settled after {} hops and {} writes",
            propagation.hops,
            propagation.writes
        );
    }
}

fn placeholder<'a>(elapsed: Duration) -> Element<'a, Message> {
    canvas(Spinner::new(elapsed))
        .width(Length::Fill)
        .height(60)
        .into()
}

fn primary_menu<'a>() -> Element<'a, Message> {
    let items = MenuItem::ALL.into_iter().fold(column![], |col, item| {
        col.push(
            button(text(item.label()))
                .width(Length::Fill)
                .style(button::text)
                .on_press(Message::Menu(item)),
        )
    });

    container(
        container(items)
            .width(180)
            .padding(5)
            .style(container::rounded_box),
    )
    .width(Length::Fill)
    .align_right(Length::Fill)
    .padding([50, 10])
    .into()
}

fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daw() -> Daw {
        Daw::create(Config::default()).0
    }

    #[test]
    fn starts_from_the_configured_offset() {
        let daw = Daw::create(Config {
            divider_offset: 420,
            ..Config::default()
        })
        .0;

        assert_eq!(daw.panes.pane(PaneId::Scrolling).offset(), 420);
        assert_eq!(daw.panes.pane(PaneId::Fixed).offset(), 420);
    }

    #[test]
    fn dragging_either_divider_moves_both() {
        let mut daw = daw();

        _ = daw.update(Message::DividerMoved(PaneId::Fixed, 259.6));
        assert_eq!(daw.panes.pane(PaneId::Scrolling).offset(), 260);

        _ = daw.update(Message::DividerMoved(PaneId::Scrolling, 120.0));
        assert_eq!(daw.panes.pane(PaneId::Fixed).offset(), 120);
    }

    #[test]
    fn scrollbar_narrowed_pane_bounds_both() {
        let mut daw = daw();
        _ = daw.update(Message::PaneResized(PaneId::Fixed, 790.0));
        _ = daw.update(Message::PaneResized(PaneId::Scrolling, 778.0));

        _ = daw.update(Message::DividerMoved(PaneId::Fixed, 790.0));

        assert_eq!(daw.panes.offset(), 778);
        assert_eq!(daw.panes.pane(PaneId::Fixed).offset(), 778);
    }

    #[test]
    fn snapshot_carries_ui_state() {
        let mut daw = daw();
        _ = daw.update(Message::DividerMoved(PaneId::Scrolling, 300.0));
        _ = daw.update(Message::TitleBar(title_bar::Message::BpmChanged(96)));
        _ = daw.update(Message::ZoomControls(zoom_controls::Message::ZoomChanged(
            75,
        )));

        let config = daw.snapshot();

        assert_eq!(config.divider_offset, 300);
        assert_eq!(config.bpm, 96);
        assert_eq!(config.zoom, 75);
        assert_eq!(config.theme, daw.config.theme);
    }

    #[test]
    fn menu_items_close_the_menu() {
        let mut daw = daw();
        _ = daw.update(Message::TitleBar(title_bar::Message::ToggleMenu));
        assert!(daw.title_bar.menu_open());

        _ = daw.update(Message::Menu(MenuItem::About));

        assert!(!daw.title_bar.menu_open());
        assert!(matches!(daw.modal, Some(Modal::About)));
    }

    #[test]
    fn escape_closes_menu_before_modal() {
        let mut daw = daw();
        _ = daw.update(Message::Menu(MenuItem::Preferences));
        _ = daw.update(Message::TitleBar(title_bar::Message::ToggleMenu));

        _ = daw.update(Message::Escape);
        assert!(!daw.title_bar.menu_open());
        assert!(daw.modal.is_some());

        _ = daw.update(Message::Escape);
        assert!(daw.modal.is_none());
    }

    #[test]
    fn cancelled_preferences_change_nothing() {
        let mut daw = daw();
        _ = daw.update(Message::Menu(MenuItem::Preferences));
        _ = daw.update(Message::Preferences(
            preferences::Message::DividerOffsetChanged(500),
        ));
        _ = daw.update(Message::Preferences(preferences::Message::Cancel));

        assert!(daw.modal.is_none());
        assert_eq!(daw.panes.offset(), Config::default().divider_offset);
    }
}
