use crate::time_signature::TimeSignature;
use iced::{
    widget::{button, horizontal_space, pick_list, row, text, toggler, Text},
    Alignment::Center,
    Element,
};
use iced_aw::number_input;
use iced_fonts::{
    bootstrap::{icon_to_string, Bootstrap},
    BOOTSTRAP_FONT,
};
use log::info;
use strum::VariantArray as _;

pub const MAX_BPM: u16 = 400;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Transport {
    #[default]
    Stopped,
    Playing,
    Paused,
    Recording,
}

impl Transport {
    /// Where the transport goes when `action` is pressed from `self`.
    #[must_use]
    pub const fn after(self, action: TransportAction) -> Self {
        match (action, self) {
            (TransportAction::Play, _) => Self::Playing,
            (TransportAction::Pause, Self::Playing | Self::Recording) => Self::Paused,
            (TransportAction::Pause, state) => state,
            (TransportAction::Stop, _) => Self::Stopped,
            (TransportAction::Record, _) => Self::Recording,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransportAction {
    Pause,
    Play,
    Stop,
    Record,
}

#[derive(Clone, Copy, Debug)]
pub enum Message {
    Transport(TransportAction),
    TogglePlay,
    ToggleLoop(bool),
    BpmChanged(u16),
    TimeSignatureChanged(TimeSignature),
    ToggleMenu,
}

#[derive(Clone, Copy, Debug)]
pub struct TitleBar {
    transport: Transport,
    looping: bool,
    bpm: u16,
    time_signature: TimeSignature,
    menu_open: bool,
}

impl TitleBar {
    #[must_use]
    pub fn new(bpm: u16, time_signature: TimeSignature) -> Self {
        Self {
            transport: Transport::default(),
            looping: false,
            bpm: bpm.min(MAX_BPM),
            time_signature,
            menu_open: false,
        }
    }

    #[must_use]
    pub const fn transport(&self) -> Transport {
        self.transport
    }

    #[must_use]
    pub const fn bpm(&self) -> u16 {
        self.bpm
    }

    #[must_use]
    pub const fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Transport(action) => {
                let transport = self.transport.after(action);
                if transport != self.transport {
                    info!("transport: {:?} -> {transport:?}", self.transport);
                    self.transport = transport;
                }
            }
            Message::TogglePlay => {
                let action = if matches!(
                    self.transport,
                    Transport::Playing | Transport::Recording
                ) {
                    TransportAction::Pause
                } else {
                    TransportAction::Play
                };
                self.update(Message::Transport(action));
            }
            Message::ToggleLoop(looping) => self.looping = looping,
            Message::BpmChanged(bpm) => self.bpm = bpm.min(MAX_BPM),
            Message::TimeSignatureChanged(time_signature) => self.time_signature = time_signature,
            Message::ToggleMenu => self.menu_open = !self.menu_open,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let current = self.transport();
        let transport = |icon, action: TransportAction, lit: Transport| {
            button(Text::new(icon_to_string(icon)).font(BOOTSTRAP_FONT))
                .style(if current == lit {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::Transport(action))
        };

        row![
            transport(Bootstrap::PauseFill, TransportAction::Pause, Transport::Paused),
            transport(Bootstrap::PlayFill, TransportAction::Play, Transport::Playing),
            transport(Bootstrap::StopFill, TransportAction::Stop, Transport::Stopped),
            transport(
                Bootstrap::RecordFill,
                TransportAction::Record,
                Transport::Recording
            ),
            toggler(self.looping)
                .label(icon_to_string(Bootstrap::Repeat))
                .font(BOOTSTRAP_FONT)
                .on_toggle(Message::ToggleLoop),
            horizontal_space(),
            text("MusicBench"),
            horizontal_space(),
            pick_list(
                TimeSignature::VARIANTS,
                Some(self.time_signature),
                Message::TimeSignatureChanged
            )
            .width(70),
            text("BPM:"),
            number_input(self.bpm, 0..=MAX_BPM, Message::BpmChanged).width(70),
            button(Text::new(icon_to_string(Bootstrap::List)).font(BOOTSTRAP_FONT))
                .on_press(Message::ToggleMenu),
        ]
        .spacing(10)
        .padding(10)
        .align_y(Center)
        .into()
    }
}
