//! Live MIDI input. Connects to a midi input port and converts incoming
//! note messages into key event batches consumed by the frame loop.

use midir::{MidiInput, MidiInputConnection, MidiInputPort};
use midly::{MidiMessage, live::LiveEvent, num::u7};
use std::sync::mpsc;
use whorl_keyboard::{KeyEvent, KeyEvents, Note};

fn u7_to_01(value: u7) -> f32 {
    value.as_int() as f32 / 127.0
}

fn midi_message_to_key_event(message: MidiMessage) -> Option<KeyEvent> {
    match message {
        MidiMessage::NoteOn { key, vel } => Some(KeyEvent {
            note: Note::from_midi_index(key.as_int()),
            // Some devices send NoteOn with zero velocity instead of
            // NoteOff.
            pressed: vel.as_int() != 0,
            velocity_01: u7_to_01(vel),
        }),
        MidiMessage::NoteOff { key, vel } => Some(KeyEvent {
            note: Note::from_midi_index(key.as_int()),
            pressed: false,
            velocity_01: u7_to_01(vel),
        }),
        _ => None,
    }
}

pub struct MidiLive {
    midi_input: MidiInput,
    midi_input_ports: Vec<MidiInputPort>,
}

impl MidiLive {
    pub fn new() -> anyhow::Result<Self> {
        let midi_input = MidiInput::new("whorl")?;
        let midi_input_ports = midi_input.ports();
        Ok(Self {
            midi_input,
            midi_input_ports,
        })
    }

    pub fn enumerate_port_names(
        &self,
    ) -> impl Iterator<Item = (usize, String)> + '_ {
        self.midi_input_ports
            .iter()
            .enumerate()
            .filter_map(|(i, port)| {
                if let Ok(name) = self.midi_input.port_name(port) {
                    Some((i, name))
                } else {
                    None
                }
            })
    }

    pub fn connect(
        self,
        port_index: usize,
    ) -> anyhow::Result<MidiLiveConnection> {
        let port = self.midi_input_ports.get(port_index).ok_or_else(|| {
            anyhow::anyhow!("no midi input port at index {}", port_index)
        })?;
        MidiLiveConnection::new(self.midi_input, port)
    }
}

pub struct MidiLiveConnection {
    #[allow(unused)]
    midi_input_connection: MidiInputConnection<()>,
    key_event_receiver: mpsc::Receiver<KeyEvent>,
}

impl MidiLiveConnection {
    fn new(
        midi_input: MidiInput,
        port: &MidiInputPort,
    ) -> anyhow::Result<Self> {
        let port_name = format!("whorl {}", midi_input.port_name(port)?);
        let (key_event_sender, key_event_receiver) =
            mpsc::channel::<KeyEvent>();
        let midi_input_connection = midi_input
            .connect(
                port,
                port_name.as_str(),
                move |_timestamp_us, message, &mut ()| {
                    if let Ok(LiveEvent::Midi { message, .. }) =
                        LiveEvent::parse(message)
                    {
                        if let Some(key_event) =
                            midi_message_to_key_event(message)
                        {
                            if key_event_sender.send(key_event).is_err() {
                                log::error!(
                                    "failed to send key event from live midi thread"
                                );
                            }
                        }
                    }
                },
                (),
            )
            .map_err(|_| anyhow::anyhow!("failed to connect to midi port"))?;
        Ok(Self {
            midi_input_connection,
            key_event_receiver,
        })
    }

    /// Drain every key event received since the last call. Non-blocking;
    /// meant to be called once per frame.
    pub fn drain_key_events(&mut self) -> KeyEvents {
        self.key_event_receiver.try_iter().collect()
    }
}
