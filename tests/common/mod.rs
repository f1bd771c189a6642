#![allow(dead_code)]

use orbit_input_playback::{
    GamepadSnapshot, InputBackend, KeyboardSnapshot, MouseSnapshot, PlayerSlot,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Backend de prueba: el test fija lo que cada dispositivo devuelve en el
/// próximo frame.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub keyboard: Option<KeyboardSnapshot>,
    pub mouse: Option<MouseSnapshot>,
    pub gamepads: [Option<GamepadSnapshot>; PlayerSlot::COUNT],
    pub keyboard_polls: usize,
    pub gamepad_polls: usize,
}

impl FakeBackend {
    /// Todos los dispositivos presentes y neutros.
    pub fn neutral() -> Self {
        Self {
            keyboard: Some(KeyboardSnapshot::default()),
            mouse: Some(MouseSnapshot::default()),
            gamepads: [Some(GamepadSnapshot::default()); PlayerSlot::COUNT],
            ..Self::default()
        }
    }
}

impl InputBackend for FakeBackend {
    fn poll_keyboard(&mut self) -> Option<KeyboardSnapshot> {
        self.keyboard_polls += 1;
        self.keyboard
    }

    fn poll_mouse(&mut self) -> Option<MouseSnapshot> {
        self.mouse
    }

    fn poll_gamepad(&mut self, slot: PlayerSlot) -> Option<GamepadSnapshot> {
        self.gamepad_polls += 1;
        self.gamepads[slot.index()]
    }

    fn backend_name(&self) -> &'static str {
        "fake"
    }
}
