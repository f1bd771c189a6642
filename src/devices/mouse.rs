//! Mouse: botones, posición y rueda.

use crate::traits::snapshot::Snapshot;

/// Botón del mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    XButton1,
    XButton2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::XButton1,
        MouseButton::XButton2,
    ];

    fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// # Struct `MouseSnapshot`
///
/// Estado del mouse en un instante: posición del puntero en pixeles,
/// valores **acumulados** de las ruedas de scroll y botones presionados.
///
/// Los deltas (movimiento, scroll) se obtienen comparando dos snapshots
/// consecutivos desde el [`DeviceTracker`](crate::DeviceTracker).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MouseSnapshot {
    pub x: i32,
    pub y: i32,
    pub scroll_wheel: i32,
    pub horizontal_scroll_wheel: i32,
    buttons: u8,
}

impl MouseSnapshot {
    /// Snapshot en la posición dada, sin botones presionados.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Retorna una copia con `button` presionado.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons |= button.mask();
        self
    }

    /// Retorna una copia con la rueda vertical en `value`.
    pub fn with_scroll(mut self, value: i32) -> Self {
        self.scroll_wheel = value;
        self
    }

    /// Retorna una copia con la rueda horizontal en `value`.
    pub fn with_horizontal_scroll(mut self, value: i32) -> Self {
        self.horizontal_scroll_wheel = value;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

impl Snapshot for MouseSnapshot {
    type Control = MouseButton;

    fn is_active(&self, control: MouseButton) -> bool {
        self.is_button_down(control)
    }
}
