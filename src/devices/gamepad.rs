//! Gamepad: slots de jugador, botones, sticks y gatillos.

use crate::error::{InputError, Result};
use crate::traits::snapshot::Snapshot;

/// Valor a partir del cual un eje analógico cuenta como botón presionado.
pub const AXIS_BUTTON_THRESHOLD: f32 = 0.5;

/// # Enum `PlayerSlot`
///
/// Identidad estable de uno de los cuatro slots fijos de gamepad.
///
/// Se construye desde un índice con [`TryFrom<usize>`]; un índice fuera de
/// `0..4` devuelve [`InputError::OutOfRange`] en vez de recortarse.
///
/// ```rust,ignore
/// let slot = PlayerSlot::try_from(1)?;
/// assert_eq!(slot, PlayerSlot::Two);
/// assert!(PlayerSlot::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSlot {
    One,
    Two,
    Three,
    Four,
}

impl PlayerSlot {
    pub const COUNT: usize = 4;

    pub const ALL: [PlayerSlot; Self::COUNT] = [
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::Three,
        PlayerSlot::Four,
    ];

    /// Índice del slot en `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for PlayerSlot {
    type Error = InputError;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(InputError::OutOfRange {
            index,
            count: Self::COUNT,
        })
    }
}

/// Botón del gamepad. Incluye los ejes analógicos tratados como botones
/// (gatillos y direcciones de cada stick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    Back,
    Start,
    Guide,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    LeftTrigger,
    RightTrigger,
    LeftThumbstickUp,
    LeftThumbstickDown,
    LeftThumbstickLeft,
    LeftThumbstickRight,
    RightThumbstickUp,
    RightThumbstickDown,
    RightThumbstickLeft,
    RightThumbstickRight,
}

impl GamepadButton {
    /// Máscara del botón digital; `None` para ejes tratados como botón.
    fn digital_mask(self) -> Option<u16> {
        use GamepadButton::*;
        let bit = match self {
            A => 0,
            B => 1,
            X => 2,
            Y => 3,
            Back => 4,
            Start => 5,
            Guide => 6,
            LeftShoulder => 7,
            RightShoulder => 8,
            LeftStick => 9,
            RightStick => 10,
            DPadUp => 11,
            DPadDown => 12,
            DPadLeft => 13,
            DPadRight => 14,
            _ => return None,
        };
        Some(1 << bit)
    }
}

/// Posición de un stick analógico, cada eje en `[-1, 1]`. `y` positivo es arriba.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thumbstick {
    pub x: f32,
    pub y: f32,
}

impl Thumbstick {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }
}

/// # Struct `GamepadSnapshot`
///
/// Estado de un gamepad en un instante.
///
/// El snapshot neutro representa un gamepad **desconectado**: sin botones,
/// sticks centrados y gatillos sueltos. El backend debe devolverlo para
/// slots sin dispositivo, así un gamepad desconectado se consulta como
/// "todos los controles inactivos".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub left_stick: Thumbstick,
    pub right_stick: Thumbstick,
    pub left_trigger: f32,
    pub right_trigger: f32,
    buttons: u16,
}

impl GamepadSnapshot {
    /// Gamepad conectado en reposo.
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Retorna una copia con `button` presionado. Los botones derivados de
    /// ejes se ignoran aquí; se controlan con los sticks y gatillos.
    pub fn with_button(mut self, button: GamepadButton) -> Self {
        if let Some(mask) = button.digital_mask() {
            self.buttons |= mask;
        }
        self
    }

    pub fn with_left_stick(mut self, x: f32, y: f32) -> Self {
        self.left_stick = Thumbstick::new(x, y);
        self
    }

    pub fn with_right_stick(mut self, x: f32, y: f32) -> Self {
        self.right_stick = Thumbstick::new(x, y);
        self
    }

    /// Gatillos en `[0, 1]`.
    pub fn with_triggers(mut self, left: f32, right: f32) -> Self {
        self.left_trigger = left.clamp(0.0, 1.0);
        self.right_trigger = right.clamp(0.0, 1.0);
        self
    }

    pub fn is_button_down(&self, button: GamepadButton) -> bool {
        use GamepadButton::*;
        if let Some(mask) = button.digital_mask() {
            return self.buttons & mask != 0;
        }
        let t = AXIS_BUTTON_THRESHOLD;
        match button {
            LeftTrigger => self.left_trigger > t,
            RightTrigger => self.right_trigger > t,
            LeftThumbstickUp => self.left_stick.y > t,
            LeftThumbstickDown => self.left_stick.y < -t,
            LeftThumbstickLeft => self.left_stick.x < -t,
            LeftThumbstickRight => self.left_stick.x > t,
            RightThumbstickUp => self.right_stick.y > t,
            RightThumbstickDown => self.right_stick.y < -t,
            RightThumbstickLeft => self.right_stick.x < -t,
            RightThumbstickRight => self.right_stick.x > t,
            _ => false,
        }
    }
}

impl Snapshot for GamepadSnapshot {
    type Control = GamepadButton;

    fn is_active(&self, control: GamepadButton) -> bool {
        self.is_button_down(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_index() {
        for (index, slot) in PlayerSlot::ALL.iter().enumerate() {
            assert_eq!(PlayerSlot::try_from(index), Ok(*slot));
            assert_eq!(slot.index(), index);
        }
    }

    #[test]
    fn test_slot_out_of_range_is_rejected() {
        assert_eq!(
            PlayerSlot::try_from(4),
            Err(InputError::OutOfRange { index: 4, count: 4 })
        );
        assert!(PlayerSlot::try_from(usize::MAX).is_err());
    }

    #[test]
    fn test_axes_as_buttons() {
        let snapshot = GamepadSnapshot::connected()
            .with_left_stick(-0.9, 0.2)
            .with_right_stick(0.0, -0.6)
            .with_triggers(0.8, 0.5);

        assert!(snapshot.is_active(GamepadButton::LeftThumbstickLeft));
        assert!(!snapshot.is_active(GamepadButton::LeftThumbstickUp));
        assert!(snapshot.is_active(GamepadButton::RightThumbstickDown));
        assert!(snapshot.is_active(GamepadButton::LeftTrigger));
        // exactamente en el umbral no cuenta
        assert!(!snapshot.is_active(GamepadButton::RightTrigger));
    }

    #[test]
    fn test_axis_buttons_ignored_by_with_button() {
        let snapshot = GamepadSnapshot::connected()
            .with_button(GamepadButton::A)
            .with_button(GamepadButton::LeftTrigger);

        assert!(snapshot.is_active(GamepadButton::A));
        assert!(!snapshot.is_active(GamepadButton::LeftTrigger));
    }

    #[test]
    fn test_sticks_are_clamped() {
        let snapshot = GamepadSnapshot::connected().with_left_stick(3.0, -7.5);
        assert_eq!(snapshot.left_stick, Thumbstick::new(1.0, -1.0));
    }

    #[test]
    fn test_neutral_is_disconnected() {
        let snapshot = GamepadSnapshot::neutral();
        assert!(!snapshot.connected);
        assert!(!snapshot.is_active(GamepadButton::Start));
    }
}
