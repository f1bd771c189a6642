//! Errores del subsistema de input.
//!
//! Solo existen dos condiciones de fallo reales. El agotamiento de un script
//! **no** es un error: se resuelve al snapshot neutro.

use std::fmt;

use thiserror::Error;

use crate::devices::gamepad::PlayerSlot;

/// Identifica el dispositivo involucrado en un error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Gamepad(PlayerSlot),
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Keyboard => f.write_str("teclado"),
            DeviceKind::Mouse => f.write_str("mouse"),
            DeviceKind::Gamepad(slot) => write!(f, "gamepad {}", slot.index()),
        }
    }
}

/// # Enum `InputError`
///
/// Errores que puede devolver el núcleo de input.
///
/// - [`InputError::OutOfRange`]: índice de slot de gamepad fuera de `0..4`.
///   Se rechaza en lugar de recortarse al rango válido.
/// - [`InputError::SourceUnavailable`]: el backend no entregó snapshot para
///   un dispositivo. Un gamepad desconectado debe reportarse con un snapshot
///   neutro, nunca con ausencia de snapshot.
///
/// Las consultas (`is_down`, `was_just_pressed`, ...) nunca fallan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("slot de gamepad {index} fuera de rango (se esperaba 0..{count})")]
    OutOfRange { index: usize, count: usize },

    #[error("fuente de input no disponible: {device}")]
    SourceUnavailable { device: DeviceKind },
}

/// Alias de resultado usado en todo el crate.
pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = InputError::OutOfRange { index: 7, count: 4 };
        assert_eq!(
            err.to_string(),
            "slot de gamepad 7 fuera de rango (se esperaba 0..4)"
        );
    }

    #[test]
    fn test_source_unavailable_names_device() {
        let err = InputError::SourceUnavailable {
            device: DeviceKind::Gamepad(PlayerSlot::Three),
        };
        assert_eq!(err.to_string(), "fuente de input no disponible: gamepad 2");

        let err = InputError::SourceUnavailable {
            device: DeviceKind::Mouse,
        };
        assert_eq!(err.to_string(), "fuente de input no disponible: mouse");
    }
}
