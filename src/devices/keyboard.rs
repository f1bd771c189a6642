//! Teclado: códigos de tecla y snapshot.
//!
//! Soporte **básico**: teclas alfanuméricas, de función, flechas, modificadores
//! y control general. No interpreta texto ni layouts.

use crate::traits::snapshot::Snapshot;

/// Tecla normalizada del teclado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum KeyCode {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Space, Enter, Escape, Tab, Backspace, Delete, Insert,
    Home, End, PageUp, PageDown,
    ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
}

impl KeyCode {
    /// Todas las teclas, en orden de discriminante.
    #[rustfmt::skip]
    pub const ALL: [KeyCode; 69] = {
        use KeyCode::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M,
            N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            Digit0, Digit1, Digit2, Digit3, Digit4,
            Digit5, Digit6, Digit7, Digit8, Digit9,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
            Space, Enter, Escape, Tab, Backspace, Delete, Insert,
            Home, End, PageUp, PageDown,
            ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
        ]
    };

    fn bit(self) -> (usize, u64) {
        let index = self as usize;
        (index / 64, 1u64 << (index % 64))
    }
}

/// # Struct `KeyboardSnapshot`
///
/// Conjunto de teclas presionadas en un instante. Internamente un bitset de
/// tamaño fijo, por lo que clonar un snapshot no reserva memoria.
///
/// ## Ejemplo
/// ```rust,ignore
/// use orbit_input_playback::{KeyCode, KeyboardSnapshot, Snapshot};
///
/// let snapshot = KeyboardSnapshot::new(&[KeyCode::ControlLeft, KeyCode::S]);
/// assert!(snapshot.is_active(KeyCode::S));
/// assert!(!snapshot.is_active(KeyCode::A));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyboardSnapshot {
    bits: [u64; 2],
}

impl KeyboardSnapshot {
    /// Crea un snapshot con las teclas dadas presionadas.
    pub fn new(keys: &[KeyCode]) -> Self {
        keys.iter().copied().collect()
    }

    /// Retorna una copia con `key` presionada.
    pub fn with_key(mut self, key: KeyCode) -> Self {
        let (word, mask) = key.bit();
        self.bits[word] |= mask;
        self
    }

    /// Retorna `true` si `key` está presionada.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        let (word, mask) = key.bit();
        self.bits[word] & mask != 0
    }

    /// Retorna `true` si ninguna tecla está presionada.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|word| *word == 0)
    }

    /// Itera las teclas presionadas en orden de discriminante.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        KeyCode::ALL
            .into_iter()
            .filter(move |key| self.is_key_down(*key))
    }
}

impl FromIterator<KeyCode> for KeyboardSnapshot {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KeyboardSnapshot::default(), KeyboardSnapshot::with_key)
    }
}

impl Snapshot for KeyboardSnapshot {
    type Control = KeyCode;

    fn is_active(&self, control: KeyCode) -> bool {
        self.is_key_down(control)
    }
}
