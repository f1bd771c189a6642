use crate::devices::gamepad::{GamepadSnapshot, PlayerSlot};
use crate::devices::keyboard::KeyboardSnapshot;
use crate::devices::mouse::MouseSnapshot;

/// # Trait `InputBackend`
///
/// Define el **colaborador de plataforma** que entrega un snapshot fresco de
/// cada dispositivo una vez por frame.
///
/// El núcleo no lee dispositivos por su cuenta: el
/// [`InputAggregator`](crate::InputAggregator) llama a este trait dentro de
/// cada `advance` y deriva los flancos a partir de los snapshots devueltos.
///
/// ## Diagrama conceptual
///
/// ```text
/// ┌──────────────┐  poll_*()  ┌──────────────────┐  is_down / was_just_pressed
/// │ OS / motor   │ ─────────▶ │ InputAggregator  │ ◀──────────────────────────── game loop
/// │ (backend)    │            │ advance(elapsed) │
/// └──────────────┘            └──────────────────┘
/// ```
///
/// ## Contrato
///
/// - Devolver `None` significa que la fuente **no está disponible** (violación
///   del contrato). El agregador lo propaga como
///   [`InputError::SourceUnavailable`](crate::InputError::SourceUnavailable)
///   sin reintentar.
/// - Un gamepad desconectado **no** es `None`: se reporta con
///   [`GamepadSnapshot::default()`], que el núcleo consulta como "todos los
///   controles inactivos".
/// - Ningún método debe bloquear; se invocan de forma síncrona dentro del frame.
///
/// ## Ejemplo de implementación (conceptual)
///
/// ```rust,ignore
/// use orbit_input_playback::{InputBackend, KeyboardSnapshot, MouseSnapshot, GamepadSnapshot, PlayerSlot};
///
/// struct WinitBackend { keys: KeyboardSnapshot, mouse: MouseSnapshot }
///
/// impl InputBackend for WinitBackend {
///     fn poll_keyboard(&mut self) -> Option<KeyboardSnapshot> { Some(self.keys) }
///     fn poll_mouse(&mut self) -> Option<MouseSnapshot> { Some(self.mouse) }
///     fn poll_gamepad(&mut self, _slot: PlayerSlot) -> Option<GamepadSnapshot> {
///         Some(GamepadSnapshot::default())
///     }
///     fn backend_name(&self) -> &'static str { "winit" }
/// }
/// ```
pub trait InputBackend {
    /// Lee el estado actual del teclado físico.
    fn poll_keyboard(&mut self) -> Option<KeyboardSnapshot>;

    /// Lee el estado actual del mouse.
    fn poll_mouse(&mut self) -> Option<MouseSnapshot>;

    /// Lee el estado actual del gamepad en `slot`.
    fn poll_gamepad(&mut self, slot: PlayerSlot) -> Option<GamepadSnapshot>;

    /// Descripción textual del backend, útil para logging y diagnóstico.
    fn backend_name(&self) -> &'static str {
        "desconocido"
    }
}

/// Backend sin dispositivos: todo snapshot es neutro y los cuatro gamepads
/// aparecen desconectados.
///
/// Pensado para automatización y demos sin operador, combinado con el modo
/// de teclado programado.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessBackend;

impl InputBackend for HeadlessBackend {
    fn poll_keyboard(&mut self) -> Option<KeyboardSnapshot> {
        Some(KeyboardSnapshot::default())
    }

    fn poll_mouse(&mut self) -> Option<MouseSnapshot> {
        Some(MouseSnapshot::default())
    }

    fn poll_gamepad(&mut self, _slot: PlayerSlot) -> Option<GamepadSnapshot> {
        Some(GamepadSnapshot::default())
    }

    fn backend_name(&self) -> &'static str {
        "headless"
    }
}
