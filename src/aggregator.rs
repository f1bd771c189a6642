use std::time::Duration;

use log::{info, trace, warn};

use crate::config::InputConfig;
use crate::devices::gamepad::{GamepadButton, GamepadSnapshot, PlayerSlot, Thumbstick};
use crate::devices::keyboard::{KeyCode, KeyboardSnapshot};
use crate::devices::mouse::{MouseButton, MouseSnapshot};
use crate::error::{DeviceKind, InputError, Result};
use crate::playback::{ScheduledEntry, ScriptedPlayer};
use crate::tracker::DeviceTracker;
use crate::traits::backend::InputBackend;
use crate::traits::state::EdgeQueryExt;

/// Fuente que alimenta el tracker del teclado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardSource {
    /// Lectura del teclado físico vía [`InputBackend::poll_keyboard`].
    #[default]
    Live,
    /// Reproducción del [`ScriptedPlayer`] interno.
    Scripted,
}

/// # Struct `InputAggregator`
///
/// Punto de entrada del subsistema: mantiene un [`DeviceTracker`] por
/// dispositivo (teclado, mouse y los cuatro slots de gamepad) y decide si el
/// teclado se alimenta del backend o del script.
///
/// ## Ciclo por frame
///
/// 1. El host llama a [`advance`](Self::advance) exactamente una vez por frame.
/// 2. Se leen **todos** los dispositivos en vivo, incluidos slots desconectados.
/// 3. Solo si todas las lecturas tuvieron éxito se rotan los trackers; un
///    fallo deja el estado intacto y se devuelve de inmediato.
/// 4. Entre dos `advance`, todas las consultas son de solo lectura y estables.
///
/// ## Ejemplo de uso
///
/// ```rust,ignore
/// use std::time::Duration;
/// use orbit_input_playback::{HeadlessBackend, InputAggregator, KeyCode, KeyboardSnapshot};
///
/// let mut input = InputAggregator::new(HeadlessBackend);
/// input.set_scripted_mode(true);
/// input.enqueue_scripted_keyboard_input(KeyboardSnapshot::new(&[KeyCode::D]), Duration::from_secs(1));
///
/// // En el game loop:
/// input.advance(frame_time)?;
/// if input.is_key_down(KeyCode::D) {
///     player.move_right();
/// }
/// ```
#[derive(Debug)]
pub struct InputAggregator<B: InputBackend> {
    backend: B,
    keyboard_source: KeyboardSource,
    keyboard: DeviceTracker<KeyboardSnapshot>,
    script: ScriptedPlayer<KeyboardSnapshot>,
    mouse: DeviceTracker<MouseSnapshot>,
    gamepads: [DeviceTracker<GamepadSnapshot>; PlayerSlot::COUNT],
    frame: u64,
}

impl<B: InputBackend> InputAggregator<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, InputConfig::default())
    }

    pub fn with_config(backend: B, config: InputConfig) -> Self {
        Self::with_script(backend, config, [])
    }

    /// Crea el agregador con un script de teclado ya cargado; su primer paso
    /// queda activo desde la construcción.
    pub fn with_script<I>(backend: B, config: InputConfig, entries: I) -> Self
    where
        I: IntoIterator<Item = ScheduledEntry<KeyboardSnapshot>>,
    {
        info!(
            "input inicializado con backend {} (teclado {:?})",
            backend.backend_name(),
            config.keyboard_source
        );
        Self {
            backend,
            keyboard_source: config.keyboard_source,
            keyboard: DeviceTracker::new(),
            script: ScriptedPlayer::from_entries(entries).with_boundary(config.boundary),
            mouse: DeviceTracker::new(),
            gamepads: std::array::from_fn(|_| DeviceTracker::new()),
            frame: 0,
        }
    }

    // ==================== CICLO DE FRAME ====================

    /// Actualiza todos los dispositivos para un nuevo frame.
    ///
    /// # Errores
    ///
    /// [`InputError::SourceUnavailable`] si el backend no entrega snapshot
    /// para algún dispositivo. En ese caso ningún tracker se modifica.
    pub fn advance(&mut self, elapsed: Duration) -> Result<()> {
        trace!("frame {} (+{:?})", self.frame + 1, elapsed);

        let keyboard = match self.keyboard_source {
            KeyboardSource::Live => {
                Some(require(DeviceKind::Keyboard, self.backend.poll_keyboard())?)
            }
            KeyboardSource::Scripted => None,
        };
        let mouse = require(DeviceKind::Mouse, self.backend.poll_mouse())?;
        let mut gamepads = [GamepadSnapshot::default(); PlayerSlot::COUNT];
        for slot in PlayerSlot::ALL {
            gamepads[slot.index()] =
                require(DeviceKind::Gamepad(slot), self.backend.poll_gamepad(slot))?;
        }

        let keyboard = keyboard.unwrap_or_else(|| {
            self.script.advance(elapsed);
            *self.script.current()
        });
        self.keyboard.rotate(keyboard);
        self.mouse.rotate(mouse);
        for (tracker, fresh) in self.gamepads.iter_mut().zip(gamepads) {
            tracker.rotate(fresh);
        }

        self.frame += 1;
        Ok(())
    }

    /// Cantidad de `advance` completados con éxito.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ==================== FUENTE DEL TECLADO ====================

    /// Activa o desactiva el teclado programado. No afecta mouse ni gamepads.
    pub fn set_scripted_mode(&mut self, enabled: bool) {
        self.set_keyboard_source(if enabled {
            KeyboardSource::Scripted
        } else {
            KeyboardSource::Live
        });
    }

    pub fn set_keyboard_source(&mut self, source: KeyboardSource) {
        if self.keyboard_source != source {
            info!("fuente de teclado: {:?} -> {:?}", self.keyboard_source, source);
            self.keyboard_source = source;
        }
    }

    pub fn keyboard_source(&self) -> KeyboardSource {
        self.keyboard_source
    }

    pub fn is_scripted(&self) -> bool {
        self.keyboard_source == KeyboardSource::Scripted
    }

    /// Encola un paso en el script de teclado. Puede llamarse en cualquier momento.
    pub fn enqueue_scripted_keyboard_input(&mut self, snapshot: KeyboardSnapshot, duration: Duration) {
        self.script.enqueue(snapshot, duration);
    }

    pub fn script(&self) -> &ScriptedPlayer<KeyboardSnapshot> {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut ScriptedPlayer<KeyboardSnapshot> {
        &mut self.script
    }

    // ==================== TRACKERS ====================

    pub fn keyboard(&self) -> &DeviceTracker<KeyboardSnapshot> {
        &self.keyboard
    }

    pub fn mouse(&self) -> &DeviceTracker<MouseSnapshot> {
        &self.mouse
    }

    pub fn gamepad(&self, slot: PlayerSlot) -> &DeviceTracker<GamepadSnapshot> {
        &self.gamepads[slot.index()]
    }

    /// Igual que [`gamepad`](Self::gamepad) pero desde un índice numérico.
    ///
    /// # Errores
    ///
    /// [`InputError::OutOfRange`] si `index` no está en `0..4`.
    pub fn gamepad_at(&self, index: usize) -> Result<&DeviceTracker<GamepadSnapshot>> {
        PlayerSlot::try_from(index).map(|slot| self.gamepad(slot))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ==================== TECLADO ====================

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    pub fn is_key_up(&self, key: KeyCode) -> bool {
        self.keyboard.is_up(key)
    }

    pub fn was_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.was_just_pressed(key)
    }

    pub fn was_key_just_released(&self, key: KeyCode) -> bool {
        self.keyboard.was_just_released(key)
    }

    // ==================== MOUSE ====================

    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse.is_down(button)
    }

    pub fn is_mouse_button_up(&self, button: MouseButton) -> bool {
        self.mouse.is_up(button)
    }

    pub fn was_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse.was_just_pressed(button)
    }

    pub fn was_mouse_button_just_released(&self, button: MouseButton) -> bool {
        self.mouse.was_just_released(button)
    }

    pub fn mouse_position(&self) -> (i32, i32) {
        self.mouse.position()
    }

    pub fn mouse_position_delta(&self) -> (i32, i32) {
        self.mouse.position_delta()
    }

    pub fn was_mouse_moved(&self) -> bool {
        self.mouse.was_moved()
    }

    pub fn scroll_wheel_delta(&self) -> i32 {
        self.mouse.scroll_wheel_delta()
    }

    pub fn horizontal_scroll_wheel_delta(&self) -> i32 {
        self.mouse.horizontal_scroll_wheel_delta()
    }

    // ==================== GAMEPAD ====================

    pub fn is_button_down(&self, slot: PlayerSlot, button: GamepadButton) -> bool {
        self.gamepad(slot).is_down(button)
    }

    pub fn is_button_up(&self, slot: PlayerSlot, button: GamepadButton) -> bool {
        self.gamepad(slot).is_up(button)
    }

    pub fn was_button_just_pressed(&self, slot: PlayerSlot, button: GamepadButton) -> bool {
        self.gamepad(slot).was_just_pressed(button)
    }

    pub fn was_button_just_released(&self, slot: PlayerSlot, button: GamepadButton) -> bool {
        self.gamepad(slot).was_just_released(button)
    }

    pub fn is_gamepad_connected(&self, slot: PlayerSlot) -> bool {
        self.gamepad(slot).is_connected()
    }

    /// `true` solo en el frame donde el slot pasó a estar conectado.
    pub fn was_gamepad_connected(&self, slot: PlayerSlot) -> bool {
        self.gamepad(slot).was_just_connected()
    }

    /// `true` solo en el frame donde el slot pasó a estar desconectado.
    pub fn was_gamepad_disconnected(&self, slot: PlayerSlot) -> bool {
        self.gamepad(slot).was_just_disconnected()
    }

    pub fn left_thumbstick(&self, slot: PlayerSlot) -> Thumbstick {
        self.gamepad(slot).left_thumbstick()
    }

    pub fn right_thumbstick(&self, slot: PlayerSlot) -> Thumbstick {
        self.gamepad(slot).right_thumbstick()
    }

    pub fn left_trigger(&self, slot: PlayerSlot) -> f32 {
        self.gamepad(slot).left_trigger()
    }

    pub fn right_trigger(&self, slot: PlayerSlot) -> f32 {
        self.gamepad(slot).right_trigger()
    }
}

fn require<S>(device: DeviceKind, snapshot: Option<S>) -> Result<S> {
    snapshot.ok_or_else(|| {
        warn!("{device} no entregó snapshot");
        InputError::SourceUnavailable { device }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::backend::HeadlessBackend;

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    /// Backend con teclado fijo y un mouse que puede "desaparecer".
    #[derive(Default)]
    struct FixedBackend {
        keys: KeyboardSnapshot,
        mouse_missing: bool,
        polls: usize,
    }

    impl InputBackend for FixedBackend {
        fn poll_keyboard(&mut self) -> Option<KeyboardSnapshot> {
            self.polls += 1;
            Some(self.keys)
        }

        fn poll_mouse(&mut self) -> Option<MouseSnapshot> {
            (!self.mouse_missing).then(MouseSnapshot::default)
        }

        fn poll_gamepad(&mut self, _slot: PlayerSlot) -> Option<GamepadSnapshot> {
            Some(GamepadSnapshot::default())
        }
    }

    #[test]
    fn test_live_keyboard_rotates() {
        let mut input = InputAggregator::new(FixedBackend {
            keys: KeyboardSnapshot::new(&[KeyCode::W]),
            ..Default::default()
        });

        input.advance(secs(0.016)).unwrap();
        assert!(input.was_key_just_pressed(KeyCode::W));

        input.advance(secs(0.016)).unwrap();
        assert!(input.is_key_down(KeyCode::W));
        assert!(!input.was_key_just_pressed(KeyCode::W));
        assert_eq!(input.frame(), 2);
    }

    #[test]
    fn test_scripted_mode_skips_live_keyboard() {
        let config = InputConfig::default().with_keyboard_source(KeyboardSource::Scripted);
        let mut input = InputAggregator::with_config(FixedBackend::default(), config);
        input.enqueue_scripted_keyboard_input(KeyboardSnapshot::new(&[KeyCode::D]), secs(1.0));

        input.advance(secs(0.5)).unwrap();
        assert!(input.is_key_down(KeyCode::D));
        assert_eq!(input.backend().polls, 0);
    }

    #[test]
    fn test_source_unavailable_leaves_state_untouched() {
        let mut input = InputAggregator::new(FixedBackend {
            keys: KeyboardSnapshot::new(&[KeyCode::A]),
            ..Default::default()
        });
        input.advance(secs(0.016)).unwrap();

        input.backend_mut().keys = KeyboardSnapshot::new(&[KeyCode::B]);
        input.backend_mut().mouse_missing = true;
        let err = input.advance(secs(0.016)).unwrap_err();

        assert_eq!(
            err,
            InputError::SourceUnavailable {
                device: DeviceKind::Mouse
            }
        );
        assert!(input.is_key_down(KeyCode::A));
        assert!(input.was_key_just_pressed(KeyCode::A));
        assert_eq!(input.frame(), 1);
    }

    #[test]
    fn test_gamepad_at_rejects_out_of_range() {
        let input = InputAggregator::new(HeadlessBackend);
        assert!(input.gamepad_at(3).is_ok());
        assert_eq!(
            input.gamepad_at(4).unwrap_err(),
            InputError::OutOfRange { index: 4, count: 4 }
        );
    }

    #[test]
    fn test_switching_source_keeps_frame_lag() {
        let mut input = InputAggregator::with_script(
            FixedBackend {
                keys: KeyboardSnapshot::new(&[KeyCode::Q]),
                ..Default::default()
            },
            InputConfig::default(),
            [ScheduledEntry::new(KeyboardSnapshot::new(&[KeyCode::E]), secs(1.0))],
        );

        input.advance(secs(0.1)).unwrap();
        assert!(input.is_key_down(KeyCode::Q));

        input.set_scripted_mode(true);
        input.advance(secs(0.1)).unwrap();
        assert!(input.was_key_just_released(KeyCode::Q));
        assert!(input.was_key_just_pressed(KeyCode::E));

        input.set_scripted_mode(false);
        input.advance(secs(0.1)).unwrap();
        assert!(input.was_key_just_released(KeyCode::E));
        assert!(input.was_key_just_pressed(KeyCode::Q));
    }
}
