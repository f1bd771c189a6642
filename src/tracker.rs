use crate::devices::gamepad::{GamepadSnapshot, Thumbstick};
use crate::devices::mouse::MouseSnapshot;
use crate::traits::snapshot::Snapshot;
use crate::traits::state::EdgeQueryExt;

/// # Struct `DeviceTracker`
///
/// Par `{previous, current}` de un dispositivo (o slot de gamepad).
///
/// Ambos snapshots arrancan neutros. Se actualiza exactamente una vez por
/// frame: `previous` es siempre el `current` del frame anterior.
#[derive(Debug, Clone, Default)]
pub struct DeviceTracker<S: Snapshot> {
    previous: S,
    current: S,
}

impl<S: Snapshot> DeviceTracker<S> {
    pub fn new() -> Self {
        Self {
            previous: S::neutral(),
            current: S::neutral(),
        }
    }

    /// `previous ← current; current ← fresh`.
    pub fn rotate(&mut self, fresh: S) {
        self.previous = std::mem::replace(&mut self.current, fresh);
    }
}

impl<S: Snapshot> EdgeQueryExt<S> for DeviceTracker<S> {
    fn current(&self) -> &S {
        &self.current
    }

    fn previous(&self) -> &S {
        &self.previous
    }
}

impl DeviceTracker<MouseSnapshot> {
    pub fn position(&self) -> (i32, i32) {
        self.current.position()
    }

    /// Movimiento del puntero desde el frame anterior.
    ///
    /// Los deltas usan aritmética envolvente: un contador que da la vuelta
    /// sigue produciendo el delta real y la consulta nunca entra en pánico.
    pub fn position_delta(&self) -> (i32, i32) {
        (
            self.current.x.wrapping_sub(self.previous.x),
            self.current.y.wrapping_sub(self.previous.y),
        )
    }

    pub fn was_moved(&self) -> bool {
        self.position_delta() != (0, 0)
    }

    pub fn scroll_wheel_delta(&self) -> i32 {
        self.current.scroll_wheel.wrapping_sub(self.previous.scroll_wheel)
    }

    pub fn horizontal_scroll_wheel_delta(&self) -> i32 {
        self.current
            .horizontal_scroll_wheel
            .wrapping_sub(self.previous.horizontal_scroll_wheel)
    }
}

impl DeviceTracker<GamepadSnapshot> {
    pub fn is_connected(&self) -> bool {
        self.current.connected
    }

    pub fn was_just_connected(&self) -> bool {
        self.current.connected && !self.previous.connected
    }

    pub fn was_just_disconnected(&self) -> bool {
        !self.current.connected && self.previous.connected
    }

    pub fn left_thumbstick(&self) -> Thumbstick {
        self.current.left_stick
    }

    pub fn right_thumbstick(&self) -> Thumbstick {
        self.current.right_stick
    }

    pub fn left_trigger(&self) -> f32 {
        self.current.left_trigger
    }

    pub fn right_trigger(&self) -> f32 {
        self.current.right_trigger
    }
}
