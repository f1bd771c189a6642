//! Reproducción determinista de input programado.
//!
//! Un script es una cola de pasos `(snapshot, duración)`. Cada paso se mantiene
//! activo mientras no haya transcurrido su duración; al vencer se pasa al
//! siguiente. Con la cola agotada el reproductor queda en reposo exponiendo el
//! snapshot neutro.
//!
//! ```text
//!   Holding(e) ──tiempo restante──▶ Holding(e)
//!   Holding(e) ──vence, cola con pasos──▶ Holding(siguiente)
//!   Holding(e) ──vence, cola vacía──▶ Idle
//!   Idle ──cola vacía──▶ Idle
//!   Idle ──enqueue + advance──▶ Holding(nuevo)
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;

use crate::traits::snapshot::Snapshot;
use crate::traits::state::EdgeQueryExt;

/// # Enum `BoundaryPolicy`
///
/// Decide qué ocurre cuando el tiempo acumulado es **exactamente igual** a la
/// duración del paso.
///
/// - `Strict` (por defecto): el paso sigue activo; solo se avanza cuando el
///   tiempo acumulado supera estrictamente la duración.
/// - `Inclusive`: se avanza en cuanto el tiempo acumulado alcanza la duración.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryPolicy {
    #[default]
    Strict,
    Inclusive,
}

impl BoundaryPolicy {
    fn is_holding(self, held: Duration, duration: Duration) -> bool {
        match self {
            BoundaryPolicy::Strict => held <= duration,
            BoundaryPolicy::Inclusive => held < duration,
        }
    }
}

/// Un paso del script: mantener `snapshot` activo durante `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEntry<S> {
    pub snapshot: S,
    pub duration: Duration,
}

impl<S> ScheduledEntry<S> {
    pub fn new(snapshot: S, duration: Duration) -> Self {
        Self { snapshot, duration }
    }
}

#[derive(Debug, Clone)]
enum Phase<S> {
    Holding {
        entry: ScheduledEntry<S>,
        held: Duration,
    },
    Idle,
}

/// # Struct `ScriptedPlayer`
///
/// Reproductor de scripts de input para un tipo de snapshot `S`.
///
/// Expone `current`/`previous` igual que un [`DeviceTracker`](crate::DeviceTracker),
/// por lo que las consultas de [`EdgeQueryExt`] funcionan sin cambios.
///
/// ## Reglas
/// - La cola se consume de frente a cola; un paso consumido no vuelve a activarse.
/// - Cada [`advance`](Self::advance) produce como máximo una transición. Al vencer
///   un paso, el tiempo sobrante se descarta y el contador vuelve a cero.
/// - En cada `advance`, `previous` pasa a ser el `current` anterior, así los
///   flancos duran exactamente un frame.
/// - `advance` nunca falla: agotar la cola es terminación normal.
///
/// ## Ejemplo
/// ```rust,ignore
/// use std::time::Duration;
/// use orbit_input_playback::{EdgeQueryExt, KeyCode, KeyboardSnapshot, ScheduledEntry, ScriptedPlayer};
///
/// let mut player = ScriptedPlayer::from_entries([
///     ScheduledEntry::new(KeyboardSnapshot::new(&[KeyCode::D]), Duration::from_secs(1)),
///     ScheduledEntry::new(KeyboardSnapshot::new(&[KeyCode::S]), Duration::from_secs(1)),
/// ]);
///
/// player.advance(Duration::from_millis(500));
/// assert!(player.is_down(KeyCode::D));
///
/// player.advance(Duration::from_millis(600));
/// assert!(player.was_just_pressed(KeyCode::S));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedPlayer<S: Snapshot> {
    queue: VecDeque<ScheduledEntry<S>>,
    phase: Phase<S>,
    previous: S,
    current: S,
    boundary: BoundaryPolicy,
}

impl<S: Snapshot> ScriptedPlayer<S> {
    /// Reproductor vacío, en reposo y con ambos snapshots neutros.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            phase: Phase::Idle,
            previous: S::neutral(),
            current: S::neutral(),
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Encola todos los pasos y activa el primero de inmediato.
    ///
    /// Sin pasos, equivale a [`new`](Self::new).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ScheduledEntry<S>>,
    {
        let mut player = Self::new();
        player.queue.extend(entries);
        if let Some(entry) = player.queue.pop_front() {
            player.current = entry.snapshot.clone();
            player.phase = Phase::Holding {
                entry,
                held: Duration::ZERO,
            };
        }
        player
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Agrega un paso al final de la cola. No falla.
    ///
    /// Si el reproductor está en reposo, el paso se activa en el próximo
    /// [`advance`](Self::advance).
    pub fn enqueue(&mut self, snapshot: S, duration: Duration) {
        self.queue.push_back(ScheduledEntry::new(snapshot, duration));
    }

    /// Avanza la reproducción `elapsed`.
    ///
    /// Al reactivarse desde reposo, el tiempo de este frame ya cuenta para el
    /// paso recién activado.
    pub fn advance(&mut self, elapsed: Duration) {
        let holding = match &mut self.phase {
            Phase::Holding { entry, held } => {
                *held = held.saturating_add(elapsed);
                self.boundary.is_holding(*held, entry.duration)
            }
            Phase::Idle => false,
        };

        let fresh = if holding {
            self.current.clone()
        } else {
            self.next_step(elapsed)
        };
        self.previous = std::mem::replace(&mut self.current, fresh);
    }

    fn next_step(&mut self, elapsed: Duration) -> S {
        let resuming = self.is_idle();
        match self.queue.pop_front() {
            Some(entry) => {
                debug!(
                    "paso de script activado: {:?} ({} en cola{})",
                    entry.duration,
                    self.queue.len(),
                    if resuming { ", desde reposo" } else { "" }
                );
                let snapshot = entry.snapshot.clone();
                let held = if resuming { elapsed } else { Duration::ZERO };
                self.phase = Phase::Holding { entry, held };
                snapshot
            }
            None => {
                if !resuming {
                    debug!("script agotado, input neutro");
                    self.phase = Phase::Idle;
                }
                S::neutral()
            }
        }
    }

    /// Descarta la cola y el paso activo. El snapshot neutro entra en efecto
    /// en el próximo `advance`.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.phase = Phase::Idle;
    }

    /// `true` si no hay paso activo.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// `true` si no hay paso activo ni pasos pendientes.
    pub fn is_finished(&self) -> bool {
        self.is_idle() && self.queue.is_empty()
    }

    /// Pasos en cola, sin contar el activo.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn active_entry(&self) -> Option<&ScheduledEntry<S>> {
        match &self.phase {
            Phase::Holding { entry, .. } => Some(entry),
            Phase::Idle => None,
        }
    }

    /// Tiempo acumulado en el paso activo; cero en reposo.
    pub fn elapsed_in_step(&self) -> Duration {
        match &self.phase {
            Phase::Holding { held, .. } => *held,
            Phase::Idle => Duration::ZERO,
        }
    }
}

impl<S: Snapshot> Default for ScriptedPlayer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Snapshot> EdgeQueryExt<S> for ScriptedPlayer<S> {
    fn current(&self) -> &S {
        &self.current
    }

    fn previous(&self) -> &S {
        &self.previous
    }
}
