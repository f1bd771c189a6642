//! # Crate `orbit_input_playback`
//!
//! **Agregación de input por frame** y **reproducción determinista** de teclado
//! para el ecosistema de **Orbit Engine**.
//!
//! Este crate mantiene el estado de teclado, mouse y hasta cuatro gamepads frame a
//! frame, deriva los flancos "recién presionado" / "recién liberado" comparando
//! snapshots consecutivos, y permite sustituir el teclado físico por un **script**
//! de snapshots con duración — útil para tests automatizados y demos sin operador.
//!
//! ---
//!
//! ## ¿Qué **no** hace este crate?
//!
//! - ❌ Leer dispositivos del sistema operativo: eso lo hace tu backend
//!   implementando [`InputBackend`].
//! - ❌ Manejar el game loop: el host llama a [`InputAggregator::advance`] una vez
//!   por frame con el tiempo transcurrido.
//! - ❌ Guardar grabaciones de input, remapear teclas o enrutar jugadores más allá
//!   de los cuatro [`PlayerSlot`] fijos.
//!
//! ---
//!
//! ## Ejemplo: demo automatizada
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use orbit_input_playback::{
//!     HeadlessBackend, InputAggregator, InputConfig, KeyCode, KeyboardSnapshot,
//!     KeyboardSource, ScheduledEntry,
//! };
//!
//! let config = InputConfig::default().with_keyboard_source(KeyboardSource::Scripted);
//! let mut input = InputAggregator::with_script(
//!     HeadlessBackend,
//!     config,
//!     [
//!         ScheduledEntry::new(KeyboardSnapshot::new(&[KeyCode::D]), Duration::from_secs(1)),
//!         ScheduledEntry::new(KeyboardSnapshot::new(&[KeyCode::S]), Duration::from_secs(1)),
//!     ],
//! );
//!
//! loop {
//!     input.advance(frame_time)?;
//!
//!     if input.was_key_just_pressed(KeyCode::S) {
//!         println!("¡Agachado!");
//!     }
//! }
//! ```
//!
//! ---
//!
//! ## Conceptos
//!
//! - **Snapshot** ([`Snapshot`]): captura inmutable de qué controles están activos.
//!   Su valor por defecto es el snapshot **neutro**.
//! - **Tracker** ([`DeviceTracker`]): par `{previous, current}` rotado una vez por frame.
//! - **Flanco** ([`EdgeQueryExt`], [`Edge`]): transición derivada del par de snapshots.
//! - **Script** ([`ScriptedPlayer`]): cola de [`ScheduledEntry`] que se consume en orden.
//!   Agotada, expone el snapshot neutro; no es un error.
//!
//! ---
//!
//! ## Features
//!
//! - `std_lock` (por defecto): [`SharedInput`] usa `std::sync::RwLock`.
//! - `parking_lot`: [`SharedInput`] usa `parking_lot::RwLock`.
//! - `serde`: `Serialize`/`Deserialize` para [`InputConfig`] y sus enums.
//!
//! ---
//!
//! ## Logging
//!
//! El crate emite a través de la fachada [`log`]: `debug` en cada transición del
//! script, `info` al cambiar la fuente del teclado, `warn` cuando el backend no
//! entrega un snapshot y `trace` por frame. El host elige el logger.
//!
//! ---
//!
//! ## Módulos
//!
//! - [`traits`]: protocolo ([`Snapshot`], [`EdgeQueryExt`], [`InputBackend`])
//! - [`devices`]: snapshots concretos de teclado, mouse y gamepad
//! - [`playback`]: reproductor de scripts
//! - [`aggregator`]: el agregador por frame
//! - [`shared`]: versión con reader-writer lock

pub mod aggregator;
pub mod config;
pub mod devices;
pub mod error;
pub mod playback;
pub mod shared;
pub mod tracker;
pub mod traits;

pub use aggregator::{InputAggregator, KeyboardSource};
pub use config::InputConfig;
pub use devices::gamepad::{
    AXIS_BUTTON_THRESHOLD, GamepadButton, GamepadSnapshot, PlayerSlot, Thumbstick,
};
pub use devices::keyboard::{KeyCode, KeyboardSnapshot};
pub use devices::mouse::{MouseButton, MouseSnapshot};
pub use error::{DeviceKind, InputError, Result};
pub use playback::{BoundaryPolicy, ScheduledEntry, ScriptedPlayer};
pub use shared::SharedInput;
pub use tracker::DeviceTracker;
pub use traits::backend::{HeadlessBackend, InputBackend};
pub use traits::snapshot::Snapshot;
pub use traits::state::{Edge, EdgeQueryExt};
