//! Adaptación concurrente del agregador.
//!
//! El núcleo es de un solo hilo. [`SharedInput`] lo envuelve en un
//! `Arc<RwLock<_>>`: `advance` toma el lock de escritura (un frame a la vez)
//! y cualquier cantidad de lectores puede consultar en paralelo entre frames.
//!
//! El lock se elige por feature:
//! - `std_lock` (por defecto): `std::sync::RwLock`; un lock envenenado se recupera.
//! - `parking_lot`: `parking_lot::RwLock`.

use std::sync::Arc;
use std::time::Duration;

use crate::aggregator::InputAggregator;
use crate::error::Result;
use crate::traits::backend::InputBackend;

#[cfg(feature = "parking_lot")]
mod lock {
    pub use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
        lock.read()
    }

    pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
        lock.write()
    }
}

#[cfg(not(feature = "parking_lot"))]
mod lock {
    pub use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    use std::sync::PoisonError;

    pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
        lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
        lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}

pub use lock::{RwLockReadGuard, RwLockWriteGuard};

/// # Struct `SharedInput`
///
/// Handle clonable a un [`InputAggregator`] compartido entre hilos.
///
/// ```rust,ignore
/// let input = SharedInput::new(InputAggregator::new(HeadlessBackend));
/// let reader = input.clone();
///
/// std::thread::spawn(move || {
///     if reader.read().is_key_down(KeyCode::Escape) {
///         println!("Saliendo...");
///     }
/// });
///
/// input.advance(Duration::from_millis(16))?;
/// ```
#[derive(Debug)]
pub struct SharedInput<B: InputBackend> {
    inner: Arc<lock::RwLock<InputAggregator<B>>>,
}

impl<B: InputBackend> SharedInput<B> {
    pub fn new(aggregator: InputAggregator<B>) -> Self {
        Self {
            inner: Arc::new(lock::RwLock::new(aggregator)),
        }
    }

    /// Avanza un frame bajo el lock de escritura.
    pub fn advance(&self, elapsed: Duration) -> Result<()> {
        lock::write(&self.inner).advance(elapsed)
    }

    /// Acceso de solo lectura para consultas.
    pub fn read(&self) -> RwLockReadGuard<'_, InputAggregator<B>> {
        lock::read(&self.inner)
    }

    /// Acceso exclusivo, por ejemplo para cambiar la fuente del teclado o
    /// encolar pasos de script.
    pub fn write(&self) -> RwLockWriteGuard<'_, InputAggregator<B>> {
        lock::write(&self.inner)
    }
}

impl<B: InputBackend> Clone for SharedInput<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
