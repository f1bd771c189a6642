/// # Trait `Snapshot`
///
/// Captura **inmutable** del estado de un dispositivo en un instante dado.
///
/// Un snapshot solo responde consultas puntuales: "¿el control `C` está activo?".
/// No se exige comparación entre snapshots.
///
/// El valor [`Default`] es el **snapshot neutro**: ningún control activo.
/// Es el estado inicial de todo tracker y el estado terminal de un script agotado.
///
/// ## Parámetros asociados
/// - `Control`: el tipo de tecla, botón o eje consultable sobre el snapshot.
///
/// ## Ejemplo de implementación
/// ```rust,ignore
/// use orbit_input_playback::Snapshot;
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// enum Pedal { Left, Right }
///
/// #[derive(Clone, Default)]
/// struct PedalSnapshot { left: bool, right: bool }
///
/// impl Snapshot for PedalSnapshot {
///     type Control = Pedal;
///
///     fn is_active(&self, control: Pedal) -> bool {
///         match control {
///             Pedal::Left => self.left,
///             Pedal::Right => self.right,
///         }
///     }
/// }
/// ```
pub trait Snapshot: Clone + Default {
    /// Tipo de control consultable (tecla, botón, eje tratado como botón).
    type Control: Copy + PartialEq;

    /// Retorna `true` si `control` está activo en este snapshot.
    fn is_active(&self, control: Self::Control) -> bool;

    /// Snapshot neutro: ningún control activo.
    fn neutral() -> Self {
        Self::default()
    }
}
