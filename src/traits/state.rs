use crate::traits::snapshot::Snapshot;

/// # Enum `Edge`
///
/// Clasificación de un control al comparar dos snapshots consecutivos.
///
/// Cada control cae en **exactamente una** variante, por lo que "recién presionado"
/// y "recién liberado" nunca pueden ser verdaderos a la vez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Activo ahora, inactivo en el frame anterior.
    Pressed,
    /// Inactivo ahora, activo en el frame anterior.
    Released,
    /// Activo en ambos frames.
    Held,
    /// Inactivo en ambos frames.
    Idle,
}

impl Edge {
    /// Clasifica un control a partir de su estado previo y actual.
    pub fn classify(was_active: bool, is_active: bool) -> Self {
        match (was_active, is_active) {
            (false, true) => Edge::Pressed,
            (true, false) => Edge::Released,
            (true, true) => Edge::Held,
            (false, false) => Edge::Idle,
        }
    }
}

/// # Trait `EdgeQueryExt`
///
/// Define la interfaz de **detección de flancos** sobre un par de snapshots
/// `(previous, current)` del mismo tipo de dispositivo.
///
/// Quien implementa el trait solo expone los dos snapshots; las consultas
/// están dadas como métodos por defecto y son funciones puras del par.
/// Se cumplen para cada control de forma independiente (teclas, botones y
/// ejes tratados como botones).
///
/// ## Propósito
/// - Unificar "está presionado", "recién presionado" y "recién liberado"
///   para teclado, mouse y gamepad.
/// - Permitir consultas ilimitadas entre dos `advance` con resultados estables.
///
/// ## Ejemplo de uso
/// ```rust,ignore
/// use orbit_input_playback::{EdgeQueryExt, KeyCode};
///
/// fn check_player_jump<T: EdgeQueryExt<KeyboardSnapshot>>(keyboard: &T) {
///     if keyboard.was_just_pressed(KeyCode::Space) {
///         println!("El jugador saltó!");
///     }
/// }
/// ```
pub trait EdgeQueryExt<S: Snapshot> {
    /// Snapshot en efecto para el frame presente.
    fn current(&self) -> &S;

    /// Snapshot del frame anterior.
    fn previous(&self) -> &S;

    /// Retorna `true` si el control está activo en el frame actual.
    fn is_down(&self, control: S::Control) -> bool {
        self.current().is_active(control)
    }

    /// Opuesto exacto de [`is_down`](Self::is_down).
    fn is_up(&self, control: S::Control) -> bool {
        !self.is_down(control)
    }

    /// Retorna `true` solo en el frame donde el control pasó a estar activo.
    fn was_just_pressed(&self, control: S::Control) -> bool {
        self.is_down(control) && !self.previous().is_active(control)
    }

    /// Retorna `true` solo en el frame donde el control dejó de estar activo.
    fn was_just_released(&self, control: S::Control) -> bool {
        self.is_up(control) && self.previous().is_active(control)
    }

    /// Clasifica el control en una única variante de [`Edge`].
    fn edge(&self, control: S::Control) -> Edge {
        Edge::classify(
            self.previous().is_active(control),
            self.current().is_active(control),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Bits(u8);

    impl Snapshot for Bits {
        type Control = u8;

        fn is_active(&self, control: u8) -> bool {
            self.0 & (1 << control) != 0
        }
    }

    struct Pair(Bits, Bits);

    impl EdgeQueryExt<Bits> for Pair {
        fn current(&self) -> &Bits {
            &self.1
        }

        fn previous(&self) -> &Bits {
            &self.0
        }
    }

    #[test]
    fn test_edge_queries_per_control() {
        // bit 0: presionado, bit 1: mantenido, bit 2: liberado, bit 3: inactivo
        let pair = Pair(Bits(0b0110), Bits(0b0011));

        assert!(pair.was_just_pressed(0));
        assert!(!pair.was_just_released(0));
        assert_eq!(pair.edge(0), Edge::Pressed);

        assert!(pair.is_down(1));
        assert!(!pair.was_just_pressed(1));
        assert_eq!(pair.edge(1), Edge::Held);

        assert!(pair.is_up(2));
        assert!(pair.was_just_released(2));
        assert_eq!(pair.edge(2), Edge::Released);

        assert!(pair.is_up(3));
        assert!(!pair.was_just_pressed(3));
        assert!(!pair.was_just_released(3));
        assert_eq!(pair.edge(3), Edge::Idle);
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(Edge::classify(false, true), Edge::Pressed);
        assert_eq!(Edge::classify(true, false), Edge::Released);
        assert_eq!(Edge::classify(true, true), Edge::Held);
        assert_eq!(Edge::classify(false, false), Edge::Idle);
    }
}
