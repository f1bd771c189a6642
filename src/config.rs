use crate::aggregator::KeyboardSource;
use crate::playback::BoundaryPolicy;

/// # Struct `InputConfig`
///
/// Configuración inicial del [`InputAggregator`](crate::InputAggregator).
///
/// El crate nunca lee ni escribe archivos; con el feature `serde` el host
/// puede embeber esta estructura en su propia configuración.
///
/// ```rust,ignore
/// let config = InputConfig::default()
///     .with_keyboard_source(KeyboardSource::Scripted)
///     .with_boundary(BoundaryPolicy::Inclusive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Fuente del teclado al arrancar.
    pub keyboard_source: KeyboardSource,
    /// Política de frontera del reproductor de scripts.
    pub boundary: BoundaryPolicy,
}

impl InputConfig {
    pub fn with_keyboard_source(mut self, source: KeyboardSource) -> Self {
        self.keyboard_source = source;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.keyboard_source, KeyboardSource::Live);
        assert_eq!(config.boundary, BoundaryPolicy::Strict);
    }

    #[test]
    fn test_builder() {
        let config = InputConfig::default()
            .with_keyboard_source(KeyboardSource::Scripted)
            .with_boundary(BoundaryPolicy::Inclusive);
        assert_eq!(config.keyboard_source, KeyboardSource::Scripted);
        assert_eq!(config.boundary, BoundaryPolicy::Inclusive);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = InputConfig::default()
            .with_keyboard_source(KeyboardSource::Scripted)
            .with_boundary(BoundaryPolicy::Inclusive);
        let json = serde_json::to_string(&config).unwrap();
        let restored: InputConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let config: InputConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InputConfig::default());

        let config: InputConfig = serde_json::from_str(r#"{"boundary":"Inclusive"}"#).unwrap();
        assert_eq!(config.boundary, BoundaryPolicy::Inclusive);
        assert_eq!(config.keyboard_source, KeyboardSource::Live);
    }
}
