//! Protocolo de traits del subsistema: snapshots, detección de flancos y
//! colaborador de plataforma.

pub mod backend;
pub mod snapshot;
pub mod state;
