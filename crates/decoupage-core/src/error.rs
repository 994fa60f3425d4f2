//! Error types for dataset loading and hierarchical lookup.

use thiserror::Error;

/// A lookup failed because an entity is absent at some level of the tree.
///
/// The variant identifies the first missing ancestor; the `Display`
/// message is the public, human-readable message served to API clients
/// (the wire contract of the original service, hence French).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No département with the requested id.
    #[error("Département non trouvé")]
    Departement { id: u32 },

    /// The département exists but has no commune with the requested id.
    #[error("Commune non trouvée")]
    Commune { id: u32 },

    /// The commune exists but has no arrondissement with the requested id.
    #[error("Arrondissement non trouvé")]
    Arrondissement { id: u32 },
}

impl LookupError {
    /// The id that failed to resolve, for logging.
    pub fn missing_id(&self) -> u32 {
        match self {
            Self::Departement { id } | Self::Commune { id } | Self::Arrondissement { id } => *id,
        }
    }

    /// The administrative level at which the lookup failed, for logging.
    pub fn level(&self) -> &'static str {
        match self {
            Self::Departement { .. } => "departement",
            Self::Commune { .. } => "commune",
            Self::Arrondissement { .. } => "arrondissement",
        }
    }
}

/// The dataset could not be loaded or failed load-time validation.
///
/// Any variant aborts startup — the service never runs on a partial or
/// inconsistent tree.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or does not match the schema.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two siblings share an id. Ids need only be unique among siblings,
    /// but within one parent a duplicate would make lookup ambiguous.
    #[error("duplicate {level} id {id} under {parent}")]
    DuplicateId {
        level: &'static str,
        id: u32,
        parent: String,
    },

    /// An id of 0 — path parameters are positive integers, so id 0 would
    /// be unreachable through the API.
    #[error("invalid {level} id 0 under {parent}")]
    ZeroId { level: &'static str, parent: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_messages_match_wire_contract() {
        assert_eq!(
            LookupError::Departement { id: 999 }.to_string(),
            "Département non trouvé"
        );
        assert_eq!(
            LookupError::Commune { id: 4 }.to_string(),
            "Commune non trouvée"
        );
        assert_eq!(
            LookupError::Arrondissement { id: 2 }.to_string(),
            "Arrondissement non trouvé"
        );
    }

    #[test]
    fn lookup_error_exposes_level_and_id() {
        let err = LookupError::Commune { id: 7 };
        assert_eq!(err.level(), "commune");
        assert_eq!(err.missing_id(), 7);
    }

    #[test]
    fn dataset_error_names_the_offending_node() {
        let err = DatasetError::DuplicateId {
            level: "commune",
            id: 3,
            parent: "département 'Ouémé'".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate commune id 3 under département 'Ouémé'");
    }
}
