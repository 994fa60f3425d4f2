//! Dataset loading and load-time validation.
//!
//! The production dataset is compiled into the binary via `include_str!`
//! and parsed once at startup ([`bundled`]). Deployments can point at an
//! alternate JSON file with [`from_path`]. Every load path runs the same
//! validation: duplicate sibling ids and id 0 are rejected, so the
//! service never starts on a tree where lookup would be ambiguous.

use std::path::Path;

use crate::error::DatasetError;
use crate::lookup::Decoupage;
use crate::model::Departement;

/// The bundled territorial dataset for Benin.
const BUNDLED_DATASET: &str = include_str!("../data/decoupage_territorial_benin.json");

/// Load and validate the bundled dataset.
pub fn bundled() -> Result<Decoupage, DatasetError> {
    from_json_str(BUNDLED_DATASET)
}

/// Load and validate a dataset from a JSON file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<Decoupage, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    from_json_str(&raw)
}

/// Parse and validate a dataset from a JSON string.
pub fn from_json_str(raw: &str) -> Result<Decoupage, DatasetError> {
    let departements: Vec<Departement> = serde_json::from_str(raw)?;
    validate(&departements)?;
    Ok(Decoupage::new(departements))
}

/// Check sibling-id uniqueness and id validity at every level.
///
/// Ids are only required to be unique among siblings; the same commune id
/// under two different départements is legal and exercised by the data.
fn validate(departements: &[Departement]) -> Result<(), DatasetError> {
    check_siblings(
        "département",
        "racine",
        departements.iter().map(|d| d.id),
    )?;
    for dep in departements {
        let dep_label = format!("département '{}'", dep.name);
        check_siblings("commune", &dep_label, dep.communes.iter().map(|c| c.id))?;
        for com in &dep.communes {
            let com_label = format!("commune '{}'", com.name);
            check_siblings(
                "arrondissement",
                &com_label,
                com.arrondissements.iter().map(|a| a.id),
            )?;
            for arr in &com.arrondissements {
                let arr_label = format!("arrondissement '{}'", arr.name);
                check_siblings("quartier", &arr_label, arr.quartiers.iter().map(|q| q.id))?;
            }
        }
    }
    Ok(())
}

fn check_siblings(
    level: &'static str,
    parent: &str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), DatasetError> {
    let mut seen = Vec::new();
    for id in ids {
        if id == 0 {
            return Err(DatasetError::ZeroId {
                level,
                parent: parent.to_string(),
            });
        }
        if seen.contains(&id) {
            return Err(DatasetError::DuplicateId {
                level,
                id,
                parent: parent.to_string(),
            });
        }
        seen.push(id);
    }
    Ok(())
}
