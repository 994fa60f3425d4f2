//! Data model for the territorial tree.
//!
//! Wire field names (`id_dep`, `lib_dep`, …) are those of the source
//! dataset and are preserved through serde renames. Child lists keep the
//! source insertion order; a node without children deserializes to an
//! empty list. Ids are unique among siblings only — the same commune id
//! may appear under two different départements.

use serde::{Deserialize, Serialize};

/// A quartier (neighborhood) — the leaf level of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quartier {
    #[serde(rename = "id_quartier")]
    pub id: u32,
    #[serde(rename = "lib_quartier")]
    pub name: String,
}

/// An arrondissement (borough) within a commune.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrondissement {
    #[serde(rename = "id_arrond")]
    pub id: u32,
    #[serde(rename = "lib_arrond")]
    pub name: String,
    #[serde(default)]
    pub quartiers: Vec<Quartier>,
}

/// A commune within a département.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commune {
    #[serde(rename = "id_com")]
    pub id: u32,
    #[serde(rename = "lib_com")]
    pub name: String,
    #[serde(default)]
    pub arrondissements: Vec<Arrondissement>,
}

/// A département — the top level of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departement {
    #[serde(rename = "id_dep")]
    pub id: u32,
    #[serde(rename = "lib_dep")]
    pub name: String,
    #[serde(default)]
    pub communes: Vec<Commune>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departement_deserializes_wire_names() {
        let dep: Departement = serde_json::from_str(
            r#"{"id_dep": 8, "lib_dep": "Littoral", "communes": [
                {"id_com": 1, "lib_com": "Cotonou"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(dep.id, 8);
        assert_eq!(dep.name, "Littoral");
        assert_eq!(dep.communes.len(), 1);
        assert_eq!(dep.communes[0].name, "Cotonou");
        // Missing child list defaults to empty.
        assert!(dep.communes[0].arrondissements.is_empty());
    }

    #[test]
    fn quartier_roundtrips_wire_names() {
        let q = Quartier {
            id: 3,
            name: "Gbégamey".to_string(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id_quartier"], 3);
        assert_eq!(json["lib_quartier"], "Gbégamey");
    }
}
