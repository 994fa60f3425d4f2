//! Hierarchical lookup over the territorial tree.
//!
//! Each level is a linear scan by integer equality over the parent's
//! child list — first match wins. The dataset is a few hundred nodes, so
//! no id-indexed map is built; if the dataset ever grows, the maps can be
//! added at load time without changing this contract.

use crate::error::LookupError;
use crate::model::{Arrondissement, Commune, Departement, Quartier};

/// The full territorial tree, immutable after construction.
///
/// Constructed by the [`loader`](crate::loader) module; callers hold it
/// behind an `Arc` and share it read-only across requests.
#[derive(Clone, Debug)]
pub struct Decoupage {
    departements: Vec<Departement>,
}

/// Node counts per level, reported once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoupageStats {
    pub departements: usize,
    pub communes: usize,
    pub arrondissements: usize,
    pub quartiers: usize,
}

impl Decoupage {
    pub(crate) fn new(departements: Vec<Departement>) -> Self {
        Self { departements }
    }

    /// All départements, in source order.
    pub fn departements(&self) -> &[Departement] {
        &self.departements
    }

    /// Resolve a département by id.
    pub fn departement(&self, id_dep: u32) -> Result<&Departement, LookupError> {
        self.departements
            .iter()
            .find(|dep| dep.id == id_dep)
            .ok_or(LookupError::Departement { id: id_dep })
    }

    /// The communes of a département, in source order.
    pub fn communes(&self, id_dep: u32) -> Result<&[Commune], LookupError> {
        Ok(&self.departement(id_dep)?.communes)
    }

    /// Resolve a commune within a département.
    pub fn commune(&self, id_dep: u32, id_com: u32) -> Result<&Commune, LookupError> {
        self.departement(id_dep)?
            .communes
            .iter()
            .find(|com| com.id == id_com)
            .ok_or(LookupError::Commune { id: id_com })
    }

    /// The arrondissements of a commune, in source order.
    pub fn arrondissements(
        &self,
        id_dep: u32,
        id_com: u32,
    ) -> Result<&[Arrondissement], LookupError> {
        Ok(&self.commune(id_dep, id_com)?.arrondissements)
    }

    /// Resolve an arrondissement within a commune.
    pub fn arrondissement(
        &self,
        id_dep: u32,
        id_com: u32,
        id_arrond: u32,
    ) -> Result<&Arrondissement, LookupError> {
        self.commune(id_dep, id_com)?
            .arrondissements
            .iter()
            .find(|arr| arr.id == id_arrond)
            .ok_or(LookupError::Arrondissement { id: id_arrond })
    }

    /// The quartiers of an arrondissement, in source order.
    ///
    /// Resolves through all three ancestor levels sequentially and fails
    /// at the first missing one.
    pub fn quartiers(
        &self,
        id_dep: u32,
        id_com: u32,
        id_arrond: u32,
    ) -> Result<&[Quartier], LookupError> {
        Ok(&self.arrondissement(id_dep, id_com, id_arrond)?.quartiers)
    }

    /// Node counts per level.
    pub fn stats(&self) -> DecoupageStats {
        let mut stats = DecoupageStats {
            departements: self.departements.len(),
            communes: 0,
            arrondissements: 0,
            quartiers: 0,
        };
        for dep in &self.departements {
            stats.communes += dep.communes.len();
            for com in &dep.communes {
                stats.arrondissements += com.arrondissements.len();
                for arr in &com.arrondissements {
                    stats.quartiers += arr.quartiers.len();
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Decoupage {
        crate::loader::from_json_str(
            r#"[
                {"id_dep": 1, "lib_dep": "Atacora", "communes": [
                    {"id_com": 1, "lib_com": "Natitingou", "arrondissements": [
                        {"id_arrond": 1, "lib_arrond": "Natitingou I", "quartiers": [
                            {"id_quartier": 1, "lib_quartier": "Santa"},
                            {"id_quartier": 2, "lib_quartier": "Boriyouré"}
                        ]},
                        {"id_arrond": 2, "lib_arrond": "Kotopounga"}
                    ]},
                    {"id_com": 2, "lib_com": "Tanguiéta"}
                ]},
                {"id_dep": 2, "lib_dep": "Donga", "communes": [
                    {"id_com": 1, "lib_com": "Djougou"}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn departement_found_by_exact_id() {
        let db = fixture();
        let dep = db.departement(2).unwrap();
        assert_eq!(dep.id, 2);
        assert_eq!(dep.name, "Donga");
    }

    #[test]
    fn departement_absent_yields_not_found() {
        let db = fixture();
        assert_eq!(
            db.departement(999),
            Err(LookupError::Departement { id: 999 })
        );
    }

    #[test]
    fn communes_preserve_source_order() {
        let db = fixture();
        let names: Vec<&str> = db
            .communes(1)
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Natitingou", "Tanguiéta"]);
    }

    #[test]
    fn commune_ids_are_sibling_local() {
        // id_com 1 exists under both départements and resolves to
        // different communes depending on the ancestor.
        let db = fixture();
        assert_eq!(db.commune(1, 1).unwrap().name, "Natitingou");
        assert_eq!(db.commune(2, 1).unwrap().name, "Djougou");
    }

    #[test]
    fn arrondissements_fail_at_first_missing_ancestor() {
        let db = fixture();
        // Missing département reported as such, even though id_com 1 exists elsewhere.
        assert_eq!(
            db.arrondissements(99, 1),
            Err(LookupError::Departement { id: 99 })
        );
        // Département present, commune absent.
        assert_eq!(
            db.arrondissements(1, 99),
            Err(LookupError::Commune { id: 99 })
        );
    }

    #[test]
    fn quartiers_resolve_through_three_levels() {
        let db = fixture();
        let quartiers = db.quartiers(1, 1, 1).unwrap();
        let names: Vec<&str> = quartiers.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["Santa", "Boriyouré"]);
    }

    #[test]
    fn quartiers_missing_arrondissement_reported() {
        let db = fixture();
        assert_eq!(
            db.quartiers(1, 1, 42),
            Err(LookupError::Arrondissement { id: 42 })
        );
    }

    #[test]
    fn leaf_without_quartiers_returns_empty_list() {
        let db = fixture();
        assert!(db.quartiers(1, 1, 2).unwrap().is_empty());
    }

    #[test]
    fn chained_lookup_consistency() {
        // arrondissements(d, c) succeeds iff departement(d) succeeds and
        // c is among its communes.
        let db = fixture();
        for dep in db.departements() {
            for com in &dep.communes {
                assert!(db.arrondissements(dep.id, com.id).is_ok());
            }
            assert!(db.arrondissements(dep.id, 10_000).is_err());
        }
    }

    #[test]
    fn stats_count_every_level() {
        let stats = fixture().stats();
        assert_eq!(
            stats,
            DecoupageStats {
                departements: 2,
                communes: 3,
                arrondissements: 2,
                quartiers: 2,
            }
        );
    }
}
