//! # Territorial Lookup Routes
//!
//! Read-only lookup endpoints over the four-level tree:
//!
//! - `GET /departements/:id_dep` — Un département par son ID
//! - `GET /departements/:id_dep/communes` — Les communes d'un département
//! - `GET /departements/:id_dep/communes/:id_com/arrondissements` — Les
//!   arrondissements d'une commune
//! - `GET /departements/:id_dep/communes/:id_com/arrondissements/:id_arrond/quartiers`
//!   — Les quartiers d'un arrondissement
//!
//! Responses are id + name summaries; the nested subtree is never echoed
//! back. A missing ancestor at any level short-circuits to a 404 whose
//! body names the level that failed.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use decoupage_core::{Arrondissement, Commune, Departement, Quartier};

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the territorial lookup router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departements/:id_dep", get(get_departement))
        .route("/departements/:id_dep/communes", get(list_communes))
        .route(
            "/departements/:id_dep/communes/:id_com/arrondissements",
            get(list_arrondissements),
        )
        .route(
            "/departements/:id_dep/communes/:id_com/arrondissements/:id_arrond/quartiers",
            get(list_quartiers),
        )
}

/// Sentinel for malformed path ids. Path parameters are positive decimal
/// integers; anything else (non-numeric, negative, overflowing) parses to
/// this id, which matches no dataset node, so malformed segments degrade
/// to the level-appropriate 404 rather than a 400.
const ID_SENTINEL: u32 = u32::MAX;

fn path_id(raw: &str) -> u32 {
    raw.parse().unwrap_or(ID_SENTINEL)
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Summary of a département.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartementView {
    /// Identifiant du département.
    pub id_dep: u32,
    /// Nom du département.
    pub lib_dep: String,
}

impl From<&Departement> for DepartementView {
    fn from(dep: &Departement) -> Self {
        Self {
            id_dep: dep.id,
            lib_dep: dep.name.clone(),
        }
    }
}

/// Summary of a commune.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommuneView {
    /// Identifiant de la commune.
    pub id_com: u32,
    /// Nom de la commune.
    pub lib_com: String,
}

impl From<&Commune> for CommuneView {
    fn from(com: &Commune) -> Self {
        Self {
            id_com: com.id,
            lib_com: com.name.clone(),
        }
    }
}

/// Summary of an arrondissement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArrondissementView {
    /// Identifiant de l'arrondissement.
    pub id_arrond: u32,
    /// Nom de l'arrondissement.
    pub lib_arrond: String,
}

impl From<&Arrondissement> for ArrondissementView {
    fn from(arr: &Arrondissement) -> Self {
        Self {
            id_arrond: arr.id,
            lib_arrond: arr.name.clone(),
        }
    }
}

/// Summary of a quartier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuartierView {
    /// Identifiant du quartier.
    pub id_quartier: u32,
    /// Nom du quartier.
    pub lib_quartier: String,
}

impl From<&Quartier> for QuartierView {
    fn from(q: &Quartier) -> Self {
        Self {
            id_quartier: q.id,
            lib_quartier: q.name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Récupérer un département par son ID.
#[utoipa::path(
    get,
    path = "/departements/{id_dep}",
    params(
        ("id_dep" = u32, Path, description = "Identifiant du département")
    ),
    responses(
        (status = 200, description = "Département trouvé", body = DepartementView),
        (status = 404, description = "Département non trouvé"),
    ),
    tag = "territoire"
)]
async fn get_departement(
    State(state): State<AppState>,
    Path(id_dep): Path<String>,
) -> Result<Json<DepartementView>, AppError> {
    let dep = state.decoupage.departement(path_id(&id_dep))?;
    Ok(Json(DepartementView::from(dep)))
}

/// Récupérer les communes d'un département.
#[utoipa::path(
    get,
    path = "/departements/{id_dep}/communes",
    params(
        ("id_dep" = u32, Path, description = "Identifiant du département")
    ),
    responses(
        (status = 200, description = "Communes trouvées", body = Vec<CommuneView>),
        (status = 404, description = "Département non trouvé"),
    ),
    tag = "territoire"
)]
async fn list_communes(
    State(state): State<AppState>,
    Path(id_dep): Path<String>,
) -> Result<Json<Vec<CommuneView>>, AppError> {
    let communes = state.decoupage.communes(path_id(&id_dep))?;
    Ok(Json(communes.iter().map(CommuneView::from).collect()))
}

/// Récupérer les arrondissements d'une commune.
#[utoipa::path(
    get,
    path = "/departements/{id_dep}/communes/{id_com}/arrondissements",
    params(
        ("id_dep" = u32, Path, description = "Identifiant du département"),
        ("id_com" = u32, Path, description = "Identifiant de la commune")
    ),
    responses(
        (status = 200, description = "Arrondissements trouvés", body = Vec<ArrondissementView>),
        (status = 404, description = "Département ou commune non trouvé"),
    ),
    tag = "territoire"
)]
async fn list_arrondissements(
    State(state): State<AppState>,
    Path((id_dep, id_com)): Path<(String, String)>,
) -> Result<Json<Vec<ArrondissementView>>, AppError> {
    let arrondissements = state
        .decoupage
        .arrondissements(path_id(&id_dep), path_id(&id_com))?;
    Ok(Json(
        arrondissements
            .iter()
            .map(ArrondissementView::from)
            .collect(),
    ))
}

/// Récupérer les quartiers d'un arrondissement.
#[utoipa::path(
    get,
    path = "/departements/{id_dep}/communes/{id_com}/arrondissements/{id_arrond}/quartiers",
    params(
        ("id_dep" = u32, Path, description = "Identifiant du département"),
        ("id_com" = u32, Path, description = "Identifiant de la commune"),
        ("id_arrond" = u32, Path, description = "Identifiant de l'arrondissement")
    ),
    responses(
        (status = 200, description = "Quartiers trouvés", body = Vec<QuartierView>),
        (status = 404, description = "Département, commune ou arrondissement non trouvé"),
    ),
    tag = "territoire"
)]
async fn list_quartiers(
    State(state): State<AppState>,
    Path((id_dep, id_com, id_arrond)): Path<(String, String, String)>,
) -> Result<Json<Vec<QuartierView>>, AppError> {
    let quartiers = state.decoupage.quartiers(
        path_id(&id_dep),
        path_id(&id_com),
        path_id(&id_arrond),
    )?;
    Ok(Json(quartiers.iter().map(QuartierView::from).collect()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
