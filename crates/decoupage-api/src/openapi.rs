//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`. This replaces the swagger-jsdoc document
//! the original service exposed at `/api-docs`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de découpage territorial du Bénin",
        version = "1.0.0",
        description = "API pour récupérer les départements, communes, arrondissements et quartiers du Bénin.\n\nToutes les opérations sont en lecture seule sur un jeu de données statique chargé au démarrage.",
        license(name = "MIT")
    ),
    servers(
        (url = "https://api-decoupage-benin.onrender.com", description = "Production"),
        (url = "http://localhost:3000", description = "Serveur de développement local"),
    ),
    paths(
        crate::routes::territoire::get_departement,
        crate::routes::territoire::list_communes,
        crate::routes::territoire::list_arrondissements,
        crate::routes::territoire::list_quartiers,
    ),
    components(
        schemas(
            crate::routes::territoire::DepartementView,
            crate::routes::territoire::CommuneView,
            crate::routes::territoire::ArrondissementView,
            crate::routes::territoire::QuartierView,
        ),
    ),
    tags(
        (name = "territoire", description = "Consultation du découpage territorial — départements, communes, arrondissements, quartiers")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_generates_successfully() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "API de découpage territorial du Bénin");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn spec_has_all_four_lookup_paths() {
        let spec = ApiDoc::openapi();
        for path in [
            "/departements/{id_dep}",
            "/departements/{id_dep}/communes",
            "/departements/{id_dep}/communes/{id_com}/arrondissements",
            "/departements/{id_dep}/communes/{id_com}/arrondissements/{id_arrond}/quartiers",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "should contain {path}"
            );
        }
        assert_eq!(spec.paths.paths.len(), 4);
    }

    #[test]
    fn spec_has_schema_components() {
        let spec = ApiDoc::openapi();
        let schemas = &spec.components.as_ref().unwrap().schemas;
        for name in [
            "DepartementView",
            "CommuneView",
            "ArrondissementView",
            "QuartierView",
        ] {
            assert!(schemas.contains_key(name), "should contain {name} schema");
        }
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("openapi"));
        assert!(json.contains("id_dep"));
    }

    #[test]
    fn router_builds_successfully() {
        let _router = router();
    }
}
