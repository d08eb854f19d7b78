use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}

/// GET /api/v1/catalog/countries - the destinations the catalog covers.
pub async fn handle_get_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: state.catalog.countries(),
    })
}
