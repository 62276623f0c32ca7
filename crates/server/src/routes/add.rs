use axum::{extract::Query, Json};
use cheese_api::{AddQuery, AddResponse};

/// GET /add/ — sum of the two query parameters.
pub async fn add(Query(params): Query<AddQuery>) -> Json<AddResponse> {
    Json(AddResponse {
        result: params.x + params.y,
    })
}
