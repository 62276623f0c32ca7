use axum::{extract::Query, Json};
use cheese_api::{DistanceQuery, DistanceResponse};
use cheese_core::power;

const DISTANCE_MESSAGE: &str = "This is a very long line that exceeds 120 characters blah";

/// GET /euclidean_distance/ — distance of the point (x, y) from the origin.
///
/// Computes `sqrt(2 * (power(x, 2) + power(y, 2)))`. The doubled sum is the
/// formula the tutorial shipped with, so it stays as-is even though it is
/// not the textbook Euclidean distance. Squaring goes through `power` to
/// exercise the math utility.
pub async fn euclidean_distance(Query(params): Query<DistanceQuery>) -> Json<DistanceResponse> {
    let z = power(params.x, 2.0) + power(params.y, 2.0);
    let distance = (2.0 * z).sqrt();
    Json(DistanceResponse {
        x: params.x,
        y: params.y,
        distance,
        message: DISTANCE_MESSAGE.to_string(),
    })
}
