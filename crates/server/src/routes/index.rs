use axum::Json;
use cheese_api::WelcomeResponse;

/// GET / — tutorial welcome message.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Cheese App CI/CD Tutorial!".to_string(),
    })
}
