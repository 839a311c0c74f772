use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_available_places;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/api/hotels/available_places",
        get(get_available_places::get_available_places),
    )
}
