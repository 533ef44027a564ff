use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use fitmarket_core::health::{healthz, readyz};
use fitmarket_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    advice::{create_advice, get_advice, get_advice_form},
    anatomy::get_anatomy_images,
    community::get_community,
    dashboard::get_dashboard,
    nutrition::{create_nutrition_plan, get_nutrition_plan_form, get_nutrition_plans},
    purchase::{create_purchase, get_catalog, get_purchases},
    user::{create_user, get_me, update_avatar},
    workout::{create_workout, get_workout_form, get_workouts},
};
use crate::state::AppState;

/// Largest accepted request body: the 100 MiB video cap plus form overhead.
pub const MAX_BODY_BYTES: usize = 101 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<AppState>))
        // Users
        .route("/users", post(create_user))
        .route("/users/@me", get(get_me))
        .route("/users/@me/avatar", put(update_avatar))
        .route("/community", get(get_community))
        // Catalog
        .route("/workouts", get(get_workouts).post(create_workout))
        .route("/workouts/form", get(get_workout_form))
        .route(
            "/nutrition-plans",
            get(get_nutrition_plans).post(create_nutrition_plan),
        )
        .route("/nutrition-plans/form", get(get_nutrition_plan_form))
        .route("/advice", get(get_advice).post(create_advice))
        .route("/advice/form", get(get_advice_form))
        // Purchases
        .route("/purchases", get(get_purchases).post(create_purchase))
        .route("/purchases/catalog", get(get_catalog))
        .route("/dashboard", get(get_dashboard))
        .route("/anatomy/images", get(get_anatomy_images))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
