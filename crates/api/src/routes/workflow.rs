//! Route definitions for the `/workflows` resource tree.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{external_service, workflow, workflow_action};
use crate::state::AppState;

/// Routes mounted at `/workflows`.
///
/// ```text
/// POST   /                                         -> create
/// GET    /                                         -> list
/// POST   /validate                                 -> validate (stub)
/// GET    /{id}                                     -> get_by_id
/// PUT    /{id}                                     -> update
/// DELETE /{id}                                     -> delete
/// POST   /{id}/execute                             -> execute (stub)
/// POST   /{id}/external-services                   -> add external service
/// GET    /{id}/external-services                   -> list external services
/// DELETE /{id}/external-services/{service_id}      -> remove external service
/// POST   /{id}/action                              -> add action
/// DELETE /{id}/action/{action_id}                  -> delete action
/// GET    /{id}/actions                             -> list actions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(workflow::create).get(workflow::list))
        .route("/validate", post(workflow::validate))
        .route(
            "/{id}",
            get(workflow::get_by_id)
                .put(workflow::update)
                .delete(workflow::delete),
        )
        .route("/{id}/execute", post(workflow::execute))
        .route(
            "/{id}/external-services",
            post(external_service::add).get(external_service::list),
        )
        .route(
            "/{id}/external-services/{service_id}",
            delete(external_service::remove),
        )
        .route("/{id}/action", post(workflow_action::add))
        .route("/{id}/action/{action_id}", delete(workflow_action::remove))
        .route("/{id}/actions", get(workflow_action::list))
}
