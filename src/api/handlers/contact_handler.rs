//! Contact handlers.
//!
//! Every route here sits behind the auth gate; the verified owner id from
//! the request extensions scopes each service call.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{ContactResponse, CreateContact, UpdateContact};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Contact creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Bob")]
    pub name: String,
    /// Phone number
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    /// Email address
    #[schema(example = "bob@example.com")]
    pub email: Option<String>,
}

impl From<CreateContactRequest> for CreateContact {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            email: req.email,
        }
    }
}

/// Partial contact update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContactRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Robert")]
    pub name: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New email address
    pub email: Option<String>,
}

impl From<UpdateContactRequest> for UpdateContact {
    fn from(req: UpdateContactRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            email: req.email,
        }
    }
}

/// Create contact routes (mounted behind the auth middleware)
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_contact).get(list_contacts))
        .route("/:id", put(update_contact).delete(delete_contact))
}

/// Create a contact
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "Contacts",
    security(("bearer_auth" = [])),
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Name missing or empty"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_contact(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    let contact = state
        .contact_service
        .create_contact(current_user.id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

/// List the caller's contacts
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "Contacts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's contacts in creation order", body = Vec<ContactResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_contacts(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactResponse>>> {
    let contacts = state.contact_service.list_contacts(current_user.id).await?;

    Ok(Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Update one of the caller's contacts
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    tag = "Contacts",
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "Contact ID")
    ),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such contact owned by the caller")
    )
)]
pub async fn update_contact(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(payload): ValidatedJson<UpdateContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    let contact = state
        .contact_service
        .update_contact(current_user.id, id, payload.into())
        .await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Delete one of the caller's contacts
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    tag = "Contacts",
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such contact owned by the caller")
    )
)]
pub async fn delete_contact(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<MessageResponse>> {
    state
        .contact_service
        .delete_contact(current_user.id, id)
        .await?;

    Ok(Json(MessageResponse::new("Contact deleted")))
}
