use crate::core::error::UserError;
use crate::core::state::AppState;
use crate::mapping::Mapper;
use crate::models::user_model::UserModel;
use crate::models::view::{
    ListQuery, UserCreateRequestModel, UserDetailsViewModel, UserEditRequestModel,
    UserListItemViewModel, UserListViewModel,
};
use crate::validation::forms::Validate;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Json, Redirect},
};
use std::sync::Arc;
use tracing::warn;

/// List users, optionally filtered by active state
///
/// GET /users?is_active=<true|false>
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserListViewModel>, UserError> {
    let users = match query.is_active {
        Some(is_active) => state.users.filter_by_active(is_active)?,
        None => state.users.get_all()?,
    };

    let items = users
        .iter()
        .map(|user| state.mapper.map::<UserModel, UserListItemViewModel>(user))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(UserListViewModel { items }))
}

/// GET /users/details/{id}
pub async fn details_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDetailsViewModel>, UserError> {
    let user = find_user(&state, id)?;
    Ok(Json(state.mapper.map(&user)?))
}

/// Blank form for a new user
///
/// GET /users/create
pub async fn create_form_handler() -> Json<UserCreateRequestModel> {
    Json(UserCreateRequestModel::default())
}

/// POST /users/create
pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Form(request): Form<UserCreateRequestModel>,
) -> Result<Json<UserDetailsViewModel>, UserError> {
    if let Err(e) = request.validate() {
        warn!(error = %e, "Rejected user create form");
        return Err(e.into());
    }

    let user: UserModel = state.mapper.map(&request)?;
    let created = state.users.create(&user)?;
    Ok(Json(state.mapper.map(&created)?))
}

/// Form prefilled with the current user
///
/// GET /users/edit/{id}
pub async fn edit_form_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserEditRequestModel>, UserError> {
    let user = find_user(&state, id)?;
    Ok(Json(state.mapper.map(&user)?))
}

/// POST /users/edit/{id}
pub async fn edit_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(request): Form<UserEditRequestModel>,
) -> Result<Json<UserDetailsViewModel>, UserError> {
    if request.id != id {
        warn!(path_id = id, form_id = request.id, "Edit form id does not match path");
        return Err(UserError::IdMismatch {
            path_id: id,
            form_id: request.id,
        });
    }

    if let Err(e) = request.validate() {
        warn!(user_id = id, error = %e, "Rejected user edit form");
        return Err(e.into());
    }

    let user: UserModel = state.mapper.map(&request)?;
    let updated = state.users.update(&user)?;

    Ok(Json(state.mapper.map(&updated)?))
}

/// Confirmation view before deleting
///
/// GET /users/delete/{id}
pub async fn delete_confirm_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDetailsViewModel>, UserError> {
    let user = find_user(&state, id)?;
    Ok(Json(state.mapper.map(&user)?))
}

/// POST /users/delete/{id}
pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, UserError> {
    if !state.users.delete(id) {
        warn!(user_id = id, "User not found");
        return Err(UserError::NotFound(id));
    }

    Ok(Redirect::to("/users"))
}

fn find_user(state: &AppState, id: i64) -> Result<UserModel, UserError> {
    match state.users.get_by_id(id)? {
        Some(user) => Ok(user),
        None => {
            warn!(user_id = id, "User not found");
            Err(UserError::NotFound(id))
        }
    }
}
