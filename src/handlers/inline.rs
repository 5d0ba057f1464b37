// src/handlers/inline.rs

use axum::{Json, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::inline::{InlineAttrsRequest, InlineAttrsResponse, InlineFieldKind},
    utils::inline::{inline_attrs, inline_image_attrs},
};

/// Builds the `data-inline-*` attributes for an editable block field.
pub async fn field_attrs(
    Json(payload): Json<InlineAttrsRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let attrs = match payload.kind {
        InlineFieldKind::Text => inline_attrs(&payload.block_id, &payload.field),
        InlineFieldKind::Image => inline_image_attrs(&payload.block_id, &payload.field),
    };

    Ok(Json(InlineAttrsResponse { attrs }))
}
