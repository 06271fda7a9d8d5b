//! HTTP request handlers.
//!
//! Each module maps one resource to its routes. Handlers authenticate via the
//! `AuthUser` extractor, authorize through `AuthGuard`, and delegate all
//! business logic to the service layer.

pub mod character_sheet;
pub mod event;
pub mod friend_request;
pub mod game;
pub mod hello;
pub mod join_request;
pub mod message;
pub mod notification;
pub mod private_message;
pub mod session;
pub mod theme;
pub mod user;

use axum::extract::Multipart;

use crate::error::AppError;

/// An image file parsed out of a multipart upload, with an optional text
/// caption for the chat endpoints.
pub struct ImageUpload {
    pub content_type: String,
    pub data: Vec<u8>,
    pub caption: Option<String>,
}

/// Reads a multipart form carrying one image file and an optional `content`
/// text field.
///
/// # Returns
/// - `Ok(ImageUpload)` - File bytes, their content type, and any caption
/// - `Err(AppError::BadRequest)` - No file field, or a non-image content type
pub async fn read_image_upload(multipart: &mut Multipart) -> Result<ImageUpload, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("content") {
            caption = Some(field.text().await?);
            continue;
        }

        let Some(content_type) = field.content_type().map(str::to_string) else {
            continue;
        };

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image uploads are accepted".to_string(),
            ));
        }

        file = Some((content_type, field.bytes().await?.to_vec()));
    }

    let Some((content_type, data)) = file else {
        return Err(AppError::BadRequest(
            "Missing image file in upload".to_string(),
        ));
    };

    Ok(ImageUpload {
        content_type,
        data,
        caption,
    })
}
