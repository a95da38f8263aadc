use crate::models::error::AppError;
use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Saves `contents` as `file_name` through a temporary anchor.
///
/// The anchor is appended to `<body>`, clicked and removed in the same call;
/// the object URL is revoked when it goes out of scope.
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::DataError("No document available".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::DataError("Document has no body".to_string()))?;

    let blob = Blob::new_with_options(contents, Some("text/csv;charset=utf-8"));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::DataError(format!("Failed to create link: {e:?}")))?
        .dyn_into()
        .map_err(|_| AppError::DataError("Created element is not a link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| AppError::DataError(format!("Failed to attach link: {e:?}")))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| AppError::DataError(format!("Failed to detach link: {e:?}")))?;

    Ok(())
}
