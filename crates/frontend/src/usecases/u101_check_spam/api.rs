use contracts::usecases::u101_check_spam::{ApiError, CheckRequest, CheckVerdict};
use serde_json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

use super::state::CheckError;
use crate::shared::api_utils::api_url;

/// API client for UseCase u101
///
/// POSTs the trimmed message to the classification service and maps every
/// failure to a [`CheckError`]. A non-2xx answer with a readable `error`
/// field becomes `Service(Some(..))` so the view can show the server's own
/// text; anything else that goes sideways is `Transport`.
pub async fn check_spam(message: String) -> Result<CheckVerdict, CheckError> {
    let window = window().ok_or(CheckError::Transport)?;

    let body =
        serde_json::to_string(&CheckRequest { message }).map_err(|_| CheckError::Transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(&api_url("/check_spam"), &opts)
        .map_err(|_| CheckError::Transport)?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| CheckError::Transport)?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| CheckError::Transport)?;

    let response: Response = response_value.dyn_into().map_err(|_| CheckError::Transport)?;

    let json =
        wasm_bindgen_futures::JsFuture::from(response.json().map_err(|_| CheckError::Transport)?)
            .await
            .map_err(|_| CheckError::Transport)?;

    if !response.ok() {
        let detail = serde_wasm_bindgen::from_value::<ApiError>(json)
            .ok()
            .map(|e| e.error)
            .filter(|text| !text.is_empty());
        return Err(CheckError::Service(detail));
    }

    let verdict: CheckVerdict =
        serde_wasm_bindgen::from_value(json).map_err(|_| CheckError::Transport)?;

    Ok(verdict)
}
