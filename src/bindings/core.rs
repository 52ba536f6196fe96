use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ============================================================================
// Backend API Bridge
// ============================================================================
//
// The host page exposes the platform client SDK as
// `window.__EVENTRA__.api.request(op, args)`, returning a Promise that
// resolves with the operation result or rejects with an error string.

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__EVENTRA__", "api"], js_name = "request", catch)]
    async fn request_raw(op: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Issue a backend operation with typed arguments and response
pub async fn invoke<A: Serialize, R: for<'de> Deserialize<'de>>(
    op: &str,
    args: &A,
) -> Result<R, String> {
    let args_js = serde_wasm_bindgen::to_value(args)
        .map_err(|e| format!("Failed to serialize args: {}", e))?;

    let result = request_raw(op, args_js).await
        .map_err(|e| {
            serde_wasm_bindgen::from_value::<String>(e)
                .unwrap_or_else(|_| "Unknown backend error".to_string())
        })?;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to deserialize response: {}", e))
}

/// Issue a backend operation with no arguments
pub async fn invoke_no_args<R: for<'de> Deserialize<'de>>(op: &str) -> Result<R, String> {
    #[derive(Serialize)]
    struct Empty {}
    invoke(op, &Empty {}).await
}

/// Issue a backend operation that returns void (Result<(), String>)
/// This handles the case where null/undefined is a valid success response
pub async fn invoke_void<A: Serialize>(op: &str, args: &A) -> Result<(), String> {
    let args_js = serde_wasm_bindgen::to_value(args)
        .map_err(|e| format!("Failed to serialize args: {}", e))?;

    let result = request_raw(op, args_js).await
        .map_err(|e| {
            serde_wasm_bindgen::from_value::<String>(e)
                .unwrap_or_else(|_| "Unknown backend error".to_string())
        })?;

    // For void operations, null/undefined means success
    if !result.is_null() && !result.is_undefined() {
        if let Ok(err_str) = serde_wasm_bindgen::from_value::<String>(result.clone()) {
            if !err_str.is_empty() {
                return Err(err_str);
            }
        }
    }
    Ok(())
}

/// Postgres-style uniqueness violations come back as error strings carrying
/// the 23505 code; older backend revisions said "duplicate key" instead.
pub fn is_conflict_error(err: &str) -> bool {
    err.contains("23505") || err.to_lowercase().contains("duplicate")
}
