//! Local session handling behind the sidebar's logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use web_sys::window;

const SESSION_TOKEN_KEY: &str = "kos_session_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get session token from localStorage
pub fn get_session_token() -> Option<String> {
    get_local_storage()?.get_item(SESSION_TOKEN_KEY).ok()?
}

/// Remove session token from localStorage
pub fn clear_session_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
    }
}

/// End the current session: drop the stored token and reset the shell view.
pub fn end_session(ctx: &AppGlobalContext, config: &AppConfig) {
    let had_session = get_session_token().is_some();
    clear_session_token();
    ctx.reset(config);
    log::info!("Session ended (token present: {})", had_session);
}
