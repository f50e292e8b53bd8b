use axum::extract::ws::Message;
use futures_util::SinkExt;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::languages::SelectionError;
use crate::state::AppState;
use crate::translate::TranslationRequest;

type WsSender = futures_util::stream::SplitSink<axum::extract::ws::WebSocket, Message>;

pub async fn handle_message(
    state: &AppState,
    client_uid: &str,
    text: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    match msg_type {
        Some("set-origin") => {
            handle_set_origin(state, client_uid, &msg, sender).await?;
        }
        Some("set-destination") => {
            handle_set_destination(state, client_uid, &msg, sender).await?;
        }
        Some("swap-languages") => {
            handle_swap(state, client_uid, sender).await?;
        }
        Some("text-input") => {
            handle_text_input(state, client_uid, &msg);
        }
        Some("translate") => {
            handle_translate(state, client_uid, &msg, sender).await?;
        }
        Some("clear-input") => {
            handle_clear_input(state, client_uid, sender).await?;
        }
        _ => {
            warn!("Unknown message type: {:?}", msg_type);
        }
    }

    Ok(())
}

async fn send_json(sender: &mut WsSender, payload: Value) -> anyhow::Result<()> {
    sender.send(Message::Text(payload.to_string())).await?;
    Ok(())
}

async fn handle_set_origin(
    state: &AppState,
    client_uid: &str,
    msg: &Value,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let name = msg.get("language").and_then(|v| v.as_str()).unwrap_or("");
    apply_selection(state, client_uid, sender, |s| s.with_origin(name)).await
}

async fn handle_set_destination(
    state: &AppState,
    client_uid: &str,
    msg: &Value,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let name = msg.get("language").and_then(|v| v.as_str()).unwrap_or("");
    apply_selection(state, client_uid, sender, |s| s.with_destination(name)).await
}

async fn handle_swap(
    state: &AppState,
    client_uid: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    apply_selection(state, client_uid, sender, |s| s.swapped()).await
}

/// Runs a pure transition over the session's selection. On success the
/// new selection is stored and broadcast back; on rejection the state is
/// left untouched and the rejection is flagged to the client.
async fn apply_selection<F>(
    state: &AppState,
    client_uid: &str,
    sender: &mut WsSender,
    transition: F,
) -> anyhow::Result<()>
where
    F: FnOnce(&crate::languages::LanguageSelection)
        -> Result<crate::languages::LanguageSelection, SelectionError>,
{
    let Some(mut session) = state.sessions.get_mut(client_uid) else {
        warn!("No session for client {}", client_uid);
        return Ok(());
    };

    match transition(&session.selection) {
        Ok(next) => {
            session.selection = next.clone();
            drop(session);
            send_json(
                sender,
                json!({
                    "type": "selection-update",
                    "selection": next,
                }),
            )
            .await
        }
        Err(e @ SelectionError::SwapUndefined) => {
            drop(session);
            send_json(
                sender,
                json!({
                    "type": "swap-warning",
                    "text": e.to_string(),
                }),
            )
            .await
        }
        Err(e) => {
            drop(session);
            send_json(
                sender,
                json!({
                    "type": "validation-warning",
                    "text": e.to_string(),
                }),
            )
            .await
        }
    }
}

fn handle_text_input(state: &AppState, client_uid: &str, msg: &Value) {
    if let Some(mut session) = state.sessions.get_mut(client_uid) {
        session.input_text = msg
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
    }
}

async fn handle_translate(
    state: &AppState,
    client_uid: &str,
    msg: &Value,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    // Fresh request per submit: current selection plus whatever text came
    // with the action (falling back to the last text-input echo).
    let request = {
        let Some(mut session) = state.sessions.get_mut(client_uid) else {
            warn!("No session for client {}", client_uid);
            return Ok(());
        };
        if let Some(text) = msg.get("text").and_then(|v| v.as_str()) {
            session.input_text = text.to_string();
        }
        TranslationRequest {
            origin: session.selection.origin.clone(),
            destination: session.selection.destination.clone(),
            text: session.input_text.clone(),
        }
    };

    send_json(sender, json!({"type": "control", "text": "translating"})).await?;

    match state.translator.translate(&request).await {
        Ok(translated) => {
            info!("Translation completed for {}", client_uid);
            if let Some(mut session) = state.sessions.get_mut(client_uid) {
                session.last_output = Some(translated.clone());
            }
            send_json(
                sender,
                json!({
                    "type": "translation-result",
                    "text": translated,
                }),
            )
            .await?;
        }
        Err(e) => {
            warn!("Translation failed for {}: {}", client_uid, e);
            send_json(
                sender,
                json!({
                    "type": e.message_type(),
                    "text": e.to_string(),
                }),
            )
            .await?;
        }
    }

    send_json(sender, json!({"type": "control", "text": "idle"})).await
}

async fn handle_clear_input(
    state: &AppState,
    client_uid: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    if let Some(mut session) = state.sessions.get_mut(client_uid) {
        session.clear_input();
    }
    send_json(sender, json!({"type": "input-cleared"})).await
}
