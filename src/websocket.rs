use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use serde_json::json;
use tracing::{error, info};
use futures_util::{SinkExt, StreamExt};

use crate::handlers;
use crate::state::{AppState, SessionState};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New WebSocket connection: {}", client_uid);

    let session = SessionState::new(client_uid.clone());
    let selection = session.selection.clone();
    state.sessions.insert(client_uid.clone(), session);

    let (mut sender, mut receiver) = socket.split();

    // The page renders its controls from these before any user action.
    let initial_messages = vec![
        json!({
            "type": "session-init",
            "client_uid": client_uid,
            "api_key_configured": state.config.groq.api_key.is_some(),
        }),
        json!({
            "type": "selection-update",
            "selection": selection,
        }),
    ];

    for msg in initial_messages {
        if let Err(e) = sender.send(Message::Text(msg.to_string())).await {
            error!("Failed to send initial message: {}", e);
            state.sessions.remove(&client_uid);
            return;
        }
    }

    // One message at a time: a dispatch blocks this session's loop until
    // the service responds, which is the intended busy behavior.
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) =
                    handlers::handle_message(&state, &client_uid, &text, &mut sender).await
                {
                    error!("Error handling message from {}: {}", client_uid, e);
                }
            }
            Ok(Message::Close(_)) => break,
            Err(e) => {
                error!("WebSocket error for {}: {}", client_uid, e);
                break;
            }
            _ => {}
        }
    }

    state.sessions.remove(&client_uid);
    info!("WebSocket connection closed: {}", client_uid);
}
