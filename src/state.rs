use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::config::Config;
use crate::languages::LanguageSelection;
use crate::translate::groq::GroqClient;
use crate::translate::interface::CompletionBackend;
use crate::translate::Translator;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<Translator>,
    pub sessions: Arc<DashMap<String, SessionState>>,
}

/// Per-connection state. Sessions are isolated: nothing here is shared
/// across clients, and everything dies with the connection.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub client_uid: String,
    pub selection: LanguageSelection,
    pub input_text: String,
    pub last_output: Option<String>,
}

impl SessionState {
    pub fn new(client_uid: String) -> Self {
        Self {
            client_uid,
            selection: LanguageSelection::default(),
            input_text: String::new(),
            last_output: None,
        }
    }

    /// Empties the input field only. The previously displayed translation
    /// stays on screen, matching the original behavior.
    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend: Option<Arc<dyn CompletionBackend>> = config
            .groq
            .api_key
            .clone()
            .map(|key| Arc::new(GroqClient::new(&config.groq, key)) as Arc<dyn CompletionBackend>);

        Self {
            config,
            translator: Arc::new(Translator::new(backend)),
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
