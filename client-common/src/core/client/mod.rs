use common::{api, consts};
use serde::{Deserialize, Serialize};

use crate::rpc_client::RpcClient;

mod auth;

/// The bootstrapped session: an opaque bearer token plus the display name
/// the service returned with it. Serializable so callers can persist it
/// under the `token`/`name` storage keys and hand it back later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub name: String,
}

/// Client-side handle on the auth/chat service. Validation runs locally
/// before anything is sent; the session is an explicit field here rather
/// than ambient global state.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Client {
    #[derivative(Debug = "ignore")]
    rpc_client: RpcClient,
    session: Option<Session>,
}

impl Client {
    pub fn new() -> Self {
        Self::with_url(consts::DEFAULT_SERVER_URL)
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(url),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }

    /// Entry point of the redirect-based OAuth flow; the browser is sent
    /// here and the completion comes back with `token` and `name` query
    /// parameters, to be handed to [`adopt_session`](Self::adopt_session).
    pub fn google_auth_url(&self) -> String {
        self.rpc_client.endpoint_url(api::GOOGLE_AUTH_PATH)
    }

    /// Sends one chat message under the current session and returns the
    /// service's reply.
    pub async fn chat(&self, message: &str, mood: &str) -> api::Result<String> {
        let session = self.session.as_ref().ok_or(api::Error::NotLoggedIn)?;
        let resp = self
            .rpc_client
            .call_authed(
                &session.token,
                api::ChatRequest { message: message.to_owned(), mood: mood.to_owned() },
            )
            .await?;
        Ok(resp.reply)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
