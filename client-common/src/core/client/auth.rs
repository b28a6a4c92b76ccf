use common::api::{self, AuthResponse, LoginRequest, SignupRequest};
use eyre::eyre;
use tracing::{debug, info};

use crate::validation;

use super::{Client, Session};

impl Client {
    /// Validates the registration form locally, then submits it. On any
    /// field failure nothing is sent and the whole error list comes back
    /// in [`api::Error::Validation`].
    pub async fn signup(&mut self, data: SignupRequest) -> api::Result<&Session> {
        let form = validation::validate_registration(&data);
        if !form.is_valid {
            return Err(api::Error::Validation(form.errors));
        }

        debug!(name = %data.name, "submitting registration");
        let resp = self.rpc_client.call(data).await?;
        self.adopt_auth_response(resp)
    }

    /// Validates the login form locally (email shape and password
    /// presence only), then submits it.
    pub async fn login(&mut self, data: LoginRequest) -> api::Result<&Session> {
        let form = validation::validate_login(&data);
        if !form.is_valid {
            return Err(api::Error::Validation(form.errors));
        }

        debug!(email = %data.email, "submitting login");
        let resp = self.rpc_client.call(data).await?;
        self.adopt_auth_response(resp)
    }

    /// Completes the redirect-based OAuth flow: the caller extracts
    /// `token` and `name` from the completion query parameters and hands
    /// them over here.
    pub fn adopt_session(&mut self, token: String, name: String) -> &Session {
        info!(name = %name, "adopting externally issued session");
        self.session.insert(Session { token, name })
    }

    /// Drops the session; the caller is expected to clear whatever it
    /// persisted under the `token`/`name` keys as well.
    pub fn logout(&mut self) {
        self.session = None;
    }

    fn adopt_auth_response(&mut self, resp: AuthResponse) -> api::Result<&Session> {
        if !resp.success {
            let reason = resp
                .error
                .unwrap_or_else(|| "the server did not say why".to_owned());
            return Err(api::Error::Rejected(reason));
        }

        let token = resp
            .token
            .ok_or_else(|| eyre!("auth succeeded but no token was issued"))?;
        let name = resp.name.unwrap_or_default();

        info!(name = %name, "session bootstrapped");
        Ok(self.session.insert(Session { token, name }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopted_session_is_visible_and_cleared_on_logout() {
        let mut client = Client::with_url("http://localhost:5000");
        client.adopt_session("t0k3n".to_owned(), "Alice".to_owned());
        assert_eq!(client.user_name(), Some("Alice"));
        assert_eq!(client.session().map(|s| s.token.as_str()), Some("t0k3n"));

        client.logout();
        assert!(client.session().is_none());
    }

    #[test]
    fn successful_auth_response_installs_the_session() {
        let mut client = Client::with_url("http://localhost:5000");
        let resp = AuthResponse {
            success: true,
            token: Some("t0k3n".to_owned()),
            name: Some("Alice".to_owned()),
            error: None,
        };
        let session = client.adopt_auth_response(resp).unwrap();
        assert_eq!(session.name, "Alice");
    }

    #[test]
    fn rejected_auth_response_keeps_the_old_session() {
        let mut client = Client::with_url("http://localhost:5000");
        client.adopt_session("old".to_owned(), "Alice".to_owned());

        let resp = AuthResponse {
            success: false,
            token: None,
            name: None,
            error: Some("invalid email or password".to_owned()),
        };
        match client.adopt_auth_response(resp) {
            Err(api::Error::Rejected(reason)) => {
                assert_eq!(reason, "invalid email or password")
            }
            other => panic!("expected Rejected, got {:?}", other.map(|_| ())),
        }
        assert_eq!(client.session().map(|s| s.token.as_str()), Some("old"));
    }

    #[test]
    fn success_without_token_is_a_client_side_error() {
        let mut client = Client::with_url("http://localhost:5000");
        let resp = AuthResponse { success: true, token: None, name: None, error: None };
        assert!(matches!(
            client.adopt_auth_response(resp),
            Err(api::Error::ClientSideError(_))
        ));
    }
}
