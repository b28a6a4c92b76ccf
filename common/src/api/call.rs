use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A request body tied to the endpoint path it is posted to and the
/// response shape it comes back with.
pub trait Endpoint: Serialize {
    type Resp: DeserializeOwned; // our deserialized structs will need to be self owned to be easily given back from rpc calls
    const PATH: &'static str;
}

/// OAuth entry point; redirect-based, so there is no typed body for it.
/// Completion hands `token` and `name` back as query parameters.
pub const GOOGLE_AUTH_PATH: &str = "/auth/google";

// Signup
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub language: String,
}
impl Endpoint for SignupRequest {
    type Resp = AuthResponse;
    const PATH: &'static str = "/signup";
}

// Login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
impl Endpoint for LoginRequest {
    type Resp = AuthResponse;
    const PATH: &'static str = "/login";
}

/// Common response of both auth endpoints. `token` and `name` are only
/// present on `success`, `error` only on failure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Chat; sent with an `Authorization: Bearer <token>` header
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub mood: String,
}
impl Endpoint for ChatRequest {
    type Resp = ChatResponse;
    const PATH: &'static str = "/chat";
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_serializes_all_fields() {
        let req = SignupRequest {
            name: "alice_w".into(),
            email: "alice@example.com".into(),
            password: "Abcdefg1!".into(),
            language: "English".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "alice_w");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["password"], "Abcdefg1!");
        assert_eq!(json["language"], "English");
    }

    #[test]
    fn auth_response_success_shape() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":true,"token":"t0k3n","name":"Alice"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.token.as_deref(), Some("t0k3n"));
        assert_eq!(resp.name.as_deref(), Some("Alice"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn auth_response_failure_shape() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"error":"email already registered"}"#)
                .unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert_eq!(resp.error.as_deref(), Some("email already registered"));
    }

    #[test]
    fn chat_round_trip() {
        let req = ChatRequest { message: "hello".into(), mood: "Happy".into() };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""mood":"Happy""#));

        let resp: ChatResponse = serde_json::from_str(r#"{"reply":"hi there"}"#).unwrap();
        assert_eq!(resp.reply, "hi there");
    }
}
