mod error;
mod call;
pub use error::{Error, FieldError, Result};
pub use call::{AuthResponse, ChatRequest, ChatResponse, Endpoint, LoginRequest, SignupRequest, GOOGLE_AUTH_PATH};
