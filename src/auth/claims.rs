use serde::{Deserialize, Serialize};

/// JWT payload used for authentication.
///
/// The token binds only the email; roles are never embedded, so elevation and
/// demotion take effect at the next store lookup without re-issuing tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}
