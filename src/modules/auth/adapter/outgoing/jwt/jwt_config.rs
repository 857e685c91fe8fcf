#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
