use std::env;

#[derive(Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub public_base_url: String,
    pub tagging_api_url: String,
    pub tagging_api_key: String,
    pub tagging_api_secret: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        let tagging_api_url =
            env::var("TAGGING_API_URL").map_err(|_| "TAGGING_API_URL must be set".to_string())?;

        let tagging_api_key =
            env::var("TAGGING_API_KEY").map_err(|_| "TAGGING_API_KEY must be set".to_string())?;

        let tagging_api_secret = env::var("TAGGING_API_SECRET")
            .map_err(|_| "TAGGING_API_SECRET must be set".to_string())?;

        Ok(ServerConfig {
            listen_addr,
            public_base_url,
            tagging_api_url,
            tagging_api_key,
            tagging_api_secret,
        })
    }
}
