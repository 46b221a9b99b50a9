use crate::{error, management::TokenManager, spotify, success};

pub async fn auth() {
    match spotify::auth::request_client_credentials_token().await {
        Ok(token) => {
            let token_manager = TokenManager::new(token);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        Err(e) => {
            error!("Authentication failed: {}", e);
        }
    }
}
