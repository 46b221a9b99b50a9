use crate::{info, management::ResponseCache, success, warning};

pub async fn cache(clear: bool) {
    let cache = ResponseCache::new(ResponseCache::default_dir(), None);

    if clear {
        if !cache.dir().exists() {
            info!("Response cache is already empty.");
            return;
        }
        match cache.clear().await {
            Ok(_) => success!("Response cache cleared."),
            Err(e) => warning!("Cannot clear response cache. Err: {}", e),
        }
        return;
    }

    info!("Cache directory: {}", cache.dir().display());
    info!("Cached responses: {}", cache.count_entries());
}
