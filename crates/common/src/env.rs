//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Ensure the media directory exists; warn when it had to be created empty.
pub async fn ensure_env(media_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(media_dir).await.is_err() {
        warn!(%media_dir, "media directory not found; creating an empty one, images will 404");
    }
    tokio::fs::create_dir_all(media_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {media_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_env;

    #[tokio::test]
    async fn creates_missing_media_dir() {
        let dir = std::env::temp_dir().join(format!("bike_market_media_{}", std::process::id()));
        let path = dir.to_string_lossy().to_string();
        let _ = tokio::fs::remove_dir_all(&dir).await;

        ensure_env(&path).await.unwrap();
        assert!(tokio::fs::metadata(&dir).await.unwrap().is_dir());

        // second call is a no-op
        ensure_env(&path).await.unwrap();
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
