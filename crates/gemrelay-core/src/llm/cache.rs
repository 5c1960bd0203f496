//! Process-wide memoized model selection.
//!
//! The first request resolves the model; every later request reuses that
//! answer for the life of the process, including a "no model available"
//! answer. Concurrent first requests wait on the same in-flight resolution,
//! so the catalog is fetched at most once.
//!
//! The selection is never refreshed: picking up newly enabled models, or
//! retrying after a failed lookup, requires a restart.

use std::future::Future;

use tokio::sync::OnceCell;

/// Holds the selected model name once it has been resolved.
#[derive(Debug, Default)]
pub struct SelectedModelCache {
    cell: OnceCell<Option<String>>,
}

impl SelectedModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized selection, running `resolve` if this is the first call.
    pub async fn get_or_resolve<F, Fut>(&self, resolve: F) -> Option<&str>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<String>>,
    {
        self.cell
            .get_or_init(|| async move {
                let selected = resolve().await;
                match &selected {
                    Some(model) => tracing::info!(%model, "Using model"),
                    None => tracing::warn!("No usable model; selection memoized until restart"),
                }
                selected
            })
            .await
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_resolves_once() {
        let cache = SelectedModelCache::new();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_resolve(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Some("gemini-1.5-flash".to_string())
            })
            .await
            .map(str::to_string);
        let second = cache
            .get_or_resolve(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Some("gemini-1.0-pro".to_string())
            })
            .await
            .map(str::to_string);

        assert_eq!(first.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(second.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_none_is_memoized() {
        let cache = SelectedModelCache::new();
        assert!(cache.get_or_resolve(|| async { None }).await.is_none());
        let later = cache
            .get_or_resolve(|| async { Some("gemini-pro".to_string()) })
            .await;

        assert!(later.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_resolve_once() {
        let cache = Arc::new(SelectedModelCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_resolve(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        Some("gemini-1.5-flash".to_string())
                    })
                    .await
                    .map(str::to_string)
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().as_deref(), Some("gemini-1.5-flash"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
