/// Global Tokio runtime for async HTTP operations
///
/// egui runs its own main-thread loop and provides no async executor, but
/// reqwest requires a tokio runtime. This static runtime bridges the two:
/// background tasks run here and report back to the main thread through
/// the app event channel.
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::SomethingLoaded(result)).await;
/// });
/// ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});

/// Spawn a future on the shared runtime.
pub fn spawn<F>(future: F) -> tokio::task::JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    TOKIO_RT.spawn(future)
}
