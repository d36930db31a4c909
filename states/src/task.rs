//! Fire-and-forget task spawning for native and web targets.

use std::future::Future;

/// Run `future` to completion in the background.
///
/// On native this goes through `tokio::spawn`, so it must be called from
/// inside a Tokio runtime. On wasm32 the future runs on the JS event loop.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}
