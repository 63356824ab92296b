//! Platform glue for spawning fire-and-forget futures outside component scope.

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    // Desktop builds run inside the Dioxus tokio runtime.
    let _ = tokio::spawn(future);
}
