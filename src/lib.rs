// lib.rs - Root module for the nutrient_scope library
//
// The same crate is built twice by cargo-leptos: as the server binary's
// library (`ssr`) and as the WASM bundle that hydrates it (`hydrate`).

/// Canned API payloads and sample products for tests
pub mod fixtures;

/// The Leptos catalog viewer
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point, called by the hydration script
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();

            tracing::info!("hydrating NutrientScope");
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
