// web_app/components/visibility.rs - Infinite-scroll trigger
//
// The last rendered product card is watched by an IntersectionObserver.
// `VisibilityObserver` owns one observer and disconnects it on drop, so
// replacing or disposing the stored guard always tears the old one down
// before a new one is attached.

use leptos::html;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
pub use observer::VisibilityObserver;

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// A live IntersectionObserver on a single element
    pub struct VisibilityObserver {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl VisibilityObserver {
        /// Calls `on_visible` every time `target` scrolls into view.
        pub fn observe(target: &Element, on_visible: impl Fn() + 'static) -> Result<Self, JsValue> {
            let callback: ObserverCallback =
                Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|entry| entry.is_intersecting())
                            .unwrap_or(false)
                    });
                    if visible {
                        on_visible();
                    }
                });

            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
            observer.observe(target);
            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Arms a visibility observer on `last_card` whenever `armed` is true.
///
/// Re-runs when the last card element or the armed flag changes; the
/// previous observer is dropped first on every run and nothing is observed
/// while disarmed.
pub fn watch_last_card(last_card: NodeRef<html::Div>, armed: Signal<bool>, on_visible: Callback<()>) {
    #[cfg(feature = "hydrate")]
    {
        let active = StoredValue::new_local(None::<VisibilityObserver>);

        Effect::new(move |_| {
            active.set_value(None);

            let target = last_card.get();
            if !armed.get() {
                return;
            }
            let Some(target) = target else {
                return;
            };

            match VisibilityObserver::observe(&target, move || on_visible.run(())) {
                Ok(observer) => active.set_value(Some(observer)),
                Err(err) => tracing::warn!(?err, "could not observe the last product card"),
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        // nothing scrolls during server rendering
        let _ = (last_card, armed, on_visible);
    }
}
