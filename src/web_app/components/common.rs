// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the listing and detail pages.
// They receive everything through props.

use leptos::prelude::*;

/// Loading indicator
#[component]
pub fn Loading(
    /// Message shown under the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-8">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-green-600"></div>
            <span class="mt-4 text-2xl font-bold text-red-500 animate-pulse">{message}</span>
        </div>
    }
}

/// Centered status line for empty, missing and failed states
#[component]
pub fn StatusMessage(
    /// Text to display
    message: &'static str,
    /// Tailwind color/size classes
    #[prop(default = "text-xl text-gray-700")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-72">
            <div class=status_class(tone)>{message}</div>
        </div>
    }
}

/// Classes of the status line for the given tone; a blank tone keeps the default.
pub fn status_class(tone: &str) -> String {
    let tone = tone.trim();
    if tone.is_empty() {
        "text-center mt-4 text-xl text-gray-700".to_string()
    } else {
        format!("text-center mt-4 {}", tone)
    }
}

/// "Label: value" line used on cards and in detail sections
#[component]
pub fn InfoRow(
    label: &'static str,
    /// Already formatted value
    value: String,
    #[prop(default = "text-lg")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <p class=class>
            <span class="font-semibold">{label} ": "</span>
            {value}
        </p>
    }
}

/// Pill-shaped tag, used for ingredient names
#[component]
pub fn Chip(children: Children) -> impl IntoView {
    view! {
        <span class="inline-block bg-blue-100 text-blue-800 rounded-full px-2 py-1 text-sm mr-2 mb-2">
            {children()}
        </span>
    }
}

/// White card with a section heading
#[component]
pub fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-white p-4 rounded-lg shadow-md mb-6 hover:shadow-lg transition-shadow duration-200">
            <h2 class="text-2xl font-semibold mb-2 text-blue-600">{title}</h2>
            {children()}
        </section>
    }
}
