//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Animal Selector & File Upload"</h1>
            <p class="subtitle">
                "Pick an animal to see its picture, or upload a file to see its details."
            </p>
        </div>
    }
}
