//! Animal Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that shows a picture for one selected animal and
//! uploads a single file, reporting its metadata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the PageController)                      │
//! │  ├── Hero (title, description)                              │
//! │  ├── MessageContainer (transient banner)                    │
//! │  ├── AnimalSection (checkboxes + image panel)               │
//! │  └── UploadSection (form, drop target, file info)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, timings and UI strings
//! - [`types`] - API bodies, view types, messages, errors
//! - [`controller`] - Page state and operations
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // API
    SelectAnimalRequest, SelectAnimalResponse, UploadFileResponse,
    // View
    AnimalImage, FileInfo,
    // Messages
    Message, MessageId, MessageKind,
    // Errors
    AppError, AppResult,
};

pub use controller::{
    AnimalRequest, AnimalSelection, ExpiryTimer, MessageBoard, PageController, UploadTrigger,
};

pub use components::*;

pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Animal Selector & File Upload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single owner of all page state
    let controller = PageController::new();

    view! {
        <div class="container">
            <Hero/>
            <MessageContainer controller=controller/>
            <AnimalSection controller=controller/>
            <UploadSection controller=controller/>
        </div>

        <Footer/>
    }
}
