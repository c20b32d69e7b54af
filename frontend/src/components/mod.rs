//! UI Components for the Animal Upload page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AnimalSection`] - Single-choice animal checkboxes and image panel
//! - [`UploadSection`] - File upload form with drag & drop and file info
//! - [`MessageContainer`] - Transient success/error banner

mod animals;
mod footer;
mod hero;
mod messages;
mod upload;

pub use animals::*;
pub use footer::*;
pub use hero::*;
pub use messages::*;
pub use upload::*;
