//! Page state and the operations that drive it.
//!
//! [`PageController`] owns every piece of page state as signals and is
//! created once when the page mounts. Components forward DOM events to it
//! and perform the network calls; the controller only decides what the page
//! shows next, so it runs off-browser in tests.
//!
//! ```text
//! checkbox change ──► toggle_animal ──► select_animal() ──► apply_animal_result
//! input change    ──► files_changed
//! drop            ──► files_dropped
//! form submit     ──► begin_upload  ──► upload_file()   ──► finish_upload
//! ```

use leptos::*;

use crate::config::{
    MESSAGE_TIMEOUT_MS, MSG_ANIMAL_ERROR, MSG_ANIMAL_FAILED, MSG_DROP_OK, MSG_NO_FILE,
    MSG_UPLOAD_ERROR, MSG_UPLOAD_FAILED, MSG_UPLOAD_OK, UPLOADING_LABEL, UPLOAD_LABEL,
};
use crate::types::{
    AnimalImage, AppError, AppResult, FileInfo, Message, MessageId, MessageKind,
};

// =============================================================================
// Animal selection
// =============================================================================

/// Single-choice animal selection.
///
/// Every change bumps `generation`; a response is applied only if it was
/// requested under the current generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimalSelection {
    selected: Option<String>,
    generation: u64,
}

/// Ticket for one outbound animal request.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimalRequest {
    pub animal: String,
    pub generation: u64,
}

impl AnimalSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Checkbox state for `animal`. At most one animal is ever checked.
    pub fn is_checked(&self, animal: &str) -> bool {
        self.selected.as_deref() == Some(animal)
    }

    pub fn select(&mut self, animal: &str) -> AnimalRequest {
        self.generation += 1;
        self.selected = Some(animal.to_string());
        AnimalRequest {
            animal: animal.to_string(),
            generation: self.generation,
        }
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
    }

    pub fn is_current(&self, request: &AnimalRequest) -> bool {
        request.generation == self.generation
    }
}

// =============================================================================
// Upload trigger
// =============================================================================

/// State of the upload button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTrigger {
    pub disabled: bool,
    pub uploading: bool,
}

impl Default for UploadTrigger {
    /// Empty file input: nothing to upload yet.
    fn default() -> Self {
        Self::for_file_count(0)
    }
}

impl UploadTrigger {
    /// Enabled iff the file input holds at least one file.
    pub fn for_file_count(count: u32) -> Self {
        Self {
            disabled: count == 0,
            uploading: false,
        }
    }

    pub fn ready() -> Self {
        Self::for_file_count(1)
    }

    pub fn uploading() -> Self {
        Self {
            disabled: true,
            uploading: true,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.uploading {
            UPLOADING_LABEL
        } else {
            UPLOAD_LABEL
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Holds the one visible transient message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageBoard {
    current: Option<Message>,
    next_id: u64,
}

impl MessageBoard {
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Replace whatever is shown with a new message.
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        self.current = Some(Message {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    /// Remove message `id` if it is still the one shown.
    pub fn dismiss(&mut self, id: MessageId) -> bool {
        match &self.current {
            Some(message) if message.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// One-shot timer used to expire messages.
pub trait ExpiryTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

// =============================================================================
// Page controller
// =============================================================================

/// All page state, shared by every component.
#[derive(Clone, Copy, Debug)]
pub struct PageController {
    pub selection: RwSignal<AnimalSelection>,
    /// `Some` while the image panel is visible
    pub animal_image: RwSignal<Option<AnimalImage>>,
    pub trigger: RwSignal<UploadTrigger>,
    /// `Some` once an upload succeeded
    pub file_info: RwSignal<Option<FileInfo>>,
    pub messages: RwSignal<MessageBoard>,
    /// Drop target highlight
    pub drag_active: RwSignal<bool>,
}

impl PageController {
    /// Must be called inside a reactive owner (component or runtime).
    pub fn new() -> Self {
        Self {
            selection: create_rw_signal(AnimalSelection::default()),
            animal_image: create_rw_signal(None),
            trigger: create_rw_signal(UploadTrigger::default()),
            file_info: create_rw_signal(None),
            messages: create_rw_signal(MessageBoard::default()),
            drag_active: create_rw_signal(false),
        }
    }

    // -------------------------------------------------------------------------
    // Messages
    // -------------------------------------------------------------------------

    pub fn show_message(&self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        let text = text.into();
        let mut id = MessageId(0);
        self.messages.update(|board| id = board.show(text, kind));
        id
    }

    /// Remove message `id` if it is still shown.
    ///
    /// A stale id leaves the signal untouched, so subscribers are not notified.
    pub fn dismiss_message(&self, id: MessageId) -> bool {
        let is_current = self
            .messages
            .with_untracked(|board| board.current().map(|m| m.id) == Some(id));
        if is_current {
            self.messages.update(|board| {
                board.dismiss(id);
            });
        }
        is_current
    }

    /// Arrange for message `id` to be dismissed after [`MESSAGE_TIMEOUT_MS`].
    pub fn schedule_expiry(&self, id: MessageId, timer: &impl ExpiryTimer) {
        let controller = *self;
        timer.schedule(
            MESSAGE_TIMEOUT_MS,
            Box::new(move || {
                controller.dismiss_message(id);
            }),
        );
    }

    /// Schedule the expiry of every message shown from now on.
    ///
    /// Must be called inside a reactive owner.
    pub fn expire_messages_with(&self, timer: impl ExpiryTimer + 'static) {
        let controller = *self;
        create_effect(move |_| {
            if let Some(id) = controller.messages.with(|board| board.current().map(|m| m.id)) {
                controller.schedule_expiry(id, &timer);
            }
        });
    }

    pub fn current_message(&self) -> Option<Message> {
        self.messages.with_untracked(|board| board.current().cloned())
    }

    fn show_error(&self, err: &AppError, fallback: &str, generic: &str) {
        if err.is_transport() {
            log::error!("Error: {}", err);
        } else {
            log::warn!("{}", err);
        }
        self.show_message(err.user_message(fallback, generic), MessageKind::Error);
    }

    // -------------------------------------------------------------------------
    // Animal selection
    // -------------------------------------------------------------------------

    /// Checkbox `animal` changed to `checked`.
    ///
    /// Returns the request to send, or `None` when the checkbox was unchecked
    /// (the image panel is hidden and nothing is sent).
    pub fn toggle_animal(&self, animal: &str, checked: bool) -> Option<AnimalRequest> {
        if checked {
            let mut request = None;
            self.selection.update(|s| request = Some(s.select(animal)));
            log::info!("🐾 Selecting {}", animal);
            request
        } else {
            self.selection.update(AnimalSelection::clear);
            self.animal_image.set(None);
            None
        }
    }

    /// Apply the outcome of `request`. Stale responses are dropped.
    pub fn apply_animal_result(&self, request: &AnimalRequest, result: AppResult<AnimalImage>) -> bool {
        if !self.selection.with_untracked(|s| s.is_current(request)) {
            log::debug!("Ignoring stale response for {}", request.animal);
            return false;
        }

        match result {
            Ok(image) => {
                let text = format!("Selected {}!", image.animal);
                self.animal_image.set(Some(image));
                self.show_message(text, MessageKind::Success);
            }
            Err(e) => self.show_error(&e, MSG_ANIMAL_FAILED, MSG_ANIMAL_ERROR),
        }
        true
    }

    // -------------------------------------------------------------------------
    // File selection & drag-and-drop
    // -------------------------------------------------------------------------

    /// File input now holds `count` files.
    pub fn files_changed(&self, count: u32) {
        self.trigger.set(UploadTrigger::for_file_count(count));
    }

    pub fn set_drag_active(&self, active: bool) {
        if self.drag_active.get_untracked() != active {
            self.drag_active.set(active);
        }
    }

    /// `count` files were dropped and adopted by the file input.
    pub fn files_dropped(&self, count: u32) -> bool {
        if count == 0 {
            return false;
        }
        log::info!("📥 {} file(s) dropped", count);
        self.trigger.set(UploadTrigger::ready());
        self.show_message(MSG_DROP_OK, MessageKind::Success);
        true
    }

    // -------------------------------------------------------------------------
    // Upload
    // -------------------------------------------------------------------------

    /// Start an upload of `file`, the first file of the input.
    ///
    /// Hands the file back when the upload may proceed.
    pub fn begin_upload<F>(&self, file: Option<F>) -> AppResult<F> {
        match file {
            Some(file) => {
                self.trigger.set(UploadTrigger::uploading());
                log::info!("📤 Uploading file...");
                Ok(file)
            }
            None => {
                self.show_message(MSG_NO_FILE, MessageKind::Error);
                Err(AppError::Validation(MSG_NO_FILE.to_string()))
            }
        }
    }

    /// Apply the upload outcome. Returns `true` when the file input must be cleared.
    pub fn finish_upload(&self, result: AppResult<FileInfo>) -> bool {
        match result {
            Ok(info) => {
                log::info!("✅ Uploaded {} ({})", info.name, info.size);
                self.file_info.set(Some(info));
                self.show_message(MSG_UPLOAD_OK, MessageKind::Success);
                // input is cleared by the caller, so the trigger follows an empty input
                self.trigger.set(UploadTrigger::for_file_count(0));
                true
            }
            Err(e) => {
                self.show_error(&e, MSG_UPLOAD_FAILED, MSG_UPLOAD_ERROR);
                self.trigger.set(UploadTrigger::ready());
                false
            }
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}
