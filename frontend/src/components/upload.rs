//! Single-file upload form with drag & drop support.
//!
//! The file input is the only holder of the pending file: dropped files are
//! adopted as its file list, and it is cleared after a successful upload.

use leptos::ev::{DragEvent, SubmitEvent};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{DROP_HIGHLIGHT_BACKGROUND, DROP_HIGHLIGHT_TRANSFORM, UPLOAD_FIELD_NAME};
use crate::controller::PageController;
use crate::services::upload_file;
use crate::types::FileInfo;

#[component]
pub fn UploadSection(controller: PageController) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let count = input.files().map(|files| files.length()).unwrap_or(0);
        controller.files_changed(count);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Ok(file) = controller.begin_upload(file) else {
            return;
        };

        spawn_local(async move {
            let result = upload_file(file).await;
            if controller.finish_upload(result) {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    // Drag & drop on the label
    let on_drag_over = move |ev: DragEvent| {
        suppress(&ev);
        controller.set_drag_active(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        suppress(&ev);
        controller.set_drag_active(false);
    };

    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        controller.set_drag_active(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }

        if let Some(input) = file_input.get_untracked() {
            input.set_files(Some(&files));
        }
        controller.files_dropped(files.length());
    };

    let drag_active = controller.drag_active;
    let trigger = controller.trigger;
    let file_info = controller.file_info;

    view! {
        <section class="card upload-section">
            <h2>"Upload a file"</h2>
            <form id="uploadForm" on:submit=on_submit>
                <input
                    type="file"
                    id="fileInput"
                    name=UPLOAD_FIELD_NAME
                    class="file-input"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <label
                    for="fileInput"
                    class="file-upload-label"
                    style:background-color=move || drag_active.get().then_some(DROP_HIGHLIGHT_BACKGROUND)
                    style:transform=move || drag_active.get().then_some(DROP_HIGHLIGHT_TRANSFORM)
                    on:dragenter=on_drag_over
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <span class="upload-icon">"📁"</span>
                    <span class="upload-text">"Choose a file or drag it here"</span>
                </label>
                <button
                    type="submit"
                    id="uploadButton"
                    class="upload-button"
                    prop:disabled=move || trigger.get().disabled
                >
                    {move || trigger.get().label()}
                </button>
            </form>

            <div
                id="fileInfoContainer"
                class="file-info"
                style:display=move || if file_info.with(Option::is_some) { "block" } else { "none" }
            >
                <h3>"File Information"</h3>
                <p>
                    <strong>"Name: "</strong>
                    <span id="fileName">{move || info_field(file_info, |i| i.name.clone())}</span>
                </p>
                <p>
                    <strong>"Size: "</strong>
                    <span id="fileSize">{move || info_field(file_info, |i| i.size.clone())}</span>
                </p>
                <p>
                    <strong>"Type: "</strong>
                    <span id="fileType">{move || info_field(file_info, |i| i.content_type.clone())}</span>
                </p>
            </div>
        </section>
    }
}

/// Keep the browser from opening the dropped file.
fn suppress(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn info_field(info: RwSignal<Option<FileInfo>>, field: impl Fn(&FileInfo) -> String) -> String {
    info.with(|i| i.as_ref().map(&field).unwrap_or_default())
}
