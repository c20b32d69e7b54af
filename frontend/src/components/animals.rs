//! Animal checkboxes and the image panel.

use leptos::*;
use web_sys::Event;

use crate::config::ANIMALS;
use crate::controller::PageController;
use crate::services::select_animal;
use crate::types::capitalize;

#[component]
pub fn AnimalSection(controller: PageController) -> impl IntoView {
    let on_toggle = move |animal: &'static str, ev: Event| {
        let checked = event_target_checked(&ev);

        if let Some(request) = controller.toggle_animal(animal, checked) {
            spawn_local(async move {
                let result = select_animal(&request.animal).await;
                controller.apply_animal_result(&request, result);
            });
        }
    };

    let image = controller.animal_image;

    view! {
        <section class="card animal-section">
            <h2>"Choose an animal"</h2>
            <div class="animal-options">
                {ANIMALS
                    .iter()
                    .map(move |&animal| {
                        view! {
                            <label class="animal-option">
                                <input
                                    type="checkbox"
                                    class="animal-checkbox"
                                    value=animal
                                    prop:checked=move || {
                                        controller.selection.with(|s| s.is_checked(animal))
                                    }
                                    on:change=move |ev| on_toggle(animal, ev)
                                />
                                <span>{capitalize(animal)}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                id="animalImageContainer"
                class="animal-image-container"
                style:display=move || if image.with(Option::is_some) { "block" } else { "none" }
            >
                <img
                    id="animalImage"
                    src=move || image.with(|i| i.as_ref().map(|i| i.image_url.clone()).unwrap_or_default())
                    alt=move || image.with(|i| i.as_ref().map(|i| i.animal.clone()).unwrap_or_default())
                />
                <p id="animalName">
                    {move || image.with(|i| i.as_ref().map(|i| i.display_name.clone()).unwrap_or_default())}
                </p>
            </div>
        </section>
    }
}
