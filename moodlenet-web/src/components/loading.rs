use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Spinner shown while a page waits for its first data.
#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    let label = i18n.t("loading.label");
    html! {
        <div class="flex items-center justify-center gap-3 py-12 text-base-content/70" role="status" aria-live="polite">
            <span class="loading loading-dots loading-md" aria-hidden="true"></span>
            <span>{label}</span>
        </div>
    }
}
