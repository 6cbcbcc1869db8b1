use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language::{DEFAULT_LANGUAGE, get_language_info, supported_languages};

/// Dropdown switching the interface language.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();
    let current_flag = get_language_info(&current)
        .or_else(|| get_language_info(DEFAULT_LANGUAGE))
        .map(|info| info.flag)
        .unwrap_or_default();

    let on_select = Callback::from(move |code: &'static str| set_language.emit(code.to_string()));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" aria-label={i18n.t("language.selector")}>
                <span>{current_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                { for supported_languages().into_iter().map(|language| {
                    let code = language.code;
                    html! {
                        <LanguageSelectorButton
                            key={code}
                            selected={code == current}
                            {language}
                            on_select={on_select.clone()}
                        />
                    }
                }) }
            </ul>
        </div>
    }
}
