use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub language: LanguageInfo,
    /// Whether this is the language currently shown.
    pub selected: bool,
    /// Receives the language code.
    pub on_select: Callback<&'static str>,
}

/// One entry of the language dropdown.
#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let LanguageInfo {
        code,
        native_name,
        flag,
    } = props.language.clone();
    let onclick = {
        let on_select = props.on_select.clone();
        move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(code);
        }
    };

    html! {
        <li>
            <button
                type="button"
                lang={code}
                class={props.selected.then_some("active")}
                aria-pressed={props.selected.to_string()}
                {onclick}
            >
                <span aria-hidden="true">{flag}</span>
                <span>{native_name}</span>
            </button>
        </li>
    }
}
