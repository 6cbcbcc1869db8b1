use crate::components::{language_selector::LanguageSelector, logo::Logo};
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use i18nrs::yew::use_translation;
use yew::{Callback, Children, Html, Properties, function_component, html};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Page chrome for signed-in pages: header with logo, language and sign out.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let user = use_selector(|state: &AppState| state.session.profile.clone());

    let documentation_url = FrontendConfig::new().documentation_url;

    let logout_button = props.on_logout.clone().map(|on_logout| {
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            on_logout.emit(());
        });
        html! {
            <button class="btn btn-ghost btn-sm" {onclick}>{i18n.t("header.logout")}</button>
        }
    });

    html! {
        <>
            <header class="navbar justify-between bg-base-200 px-4">
                <Logo />
                <div class="flex items-center gap-2">
                    if let Some(user) = (*user).clone() {
                        <span class="text-sm text-base-content/70">{user.display_name().to_string()}</span>
                    }
                    <LanguageSelector />
                    {logout_button.unwrap_or_default()}
                </div>
            </header>
            <main class="min-h-screen bg-base-100 p-4">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 bg-base-200 text-base-content/70">
                <a class="link" href={documentation_url} target="_blank" rel="noopener">
                    {i18n.t("footer.docs")}
                </a>
            </footer>
        </>
    }
}
