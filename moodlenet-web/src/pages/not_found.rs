use crate::components::Logo;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4 bg-base-200">
            <Logo />
            <h2 class="text-2xl">{i18n.t("not_found.title")}</h2>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {i18n.t("not_found.back")}
            </Link<MainRoute>>
        </div>
    }
}
