use i18nrs::yew::use_translation;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadMoreProps {
    /// Whether another page may exist.
    pub has_more: bool,
    /// A request for the next page is in flight.
    #[prop_or_default]
    pub loading: bool,
    /// The last request for the next page failed.
    #[prop_or_default]
    pub failed: bool,
    pub on_click: Callback<()>,
}

/// "Load more" control below a paginated list.
#[function_component(LoadMore)]
pub fn load_more(props: &LoadMoreProps) -> Html {
    let (i18n, ..) = use_translation();

    if !props.has_more {
        return html! {};
    }

    let onclick = {
        let on_click = props.on_click.clone();
        move |_: MouseEvent| on_click.emit(())
    };
    let label = if props.loading {
        i18n.t("communities.loading_more")
    } else {
        i18n.t("communities.load_more")
    };

    html! {
        <div class="flex flex-col items-center gap-2 my-6">
            if props.failed {
                <div class="alert alert-warning">
                    <span>{i18n.t("communities.load_more_error")}</span>
                </div>
            }
            <button class="btn btn-outline" type="button" disabled={props.loading} {onclick}>
                {label}
            </button>
        </div>
    }
}
