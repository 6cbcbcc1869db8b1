use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Product name shown in the logo.
pub const PRODUCT_NAME: &str = "MoodleNet";

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    /// Wrap the logo in a link to the home page.
    #[prop_or(true)]
    pub link: bool,
}

/// MoodleNet logo.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <h1 class="m-0 mb-6 text-sm leading-8 tracking-wide text-primary" title={PRODUCT_NAME}>
            if props.link {
                <Link<MainRoute> to={MainRoute::Home} classes="text-primary no-underline">
                    {PRODUCT_NAME}
                </Link<MainRoute>>
            } else {
                {PRODUCT_NAME}
            }
        </h1>
    }
}
