use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::auth::{GuardDecision, guard_login, guard_protected};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/communities")]
    Communities,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route a guard redirect points at.
pub fn redirect_route(path: &str) -> MainRoute {
    MainRoute::iter()
        .find(|route| route.to_path() == path)
        .unwrap_or(MainRoute::NotFound)
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => match guard_login(&session) {
            GuardDecision::Redirect(path) => {
                html! { <Redirect<MainRoute> to={redirect_route(path)} /> }
            }
            GuardDecision::Render => html! { <LoginPage /> },
        },
        MainRoute::Home | MainRoute::Communities => match guard_protected(&session) {
            GuardDecision::Redirect(path) => {
                html! { <Redirect<MainRoute> to={redirect_route(path)} /> }
            }
            GuardDecision::Render => html! {
                <Layout on_logout={Some(on_logout)}>
                    <CommunitiesAllPage />
                </Layout>
            },
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}
