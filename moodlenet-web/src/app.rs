use crate::api::MoodleNetClient;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_with_logout};
use crate::services::Services;
use crate::storage::session_store;
use shared::errors::FetchError;
use shared::models::UserSession;
use shared::session::SessionStore;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Forget the session everywhere: storage, client and store.
fn sign_out(dispatch: &Dispatch<AppState>) {
    if let Err(err) = session_store().clear() {
        log(&format!("Could not clear the stored session: {err}"));
    }
    MoodleNetClient::shared().set_token(None);
    dispatch.set(AppState::default());
}

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    // Child effects run before this component's, so the token is applied
    // during render to be in place for the first page request.
    MoodleNetClient::shared().set_token(state.session.bearer_token().map(str::to_string));

    {
        let dispatch = dispatch.clone();
        let token = state.session.bearer_token().map(str::to_string);
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    match MoodleNetClient::shared().me().await {
                        Ok(profile) => {
                            let session = UserSession::authenticated(token, profile);
                            if let Err(err) = session_store().save(&session) {
                                log(&format!("Could not store the refreshed profile: {err}"));
                            }
                            dispatch.set(AppState { session });
                        }
                        Err(FetchError::GraphQl { errors }) => {
                            log(&format!("Stored session was rejected: {errors:?}"));
                            sign_out(&dispatch);
                        }
                        Err(err) => log(&format!("Could not refresh the profile: {err}")),
                    }
                });
            }
            || ()
        });
    }

    let logout_callback = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| sign_out(&dispatch))
    };

    let services = use_memo((), |_| Services::default());

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<MainRoute> render={move |route| switch_with_logout(route, logout_callback.clone())} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}
