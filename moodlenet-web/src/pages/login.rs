use crate::components::language_selector::LanguageSelector;
use crate::components::{LoginForm, Logo};
use crate::models::app_state::AppState;
use crate::services::use_services;
use crate::storage::session_store;
use i18nrs::yew::use_translation;
use shared::auth::{LoginState, SubmitOutcome, ValidationField, sign_in};
use shared::errors::AuthResult;
use shared::models::{Credentials, UserSession};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Login form state as a reducer.
#[derive(Clone, Default, PartialEq)]
struct LoginModel {
    state: LoginState,
}

enum LoginAction {
    Submit(Credentials),
    Finished(AuthResult<UserSession>),
    InputChanged(ValidationField),
}

impl Reducible for LoginModel {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            LoginAction::Submit(credentials) => {
                state.submit(credentials);
            }
            LoginAction::Finished(result) => state.finish(&result),
            LoginAction::InputChanged(field) => state.input_changed(field),
        }
        Rc::new(Self { state })
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let model = use_reducer(LoginModel::default);
    let dispatch = use_dispatch::<AppState>();
    let services = use_services();

    let on_submit = {
        let model = model.clone();
        Callback::from(move |credentials: Credentials| {
            // Decide on the current state before dispatching the same action.
            let mut preview = model.state.clone();
            let outcome = preview.submit(credentials.clone());
            model.dispatch(LoginAction::Submit(credentials));

            let SubmitOutcome::Authenticate(credentials) = outcome else {
                return;
            };
            let model = model.clone();
            let dispatch = dispatch.clone();
            let authenticator = services.authenticator.clone();
            spawn_local(async move {
                let result = sign_in(&*authenticator, &session_store(), &credentials).await;
                let session = match &result {
                    Ok(session) => Some(session.clone()),
                    Err(err) => {
                        log(&format!("Login failed: {err}"));
                        None
                    }
                };
                model.dispatch(LoginAction::Finished(result));
                if let Some(session) = session {
                    dispatch.set(AppState { session });
                }
            });
        })
    };

    let on_input_change = {
        let model = model.clone();
        Callback::from(move |field: ValidationField| {
            model.dispatch(LoginAction::InputChanged(field));
        })
    };

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <header class="navbar justify-between px-4">
                <Logo />
                <LanguageSelector />
            </header>
            <div class="flex flex-1 items-center justify-center">
                <div class="card w-full max-w-md shadow-lg bg-base-100">
                    <h2 class="card-title text-2xl px-8 pt-8">{i18n.t("login.title")}</h2>
                    <LoginForm
                        validation={model.state.validation().to_vec()}
                        authenticating={model.state.is_authenticating()}
                        {on_submit}
                        {on_input_change}
                    />
                </div>
            </div>
        </div>
    }
}
