use i18nrs::yew::use_translation;
use shared::auth::{ValidationField, ValidationObject, validation::entries_for};
use shared::models::Credentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Messages of the last submit attempt.
    #[prop_or_default]
    pub validation: Vec<ValidationObject>,
    /// A login request is in flight.
    #[prop_or_default]
    pub authenticating: bool,
    pub on_submit: Callback<Credentials>,
    pub on_input_change: Callback<ValidationField>,
}

/// Email and password form.
///
/// Field values live here; validation and submission state belong to the
/// page holding the form.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(Credentials::new((*email).clone(), (*password).clone()));
        })
    };

    let on_email_input = {
        let email = email.clone();
        let on_input_change = props.on_input_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                on_input_change.emit(ValidationField::Email);
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        let on_input_change = props.on_input_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                on_input_change.emit(ValidationField::Password);
            }
        })
    };

    let field_errors = |field| -> Html {
        entries_for(&props.validation, Some(field))
            .map(|entry| {
                html! {
                    <span class="label-text-alt text-error">{i18n.t(&entry.message)}</span>
                }
            })
            .collect()
    };
    let has_errors = |field| entries_for(&props.validation, Some(field)).next().is_some();
    let input_class = |field| {
        classes!(
            "input",
            "input-bordered",
            has_errors(field).then_some("input-error")
        )
    };
    let submit_label = if props.authenticating {
        i18n.t("login.submitting")
    } else {
        i18n.t("login.submit")
    };

    html! {
        <form class="card-body" {onsubmit} novalidate=true>
            { for entries_for(&props.validation, None).map(|entry| html! {
                <div class="alert alert-warning" role="alert">
                    <span>{i18n.t(&entry.message)}</span>
                </div>
            }) }
            <div class="form-control">
                <label class="label" for="email">
                    <span class="label-text">{i18n.t("login.email")}</span>
                </label>
                <input
                    id="email"
                    name="email"
                    class={input_class(ValidationField::Email)}
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <label class="label">
                    {field_errors(ValidationField::Email)}
                </label>
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">{i18n.t("login.password")}</span>
                </label>
                <input
                    id="password"
                    name="password"
                    class={input_class(ValidationField::Password)}
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />
                <label class="label">
                    {field_errors(ValidationField::Password)}
                </label>
            </div>
            <div class="form-control mt-6">
                <button class="btn btn-primary" type="submit" disabled={props.authenticating}>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
