//! Login page: email + password form posting to the Auth API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::state::forms::{FormStatus, LoginForm};
use crate::util::auth;
use crate::util::navigate::{MountGuard, Navigation, Navigator, REGISTER_ROUTE, RouterNavigator};

/// Login page. On success the Auth API sets the session cookie and the view
/// moves to `/`; on failure the server's message is shown under the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let status = RwSignal::new(FormStatus::default());
    let navigator = RouterNavigator::new(use_navigate());
    let mount = MountGuard::install();

    let on_submit = {
        let navigator = navigator.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !status.try_update(FormStatus::begin).unwrap_or(false) {
                return;
            }
            let credentials = form.get_untracked().credentials();
            let navigator = mount.guard(navigator.clone());
            leptos::task::spawn_local(async move {
                let result = auth::login(&HttpAuthApi::default(), &navigator, &credentials).await;
                status.try_update(|s| s.settle(result));
            });
        }
    };

    let on_register = move |_| navigator.navigate(REGISTER_ROUTE, Navigation::Push);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        placeholder="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <div class="login-form__buttons">
                        <button class="login-button" type="submit" disabled=move || status.with(|s| s.busy)>
                            "Login"
                        </button>
                        <button class="login-button login-button--secondary" type="button" on:click=on_register>
                            "Register"
                        </button>
                    </div>
                </form>
                <Show when=move || status.with(|s| s.error.is_some())>
                    <p class="login-error">{move || status.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
