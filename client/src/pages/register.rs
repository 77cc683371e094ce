//! Register page: creates an account, then sends the user to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::net::types::Role;
use crate::state::forms::{FormStatus, RegisterForm};
use crate::util::auth;
use crate::util::navigate::{MountGuard, RouterNavigator};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let status = RwSignal::new(FormStatus::default());
    let navigator = RouterNavigator::new(use_navigate());
    let mount = MountGuard::install();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let request = form.get_untracked().request();
        let navigator = mount.guard(navigator.clone());
        leptos::task::spawn_local(async move {
            let result = auth::register(&HttpAuthApi::default(), &navigator, &request).await;
            status.try_update(|s| s.settle(result));
        });
    };

    view! {
        <div class="register-page">
            <h1>"Register"</h1>
            <form class="register-form" on:submit=on_submit>
                <input
                    placeholder="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <input
                    placeholder="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <select
                    prop:value=move || form.with(|f| f.role.as_str())
                    on:change=move |ev| form.update(|f| f.set_role_tag(&event_target_value(&ev)))
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button type="submit" disabled=move || status.with(|s| s.busy)>
                    "Register"
                </button>
            </form>
            <Show when=move || status.with(|s| s.error.is_some())>
                <p class="register-error">{move || status.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
        </div>
    }
}
