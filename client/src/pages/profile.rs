//! Profile page: the protected home view behind the session gate.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::state::session::{SessionView, role_text, welcome_text};
use crate::util::auth;
use crate::util::navigate::{MountGuard, RouterNavigator};

/// Profile page. Shows a placeholder until the identity check settles, then
/// either greets the user or redirects to `/login` and renders nothing.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = RwSignal::new(SessionView::Loading);
    let logging_out = RwSignal::new(false);
    let navigator = RouterNavigator::new(use_navigate());
    let mount = MountGuard::install();

    // Identity check on mount. Effects only run in the browser.
    Effect::new({
        let navigator = mount.guard(navigator.clone());
        move || {
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                let user = auth::check_session(&HttpAuthApi::default(), &navigator).await;
                session.try_set(SessionView::from_check(user));
            });
        }
    });

    let logout = Callback::new(move |()| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let navigator = mount.guard(navigator.clone());
        leptos::task::spawn_local(async move {
            // Failure leaves the view as it is; `auth::logout` already logged it.
            let _ = auth::logout(&HttpAuthApi::default(), &navigator).await;
            logging_out.try_set(false);
        });
    });

    view! {
        <div class="profile-page">
            {move || {
                let current = session.get();
                if current.is_loading() {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                let Some(user) = current.user() else {
                    return ().into_any();
                };
                view! {
                    <h1>{welcome_text(user)}</h1>
                    <p>{role_text(user)}</p>
                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        logout.run(());
                    }>
                        <button type="submit" disabled=move || logging_out.get()>
                            "Logout"
                        </button>
                    </form>
                }
                    .into_any()
            }}
        </div>
    }
}
