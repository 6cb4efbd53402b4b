//! Login page component
//!
//! Standalone page around [`LoginForm`]; the signup link routes to `/signup`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::AuthLayout;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let on_signup_click = move |_| {
        let navigate = use_navigate();
        navigate("/signup", Default::default());
    };

    view! {
        <AuthLayout>
            <LoginForm on_signup_click=Callback::new(on_signup_click) />
        </AuthLayout>
    }
}
