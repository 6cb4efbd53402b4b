//! Application pages module
//!
//! - Login page (also served at `/`)
//! - Signup page
//! - Not found page

mod login;
mod not_found;
mod signup;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Centered card shared by the login and signup pages
#[component]
fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16 gap-3">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::HEART class="w-5 h-5" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"PulseSync"</span>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-8 border border-theme">
                    {children()}
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2025 PulseSync. All rights reserved."
                </p>
            </footer>
        </div>
    }
}
