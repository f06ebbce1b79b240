//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-blue-50 rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12"/>
                </div>

                <h1 class="text-6xl font-black text-slate-900 mb-4">"404"</h1>
                <h2 class="text-2xl font-bold text-slate-800 mb-2">"Page Not Found"</h2>
                <p class="text-slate-500 mb-8 max-w-md mx-auto">
                    "This page isn't part of any batch. Head back and keep learning."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-bold rounded-xl transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">"© 2025 NextToppers"</p>
            </div>
        </div>
    }
}
