//! Top navigation bar

use leptos::prelude::*;

use crate::core::{AppView, UserRole};
use crate::ui::context::use_app_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let user = Memo::new(move |_| ctx.user());

    view! {
        <nav class="h-16 border-b bg-white/80 backdrop-blur-md sticky top-0 z-50 px-6 flex items-center justify-between">
            <button class="flex items-center gap-2" on:click=move |_| ctx.go_home()>
                <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center">
                    <span class="text-white font-bold text-xl">"N"</span>
                </div>
                <span class="font-bold text-xl tracking-tight text-slate-800">
                    "NextToppers" <span class="text-blue-600">"Pro"</span>
                </span>
            </button>

            {move || match user.get() {
                Some(user) => {
                    let role_label = user.role.label();
                    view! {
                        <div class="flex items-center gap-6">
                            <button
                                class=move || {
                                    if ctx.view() == AppView::Dashboard {
                                        "hidden md:block text-sm font-medium text-blue-600"
                                    } else {
                                        "hidden md:block text-sm font-medium text-slate-600 hover:text-blue-600"
                                    }
                                }
                                on:click=move |_| ctx.navigate(AppView::Dashboard)
                            >
                                "My Batches"
                            </button>
                            <div class="h-8 w-px bg-slate-200 hidden md:block"></div>
                            <div class="flex items-center gap-3">
                                <div class="text-right hidden sm:block">
                                    <p class="text-sm font-semibold text-slate-800 leading-none">{user.name.clone()}</p>
                                    <p class="text-xs text-slate-500">{role_label}</p>
                                </div>
                                <img
                                    src=user.avatar.clone()
                                    class="w-10 h-10 rounded-full border-2 border-blue-100 shadow-sm"
                                    alt=user.initial()
                                />
                                <button
                                    class="p-2 text-slate-400 hover:text-red-500 transition-colors"
                                    title="Logout"
                                    on:click=move |_| ctx.logout()
                                >
                                    <Icon name=icons::LOGOUT class="w-5 h-5"/>
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="flex items-center gap-3">
                        <button
                            class="text-slate-600 font-medium px-4 py-2 hover:text-blue-600 transition-colors"
                            on:click=move |_| ctx.login(UserRole::Admin)
                        >
                            "Teacher Login"
                        </button>
                        <button
                            class="bg-blue-600 text-white px-5 py-2 rounded-full font-semibold hover:bg-blue-700 shadow-lg shadow-blue-200 transition-all"
                            on:click=move |_| ctx.login(UserRole::Student)
                        >
                            "Student Login"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </nav>
    }
}
