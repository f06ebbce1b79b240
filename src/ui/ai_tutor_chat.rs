//! AI tutor chat widget
//!
//! Floating button on the student dashboard that opens a conversation with
//! the expert model. Questions are sent with the student's enrolled batches
//! as context; one question is answered at a time.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::User;
use crate::core::ai::{AiChatSession, TUTOR_SUGGESTIONS, TutorRole, tutor_context, tutor_greeting};
use crate::ui::context::use_app_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;

#[component]
pub fn AiTutorChat(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let greeting = ctx.state.with_untracked(|s| tutor_greeting(&user, s.batches()));

    let (is_open, set_is_open) = signal(false);
    let (input_value, set_input_value) = signal(String::new());
    let session = RwSignal::new(AiChatSession::new(greeting));
    let scroll_ref = NodeRef::<Div>::new();

    // Keep the newest message in view
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        session.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send_message = move || {
        let text = input_value.get_untracked();
        let Some(Ok(question)) = session.try_update(|s| s.begin(&text)) else {
            return;
        };
        set_input_value.set(String::new());
        let context = ctx.state.with_untracked(|s| tutor_context(s.batches()));

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let result = crate::ui::ai_gateway::ask_expert(question, context).await;
            if let Err(err) = &result {
                leptos::logging::warn!("AI tutor request failed: {}", err);
            }
            session.update(|s| s.finish(result));
        });

        #[cfg(feature = "ssr")]
        {
            let _ = (question, context);
            session.update(|s| s.finish(Err("AI tutor runs in the browser".to_string())));
        }
    };

    let is_loading = move || session.with(AiChatSession::is_loading);

    view! {
        // Floating Button
        <button
            class=move || {
                if is_open.get() {
                    "fixed bottom-8 right-8 w-16 h-16 rounded-full bg-indigo-600 text-white shadow-2xl flex items-center justify-center transition-all z-50 rotate-90"
                } else {
                    "fixed bottom-8 right-8 w-16 h-16 rounded-full bg-indigo-600 text-white shadow-2xl flex items-center justify-center transition-all z-50 hover:scale-110"
                }
            }
            title="AI Tutor"
            on:click=move |_| set_is_open.update(|open| *open = !*open)
        >
            {move || if is_open.get() {
                view! { <Icon name=icons::X class="w-6 h-6 invert"/> }
            } else {
                view! { <Icon name=icons::SPARKLES class="w-7 h-7 invert"/> }
            }}
        </button>

        // Chat Panel
        <Show when=move || is_open.get()>
            <div class="fixed bottom-28 right-8 w-[90vw] md:w-[400px] h-[60vh] md:h-[500px] bg-white rounded-3xl shadow-2xl flex flex-col overflow-hidden z-50">
                <div class="bg-indigo-600 p-6 text-white">
                    <h3 class="font-bold text-lg leading-tight">"AI Expert Tutor"</h3>
                    <p class="text-xs text-indigo-100">"Always available for you"</p>
                </div>

                // Messages
                <div node_ref=scroll_ref class="flex-1 overflow-y-auto p-4 space-y-4 bg-slate-50">
                    <For
                        each=move || session.with(|s| s.transcript().to_vec()).into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, message)| {
                            let is_user = message.role == TutorRole::User;
                            view! {
                                <div class={if is_user { "flex justify-end" } else { "flex justify-start" }}>
                                    {if is_user {
                                        view! {
                                            <div class="max-w-[85%] p-4 rounded-2xl text-sm shadow-sm bg-indigo-600 text-white rounded-tr-none">
                                                <p class="whitespace-pre-wrap break-words">{message.text.clone()}</p>
                                            </div>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <div class="max-w-[85%] p-4 rounded-2xl shadow-sm bg-white text-slate-800 border border-slate-100 rounded-tl-none">
                                                <Markdown content=message.text.clone()/>
                                            </div>
                                        }.into_any()
                                    }}
                                </div>
                            }
                        }
                    />

                    <Show when=is_loading>
                        <div class="flex justify-start">
                            <div class="bg-white border border-slate-100 p-4 rounded-2xl rounded-tl-none shadow-sm flex gap-1">
                                <span class="w-1.5 h-1.5 bg-indigo-300 rounded-full animate-bounce"></span>
                                <span class="w-1.5 h-1.5 bg-indigo-300 rounded-full animate-bounce" style="animation-delay: 0.2s"></span>
                                <span class="w-1.5 h-1.5 bg-indigo-300 rounded-full animate-bounce" style="animation-delay: 0.4s"></span>
                            </div>
                        </div>
                    </Show>
                </div>

                // Suggestions
                <Show when=move || session.with(AiChatSession::show_suggestions)>
                    <div class="px-4 py-2 flex gap-2 overflow-x-auto bg-slate-50">
                        {TUTOR_SUGGESTIONS
                            .into_iter()
                            .map(|text| view! {
                                <button
                                    class="whitespace-nowrap px-3 py-1.5 bg-white border border-indigo-100 rounded-full text-[10px] font-bold text-indigo-600 hover:bg-indigo-50"
                                    on:click=move |_| set_input_value.set(text.to_string())
                                >
                                    {text}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </Show>

                // Input
                <div class="p-4 bg-white border-t">
                    <div class="flex items-center gap-2 bg-slate-100 p-2 rounded-2xl">
                        <input
                            type="text"
                            class="flex-1 bg-transparent px-3 py-2 text-sm focus:outline-none"
                            placeholder="Ask me anything..."
                            prop:value=move || input_value.get()
                            on:input=move |e| set_input_value.set(event_target_value(&e))
                            on:keydown=move |e| {
                                if e.key() == "Enter" {
                                    e.prevent_default();
                                    send_message();
                                }
                            }
                        />
                        <button
                            class="w-10 h-10 bg-indigo-600 text-white rounded-xl flex items-center justify-center hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || is_loading() || input_value.get().trim().is_empty()
                            on:click=move |_| send_message()
                        >
                            <Icon name=icons::SEND class="w-4 h-4 invert"/>
                        </button>
                    </div>
                    <p class="text-[10px] text-center text-slate-400 mt-2">
                        "AI can make mistakes. Check important info."
                    </p>
                </div>
            </div>
        </Show>
    }
}
