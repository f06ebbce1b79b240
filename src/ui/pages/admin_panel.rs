//! Instructor control room
//!
//! Go-live toggle, chat moderation, broadcast banner, polls and the catalog
//! tools. Chat and polls are local to this room; the broadcast, batches and
//! banners go through the app context.

use chrono::Utc;
use leptos::prelude::*;

use crate::core::forms::PollDraft;
use crate::core::live_room::{ChatRoom, PollBoard, mention};
use crate::core::mock_data::seed_chat;
use crate::core::{AppView, Batch, ChatMessage, User};
use crate::ui::context::use_app_context;
use crate::ui::form::ErrorNote;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::catalog_editor::{BatchManager, SiteConfigEditor};
use crate::ui::pages::live_class::{AnnouncementBanner, PollCard};

#[component]
pub fn AdminPanel(user: User, batch: Batch) -> impl IntoView {
    let ctx = use_app_context();
    let initial_batch_id = batch.id.clone();
    let batch = Memo::new(move |_| ctx.active_batch().unwrap_or_else(|| batch.clone()));
    let announcement = Memo::new(move |_| ctx.announcement());

    let (is_live, set_is_live) = signal(false);
    let chat = RwSignal::new(ChatRoom::new(seed_chat(Utc::now())));
    let polls = RwSignal::new(PollBoard::default());
    let (chat_input, set_chat_input) = signal(String::new());
    let (broadcast_input, set_broadcast_input) = signal(String::new());

    let instructor = StoredValue::new(user);

    let send_to_chat = move || {
        let text = chat_input.get_untracked();
        let sent = chat
            .try_update(|c| instructor.with_value(|u| c.send(u, &text)))
            .flatten();
        if sent.is_some() {
            set_chat_input.set(String::new());
        }
    };

    let send_broadcast = move || {
        ctx.broadcast(Some(broadcast_input.get_untracked()));
        set_broadcast_input.set(String::new());
    };

    view! {
        <div class="flex flex-col h-[calc(100vh-4rem)] bg-slate-50 overflow-hidden">
            // Header
            <div class="bg-white border-b px-8 py-4 flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <div class="w-10 h-10 bg-blue-600 rounded-xl flex items-center justify-center shadow-lg">
                        <Icon name=icons::VIDEO class="w-5 h-5 invert"/>
                    </div>
                    <div>
                        <h1 class="text-xl font-bold text-slate-800">"Instructor Control Room"</h1>
                        <p class="text-xs text-slate-500">
                            {move || batch.with(|b| format!("{} • {}", b.name, b.teacher))}
                        </p>
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <button
                        class=move || {
                            if is_live.get() {
                                "px-6 py-2 rounded-xl font-bold flex items-center gap-2 bg-red-50 text-red-600 border border-red-200 shadow-sm"
                            } else {
                                "px-6 py-2 rounded-xl font-bold flex items-center gap-2 bg-blue-600 text-white shadow-lg shadow-blue-100 hover:bg-blue-700"
                            }
                        }
                        on:click=move |_| set_is_live.update(|live| *live = !*live)
                    >
                        <span class=move || {
                            if is_live.get() { "w-2 h-2 rounded-full bg-red-600 animate-pulse" } else { "w-2 h-2 rounded-full bg-white" }
                        }></span>
                        {move || if is_live.get() { "Stop Broadcast" } else { "Go Live" }}
                    </button>
                    <button
                        class="p-2 text-slate-400 hover:text-slate-800 transition-colors"
                        title="Leave control room"
                        on:click=move |_| ctx.navigate(AppView::Dashboard)
                    >
                        <Icon name=icons::LOGOUT class="w-5 h-5"/>
                    </button>
                </div>
            </div>

            <AnnouncementBanner announcement=announcement/>

            <div class="flex-1 flex flex-col lg:flex-row overflow-hidden">
                <div class="flex-1 p-6 md:p-8 overflow-y-auto">
                    <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                        <div class="space-y-6">
                            // Stream preview
                            <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm">
                                <div class="flex items-center justify-between mb-4">
                                    <h2 class="font-bold text-lg text-slate-800">"Stream Preview"</h2>
                                    <Show when=move || is_live.get()>
                                        <span class="text-[10px] font-black text-white bg-red-600 px-2 py-1 rounded">"LIVE"</span>
                                    </Show>
                                </div>
                                <div class="aspect-video bg-slate-900 rounded-2xl overflow-hidden">
                                    <img
                                        src="https://picsum.photos/seed/adminpreview/800/450"
                                        class="w-full h-full object-cover opacity-80"
                                        alt="Preview"
                                    />
                                </div>
                            </section>

                            // Broadcast
                            <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm space-y-3">
                                <h2 class="font-bold text-lg text-slate-800 flex items-center gap-2">
                                    <Icon name=icons::MEGAPHONE class="w-5 h-5"/>
                                    "Broadcast Banner"
                                </h2>
                                <p class="text-xs text-slate-500">
                                    {move || match announcement.get() {
                                        Some(text) => format!("Showing: {}", text),
                                        None => "No banner is showing.".to_string(),
                                    }}
                                </p>
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        class="flex-1 border border-slate-200 rounded-lg px-3 py-2 text-sm"
                                        placeholder="Class starts in 5 minutes..."
                                        prop:value=move || broadcast_input.get()
                                        on:input=move |e| set_broadcast_input.set(event_target_value(&e))
                                        on:keydown=move |e| {
                                            if e.key() == "Enter" {
                                                e.prevent_default();
                                                send_broadcast();
                                            }
                                        }
                                    />
                                    <button
                                        class="px-4 py-2 rounded-lg bg-amber-400 text-slate-900 text-sm font-bold disabled:opacity-50"
                                        disabled=move || broadcast_input.get().trim().is_empty()
                                        on:click=move |_| send_broadcast()
                                    >
                                        "Broadcast"
                                    </button>
                                    <button
                                        class="px-4 py-2 rounded-lg border text-sm font-bold text-slate-600"
                                        on:click=move |_| ctx.broadcast(None)
                                    >
                                        "Clear"
                                    </button>
                                </div>
                            </section>

                            <PollComposer polls=polls/>
                        </div>

                        <div class="space-y-6">
                            <BatchManager initial_batch_id=initial_batch_id/>
                            <SiteConfigEditor/>
                        </div>
                    </div>
                </div>

                // Chat moderation
                <div class="w-full lg:w-[380px] bg-white border-l border-slate-200 flex flex-col overflow-hidden">
                    <div class="p-4 border-b flex items-center justify-between">
                        <h2 class="font-black text-xs uppercase tracking-widest text-slate-500">
                            "Live Chat (" {move || chat.with(ChatRoom::len)} ")"
                        </h2>
                        <button
                            class="text-xs font-bold text-red-500 hover:underline disabled:opacity-40"
                            disabled=move || chat.with(ChatRoom::is_empty)
                            on:click=move |_| chat.update(ChatRoom::clear)
                        >
                            "Clear all"
                        </button>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 flex flex-col gap-4">
                        <For
                            each=move || chat.with(|c| c.messages().to_vec())
                            key=|m| m.id.clone()
                            children=move |message| view! {
                                <ModeratedMessage
                                    message=message
                                    chat=chat
                                    on_reply=Callback::new(move |name: String| set_chat_input.set(mention(&name)))
                                />
                            }
                        />
                    </div>

                    <div class="p-4 border-t">
                        <div class="flex items-center gap-2">
                            <input
                                type="text"
                                class="flex-1 border border-slate-200 rounded-xl px-3 py-2 text-sm"
                                placeholder="Send an announcement to chat..."
                                prop:value=move || chat_input.get()
                                on:input=move |e| set_chat_input.set(event_target_value(&e))
                                on:keydown=move |e| {
                                    if e.key() == "Enter" {
                                        e.prevent_default();
                                        send_to_chat();
                                    }
                                }
                            />
                            <button
                                class="w-10 h-10 bg-blue-600 rounded-xl flex items-center justify-center"
                                on:click=move |_| send_to_chat()
                            >
                                <Icon name=icons::SEND class="w-4 h-4 invert"/>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One chat message with delete, mute and reply controls
#[component]
fn ModeratedMessage(
    message: ChatMessage,
    chat: RwSignal<ChatRoom>,
    on_reply: Callback<String>,
) -> impl IntoView {
    let message_id = message.id.clone();
    let user_id = message.user_id.clone();
    let muted = {
        let user_id = user_id.clone();
        Memo::new(move |_| chat.with(|c| c.is_muted(&user_id)))
    };
    let user_name = message.user_name.clone();
    let is_admin = message.is_admin;

    view! {
        <div class="group flex flex-col gap-1">
            <div class="flex items-center justify-between px-1">
                <span class="text-[11px] font-black text-slate-800 flex items-center gap-1">
                    {message.user_name.clone()}
                    {is_admin.then(|| view! {
                        <span class="text-[9px] bg-blue-600 text-white px-1.5 rounded">"YOU"</span>
                    })}
                    <Show when=move || muted.get()>
                        <span class="text-[9px] bg-red-100 text-red-600 px-1.5 rounded">"MUTED"</span>
                    </Show>
                </span>
                <span class="text-[9px] text-slate-400">{message.display_time()}</span>
            </div>
            <div class="bg-slate-50 p-3 rounded-xl text-sm text-slate-600 break-words">{message.text.clone()}</div>
            <div class="flex gap-3 px-1 text-[10px] font-bold text-slate-400">
                <button class="hover:text-blue-600" on:click=move |_| on_reply.run(user_name.clone())>
                    "Reply"
                </button>
                {(!is_admin).then(|| view! {
                    <button
                        class="hover:text-amber-600 flex items-center gap-1"
                        on:click=move |_| {
                            chat.update(|c| {
                                c.toggle_mute(&user_id);
                            });
                        }
                    >
                        <Icon name=icons::MIC_OFF class="w-3 h-3"/>
                        {move || if muted.get() { "Unmute" } else { "Mute" }}
                    </button>
                })}
                <button
                    class="hover:text-red-600"
                    on:click=move |_| {
                        chat.update(|c| {
                            c.delete(&message_id);
                        });
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Poll creation form and the list of launched polls
#[component]
fn PollComposer(polls: RwSignal<PollBoard>) -> impl IntoView {
    let draft = RwSignal::new(PollDraft::default());
    let (error, set_error) = signal(None::<String>);

    let launch = move || match draft.with_untracked(PollDraft::validate) {
        Ok(poll) => {
            polls.update(|b| b.launch(poll));
            draft.set(PollDraft::default());
            set_error.set(None);
        }
        Err(err) => set_error.set(Some(err.to_string())),
    };

    view! {
        <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm space-y-4">
            <h2 class="font-bold text-lg text-slate-800 flex items-center gap-2">
                <Icon name=icons::CHART class="w-5 h-5"/>
                "Live Polls"
            </h2>

            <input
                type="text"
                class="w-full border border-slate-200 rounded-lg px-3 py-2 text-sm"
                placeholder="Ask a question..."
                prop:value=move || draft.with(|d| d.question.clone())
                on:input=move |e| draft.update(|d| d.question = event_target_value(&e))
            />

            <div class="space-y-2">
                {move || {
                    let count = draft.with(|d| d.options.len());
                    let removable = draft.with(PollDraft::can_remove_option);
                    (0..count)
                        .map(|i| view! {
                            <div class="flex items-center gap-2">
                                <input
                                    type="text"
                                    class="flex-1 border border-slate-200 rounded-lg px-3 py-2 text-sm"
                                    placeholder=format!("Option {}", i + 1)
                                    prop:value=move || draft.with(|d| d.options.get(i).cloned().unwrap_or_default())
                                    on:input=move |e| draft.update(|d| d.set_option(i, event_target_value(&e)))
                                />
                                {removable.then(|| view! {
                                    <button
                                        class="p-2 text-slate-400 hover:text-red-500"
                                        title="Remove option"
                                        on:click=move |_| draft.update(|d| d.remove_option(i))
                                    >
                                        <Icon name=icons::X class="w-4 h-4"/>
                                    </button>
                                })}
                            </div>
                        })
                        .collect_view()
                }}
            </div>

            <div class="flex items-center gap-3">
                <button
                    class="text-xs font-bold text-blue-600 disabled:opacity-40"
                    disabled=move || !draft.with(PollDraft::can_add_option)
                    on:click=move |_| draft.update(PollDraft::add_option)
                >
                    "+ Add option"
                </button>
                <div class="flex-1"></div>
                <button class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-bold" on:click=move |_| launch()>
                    "Launch Poll"
                </button>
            </div>
            <ErrorNote error=error/>

            <div class="space-y-4">
                <For
                    each=move || polls.with(|b| b.polls().to_vec())
                    key=|p| (p.id.clone(), p.is_active)
                    children=move |poll| {
                        let close_id = poll.id.clone();
                        let delete_id = poll.id.clone();
                        let is_active = poll.is_active;
                        view! {
                            <div class="border border-slate-100 rounded-2xl p-4 space-y-3">
                                <PollCard poll=poll can_vote=false/>
                                <div class="flex gap-3 text-xs font-bold">
                                    {is_active.then(|| view! {
                                        <button
                                            class="text-amber-600"
                                            on:click=move |_| {
                                                polls.update(|b| {
                                                    b.close(&close_id);
                                                });
                                            }
                                        >
                                            "Close"
                                        </button>
                                    })}
                                    <button
                                        class="text-red-600 flex items-center gap-1"
                                        on:click=move |_| {
                                            polls.update(|b| {
                                                b.delete(&delete_id);
                                            });
                                        }
                                    >
                                        <Icon name=icons::TRASH class="w-3 h-3"/>
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
