//! Live class room for students
//!
//! Video area (static stream image), chat and poll tabs, the instructor's
//! broadcast banner, and two AI helpers: a chat summary and a question
//! answered with the class as context. Chat and polls are local to this room.

use chrono::Utc;
use leptos::html::Div;
use leptos::prelude::*;

use crate::core::ai::{ClassAssistant, NoteKind, live_class_context};
use crate::core::live_room::{AI_CONTEXT_LINES, ChatRoom, PollBoard};
use crate::core::mock_data::{seed_chat, seed_poll};
use crate::core::{AppView, Batch, ChatMessage, Poll, User};
use crate::ui::context::use_app_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoomTab {
    Chat,
    Poll,
}

#[component]
pub fn LiveClassRoom(user: User, batch: Batch) -> impl IntoView {
    let ctx = use_app_context();
    let batch = Memo::new(move |_| ctx.active_batch().unwrap_or_else(|| batch.clone()));
    let announcement = Memo::new(move |_| ctx.announcement());

    let chat = RwSignal::new(ChatRoom::new(seed_chat(Utc::now())));
    let polls = RwSignal::new(PollBoard::new(vec![seed_poll()]));
    let voted = RwSignal::new(Vec::<String>::new());
    let (tab, set_tab) = signal(RoomTab::Chat);
    let (input_text, set_input_text) = signal(String::new());

    let assistant = RwSignal::new(ClassAssistant::default());
    let ai_busy = Memo::new(move |_| assistant.with(ClassAssistant::is_busy));
    let (question, set_question) = signal(String::new());

    let chat_end = NodeRef::<Div>::new();
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        chat.track();
        if let Some(el) = chat_end.get() {
            el.scroll_into_view();
        }
    });

    let sender = StoredValue::new(user.clone());
    let send_message = move || {
        let text = input_text.get_untracked();
        let sent = chat
            .try_update(|c| sender.with_value(|u| c.send(u, &text)))
            .flatten();
        if sent.is_some() {
            set_input_text.set(String::new());
        }
    };

    let vote = move |poll_id: String, option: usize| {
        if voted.with_untracked(|v| v.contains(&poll_id)) {
            return;
        }
        if polls.try_update(|b| b.vote(&poll_id, option)) == Some(true) {
            voted.update(|v| v.push(poll_id));
        }
    };

    let summarize = move || {
        if assistant.try_update(ClassAssistant::begin) != Some(true) {
            return;
        }
        let lines = chat.with_untracked(|c| c.recent_lines(AI_CONTEXT_LINES));

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let result = crate::ui::ai_gateway::summarize(lines).await;
            if let Err(err) = &result {
                leptos::logging::warn!("Chat summary failed: {}", err);
            }
            assistant.update(|a| a.finish(NoteKind::Summary, result));
        });

        #[cfg(feature = "ssr")]
        {
            let _ = lines;
            assistant.update(|a| a.finish(NoteKind::Summary, Err("server render".to_string())));
        }
    };

    let ask_ai = move || {
        let asked = question.get_untracked().trim().to_string();
        if asked.is_empty() || assistant.try_update(ClassAssistant::begin) != Some(true) {
            return;
        }
        let lines = chat.with_untracked(|c| c.recent_lines(AI_CONTEXT_LINES));
        let context = batch.with_untracked(|b| live_class_context(b, &lines));
        set_question.set(String::new());

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let result = crate::ui::ai_gateway::ask_expert(asked, context).await;
            if let Err(err) = &result {
                leptos::logging::warn!("Class question failed: {}", err);
            }
            assistant.update(|a| a.finish(NoteKind::Answer, result));
        });

        #[cfg(feature = "ssr")]
        {
            let _ = (asked, context);
            assistant.update(|a| a.finish(NoteKind::Answer, Err("server render".to_string())));
        }
    };

    view! {
        <div class="flex flex-col h-[calc(100vh-4rem)] bg-[#f8f9fa] overflow-hidden">
            // Header
            <div class="bg-white border-b px-6 py-3 flex items-center justify-between shadow-sm z-10">
                <div class="flex items-center gap-4">
                    <span class="bg-[#4D4D4D] px-4 py-2 rounded-lg text-white font-black text-sm italic">
                        "Next Toppers"
                    </span>
                    <span class="text-sm font-bold text-slate-500 uppercase tracking-widest">
                        {move || batch.get().name}
                    </span>
                </div>
                <div class="flex items-center gap-4">
                    <p class="text-[10px] font-bold text-slate-400">"Hi " {user.name.clone()}</p>
                    <div class="w-10 h-10 bg-[#00A79D] rounded-full flex items-center justify-center text-white font-bold">
                        {user.initial()}
                    </div>
                    <button
                        class="p-2 text-slate-400 hover:text-red-500 transition-colors"
                        title="Leave class"
                        on:click=move |_| ctx.navigate(AppView::Dashboard)
                    >
                        <Icon name=icons::LOGOUT class="w-5 h-5"/>
                    </button>
                </div>
            </div>

            <AnnouncementBanner announcement=announcement/>

            <div class="flex-1 flex flex-col lg:flex-row overflow-hidden p-6 gap-6">
                // Main Video Area
                <div class="flex-1 flex flex-col gap-4 overflow-y-auto">
                    <div class="bg-slate-900 rounded-xl shadow-lg relative overflow-hidden aspect-video">
                        <img
                            src="https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&w=1200&q=80"
                            class="w-full h-full object-cover opacity-80"
                            alt="Live Stream"
                        />
                        <div class="absolute top-4 left-4 bg-red-600 text-white text-xs font-black px-3 py-1 rounded-full">
                            "LIVE"
                        </div>
                        <div class="absolute bottom-4 left-4 text-white">
                            <p class="text-sm opacity-80">{move || batch.get().teacher}</p>
                            <p class="text-lg font-bold">{move || batch.get().subject}</p>
                        </div>
                    </div>

                    // AI helpers
                    <div class="bg-white rounded-xl shadow border border-slate-200 p-4 flex flex-col gap-3">
                        <div class="flex flex-wrap items-center gap-2">
                            <button
                                class="px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-bold flex items-center gap-2 disabled:opacity-50"
                                disabled=move || ai_busy.get()
                                on:click=move |_| summarize()
                            >
                                <Icon name=icons::SPARKLES class="w-4 h-4 invert"/>
                                "Summarize chat"
                            </button>
                            <input
                                type="text"
                                class="flex-1 min-w-[200px] border rounded-lg px-3 py-2 text-sm"
                                placeholder="Ask AI about this class..."
                                prop:value=move || question.get()
                                on:input=move |e| set_question.set(event_target_value(&e))
                                on:keydown=move |e| {
                                    if e.key() == "Enter" {
                                        e.prevent_default();
                                        ask_ai();
                                    }
                                }
                            />
                            <button
                                class="px-4 py-2 rounded-lg border border-indigo-200 text-indigo-600 text-sm font-bold disabled:opacity-50"
                                disabled=move || ai_busy.get() || question.get().trim().is_empty()
                                on:click=move |_| ask_ai()
                            >
                                "Ask AI"
                            </button>
                        </div>
                        <Show when=move || ai_busy.get()>
                            <p class="text-xs text-slate-400">"Thinking..."</p>
                        </Show>
                        {move || assistant.with(|a| a.note().cloned()).map(|note| view! {
                            <div class="bg-indigo-50 rounded-lg p-4">
                                <div class="flex items-center justify-between mb-2">
                                    <p class="text-xs font-black uppercase tracking-widest text-indigo-600">{note.kind.title()}</p>
                                    <button class="text-slate-400" on:click=move |_| assistant.update(ClassAssistant::dismiss)>
                                        <Icon name=icons::X class="w-4 h-4"/>
                                    </button>
                                </div>
                                <Markdown content=note.text/>
                            </div>
                        })}
                    </div>
                </div>

                // Sidebar
                <div class="w-full lg:w-[380px] bg-white rounded-xl shadow-lg border border-slate-200 flex flex-col overflow-hidden">
                    <div class="p-4 border-b flex gap-2">
                        <SidebarTab label="Live Chat" tab=RoomTab::Chat current=tab on_select=set_tab/>
                        <SidebarTab label="Live Poll" tab=RoomTab::Poll current=tab on_select=set_tab/>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 flex flex-col gap-6">
                        {move || match tab.get() {
                            RoomTab::Chat => view! {
                                <For
                                    each=move || chat.with(|c| c.messages().to_vec())
                                    key=|m| m.id.clone()
                                    children=|message| view! { <ChatBubble message=message/> }
                                />
                                <div node_ref=chat_end></div>
                            }
                            .into_any(),
                            RoomTab::Poll => match polls.with(|b| b.active().cloned()) {
                                Some(poll) => {
                                    let has_voted = voted.with(|v| v.contains(&poll.id));
                                    view! {
                                        <PollCard
                                            poll=poll
                                            can_vote={!has_voted}
                                            on_vote=Callback::new(move |(id, option)| vote(id, option))
                                        />
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <div class="flex flex-col items-center justify-center h-full text-center p-8 opacity-40">
                                        <Icon name=icons::CHART class="w-10 h-10"/>
                                        <p class="mt-4 font-black text-sm uppercase tracking-widest">"No Active Polls"</p>
                                    </div>
                                }
                                .into_any(),
                            },
                        }}
                    </div>

                    <Show when=move || tab.get() == RoomTab::Chat>
                        <div class="p-4 border-t bg-white">
                            <div class="flex items-center gap-3 border rounded-xl px-4 py-2 bg-white shadow-sm">
                                <input
                                    type="text"
                                    class="flex-1 bg-transparent text-sm font-medium outline-none placeholder:text-slate-400"
                                    placeholder="Type Something..."
                                    prop:value=move || input_text.get()
                                    on:input=move |e| set_input_text.set(event_target_value(&e))
                                    on:keydown=move |e| {
                                        if e.key() == "Enter" {
                                            e.prevent_default();
                                            send_message();
                                        }
                                    }
                                />
                                <button
                                    class="w-10 h-10 bg-[#ff8c00] text-white rounded-lg flex items-center justify-center hover:bg-orange-600 shadow-md"
                                    on:click=move |_| send_message()
                                >
                                    <Icon name=icons::SEND class="w-4 h-4 invert"/>
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SidebarTab(
    label: &'static str,
    tab: RoomTab,
    current: ReadSignal<RoomTab>,
    on_select: WriteSignal<RoomTab>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if current.get() == tab {
                    "flex-1 py-2.5 rounded-lg font-black text-xs uppercase tracking-widest border bg-white border-orange-200 text-orange-600 shadow-sm"
                } else {
                    "flex-1 py-2.5 rounded-lg font-black text-xs uppercase tracking-widest border bg-slate-50 border-transparent text-slate-400"
                }
            }
            on:click=move |_| on_select.set(tab)
        >
            {label}
        </button>
    }
}

/// Instructor broadcast shown across the top of the live room
#[component]
pub fn AnnouncementBanner(#[prop(into)] announcement: Signal<Option<String>>) -> impl IntoView {
    move || {
        announcement.get().map(|text| {
            view! {
                <div class="bg-amber-400 text-slate-900 px-6 py-2 flex items-center gap-3 font-bold text-sm">
                    <Icon name=icons::MEGAPHONE class="w-4 h-4"/>
                    <span>{text}</span>
                </div>
            }
        })
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let time = message.display_time();
    let bubble_class = if message.is_admin {
        "bg-teal-50 p-3 rounded-xl shadow-sm text-sm text-slate-700 leading-relaxed break-words"
    } else {
        "bg-[#f2f2f2] p-3 rounded-xl shadow-sm text-sm text-slate-600 leading-relaxed break-words"
    };
    view! {
        <div class="flex flex-col gap-1">
            <div class="flex items-center gap-2 px-1">
                <span class="text-[11px] font-black text-slate-800">{message.user_name.clone()}</span>
                {message.is_admin.then(|| view! {
                    <span class="text-[9px] font-black bg-[#00A79D] text-white px-1.5 rounded">"TEACHER"</span>
                })}
            </div>
            <div class=bubble_class>
                {message.text.clone()}
            </div>
            <span class="text-[9px] font-bold text-slate-400 px-1">{time}</span>
        </div>
    }
}

/// Poll question with per-option share bars; options are buttons while voting is open
#[component]
pub fn PollCard(
    poll: Poll,
    /// Whether the viewer may still vote
    can_vote: bool,
    /// Called with (poll id, option index)
    #[prop(optional)]
    on_vote: Option<Callback<(String, usize)>>,
) -> impl IntoView {
    let total = poll.total_votes();
    let leading = poll.leading_option();
    let voting_open = can_vote && poll.is_active && on_vote.is_some();

    let options = poll
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let percent = poll.percentage(i);
            let poll_id = poll.id.clone();
            let bar_class = if leading == Some(i) { "bg-orange-400" } else { "bg-slate-300" };
            view! {
                <button
                    class="w-full text-left relative border rounded-lg overflow-hidden disabled:cursor-default"
                    disabled={!voting_open}
                    on:click=move |_| {
                        if let Some(on_vote) = on_vote {
                            on_vote.run((poll_id.clone(), i));
                        }
                    }
                >
                    <div class=format!("absolute inset-y-0 left-0 opacity-30 {}", bar_class) style=format!("width: {}%", percent)></div>
                    <div class="relative flex justify-between px-3 py-2 text-sm">
                        <span class="font-semibold text-slate-700">{option.clone()}</span>
                        <span class="font-bold text-slate-500">{percent} "%"</span>
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-3">
            <p class="font-bold text-slate-800">{poll.question.clone()}</p>
            {options}
            <p class="text-xs text-slate-400">
                {total} " votes"
                {(!poll.is_active).then_some(" · closed")}
                {(poll.is_active && !can_vote).then_some(" · you voted")}
            </p>
        </div>
    }
}
