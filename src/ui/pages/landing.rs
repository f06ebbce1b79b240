//! Landing page component
//!
//! Public home page:
//! - SEO meta tags
//! - Hero section with the configurable hero banner and role logins
//! - Trending banner strip from the site configuration
//! - Feature cards

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::UserRole;
use crate::ui::context::use_app_context;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let site_config = Memo::new(move |_| ctx.site_config());

    view! {
        <SeoMeta />

        <div class="overflow-y-auto">
            // Hero Section
            <section class="relative pt-24 pb-32 px-6 bg-gradient-to-br from-blue-50 to-indigo-50 overflow-hidden">
                <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="relative z-10">
                        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-blue-100 text-blue-700 font-bold text-xs mb-6 tracking-wider uppercase">
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-blue-500"></span>
                            "Next Generation Learning"
                        </div>
                        <h1 class="text-5xl md:text-7xl font-extrabold text-slate-900 leading-tight mb-8">
                            "Become a " <span class="text-blue-600">"Topper"</span> " with NextToppers Pro."
                        </h1>
                        <p class="text-xl text-slate-600 mb-10 max-w-lg leading-relaxed">
                            "Experience India's most interactive live classes with smart AI summaries, personalized feedback, and elite batch mentors."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 mb-12">
                            <button
                                class="px-8 py-4 bg-blue-600 text-white rounded-2xl font-bold text-lg hover:bg-blue-700 shadow-xl shadow-blue-200 transition-all"
                                on:click=move |_| ctx.login(UserRole::Student)
                            >
                                "Start Learning as Student"
                            </button>
                            <button
                                class="px-8 py-4 bg-white text-slate-800 border-2 border-slate-100 rounded-2xl font-bold text-lg hover:bg-slate-50 shadow-lg shadow-slate-100 transition-all"
                                on:click=move |_| ctx.login(UserRole::Admin)
                            >
                                "Go to Teacher Panel"
                            </button>
                        </div>

                        <p class="text-sm font-medium text-slate-500">
                            "Joined by " <span class="text-slate-900 font-bold">"50k+"</span> " ambitious students"
                        </p>
                    </div>

                    <div class="relative bg-white p-4 rounded-[2.5rem] shadow-2xl rotate-2 hover:rotate-0 transition-transform duration-500">
                        <img
                            src=move || site_config.get().hero_banner
                            class="rounded-[1.5rem] w-full"
                            alt="NextToppers hero banner"
                        />
                        <div class="absolute -bottom-6 -left-6 bg-white p-6 rounded-3xl shadow-xl">
                            <p class="font-bold text-slate-900">"Live Session Active"</p>
                            <p class="text-xs text-slate-500">"2.4k students joined"</p>
                        </div>
                    </div>
                </div>
            </section>

            // Trending banners
            <Show when=move || !site_config.get().trending_banners.is_empty()>
                <section class="py-12 px-6 bg-white border-b border-slate-100">
                    <div class="max-w-7xl mx-auto">
                        <h2 class="text-2xl font-bold text-slate-900 mb-6">"Trending Now"</h2>
                        <div class="flex gap-6 overflow-x-auto pb-2">
                            <For
                                each=move || site_config.get().trending_banners.into_iter().enumerate()
                                key=|(i, url)| (*i, url.clone())
                                children=move |(i, url)| {
                                    view! {
                                        <img
                                            src=url
                                            class="h-40 rounded-2xl shadow-md flex-shrink-0 object-cover"
                                            alt=format!("Trending banner {}", i + 1)
                                        />
                                    }
                                }
                            />
                        </div>
                    </div>
                </section>
            </Show>

            // Features Section
            <section class="py-24 px-6 bg-white">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-slate-900 mb-4">"Everything you need to excel"</h2>
                        <p class="text-slate-500 max-w-2xl mx-auto">
                            "Our platform is built by experts to ensure a seamless learning journey from day one to the final exam."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="📺"
                            color="bg-blue-50 text-blue-600"
                            title="Interactive Live Classes"
                            description="Real-time polls, live chat, and hand-raise features to keep you engaged."
                        />
                        <FeatureCard
                            icon="👥"
                            color="bg-purple-50 text-purple-600"
                            title="Batch-Wise Focus"
                            description="Structured learning in small batches with dedicated mentors for every subject."
                        />
                        <FeatureCard
                            icon="🤖"
                            color="bg-indigo-50 text-indigo-600"
                            title="AI Study Assistant"
                            description="Get instant summaries of your live classes and answers to any question."
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    color: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-8 rounded-3xl border border-slate-100 hover:border-blue-200 hover:shadow-xl transition-all">
            <div class=format!("w-14 h-14 rounded-2xl {} flex items-center justify-center text-2xl mb-6", color)>
                {icon}
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-3">{title}</h3>
            <p class="text-slate-500 leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="NextToppers Pro - Live Classes, Batches and AI Tutor" />
        <Meta name="description" content="Interactive live classes with polls and chat, structured batches with study material, and an AI tutor for instant doubt solving." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="NextToppers Pro" />
    }
}
