use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const BOOK: &str = "book";
    pub const SPARKLES: &str = "sparkles";
    pub const SEND: &str = "send";
    pub const X: &str = "x";
    pub const PLUS: &str = "plus";
    pub const TRASH: &str = "trash";
    pub const EDIT: &str = "edit";
    pub const MEGAPHONE: &str = "megaphone";
    pub const USERS: &str = "users";
    pub const LOGOUT: &str = "logout";
    pub const VIDEO: &str = "video";
    pub const CHART: &str = "chart";
    pub const MIC_OFF: &str = "mic-off";
    pub const ALERT_CIRCLE: &str = "alert-circle";
}
