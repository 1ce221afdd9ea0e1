use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ToggleButtonProps {
    pub label: String,
    #[props(default = false)]
    pub active: bool,
    /// Highlight color when active
    #[props(default = "#fca311".to_string())]
    pub accent: String,
    pub onclick: EventHandler<MouseEvent>,
}

/// Small selector button used by every control group.
#[component]
pub fn ToggleButton(props: ToggleButtonProps) -> Element {
    let style = if props.active {
        format!(
            "padding: 4px 10px; border-radius: 6px; border: 1px solid {}; background: {}; color: #0f172a; font-weight: bold; cursor: pointer;",
            props.accent, props.accent
        )
    } else {
        "padding: 4px 10px; border-radius: 6px; border: 1px solid #334155; background: transparent; color: #94a3b8; cursor: pointer;".to_string()
    };

    rsx! {
        button {
            style: "{style}",
            onclick: move |evt| props.onclick.call(evt),
            "{props.label}"
        }
    }
}
