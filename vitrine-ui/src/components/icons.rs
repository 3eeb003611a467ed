//! Storefront icon components
//!
//! All icons render inside a shared 20x20 viewport and inherit text color
//! through currentColor. Default size is w-5 h-5, override with the
//! `class` prop. The arrow and caret icons are authored in their resting
//! orientation (arrow points right, caret points down) and take an
//! optional [`Direction`] that rotates them with a stylesheet class.

use dioxus::prelude::*;

use crate::orientation::{resolve_rotation, ArrowKind, Direction};

/// Shared wrapper: square viewport, fill inherited from the text color.
/// Every named icon composes its fixed content into this container.
#[component]
fn Icon(#[props(default = "w-5 h-5".to_string())] class: String, children: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 20 20",
            class: "{class}",
            fill: "currentColor",
            {children}
        }
    }
}

/// Menu icon (hamburger, three horizontal lines)
#[component]
pub fn MenuIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Menu" }
            line {
                x1: "3",
                y1: "6.375",
                x2: "17",
                y2: "6.375",
                stroke: "currentColor",
                stroke_width: "1.25",
            }
            line {
                x1: "3",
                y1: "10.375",
                x2: "17",
                y2: "10.375",
                stroke: "currentColor",
                stroke_width: "1.25",
            }
            line {
                x1: "3",
                y1: "14.375",
                x2: "17",
                y2: "14.375",
                stroke: "currentColor",
                stroke_width: "1.25",
            }
        }
    }
}

/// Close icon (diagonal cross, for dismissing drawers and banners)
#[component]
pub fn CloseIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Close" }
            line {
                x1: "4.44194",
                y1: "4.30806",
                x2: "15.7556",
                y2: "15.6218",
                stroke: "currentColor",
                stroke_width: "1.25",
            }
            line {
                y1: "-0.625",
                x2: "16",
                y2: "-0.625",
                transform: "matrix(-0.707107 0.707107 0.707107 0.707107 16 4.75)",
                stroke: "currentColor",
                stroke_width: "1.25",
            }
        }
    }
}

/// Arrow icon; rests pointing right, `direction` rotates it
#[component]
pub fn ArrowIcon(
    #[props(default = "w-5 h-5".to_string())] class: String,
    direction: Option<Direction>,
) -> Element {
    let rotation = resolve_rotation(ArrowKind::Arrow, direction);
    rsx! {
        Icon { class: "{class} {rotation}",
            title { "Arrow" }
            path { d: "M7 3L14 10L7 17", stroke: "currentColor", stroke_width: "1.25" }
        }
    }
}

/// Caret icon (disclosure indicator); rests pointing down, `direction` rotates it
#[component]
pub fn CaretIcon(
    #[props(default = "w-5 h-5".to_string())] class: String,
    direction: Option<Direction>,
) -> Element {
    let rotation = resolve_rotation(ArrowKind::Caret, direction);
    rsx! {
        Icon { class: "{class} {rotation}",
            title { "Caret" }
            path { d: "M14 8L10 12L6 8", stroke: "currentColor", stroke_width: "1.25" }
        }
    }
}

/// Select icon (paired chevrons overlaid on native select controls)
#[component]
pub fn SelectIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Select" }
            path { d: "M7 8.5L10 6.5L13 8.5", stroke: "currentColor", stroke_width: "1.25" }
            path { d: "M13 11.5L10 13.5L7 11.5", stroke: "currentColor", stroke_width: "1.25" }
        }
    }
}

/// Bag icon (cart)
#[component]
pub fn BagIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Bag" }
            path {
                fill_rule: "evenodd",
                d: "M8.125 5a1.875 1.875 0 0 1 3.75 0v.375h-3.75V5Zm-1.25.375V5a3.125 3.125 0 1 1 6.25 0v.375h3.5V15A2.625 2.625 0 0 1 14 17.625H6A2.625 2.625 0 0 1 3.375 15V5.375h3.5ZM4.625 15V6.625h10.75V15c0 .76-.616 1.375-1.375 1.375H6c-.76 0-1.375-.616-1.375-1.375Z",
            }
        }
    }
}

/// Account icon (person in a circle)
#[component]
pub fn AccountIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Account" }
            path {
                fill_rule: "evenodd",
                d: "M9.9998 12.625c-1.9141 0-3.6628.698-5.0435 1.8611C3.895 13.2935 3.25 11.7221 3.25 10c0-3.728 3.022-6.75 6.75-6.75 3.7279 0 6.75 3.022 6.75 6.75 0 1.7222-.645 3.2937-1.7065 4.4863-1.3807-1.1632-3.1295-1.8613-5.0437-1.8613ZM10 18c-2.3556 0-4.4734-1.0181-5.9374-2.6382C2.7806 13.9431 2 12.0627 2 10c0-4.4183 3.5817-8 8-8s8 3.5817 8 8-3.5817 8-8 8Zm0-12.5c-1.567 0-2.75 1.394-2.75 3s1.183 3 2.75 3 2.75-1.394 2.75-3-1.183-3-2.75-3Z",
            }
        }
    }
}

/// Help icon (question mark in a circle)
#[component]
pub fn HelpIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Help" }
            path { d: "M3.375 10a6.625 6.625 0 1 1 13.25 0 6.625 6.625 0 0 1-13.25 0ZM10 2.125a7.875 7.875 0 1 0 0 15.75 7.875 7.875 0 0 0 0-15.75Zm.699 10.507H9.236V14h1.463v-1.368ZM7.675 7.576A3.256 3.256 0 0 0 7.5 8.67h1.245c0-.496.105-.89.316-1.182.218-.299.553-.448 1.005-.448a1 1 0 0 1 .327.065c.124.044.24.113.35.208.108.095.2.223.272.383.08.154.12.34.12.558a1.3 1.3 0 0 1-.076.471c-.044.131-.11.252-.197.361-.08.102-.174.197-.283.285-.102.087-.212.182-.328.284a3.157 3.157 0 0 0-.382.383c-.102.124-.19.27-.262.438a2.476 2.476 0 0 0-.164.591 6.333 6.333 0 0 0-.043.81h1.179c0-.263.021-.485.065-.668a1.65 1.65 0 0 1 .207-.47c.088-.139.19-.263.306-.372.117-.11.244-.223.382-.34l.35-.306c.116-.11.218-.23.305-.361.095-.139.168-.3.219-.482.058-.19.087-.412.087-.667 0-.35-.062-.664-.186-.942a1.881 1.881 0 0 0-.513-.689 2.07 2.07 0 0 0-.753-.427A2.721 2.721 0 0 0 10.12 6c-.4 0-.764.066-1.092.197a2.36 2.36 0 0 0-.83.536c-.225.234-.4.515-.523.843Z" }
        }
    }
}

/// Search icon (magnifying glass)
#[component]
pub fn SearchIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Search" }
            path {
                fill_rule: "evenodd",
                d: "M13.3 8.52a4.77 4.77 0 1 1-9.55 0 4.77 4.77 0 0 1 9.55 0Zm-.98 4.68a6.02 6.02 0 1 1 .88-.88l4.3 4.3-.89.88-4.3-4.3Z",
            }
        }
    }
}

/// Chevron down icon (wide, for section headers and "view more" rows)
#[component]
pub fn ChevronDownIcon(#[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        Icon { class,
            title { "Chevron Down" }
            path { d: "M10 13.82c.2 0 .4-.08.53-.23l6.04-6.2a.7.7 0 0 0 .22-.5.7.7 0 0 0-.72-.71c-.2 0-.37.08-.5.2L10 12.07 4.43 6.38a.71.71 0 0 0-.5-.2.7.7 0 0 0-.72.72c0 .2.08.37.22.5l6.04 6.2c.15.14.33.22.53.22Z" }
        }
    }
}
