//! vitrine demo - Web demo for the storefront icon set
//!
//! A single-page app that renders every icon inside minimal storefront
//! chrome, plus a playground for the rotatable arrow and caret icons.

use dioxus::prelude::*;
use vitrine_ui::{
    resolve_rotation, AccountIcon, ArrowIcon, ArrowKind, BagIcon, CaretIcon, ChevronDownIcon,
    CloseIcon, Direction, HelpIcon, MenuIcon, SearchIcon, SelectIcon,
};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Dismissible promo banner, the canonical Close icon placement
#[component]
fn PromoBanner() -> Element {
    let mut dismissed = use_signal(|| false);

    rsx! {
        if !dismissed() {
            div { class: "flex items-center justify-center gap-4 bg-gray-900 px-6 py-2 text-sm text-white",
                span { "Free shipping on orders over $50" }
                button {
                    class: "text-gray-400 hover:text-white",
                    onclick: move |_| dismissed.set(true),
                    CloseIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}

/// Storefront header with the navigation and commerce icons
#[component]
fn StoreHeader() -> Element {
    rsx! {
        header { class: "flex items-center justify-between border-b border-gray-200 px-6 py-4",
            div { class: "flex items-center gap-4",
                button { MenuIcon {} }
                span { class: "text-xl font-bold uppercase tracking-widest", "Vitrine" }
            }
            div { class: "flex items-center gap-4",
                button { SearchIcon {} }
                button { AccountIcon {} }
                button { class: "relative",
                    BagIcon {}
                    span { class: "absolute -right-1 -top-1 flex h-4 w-4 items-center justify-center rounded-full bg-gray-900 text-xs text-white",
                        "2"
                    }
                }
            }
        }
    }
}

/// One named tile in the icon gallery
#[component]
fn GalleryTile(name: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-2 rounded border border-gray-200 p-4",
            {children}
            span { class: "text-xs text-gray-600", "{name}" }
        }
    }
}

/// Every icon at gallery size
#[component]
fn IconGallery() -> Element {
    rsx! {
        section {
            h2 { class: "mb-4 text-lg font-semibold", "Icon set" }
            div { class: "grid grid-cols-5 gap-4",
                GalleryTile { name: "Menu", MenuIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Close", CloseIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Arrow", ArrowIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Caret", CaretIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Select", SelectIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Bag", BagIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Account", AccountIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Help", HelpIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Search", SearchIcon { class: "w-8 h-8" } }
                GalleryTile { name: "Chevron", ChevronDownIcon { class: "w-8 h-8" } }
            }
        }
    }
}

/// Button styling for the direction presets
fn preset_class(active: bool) -> &'static str {
    if active {
        "rounded border border-gray-900 bg-gray-900 px-3 py-1 text-sm text-white"
    } else {
        "rounded border border-gray-300 px-3 py-1 text-sm text-gray-600 hover:border-gray-500"
    }
}

/// Playground for the rotatable icons, fed by a raw direction attribute
#[component]
fn OrientationLab() -> Element {
    let mut raw = use_signal(|| "up".to_string());
    let direction = Direction::from_attr(&raw());
    let arrow_rotation = resolve_rotation(ArrowKind::Arrow, direction);
    let caret_rotation = resolve_rotation(ArrowKind::Caret, direction);

    rsx! {
        section {
            h2 { class: "mb-4 text-lg font-semibold", "Orientation" }
            div { class: "flex flex-wrap items-center gap-2",
                for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                    button {
                        key: "{d}",
                        class: preset_class(raw() == d.as_str()),
                        onclick: move |_| raw.set(d.as_str().to_string()),
                        "{d}"
                    }
                }
                input {
                    class: "w-40 rounded border border-gray-300 px-3 py-1 text-sm",
                    placeholder: "direction attribute",
                    value: "{raw}",
                    oninput: move |evt| raw.set(evt.value()),
                }
            }
            div { class: "mt-6 flex items-center gap-10",
                div { class: "flex flex-col items-center gap-2",
                    ArrowIcon { class: "w-8 h-8", direction }
                    code { class: "font-mono text-xs text-gray-500", "{arrow_rotation}" }
                }
                div { class: "flex flex-col items-center gap-2",
                    CaretIcon { class: "w-8 h-8", direction }
                    code { class: "font-mono text-xs text-gray-500", "{caret_rotation}" }
                }
            }
        }
    }
}

/// Expandable FAQ row, caret flips between open and closed
#[component]
fn DisclosureRow(question: &'static str, answer: &'static str) -> Element {
    let mut open = use_signal(|| false);
    let caret_direction = if open() { Direction::Up } else { Direction::Down };

    rsx! {
        div { class: "border-b border-gray-200",
            button {
                class: "flex w-full items-center justify-between py-4 text-left",
                onclick: move |_| open.toggle(),
                span { class: "font-medium", "{question}" }
                CaretIcon { class: "w-4 h-4 text-gray-500", direction: caret_direction }
            }
            if open() {
                p { class: "pb-4 text-sm text-gray-600", "{answer}" }
            }
        }
    }
}

/// FAQ section built from disclosure rows
#[component]
fn Faq() -> Element {
    rsx! {
        section {
            h2 { class: "mb-4 text-lg font-semibold", "FAQ" }
            DisclosureRow {
                question: "How long does shipping take?",
                answer: "Orders leave the warehouse within two business days and arrive within a week.",
            }
            DisclosureRow {
                question: "What is the return policy?",
                answer: "Unworn items can be returned within 30 days for a full refund.",
            }
            DisclosureRow {
                question: "Do you ship internationally?",
                answer: "Yes, duties and taxes are calculated at checkout.",
            }
        }
    }
}

/// Icons placed the way storefront pages actually use them
#[component]
fn ContextStrip() -> Element {
    rsx! {
        section {
            h2 { class: "mb-4 text-lg font-semibold", "In context" }
            div { class: "flex flex-wrap items-center gap-6",
                div { class: "flex items-center gap-2 rounded border border-gray-300 px-3 py-2 text-sm",
                    span { "Sort: Featured" }
                    SelectIcon { class: "w-4 h-4 text-gray-500" }
                }
                a { class: "flex items-center gap-2 font-medium",
                    span { "Shop now" }
                    ArrowIcon { class: "w-4 h-4" }
                }
                button { class: "flex items-center gap-2 text-sm text-gray-600",
                    span { "View all" }
                    ChevronDownIcon { class: "w-4 h-4" }
                }
                a { class: "flex items-center gap-2 text-sm text-gray-600",
                    HelpIcon { class: "w-4 h-4" }
                    span { "Help" }
                }
            }
        }
    }
}

/// Main demo app component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-white text-gray-900",
            PromoBanner {}
            StoreHeader {}
            main { class: "mx-auto max-w-4xl space-y-12 px-6 py-10",
                IconGallery {}
                OrientationLab {}
                Faq {}
                ContextStrip {}
            }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
