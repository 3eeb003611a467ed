//! Shared UI components

pub mod icons;

pub use icons::{
    AccountIcon, ArrowIcon, BagIcon, CaretIcon, ChevronDownIcon, CloseIcon, HelpIcon, MenuIcon,
    SearchIcon, SelectIcon,
};
