//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.

mod result_item;
pub use result_item::ResultItem;

mod search_input;
pub use search_input::SearchInput;

mod skeleton_card;
pub use skeleton_card::SkeletonCard;
