pub(crate) mod community_card;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod load_more;
pub(crate) mod loading;
pub(crate) mod login_form;
pub(crate) mod logo;

// Re-export components for convenience
pub use community_card::CommunityCard;
pub use load_more::LoadMore;
pub use loading::Loading;
pub use login_form::LoginForm;
pub use logo::Logo;
