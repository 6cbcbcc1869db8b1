pub mod communities_all;
pub mod login;
pub mod not_found;

pub use communities_all::CommunitiesAllPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
