pub mod create;
pub mod detail;
pub mod edit;
pub mod home;
pub mod listing;
pub mod login;
pub mod redirecting;
pub mod register;

pub use create::create_page;
pub use detail::detail_page;
pub use edit::edit_page;
pub use home::{home_page, HomeVm};
pub use listing::{listing_content, listing_page, listing_shell};
pub use login::login_page;
pub use redirecting::redirecting_page;
pub use register::{register_page, RegisterVm};
