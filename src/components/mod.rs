pub mod common;
pub mod dashboard;
pub mod invite;
pub mod login;
pub mod settings;

pub use dashboard::DashboardPage;
pub use invite::AcceptInvitePage;
pub use login::LoginPage;
pub use settings::SettingsPage;
