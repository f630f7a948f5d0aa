mod login;
mod logout;
mod service;

pub use login::LoginCommand;
pub use service::UserCommandService;
