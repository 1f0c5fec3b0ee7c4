pub mod admin;
pub mod auth;
pub mod bootstrap;
pub mod category;
pub mod comment;
pub mod matches;
pub mod news;
pub mod poll;
pub mod user;

pub use admin::AdminService;
pub use auth::AuthService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use matches::MatchService;
pub use news::NewsService;
pub use poll::PollService;
pub use user::UserService;
