pub mod admin;
pub mod auth;
pub mod category;
pub mod comment;
pub mod matches;
pub mod news;
pub mod poll;
pub mod user;

pub use admin::{Admin, AdminForm};
pub use auth::{Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use category::{Category, CategoryForm};
pub use comment::{Comment, CommentForm};
pub use matches::{FeaturedMatch, MatchForm, TeamSide};
pub use news::{News, NewsForm, NewsUpdateForm};
pub use poll::{Poll, PollForm, VoteForm};
pub use user::{User, UserResponse};
