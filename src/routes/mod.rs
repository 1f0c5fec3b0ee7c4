pub mod admins;
pub mod auth;
pub mod categories;
pub mod matches;
pub mod news;
pub mod polls;
pub mod uploads;
pub mod users;

use actix_web::web;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/news").configure(news::create_routes))
        .service(web::scope("/admins").configure(admins::create_routes))
        .service(web::scope("/auth").configure(auth::create_routes))
        .service(web::scope("/polls").configure(polls::create_routes))
        .service(web::scope("/user").configure(users::create_routes))
        .service(web::scope("/categories").configure(categories::create_routes))
        .service(web::scope("/featured-match").configure(matches::create_routes))
        // GET /matches mirrors GET /featured-match
        .route("/matches", web::get().to(matches::list_matches))
        .service(web::scope("/upload").configure(uploads::create_routes));
}
