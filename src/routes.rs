use crate::{
    api::{employee, log},
    auth::middleware::auth_middleware,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Every route requires a bearer token from the external auth service
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .wrap(protected_limiter)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/active
                    .service(
                        web::resource("/active")
                            .route(web::get().to(employee::list_active_employees)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{id}/toggle-status
                    .service(
                        web::resource("/{id}/toggle-status")
                            .route(web::patch().to(employee::toggle_employee_status)),
                    ),
            )
            .service(
                web::scope("/logs")
                    // /logs
                    .service(
                        web::resource("")
                            .route(web::get().to(log::list_logs))
                            .route(web::post().to(log::create_log)),
                    )
                    // /logs/team-leader (before /{id} so the literal wins)
                    .service(
                        web::resource("/team-leader").route(web::get().to(log::my_logs)),
                    )
                    // /logs/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(log::get_log))
                            .route(web::put().to(log::update_log))
                            .route(web::delete().to(log::delete_log)),
                    )
                    // /logs/{id}/submit
                    .service(
                        web::resource("/{id}/submit").route(web::patch().to(log::submit_log)),
                    )
                    // /logs/{id}/approve
                    .service(
                        web::resource("/{id}/approve").route(web::patch().to(log::approve_log)),
                    )
                    // /logs/{id}/export
                    .service(
                        web::resource("/{id}/export").route(web::get().to(log::export_log)),
                    ),
            ),
    );
}
