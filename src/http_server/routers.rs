mod app;
mod contracts;

pub use self::app::AppRouter;

use self::contracts::ContractsRouter;
use actix_web::web::ServiceConfig;

pub trait Router {
    fn register_routes(&self, service_config: &mut ServiceConfig);
}

pub fn configure_router(router: &impl Router) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |service_config| router.register_routes(service_config)
}
