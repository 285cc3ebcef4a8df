pub mod authentication_guard;
pub mod errors;
pub mod routes;

use std::sync::Arc;

use log::info;
use rocket::figment::Figment;
use rocket::{Build, Rocket};

use crate::access_token::{AccessTokenDecoder, AccessTokenGenerator};
use crate::config::AppConfig;
use crate::graphql::{build_schema, ApiSchema};
use crate::hasher::{Hasher, ProductionHasher};
use crate::store::Stores;
use errors::ServerSetupError;

/// Build the full server from a merged figment: config extraction,
/// key loading, component assembly, route mounting.
pub fn build_rocket(figment: Figment) -> Result<Rocket<Build>, ServerSetupError> {
    let app_config: AppConfig = figment.extract()?;
    let decoder = AccessTokenDecoder::from_file(&app_config.jwt_key)?;
    let generator = AccessTokenGenerator::from_file(&app_config.jwt_key)?;
    let hasher: Arc<dyn Hasher> = Arc::new(
        ProductionHasher::new(app_config.hasher_config.try_into()?)
    );
    let schema = build_schema(
        Stores::in_memory(),
        hasher,
        Arc::new(generator),
    );
    info!("server components assembled");
    Ok(assemble(rocket::custom(figment), schema, decoder))
}

/// Attach pre-built components to a rocket. Tests assemble onto a
/// default rocket with generated keys instead of going through
/// [build_rocket].
pub fn assemble(
    rocket: Rocket<Build>,
    schema: ApiSchema,
    decoder: AccessTokenDecoder,
) -> Rocket<Build> {
    rocket
        .manage(schema)
        .manage(decoder)
        .mount("/", routes::all_routes())
}
