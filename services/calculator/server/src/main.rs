#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

use std::error::Error;
use std::sync::Arc;

use log::info;

use engine::Calculator;

mod api;
mod config;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let figment = config::figment();
    let config: config::Config = figment.extract()?;
    info!(
        "Rounding answers to {} significant digits",
        config.engine.significant_digits
    );

    let calculator = Arc::new(Calculator::new(config.engine));

    rocket::custom(figment)
        .manage(calculator)
        .mount("/", api::routes())
        .launch()
        .await?;

    Ok(())
}
