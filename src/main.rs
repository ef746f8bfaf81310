mod api;
mod auth;
mod card;
mod config;
mod database;
mod error;
mod expansions;
mod images;
mod keywords;
mod logging;
mod names;
mod rarity;
mod similarity;

use api::PokemonTcgClient;
use config::Config;
use database::CardDatabase;
use error::Result;
use images::ImageStore;
use tracing::{info, warn};

fn main() -> Result<()> {
    logging::init_logging();
    let config = Config::load()?;
    let client = PokemonTcgClient::new(&config.api_key)?;

    let query = api::card_query(config.query_filter.as_deref());
    info!("Fetching cards matching: {}", query);
    let cards = client.fetch_all_cards(&query)?;

    let database = CardDatabase::from_api_cards(cards);
    if database.is_empty() {
        warn!("Provider returned no cards; leaving the existing database untouched");
        return Ok(());
    }
    info!(
        "{} distinct base names across {} cards",
        database.ids_by_base_name().len(),
        database.len()
    );

    ImageStore::from_config(&config).sync_all(&client, &database)?;

    let database_path = config.database_path();
    if database_path.is_file() {
        match CardDatabase::load_from_json(&database_path) {
            Ok(previous) => info!(
                "{} cards are new since the last run",
                database.new_card_ids(&previous).len()
            ),
            Err(e) => warn!("Could not read previous database: {}", e),
        }
    }
    database.save_to_json(&database_path)?;

    info!("Done!");
    Ok(())
}
