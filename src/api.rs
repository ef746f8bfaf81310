use crate::auth;
use crate::card::{ApiCard, CardPage};
use crate::error::{FetchError, Result};
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use tracing::info;

pub const CARDS_URL: &str = "https://api.pokemontcg.io/v2/cards";
pub const PAGE_SIZE: u32 = 250;

/// Every standard-legal card, plus basic energy which carries no regulation mark.
pub const STANDARD_QUERY: &str =
    "(regulationMark:f OR regulationMark:g OR regulationMark:h OR name:basic) legalities.standard:legal";

/// Source of raw bytes for a URL. Images go through this so the image store can
/// be driven without a network.
pub trait Downloader {
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}

pub fn card_query(filter: Option<&str>) -> String {
    match filter {
        Some(filter) => format!("{} {}", filter, STANDARD_QUERY),
        None => STANDARD_QUERY.to_string(),
    }
}

pub fn cards_page_url(page: u32, query: &str) -> String {
    format!(
        "{}?page={}&pageSize={}&q={}",
        CARDS_URL,
        page,
        PAGE_SIZE,
        urlencoding::encode(query)
    )
}

pub struct PokemonTcgClient {
    client: Client,
    headers: HeaderMap,
}

impl PokemonTcgClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(PokemonTcgClient {
            client: Client::builder().build()?,
            headers: auth::get_auth_headers(api_key)?,
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self.client.get(url).headers(self.headers.clone()).send()?;
        if !response.status().is_success() {
            return Err(FetchError::Api {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    pub fn fetch_cards_page(&self, page: u32, query: &str) -> Result<CardPage> {
        let body = self.get(&cards_page_url(page, query))?.text()?;
        let page: CardPage = serde_json::from_str(&body)?;
        Ok(page)
    }

    pub fn fetch_all_cards(&self, query: &str) -> Result<Vec<ApiCard>> {
        collect_pages(|page| self.fetch_cards_page(page, query))
    }
}

impl Downloader for PokemonTcgClient {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        Ok(self.get(url)?.bytes()?.to_vec())
    }
}

/// Requests pages from 1 until an empty page comes back.
pub fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<ApiCard>>
where
    F: FnMut(u32) -> Result<CardPage>,
{
    let mut cards = Vec::new();
    let mut page_number = 1;
    loop {
        let page = fetch_page(page_number)?;
        if page.data.is_empty() {
            break;
        }
        cards.extend(page.data);
        info!(
            "Page {}: downloaded info for {} of {} cards",
            page.page,
            cards.len(),
            page.total_count
        );
        page_number += 1;
    }
    info!("Finished downloading info for {} cards", cards.len());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, ids: &[&str]) -> CardPage {
        let data: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"id": "{}", "name": "Pikachu", "supertype": "Pokémon", "number": "1",
                        "set": {{"id": "sv1", "name": "Scarlet & Violet", "printedTotal": 198}},
                        "images": {{"small": "https://images.pokemontcg.io/sv1/1.png"}}}}"#,
                    id
                )
            })
            .collect();
        let json = format!(
            r#"{{"data": [{}], "page": {}, "pageSize": 2, "count": {}, "totalCount": 3}}"#,
            data.join(","),
            number,
            ids.len()
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn pages_are_collected_until_empty() {
        let mut requested = Vec::new();
        let cards = collect_pages(|n| {
            requested.push(n);
            Ok(match n {
                1 => page(1, &["sv1-1", "sv1-2"]),
                2 => page(2, &["sv1-3"]),
                _ => page(n, &[]),
            })
        })
        .unwrap();
        assert_eq!(requested, vec![1, 2, 3]);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["sv1-1", "sv1-2", "sv1-3"]);
    }

    #[test]
    fn page_errors_abort_the_run() {
        let result = collect_pages(|_| Err(FetchError::config("boom")));
        assert!(result.is_err());
    }

    #[test]
    fn query_filter_is_prepended() {
        assert_eq!(card_query(None), STANDARD_QUERY);
        assert_eq!(
            card_query(Some("set.id:swsh9")),
            format!("set.id:swsh9 {}", STANDARD_QUERY)
        );
    }

    #[test]
    fn page_url_encodes_query() {
        let url = cards_page_url(2, "name:basic legalities.standard:legal");
        assert_eq!(
            url,
            "https://api.pokemontcg.io/v2/cards?page=2&pageSize=250&q=name%3Abasic%20legalities.standard%3Alegal"
        );
    }
}
