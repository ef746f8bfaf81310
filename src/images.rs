use crate::api::Downloader;
use crate::card::{CardRecord, Supertype};
use crate::config::Config;
use crate::database::CardDatabase;
use crate::error::Result;
use crate::names::sprite_file_name;
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SPRITE_BASE_URL: &str = "https://limitlesstcg.s3.us-east-2.amazonaws.com/pokemon/gen9/";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub downloaded: usize,
    pub cached: usize,
}

impl SyncSummary {
    fn record(&mut self, downloaded: bool) {
        if downloaded {
            self.downloaded += 1;
        } else {
            self.cached += 1;
        }
    }
}

/// Card images and sprites on local disk, mirrored into the client's public dir.
pub struct ImageStore {
    card_images_dir: PathBuf,
    sprites_dir: PathBuf,
    client_card_images_dir: PathBuf,
    client_sprites_dir: PathBuf,
}

impl ImageStore {
    pub fn from_config(config: &Config) -> Self {
        ImageStore {
            card_images_dir: config.card_images_dir(),
            sprites_dir: config.sprites_dir(),
            client_card_images_dir: config.client_card_images_dir(),
            client_sprites_dir: config.client_sprites_dir(),
        }
    }

    pub fn prepare_directories(&self) -> Result<()> {
        for dir in [
            &self.card_images_dir,
            &self.sprites_dir,
            &self.client_card_images_dir,
            &self.client_sprites_dir,
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn sync_card<D: Downloader>(
        &self,
        downloader: &D,
        card: &CardRecord,
        summary: &mut SyncSummary,
    ) -> Result<()> {
        let file_name = format!("{}.png", card.id);
        let downloaded = mirror(
            downloader,
            &card.small_image_url,
            &self.card_images_dir.join(&file_name),
            &self.client_card_images_dir.join(&file_name),
        )?;
        summary.record(downloaded);

        if card.supertype == Supertype::Pokemon {
            let sprite = sprite_file_name(&card.name_without_prefix_and_postfix);
            let downloaded = mirror(
                downloader,
                &format!("{}{}", SPRITE_BASE_URL, sprite),
                &self.sprites_dir.join(&sprite),
                &self.client_sprites_dir.join(&sprite),
            )?;
            summary.record(downloaded);
        }
        Ok(())
    }

    pub fn sync_all<D: Downloader>(
        &self,
        downloader: &D,
        database: &CardDatabase,
    ) -> Result<SyncSummary> {
        info!("Downloading image data");
        self.prepare_directories()?;

        let mut summary = SyncSummary::default();
        let bar = ProgressBar::new(database.len() as u64);
        for card in database.cards() {
            self.sync_card(downloader, card, &mut summary)?;
            bar.inc(1);
        }
        bar.finish();

        info!(
            "Images ready: {} downloaded, {} already cached",
            summary.downloaded, summary.cached
        );
        Ok(summary)
    }
}

/// Downloads `url` to `local` unless it already exists, then copies it to
/// `client`. Returns whether a download happened.
fn mirror<D: Downloader>(downloader: &D, url: &str, local: &Path, client: &Path) -> Result<bool> {
    let downloaded = if local.is_file() {
        debug!("{} already exists; skipping download", local.display());
        false
    } else {
        debug!("Downloading {} to {}", url, local.display());
        let bytes = downloader.download(url)?;
        fs::write(local, bytes)?;
        true
    };
    fs::copy(local, client)?;
    Ok(downloaded)
}
