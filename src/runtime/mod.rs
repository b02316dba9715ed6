use std::env;
use std::io::{self, IsTerminal};
use std::path::Path;

use log::{info, warn};

use crate::actions::{BrowserLauncher, confirm_and_launch, offered_actions};
use crate::diff::RenderLayout;
use crate::library::{LocalAlbum, album_dir_name, guess_artist_and_album, scan};
use crate::matching::{MatchingContext, TerminalPrompt, select_best_release};
use crate::remote::{MusicBrainzClient, ReleaseSource};
use crate::report::{ReportOptions, build_report};

mod logging;
mod pager;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init_logging(&settings.logging);

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });
    let root = Path::new(&dir);
    if !root.is_dir() {
        return Err(format!("'{dir}' is not a directory").into());
    }

    let dir_name = album_dir_name(&root.canonicalize()?);
    let (guessed_artist, guessed_album) = guess_artist_and_album(&dir_name);
    info!("guessed artist={guessed_artist:?} album={guessed_album:?}");

    let tracks = scan(root, &settings.library);
    if tracks.is_empty() {
        return Err(format!("no audio tracks found in '{dir}'").into());
    }
    let local = LocalAlbum {
        guessed_artist,
        guessed_album,
        tracks,
    };

    let client = MusicBrainzClient::new(&settings.musicbrainz);
    let ctx = MatchingContext {
        artist_query: local.guessed_artist.clone(),
        album_query: local.guessed_album.clone(),
        local_track_count: local.tracks.len(),
        fan_out_limit: settings.musicbrainz.search_limit,
        source: &client,
    };
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout());

    let outcome = select_best_release(&ctx, &mut prompt)?;

    match &outcome.release {
        None => {
            println!(
                "No matching MusicBrainz release found for guessed artist='{}', album='{}'.",
                local.guessed_artist.as_deref().unwrap_or("None"),
                local.guessed_album
            );
        }
        Some(release) => {
            let options = ReportOptions {
                layout: RenderLayout {
                    left_width: settings.report.left_width,
                    separator_width: settings.report.separator_width,
                },
                site_base_url: settings.musicbrainz.site_base_url.clone(),
            };
            let report = build_report(&local, release, &options);

            if settings.ui.pager && io::stdout().is_terminal() {
                let title = format!("{} - {}", release.artist_display(), release.title);
                pager::show(&title, &report)?;
            } else {
                println!("{report}");
            }

            let remote_count = release.total_track_count();
            if local.tracks.len() != remote_count {
                println!(
                    "Local folder has {} track(s); the MusicBrainz release has {remote_count}.",
                    local.tracks.len()
                );
            }
        }
    }

    if settings.ui.offer_actions {
        let artist_id = match (&outcome.release, &local.guessed_artist) {
            (None, Some(artist)) => client.find_artist_id(artist).unwrap_or_else(|e| {
                warn!("artist lookup for '{artist}' failed: {e}");
                None
            }),
            _ => None,
        };
        let actions = offered_actions(&local, &outcome, artist_id);
        if !actions.is_empty() {
            confirm_and_launch(
                &actions,
                &settings.musicbrainz.site_base_url,
                &mut prompt,
                &mut BrowserLauncher,
            )?;
        }
    }

    Ok(())
}
