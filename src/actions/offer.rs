use crate::library::LocalAlbum;
use crate::matching::MatchOutcome;

/// MusicBrainz id of the "Album" release-group primary type.
pub const ALBUM_PRIMARY_TYPE_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideAction {
    /// Open the release-group creation form, seeded with the guessed names.
    CreateReleaseGroup {
        artist_id: Option<String>,
        artist_name: Option<String>,
        name: String,
        primary_type_id: u32,
    },
    /// Open the release editor for a new release in an existing group.
    AddRelease { release_group_id: String },
    /// Open the edit page of an existing release.
    EditRelease { release_id: String },
}

impl SideAction {
    pub fn describe(&self) -> String {
        match self {
            SideAction::CreateReleaseGroup { name, .. } => {
                format!("Create a release group named '{name}'")
            }
            SideAction::AddRelease { release_group_id } => {
                format!("Add a new release to release group {release_group_id}")
            }
            SideAction::EditRelease { release_id } => format!("Edit release {release_id}"),
        }
    }

    /// Editor page on `site` (e.g. `https://musicbrainz.org`).
    pub fn url(&self, site: &str) -> String {
        let site = site.trim_end_matches('/');
        match self {
            SideAction::CreateReleaseGroup {
                artist_id,
                artist_name,
                name,
                primary_type_id,
            } => {
                let mut url = format!(
                    "{site}/release-group/create?edit-release-group.name={}&edit-release-group.primary_type_id={primary_type_id}",
                    urlencoding::encode(name)
                );
                if let Some(artist) = artist_name {
                    url.push_str("&edit-release-group.artist_credit.names.0.name=");
                    url.push_str(&urlencoding::encode(artist));
                }
                if let Some(id) = artist_id {
                    url.push_str("&edit-release-group.artist_credit.names.0.mbid=");
                    url.push_str(&urlencoding::encode(id));
                }
                url
            }
            SideAction::AddRelease { release_group_id } => format!(
                "{site}/release/add?release_group={}",
                urlencoding::encode(release_group_id)
            ),
            SideAction::EditRelease { release_id } => {
                format!("{site}/release/{}/edit", urlencoding::encode(release_id))
            }
        }
    }
}

/// Which editor pages are worth suggesting after a matching pass.
///
/// - no match: create a release group for the guessed album, credited to
///   `artist_id` when the guessed artist was found
/// - more local tracks than the release: edit it, or add a sibling release
/// - fewer local tracks: add a sibling release to the group
pub fn offered_actions(
    local: &LocalAlbum,
    outcome: &MatchOutcome,
    artist_id: Option<String>,
) -> Vec<SideAction> {
    let Some(release) = &outcome.release else {
        return vec![SideAction::CreateReleaseGroup {
            artist_id,
            artist_name: local.guessed_artist.clone(),
            name: local.guessed_album.clone(),
            primary_type_id: ALBUM_PRIMARY_TYPE_ID,
        }];
    };

    let group_id = outcome
        .release_group
        .as_ref()
        .or(release.release_group.as_ref())
        .map(|g| g.id.clone());
    let local_count = local.tracks.len();
    let remote_count = release.total_track_count();

    let mut actions = Vec::new();
    if local_count > remote_count {
        actions.push(SideAction::EditRelease {
            release_id: release.id.clone(),
        });
    }
    if local_count != remote_count {
        if let Some(release_group_id) = group_id {
            actions.push(SideAction::AddRelease { release_group_id });
        }
    }
    actions
}
