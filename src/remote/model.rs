use serde::Deserialize;

/// Placeholder shown when a release carries no artist credit at all.
pub const UNKNOWN_ARTIST: &str = "(Unknown Artist)";

/// One entry of an artist credit.
///
/// The web service mixes bare strings with credit objects that wrap an
/// `artist` record; both collapse to a displayable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistCredit {
    Name(String),
    CreditedArtist { name: String },
}

impl ArtistCredit {
    pub fn name(&self) -> &str {
        match self {
            ArtistCredit::Name(name) => name,
            ArtistCredit::CreditedArtist { name } => name,
        }
    }
}

/// Join every credited name with `" & "`, or the unknown-artist placeholder.
pub fn flatten_artist_credits(credits: &[ArtistCredit]) -> String {
    if credits.is_empty() {
        return UNKNOWN_ARTIST.to_string();
    }
    credits
        .iter()
        .map(ArtistCredit::name)
        .collect::<Vec<_>>()
        .join(" & ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReleaseGroup {
    pub id: String,
    pub title: String,
    pub primary_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTrack {
    /// The medium-local track number as printed (`"3"`, `"A1"`).
    pub position: Option<String>,
    pub recording_title: String,
    pub recording_id: Option<String>,
    pub artist_credit_phrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Medium {
    pub tracks: Vec<RemoteTrack>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRelation {
    pub relation_type: String,
    pub target: String,
}

/// A fully fetched release with nested track lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRelease {
    pub id: String,
    pub title: String,
    pub artist_credits: Vec<ArtistCredit>,
    pub release_group: Option<RemoteReleaseGroup>,
    pub media: Vec<Medium>,
    pub url_relations: Vec<UrlRelation>,
}

impl RemoteRelease {
    /// Sum of the track counts of every medium.
    pub fn total_track_count(&self) -> usize {
        self.media.iter().map(|m| m.tracks.len()).sum()
    }

    pub fn artist_display(&self) -> String {
        flatten_artist_credits(&self.artist_credits)
    }

    /// Tracks of all media, in medium order then track order.
    pub fn flattened_tracks(&self) -> impl Iterator<Item = &RemoteTrack> {
        self.media.iter().flat_map(|m| m.tracks.iter())
    }
}

/// A search hit; only the id is needed to fetch the full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseHit {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// An artist search hit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistHit {
    pub id: String,
    pub name: String,
}

// Wire format of the JSON web service (`fmt=json`).

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub releases: Vec<ReleaseHit>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistSearchResponse {
    #[serde(default)]
    pub artists: Vec<ArtistHit>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireCredit {
    Name(String),
    Credit {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        joinphrase: Option<String>,
        artist: WireArtist,
    },
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireReleaseGroup {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "primary-type", default)]
    primary_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireRecording {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(rename = "artist-credit", default)]
    artist_credit: Vec<WireCredit>,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    position: Option<u32>,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "artist-credit", default)]
    artist_credit: Vec<WireCredit>,
    #[serde(default)]
    recording: Option<WireRecording>,
}

#[derive(Debug, Deserialize)]
struct WireMedium {
    #[serde(default)]
    tracks: Vec<WireTrack>,
}

#[derive(Debug, Deserialize)]
struct WireUrl {
    resource: String,
}

#[derive(Debug, Deserialize)]
struct WireRelation {
    #[serde(rename = "type", default)]
    relation_type: Option<String>,
    #[serde(default)]
    url: Option<WireUrl>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireRelease {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "artist-credit", default)]
    artist_credit: Vec<WireCredit>,
    #[serde(rename = "release-group", default)]
    release_group: Option<WireReleaseGroup>,
    #[serde(default)]
    media: Vec<WireMedium>,
    #[serde(default)]
    relations: Vec<WireRelation>,
}

impl From<&WireCredit> for ArtistCredit {
    fn from(credit: &WireCredit) -> Self {
        match credit {
            WireCredit::Name(name) => ArtistCredit::Name(name.clone()),
            WireCredit::Credit { artist, .. } => ArtistCredit::CreditedArtist {
                name: artist.name.clone(),
            },
        }
    }
}

/// Credited names glued with their join phrases, e.g. `"A feat. B"`.
fn credit_phrase(credits: &[WireCredit]) -> Option<String> {
    let phrase: String = credits
        .iter()
        .map(|c| match c {
            WireCredit::Name(name) => name.clone(),
            WireCredit::Credit {
                name,
                joinphrase,
                artist,
            } => format!(
                "{}{}",
                name.as_deref().unwrap_or(&artist.name),
                joinphrase.as_deref().unwrap_or("")
            ),
        })
        .collect();
    let phrase = phrase.trim();
    (!phrase.is_empty()).then(|| phrase.to_string())
}

impl From<WireTrack> for RemoteTrack {
    fn from(track: WireTrack) -> Self {
        let position = track
            .number
            .filter(|n| !n.trim().is_empty())
            .or_else(|| track.position.map(|p| p.to_string()));
        let (recording_id, recording_title, recording_phrase) = match track.recording {
            Some(rec) => (rec.id, rec.title, credit_phrase(&rec.artist_credit)),
            None => (None, String::new(), None),
        };
        let recording_title = if recording_title.is_empty() {
            track.title.unwrap_or_default()
        } else {
            recording_title
        };

        RemoteTrack {
            position,
            recording_title,
            recording_id,
            artist_credit_phrase: recording_phrase.or_else(|| credit_phrase(&track.artist_credit)),
        }
    }
}

impl From<WireRelease> for RemoteRelease {
    fn from(release: WireRelease) -> Self {
        RemoteRelease {
            id: release.id,
            title: release.title,
            artist_credits: release.artist_credit.iter().map(ArtistCredit::from).collect(),
            release_group: release.release_group.map(|g| RemoteReleaseGroup {
                id: g.id,
                title: g.title,
                primary_type: g.primary_type,
            }),
            media: release
                .media
                .into_iter()
                .map(|m| Medium {
                    tracks: m.tracks.into_iter().map(RemoteTrack::from).collect(),
                })
                .collect(),
            url_relations: release
                .relations
                .into_iter()
                .filter_map(|r| {
                    let url = r.url?;
                    Some(UrlRelation {
                        relation_type: r.relation_type.unwrap_or_default(),
                        target: url.resource,
                    })
                })
                .collect(),
        }
    }
}
