//! Sample catalog used by the `playlist-seed` binary and by tests that want
//! a populated database.

use playlist_core::types::DbId;

use crate::models::album::CreateAlbum;
use crate::models::artist::CreateArtist;
use crate::models::playlist::CreatePlaylist;
use crate::models::song::CreateSong;
use crate::models::user::CreateUser;
use crate::repositories::{
    AlbumArtistRepo, AlbumRepo, ArtistRepo, PlaylistRepo, PlaylistSongRepo, SongArtistRepo,
    SongRepo, UserRepo,
};
use crate::DbPool;

const USERS: &[(&str, &str)] = &[
    ("Alice Johnson", "alice@example.com"),
    ("Bob Smith", "bob@example.com"),
    ("Charlie Davis", "charlie@example.com"),
];

const ARTISTS: &[(&str, &str, &str)] = &[
    ("The Midnight", "Synthwave duo from Los Angeles", "https://example.com/midnight.jpg"),
    ("Daft Punk", "French electronic music duo", "https://example.com/daftpunk.jpg"),
    ("deadmau5", "Canadian electronic music producer", "https://example.com/deadmau5.jpg"),
    ("Porter Robinson", "American DJ and producer", "https://example.com/porter.jpg"),
    ("ODESZA", "American electronic music duo", "https://example.com/odesza.jpg"),
];

/// Albums, each credited to the artist at the same index in [`ARTISTS`].
const ALBUMS: &[(&str, i64, &str)] = &[
    ("Endless Summer", 2016, "https://example.com/endless-summer.jpg"),
    ("Random Access Memories", 2013, "https://example.com/ram.jpg"),
    ("For Lack of a Better Name", 2009, "https://example.com/floan.jpg"),
    ("Nurture", 2021, "https://example.com/nurture.jpg"),
    ("A Moment Apart", 2017, "https://example.com/moment-apart.jpg"),
];

/// `(title, duration, file slug, album index)`. Songs are credited to the
/// album's artist.
const SONGS: &[(&str, i64, &str, usize)] = &[
    ("Sunset", 254, "sunset", 0),
    ("Synthetic", 271, "synthetic", 0),
    ("Endless Summer", 313, "endless-summer", 0),
    ("Get Lucky", 369, "get-lucky", 1),
    ("Instant Crush", 337, "instant-crush", 1),
    ("Lose Yourself to Dance", 353, "lose-yourself", 1),
    ("Ghosts n Stuff", 305, "ghosts", 2),
    ("Strobe", 635, "strobe", 2),
    ("Get Your Wish", 224, "get-your-wish", 3),
    ("Something Comforting", 273, "something-comforting", 3),
    ("Mirror", 226, "mirror", 3),
    ("Line of Sight", 262, "line-of-sight", 4),
    ("Higher Ground", 254, "higher-ground", 4),
    ("Across The Room", 221, "across-the-room", 4),
];

/// `(name, description, owner index, is_public, [(song index, position)])`.
type PlaylistSeed = (&'static str, &'static str, usize, bool, &'static [(usize, i64)]);

const PLAYLISTS: &[PlaylistSeed] = &[
    (
        "Chill Vibes",
        "Relaxing electronic music for studying",
        0,
        true,
        &[(0, 1), (2, 2), (9, 3), (13, 4)],
    ),
    (
        "Workout Mix",
        "High energy tracks to power through your workout",
        0,
        true,
        &[(3, 1), (5, 2), (6, 3), (12, 4)],
    ),
    (
        "Late Night Drive",
        "Perfect for those midnight cruises",
        1,
        true,
        &[(0, 1), (1, 2), (7, 3), (10, 4), (11, 5)],
    ),
    ("My Private Mix", "Personal favorites", 2, false, &[(8, 1), (4, 2), (7, 3)]),
];

/// Row counts written by [`seed_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub playlists: usize,
    pub playlist_entries: usize,
}

/// Insert the sample catalog into an empty, migrated database.
///
/// Running it twice fails on the unique user emails.
pub async fn seed_catalog(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    let mut user_ids: Vec<DbId> = Vec::with_capacity(USERS.len());
    for (name, email) in USERS {
        let input = CreateUser {
            name: (*name).to_string(),
            email: (*email).to_string(),
        };
        user_ids.push(UserRepo::create(pool, &input).await?.id);
    }
    summary.users = user_ids.len();

    let mut artist_ids: Vec<DbId> = Vec::with_capacity(ARTISTS.len());
    for (name, bio, image_url) in ARTISTS {
        let input = CreateArtist {
            name: (*name).to_string(),
            bio: Some((*bio).to_string()),
            image_url: Some((*image_url).to_string()),
        };
        artist_ids.push(ArtistRepo::create(pool, &input).await?.id);
    }
    summary.artists = artist_ids.len();

    let mut album_ids: Vec<DbId> = Vec::with_capacity(ALBUMS.len());
    for ((title, release_year, cover_art_url), artist_id) in ALBUMS.iter().zip(&artist_ids) {
        let input = CreateAlbum {
            title: (*title).to_string(),
            release_year: Some(*release_year),
            cover_art_url: Some((*cover_art_url).to_string()),
        };
        let album = AlbumRepo::create(pool, &input).await?;
        AlbumArtistRepo::link(pool, album.id, *artist_id).await?;
        album_ids.push(album.id);
    }
    summary.albums = album_ids.len();

    let mut song_ids: Vec<DbId> = Vec::with_capacity(SONGS.len());
    for (title, duration, slug, album_index) in SONGS {
        let artist_id = artist_ids[*album_index];
        let input = CreateSong {
            title: (*title).to_string(),
            duration: *duration,
            file_url: Some(format!("https://example.com/songs/{slug}.mp3")),
            album_id: Some(album_ids[*album_index]),
            artist_ids: vec![artist_id],
        };
        let song = SongRepo::create(pool, &input).await?;
        SongArtistRepo::link(pool, song.id, artist_id).await?;
        song_ids.push(song.id);
    }
    summary.songs = song_ids.len();

    for (name, description, owner, is_public, entries) in PLAYLISTS {
        let input = CreatePlaylist {
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            user_id: user_ids[*owner],
            is_public: *is_public,
        };
        let playlist = PlaylistRepo::create(pool, &input).await?;
        for (song_index, position) in *entries {
            PlaylistSongRepo::add(pool, playlist.id, song_ids[*song_index], *position).await?;
        }
        summary.playlists += 1;
        summary.playlist_entries += entries.len();
    }

    tracing::info!(
        users = summary.users,
        artists = summary.artists,
        albums = summary.albums,
        songs = summary.songs,
        playlists = summary.playlists,
        playlist_entries = summary.playlist_entries,
        "Sample catalog seeded"
    );

    Ok(summary)
}
