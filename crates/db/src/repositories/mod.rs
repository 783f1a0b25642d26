//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Detail lookups assemble an
//! entity with its related collections through independent reads.

pub mod album_artist_repo;
pub mod album_repo;
pub mod artist_repo;
pub mod playlist_repo;
pub mod playlist_song_repo;
pub mod song_artist_repo;
pub mod song_repo;
pub mod user_repo;

pub use album_artist_repo::AlbumArtistRepo;
pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use playlist_repo::PlaylistRepo;
pub use playlist_song_repo::PlaylistSongRepo;
pub use song_artist_repo::SongArtistRepo;
pub use song_repo::SongRepo;
pub use user_repo::UserRepo;
