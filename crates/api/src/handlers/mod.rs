pub mod albums;
pub mod artists;
pub mod fallback;
pub mod health;
pub mod lookup;
pub mod playlists;
pub mod songs;
pub mod users;
