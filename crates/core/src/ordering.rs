//! Ordering rules for songs inside a playlist.
//!
//! Positions are plain integers scoped to one playlist. They are not
//! required to be contiguous or unique: removing a song leaves a gap and
//! reordering never renumbers the other entries.

use crate::error::CoreError;

/// Position assigned to the first song of an empty playlist.
pub const FIRST_POSITION: i64 = 1;

/// Position to use when a song is appended without an explicit position.
///
/// `current_max` is `MAX(position)` over the playlist's existing links, or
/// `None` when the playlist is empty. Fails with [`CoreError::Conflict`] when
/// the last song already sits at `i64::MAX`.
pub fn next_position(current_max: Option<i64>) -> Result<i64, CoreError> {
    match current_max {
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| CoreError::conflict(POSITION_EXHAUSTED)),
        None => Ok(FIRST_POSITION),
    }
}

/// Message returned when no position is left after the playlist's last song.
pub const POSITION_EXHAUSTED: &str = "No position left after the last song in the playlist";

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_playlist_starts_at_one() {
        assert_eq!(next_position(None).unwrap(), 1);
    }

    #[test]
    fn appends_after_current_max() {
        assert_eq!(next_position(Some(4)).unwrap(), 5);
    }

    #[test]
    fn gaps_are_not_filled() {
        // Positions 1 and 7 exist; the next song goes after 7.
        assert_eq!(next_position(Some(7)).unwrap(), 8);
    }

    #[test]
    fn max_position_cannot_be_followed() {
        assert_matches!(
            next_position(Some(i64::MAX)),
            Err(CoreError::Conflict(msg)) if msg == POSITION_EXHAUSTED
        );
    }
}
