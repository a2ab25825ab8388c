//! Demo catalogue used to seed the music table.

use super::Music;

const HOODOO_GURUS: &str = "Hoodoo Gurus";
const MAN_OR_ASTROMAN: &str = "Man or Astroman";

/// Builds the demo catalogue.
///
/// Every song title is suffixed with the batch number so repeated batches
/// never collide on the sort key. Only a single batch (`0`) is produced.
///
/// # Example
///
/// ```
/// use dynamolab_core::music::demo_catalogue;
///
/// let songs = demo_catalogue();
/// assert_eq!(songs.len(), 10);
/// assert_eq!(songs[0].song, "1000 Miles Away0");
/// ```
pub fn demo_catalogue() -> Vec<Music> {
    let hoodoo_gurus = [
        "1000 Miles Away",
        "Come anytime",
        "Night Must Fall",
        "Out That Door",
    ];
    let man_or_astroman = [
        "9 Volt",
        "A Simple Text File",
        "Configuration 9",
        "Defcon 5",
        "Electrostatic Brainfield",
        "Um Espectro sem Escala",
    ];

    let batch = 0;
    hoodoo_gurus
        .iter()
        .map(|song| Music::new(HOODOO_GURUS, format!("{song}{batch}")))
        .chain(
            man_or_astroman
                .iter()
                .map(|song| Music::new(MAN_OR_ASTROMAN, format!("{song}{batch}"))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_artist_distribution() {
        let songs = demo_catalogue();

        let hoodoo = songs.iter().filter(|m| m.artist == HOODOO_GURUS).count();
        let astroman = songs.iter().filter(|m| m.artist == MAN_OR_ASTROMAN).count();

        assert_eq!(hoodoo, 4);
        assert_eq!(astroman, 6);
    }

    #[test]
    fn test_catalogue_keys_are_unique() {
        let songs = demo_catalogue();
        let keys: HashSet<String> = songs.iter().map(Music::key).collect();
        assert_eq!(keys.len(), songs.len());
    }
}
