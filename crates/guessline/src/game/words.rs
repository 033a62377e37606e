//! Built-in word lists, keyed by word length.

use rand::seq::SliceRandom;

/// Five-letter words (easy and medium games).
pub const WORDS_5: &[&str] = &[
    "APPLE", "BEACH", "BRAVE", "BREAD", "BRICK", "BROWN", "CANDY", "CHAIR", "CHESS", "CLOUD",
    "CRANE", "DANCE", "DREAM", "DRINK", "EARTH", "FLAME", "FLOOR", "FRESH", "FRUIT", "GHOST",
    "GLASS", "GRAPE", "GREEN", "HEART", "HONEY", "HOUSE", "LEMON", "LIGHT", "LUCKY", "MANGO",
    "MONEY", "MUSIC", "NIGHT", "OCEAN", "PAINT", "PAPER", "PEACH", "PEARL", "PIANO", "PLANT",
    "POINT", "POWER", "QUEEN", "QUIET", "RADIO", "RIVER", "ROBIN", "ROUND", "ROYAL", "SALAD",
    "SHARP", "SHEEP", "SHINE", "SHORE", "SMILE", "SNAKE", "SOUND", "SPACE", "SPARK", "SPICE",
    "STEAM", "STONE", "STORM", "SUGAR", "SWEET", "TABLE", "TIGER", "TOAST", "TRAIN", "TRUST",
    "VIVID", "WATER", "WHALE", "WHEAT", "WHITE", "WORLD", "YOUTH", "ZEBRA",
];

/// Six-letter words (hard games).
pub const WORDS_6: &[&str] = &[
    "BANANA", "BASKET", "BORDER", "BOTTLE", "BRIDGE", "BUTTER", "CAMERA", "CANDLE", "CARPET",
    "CASTLE", "CHEESE", "CHERRY", "CIRCLE", "COFFEE", "COPPER", "COTTON", "DRAGON", "FLOWER",
    "FOREST", "FRIEND", "GARDEN", "GUITAR", "HAMMER", "ISLAND", "JUNGLE", "LADDER", "LETTER",
    "MARBLE", "MEADOW", "MIRROR", "MONKEY", "ORANGE", "PENCIL", "PEPPER", "PLANET", "POCKET",
    "PURPLE", "RABBIT", "ROCKET", "SILVER", "SPRING", "STREAM", "SUMMER", "TEMPLE", "THREAD",
    "TURTLE", "VALLEY", "VELVET", "WINDOW", "WINTER",
];

/// Nine-letter words (hackerman games).
pub const WORDS_9: &[&str] = &[
    "ADVENTURE", "AFTERNOON", "BLUEPRINT", "BREAKFAST", "BUTTERFLY", "CELEBRATE", "CHOCOLATE",
    "CLASSROOM", "COMMUNITY", "CROCODILE", "DANDELION", "DIFFERENT", "DISCOVERY", "EDUCATION",
    "FIREWORKS", "FRAMEWORK", "HURRICANE", "IMPORTANT", "KNOWLEDGE", "LIGHTNING", "NECESSARY",
    "ORCHESTRA", "PINEAPPLE", "RASPBERRY", "SIGNATURE", "SUBMARINE", "TELEPHONE", "WATERFALL",
    "WONDERFUL", "YESTERDAY",
];

/// The list for words of `len` letters, if one is built in.
pub fn words_of_len(len: usize) -> Option<&'static [&'static str]> {
    match len {
        5 => Some(WORDS_5),
        6 => Some(WORDS_6),
        9 => Some(WORDS_9),
        _ => None,
    }
}

/// Pick a random word of `len` letters from the built-in lists.
pub fn random_word(len: usize) -> Option<&'static str> {
    words_of_len(len)?.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_have_uniform_lengths() {
        for (list, len) in [(WORDS_5, 5), (WORDS_6, 6), (WORDS_9, 9)] {
            for word in list {
                assert_eq!(word.len(), len, "{word} is not {len} letters");
            }
        }
    }

    #[test]
    fn lists_are_uppercase_ascii() {
        for list in [WORDS_5, WORDS_6, WORDS_9] {
            for word in list {
                assert!(
                    word.chars().all(|c| c.is_ascii_uppercase()),
                    "{word} is not uppercase A-Z"
                );
            }
        }
    }

    #[test]
    fn random_word_has_requested_length() {
        for len in [5usize, 6, 9] {
            let word = random_word(len).unwrap();
            assert_eq!(word.len(), len);
        }
    }

    #[test]
    fn unsupported_length_yields_nothing() {
        assert!(words_of_len(7).is_none());
        assert!(random_word(7).is_none());
    }
}
