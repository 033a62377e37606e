//! Game rules: difficulty presets, the per-game state, and guess handling.

pub mod score;
pub mod words;

use guessline_widgets::board::LetterScore;

pub use score::score_guess;

/// Difficulty presets, each a (tries, letters) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// 7 tries, 5 letters.
    Easy,
    /// 6 tries, 5 letters.
    Medium,
    /// 5 tries, 6 letters.
    Hard,
    /// 1 try, 9 letters.
    Hackerman,
}

impl Difficulty {
    /// All presets, in menu order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Hackerman,
    ];

    /// Parse a difficulty name leniently: unknown names fall back to easy.
    pub fn from_name(name: &str) -> Difficulty {
        match name.to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "hackerman" => Difficulty::Hackerman,
            _ => Difficulty::Easy,
        }
    }

    /// Lowercase display name.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Hackerman => "hackerman",
        }
    }

    /// The (tries, letters) configuration of this preset.
    pub fn config(self) -> GameConfig {
        let (tries, word_len) = match self {
            Difficulty::Easy => (7, 5),
            Difficulty::Medium => (6, 5),
            Difficulty::Hard => (5, 6),
            Difficulty::Hackerman => (1, 9),
        };
        GameConfig { tries, word_len }
    }
}

/// How many attempts a game allows and how long its word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of attempts before the game is lost.
    pub tries: usize,
    /// Letters per word.
    pub word_len: usize,
}

/// Errors from setting up a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No built-in word list covers the requested length.
    #[error("no built-in words of length {0} (available: 5, 6, 9)")]
    NoWords(usize),
}

/// Whether a game is still accepting guesses, or how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting guesses.
    Running,
    /// The word was guessed.
    Won,
    /// All tries were used without guessing the word.
    Lost,
}

/// One completed, scored guess.
#[derive(Debug, Clone)]
pub struct Attempt {
    /// The guessed word, uppercase.
    pub word: String,
    /// One score per letter.
    pub scores: Vec<LetterScore>,
}

/// What [`Game::apply_guess`] did with a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Malformed, wrong length, or the game already ended; nothing recorded.
    Rejected,
    /// Recorded; the game continues.
    Accepted,
    /// Recorded; the guess matched the word.
    Won,
    /// Recorded; that was the last try.
    Lost,
}

/// The state of one game: the secret word, the try budget, and the scored
/// attempts so far.
#[derive(Debug)]
pub struct Game {
    word: String,
    tries: usize,
    attempts: Vec<Attempt>,
    status: Status,
}

impl Game {
    /// Start a game with a random word matching `config`.
    pub fn new(config: GameConfig) -> Result<Game, GameError> {
        let word =
            words::random_word(config.word_len).ok_or(GameError::NoWords(config.word_len))?;
        Ok(Game::with_word(word, config.tries))
    }

    /// Start a game with a known word (deterministic; used by tests).
    pub fn with_word(word: impl Into<String>, tries: usize) -> Game {
        Game {
            word: word.into(),
            tries: tries.max(1),
            attempts: Vec::new(),
            status: Status::Running,
        }
    }

    /// The secret word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Letters per guess.
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Total number of attempts allowed.
    pub fn tries(&self) -> usize {
        self.tries
    }

    /// The scored attempts so far, oldest first.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Whether the game is still accepting guesses, or how it ended.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Score and record a guess.
    ///
    /// A guess is rejected -- silently, nothing is recorded -- unless the
    /// game is running and the guess is uppercase A-Z of exactly the word's
    /// length.  An exact match wins; using up the last try without one loses.
    pub fn apply_guess(&mut self, guess: &str) -> GuessOutcome {
        if self.status != Status::Running {
            return GuessOutcome::Rejected;
        }
        let valid = guess.chars().count() == self.word_len()
            && !guess.is_empty()
            && guess.chars().all(|c| c.is_ascii_uppercase());
        if !valid {
            return GuessOutcome::Rejected;
        }

        let scores = score_guess(&self.word, guess);
        self.attempts.push(Attempt {
            word: guess.to_string(),
            scores,
        });

        if guess == self.word {
            self.status = Status::Won;
            GuessOutcome::Won
        } else if self.attempts.len() == self.tries {
            self.status = Status::Lost;
            GuessOutcome::Lost
        } else {
            GuessOutcome::Accepted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_presets() {
        assert_eq!(
            Difficulty::Easy.config(),
            GameConfig {
                tries: 7,
                word_len: 5
            }
        );
        assert_eq!(
            Difficulty::Medium.config(),
            GameConfig {
                tries: 6,
                word_len: 5
            }
        );
        assert_eq!(
            Difficulty::Hard.config(),
            GameConfig {
                tries: 5,
                word_len: 6
            }
        );
        assert_eq!(
            Difficulty::Hackerman.config(),
            GameConfig {
                tries: 1,
                word_len: 9
            }
        );
    }

    #[test]
    fn unknown_difficulty_name_falls_back_to_easy() {
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
    }

    #[test]
    fn new_game_picks_word_of_configured_length() {
        let game = Game::new(Difficulty::Hard.config()).unwrap();
        assert_eq!(game.word_len(), 6);
        assert_eq!(game.tries(), 5);
        assert_eq!(game.status(), Status::Running);
    }

    #[test]
    fn unsupported_word_length_is_an_error() {
        let err = Game::new(GameConfig {
            tries: 3,
            word_len: 7,
        })
        .unwrap_err();
        assert!(matches!(err, GameError::NoWords(7)));
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let mut game = Game::with_word("CRANE", 3);
        assert_eq!(game.apply_guess("CRANE"), GuessOutcome::Won);
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn last_try_without_match_loses() {
        let mut game = Game::with_word("CRANE", 2);
        assert_eq!(game.apply_guess("PLANT"), GuessOutcome::Accepted);
        assert_eq!(game.apply_guess("SPICE"), GuessOutcome::Lost);
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn malformed_guesses_are_rejected_silently() {
        let mut game = Game::with_word("CRANE", 3);
        assert_eq!(game.apply_guess("HI"), GuessOutcome::Rejected);
        assert_eq!(game.apply_guess("TOOLONGER"), GuessOutcome::Rejected);
        assert_eq!(game.apply_guess("crane"), GuessOutcome::Rejected);
        assert_eq!(game.apply_guess("CR4NE"), GuessOutcome::Rejected);
        assert!(game.attempts().is_empty());
        assert_eq!(game.status(), Status::Running);
    }

    #[test]
    fn guesses_after_the_end_are_rejected() {
        let mut game = Game::with_word("CRANE", 3);
        game.apply_guess("CRANE");
        assert_eq!(game.apply_guess("PLANT"), GuessOutcome::Rejected);
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn attempts_carry_scores() {
        let mut game = Game::with_word("CRANE", 3);
        game.apply_guess("CARTS");
        let attempt = &game.attempts()[0];
        assert_eq!(attempt.word, "CARTS");
        assert_eq!(attempt.scores.len(), 5);
    }

    #[test]
    fn zero_tries_is_clamped_to_one() {
        let game = Game::with_word("CRANE", 0);
        assert_eq!(game.tries(), 1);
    }
}
