/// Incorrect guesses allowed before a round is lost, unless configured otherwise.
pub const DEFAULT_MAX_INCORRECT: u32 = 6;

/// Placeholder shown in place of a letter that hasn't been guessed yet.
pub const MASK_CHAR: char = '_';
