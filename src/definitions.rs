/// Number of operator/number pairs of an expression that are kept on the stack
/// before spilling to the heap. Spoken expressions rarely have more.
pub const N_PAIRS_ON_STACK: usize = 16;

/// Words of a spelled-out number phrase kept on the stack, e.g., the six words of
/// "two thousand three hundred forty five".
pub const N_NUMBER_WORDS_ON_STACK: usize = 8;
