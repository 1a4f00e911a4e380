//! Word derivation validation.
//!
//! A candidate is checked against a root word and the session history by a
//! fixed, short-circuiting pipeline:
//!
//! 1. **Presence**: blank input is rejected silently
//! 2. **Originality**: words already accepted are rejected (`AlreadyUsed`)
//! 3. **Identity**: the root itself is not a derivation (`NotDerived`)
//! 4. **Letters**: every letter must come from an unused letter of the root (`NotDerived`)
//! 5. **Dictionary**: the spell checker must know the word (`NotAWord`)
//!
//! The pipeline never mutates anything; the caller owns the history.

mod checks;
mod oracle;
mod util;
mod validator;

pub use checks::letters::can_spell;
pub use oracle::{SpellChecker, WordListDictionary};
pub use util::CaseInsensitiveSet;
pub use validator::{Validator, validate};
