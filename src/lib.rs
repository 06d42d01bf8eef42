pub mod context;
pub mod engine;
pub mod example;
pub mod lang;
pub mod path;
pub mod process;
pub mod route;
pub mod spell;
pub mod stage;
pub mod testing;
pub mod unicode;
pub mod validate;

pub use context::{Context, DEFAULT_MAX_ITERATIONS};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use lang::data::{DEU, ENG, JPN, NLD, ZHO};
pub use lang::{CompositionRule, Lang, LetterCountMode, Lexicon, LexiconError, all_langs};
pub use path::{Outcome, Path, Step, compute_composed_path, compute_path};
pub use route::{Route, RouteError};
pub use spell::number_to_word;
pub use unicode::count_letters;
pub use validate::{InputError, validate_input};
