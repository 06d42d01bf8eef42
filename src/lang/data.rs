use crate::lang::{CompositionRule, Lang, LetterCountMode, Lexicon, NumberWord};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        magic: $magic:literal => $magic_value:literal,
        compose: $compose:ident,
        count: $count:ident,
        numbers: [ $($n:literal => $w:literal),* $(,)? ],
        examples: [ $($ex:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const NUMBERS: &[NumberWord] = &[
                        $(NumberWord { value: $n, word: $w }),*
                    ];

                    pub const EXAMPLES: &[&str] = &[$($ex),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, Lexicon> = phf_map! {
                $(
                    $code_str => Lexicon {
                        code: $code_str,
                        number_words: [<$code:lower _data>]::NUMBERS,
                        magic_word: $magic,
                        magic_value: $magic_value,
                        composition: CompositionRule::$compose,
                        letter_count: LetterCountMode::$count,
                        examples: [<$code:lower _data>]::EXAMPLES,
                    }
                ),*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Every language with a lexicon, in table order.
        #[inline]
        pub fn all_langs() -> &'static [Lang] {
            ALL_LANGS
        }

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.trim().to_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    A magic word must spell its own letter count. Adding a language is
//    adding a row; nothing in the engine branches on the code.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "en", "English",
        magic: "four" => 4,
        compose: Hyphenated,
        count: LatinFiltered,
        numbers: [
            0 => "zero", 1 => "one", 2 => "two", 3 => "three", 4 => "four",
            5 => "five", 6 => "six", 7 => "seven", 8 => "eight", 9 => "nine",
            10 => "ten", 11 => "eleven", 12 => "twelve", 13 => "thirteen",
            14 => "fourteen", 15 => "fifteen", 16 => "sixteen", 17 => "seventeen",
            18 => "eighteen", 19 => "nineteen", 20 => "twenty", 30 => "thirty",
            40 => "forty", 50 => "fifty", 60 => "sixty", 70 => "seventy",
            80 => "eighty", 90 => "ninety", 100 => "hundred",
        ],
        examples: [
            "programming", "mathematics", "software", "computer", "keyboard",
            "language", "universe", "science", "knowledge", "learning",
            "technology", "algorithm", "engineering", "development", "innovation",
            "creativity", "discovery", "experiment", "research", "intelligence",
            "philosophy", "psychology", "communication", "information", "entertainment",
            "education", "experience", "understanding", "imagination", "fascinating",
        ],

    NLD, "nl", "Nederlands",
        magic: "vier" => 4,
        compose: Concatenated,
        count: LatinFiltered,
        numbers: [
            0 => "nul", 1 => "een", 2 => "twee", 3 => "drie", 4 => "vier",
            5 => "vijf", 6 => "zes", 7 => "zeven", 8 => "acht", 9 => "negen",
            10 => "tien", 11 => "elf", 12 => "twaalf", 13 => "dertien",
            14 => "veertien", 15 => "vijftien", 16 => "zestien", 17 => "zeventien",
            18 => "achttien", 19 => "negentien", 20 => "twintig", 30 => "dertig",
            40 => "veertig", 50 => "vijftig", 60 => "zestig", 70 => "zeventig",
            80 => "tachtig", 90 => "negentig", 100 => "honderd",
        ],
        examples: [
            "programmeren", "wiskunde", "software", "computer", "toetsenbord",
            "taal", "universum", "wetenschap", "kennis", "leren",
            "technologie", "algoritme", "ontwikkeling", "innovatie", "creativiteit",
            "ontdekking", "experiment", "onderzoek", "intelligentie", "filosofie",
            "psychologie", "communicatie", "informatie", "entertainment", "onderwijs",
        ],

    DEU, "de", "Deutsch",
        magic: "vier" => 4,
        compose: Hyphenated,
        count: LatinFiltered,
        numbers: [
            0 => "null", 1 => "eins", 2 => "zwei", 3 => "drei", 4 => "vier",
            5 => "fünf", 6 => "sechs", 7 => "sieben", 8 => "acht", 9 => "neun",
            10 => "zehn", 11 => "elf", 12 => "zwölf", 13 => "dreizehn",
            14 => "vierzehn", 15 => "fünfzehn", 16 => "sechzehn", 17 => "siebzehn",
            18 => "achtzehn", 19 => "neunzehn", 20 => "zwanzig", 30 => "dreißig",
            40 => "vierzig", 50 => "fünfzig", 60 => "sechzig", 70 => "siebzig",
            80 => "achtzig", 90 => "neunzig", 100 => "hundert",
        ],
        examples: [
            "programmierung", "mathematik", "software", "computer", "tastatur",
            "sprache", "universum", "wissenschaft", "wissen", "lernen",
            "technologie", "algorithmus", "ingenieurwesen", "entwicklung", "innovation",
        ],

    // CJK numerals: every single-digit word is one character, so 一 is
    // the fixed point.
    JPN, "ja", "日本語",
        magic: "一" => 1,
        compose: Positional,
        count: RawCodepoints,
        numbers: [
            0 => "零", 1 => "一", 2 => "二", 3 => "三", 4 => "四",
            5 => "五", 6 => "六", 7 => "七", 8 => "八", 9 => "九",
            10 => "十", 11 => "十一", 12 => "十二", 13 => "十三",
            14 => "十四", 15 => "十五", 16 => "十六", 17 => "十七",
            18 => "十八", 19 => "十九", 20 => "二十", 30 => "三十",
            40 => "四十", 50 => "五十", 60 => "六十", 70 => "七十",
            80 => "八十", 90 => "九十", 100 => "百",
        ],
        examples: [
            "こんにちは", "ありがとう", "コンピューター", "数学", "言語",
            "宇宙", "さくら", "プログラミング", "科学", "知識",
        ],

    ZHO, "zh", "中文",
        magic: "一" => 1,
        compose: Positional,
        count: RawCodepoints,
        numbers: [
            0 => "零", 1 => "一", 2 => "二", 3 => "三", 4 => "四",
            5 => "五", 6 => "六", 7 => "七", 8 => "八", 9 => "九",
            10 => "十", 11 => "十一", 12 => "十二", 13 => "十三",
            14 => "十四", 15 => "十五", 16 => "十六", 17 => "十七",
            18 => "十八", 19 => "十九", 20 => "二十", 30 => "三十",
            40 => "四十", 50 => "五十", 60 => "六十", 70 => "七十",
            80 => "八十", 90 => "九十", 100 => "一百",
        ],
        examples: [
            "你好", "计算机", "数学", "语言", "科学",
            "宇宙", "知识", "编程", "算法", "想象力",
        ],
}

/// Lexicon for a language constant.
///
/// Every `Lang` produced by this module has a table row; a miss means a
/// hand-built `Lang` escaped into the engine.
#[inline]
pub fn get_lexicon(lang: Lang) -> &'static Lexicon {
    LANG_TABLE
        .get(lang.code())
        .expect("language not present in LANG_TABLE – this is a bug")
}

#[inline]
pub fn get_lexicon_by_code(code: &str) -> Option<&'static Lexicon> {
    from_code(code).and_then(|lang| LANG_TABLE.get(lang.code()))
}

#[cfg(test)]
mod tests {
    use crate::lang::{
        CompositionRule, LetterCountMode, Lexicon, REQUIRED_NUMBER_KEYS,
        data::{DEU, ENG, JPN, LANG_TABLE, NLD, ZHO, all_langs, from_code, get_lexicon_by_code},
    };

    fn get_from_table(code: &str) -> &'static Lexicon {
        LANG_TABLE.get(code).unwrap()
    }

    #[test]
    fn test_english_metadata() {
        let lex = get_from_table("en");
        assert_eq!(lex.magic_word, "four");
        assert_eq!(lex.magic_value, 4);
        assert_eq!(lex.composition, CompositionRule::Hyphenated);
        assert_eq!(lex.letter_count, LetterCountMode::LatinFiltered);
        assert_eq!(lex.number_word(100), Some("hundred"));
    }

    #[test]
    fn test_dutch_metadata() {
        let lex = get_from_table("nl");
        assert_eq!(lex.magic_word, "vier");
        assert_eq!(lex.composition, CompositionRule::Concatenated);
        assert_eq!(lex.number_word(3), Some("drie"));
    }

    #[test]
    fn test_german_metadata() {
        let lex = get_from_table("de");
        assert_eq!(lex.magic_word, "vier");
        assert_eq!(lex.composition, CompositionRule::Hyphenated);
        assert_eq!(lex.number_word(30), Some("dreißig"));
    }

    #[test]
    fn test_cjk_metadata() {
        for code in ["ja", "zh"] {
            let lex = get_from_table(code);
            assert_eq!(lex.magic_word, "一");
            assert_eq!(lex.magic_value, 1);
            assert_eq!(lex.composition, CompositionRule::Positional);
            assert_eq!(lex.letter_count, LetterCountMode::RawCodepoints);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(from_code("en"), Some(ENG));
        assert_eq!(from_code("NL"), Some(NLD));
        assert_eq!(from_code(" de "), Some(DEU));
        assert_eq!(from_code("ja"), Some(JPN));
        assert_eq!(from_code("zh"), Some(ZHO));
        assert_eq!(from_code("xx"), None);
        assert_eq!(from_code(""), None);
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(get_lexicon_by_code("DE").map(|l| l.code), Some("de"));
        assert!(get_lexicon_by_code("fr").is_none());
    }

    #[test]
    fn test_all_languages_have_required_keys() {
        for &lang in all_langs() {
            let lex = get_from_table(lang.code());
            assert_eq!(lex.code, lang.code());
            for key in REQUIRED_NUMBER_KEYS {
                assert!(
                    lex.number_word(key).is_some(),
                    "{} is missing {key}",
                    lang.code()
                );
            }
            assert!(!lex.examples().is_empty(), "{} has no examples", lang.code());
        }
    }

    #[test]
    fn test_magic_words_are_lowercase() {
        for &lang in all_langs() {
            let lex = get_from_table(lang.code());
            assert_eq!(lex.magic_word, lex.magic_word.to_lowercase());
        }
    }

    #[test]
    fn test_table_and_langs_agree() {
        assert_eq!(LANG_TABLE.len(), all_langs().len());
    }
}
