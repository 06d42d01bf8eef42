use std::error::Error;

use fourfold::{DEU, ENG, Engine, JPN, NLD, Route, ZHO};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // ENGLISH – every word ends at "four"
    // ────────────────────────────────────────────────────────────────
    let eng = Engine::new(ENG)?;
    for word in ["four", "time", "hello", "programming"] {
        let path = eng.path(word)?;
        println!("English : {path}  ({} steps)", path.step_count());
    }
    // → programming → 11 → eleven → 6 → six → 3 → three → 5 → five → 4 → four

    // ────────────────────────────────────────────────────────────────
    // DUTCH & GERMAN – "vier" has four letters too
    // ────────────────────────────────────────────────────────────────
    println!("Dutch   : {}", Engine::new(NLD)?.path("kat")?);
    // → kat → 3 → drie → 4 → vier
    println!("German  : {}", Engine::new(DEU)?.path("Zwölf")?);
    // → zwölf → 5 → fünf → 4 → vier

    // ────────────────────────────────────────────────────────────────
    // JAPANESE & CHINESE – characters are letters, 一 is the fixed point
    // ────────────────────────────────────────────────────────────────
    println!("Japanese: {}", Engine::new(JPN)?.path("コンピューター")?);
    // → コンピューター → 7 → 七 → 1 → 一
    println!("Chinese : {}", Engine::new(ZHO)?.path("计算机")?);
    // → 计算机 → 3 → 三 → 1 → 一

    // ────────────────────────────────────────────────────────────────
    // Routing – a shared link back to its path
    // ────────────────────────────────────────────────────────────────
    let route = Route::parse_with_base("/four/de/schmetterling", "/four")?;
    let path = Engine::new(route.lang)?.checked_path(&route.word)?;
    println!("{route} : {path}");
    // → /de/schmetterling : schmetterling → 13 → dreizehn → 8 → acht → 4 → vier

    // ────────────────────────────────────────────────────────────────
    // A random demonstration word
    // ────────────────────────────────────────────────────────────────
    if let Some(path) = eng.random_path(&mut rand::rng())? {
        println!("Random  : {path}");
    }

    Ok(())
}
