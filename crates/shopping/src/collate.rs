use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Base letters only: decomposed, accents dropped, lowercased.
fn primary_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Display order for ingredient names, close to the root locale collation.
///
/// Letters compare first without accents or case (`Éclair` sorts with the
/// `e`s), then unaccented before accented, then lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| {
            let a = a.nfd().collect::<String>().to_lowercase();
            let b = b.nfd().collect::<String>().to_lowercase();
            a.cmp(&b)
        })
        .then_with(|| b.cmp(a))
}
