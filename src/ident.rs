/// Normalize a user typed name (move, ability, item, ball, tera type)
/// into the snake_case key used by the lookup tables.
///
/// `Will-O-Wisp` becomes `will_o_wisp`, `Poké Ball` becomes `poke_ball`,
/// `Farfetch'd` becomes `farfetchd`. Returns `None` when nothing usable
/// is left, e.g. pure punctuation. Running it on an already canonical
/// key gives the key back unchanged.
pub fn canonicalize(text: &str) -> Option<String> {
    let lowered = text
        .to_lowercase()
        .replace('♀', "f")
        .replace('♂', "m")
        .replace('é', "e")
        .replace(|c| c == '\'' || c == '’', "")
        .replace(|c| c == '-' || c == '.' || c == '/', " ");

    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '_')
        .collect();

    let key = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let key = key.trim_matches('_');

    if key.is_empty() {
        None
    } else {
        Some(key.to_owned())
    }
}

/// The presentation inverse of [`canonicalize`]: `light_ball` back to
/// `Light Ball`. Purely cosmetic, round-tripping is not guaranteed.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_basics() {
        assert_eq!(canonicalize("Thunderbolt"), Some("thunderbolt".to_owned()));
        assert_eq!(canonicalize("Light Ball"), Some("light_ball".to_owned()));
        assert_eq!(canonicalize("Will-O-Wisp"), Some("will_o_wisp".to_owned()));
        assert_eq!(canonicalize("Mr. Mime"), Some("mr_mime".to_owned()));
        assert_eq!(canonicalize("Farfetch'd"), Some("farfetchd".to_owned()));
        assert_eq!(canonicalize("Poké Ball"), Some("poke_ball".to_owned()));
    }

    #[test]
    fn canonicalize_gender_glyphs() {
        assert_eq!(canonicalize("Nidoran♀"), Some("nidoranf".to_owned()));
        assert_eq!(canonicalize("Nidoran♂"), Some("nidoranm".to_owned()));
    }

    #[test]
    fn canonicalize_rejects_empty() {
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize("   "), None);
        assert_eq!(canonicalize("!!!???"), None);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for name in &["Light Ball", "10,000,000 Volt Thunderbolt", "Kommo-o", "poke_ball"] {
            let once = canonicalize(name).unwrap();
            assert_eq!(canonicalize(&once), Some(once.clone()));
        }
    }

    #[test]
    fn display_name_round() {
        assert_eq!(display_name("light_ball"), "Light Ball");
        assert_eq!(display_name("static"), "Static");
    }
}
