use lazy_static::lazy_static;
use regex::Regex;

/// Split a raw message into one text block per pokemon.
///
/// Blocks are separated by blank lines and come back in input order. A
/// paste that lost its line breaks is repaired first, see
/// [`restore_breaks`]. An empty message yields no blocks at all.
pub fn normalize(raw: &str) -> Vec<String> {
    lazy_static! {
        static ref BLANK: Regex = Regex::new(r"\n[ \t]*\n+").unwrap();
    }

    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.trim();

    if text.is_empty() {
        return Vec::new();
    }

    let text = restore_breaks(text);

    let blocks: Vec<String> = BLANK
        .split(&text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_owned)
        .collect();

    if blocks.is_empty() {
        vec![text]
    } else {
        blocks
    }
}

/// Put every recognized field marker and move bullet at the start of its
/// own line, so a set pasted as one long line parses the same as a well
/// formed one. Well formed text passes through unchanged.
///
/// This is a heuristic. A species or move whose name happens to contain
/// a marker word (`<something> Nature` most notably) gets split at the
/// wrong spot. Bullets only count when the `-` is surrounded by spaces,
/// names like `Ho-Oh` or `Double-Edge` are safe.
pub fn restore_breaks(text: &str) -> String {
    lazy_static! {
        static ref MARKER: Regex = Regex::new(
            r"(?i)[ \t]+((?:Ability|Level|Shiny|Pokeball|Ball|Tera Type|EVs|IVs):|\w+ Nature\b)"
        )
        .unwrap();
        static ref BULLET: Regex = Regex::new(r"[ \t]+-[ \t]+").unwrap();
    }

    let text = MARKER.replace_all(text, "\n$1");
    BULLET.replace_all(&text, "\n- ").into_owned()
}
