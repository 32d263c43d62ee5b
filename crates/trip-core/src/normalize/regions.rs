//! Destination regions known to the classifier
//!
//! The model was trained on the full region labels offered by the sign-up form.
//! Free-text destinations mentioning a region are rewritten to that label.

/// Key phrase to canonical label, most specific phrase first
///
/// Order matters: "southeast asia" contains "east asia", and the Americas and
/// Africas share prefixes, so a phrase must precede every phrase it contains.
const REGION_ALIASES: &[(&str, &str)] = &[
    (
        "southeast asia",
        "southeast asia - for example, thailand, vietnam, indonesia, malaysia, philippines",
    ),
    (
        "east asia",
        "east asia - for example, china, japan, south korea, taiwan",
    ),
    (
        "south asia",
        "south asia - for example, india, sri lanka, nepal, maldives",
    ),
    (
        "central asia",
        "central asia - for example, kazakhstan, uzbekistan, kyrgyzstan, turkmenistan",
    ),
    (
        "middle east",
        "middle east - for example, uae, israel, jordan, egypt",
    ),
    (
        "north africa",
        "north africa - for example, morocco, egypt, tunisia, algeria",
    ),
    (
        "central africa",
        "central africa - for example, democratic republic of the congo, cameroon, gabon, central african republic",
    ),
    (
        "southern africa",
        "southern africa - for example, south africa, namibia, botswana, zimbabwe",
    ),
    (
        "central america",
        "central america and the caribbean - for example, costa rica, panama, belize, bahamas, jamaica, dominican republic",
    ),
    (
        "caribbean",
        "central america and the caribbean - for example, costa rica, panama, belize, bahamas, jamaica, dominican republic",
    ),
    (
        "south america",
        "south america - for example, brazil, argentina, chile, peru, colombia",
    ),
    (
        "north america",
        "north america - for example, united states, canada, mexico",
    ),
    (
        "western europe",
        "western europe - for example, france, germany, netherlands, belgium, switzerland",
    ),
    (
        "southern europe",
        "southern europe - for example, italy, spain, greece, portugal",
    ),
    (
        "northern europe",
        "northern europe (scandinavia) - for example, sweden, norway, denmark, finland",
    ),
    (
        "scandinavia",
        "northern europe (scandinavia) - for example, sweden, norway, denmark, finland",
    ),
    (
        "eastern europe",
        "eastern europe - for example, russia, poland, czech republic, hungary, romania",
    ),
    (
        "oceania",
        "oceania - for example, australia, new zealand, fiji, papua new guinea",
    ),
];

/// Canonical label for a trimmed, lowercased destination, if it names a known region
pub(super) fn region_label(destination: &str) -> Option<&'static str> {
    REGION_ALIASES
        .iter()
        .find(|(phrase, _)| destination.contains(phrase))
        .map(|(_, label)| *label)
}
