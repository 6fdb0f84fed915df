//! Name normalization into filesystem-safe storage keys.

/// Separator substituted for spaces and path separators.
pub const SEPARATOR: char = '-';

/// Normalize an entry name into its storage key.
///
/// Trims surrounding whitespace, lowercases the name, and replaces each
/// space, `/`, and `\` with [`SEPARATOR`].
/// Creation and lookup both go through this function; any divergence would
/// make entries unreachable by name.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => SEPARATOR,
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::slugify;

    #[rstest]
    #[case("Break the ice", "break-the-ice")]
    #[case("TCP/IP", "tcp-ip")]
    #[case("and\\or", "and-or")]
    #[case("Ad  Hoc", "ad--hoc")]
    #[case("already-slugged", "already-slugged")]
    #[case("Über Café", "über-café")]
    #[case("  Break the ice ", "break-the-ice")]
    #[case("\tcold feet\n", "cold-feet")]
    fn normalizes(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[rstest]
    #[case("Break the ice")]
    #[case("Client/Server Model")]
    #[case("MiXeD CaSe\\Path")]
    #[case(" padded name  ")]
    fn is_idempotent(#[case] name: &str) {
        let once = slugify(name);
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn case_and_separator_variants_collide() {
        assert_eq!(slugify("Break The Ice"), slugify("break the ice"));
        assert_eq!(slugify("client/server"), slugify("Client Server"));
    }
}
