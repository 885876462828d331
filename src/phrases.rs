/// Celebration phrases shown when a countdown finishes.
use rand::RngExt;

pub const NAME_PLACEHOLDER: &str = "{name}";

pub const PHRASES: &[&str] = &[
    "Nice one, you're a star, {name}",
    "Bahredin is proud of you, {name}!",
    "Bahredin sends respect, {name}!",
    "Super, {name}! ",
    "Cool, {name}!",
];

/// Fill the first placeholder of `template` with `name`.
pub fn render(template: &str, name: &str) -> String {
    template.replacen(NAME_PLACEHOLDER, name, 1)
}

/// Pick a phrase uniformly at random and fill in `name`.
pub fn random_phrase(name: &str) -> String {
    let mut rng = rand::rng();
    render(PHRASES[rng.random_range(0..PHRASES.len())], name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_has_a_placeholder() {
        for phrase in PHRASES {
            assert!(phrase.contains(NAME_PLACEHOLDER), "{phrase}");
        }
    }

    #[test]
    fn render_substitutes_the_name() {
        for phrase in PHRASES {
            let rendered = render(phrase, "Ana");
            assert!(!rendered.is_empty());
            assert!(rendered.contains("Ana"), "{rendered}");
            assert!(!rendered.contains(NAME_PLACEHOLDER), "{rendered}");
        }
    }

    #[test]
    fn render_replaces_only_the_first_placeholder() {
        assert_eq!(render("{name} and {name}", "Ana"), "Ana and {name}");
    }

    #[test]
    fn random_phrase_is_one_of_the_set() {
        let expected: Vec<String> = PHRASES.iter().map(|p| render(p, "Ana")).collect();
        for _ in 0..50 {
            let phrase = random_phrase("Ana");
            assert!(expected.contains(&phrase), "{phrase}");
        }
    }
}
