use rand::Rng;

use crate::options::ReplacementStrategy;

/// Keywords that mark an alternative as plant-based
pub const PLANT_KEYWORDS: [&str; 11] = [
    "tofu",
    "tempeh",
    "lentil",
    "chickpea",
    "nut",
    "plant",
    "almond",
    "oat",
    "soy",
    "vegan",
    "nutritional yeast",
];

/// Pick one alternative from `alternatives`.
///
/// Returns `None` for an empty list; callers treat that as "leave the text
/// alone". `Random` draws uniformly from `rng`. `Best` returns the first
/// candidate, or with `prefer_plant_based` the first candidate mentioning a
/// [`PLANT_KEYWORDS`] entry when there is one.
pub fn choose_alternative<'a, R>(
    alternatives: &'a [String],
    strategy: ReplacementStrategy,
    prefer_plant_based: bool,
    rng: &mut R,
) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    if alternatives.is_empty() {
        return None;
    }

    match strategy {
        ReplacementStrategy::Random => {
            let index = rng.gen_range(0..alternatives.len());
            Some(alternatives[index].as_str())
        }
        ReplacementStrategy::Best => {
            if prefer_plant_based {
                if let Some(plant) = alternatives.iter().find(|alt| is_plant_based(alt)) {
                    return Some(plant.as_str());
                }
            }
            alternatives.first().map(String::as_str)
        }
    }
}

/// Whether the text mentions any plant keyword, ignoring case.
pub fn is_plant_based(text: &str) -> bool {
    let lower = text.to_lowercase();
    PLANT_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn alts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            choose_alternative(&[], ReplacementStrategy::Best, false, &mut rng),
            None
        );
        assert_eq!(
            choose_alternative(&[], ReplacementStrategy::Random, true, &mut rng),
            None
        );
    }

    #[test]
    fn test_best_picks_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = alts(&["honey", "tofu crumble"]);
        assert_eq!(
            choose_alternative(&list, ReplacementStrategy::Best, false, &mut rng),
            Some("honey")
        );
    }

    #[test]
    fn test_best_prefers_plant_based() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = alts(&["honey", "tofu crumble"]);
        assert_eq!(
            choose_alternative(&list, ReplacementStrategy::Best, true, &mut rng),
            Some("tofu crumble")
        );
    }

    #[test]
    fn test_plant_preference_falls_back_to_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = alts(&["greek yogurt", "feta"]);
        assert_eq!(
            choose_alternative(&list, ReplacementStrategy::Best, true, &mut rng),
            Some("greek yogurt")
        );
    }

    #[test]
    fn test_plant_keywords_ignore_case() {
        assert!(is_plant_based("Nutritional Yeast"));
        assert!(is_plant_based("latte with OAT milk"));
        assert!(!is_plant_based("smoked salmon"));
    }

    #[test]
    fn test_random_returns_a_candidate() {
        let mut rng = StdRng::seed_from_u64(7);
        let list = alts(&["a", "b", "c"]);
        for _ in 0..50 {
            let picked =
                choose_alternative(&list, ReplacementStrategy::Random, false, &mut rng).unwrap();
            assert!(list.iter().any(|alt| alt == picked));
        }
    }

    #[test]
    fn test_random_eventually_picks_every_candidate() {
        let mut rng = StdRng::seed_from_u64(11);
        let list = alts(&["a", "b", "c"]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_alternative(&list, ReplacementStrategy::Random, false, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }
}
