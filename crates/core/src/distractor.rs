//! Wrong-answer generation.
//!
//! Every strategy returns up to [`DISTRACTOR_COUNT`] labels that differ from
//! the correct answer and from each other. [`assemble_options`] joins them
//! with the correct label and shuffles, so the correct option lands on a
//! uniformly random position.

use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};

use crate::clock::{self, MinutePosition, ALL_POSITIONS, HOURS};

/// Options shown per question, correct answer included.
pub const OPTION_COUNT: usize = 4;

/// Wrong options wanted per question.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Random draws allowed when filling combined-time distractors.
pub const COMBINED_RETRY_LIMIT: usize = 50;

/// Lowercase letters from `alphabet`, excluding `target`.
pub fn letter_distractors<R>(target: char, alphabet: &[char], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    alphabet
        .iter()
        .filter(|letter| **letter != target)
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .into_iter()
        .map(|letter| lowercase(*letter))
        .collect()
}

/// Other hours of the dial.
pub fn hour_distractors<R>(target: u8, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    HOURS
        .iter()
        .filter(|hour| **hour != target)
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .into_iter()
        .map(|hour| hour.to_string())
        .collect()
}

/// `HEL`/`HALV` labels for other hours.
///
/// With `tricky` set, `HALV <target - 1>` is always included: it catches a
/// learner who anchors the half hour to the numeral just passed.
pub fn whole_or_half_distractors<R>(
    target_hour: u8,
    half: bool,
    tricky: bool,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let correct = clock::whole_or_half_label(target_hour, half);
    let mut distractors = Vec::with_capacity(DISTRACTOR_COUNT);

    if tricky {
        let trap = clock::whole_or_half_label(clock::previous_hour(target_hour), true);
        if trap != correct {
            distractors.push(trap);
        }
    }

    let mut candidates: Vec<String> = HOURS
        .iter()
        .filter(|hour| **hour != target_hour)
        .flat_map(|hour| {
            [
                clock::whole_or_half_label(*hour, false),
                clock::whole_or_half_label(*hour, true),
            ]
        })
        .filter(|label| *label != correct && !distractors.contains(label))
        .collect();
    candidates.shuffle(rng);

    let missing = DISTRACTOR_COUNT.saturating_sub(distractors.len());
    distractors.extend(candidates.into_iter().take(missing));
    distractors
}

/// Minute phrases, drawn first from the same difficulty tier as the target
/// and only then from the positions outside it.
pub fn minute_label_distractors<R>(
    target: MinutePosition,
    allowed: &[MinutePosition],
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let correct = target.label();
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);

    let mut same_tier: Vec<MinutePosition> = allowed
        .iter()
        .copied()
        .filter(|position| *position != target)
        .collect();
    same_tier.shuffle(rng);

    let mut outside: Vec<MinutePosition> = ALL_POSITIONS
        .iter()
        .copied()
        .filter(|position| *position != target && !allowed.contains(position))
        .collect();
    outside.shuffle(rng);

    for position in same_tier.into_iter().chain(outside) {
        if distractors.len() >= DISTRACTOR_COUNT {
            break;
        }
        let label = position.label();
        if label != correct && !distractors.iter().any(|existing| existing == label) {
            distractors.push(label.to_string());
        }
    }
    distractors
}

/// Combined time phrases for the hour-and-minute game.
///
/// The first distractor keeps the minute phrase and changes the hour, the
/// second keeps the hour and changes the minute phrase, the rest are random
/// pairs from `allowed`. Random filling stops after
/// [`COMBINED_RETRY_LIMIT`] draws, so a small tier may yield fewer than
/// [`DISTRACTOR_COUNT`] distractors.
pub fn combined_time_distractors<R>(
    position: MinutePosition,
    hour: u8,
    allowed: &[MinutePosition],
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let correct = clock::format_answer(position, hour);
    let mut taken = vec![correct.clone()];

    let other_hour = HOURS
        .iter()
        .map(|candidate| clock::format_answer(position, *candidate))
        .filter(|label| *label != correct)
        .choose(rng);
    if let Some(label) = other_hour {
        push_unique(&mut taken, label);
    }

    let other_position = allowed
        .iter()
        .filter(|candidate| **candidate != position)
        .map(|candidate| clock::format_answer(*candidate, hour))
        .filter(|label| !taken.contains(label))
        .choose(rng);
    if let Some(label) = other_position {
        push_unique(&mut taken, label);
    }

    let mut attempts = 0;
    while taken.len() < OPTION_COUNT && attempts < COMBINED_RETRY_LIMIT && !allowed.is_empty() {
        attempts += 1;
        let random_position = allowed[rng.gen_range(0..allowed.len())];
        let random_hour = HOURS[rng.gen_range(0..HOURS.len())];
        push_unique(&mut taken, clock::format_answer(random_position, random_hour));
    }

    taken.split_off(1)
}

/// Join the correct label with its distractors, drop duplicates, shuffle.
pub fn assemble_options<R>(correct: &str, distractors: Vec<String>, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut options = vec![correct.to_string()];
    for label in distractors {
        if options.len() >= OPTION_COUNT {
            break;
        }
        push_unique(&mut options, label);
    }
    options.shuffle(rng);
    options
}

/// Lowercase form of a letter; single-char for the whole Swedish alphabet.
pub fn lowercase(letter: char) -> String {
    letter.to_lowercase().collect()
}

fn push_unique(options: &mut Vec<String>, label: String) {
    if !options.contains(&label) {
        options.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::clock::{QUARTERS, WHOLE_AND_HALF};
    use crate::mode::{FULL_ALPHABET, HARD_ALPHABET};

    fn assert_distinct(options: &[String]) {
        let mut sorted = options.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), options.len(), "duplicates in {options:?}");
    }

    #[test]
    fn letter_distractors_are_lowercase_and_exclude_target() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors = letter_distractors('Å', &FULL_ALPHABET, &mut rng);
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            assert!(!distractors.contains(&"å".to_string()));
            for label in &distractors {
                assert_eq!(*label, label.to_lowercase());
            }
            let options = assemble_options("å", distractors, &mut rng);
            assert_eq!(options.len(), OPTION_COUNT);
            assert_distinct(&options);
        }
    }

    #[test]
    fn hard_alphabet_distractors_stay_in_hard_alphabet() {
        let mut rng = StdRng::seed_from_u64(8);
        let hard: Vec<String> = HARD_ALPHABET.iter().map(|c| lowercase(*c)).collect();
        for label in letter_distractors('Q', &HARD_ALPHABET, &mut rng) {
            assert!(hard.contains(&label));
        }
    }

    #[test]
    fn hour_distractors_skip_the_target() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors = hour_distractors(7, &mut rng);
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            assert!(!distractors.contains(&"7".to_string()));
            assert_distinct(&distractors);
        }
    }

    #[test]
    fn tricky_half_hour_distractor_is_included() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors = whole_or_half_distractors(4, true, true, &mut rng);
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            assert!(distractors.contains(&"HALV 3".to_string()));
            assert!(!distractors.contains(&"HALV 4".to_string()));
            assert_distinct(&distractors);
        }
        let mut rng = StdRng::seed_from_u64(1);
        let wrapped = whole_or_half_distractors(1, true, true, &mut rng);
        assert!(wrapped.contains(&"HALV 12".to_string()));
    }

    #[test]
    fn minute_distractors_prefer_the_same_tier() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors =
                minute_label_distractors(MinutePosition::HALF, &QUARTERS, &mut rng);
            let mut expected = vec!["HEL", "KVART ÖVER", "KVART I"];
            let mut got: Vec<&str> = distractors.iter().map(String::as_str).collect();
            expected.sort_unstable();
            got.sort_unstable();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn minute_distractors_fall_back_outside_a_small_tier() {
        let mut rng = StdRng::seed_from_u64(2);
        let distractors =
            minute_label_distractors(MinutePosition::WHOLE, &WHOLE_AND_HALF, &mut rng);
        assert_eq!(distractors.len(), DISTRACTOR_COUNT);
        assert!(distractors.contains(&"HALV".to_string()));
        assert!(!distractors.contains(&"HEL".to_string()));
        assert_distinct(&distractors);
    }

    #[test]
    fn combined_distractors_probe_hour_and_minute_reading() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let position = MinutePosition::QUARTER_TO;
            let distractors = combined_time_distractors(position, 4, &QUARTERS, &mut rng);
            let correct = clock::format_answer(position, 4);
            assert_eq!(correct, "KVART I 5");
            assert!(!distractors.contains(&correct));
            assert_distinct(&distractors);
            assert!(distractors.len() <= DISTRACTOR_COUNT);
            assert!(distractors[0].starts_with("KVART I "));
            assert!(distractors.len() >= 2);
        }
    }

    #[test]
    fn combined_distractors_tolerate_a_single_position_tier() {
        let mut rng = StdRng::seed_from_u64(4);
        let only = [MinutePosition::WHOLE];
        let distractors = combined_time_distractors(MinutePosition::WHOLE, 3, &only, &mut rng);
        assert!(!distractors.is_empty());
        assert!(distractors.len() <= DISTRACTOR_COUNT);
        assert!(distractors.iter().all(|label| label.parse::<u8>().is_ok()));
    }

    #[test]
    fn correct_option_position_varies() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut positions = [0usize; OPTION_COUNT];
        for _ in 0..200 {
            let distractors = hour_distractors(5, &mut rng);
            let options = assemble_options("5", distractors, &mut rng);
            let at = options.iter().position(|o| o == "5").unwrap();
            positions[at] += 1;
        }
        assert!(positions.iter().all(|count| *count > 0));
    }
}
