//! Word-reveal progression
//!
//! A fixed target string with a parallel boolean mask. Each successful
//! slice unlocks the lowest-index hidden letter; the mask never resets
//! within a session.

/// Reveal mask over a fixed target string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    target: Vec<char>,
    mask: Vec<bool>,
    complete: bool,
}

impl RevealState {
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let mask = vec![false; target.len()];
        Self {
            complete: target.is_empty(),
            target,
            mask,
        }
    }

    /// Flip the lowest-index hidden entry. Returns whether an entry was
    /// flipped; a no-op once the mask is all true.
    pub fn reveal_next(&mut self) -> bool {
        let Some(slot) = self.mask.iter_mut().find(|revealed| !**revealed) else {
            return false;
        };
        *slot = true;
        if self.mask.iter().all(|revealed| *revealed) {
            self.complete = true;
        }
        true
    }

    /// Permanently true once every letter is revealed
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn revealed_count(&self) -> usize {
        self.mask.iter().filter(|revealed| **revealed).count()
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// The target with hidden positions replaced by `placeholder`
    pub fn masked_string(&self, placeholder: char) -> String {
        self.target
            .iter()
            .zip(&self.mask)
            .map(|(c, revealed)| if *revealed { *c } else { placeholder })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveals_left_to_right() {
        let mut reveal = RevealState::new("ORANGE");
        assert_eq!(reveal.masked_string('_'), "______");

        assert!(reveal.reveal_next());
        assert_eq!(reveal.masked_string('_'), "O_____");
        assert!(reveal.reveal_next());
        assert_eq!(reveal.masked_string('_'), "OR____");
    }

    #[test]
    fn test_six_slices_complete_the_word() {
        let mut reveal = RevealState::new("ORANGE");
        for i in 1..=6 {
            assert!(!reveal.is_complete());
            assert!(reveal.reveal_next());
            assert_eq!(reveal.revealed_count(), i);
        }
        assert!(reveal.is_complete());
        assert_eq!(reveal.masked_string('_'), "ORANGE");

        // seventh call is a no-op and complete never reverts
        assert!(!reveal.reveal_next());
        assert!(reveal.is_complete());
        assert_eq!(reveal.revealed_count(), 6);
    }

    #[test]
    fn test_complete_transitions_exactly_once() {
        let mut reveal = RevealState::new("HI");
        assert!(reveal.reveal_next());
        assert!(!reveal.is_complete());
        assert!(reveal.reveal_next());
        assert!(reveal.is_complete());
    }

    #[test]
    fn test_empty_target_starts_complete() {
        let mut reveal = RevealState::new("");
        assert!(reveal.is_complete());
        assert!(!reveal.reveal_next());
    }

    proptest! {
        #[test]
        fn prop_mask_is_a_nondecreasing_prefix(len in 1usize..24, calls in 0usize..40) {
            let word = "A".repeat(len);
            let mut reveal = RevealState::new(&word);
            let mut previous = 0;
            for _ in 0..calls {
                reveal.reveal_next();
                let count = reveal.revealed_count();
                // each call flips at most one entry and never unflips any
                prop_assert!(count == previous || count == previous + 1);
                prop_assert!(count <= len);
                previous = count;
            }
            prop_assert_eq!(reveal.is_complete(), previous == len);
        }
    }
}
