//! Plain-text rendering of submission outcomes.

use std::fmt::Write;

use tagmatch_core::Submission;

pub fn render(outcome: &Submission) -> String {
    let mut out = String::new();
    match outcome {
        Submission::NoInterests => {
            out.push_str(
                "No game interests recognized, try naming specific games or genres.\n",
            );
        }
        Submission::Matched { matches, .. } if matches.is_empty() => {
            out.push_str("No matching players found for now, we will keep looking.\n");
        }
        Submission::Matched {
            interests,
            total,
            matches,
        } => {
            let _ = writeln!(out, "Your interests: {}", interests.join(", "));
            let _ = writeln!(out, "Found {total} players with similar interests.");
            for m in matches {
                let c = &m.candidate;
                let common = if c.common_tags.is_empty() {
                    "None".to_string()
                } else {
                    c.common_tags.join(", ")
                };
                let _ = writeln!(out, "Recommended player: {}", c.display_name);
                let _ = writeln!(out, "  Match score: {:.0}%", c.score * 100.0);
                let _ = writeln!(out, "  Common games: {common}");
                let _ = writeln!(out, "  Reason: {}", m.reason);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmatch_core::{CandidateScore, RecommendedMatch};

    #[test]
    fn renders_matches_as_percentages() {
        let outcome = Submission::Matched {
            interests: vec!["Hades".into(), "Doom".into()],
            total: 4,
            matches: vec![RecommendedMatch {
                candidate: CandidateScore {
                    user_id: "7".into(),
                    display_name: "mika".into(),
                    score: 0.9,
                    common_tags: vec![],
                    interests: vec!["Celeste".into()],
                },
                reason: "Both love tight platforming.".into(),
            }],
        };
        let text = render(&outcome);
        assert!(text.contains("Found 4 players with similar interests."));
        assert!(text.contains("Recommended player: mika"));
        assert!(text.contains("Match score: 90%"));
        assert!(text.contains("Common games: None"));
        assert!(text.contains("Reason: Both love tight platforming."));
    }

    #[test]
    fn renders_empty_outcomes() {
        assert!(render(&Submission::NoInterests).contains("No game interests"));
        let empty = Submission::Matched {
            interests: vec!["Hades".into()],
            total: 0,
            matches: vec![],
        };
        assert!(render(&empty).contains("No matching players"));
    }
}
