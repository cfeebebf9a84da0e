// Exam-context table
//
// Closed set of exam identifiers with a per-exam pedagogical hint.
// Unrecognised identifiers fall back to `General`, so parsing never fails.

/// Target exam for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exam {
    Jee,
    Neet,
    Bitsat,
    Olympiad,
    #[default]
    General,
}

impl Exam {
    /// Parse an exam identifier. Exact match only; anything else, including
    /// the empty string, is `General`.
    pub fn parse(identifier: &str) -> Self {
        match identifier {
            "JEE" => Exam::Jee,
            "NEET" => Exam::Neet,
            "BITSAT" => Exam::Bitsat,
            "Olympiad" => Exam::Olympiad,
            _ => Exam::General,
        }
    }

    /// The canonical identifier for this exam.
    pub fn identifier(&self) -> &'static str {
        match self {
            Exam::Jee => "JEE",
            Exam::Neet => "NEET",
            Exam::Bitsat => "BITSAT",
            Exam::Olympiad => "Olympiad",
            Exam::General => "General",
        }
    }

    /// One-sentence context hint injected into the prompt.
    pub fn hint(&self) -> &'static str {
        match self {
            Exam::Jee => {
                "JEE Main and Advanced: emphasize conceptual depth, quick methods, and common traps."
            }
            Exam::Neet => {
                "NEET: focus on NCERT-aligned explanations, accurate fundamentals, and elimination strategies."
            }
            Exam::Bitsat => {
                "BITSAT: concise, exam-speed reasoning with formula-first problem solving."
            }
            Exam::Olympiad => {
                "Physics Olympiad: rigorous derivations, multi-step reasoning, and advanced insight."
            }
            Exam::General => {
                "General physics learning: adapt to student's level with clear stepwise guidance."
            }
        }
    }

    /// All identifiers, sorted lexicographically for display in the
    /// selection control.
    pub fn identifiers() -> [&'static str; 5] {
        ["BITSAT", "General", "JEE", "NEET", "Olympiad"]
    }
}
