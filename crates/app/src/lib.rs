use dungeon_core::RunOutcome;

pub mod console;
pub mod high_score_file;
pub mod seed;
pub mod session;
pub mod settings;
pub mod ui_text;

pub const APP_NAME: &str = "DungeonOfDeath";

/// Format a score with comma thousands separators.
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short code logged for how a run ended.
pub fn reason_code(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Cleared => "WIN_ALL_ROOMS",
        RunOutcome::Defeated => "DMG_HP_ZERO",
        RunOutcome::Abandoned => "QUIT_EARLY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_score_groups_thousands() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(140), "140");
        assert_eq!(format_score(1000), "1,000");
        assert_eq!(format_score(1234567), "1,234,567");
        assert_eq!(format_score(u32::MAX), "4,294,967,295");
    }

    #[test]
    fn reason_codes_are_correct() {
        assert_eq!(reason_code(RunOutcome::Cleared), "WIN_ALL_ROOMS");
        assert_eq!(reason_code(RunOutcome::Defeated), "DMG_HP_ZERO");
        assert_eq!(reason_code(RunOutcome::Abandoned), "QUIT_EARLY");
    }
}
