//! Line-oriented analysis of a container build file.

use crate::catalog::{self, RuleSpec};
use drainguard_types::Finding;

/// Process-launch instructions whose argument form decides signal delivery.
static LAUNCH_INSTRUCTIONS: &[(&str, &RuleSpec)] = &[
    ("ENTRYPOINT", &catalog::ENTRYPOINT_SHELL_FORM),
    ("CMD", &catalog::CMD_SHELL_FORM),
];

/// Flag shell-form `ENTRYPOINT` (DG001) and `CMD` (DG002) instructions.
///
/// Findings come out in ascending line order, at most one per line. A leading byte-order mark is
/// ignored.
pub fn analyze_build_file(content: &str, file: &str) -> Vec<Finding> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut out = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((keyword, argument)) = split_instruction(line) else {
            continue;
        };

        let Some(rule) = launch_rule(keyword) else {
            continue;
        };

        if !is_exec_form(argument) {
            out.push(rule.at_line(file, idx as u32 + 1));
        }
    }

    out
}

/// Split a trimmed line into its keyword and the remainder after the first whitespace run.
///
/// A keyword with nothing but the end of line after it is not an instruction we care about.
fn split_instruction(line: &str) -> Option<(&str, &str)> {
    let (keyword, rest) = line.split_once(char::is_whitespace)?;
    Some((keyword, rest.trim()))
}

fn launch_rule(keyword: &str) -> Option<&'static RuleSpec> {
    LAUNCH_INSTRUCTIONS
        .iter()
        .find(|(name, _)| keyword.eq_ignore_ascii_case(name))
        .map(|(_, rule)| *rule)
}

fn is_exec_form(argument: &str) -> bool {
    argument.starts_with('[')
}
