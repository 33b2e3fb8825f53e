use crate::color::{Palette, Style};
use crate::summary::{Check, Group};

pub(crate) const GROUP_MARK: &str = "█";
pub(crate) const PASS_MARK: &str = "✓";
pub(crate) const FAIL_MARK: &str = "✗";
const DETAIL_ARROW: &str = "↳";

/// Recursively render a group tree as display blocks, one per header or
/// check (a failed check's block spans two lines). Joining the blocks with
/// newlines yields the final text; empty blocks become blank lines. A group
/// with an empty name contributes no header, only its children.
pub fn render_group(indent: &str, group: &Group, palette: Palette) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut indent = indent.to_string();

    if !group.name.is_empty() {
        blocks.push(format!("{indent}{GROUP_MARK} {}", group.name));
        blocks.push(String::new());
        indent.push_str("  ");
    }

    for check in &group.checks {
        blocks.push(render_check(&indent, check, palette));
    }
    if !group.checks.is_empty() {
        blocks.push(String::new());
    }

    for child in &group.groups {
        blocks.extend(render_group(&indent, child, palette));
    }

    blocks
}

fn render_check(indent: &str, check: &Check, palette: Palette) -> String {
    if check.is_green() {
        return palette.paint(
            &format!("{indent}{PASS_MARK} {}", check.name),
            &[Style::Green],
        );
    }

    // fails > 0, so the denominator is never zero.
    let percent = 100 * check.passes / (check.passes + check.fails);
    palette.paint(
        &format!(
            "{indent}{FAIL_MARK} {name}\n{indent} {DETAIL_ARROW}  {percent}% — {PASS_MARK} {passes} / {FAIL_MARK} {fails}",
            name = check.name,
            passes = check.passes,
            fails = check.fails,
        ),
        &[Style::Red],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, passes: u64, fails: u64) -> Check {
        Check {
            name: name.to_string(),
            passes,
            fails,
        }
    }

    #[test]
    fn empty_group_renders_nothing() {
        let root = Group::default();
        assert!(render_group("  ", &root, Palette::Plain).is_empty());
    }

    #[test]
    fn named_group_emits_header_and_indents_children() {
        let root = Group {
            name: String::new(),
            checks: vec![],
            groups: vec![Group {
                name: "login".to_string(),
                checks: vec![check("status is 200", 10, 0)],
                groups: vec![],
            }],
        };

        let blocks = render_group(" ", &root, Palette::Plain);
        assert_eq!(
            blocks,
            vec![
                " █ login".to_string(),
                String::new(),
                "   ✓ status is 200".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn failed_check_renders_two_line_block_with_floored_percent() {
        let root = Group {
            name: String::new(),
            checks: vec![check("body size", 2, 1)],
            groups: vec![],
        };

        let blocks = render_group("", &root, Palette::Plain);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "✗ body size\n ↳  66% — ✓ 2 / ✗ 1");
        assert_eq!(blocks[1], "");
    }

    #[test]
    fn failed_check_block_is_colorized_as_a_single_unit() {
        let root = Group {
            name: String::new(),
            checks: vec![check("body size", 0, 3)],
            groups: vec![],
        };

        let blocks = render_group("", &root, Palette::Ansi);
        assert!(blocks[0].starts_with("\u{1b}[31m"));
        assert!(blocks[0].ends_with("\u{1b}[0m"));
        // One escape pair around both lines, not one per line.
        assert_eq!(blocks[0].matches("\u{1b}[31m").count(), 1);
        assert!(blocks[0].contains('\n'));
    }

    #[test]
    fn green_checks_are_painted_green() {
        let root = Group {
            name: String::new(),
            checks: vec![check("status is 200", 5, 0)],
            groups: vec![],
        };

        let blocks = render_group("", &root, Palette::Ansi);
        assert_eq!(blocks[0], "\u{1b}[32m✓ status is 200\u{1b}[0m");
    }

    #[test]
    fn sibling_groups_render_in_order() {
        let root = Group {
            name: String::new(),
            checks: vec![],
            groups: vec![
                Group {
                    name: "alpha".to_string(),
                    checks: vec![],
                    groups: vec![],
                },
                Group {
                    name: "beta".to_string(),
                    checks: vec![],
                    groups: vec![],
                },
            ],
        };

        let blocks = render_group("", &root, Palette::Plain);
        assert_eq!(
            blocks,
            vec![
                "█ alpha".to_string(),
                String::new(),
                "█ beta".to_string(),
                String::new(),
            ]
        );
    }
}
