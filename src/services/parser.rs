//! setup 工具控制台输出解析
//!
//! setup 的输出格式不是稳定契约，所有解析集中在这里，逐行 best-effort：
//! 解析失败的行被跳过，不影响其余行

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::address::is_valid_address;
use crate::domain::mailserver::AliasEntry;

// `setup email list` 行形如:
// `* name@developer.de ( 969K / ~ ) [0%] [ aliases -> postmaster@mail.de ]`
// 取 `*` 与第一个 `(` 之间的 token
static EMAIL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s*(.*?)\s*\(").expect("valid email line regex"));

// `setup alias list` 行形如:
// `* alias@example.com owner@example.com`
static ALIAS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*\* *(\S+) +(\S+)").expect("valid alias line regex"));

/// 解析 `setup email list` 的输出
///
/// 顺序保留，重复不去重，空输入返回空 Vec
pub fn parse_email_list(output: &str) -> Vec<String> {
    let mut result = Vec::new();

    for line in output.lines() {
        if let Some(captures) = EMAIL_LINE.captures(line) {
            let address = &captures[1];
            if is_valid_address(address) {
                result.push(address.to_string());
            }
        }
    }

    result
}

/// 解析 `setup alias list` 的输出
///
/// 每行两个 token（别名、归属邮箱），缺 token 或校验失败的行静默跳过，
/// 大小写原样保留
pub fn parse_alias_list(output: &str) -> Vec<AliasEntry> {
    let mut result = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = ALIAS_LINE.captures(line) {
            let alias = &captures[1];
            let email = &captures[2];
            if !is_valid_address(alias) || !is_valid_address(email) {
                continue;
            }
            result.push(AliasEntry {
                alias: alias.to_string(),
                email: email.to_string(),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_lists() {
        assert!(parse_email_list("").is_empty());
        assert!(parse_alias_list("").is_empty());
    }

    #[test]
    fn test_parse_alias_list_preserves_order_and_case() {
        let output = "* a@x.com b@x.com\n* c@y.com d@y.com";
        let aliases = parse_alias_list(output);
        assert_eq!(
            aliases,
            vec![
                AliasEntry {
                    alias: "a@x.com".to_string(),
                    email: "b@x.com".to_string(),
                },
                AliasEntry {
                    alias: "c@y.com".to_string(),
                    email: "d@y.com".to_string(),
                },
            ]
        );

        let mixed = parse_alias_list("* Admin@X.com Owner@X.com");
        assert_eq!(mixed[0].alias, "Admin@X.com");
        assert_eq!(mixed[0].email, "Owner@X.com");
    }

    #[test]
    fn test_alias_line_without_owner_is_dropped() {
        let output = "* a@x.com b@x.com\n* postmaster@website.de\n* c@y.com d@y.com";
        let aliases = parse_alias_list(output);
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0].alias, "a@x.com");
        assert_eq!(aliases[1].alias, "c@y.com");
    }

    #[test]
    fn test_alias_line_with_invalid_token_is_dropped() {
        // 任一侧校验失败则整行丢弃，其余行不受影响
        let output = "* not-an-address b@x.com\n* a@x.com also-bad\n* c@y.com d@y.com";
        let aliases = parse_alias_list(output);
        assert_eq!(
            aliases,
            vec![AliasEntry {
                alias: "c@y.com".to_string(),
                email: "d@y.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_alias_list_tolerates_irregular_spacing() {
        let aliases = parse_alias_list("  *   a@x.com     b@x.com  \n\n");
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].alias, "a@x.com");
        assert_eq!(aliases[0].email, "b@x.com");
    }

    #[test]
    fn test_parse_email_list_ignores_usage_stats_and_alias_annotation() {
        let output = "* name@developer.de ( 969K / ~ ) [0%] [ aliases -> postmaster@mail.de ]";
        assert_eq!(parse_email_list(output), vec!["name@developer.de"]);
    }

    #[test]
    fn test_parse_email_list_multiple_entries() {
        let output = "\
* first@example.com ( 12M / 1.0G ) [1%]
* second@example.com ( 0 / ~ ) [0%]
continuation line to ignore
* malformed entry without paren";
        assert_eq!(
            parse_email_list(output),
            vec!["first@example.com", "second@example.com"]
        );
    }

    #[test]
    fn test_parse_email_list_keeps_duplicates() {
        let output = "* dup@example.com ( 0 / ~ )\n* dup@example.com ( 0 / ~ )";
        assert_eq!(parse_email_list(output).len(), 2);
    }

    #[test]
    fn test_parse_email_list_drops_invalid_address() {
        let output = "* not an address (with parens)\n* good@example.com ( 0 / ~ )";
        assert_eq!(parse_email_list(output), vec!["good@example.com"]);
    }
}
