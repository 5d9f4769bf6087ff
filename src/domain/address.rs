//! 邮件地址校验
//!
//! 按 RFC 5322 addr-spec 的 dot-atom 形式校验，不做任何归一化，
//! 大小写和原始字符串原样保留

use once_cell::sync::Lazy;
use regex::Regex;

// dot-atom local part + 点分域名，不支持 quoted-string 和注释形式，
// setup 工具输出的地址不会出现这些形式
static ADDR_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[A-Za-z0-9!\#$%&'*+/=?^_`{|}~-]+ (\.[A-Za-z0-9!\#$%&'*+/=?^_`{|}~-]+)*
        @
        [A-Za-z0-9] ([A-Za-z0-9-]*[A-Za-z0-9])?
        (\.[A-Za-z0-9] ([A-Za-z0-9-]*[A-Za-z0-9])?)* $
    ",
    )
    .expect("valid addr-spec regex")
});

/// 校验字符串是否为合法的邮箱地址
pub fn is_valid_address(input: &str) -> bool {
    ADDR_SPEC.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_address("postmaster@website.de"));
        assert!(is_valid_address("name@developer.de"));
        assert!(is_valid_address("first.last@sub.example.com"));
        assert!(is_valid_address("user+tag@example.com"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("no-at-sign"));
        assert!(!is_valid_address("@example.com"));
        assert!(!is_valid_address("user@"));
        assert!(!is_valid_address("user name@example.com"));
        assert!(!is_valid_address("user@exam ple.com"));
        assert!(!is_valid_address("user@@example.com"));
        assert!(!is_valid_address(".leading@example.com"));
        assert!(!is_valid_address("trailing.@example.com"));
        assert!(!is_valid_address("user@-example.com"));
    }

    #[test]
    fn test_case_is_not_folded() {
        // 校验不修改输入，大小写敏感性由调用方决定
        assert!(is_valid_address("MiXeD.CaSe@Example.COM"));
    }
}
