//! Maybe: model absence as a value instead of a null.

use std::io::Write;

use fpat_core::{Maybe, OptionExt, Result};

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionDemo;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: u32,
    name: &'static str,
    email: Option<&'static str>,
}

static USERS: [User; 2] = [
    User {
        id: 1,
        name: "Ada",
        email: Some("ada@example.com"),
    },
    User {
        id: 2,
        name: "Grace",
        email: None,
    },
];

fn find_user(id: u32) -> Maybe<&'static User> {
    USERS.iter().find(|user| user.id == id).into_maybe()
}

fn greeting(id: u32) -> String {
    find_user(id)
        .map(|user| user.name)
        .match_with(|name| format!("Hello, {name}"), || "Hello, guest".to_string())
}

fn email_domain(id: u32) -> Maybe<&'static str> {
    find_user(id)
        .bind(|user| user.email.into_maybe())
        .bind(|email| email.split_once('@').map(|(_, domain)| domain).into_maybe())
}

impl Demo for OptionDemo {
    fn name(&self) -> &'static str {
        "option"
    }

    fn summary(&self) -> &'static str {
        "Option / Maybe"
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        for id in [1, 9] {
            let found = find_user(id).map(|user| user.name);
            writeln!(out, "find_user({id}) -> {found}")?;
        }
        for id in [1, 9] {
            writeln!(out, "greeting for {id}: {}", greeting(id))?;
        }
        for id in [1, 2] {
            let domain = email_domain(id).value_or("<no email>");
            writeln!(out, "email domain for {id}: {domain}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(find_user(2).map(|user| user.name), Maybe::Some("Grace"));
        assert!(find_user(3).is_none());
        assert_eq!(email_domain(1), Maybe::Some("example.com"));
        assert_eq!(email_domain(2), Maybe::None);
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        OptionDemo.run(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("find_user(1) -> Some(Ada)"));
        assert!(text.contains("find_user(9) -> None"));
        assert!(text.contains("greeting for 1: Hello, Ada"));
        assert!(text.contains("greeting for 9: Hello, guest"));
        assert!(text.contains("email domain for 2: <no email>"));
    }
}
