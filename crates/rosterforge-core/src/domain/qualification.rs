//! Position eligibility from free-text role lists.
//!
//! Role strings are comma-separated (`"Gate, Lobby"`). Matching is
//! case-insensitive and tolerant of partial names: a position qualifies when
//! its name equals a role token, is contained in one, or contains one. The
//! token `all` qualifies for every position.
//!
//! Substring tolerance means `"Gate"` also matches `"Main Gate"`.

/// Token granting every position.
pub const WILDCARD_ROLE: &str = "all";

/// A parsed, normalized role list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    tokens: Vec<String>,
    wildcard: bool,
}

impl RoleSet {
    /// Parses a comma-separated role string.
    pub fn parse(roles: &str) -> Self {
        let tokens: Vec<String> = roles
            .split(',')
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .collect();
        let wildcard = tokens.iter().any(|t| t == WILDCARD_ROLE);
        Self { tokens, wildcard }
    }

    /// Returns whether this role list qualifies for `position`.
    pub fn qualifies_for(&self, position: &str) -> bool {
        if self.wildcard {
            return true;
        }
        let wanted = position.trim().to_lowercase();
        self.tokens
            .iter()
            .any(|token| *token == wanted || token.contains(&wanted) || wanted.contains(token.as_str()))
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Convenience wrapper around [`RoleSet::parse`] + [`RoleSet::qualifies_for`].
pub fn is_qualified(roles: &str, position: &str) -> bool {
    RoleSet::parse(roles).qualifies_for(position)
}
