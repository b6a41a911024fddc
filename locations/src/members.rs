use std::collections::HashMap;

use tracing::trace;

/// Marker tint associated with a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberColor {
    Blue,
    Pink,
    White,
    Purple,
    Orange,
}

/// Display attributes of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub symbol: &'static str,
    pub color: MemberColor,
}

const DEFAULT_INFO: MemberInfo = MemberInfo {
    symbol: "🔮",
    color: MemberColor::Orange,
};

/// Static mapping from member identifier to display attributes.
///
/// Unknown members never fail a lookup, they get the default entry.
#[derive(Debug, Clone)]
pub struct MemberRegistry {
    members: HashMap<&'static str, MemberInfo>,
    default: MemberInfo,
}

impl Default for MemberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberRegistry {
    pub fn new() -> Self {
        let members = HashMap::from([
            (
                "Karina",
                MemberInfo {
                    symbol: "💙",
                    color: MemberColor::Blue,
                },
            ),
            (
                "Giselle",
                MemberInfo {
                    symbol: "🌙",
                    color: MemberColor::Pink,
                },
            ),
            (
                "Winter",
                MemberInfo {
                    symbol: "⭐",
                    color: MemberColor::White,
                },
            ),
            (
                "Ningning",
                MemberInfo {
                    symbol: "🦋",
                    color: MemberColor::Purple,
                },
            ),
        ]);

        Self {
            members,
            default: DEFAULT_INFO,
        }
    }

    /// Info for a list of members. Only a single known member gets its own
    /// entry; group posts and unknown members get the default.
    pub fn lookup<S: AsRef<str>>(&self, members: &[S]) -> &MemberInfo {
        match members {
            [single] => self.info_for(single.as_ref()),
            _ => &self.default,
        }
    }

    /// Symbol for a single member, falling back to the default symbol.
    pub fn symbol_for(&self, member: &str) -> &'static str {
        self.info_for(member).symbol
    }

    pub fn default_info(&self) -> &MemberInfo {
        &self.default
    }

    fn info_for(&self, member: &str) -> &MemberInfo {
        let member = member.trim();
        self.members.get(member).unwrap_or_else(|| {
            trace!(member, "unknown member, using default display");
            &self.default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_known_member_gets_its_info() {
        let registry = MemberRegistry::new();
        let info = registry.lookup(&["Karina"]);
        assert_eq!(info.color, MemberColor::Blue);
        assert_eq!(info.symbol, "💙");
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let registry = MemberRegistry::new();
        assert_eq!(registry.lookup(&["  Winter "]).color, MemberColor::White);
    }

    #[test]
    fn test_group_post_gets_default() {
        let registry = MemberRegistry::new();
        let info = registry.lookup(&["Karina", "Giselle"]);
        assert_eq!(info, registry.default_info());
    }

    #[test]
    fn test_unknown_or_empty_member_list_gets_default() {
        let registry = MemberRegistry::new();
        assert_eq!(registry.lookup(&["Someone"]), registry.default_info());
        assert_eq!(registry.lookup::<&str>(&[]), registry.default_info());
    }

    #[test]
    fn test_symbol_for_falls_back_to_default_symbol() {
        let registry = MemberRegistry::new();
        assert_eq!(registry.symbol_for(" Ningning"), "🦋");
        assert_eq!(registry.symbol_for("Nobody"), "🔮");
    }
}
