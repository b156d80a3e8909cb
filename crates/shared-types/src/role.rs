use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workforce role attached to an identity by the backend.
///
/// - `Admin`: platform administration and organisation-wide statistics.
/// - `Hr`: employee, project and leave management.
/// - `Manager`: team, project and performance oversight.
/// - `Employee`: self-service profile, leave and documents.
///
/// Declaration order is the precedence order used for dashboard selection
/// and menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl Role {
    /// Every role, highest precedence first.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hr, Role::Manager, Role::Employee];

    /// Wire name as issued by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Hr => "ROLE_HR",
            Role::Manager => "ROLE_MANAGER",
            Role::Employee => "ROLE_EMPLOYEE",
        }
    }

    /// Short human-readable name shown in the top bar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hr => "HR",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    /// Parse a role name. Accepts `ROLE_HR` as well as `hr`, case-insensitive.
    /// Unknown names return `None` so callers can drop them.
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match bare {
            "ADMIN" => Some(Role::Admin),
            "HR" => Some(Role::Hr),
            "MANAGER" => Some(Role::Manager),
            "EMPLOYEE" => Some(Role::Employee),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of roles held by one identity.
///
/// Backed by a bitmask so membership is constant time and two sets built in
/// different orders compare equal. Iteration always yields roles in
/// precedence order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        RoleSet(0)
    }

    /// Build a set from backend role names, ignoring names that are not roles.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|n| Role::parse(n.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    pub fn remove(&mut self, role: Role) {
        self.0 &= !role.bit();
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Roles in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|r| self.contains(*r))
    }

    /// Highest-precedence role held, if any.
    pub fn primary(&self) -> Option<Role> {
        self.iter().next()
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Role> for RoleSet {
    fn extend<I: IntoIterator<Item = Role>>(&mut self, iter: I) {
        for role in iter {
            self.insert(role);
        }
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for role in self.iter() {
            seq.serialize_element(role.as_str())?;
        }
        seq.end()
    }
}

/// One entry of the backend's `roles` array: either `{"id": 1, "name": "ROLE_HR"}`
/// or a bare `"ROLE_HR"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleEntry {
    Named { name: String },
    Bare(String),
}

impl RoleEntry {
    fn name(&self) -> &str {
        match self {
            RoleEntry::Named { name } => name,
            RoleEntry::Bare(name) => name,
        }
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RoleSetVisitor;

        impl<'de> Visitor<'de> for RoleSetVisitor {
            type Value = RoleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of role names or role objects")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RoleSet, A::Error> {
                let mut set = RoleSet::empty();
                while let Some(entry) = seq.next_element::<RoleEntry>()? {
                    if let Some(role) = Role::parse(entry.name()) {
                        set.insert(role);
                    }
                }
                Ok(set)
            }

            fn visit_unit<E: de::Error>(self) -> Result<RoleSet, E> {
                Ok(RoleSet::empty())
            }
        }

        deserializer.deserialize_any(RoleSetVisitor)
    }
}
