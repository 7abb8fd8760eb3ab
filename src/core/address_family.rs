use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Address Family
-------------------------------------------------------------------------------------------------*/

/// IP address family (IPv4 or IPv6) of a prefix literal.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl AddressFamily {
    /// Check this family against a family filter; `None` includes both families.
    pub fn matches(&self, filter: Option<AddressFamily>) -> bool {
        filter.map_or(true, |family| family == *self)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => f.write_str("IPv4"),
            AddressFamily::IPv6 => f.write_str("IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Classifier
-------------------------------------------------------------------------------------------------*/

/// Classify an address or CIDR literal by counting colons: two or more is IPv6, anything else
/// is IPv4. The literal is not validated.
pub fn classify(literal: &str) -> AddressFamily {
    if literal.matches(':').count() >= 2 {
        AddressFamily::IPv6
    } else {
        AddressFamily::IPv4
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
