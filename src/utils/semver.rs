use crate::error::BumpError;
use std::fmt;
use std::str::FromStr;

/// Which component of the triple to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

impl FromStr for Part {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Part::Major),
            "minor" => Ok(Part::Minor),
            "patch" => Ok(Part::Patch),
            other => Err(BumpError::InvalidPart(other.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Part::Major => "major",
            Part::Minor => "minor",
            Part::Patch => "patch",
        })
    }
}

/// A `major.minor.patch` triple. Parsing is strict: exactly three
/// dot-separated decimal groups, digits only. Leading zeros are accepted
/// and normalized away when the version is formatted back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Returns the incremented version; lower components reset to zero.
    pub fn bump(self, part: Part) -> Version {
        match part {
            Part::Major => Version::new(self.major + 1, 0, 0),
            Part::Minor => Version::new(self.major, self.minor + 1, 0),
            Part::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// Tag name for this version, e.g. `v1.2.3`.
    pub fn tag_name(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ();

    // The error carries no context; callers attach the file path they
    // were reading from.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut groups = [0u64; 3];
        let mut count = 0;
        for group in s.split('.') {
            if count == 3 {
                return Err(());
            }
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(());
            }
            groups[count] = group.parse::<u64>().map_err(|_| ())?;
            count += 1;
        }
        if count != 3 {
            return Err(());
        }
        Ok(Version::new(groups[0], groups[1], groups[2]))
    }
}
