use std::fmt;

/// Case-insensitive identity of a requirement: lowercased name and unit.
///
/// `Milk`/`cup` and `milk`/`CUP` share a key; `Milk`/`cup` and `Milk`/`tbsp`
/// do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationKey(String);

impl AggregationKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AggregationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(name: &str, unit: &str) -> AggregationKey {
    AggregationKey(format!("{}-{}", name.to_lowercase(), unit.to_lowercase()))
}
