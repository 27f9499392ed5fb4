use serde::Deserialize;

/// A country record as returned by the REST Countries v3.1 API when
/// requesting the `name,capital,population,flags` field set.
///
/// The common name doubles as the record identity for selection purposes;
/// the dataset carries no separate primary key.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    /// Missing populations deserialize to zero and therefore sort smallest.
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Flags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: String,
}

impl Country {
    /// Display name, used as the selection identifier.
    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// First capital for display, with a placeholder when absent.
    pub fn capital_display(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or("N/A")
    }
}

/// Attributes the table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Population,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Name => "Name",
            SortKey::Population => "Population",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator glyph shown next to the active column header
    pub fn glyph(&self) -> &str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The single active sort, if any. Only one column sorts at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capital_display_placeholder() {
        let country: Country =
            serde_json::from_str(r#"{"name":{"common":"Antarctica"}}"#).unwrap();
        assert_eq!(country.capital_display(), "N/A");
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(
            SortDirection::Ascending.flipped(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }
}
