use serde::{Deserialize, Serialize};

/// Named band of the strain index with its narrative description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub description: String,
}

/// One explicit band of the tier table, inclusive of its upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub max: u8,
    pub tier: Tier,
}

/// Ordered partition of the 0-100 index range. The catch-all covers anything
/// above the last explicit bound, which makes classification total by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    bands: Vec<TierBand>,
    catchall: Tier,
}

impl TierTable {
    pub fn new(bands: Vec<TierBand>, catchall: Tier) -> Self {
        Self { bands, catchall }
    }

    pub fn classify(&self, index: u8) -> &Tier {
        self.bands
            .iter()
            .find(|band| index <= band.max)
            .map(|band| &band.tier)
            .unwrap_or(&self.catchall)
    }

    /// The production tier table.
    pub fn standard() -> Self {
        let band = |max: u8, name: &str, description: &str| TierBand {
            max,
            tier: Tier {
                name: name.to_string(),
                description: description.to_string(),
            },
        };
        Self {
            bands: vec![
                band(
                    25,
                    "Low Strain",
                    "Your lifestyle habits appear balanced and supportive of your well-being.",
                ),
                band(
                    45,
                    "Moderate Load",
                    "Some of your habits may be contributing to lifestyle strain. It's a good time to pay attention to these areas.",
                ),
                band(
                    70,
                    "High Strain",
                    "Your lifestyle is likely putting sustained pressure on you, which could impact your long-term health.",
                ),
            ],
            catchall: Tier {
                name: "Critical Load".to_string(),
                description: "Your current lifestyle patterns show a strong alignment with health risk indicators and may indicate a high level of burnout.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_maps_to_exactly_one_tier() {
        let table = TierTable::standard();
        for index in 0..=100u8 {
            // classify is total; just make sure nothing panics and the name is set
            assert!(!table.classify(index).name.is_empty());
        }
    }

    #[test]
    fn boundaries_are_inclusive_and_contiguous() {
        let table = TierTable::standard();
        assert_eq!(table.classify(0).name, "Low Strain");
        assert_eq!(table.classify(25).name, "Low Strain");
        assert_eq!(table.classify(26).name, "Moderate Load");
        assert_eq!(table.classify(45).name, "Moderate Load");
        assert_eq!(table.classify(46).name, "High Strain");
        assert_eq!(table.classify(70).name, "High Strain");
        assert_eq!(table.classify(71).name, "Critical Load");
        assert_eq!(table.classify(100).name, "Critical Load");
    }

    #[test]
    fn catchall_applies_when_no_band_matches() {
        let table = TierTable::new(
            vec![],
            Tier {
                name: "Only".to_string(),
                description: String::new(),
            },
        );
        assert_eq!(table.classify(0).name, "Only");
        assert_eq!(table.classify(100).name, "Only");
    }
}
