//! Settlement record model

/// One row of the settlement table
///
/// Price and variation fields stay as the locale-formatted display text the
/// page serves; nothing downstream does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commodity {
    pub name: String,
    pub due_date: String,
    pub previous_adjustment_price: String,
    pub current_adjustment_price: String,
    pub variation: String,
    pub contract_adjustment_amount: String,
}

impl Commodity {
    pub fn new(
        name: String,
        due_date: String,
        previous_adjustment_price: String,
        current_adjustment_price: String,
        variation: String,
        contract_adjustment_amount: String,
    ) -> Self {
        Self {
            name,
            due_date,
            previous_adjustment_price,
            current_adjustment_price,
            variation,
            contract_adjustment_amount,
        }
    }

    /// Short code derived from the name: everything before the first `-`,
    /// trimmed. Names without a separator are their own acronym.
    pub fn acronym(&self) -> &str {
        match self.name.split_once('-') {
            Some((prefix, _)) => prefix.trim(),
            None => self.name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commodity(name: &str) -> Commodity {
        Commodity::new(
            name.to_string(),
            "G20".to_string(),
            "61.727,69".to_string(),
            "62.190,75".to_string(),
            "463,06".to_string(),
            "231,53".to_string(),
        )
    }

    #[test]
    fn test_acronym_with_separator() {
        assert_eq!(commodity("VALE-OG20").acronym(), "VALE");
        assert_eq!(commodity("AO-G20").acronym(), "AO");
    }

    #[test]
    fn test_acronym_trims_around_separator() {
        assert_eq!(commodity("DOL - Dólar comercial").acronym(), "DOL");
    }

    #[test]
    fn test_acronym_without_separator() {
        assert_eq!(commodity("BGI").acronym(), "BGI");
    }

    #[test]
    fn test_acronym_only_uses_first_separator() {
        assert_eq!(commodity("WIN-IND-G20").acronym(), "WIN");
    }
}
