use crate::config::CohortConfig;
use crate::model::Listing;

/// Picks the listings comparable to `target`: same brand, optionally the same
/// model and a nearby model year. The target itself is never included.
pub fn select_cohort<'a>(
    target: &Listing,
    listings: &'a [Listing],
    rule: &CohortConfig,
) -> Vec<&'a Listing> {
    let brand = normalize(&target.brand);
    let model = normalize(&target.model);

    listings
        .iter()
        .filter(|l| l.id != target.id)
        .filter(|l| normalize(&l.brand) == brand)
        .filter(|l| !rule.match_model || normalize(&l.model) == model)
        .filter(|l| match rule.year_window {
            Some(window) => l.year.abs_diff(target.year) <= window,
            None => true,
        })
        .collect()
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, brand: &str, model: &str, year: u16) -> Listing {
        Listing {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            year,
            price: 10000.0,
            mileage: None,
            city: None,
            created_at: None,
        }
    }

    fn ids(cohort: &[&Listing]) -> Vec<String> {
        cohort.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn same_brand_ignores_case_and_whitespace() {
        let all = vec![
            listing("1", "Toyota", "Camry", 2015),
            listing("2", " toyota ", "Corolla", 2012),
            listing("3", "Honda", "Civic", 2015),
        ];
        let cohort = select_cohort(&all[0], &all, &CohortConfig::default());
        assert_eq!(ids(&cohort), vec!["2"]);
    }

    #[test]
    fn model_and_year_window_narrow_the_cohort() {
        let all = vec![
            listing("1", "Toyota", "Camry", 2015),
            listing("2", "Toyota", "Camry", 2017),
            listing("3", "Toyota", "Camry", 2020),
            listing("4", "Toyota", "Corolla", 2015),
        ];
        let rule = CohortConfig {
            match_model: true,
            year_window: Some(2),
        };
        let cohort = select_cohort(&all[0], &all, &rule);
        assert_eq!(ids(&cohort), vec!["2"]);
    }

    #[test]
    fn lone_listing_has_empty_cohort() {
        let all = vec![listing("1", "Lada", "Niva", 1999)];
        assert!(select_cohort(&all[0], &all, &CohortConfig::default()).is_empty());
    }
}
