use crate::models::{Country, InvestmentMetrics, Property, PropertyStatus};
use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use std::path::Path;
use tracing::info;

/// Load listings from a JSON array on disk
pub async fn load_catalog(path: &Path) -> Result<Vec<Property>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let properties: Vec<Property> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

    info!("📂 Loaded {} listings from {}", properties.len(), path.display());
    Ok(properties)
}

/// Load the catalog at `path`, or the built-in sample listings if it does not exist
pub async fn load_or_sample(path: &Path) -> Result<Vec<Property>> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        load_catalog(path).await
    } else {
        info!("No catalog at {}, using sample listings", path.display());
        Ok(sample_catalog())
    }
}

struct Sample {
    id: &'static str,
    title: &'static str,
    country: Country,
    city: &'static str,
    property_type: &'static str,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    sqm: u32,
    status: PropertyStatus,
    golden_visa_eligible: bool,
    expected_roi: Option<f64>,
    rental_yield: Option<f64>,
    features: &'static [&'static str],
    listed: (i32, u32, u32),
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "cy-limassol-1",
        title: "Seafront apartment in Limassol",
        country: Country::Cyprus,
        city: "Limassol",
        property_type: "apartment",
        price: 285_000,
        bedrooms: 3,
        bathrooms: 2,
        sqm: 110,
        status: PropertyStatus::Resale,
        golden_visa_eligible: false,
        expected_roi: Some(6.2),
        rental_yield: Some(5.1),
        features: &["Sea view", "Balcony", "Parking"],
        listed: (2024, 2, 12),
    },
    Sample {
        id: "cy-paphos-2",
        title: "Off-plan villa near Paphos old town",
        country: Country::Cyprus,
        city: "Paphos",
        property_type: "villa",
        price: 640_000,
        bedrooms: 4,
        bathrooms: 3,
        sqm: 240,
        status: PropertyStatus::OffPlan,
        golden_visa_eligible: true,
        expected_roi: Some(8.4),
        rental_yield: Some(4.2),
        features: &["Pool", "Garden"],
        listed: (2024, 5, 3),
    },
    Sample {
        id: "gr-athens-1",
        title: "Renovated flat in Koukaki",
        country: Country::Greece,
        city: "Athens",
        property_type: "apartment",
        price: 255_000,
        bedrooms: 2,
        bathrooms: 1,
        sqm: 72,
        status: PropertyStatus::Resale,
        golden_visa_eligible: true,
        expected_roi: Some(7.1),
        rental_yield: Some(6.3),
        features: &["Acropolis view", "Elevator"],
        listed: (2024, 3, 21),
    },
    Sample {
        id: "gr-crete-2",
        title: "New build penthouse in Chania",
        country: Country::Greece,
        city: "Chania",
        property_type: "penthouse",
        price: 520_000,
        bedrooms: 3,
        bathrooms: 2,
        sqm: 145,
        status: PropertyStatus::NewBuild,
        golden_visa_eligible: true,
        expected_roi: Some(5.8),
        rental_yield: Some(4.9),
        features: &["Roof terrace", "Sea view"],
        listed: (2024, 6, 14),
    },
    Sample {
        id: "ge-tbilisi-1",
        title: "Studio in Vake, Tbilisi",
        country: Country::Georgia,
        city: "Tbilisi",
        property_type: "apartment",
        price: 68_000,
        bedrooms: 1,
        bathrooms: 1,
        sqm: 42,
        status: PropertyStatus::NewBuild,
        golden_visa_eligible: false,
        expected_roi: Some(11.5),
        rental_yield: Some(9.8),
        features: &["Furnished"],
        listed: (2024, 1, 30),
    },
    Sample {
        id: "ge-batumi-2",
        title: "Off-plan aparthotel unit in Batumi",
        country: Country::Georgia,
        city: "Batumi",
        property_type: "apartment",
        price: 95_000,
        bedrooms: 2,
        bathrooms: 1,
        sqm: 58,
        status: PropertyStatus::OffPlan,
        golden_visa_eligible: false,
        expected_roi: Some(12.3),
        rental_yield: Some(10.4),
        features: &["Managed rental", "Sea view"],
        listed: (2024, 4, 8),
    },
    Sample {
        id: "lb-beirut-1",
        title: "Family house in Achrafieh",
        country: Country::Lebanon,
        city: "Beirut",
        property_type: "house",
        price: 410_000,
        bedrooms: 4,
        bathrooms: 3,
        sqm: 210,
        status: PropertyStatus::Resale,
        golden_visa_eligible: false,
        expected_roi: None,
        rental_yield: Some(3.6),
        features: &["Garden", "Generator"],
        listed: (2023, 11, 19),
    },
];

/// Fixed listings spread across every market, used when no catalog file is present
pub fn sample_catalog() -> Vec<Property> {
    SAMPLES
        .iter()
        .map(|s| {
            let (year, month, day) = s.listed;
            Property {
                id: s.id.to_string(),
                title: s.title.to_string(),
                country: s.country,
                city: s.city.to_string(),
                property_type: s.property_type.to_string(),
                price: s.price,
                bedrooms: s.bedrooms,
                bathrooms: s.bathrooms,
                sqm: s.sqm,
                status: s.status,
                golden_visa_eligible: s.golden_visa_eligible,
                investment_metrics: Some(InvestmentMetrics {
                    expected_roi: s.expected_roi,
                    rental_yield: s.rental_yield,
                }),
                published: true,
                features: s.features.iter().map(|f| f.to_string()).collect(),
                images: vec![],
                created_at: Utc
                    .with_ymd_and_hms(year, month, day, 0, 0, 0)
                    .single()
                    .unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_covers_every_country() {
        let catalog = sample_catalog();
        let countries: HashSet<Country> = catalog.iter().map(|p| p.country).collect();
        assert_eq!(countries.len(), 4);

        let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());

        // A mistyped listing date would fall back to the epoch
        let epoch = chrono::DateTime::<Utc>::default();
        assert!(catalog.iter().all(|p| p.created_at != epoch));
    }

    #[tokio::test]
    async fn test_load_catalog_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        let catalog = sample_catalog();
        tokio::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap())
            .await
            .unwrap();

        let loaded = load_catalog(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(loaded, catalog);
    }

    #[tokio::test]
    async fn test_missing_catalog_falls_back_to_sample() {
        let path = Path::new("definitely/not/a/catalog.json");
        let loaded = load_or_sample(path).await.unwrap();
        assert_eq!(loaded.len(), sample_catalog().len());
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_an_error() {
        let path = std::env::temp_dir().join(format!("bad-catalog-{}.json", std::process::id()));
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = load_catalog(&path).await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(err.to_string().contains("Failed to parse catalog"));
    }
}
