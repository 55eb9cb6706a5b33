// src/mappings/mod.rs

//! AWS service lookup tables and the comparison engine built on them.
//!
//! The first-party table always wins: a service present in both tables is
//! reported as a DigitalOcean product and the open-source entry is never read.

use std::collections::{BTreeMap, HashMap};

use crate::{
    error::AppError,
    models::mapping::{
        Alternative, ComparisonKind, ComparisonResult, Complexity, ComplexitySummary,
        OpenSourceMapping, ServiceEntry, ServiceMapping,
    },
};

const DO_PRODUCTS_JSON: &str = include_str!("do_products.json");
const OPEN_SOURCE_JSON: &str = include_str!("open_source.json");

/// Immutable pair of lookup tables keyed by exact AWS service name.
#[derive(Debug, Clone, Default)]
pub struct MappingCatalog {
    products: HashMap<String, ServiceMapping>,
    open_source: HashMap<String, OpenSourceMapping>,
}

impl MappingCatalog {
    pub fn new(
        products: HashMap<String, ServiceMapping>,
        open_source: HashMap<String, OpenSourceMapping>,
    ) -> Self {
        Self {
            products,
            open_source,
        }
    }

    /// Loads the tables compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        let products = serde_json::from_str(DO_PRODUCTS_JSON).map_err(|e| {
            AppError::InternalServerError(format!("Invalid product mapping table: {}", e))
        })?;
        let open_source = serde_json::from_str(OPEN_SOURCE_JSON).map_err(|e| {
            AppError::InternalServerError(format!("Invalid open-source mapping table: {}", e))
        })?;

        Ok(Self::new(products, open_source))
    }

    pub fn product(&self, service: &str) -> Option<&ServiceMapping> {
        self.products.get(service)
    }

    pub fn open_source(&self, service: &str) -> Option<&OpenSourceMapping> {
        self.open_source.get(service)
    }

    /// Resolves one service, product table first.
    pub fn lookup(&self, service: &str) -> Option<ComparisonResult<'_>> {
        if let Some(mapping) = self.product(service) {
            return Some(ComparisonResult {
                service: service.to_string(),
                kind: ComparisonKind::DoProduct,
                mapping: Alternative::Product(mapping),
            });
        }

        self.open_source(service).map(|mapping| ComparisonResult {
            service: service.to_string(),
            kind: mapping.kind.into(),
            mapping: Alternative::OpenSource(mapping),
        })
    }

    /// Resolves services in input order; unknown names are dropped silently.
    pub fn resolve<S: AsRef<str>>(&self, services: &[S]) -> Vec<ComparisonResult<'_>> {
        services
            .iter()
            .filter_map(|service| self.lookup(service.as_ref()))
            .collect()
    }

    /// Every known service name once, sorted, tagged with the kind `lookup` yields.
    pub fn services(&self) -> Vec<ServiceEntry> {
        let mut entries: BTreeMap<&str, ComparisonKind> = self
            .open_source
            .iter()
            .map(|(name, mapping)| (name.as_str(), mapping.kind.into()))
            .collect();

        for name in self.products.keys() {
            entries.insert(name.as_str(), ComparisonKind::DoProduct);
        }

        entries
            .into_iter()
            .map(|(service, kind)| ServiceEntry {
                service: service.to_string(),
                kind,
            })
            .collect()
    }
}

/// Averages the difficulty of the first-party results.
///
/// Open-source results carry no score and are skipped rather than counted as zero.
pub fn aggregate_difficulty(results: &[ComparisonResult<'_>]) -> ComplexitySummary {
    summarize_difficulties(
        results
            .iter()
            .filter_map(|result| result.mapping.migration_difficulty()),
    )
}

pub fn summarize_difficulties<I>(difficulties: I) -> ComplexitySummary
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = difficulties
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), d| (sum + u32::from(d), count + 1));

    if count == 0 {
        return ComplexitySummary {
            overall: Complexity::Easy,
            average_difficulty: 0.0,
        };
    }

    let average = f64::from(sum) / f64::from(count);

    ComplexitySummary {
        overall: complexity_for(average),
        average_difficulty: (average * 10.0).round() / 10.0,
    }
}

/// Buckets an average difficulty: up to 3 is Easy, up to 6 is Medium.
pub fn complexity_for(average: f64) -> Complexity {
    if average <= 3.0 {
        Complexity::Easy
    } else if average <= 6.0 {
        Complexity::Medium
    } else {
        Complexity::Hard
    }
}
