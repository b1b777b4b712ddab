use crate::error::{SolarError, SolarResult};
use crate::insights::coordinates_are_valid;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;
use tracing::{info, warn};

pub const CUSTOM_CATEGORY: &str = "custom";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            city: city.into(),
        }
    }

    pub fn has_valid_coordinates(&self) -> bool {
        coordinates_are_valid(self.lat, self.lng)
    }
}

/// Parses `name,lat,lng[,city]`.
impl FromStr for Location {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(SolarError::Validation(format!(
                "Expected NAME,LAT,LNG[,CITY], got '{}'",
                s
            )));
        }

        let coord = |raw: &str, label: &str| {
            raw.parse::<f64>()
                .map_err(|_| SolarError::Validation(format!("Invalid {} '{}'", label, raw)))
        };

        Ok(Location::new(
            parts[0],
            coord(parts[1], "latitude")?,
            coord(parts[2], "longitude")?,
            parts.get(3).copied().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

fn is_header(rec: &csv::StringRecord) -> bool {
    let label = |field: &str, names: &[&str]| names.iter().any(|n| field.eq_ignore_ascii_case(n));
    label(&rec[1], &["lat", "latitude"]) && label(&rec[2], &["lng", "lon", "long", "longitude"])
}

/// A named, ordered group of candidate sites analyzed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub locations: Vec<Location>,
}

impl Category {
    pub fn new(name: impl Into<String>, locations: Vec<Location>) -> Self {
        Self {
            name: name.into(),
            locations,
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

type BuiltinSite = (&'static str, f64, f64, &'static str);

const BUILTINS: &[(&str, &[BuiltinSite])] = &[
    (
        "capitals",
        &[
            ("United States Capitol", 38.8899, -77.0091, "Washington"),
            ("Texas State Capitol", 30.2747, -97.7404, "Austin"),
            ("California State Capitol", 38.5766, -121.4934, "Sacramento"),
            ("Arizona State Capitol", 33.4481, -112.0970, "Phoenix"),
            ("Colorado State Capitol", 39.7393, -104.9848, "Denver"),
        ],
    ),
    (
        "sunbelt",
        &[
            ("Downtown Phoenix", 33.4484, -112.0740, "Phoenix"),
            ("Las Vegas Strip", 36.1147, -115.1728, "Las Vegas"),
            ("Tucson Midtown", 32.2319, -110.9501, "Tucson"),
            ("El Paso Central", 31.7619, -106.4850, "El Paso"),
            ("Albuquerque Old Town", 35.0960, -106.6700, "Albuquerque"),
        ],
    ),
    (
        "coastal",
        &[
            ("Santa Monica Pier", 34.0094, -118.4973, "Santa Monica"),
            ("Miami Beach", 25.7907, -80.1300, "Miami"),
            ("San Diego Gaslamp", 32.7116, -117.1600, "San Diego"),
            ("Charleston Battery", 32.7705, -79.9307, "Charleston"),
            ("Galveston Seawall", 29.2890, -94.7910, "Galveston"),
        ],
    ),
    (
        "tech-hubs",
        &[
            ("Mountain View", 37.3861, -122.0839, "Mountain View"),
            ("South Lake Union", 47.6254, -122.3365, "Seattle"),
            ("The Domain", 30.4021, -97.7253, "Austin"),
            ("Kendall Square", 42.3629, -71.0901, "Cambridge"),
            ("Research Triangle Park", 35.8992, -78.8636, "Durham"),
        ],
    ),
];

/// The static built-in categories plus the session's mutable custom set.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    builtins: Vec<Category>,
    custom: Vec<Location>,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl CategoryStore {
    pub fn with_builtins() -> Self {
        let builtins = BUILTINS
            .iter()
            .map(|(name, sites)| {
                let locations = sites
                    .iter()
                    .map(|&(n, lat, lng, city)| Location::new(n, lat, lng, city))
                    .collect();
                Category::new(*name, locations)
            })
            .collect();

        Self {
            builtins,
            custom: Vec::new(),
        }
    }

    /// Built-in names in declaration order, then `custom`.
    pub fn names(&self) -> Vec<&str> {
        self.builtins
            .iter()
            .map(|c| c.name.as_str())
            .chain(std::iter::once(CUSTOM_CATEGORY))
            .collect()
    }

    /// Snapshot of a category. The custom set is copied as it stands right now.
    pub fn get(&self, name: &str) -> SolarResult<Category> {
        if name == CUSTOM_CATEGORY {
            return Ok(Category::new(CUSTOM_CATEGORY, self.custom.clone()));
        }
        self.builtins
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| {
                SolarError::Validation(format!(
                    "Unknown category '{}'. Available: {}",
                    name,
                    self.names().join(", ")
                ))
            })
    }

    pub fn custom(&self) -> &[Location] {
        &self.custom
    }

    pub fn add_custom(&mut self, location: Location) -> SolarResult<()> {
        if location.name.trim().is_empty() {
            return Err(SolarError::Validation("Location name must not be empty".into()));
        }
        if !location.has_valid_coordinates() {
            return Err(SolarError::Validation(format!(
                "Invalid coordinates for '{}': lat={}, lng={}",
                location.name, location.lat, location.lng
            )));
        }
        if self.custom.iter().any(|l| l.name == location.name) {
            return Err(SolarError::Validation(format!(
                "Custom location '{}' already exists",
                location.name
            )));
        }
        self.custom.push(location);
        Ok(())
    }

    pub fn remove_custom(&mut self, name: &str) -> Option<Location> {
        let idx = self.custom.iter().position(|l| l.name == name)?;
        Some(self.custom.remove(idx))
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    /// Appends `name,lat,lng[,city]` rows to the custom set.
    ///
    /// A header row (`lat`/`lng` labels in the coordinate columns) is optional.
    /// Malformed or duplicate rows are skipped with a warning rather than failing the import.
    pub fn import_custom_csv<R: Read>(&mut self, reader: R) -> SolarResult<ImportStats> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut imported = 0;
        let mut skipped = 0;

        for (row_idx, result) in rdr.records().enumerate() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    warn!("⚠️  [Row {}] CSV Parse Error: {}", row_idx + 1, e);
                    skipped += 1;
                    continue;
                }
            };

            if rec.len() < 3 {
                warn!("⚠️  [Row {}] Expected name,lat,lng[,city]", row_idx + 1);
                skipped += 1;
                continue;
            }

            if row_idx == 0 && is_header(&rec) {
                continue;
            }

            let (lat, lng) = match (rec[1].parse::<f64>(), rec[2].parse::<f64>()) {
                (Ok(lat), Ok(lng)) => (lat, lng),
                _ => {
                    warn!(
                        "⚠️  [Row {}] Unparseable coordinates '{}', '{}'",
                        row_idx + 1,
                        &rec[1],
                        &rec[2]
                    );
                    skipped += 1;
                    continue;
                }
            };

            let city = rec.get(3).unwrap_or_default();
            match self.add_custom(Location::new(&rec[0], lat, lng, city)) {
                Ok(()) => imported += 1,
                Err(e) => {
                    warn!("⚠️  [Row {}] {}", row_idx + 1, e);
                    skipped += 1;
                }
            }
        }

        info!(
            "📥 Imported {} custom locations ({} skipped)",
            imported, skipped
        );
        Ok(ImportStats { imported, skipped })
    }
}
