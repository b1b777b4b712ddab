use rstest::rstest;
use solarscope::categories::{CategoryStore, ImportStats, Location, CUSTOM_CATEGORY};
use solarscope::error::SolarError;
use std::io::Cursor;

#[test]
fn test_builtin_names_in_order() {
    let store = CategoryStore::with_builtins();
    assert_eq!(
        store.names(),
        ["capitals", "sunbelt", "coastal", "tech-hubs", CUSTOM_CATEGORY]
    );
}

#[rstest]
#[case("capitals")]
#[case("sunbelt")]
#[case("coastal")]
#[case("tech-hubs")]
fn test_builtins_are_populated_and_valid(#[case] name: &str) {
    let category = CategoryStore::default().get(name).unwrap();
    assert_eq!(category.name, name);
    assert!(!category.is_empty());
    assert!(category.locations.iter().all(Location::has_valid_coordinates));
}

#[test]
fn test_unknown_category() {
    let err = CategoryStore::default().get("moon-bases").unwrap_err();
    assert!(matches!(err, SolarError::Validation(ref m) if m.contains("moon-bases")));
}

#[test]
fn test_custom_starts_empty() {
    let store = CategoryStore::default();
    let custom = store.get(CUSTOM_CATEGORY).unwrap();
    assert!(custom.is_empty());
}

#[test]
fn test_custom_add_remove_clear() {
    let mut store = CategoryStore::default();
    store
        .add_custom(Location::new("Home", 40.0, -105.0, "Boulder"))
        .unwrap();
    store
        .add_custom(Location::new("Office", 39.7, -104.9, "Denver"))
        .unwrap();
    assert_eq!(store.get(CUSTOM_CATEGORY).unwrap().len(), 2);

    let removed = store.remove_custom("Home").unwrap();
    assert_eq!(removed.city, "Boulder");
    assert!(store.remove_custom("Home").is_none());
    assert_eq!(store.custom().len(), 1);

    store.clear_custom();
    assert!(store.custom().is_empty());
}

#[test]
fn test_custom_snapshot_is_detached() {
    let mut store = CategoryStore::default();
    store.add_custom(Location::new("A", 1.0, 1.0, "")).unwrap();
    let snapshot = store.get(CUSTOM_CATEGORY).unwrap();

    store.add_custom(Location::new("B", 2.0, 2.0, "")).unwrap();
    assert_eq!(snapshot.len(), 1);
}

#[rstest]
#[case(Location::new("", 1.0, 1.0, ""))]
#[case(Location::new("Pole", 90.5, 0.0, ""))]
#[case(Location::new("Dateline", 0.0, -181.0, ""))]
#[case(Location::new("NaN", f64::NAN, 0.0, ""))]
fn test_custom_rejects_bad_locations(#[case] location: Location) {
    let mut store = CategoryStore::default();
    assert!(store.add_custom(location).is_err());
    assert!(store.custom().is_empty());
}

#[test]
fn test_custom_rejects_duplicates() {
    let mut store = CategoryStore::default();
    store.add_custom(Location::new("Home", 1.0, 1.0, "")).unwrap();
    assert!(store.add_custom(Location::new("Home", 2.0, 2.0, "")).is_err());
}

#[test]
fn test_location_from_str() {
    let loc: Location = "Home, 40.015, -105.27, Boulder".parse().unwrap();
    assert_eq!(loc, Location::new("Home", 40.015, -105.27, "Boulder"));

    let no_city: Location = "Shed,1.5,2.5".parse().unwrap();
    assert_eq!(no_city.city, "");

    assert!("only,two".parse::<Location>().is_err());
    assert!("Home,north,-105".parse::<Location>().is_err());
}

#[test]
fn test_import_with_header_and_bad_rows() {
    let data = "\
name,lat,lng,city
Home,40.015,-105.27,Boulder
Broken,abc,1.0,Nowhere
Short,1.0
Office,39.74,-104.99
Home,1.0,1.0,Duplicate
Mars,120.0,0.0,Nowhere
";
    let mut store = CategoryStore::default();
    let stats = store.import_custom_csv(Cursor::new(data)).unwrap();

    assert_eq!(
        stats,
        ImportStats {
            imported: 2,
            skipped: 4
        }
    );
    let names: Vec<&str> = store.custom().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Home", "Office"]);
    assert_eq!(store.custom()[1].city, "");
}

#[test]
fn test_import_without_header() {
    let mut store = CategoryStore::default();
    let imported = store
        .import_custom_csv(Cursor::new("A,1,2,X\nB,3,4,Y\n"))
        .unwrap();
    assert_eq!(imported.imported, 2);
    assert_eq!(imported.skipped, 0);
}

#[test]
fn test_malformed_first_row_is_not_a_header() {
    let mut store = CategoryStore::default();
    let stats = store
        .import_custom_csv(Cursor::new("Broken,abc,1.0,Nowhere
Home,1,2,Boulder
"))
        .unwrap();

    assert_eq!(stats.imported, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(store.custom()[0].name, "Home");
}

#[rstest]
#[case("name,lat,lng,city")]
#[case("Name,Latitude,Longitude")]
#[case("site,LAT,LON")]
fn test_labelled_header_is_skipped_silently(#[case] header: &str) {
    let mut store = CategoryStore::default();
    let data = format!("{}
Home,1,2,Boulder
", header);
    let stats = store.import_custom_csv(Cursor::new(data)).unwrap();

    assert_eq!(
        stats,
        ImportStats {
            imported: 1,
            skipped: 0
        }
    );
}
