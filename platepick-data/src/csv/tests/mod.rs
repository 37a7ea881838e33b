//! Unit tests for CSV import and export.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]


use platepick_core::test_support::balanced_restaurant;
use platepick_core::{
    DEFAULT_PREP_TIME, DEFAULT_SPICE_LEVEL, MemoryCatalogue, Preferences, Restaurant,
};
use rstest::{fixture, rstest};

use super::row::slugify;
use super::{
    CSV_COLUMNS, CsvError, CsvImport, CsvRow, export_csv, import_csv, row_to_restaurant,
    validate_row,
};
use crate::Recommender;

const HEADER: &str = "name,description,heaviness,portionSize,fineDining,priceLevel,spiceLevel,avgPrepTime,cuisines,neighborhood";

fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build Tokio runtime")
        .block_on(future)
}

fn import(body: &str) -> CsvImport {
    let input = format!("{HEADER}\n{body}");
    block_on(import_csv(input.as_bytes())).expect("import should read the input")
}

#[fixture]
fn row() -> CsvRow {
    CsvRow {
        name: "Pasta Palace".into(),
        heaviness: "65".into(),
        portion_size: "70".into(),
        fine_dining: "35".into(),
        price_level: "2".into(),
        ..CsvRow::default()
    }
}

#[rstest]
fn valid_row_passes(row: CsvRow) {
    assert_eq!(validate_row(&row, 0), Ok(()));
}

#[rstest]
#[case::missing_name("name", "  ", "Row 1: name is required")]
#[case::heaviness_high("heaviness", "101", "Row 1: heaviness must be 0-100")]
#[case::heaviness_text("heaviness", "heavy", "Row 1: heaviness must be 0-100")]
#[case::portion_negative("portionSize", "-1", "Row 1: portionSize must be 0-100")]
#[case::fine_dining_blank("fineDining", "", "Row 1: fineDining must be 0-100")]
#[case::price_zero("priceLevel", "0", "Row 1: priceLevel must be 1-4")]
#[case::price_five("priceLevel", "5", "Row 1: priceLevel must be 1-4")]
#[case::spice_high("spiceLevel", "150", "Row 1: spiceLevel must be 0-100")]
#[case::prep_negative("avgPrepTime", "-5", "Row 1: avgPrepTime must be a positive integer")]
#[case::prep_text("avgPrepTime", "soon", "Row 1: avgPrepTime must be a positive integer")]
fn invalid_columns_are_reported(
    mut row: CsvRow,
    #[case] column: &str,
    #[case] value: &str,
    #[case] message: &str,
) {
    let slot = match column {
        "name" => &mut row.name,
        "heaviness" => &mut row.heaviness,
        "portionSize" => &mut row.portion_size,
        "fineDining" => &mut row.fine_dining,
        "priceLevel" => &mut row.price_level,
        "spiceLevel" => &mut row.spice_level,
        "avgPrepTime" => &mut row.avg_prep_time,
        other => panic!("unexpected column {other}"),
    };
    *slot = value.to_owned();
    let error = validate_row(&row, 0).expect_err("row should be rejected");
    assert_eq!(error.row, 1);
    assert_eq!(error.message, message);
}

#[rstest]
#[case::below(-1)]
#[case::floor(0)]
#[case::ceiling(100)]
#[case::above(101)]
fn rows_and_records_share_range_rules(mut row: CsvRow, #[case] spice: i32) {
    row.spice_level = spice.to_string();
    let mut restaurant = Restaurant::new("pasta-palace", "Pasta Palace");
    restaurant.spice_level = spice;
    let record = restaurant.validate();
    let converted = row_to_restaurant(&row, 0);
    assert_eq!(converted.is_ok(), record.is_ok());
    if let Err(error) = converted {
        assert_eq!(error.message, "Row 1: spiceLevel must be 0-100");
    }
}

#[rstest]
fn blank_rows_report_the_missing_name_first() {
    let error = validate_row(&CsvRow::default(), 0).expect_err("row should be rejected");
    assert_eq!(error.message, "Row 1: name is required");
}

#[rstest]
fn row_numbers_are_one_based(mut row: CsvRow) {
    row.name.clear();
    let error = validate_row(&row, 6).expect_err("row should be rejected");
    assert_eq!(error.to_string(), "Row 7: name is required");
}

#[rstest]
fn integers_are_read_from_their_leading_digits(mut row: CsvRow) {
    row.heaviness = "42.9".into();
    row.avg_prep_time = "15 minutes".into();
    let restaurant = row_to_restaurant(&row, 0).expect("row should convert");
    assert_eq!(restaurant.heaviness, 42);
    assert_eq!(restaurant.avg_prep_time, 15);
}

#[rstest]
fn blank_optional_columns_take_defaults(row: CsvRow) {
    let restaurant = row_to_restaurant(&row, 0).expect("row should convert");
    assert_eq!(restaurant.id, "pasta-palace");
    assert_eq!(restaurant.spice_level, DEFAULT_SPICE_LEVEL);
    assert_eq!(restaurant.avg_prep_time, DEFAULT_PREP_TIME);
    assert!(restaurant.cuisines.is_empty());
    assert_eq!(restaurant.website_url, None);
    assert_eq!(restaurant.lat, None);
}

#[rstest]
fn explicit_identifier_is_kept(mut row: CsvRow) {
    row.id = "pp-01".into();
    row.lat = "41.8902".into();
    row.lng = "not a number".into();
    row.phone = " +39 06 1234 ".into();
    let restaurant = row_to_restaurant(&row, 0).expect("row should convert");
    assert_eq!(restaurant.id, "pp-01");
    assert_eq!(restaurant.lat, Some(41.8902));
    assert_eq!(restaurant.lng, None);
    assert_eq!(restaurant.phone.as_deref(), Some("+39 06 1234"));
}

#[rstest]
#[case("Pasta Palace", "pasta-palace")]
#[case("  Joe's  Diner!! ", "joe-s-diner")]
#[case("Café Über", "café-über")]
#[case("***", "")]
fn slugs_join_alphanumeric_runs(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(slugify(name), expected);
}

#[rstest]
fn punctuation_only_names_get_a_positional_id(mut row: CsvRow) {
    row.name = "***".into();
    let restaurant = row_to_restaurant(&row, 3).expect("row should convert");
    assert_eq!(restaurant.id, "restaurant-4");
}

#[rstest]
fn import_collects_rows_and_errors() {
    let result = import(
        "Sushi Zen,Fresh fish,35,45,75,3,20,25,\"[\"\"Japanese\"\",\"\"Sushi\"\"]\",Downtown\n\
         Broken,,150,50,50,2,,,,\n\
         Taco Fiesta,Street tacos,60,70,15,1,,,\"Mexican, Tacos\",Mission\n",
    );
    let names: Vec<&str> = result.restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Sushi Zen", "Taco Fiesta"]);
    assert_eq!(result.imported, 2);
    assert!(!result.success());
    let messages: Vec<&str> = result.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["Row 2: heaviness must be 0-100"]);
    let cuisines: Vec<&[String]> = result
        .restaurants
        .iter()
        .map(|r| r.cuisines.as_slice())
        .collect();
    assert_eq!(cuisines, [&["Japanese", "Sushi"][..], &["Mexican", "Tacos"][..]]);
}

#[rstest]
fn later_rows_replace_earlier_ones_with_the_same_name() {
    let result = import(
        "Noodle Bar,First,50,50,50,1,,,,\n\
         Curry House,,80,80,30,2,,,,\n\
         Noodle Bar,Second,40,60,20,2,,,,\n",
    );
    assert_eq!(result.imported, 3);
    assert!(result.success());
    let summary: Vec<(&str, &str, i32)> = result
        .restaurants
        .iter()
        .map(|r| (r.id.as_str(), r.description.as_str(), r.heaviness))
        .collect();
    assert_eq!(
        summary,
        [("noodle-bar", "Second", 40), ("curry-house", "", 80)]
    );
}

fn ids(import: &CsvImport) -> Vec<&str> {
    import.restaurants.iter().map(|r| r.id.as_str()).collect()
}

#[rstest]
fn colliding_slugs_gain_numeric_suffixes() {
    let result = import(
        "Taco Stand,,10,50,50,1,,,,\n\
         Taco-Stand!,,50,50,50,1,,,,\n\
         Taco Stand?,,50,50,50,1,,,,\n",
    );
    assert!(result.success());
    assert_eq!(ids(&result), ["taco-stand", "taco-stand-2", "taco-stand-3"]);
}

#[rstest]
fn repeated_explicit_ids_are_made_unique() {
    let input = "id,name,heaviness,portionSize,fineDining,priceLevel\n\
                 shop,Corner Shop,50,50,50,1\n\
                 shop,Deli,50,50,50,1\n\
                 shop-2,Bakery,50,50,50,1\n";
    let result = block_on(import_csv(input.as_bytes())).expect("import should read the input");
    assert_eq!(result.imported, 3);
    assert_eq!(ids(&result), ["shop", "shop-2", "shop-2-2"]);
}

#[rstest]
fn slug_collisions_rank_with_their_own_records() {
    let result = import(
        "Taco Stand,,10,50,50,1,,,,\n\
         Taco-Stand!,,50,50,50,1,,,,\n",
    );
    let recommender =
        Recommender::new(MemoryCatalogue::with_restaurants(result.restaurants));
    let ranked: Vec<(String, String, f64)> = recommender
        .rank(&Preferences::default())
        .into_iter()
        .map(|item| (item.id, item.name, item.score))
        .collect();
    assert_eq!(
        ranked,
        [
            ("taco-stand-2".to_owned(), "Taco-Stand!".to_owned(), 300.0),
            ("taco-stand".to_owned(), "Taco Stand".to_owned(), 260.0),
        ]
    );
}

#[rstest]
fn empty_lines_are_skipped_and_fields_trimmed() {
    let result = import("\n  Pho 88 , Broth ,30,60,10,1,,,,\n\n");
    assert!(result.success());
    let restaurant = result.restaurants.first().expect("one restaurant");
    assert_eq!(restaurant.name, "Pho 88");
    assert_eq!(restaurant.description, "Broth");
}

#[rstest]
fn header_only_input_imports_nothing() {
    let result = import("");
    assert_eq!(result, CsvImport::default());
    assert!(result.success());
}

#[rstest]
fn export_writes_header_and_rows() {
    let mut restaurant = balanced_restaurant("trattoria", "Trattoria");
    restaurant.website_url = Some("https://example.com".into());
    restaurant.lat = Some(41.9);
    let mut output = Vec::new();
    let written = block_on(export_csv([&restaurant], &mut output)).expect("export succeeds");
    assert_eq!(written, 1);
    let text = String::from_utf8(output).expect("utf8 output");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_COLUMNS.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some("trattoria,Trattoria,,50,50,50,2,50,30,\"[\"\"Italian\"\"]\",,https://example.com,,,,41.9,,")
    );
    assert_eq!(lines.next(), None);
}

#[rstest]
fn export_of_nothing_still_writes_the_header() {
    let mut output = Vec::new();
    let written =
        block_on(export_csv(std::iter::empty::<&Restaurant>(), &mut output)).expect("export");
    assert_eq!(written, 0);
    assert_eq!(
        String::from_utf8(output).expect("utf8 output"),
        format!("{}\n", CSV_COLUMNS.join(","))
    );
}

#[rstest]
fn exported_catalogue_reimports_unchanged() {
    let mut ramen = Restaurant::new("ramen-ya", "Ramen Ya");
    ramen.heaviness = 75;
    ramen.price_level = 2;
    ramen.cuisines = vec!["Japanese".into(), "Ramen".into()];
    ramen.open_hours = Some("11:00-22:00".into());
    ramen.lng = Some(-87.6298);
    let catalogue = vec![balanced_restaurant("trattoria", "Trattoria"), ramen];

    let mut output = Vec::new();
    block_on(export_csv(&catalogue, &mut output)).expect("export succeeds");
    let result = block_on(import_csv(output.as_slice())).expect("import succeeds");

    assert!(result.success());
    assert_eq!(result.restaurants, catalogue);
}

#[rstest]
fn write_failures_surface_as_errors() {
    struct Refusing;

    impl tokio::io::AsyncWrite for Refusing {
        fn poll_write(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
            _buf: &[u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::task::Poll::Ready(Err(std::io::Error::other("disk full")))
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Err(std::io::Error::other("disk full")))
        }

        fn poll_shutdown(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    let restaurant = balanced_restaurant("trattoria", "Trattoria");
    let result = block_on(export_csv([&restaurant], Refusing));
    assert!(matches!(
        result,
        Err(CsvError::Write { .. } | CsvError::Flush { .. })
    ));
}
