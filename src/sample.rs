//! Built-in demo data

use tabstat::{ColumnType, Value};

/// Column types of [`used_cars`]
pub const USED_CAR_TYPES: [ColumnType; 6] = [
    ColumnType::Character,
    ColumnType::Numeric,
    ColumnType::Numeric,
    ColumnType::Numeric,
    ColumnType::Character,
    ColumnType::Character,
];

/// Color groups used by the demo cross table
pub const COLOR_GROUPS: [&str; 2] = ["Black Silver White Gray", "Blue Gold Green Red Yellow"];
pub const COLOR_GROUP_NAMES: [&str; 2] = ["Simple", "Bold"];

/// Used-car listings: model, year, price, mileage, color, transmission
pub fn used_cars() -> Vec<Vec<Value>> {
    let listings: [(&str, i32, i32, i32, &str, &str); 18] = [
        ("SEL", 2011, 21992, 7413, "Yellow", "AUTO"),
        ("SEL", 2011, 20995, 10926, "Gray", "AUTO"),
        ("SEL", 2011, 19995, 7351, "Silver", "AUTO"),
        ("SE", 2011, 17809, 11613, "Gray", "AUTO"),
        ("SE", 2012, 17500, 8367, "White", "AUTO"),
        ("SE", 2010, 17495, 25125, "Silver", "MANUAL"),
        ("SE", 2010, 16995, 27393, "Blue", "AUTO"),
        ("SE", 2009, 14995, 32655, "Black", "AUTO"),
        ("SES", 2010, 14992, 36124, "Red", "AUTO"),
        ("SE", 2010, 14989, 24520, "Green", "AUTO"),
        ("SE", 2009, 13995, 35871, "Red", "MANUAL"),
        ("SE", 2008, 12999, 27330, "Black", "AUTO"),
        ("SE", 2009, 12995, 41002, "Blue", "MANUAL"),
        ("SES", 2008, 11992, 46047, "Gold", "AUTO"),
        ("SE", 2007, 10995, 38977, "Silver", "AUTO"),
        ("SE", 2007, 10000, 57003, "Black", "MANUAL"),
        ("SE", 2008, 9995, 50276, "Silver", "AUTO"),
        ("SE", 2006, 8999, 54988, "White", "MANUAL"),
    ];

    let mut rows: Vec<Vec<Value>> = vec![["model", "year", "price", "mileage", "color", "transmission"]
        .iter()
        .map(|&name| Value::from(name))
        .collect()];

    rows.extend(
        listings
            .iter()
            .map(|&(model, year, price, mileage, color, transmission)| -> Vec<Value> {
                vec![
                    model.into(),
                    year.into(),
                    price.into(),
                    mileage.into(),
                    color.into(),
                    transmission.into(),
                ]
            }),
    );

    rows
}

/// Column types of [`survey_counts`]
pub const SURVEY_TYPES: [ColumnType; 4] = [
    ColumnType::Character,
    ColumnType::Numeric,
    ColumnType::Numeric,
    ColumnType::Numeric,
];

/// Pre-aggregated counts: preferred transmission by age group
pub fn survey_counts() -> Vec<Vec<Value>> {
    vec![
        vec!["age".into(), "auto".into(), "manual".into(), "undecided".into()],
        vec!["18-29".into(), 42.into(), 31.into(), 12.into()],
        vec!["30-49".into(), 65.into(), 22.into(), 9.into()],
        vec!["50+".into(), 58.into(), 11.into(), 5.into()],
    ]
}
